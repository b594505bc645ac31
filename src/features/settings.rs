//! Bubble settings persistence
//!
//! Handles saving and loading the visual parameters of the blob.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::blob::{
    Bubble, EdgeParticles, InterpolationStyle, LayerStack, MorphProfile, ProfileSource,
};

/// Largest amplitude accepted before the outline risks folding over itself
pub const MAX_AMPLITUDE: f64 = 0.5;

/// Which bubble to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BubbleVariant {
    /// Sine-driven outline with a stroked glow
    #[default]
    BioAge,
    /// Randomly morphing filled blob with edge particles
    Age,
}

impl std::fmt::Display for BubbleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BubbleVariant::BioAge => write!(f, "Bio Age"),
            BubbleVariant::Age => write!(f, "Age"),
        }
    }
}

/// Glow layer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    /// Number of concentric copies
    pub count: usize,
    /// Scale of the innermost copy
    pub inner_scale: f64,
    /// Opacity of the innermost copy
    pub min_opacity: f32,
}

/// Random morph settings (age bubble)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphSettings {
    pub vertices: usize,
    /// Offset bound as a fraction of the base radius
    pub max_offset: f64,
    /// Seconds between keyframes
    pub period: f64,
    pub seed: u64,
}

/// Edge particle settings (age bubble)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
    pub count: usize,
    pub seed: u64,
}

/// Bubble settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleSettings {
    pub variant: BubbleVariant,
    /// Interpolation for the bio-age outline (the age bubble always uses
    /// quadratic midpoints)
    pub style: InterpolationStyle,
    /// Oscillation amplitude as a fraction of the base radius
    pub amplitude: f64,
    /// Animation speed multiplier (higher is faster)
    pub speed: f64,
    /// Base radius in logical pixels
    pub base_radius: f64,
    pub phase_offsets: Vec<f64>,
    pub frequencies: Vec<f64>,
    pub layers: LayerSettings,
    pub morph: MorphSettings,
    pub particles: ParticleSettings,
    pub stroke_width: f32,
    /// Stop requesting frames; the bubble is drawn at `t = 0`
    pub power_saving: bool,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            count: 6,
            inner_scale: 0.4,
            min_opacity: 0.1,
        }
    }
}

impl Default for MorphSettings {
    fn default() -> Self {
        let morph = MorphProfile::default();
        Self {
            vertices: morph.vertices,
            max_offset: morph.max_offset,
            period: morph.period,
            seed: morph.seed,
        }
    }
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self { count: 30, seed: 0 }
    }
}

impl Default for BubbleSettings {
    fn default() -> Self {
        Self {
            variant: BubbleVariant::BioAge,
            style: InterpolationStyle::CatmullRom,
            amplitude: 0.03,
            speed: 1.0,
            base_radius: 150.0,
            phase_offsets: vec![0.0, 1.2, 2.5, 0.8, 3.1, 1.7, 2.9],
            frequencies: vec![1.0, 1.3, 0.9, 1.1, 0.85, 1.15, 0.95],
            layers: LayerSettings::default(),
            morph: MorphSettings::default(),
            particles: ParticleSettings::default(),
            stroke_width: 2.0,
            power_saving: false,
        }
    }
}

impl BubbleSettings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "biobubble", "Biobubble")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Whether a settings file has been written yet
    pub fn exists() -> bool {
        Self::file_path().is_some_and(|path| path.exists())
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(Self::file_path())
    }

    /// Save settings to `path`, failing when no location is known
    fn save_to(&self, path: Option<PathBuf>) -> Result<(), SettingsError> {
        if let Some(path) = path {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Clamp values the generator cannot draw sensibly
    ///
    /// Phase/frequency arrays of different lengths are left alone: the
    /// generator already draws nothing for them.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.amplitude = self.amplitude.abs().min(MAX_AMPLITUDE);
        if !(self.speed.is_finite() && self.speed > 0.0) {
            self.speed = defaults.speed;
        }
        if !(self.base_radius.is_finite() && self.base_radius > 0.0) {
            self.base_radius = defaults.base_radius;
        }
        self.layers.count = self.layers.count.max(1);
        self.layers.inner_scale = self.layers.inner_scale.clamp(0.0, 1.0);
        self.layers.min_opacity = self.layers.min_opacity.clamp(0.0, 1.0);
        self.morph.max_offset = self.morph.max_offset.abs().min(MAX_AMPLITUDE);
        if !(self.morph.period.is_finite() && self.morph.period > 0.0) {
            self.morph.period = defaults.morph.period;
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            self.stroke_width = defaults.stroke_width;
        }
        self
    }

    /// Build the blob generator for the selected variant
    pub fn to_bubble(&self) -> Bubble {
        let layers = LayerStack::stepped(
            self.layers.count,
            self.layers.inner_scale,
            self.layers.min_opacity,
        );

        match self.variant {
            BubbleVariant::BioAge => {
                if self.phase_offsets.len() != self.frequencies.len() {
                    tracing::warn!(
                        phases = self.phase_offsets.len(),
                        frequencies = self.frequencies.len(),
                        "Phase offsets and frequencies differ in length, bubble will not be drawn"
                    );
                }
                let source = ProfileSource::Oscillating {
                    phase_offsets: self.phase_offsets.clone(),
                    frequencies: self.frequencies.clone(),
                    amplitude: self.amplitude,
                    speed: self.speed,
                };
                Bubble {
                    source,
                    style: self.style,
                    base_radius: self.base_radius,
                    layers,
                    particles: EdgeParticles::default(),
                }
            }
            BubbleVariant::Age => Bubble {
                source: ProfileSource::Morph(MorphProfile {
                    vertices: self.morph.vertices,
                    max_offset: self.morph.max_offset,
                    period: self.morph.period,
                    seed: self.morph.seed,
                }),
                style: InterpolationStyle::QuadraticMidpoint,
                base_radius: self.base_radius,
                layers,
                particles: EdgeParticles::new(self.particles.count, self.particles.seed),
            },
        }
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("biobubble-test-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_defaults_match_bio_age_bubble() {
        let settings = BubbleSettings::default();
        assert_eq!(settings.variant, BubbleVariant::BioAge);
        assert_eq!(settings.amplitude, 0.03);
        assert_eq!(settings.base_radius, 150.0);
        assert_eq!(settings.phase_offsets.len(), 7);
        assert_eq!(settings.frequencies.len(), 7);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = temp_settings_path("save-load");
        let settings = BubbleSettings {
            variant: BubbleVariant::Age,
            speed: 2.5,
            ..Default::default()
        };
        settings.save_to_file(&path).unwrap();

        let loaded = BubbleSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.variant, BubbleVariant::Age);
        assert_eq!(loaded.speed, 2.5);
        assert_eq!(loaded.phase_offsets, settings.phase_offsets);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_to_known_location() {
        let path = temp_settings_path("save-to");
        let settings = BubbleSettings {
            amplitude: 0.07,
            ..Default::default()
        };
        settings.save_to(Some(path.clone())).unwrap();
        assert_eq!(BubbleSettings::load_from_file(&path).unwrap().amplitude, 0.07);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_save_without_config_dir_is_io_error() {
        assert!(matches!(
            BubbleSettings::default().save_to(None),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_default_file_path_is_settings_json() {
        match BubbleSettings::file_path() {
            Some(path) => assert!(path.ends_with("settings.json")),
            None => assert!(matches!(
                BubbleSettings::default().save(),
                Err(SettingsError::Io(_))
            )),
        }
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let loaded: BubbleSettings =
            serde_json::from_str(r#"{ "variant": "age", "layers": { "count": 3 } }"#).unwrap();
        assert_eq!(loaded.variant, BubbleVariant::Age);
        assert_eq!(loaded.layers.count, 3);
        assert_eq!(loaded.layers.inner_scale, 0.4);
        assert_eq!(loaded.amplitude, 0.03);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            BubbleSettings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let path = temp_settings_path("invalid");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            BubbleSettings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_sanitized_clamps_out_of_contract_values() {
        let settings = BubbleSettings {
            amplitude: 1.5,
            speed: -1.0,
            base_radius: 0.0,
            stroke_width: f32::NAN,
            layers: LayerSettings {
                count: 0,
                inner_scale: 2.0,
                min_opacity: -1.0,
            },
            ..Default::default()
        }
        .sanitized();

        assert_eq!(settings.amplitude, MAX_AMPLITUDE);
        assert_eq!(settings.speed, 1.0);
        assert_eq!(settings.base_radius, 150.0);
        assert_eq!(settings.stroke_width, 2.0);
        assert_eq!(settings.layers.count, 1);
        assert_eq!(settings.layers.inner_scale, 1.0);
        assert_eq!(settings.layers.min_opacity, 0.0);
    }

    #[test]
    fn test_to_bubble_per_variant() {
        let bio = BubbleSettings::default().to_bubble();
        assert!(matches!(
            bio.source,
            ProfileSource::Oscillating { ref phase_offsets, .. } if phase_offsets.len() == 7
        ));
        assert_eq!(bio.style, InterpolationStyle::CatmullRom);
        assert!(bio.particles.particles().is_empty());
        assert_eq!(bio.layers.styles().len(), 6);

        let age = BubbleSettings {
            variant: BubbleVariant::Age,
            ..Default::default()
        }
        .to_bubble();
        assert!(matches!(age.source, ProfileSource::Morph(_)));
        assert_eq!(age.style, InterpolationStyle::QuadraticMidpoint);
        assert_eq!(age.particles.particles().len(), 30);
    }

    #[test]
    fn test_mismatched_arrays_draw_nothing() {
        let settings = BubbleSettings {
            frequencies: vec![1.0, 1.0, 1.0],
            ..Default::default()
        };
        let frame = settings
            .to_bubble()
            .frame(0.0, crate::features::blob::Point2::ORIGIN);
        assert!(frame.is_empty());
    }
}
