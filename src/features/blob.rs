//! Organic blob generator
//!
//! Turns a cyclic radius profile into a smooth closed outline, re-sampled on
//! every frame from the host clock.
//!
//! ## Pipeline
//!
//! 1. Radius profile: sinusoidal per-vertex oscillation or keyframed morph
//! 2. Points: one per vertex, evenly spaced in angle around the center
//! 3. Outline: closed Catmull-Rom (cubic) or mid-angle quadratic loop
//! 4. Layers: concentric scaled copies with fading opacity
//! 5. Particles: optional sparkles riding the edge
//!
//! Everything here is a pure function of `(t, configuration, geometry)`.
//! Malformed configuration draws nothing instead of failing.

pub mod geometry;
pub mod layers;
pub mod morph;
pub mod particles;
pub mod path;
pub mod radii;

pub use geometry::Point2;
pub use layers::{BlobLayer, LayerStack, build_layers};
pub use morph::MorphProfile;
pub use particles::{EdgeParticles, ParticleFrame};
pub use path::{InterpolationStyle, Segment, SmoothPath, build_blob_path};
pub use radii::{RadiusProfile, compute_radii};

/// Source of the per-frame radius profile
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
    /// Per-vertex sine waves
    Oscillating {
        phase_offsets: Vec<f64>,
        frequencies: Vec<f64>,
        amplitude: f64,
        speed: f64,
    },
    /// Eased random keyframes
    Morph(MorphProfile),
}

impl ProfileSource {
    /// Radius profile at time `t`
    pub fn sample(&self, t: f64) -> RadiusProfile {
        match self {
            ProfileSource::Oscillating {
                phase_offsets,
                frequencies,
                amplitude,
                speed,
            } => RadiusProfile::new(compute_radii(
                t,
                phase_offsets,
                frequencies,
                *amplitude,
                *speed,
            )),
            ProfileSource::Morph(morph) => RadiusProfile::new(morph.radii_at(t)),
        }
    }

    /// Largest multiplier this source can produce
    pub fn max_multiplier(&self) -> f64 {
        match self {
            ProfileSource::Oscillating { amplitude, .. } => 1.0 + amplitude.abs(),
            ProfileSource::Morph(morph) => 1.0 + morph.max_offset.abs(),
        }
    }
}

/// Geometry of one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BubbleFrame {
    pub outline: SmoothPath,
    /// Outermost layer first
    pub layers: Vec<BlobLayer>,
    pub particles: Vec<ParticleFrame>,
}

impl BubbleFrame {
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}

/// A fully configured blob
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub source: ProfileSource,
    pub style: InterpolationStyle,
    pub base_radius: f64,
    pub layers: LayerStack,
    pub particles: EdgeParticles,
}

impl Bubble {
    /// Sample the blob at time `t` around `center`
    #[cfg(test)]
    pub fn frame(&self, t: f64, center: Point2) -> BubbleFrame {
        self.frame_with_radius(t, center, self.base_radius)
    }

    /// Same as [`Bubble::frame`] with an explicit base radius
    pub fn frame_with_radius(&self, t: f64, center: Point2, base_radius: f64) -> BubbleFrame {
        let profile = self.source.sample(t);
        let outline = build_blob_path(self.style, center, base_radius, profile.as_slice());
        if outline.is_empty() {
            return BubbleFrame::default();
        }

        BubbleFrame {
            layers: build_layers(&outline, center, &self.layers),
            particles: self.particles.sample(t, &profile, center, base_radius),
            outline,
        }
    }

    /// Base radius that keeps the whole blob inside a `width x height` box
    pub fn fitted_radius(&self, width: f64, height: f64) -> f64 {
        let limit = width.min(height) / 2.0 / self.source.max_multiplier();
        self.base_radius.min(limit).max(0.0)
    }
}
