//! Theme for the bubble window
//! Dark backdrop with green/blue bubble palette

use iced::color;
use iced::widget::container;
use iced::{Background, Color, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const OUTLINE: Color = color!(0x00ff00);
    pub const PARTICLE: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const OUTLINE: Color = color!(0x008000);
    pub const PARTICLE: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Outline stroke color for the bio-age bubble
pub fn outline(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::OUTLINE
    } else {
        light::OUTLINE
    }
}

/// Edge particle color
pub fn particle(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PARTICLE
    } else {
        light::PARTICLE
    }
}

/// Radial fill stops for the age bubble, center to edge
pub const FILL_STOPS: [Color; 4] = [
    color!(0x00ff00),
    color!(0x0000ff),
    color!(0x003300),
    color!(0x000000),
];

/// Fill color at `position` along the radius (0.0 = center, 1.0 = edge)
pub fn fill_at(position: f32) -> Color {
    let position = position.clamp(0.0, 1.0) * (FILL_STOPS.len() - 1) as f32;
    let index = (position.floor() as usize).min(FILL_STOPS.len() - 2);
    let t = position - index as f32;

    let from = FILL_STOPS[index];
    let to = FILL_STOPS[index + 1];
    Color::from_rgb(
        from.r + (to.r - from.r) * t,
        from.g + (to.g - from.g) * t,
        from.b + (to.b - from.b) * t,
    )
}

/// Same color with the given alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Window background behind the bubble
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_endpoints() {
        assert_eq!(fill_at(0.0), FILL_STOPS[0]);
        assert_eq!(fill_at(1.0), FILL_STOPS[3]);
        assert_eq!(fill_at(-3.0), FILL_STOPS[0]);
    }

    #[test]
    fn test_fill_midway_between_stops() {
        let c = fill_at(1.0 / 6.0);
        assert!((c.g - 0.5).abs() < 1e-5);
        assert!((c.b - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(with_alpha(Color::WHITE, 2.0).a, 1.0);
        assert_eq!(with_alpha(Color::WHITE, 0.25).a, 0.25);
    }
}
