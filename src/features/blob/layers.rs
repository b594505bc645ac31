//! Layer stack for the glow effect
//!
//! Concentric copies of the outline, each scaled toward the center with a
//! lower opacity. Stroked or filled back to front, they approximate a radial
//! gradient without needing gradient support from the renderer.

use super::geometry::Point2;
use super::path::{SmoothPath, scale_path};

/// One `(scale, opacity)` entry of a layer stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub scale: f64,
    pub opacity: f32,
}

/// Ordered list of layer styles, outermost first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayerStack {
    styles: Vec<LayerStyle>,
}

impl LayerStack {
    /// Evenly step scale from 1.0 down to `inner_scale` and opacity from 1.0
    /// down to `min_opacity` over `count` layers
    pub fn stepped(count: usize, inner_scale: f64, min_opacity: f32) -> Self {
        let styles = (0..count)
            .map(|k| {
                let f = if count > 1 {
                    k as f64 / (count - 1) as f64
                } else {
                    0.0
                };
                LayerStyle {
                    scale: 1.0 - f * (1.0 - inner_scale),
                    opacity: 1.0 - f as f32 * (1.0 - min_opacity),
                }
            })
            .collect();
        Self { styles }
    }

    pub fn styles(&self) -> &[LayerStyle] {
        &self.styles
    }
}

/// A scaled copy of the outline ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct BlobLayer {
    pub path: SmoothPath,
    pub scale: f64,
    pub opacity: f32,
}

/// Apply every style of `stack` to `path`
///
/// An empty base path yields no layers.
pub fn build_layers(path: &SmoothPath, center: Point2, stack: &LayerStack) -> Vec<BlobLayer> {
    if path.is_empty() {
        return Vec::new();
    }

    stack
        .styles()
        .iter()
        .map(|style| BlobLayer {
            path: scale_path(path, style.scale, center),
            scale: style.scale,
            opacity: style.opacity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::blob::path::{build_points, build_smooth_closed_path};

    #[test]
    fn test_stepped_stack_monotonic() {
        let stack = LayerStack::stepped(6, 0.4, 0.1);
        assert_eq!(stack.styles().len(), 6);

        let styles = stack.styles();
        assert_eq!(styles[0].scale, 1.0);
        assert_eq!(styles[0].opacity, 1.0);
        assert!((styles[5].scale - 0.4).abs() < 1e-12);
        assert!((styles[5].opacity - 0.1).abs() < 1e-6);

        for pair in styles.windows(2) {
            assert!(pair[1].scale < pair[0].scale);
            assert!(pair[1].opacity < pair[0].opacity);
        }
    }

    #[test]
    fn test_single_layer() {
        let stack = LayerStack::stepped(1, 0.4, 0.1);
        assert_eq!(
            stack.styles(),
            &[LayerStyle {
                scale: 1.0,
                opacity: 1.0
            }]
        );
        assert!(LayerStack::stepped(0, 0.5, 0.5).styles().is_empty());
    }

    #[test]
    fn test_layers_follow_stack() {
        let center = Point2::new(200.0, 200.0);
        let path = build_smooth_closed_path(&build_points(center, 150.0, &[1.0; 7]));
        let stack = LayerStack::stepped(4, 0.5, 0.2);
        let layers = build_layers(&path, center, &stack);

        assert_eq!(layers.len(), 4);
        for (layer, style) in layers.iter().zip(stack.styles()) {
            assert_eq!(layer.scale, style.scale);
            assert_eq!(layer.opacity, style.opacity);
            assert!(layer.path.is_closed());
            let expected = path.start().scale_about(center, style.scale);
            assert!(layer.path.start().approx_eq(expected, 1e-9));
        }
    }

    #[test]
    fn test_empty_path_has_no_layers() {
        let stack = LayerStack::stepped(5, 0.4, 0.1);
        assert!(build_layers(&SmoothPath::default(), Point2::ORIGIN, &stack).is_empty());
    }
}
