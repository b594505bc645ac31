//! Animated blob canvas
//!
//! Draws one [`BubbleFrame`] per redraw using iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It holds no clock of its own: the caller passes the elapsed time and the
//! frame is sampled from it on every draw.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Length, Point, Renderer, Theme, mouse};

use crate::features::blob::{BlobLayer, Bubble, BubbleFrame, Point2, Segment, SmoothPath};
use crate::ui::theme;

/// Base radius of a particle dot before its pulse scale
const PARTICLE_RADIUS: f32 = 1.5;

/// Alpha of every filled layer
const FILL_ALPHA: f32 = 0.9;

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Point::new(p.x as f32, p.y as f32)
    }
}

/// How the layers are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerPaint {
    /// Stroke each layer with the outline color
    #[default]
    Stroke,
    /// Fill each layer with the radial palette
    Fill,
}

/// Fill color of each layer, outermost first
///
/// Colors follow the layer's depth in the stack: the outermost layer takes
/// the edge stop and the innermost the center stop. Every layer is painted
/// at [`FILL_ALPHA`] so the inner layers cover the outer ones.
pub fn fill_colors(layers: &[BlobLayer]) -> Vec<Color> {
    let (Some(outer), Some(inner)) = (layers.first(), layers.last()) else {
        return Vec::new();
    };
    let span = outer.scale - inner.scale;

    layers
        .iter()
        .map(|layer| {
            let position = if span > 0.0 {
                (layer.scale - inner.scale) / span
            } else {
                0.0
            };
            theme::with_alpha(theme::fill_at(position as f32), FILL_ALPHA)
        })
        .collect()
}

/// Convert a blob outline into a canvas path
pub fn to_canvas_path(path: &SmoothPath) -> Path {
    Path::new(|builder| {
        if path.is_empty() {
            return;
        }
        builder.move_to(path.start().into());
        for segment in path.segments() {
            match *segment {
                Segment::Cubic {
                    control_a,
                    control_b,
                    to,
                } => builder.bezier_curve_to(control_a.into(), control_b.into(), to.into()),
                Segment::Quadratic { control, to } => {
                    builder.quadratic_curve_to(control.into(), to.into())
                }
            }
        }
        builder.close();
    })
}

/// Blob canvas configuration
#[derive(Debug, Clone, Copy)]
pub struct BlobCanvas<'a> {
    pub bubble: &'a Bubble,
    /// Seconds since the animation started
    pub time: f64,
    pub paint: LayerPaint,
    pub stroke_width: f32,
}

impl<'a> BlobCanvas<'a> {
    pub fn new(bubble: &'a Bubble, time: f64) -> Self {
        Self {
            bubble,
            time,
            paint: LayerPaint::default(),
            stroke_width: 2.0,
        }
    }

    pub fn paint(mut self, paint: LayerPaint) -> Self {
        self.paint = paint;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Sample the bubble for a canvas of the given bounds
    pub fn sample(&self, bounds: iced::Rectangle) -> BubbleFrame {
        let center = Point2::new(f64::from(bounds.width) / 2.0, f64::from(bounds.height) / 2.0);
        let radius = self
            .bubble
            .fitted_radius(f64::from(bounds.width), f64::from(bounds.height));
        self.bubble.frame_with_radius(self.time, center, radius)
    }

    fn draw_layers(&self, frame: &mut Frame, sample: &BubbleFrame, theme: &Theme) {
        match self.paint {
            LayerPaint::Stroke => {
                let outline = theme::outline(theme);
                for layer in &sample.layers {
                    frame.stroke(
                        &to_canvas_path(&layer.path),
                        Stroke::default()
                            .with_width(self.stroke_width)
                            .with_color(theme::with_alpha(outline, layer.opacity)),
                    );
                }
            }
            LayerPaint::Fill => {
                for (layer, color) in sample.layers.iter().zip(fill_colors(&sample.layers)) {
                    frame.fill(&to_canvas_path(&layer.path), color);
                }
            }
        }
    }

    fn draw_particles(&self, frame: &mut Frame, sample: &BubbleFrame, color: Color) {
        for particle in &sample.particles {
            let dot = Path::circle(particle.position.into(), PARTICLE_RADIUS * particle.scale as f32);
            frame.fill(&dot, theme::with_alpha(color, particle.opacity));
        }
    }
}

impl<Message> Program<Message> for BlobCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let sample = self.sample(bounds);

        if sample.is_empty() {
            return vec![frame.into_geometry()];
        }

        self.draw_layers(&mut frame, &sample, theme);
        self.draw_particles(&mut frame, &sample, theme::particle(theme));

        vec![frame.into_geometry()]
    }
}

/// Create a blob canvas element filling the available space
pub fn view_blob<'a, Message: 'a>(canvas: BlobCanvas<'a>) -> Element<'a, Message> {
    Canvas::new(canvas)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::blob::{EdgeParticles, InterpolationStyle, LayerStack, ProfileSource};

    fn bubble() -> Bubble {
        Bubble {
            source: ProfileSource::Oscillating {
                phase_offsets: (0..7).map(f64::from).collect(),
                frequencies: vec![1.0; 7],
                amplitude: 0.03,
                speed: 1.0,
            },
            style: InterpolationStyle::CatmullRom,
            base_radius: 150.0,
            layers: LayerStack::stepped(6, 0.4, 0.1),
            particles: EdgeParticles::default(),
        }
    }

    /// Source-over blend of `colors` onto `backdrop`, in draw order
    fn composite(backdrop: Color, colors: &[Color]) -> Color {
        colors.iter().fold(backdrop, |below, c| Color {
            r: c.r * c.a + below.r * (1.0 - c.a),
            g: c.g * c.a + below.g * (1.0 - c.a),
            b: c.b * c.a + below.b * (1.0 - c.a),
            a: 1.0,
        })
    }

    fn age_layers() -> Vec<BlobLayer> {
        let settings = crate::features::BubbleSettings {
            variant: crate::features::BubbleVariant::Age,
            ..Default::default()
        };
        let bubble = settings.to_bubble();
        let bounds = iced::Rectangle::new(Point::ORIGIN, iced::Size::new(400.0, 400.0));
        BlobCanvas::new(&bubble, 1.0).sample(bounds).layers
    }

    #[test]
    fn test_point_conversion() {
        let p: Point = Point2::new(1.5, -2.25).into();
        assert_eq!(p, Point::new(1.5, -2.25));
    }

    #[test]
    fn test_fill_runs_from_edge_to_center() {
        let layers = age_layers();
        let colors = fill_colors(&layers);
        assert_eq!(colors.len(), layers.len());

        let edge = colors[0];
        let center = colors[colors.len() - 1];
        assert_eq!(Color { a: 1.0, ..edge }, theme::FILL_STOPS[3]);
        assert_eq!(Color { a: 1.0, ..center }, theme::FILL_STOPS[0]);
        assert!(colors.iter().all(|c| c.a == FILL_ALPHA));
    }

    #[test]
    fn test_filled_center_is_green() {
        let colors = fill_colors(&age_layers());
        let center = composite(Color::BLACK, &colors);
        assert!(center.g > 0.5, "center green {}", center.g);
        assert!(center.g > center.b);
        assert!(center.g > center.r);
    }

    #[test]
    fn test_fill_colors_edge_cases() {
        assert!(fill_colors(&[]).is_empty());

        let single = vec![BlobLayer {
            path: SmoothPath::default(),
            scale: 1.0,
            opacity: 1.0,
        }];
        let colors = fill_colors(&single);
        assert_eq!(Color { a: 1.0, ..colors[0] }, theme::FILL_STOPS[0]);
    }

    #[test]
    fn test_sample_fits_bounds() {
        let bubble = bubble();
        let canvas = BlobCanvas::new(&bubble, 0.8);
        let bounds = iced::Rectangle::new(Point::ORIGIN, iced::Size::new(200.0, 400.0));
        let sample = canvas.sample(bounds);

        assert_eq!(sample.layers.len(), 6);
        let center = Point2::new(100.0, 200.0);
        for p in sample.outline.sample(8) {
            assert!(p.distance(center) <= 101.0);
        }
    }

    #[test]
    fn test_builder_options() {
        let bubble = bubble();
        let canvas = BlobCanvas::new(&bubble, 0.0)
            .paint(LayerPaint::Fill)
            .stroke_width(3.0);
        assert_eq!(canvas.paint, LayerPaint::Fill);
        assert_eq!(canvas.stroke_width, 3.0);
    }
}
