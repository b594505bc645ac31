//! Smooth closed paths through the blob vertices
//!
//! ## Catmull-Rom segments
//!
//! For every vertex `i` (indices wrap modulo `N`) the window
//! `(p[i-1], p[i], p[i+1], p[i+2])` yields one cubic Bézier segment
//! `p[i] -> p[i+1]`:
//!
//! ```text
//! c1 = p[i]   + (p[i+1] - p[i-1]) / 6
//! c2 = p[i+1] - (p[i+2] - p[i])   / 6
//! ```
//!
//! Neighbouring segments share the tangent at each vertex, so the loop is
//! C1-continuous.
//!
//! ## Quadratic midpoint segments
//!
//! The alternate style places one control point per edge at the mid-angle,
//! on the mean radius of the two endpoints. Cheaper, but only C0 at vertices.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::geometry::Point2;
use super::radii::MIN_VERTICES;

/// How consecutive vertices are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationStyle {
    /// Cubic segments with Catmull-Rom tangents
    #[default]
    CatmullRom,
    /// Quadratic segments with a control point at each edge's mid-angle
    QuadraticMidpoint,
}

impl std::fmt::Display for InterpolationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpolationStyle::CatmullRom => write!(f, "Catmull-Rom"),
            InterpolationStyle::QuadraticMidpoint => write!(f, "Quadratic midpoint"),
        }
    }
}

/// One curve segment; the start is the previous segment's end
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Cubic {
        control_a: Point2,
        control_b: Point2,
        to: Point2,
    },
    Quadratic {
        control: Point2,
        to: Point2,
    },
}

impl Segment {
    /// End point of the segment
    #[cfg(test)]
    pub fn to(&self) -> Point2 {
        match self {
            Segment::Cubic { to, .. } | Segment::Quadratic { to, .. } => *to,
        }
    }

    /// Evaluate the curve at parameter `t` in `[0, 1]`
    #[cfg(test)]
    pub fn evaluate(&self, from: Point2, t: f64) -> Point2 {
        let u = 1.0 - t;
        match *self {
            Segment::Cubic {
                control_a,
                control_b,
                to,
            } => {
                from * (u * u * u)
                    + control_a * (3.0 * u * u * t)
                    + control_b * (3.0 * u * t * t)
                    + to * (t * t * t)
            }
            Segment::Quadratic { control, to } => {
                from * (u * u) + control * (2.0 * u * t) + to * (t * t)
            }
        }
    }

    fn map(self, f: impl Fn(Point2) -> Point2) -> Self {
        match self {
            Segment::Cubic {
                control_a,
                control_b,
                to,
            } => Segment::Cubic {
                control_a: f(control_a),
                control_b: f(control_b),
                to: f(to),
            },
            Segment::Quadratic { control, to } => Segment::Quadratic {
                control: f(control),
                to: f(to),
            },
        }
    }
}

/// Closed curve made of Bézier segments
///
/// An empty path (no segments) is the fail-soft result for malformed input
/// and draws nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmoothPath {
    start: Point2,
    segments: Vec<Segment>,
}

impl SmoothPath {
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Where the last segment ends (the start point for a closed path)
    #[cfg(test)]
    pub fn end(&self) -> Point2 {
        self.segments.last().map(Segment::to).unwrap_or(self.start)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[cfg(test)]
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.end().approx_eq(self.start, 1e-9)
    }

    /// Iterate over `(from, segment)` pairs
    #[cfg(test)]
    pub fn iter_segments(&self) -> impl Iterator<Item = (Point2, &Segment)> {
        let starts = std::iter::once(self.start).chain(self.segments.iter().map(Segment::to));
        starts.zip(self.segments.iter())
    }

    /// Evaluate every segment at `steps` evenly spaced parameters
    #[cfg(test)]
    pub fn sample(&self, steps: usize) -> Vec<Point2> {
        let steps = steps.max(1);
        self.iter_segments()
            .flat_map(|(from, segment)| {
                (0..steps).map(move |k| segment.evaluate(from, k as f64 / steps as f64))
            })
            .collect()
    }

    /// Uniformly scaled copy about `center`
    pub fn scaled(&self, scale: f64, center: Point2) -> Self {
        let f = |p: Point2| p.scale_about(center, scale);
        Self {
            start: f(self.start),
            segments: self.segments.iter().map(|s| s.map(f)).collect(),
        }
    }
}

/// Place one point per radius, evenly spaced in angle starting at 0
pub fn build_points(center: Point2, base_radius: f64, radii: &[f64]) -> Vec<Point2> {
    let count = radii.len() as f64;
    radii
        .iter()
        .enumerate()
        .map(|(i, r)| Point2::polar(center, base_radius * r, TAU * i as f64 / count))
        .collect()
}

/// Closed Catmull-Rom loop through `points`
pub fn build_smooth_closed_path(points: &[Point2]) -> SmoothPath {
    let n = points.len();
    if n < MIN_VERTICES {
        tracing::trace!(points = n, "Too few points for a closed path");
        return SmoothPath::default();
    }

    let segments = (0..n)
        .map(|i| {
            let p0 = points[(i + n - 1) % n];
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            let p3 = points[(i + 2) % n];

            Segment::Cubic {
                control_a: p1 + (p2 - p0) / 6.0,
                control_b: p2 - (p3 - p1) / 6.0,
                to: p2,
            }
        })
        .collect();

    SmoothPath {
        start: points[0],
        segments,
    }
}

/// Closed loop of quadratic segments with mid-angle control points
pub fn build_quadratic_closed_path(center: Point2, base_radius: f64, radii: &[f64]) -> SmoothPath {
    let n = radii.len();
    if n < MIN_VERTICES {
        tracing::trace!(points = n, "Too few points for a closed path");
        return SmoothPath::default();
    }

    let step = TAU / n as f64;
    let points = build_points(center, base_radius, radii);

    let segments = (1..=n)
        .map(|i| {
            let mid_angle = (i as f64 - 0.5) * step;
            let mid_radius = base_radius * (radii[i - 1] + radii[i % n]) / 2.0;
            Segment::Quadratic {
                control: Point2::polar(center, mid_radius, mid_angle),
                to: points[i % n],
            }
        })
        .collect();

    SmoothPath {
        start: points[0],
        segments,
    }
}

/// Build the closed blob outline for a radius profile
pub fn build_blob_path(
    style: InterpolationStyle,
    center: Point2,
    base_radius: f64,
    radii: &[f64],
) -> SmoothPath {
    match style {
        InterpolationStyle::CatmullRom => {
            build_smooth_closed_path(&build_points(center, base_radius, radii))
        }
        InterpolationStyle::QuadraticMidpoint => {
            build_quadratic_closed_path(center, base_radius, radii)
        }
    }
}

/// Similarity transform about `center`: translate, scale, translate back
pub fn scale_path(path: &SmoothPath, scale: f64, center: Point2) -> SmoothPath {
    path.scaled(scale, center)
}
