//! Radius profiles
//!
//! A radius profile is the per-vertex multiplier sequence that gives the blob
//! its instantaneous silhouette. Profiles are cyclic: index `N` is index `0`.
//!
//! ## Oscillation
//!
//! ```text
//! radius_multiplier(i, t) = 1 + amplitude * sin(t * speed * frequency[i] + phase_offset[i])
//! ```
//!
//! `amplitude` has to stay well below 1 so the curve remains star-shaped
//! around the center.

use std::f64::consts::TAU;

/// Smallest vertex count that produces a closed curve
pub const MIN_VERTICES: usize = 3;

/// Per-vertex oscillation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexPhase {
    /// Phase offset in radians
    pub phase_offset: f64,
    /// Relative frequency of this vertex
    pub frequency: f64,
}

impl VertexPhase {
    pub const fn new(phase_offset: f64, frequency: f64) -> Self {
        Self {
            phase_offset,
            frequency,
        }
    }

    /// Multiplier for this vertex at time `t`
    pub fn multiplier(&self, t: f64, amplitude: f64, speed: f64) -> f64 {
        1.0 + amplitude * (t * speed * self.frequency + self.phase_offset).sin()
    }

    /// Time after which this vertex repeats its motion
    #[cfg(test)]
    pub fn period(&self, speed: f64) -> f64 {
        TAU / (speed * self.frequency)
    }
}

/// Compute the per-vertex multipliers at time `t`
///
/// Returns an empty vector when the arrays differ in length or hold fewer
/// than [`MIN_VERTICES`] entries.
pub fn compute_radii(
    t: f64,
    phase_offsets: &[f64],
    frequencies: &[f64],
    amplitude: f64,
    speed: f64,
) -> Vec<f64> {
    if phase_offsets.len() != frequencies.len() || phase_offsets.len() < MIN_VERTICES {
        tracing::trace!(
            phases = phase_offsets.len(),
            frequencies = frequencies.len(),
            "Malformed vertex phases, dropping radius profile"
        );
        return Vec::new();
    }

    phase_offsets
        .iter()
        .zip(frequencies)
        .map(|(&phase, &frequency)| VertexPhase::new(phase, frequency).multiplier(t, amplitude, speed))
        .collect()
}

/// Ordered, cyclic sequence of radius multipliers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadiusProfile {
    radii: Vec<f64>,
}

impl RadiusProfile {
    pub fn new(radii: Vec<f64>) -> Self {
        Self { radii }
    }

    /// Whether the profile has enough vertices to form a closed curve
    pub fn is_drawable(&self) -> bool {
        self.radii.len() >= MIN_VERTICES
    }

    /// Multiplier at a cyclic index (negative indices wrap backwards)
    pub fn get(&self, index: isize) -> Option<f64> {
        if self.radii.is_empty() {
            return None;
        }
        let len = self.radii.len() as isize;
        self.radii.get(index.rem_euclid(len) as usize).copied()
    }

    /// Multiplier of the vertex whose sector contains `angle` (radians)
    pub fn at_angle(&self, angle: f64) -> Option<f64> {
        if self.radii.is_empty() {
            return None;
        }
        let turns = angle.rem_euclid(TAU) / TAU;
        let index = (turns * self.radii.len() as f64).floor() as isize;
        self.get(index)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.radii
    }
}
