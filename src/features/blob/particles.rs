//! Sparkles orbiting the blob edge
//!
//! Every particle gets fixed random parameters once at construction; its
//! state at time `t` is then a closed-form function of those parameters.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::geometry::Point2;
use super::radii::RadiusProfile;

const ORBIT_PERIOD: (f64, f64) = (8.0, 12.0);
const TWINKLE_PERIOD: (f64, f64) = (0.5, 1.5);
const PULSE_PERIOD: (f64, f64) = (0.8, 1.8);
const OPACITY_RANGE: (f32, f32) = (0.3, 1.0);
const SCALE_RANGE: (f64, f64) = (0.5, 1.5);

/// Oscillate between `lo` and `hi` with the given period and phase
fn oscillate(t: f64, period: f64, phase: f64, lo: f64, hi: f64) -> f64 {
    let mid = (lo + hi) / 2.0;
    let half = (hi - lo) / 2.0;
    mid + half * (TAU * t / period + phase).sin()
}

/// Fixed parameters of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Angle at `t = 0` in radians
    pub start_angle: f64,
    /// Seconds per full orbit
    pub orbit_period: f64,
    pub twinkle_period: f64,
    pub pulse_period: f64,
    /// Phase shared by the twinkle and pulse oscillations
    pub phase: f64,
}

/// Particle state for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub position: Point2,
    pub opacity: f32,
    pub scale: f64,
}

/// Ring of particles spread evenly around the edge
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeParticles {
    particles: Vec<Particle>,
}

impl EdgeParticles {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let spacing = if count > 0 { TAU / count as f64 } else { 0.0 };

        let particles = (0..count)
            .map(|i| Particle {
                start_angle: i as f64 * spacing + rng.random_range(0.0..TAU),
                orbit_period: rng.random_range(ORBIT_PERIOD.0..=ORBIT_PERIOD.1),
                twinkle_period: rng.random_range(TWINKLE_PERIOD.0..=TWINKLE_PERIOD.1),
                pulse_period: rng.random_range(PULSE_PERIOD.0..=PULSE_PERIOD.1),
                phase: rng.random_range(0.0..TAU),
            })
            .collect();

        Self { particles }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Position every particle on the edge described by `profile`
    ///
    /// A particle sits on the radius of the vertex whose sector it is
    /// crossing. Nothing is returned for an undrawable profile.
    pub fn sample(
        &self,
        t: f64,
        profile: &RadiusProfile,
        center: Point2,
        base_radius: f64,
    ) -> Vec<ParticleFrame> {
        if !profile.is_drawable() {
            return Vec::new();
        }

        self.particles
            .iter()
            .filter_map(|particle| {
                let angle = (particle.start_angle + TAU * t / particle.orbit_period).rem_euclid(TAU);
                let multiplier = profile.at_angle(angle)?;
                let opacity = oscillate(
                    t,
                    particle.twinkle_period,
                    particle.phase,
                    f64::from(OPACITY_RANGE.0),
                    f64::from(OPACITY_RANGE.1),
                );
                Some(ParticleFrame {
                    position: Point2::polar(center, base_radius * multiplier, angle),
                    opacity: opacity as f32,
                    scale: oscillate(
                        t,
                        particle.pulse_period,
                        particle.phase,
                        SCALE_RANGE.0,
                        SCALE_RANGE.1,
                    ),
                })
            })
            .collect()
    }
}
