//! Keyframed random morphing
//!
//! The blob drifts between random per-vertex offsets. Keyframe `k` is drawn
//! from an RNG seeded by `(seed, k)`, so the shape at any time is a pure
//! function of the seed and the clock: no timer mutates shared state and two
//! renders of the same instant agree.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::radii::MIN_VERTICES;

/// Odd constant used to spread keyframe indices over the seed space
const KEYFRAME_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Cubic Hermite easing (ease-in-out)
fn hermite(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Random keyframe morph parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphProfile {
    /// Number of vertices
    pub vertices: usize,
    /// Largest offset from the base radius, as a fraction of it
    pub max_offset: f64,
    /// Seconds spent moving between two keyframes
    pub period: f64,
    /// RNG seed
    pub seed: u64,
}

impl Default for MorphProfile {
    fn default() -> Self {
        Self {
            vertices: 12,
            max_offset: 15.0 / 110.0,
            period: 3.0,
            seed: 0,
        }
    }
}

impl MorphProfile {
    /// Offsets of keyframe `index`
    pub fn keyframe(&self, index: u64) -> Vec<f64> {
        let max = self.max_offset.abs();
        let mut rng = StdRng::seed_from_u64(self.seed ^ index.wrapping_mul(KEYFRAME_MIX));
        (0..self.vertices)
            .map(|_| rng.random_range(-max..=max))
            .collect()
    }

    /// Radius multipliers at time `t` (seconds)
    ///
    /// Empty when the profile has fewer than three vertices or a
    /// non-positive period.
    pub fn radii_at(&self, t: f64) -> Vec<f64> {
        if self.vertices < MIN_VERTICES || self.period.is_nan() || self.period <= 0.0 {
            tracing::trace!(
                vertices = self.vertices,
                period = self.period,
                "Malformed morph profile, dropping radius profile"
            );
            return Vec::new();
        }

        let position = t.max(0.0) / self.period;
        let index = position.floor();
        let eased = hermite(position - index);
        let index = index as u64;

        let from = self.keyframe(index);
        let to = self.keyframe(index.wrapping_add(1));

        from.iter()
            .zip(&to)
            .map(|(a, b)| 1.0 + a + (b - a) * eased)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_are_deterministic() {
        let morph = MorphProfile {
            seed: 42,
            ..Default::default()
        };
        assert_eq!(morph.keyframe(3), morph.keyframe(3));
        assert_ne!(morph.keyframe(3), morph.keyframe(4));
    }

    #[test]
    fn test_radii_within_offset_bounds() {
        let morph = MorphProfile::default();
        for step in 0..100 {
            let radii = morph.radii_at(step as f64 * 0.37);
            assert_eq!(radii.len(), morph.vertices);
            for r in radii {
                assert!((r - 1.0).abs() <= morph.max_offset + 1e-12);
            }
        }
    }

    #[test]
    fn test_radii_hit_keyframes_on_period_boundaries() {
        let morph = MorphProfile {
            seed: 7,
            period: 2.0,
            ..Default::default()
        };
        let at_boundary = morph.radii_at(4.0);
        let expected: Vec<f64> = morph.keyframe(2).iter().map(|o| 1.0 + o).collect();
        for (a, b) in at_boundary.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_morph_is_continuous() {
        let morph = MorphProfile::default();
        let before = morph.radii_at(3.0 - 1e-6);
        let after = morph.radii_at(3.0 + 1e-6);
        for (a, b) in before.iter().zip(&after) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_malformed_profile_is_empty() {
        let few = MorphProfile {
            vertices: 2,
            ..Default::default()
        };
        assert!(few.radii_at(1.0).is_empty());

        let frozen = MorphProfile {
            period: 0.0,
            ..Default::default()
        };
        assert!(frozen.radii_at(1.0).is_empty());
    }

    #[test]
    fn test_zero_offset_is_circle() {
        let morph = MorphProfile {
            max_offset: 0.0,
            ..Default::default()
        };
        assert!(morph.radii_at(5.5).iter().all(|&r| r == 1.0));
    }
}
