//! Per-write color jitter
//!
//! Noise is sampled right before a pixel hits the blend stage. The stored
//! draw color is never modified.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::util::RandomSource;

/// Jitter range attached to a surface's draw state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Noise {
    /// One sample in `[-n/2, n/2]` shared by r, g and b. Alpha is untouched.
    Shared(f32),
    /// Independent ranges for r, g, b, a
    PerChannel([f32; 4]),
}

#[inline]
fn offset(c: u8, delta: f32) -> u8 {
    (f32::from(c) + delta).round().clamp(0.0, 255.0) as u8
}

impl Noise {
    /// Perturb `color` with samples drawn from `rng`
    pub fn apply(&self, color: Color, rng: &mut dyn RandomSource) -> Color {
        match *self {
            Self::Shared(n) => {
                let half = n.abs() / 2.0;
                let delta = rng.range_f32(-half, half);
                Color::rgba(
                    offset(color.r, delta),
                    offset(color.g, delta),
                    offset(color.b, delta),
                    color.a,
                )
            },
            Self::PerChannel(ranges) => {
                let mut out = color.to_array();
                for (c, n) in out.iter_mut().zip(ranges) {
                    let half = n.abs() / 2.0;
                    *c = offset(*c, rng.range_f32(-half, half));
                }
                Color::from_array(out)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Rng;

    #[test]
    fn test_shared_noise_moves_rgb_together() {
        let mut rng = Rng::new(1234);
        let base = Color::rgba(100, 110, 120, 200);
        for _ in 0..200 {
            let out = Noise::Shared(40.0).apply(base, &mut rng);
            let dr = i16::from(out.r) - 100;
            assert_eq!(i16::from(out.g) - 110, dr);
            assert_eq!(i16::from(out.b) - 120, dr);
            assert!(dr.abs() <= 20);
            assert_eq!(out.a, 200);
        }
    }

    #[test]
    fn test_per_channel_noise_clamps() {
        let mut rng = Rng::new(99);
        let base = Color::rgba(0, 255, 128, 255);
        for _ in 0..200 {
            let out = Noise::PerChannel([100.0, 100.0, 0.0, 10.0]).apply(base, &mut rng);
            assert!(out.r <= 50);
            assert!(out.g >= 205);
            assert_eq!(out.b, 128);
            assert!(out.a >= 250);
        }
    }

    #[test]
    fn test_noise_deserializes_both_forms() {
        let shared: Noise = serde_json::from_str("12").unwrap();
        assert_eq!(shared, Noise::Shared(12.0));
        let per: Noise = serde_json::from_str("[1, 2, 3, 4]").unwrap();
        assert_eq!(per, Noise::PerChannel([1.0, 2.0, 3.0, 4.0]));
    }
}
