//! Blend laws: how an incoming color lands on the existing pixel

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Compositing law applied on every pixel write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendLaw {
    /// Incoming color replaces the pixel, alpha included
    #[default]
    Normal,
    /// Straight alpha over r, g, b. The existing alpha channel is kept.
    Alpha,
}

/// Alpha blend a single color channel
/// Uses fast approximation: (x + 1 + (x >> 8)) >> 8 instead of x / 255
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u16) -> u8 {
    let result = src as u16 * alpha + dst as u16 * (255 - alpha);
    ((result + 1 + (result >> 8)) >> 8) as u8
}

impl BlendLaw {
    #[inline]
    pub fn apply(self, existing: Color, incoming: Color) -> Color {
        match self {
            Self::Normal => incoming,
            Self::Alpha => {
                let alpha = incoming.a as u16;
                Color::rgba(
                    blend_channel(incoming.r, existing.r, alpha),
                    blend_channel(incoming.g, existing.g, alpha),
                    blend_channel(incoming.b, existing.b, alpha),
                    existing.a,
                )
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_overwrites_everything() {
        let out = BlendLaw::Normal.apply(Color::BLUE, Color::rgba(1, 2, 3, 4));
        assert_eq!(out, Color::rgba(1, 2, 3, 4));
    }

    #[test]
    fn test_alpha_extremes_are_exact() {
        let dst = Color::rgba(10, 20, 30, 77);
        assert_eq!(
            BlendLaw::Alpha.apply(dst, Color::rgba(200, 100, 50, 255)),
            Color::rgba(200, 100, 50, 77)
        );
        assert_eq!(BlendLaw::Alpha.apply(dst, Color::rgba(200, 100, 50, 0)), dst);
    }

    #[test]
    fn test_alpha_half_mix_keeps_existing_alpha() {
        let out = BlendLaw::Alpha.apply(Color::BLUE, Color::rgba(255, 0, 0, 128));
        assert_eq!(out, Color::rgba(128, 0, 127, 255));
    }

    #[test]
    fn test_blend_channel_full_range() {
        for v in 0..=255u8 {
            assert_eq!(blend_channel(v, 0, 255), v);
            assert_eq!(blend_channel(0, v, 0), v);
        }
    }
}
