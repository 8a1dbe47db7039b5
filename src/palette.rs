//! Indexed color palette. Index 0 is always transparent black.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::color::Color;
use crate::error::{DrawError, Result};

/// Ordered, append-only list of colors addressed by index.
///
/// Slot 0 is reserved for [`Color::TRANSPARENT`] and survives every
/// replace operation, so the palette is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Palette holding only the reserved transparent entry
    pub fn new() -> Self {
        Self {
            colors: vec![Color::TRANSPARENT],
        }
    }

    /// Build from user colors; they land at indices 1, 2, ...
    pub fn with_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut palette = Self::new();
        palette.colors.extend(colors);
        palette
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Append a color and return its index
    pub fn push(&mut self, color: Color) -> usize {
        self.colors.push(color);
        self.colors.len() - 1
    }

    /// Overwrite one existing entry. Index 0 and out-of-range indices are errors.
    pub fn set_color(&mut self, index: usize, color: Color) -> Result<()> {
        if index == 0 {
            warn!("refusing to reassign reserved palette index 0");
            return Err(DrawError::invalid_parameter(
                "set_palette_color",
                "palette index 0 is reserved for transparent black",
            ));
        }
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(DrawError::ColorOutOfRange {
                op: "set_palette_color",
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            })?;
        *slot = color;
        Ok(())
    }

    /// Batch replace. Entries aimed at index 0 are skipped; entries past the
    /// end are appended in order, so indices stay dense.
    ///
    /// Returns how many entries were written.
    pub fn replace_colors(&mut self, entries: &[(usize, Color)]) -> usize {
        let mut written = 0;
        for &(index, color) in entries {
            if index == 0 {
                warn!("palette replace skipped reserved index 0");
                continue;
            }
            if let Some(slot) = self.colors.get_mut(index) {
                *slot = color;
            } else {
                self.colors.push(color);
            }
            written += 1;
        }
        written
    }

    /// First index whose channels all lie within `tolerance` of `color`.
    /// Index 0 only matches a fully transparent query.
    pub fn find_index(&self, color: Color, tolerance: u8) -> Option<usize> {
        let close = |a: u8, b: u8| a.abs_diff(b) <= tolerance;
        self.colors.iter().enumerate().find_map(|(i, c)| {
            if i == 0 && color.a != 0 {
                return None;
            }
            let hit = close(c.r, color.r)
                && close(c.g, color.g)
                && close(c.b, color.b)
                && close(c.a, color.a);
            hit.then_some(i)
        })
    }

    /// Exact lookup, appending the color when it is missing
    pub fn index_of_or_push(&mut self, color: Color) -> usize {
        self.find_index(color, 0)
            .unwrap_or_else(|| self.push(color))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// A serialized palette may omit or include the reserved entry; either way
/// slot 0 comes back as transparent black.
impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let mut colors = Vec::<Color>::deserialize(deserializer)?;
        if colors.first() == Some(&Color::TRANSPARENT) {
            colors.remove(0);
        }
        Ok(Self::with_colors(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_zero_is_reserved() {
        let mut palette = Palette::with_colors([Color::RED, Color::GREEN]);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(0), Some(Color::TRANSPARENT));
        assert!(palette.set_color(0, Color::WHITE).is_err());
        assert_eq!(palette.get(0), Some(Color::TRANSPARENT));

        let written = palette.replace_colors(&[(0, Color::WHITE), (2, Color::BLUE)]);
        assert_eq!(written, 1);
        assert_eq!(palette.colors(), &[Color::TRANSPARENT, Color::RED, Color::BLUE]);
    }

    #[test]
    fn test_set_color_out_of_range() {
        let mut palette = Palette::new();
        assert!(matches!(
            palette.set_color(1, Color::RED),
            Err(DrawError::ColorOutOfRange { index: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_replace_past_end_appends() {
        let mut palette = Palette::new();
        palette.replace_colors(&[(9, Color::RED)]);
        assert_eq!(palette.get(1), Some(Color::RED));
    }

    #[test]
    fn test_find_index_with_tolerance() {
        let mut palette = Palette::with_colors([Color::rgb(100, 100, 100), Color::RED]);
        assert_eq!(palette.find_index(Color::rgb(103, 98, 100), 4), Some(1));
        assert_eq!(palette.find_index(Color::rgb(103, 98, 100), 2), None);
        assert_eq!(palette.find_index(Color::TRANSPARENT, 0), Some(0));
        assert_eq!(palette.index_of_or_push(Color::RED), 2);
        assert_eq!(palette.index_of_or_push(Color::BLUE), 3);
    }

    #[test]
    fn test_serde_keeps_reserved_slot() {
        let palette: Palette = serde_json::from_str(r##"["#FF0000", [0, 0, 255]]"##).unwrap();
        assert_eq!(palette.colors(), &[Color::TRANSPARENT, Color::RED, Color::BLUE]);

        let json = serde_json::to_string(&palette).unwrap();
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }
}
