//! Color values and the parser for every color form a drawing command accepts.
//!
//! A color reaches the rasterizer as one of:
//! - a hex string (`#RGB`, `#RRGGBB`, `#RRGGBBAA`, leading `#` optional)
//! - a CSS-style name or `rgb()`/`rgba()` string
//! - a 3 or 4 element numeric array
//! - an `{r, g, b, a}` record
//! - a palette index (resolved by [`crate::Surface::resolve_draw_color`], not here)

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{DrawError, Result};

/// 8-bit RGBA color. Equality is exact per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "ColorInput")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in buffer order (R, G, B, A)
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    /// `#RRGGBBAA`, always eight digits
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// CSS `rgba()` form with alpha as a 0-1 fraction
    pub fn to_css(self) -> String {
        let alpha = f32::from(self.a) / 255.0;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Self::from_array(c)
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }
}

impl TryFrom<ColorInput> for Color {
    type Error = DrawError;

    fn try_from(input: ColorInput) -> Result<Self> {
        parse_color(&input)
    }
}

// ============================================================================
// Color Input
// ============================================================================

/// Any value a caller may pass where a color is expected.
///
/// Deserializes untagged from JSON, so `1`, `"#ff0000"`, `[255, 0, 0]` and
/// `{"r": 255, "g": 0, "b": 0}` all land in the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// Palette index
    Index(i64),
    /// Hex digits, a color name or an `rgb()`/`rgba()` string
    Text(String),
    /// `[r, g, b]` or `[r, g, b, a]`
    Channels(Vec<f64>),
    /// `{r, g, b, a?}`
    Rgba {
        r: f64,
        g: f64,
        b: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        a: Option<f64>,
    },
}

impl fmt::Display for ColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Channels(c) => write!(f, "{c:?}"),
            Self::Rgba { r, g, b, a } => match a {
                Some(a) => write!(f, "{{r: {r}, g: {g}, b: {b}, a: {a}}}"),
                None => write!(f, "{{r: {r}, g: {g}, b: {b}}}"),
            },
        }
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        Self::Rgba {
            r: f64::from(c.r),
            g: f64::from(c.g),
            b: f64::from(c.b),
            a: Some(f64::from(c.a)),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<usize> for ColorInput {
    fn from(i: usize) -> Self {
        Self::Index(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<i32> for ColorInput {
    fn from(i: i32) -> Self {
        Self::Index(i64::from(i))
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(c: [u8; 3]) -> Self {
        Self::Channels(c.iter().map(|&v| f64::from(v)).collect())
    }
}

impl From<[u8; 4]> for ColorInput {
    fn from(c: [u8; 4]) -> Self {
        Self::Channels(c.iter().map(|&v| f64::from(v)).collect())
    }
}

impl From<&[f64]> for ColorInput {
    fn from(c: &[f64]) -> Self {
        Self::Channels(c.to_vec())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse any non-index color form into a [`Color`].
///
/// Integer input is rejected here: only a surface knows its palette, see
/// [`crate::Surface::resolve_draw_color`].
pub fn parse_color(input: &ColorInput) -> Result<Color> {
    let invalid = || DrawError::InvalidColor {
        op: "parse_color",
        input: input.to_string(),
    };

    match input {
        ColorInput::Index(_) => Err(invalid()),
        ColorInput::Text(text) => parse_color_str(text).ok_or_else(invalid),
        ColorInput::Channels(c) => match c.as_slice() {
            [r, g, b] => channels(*r, *g, *b, 255.0).ok_or_else(invalid),
            [r, g, b, a] => channels(*r, *g, *b, *a).ok_or_else(invalid),
            _ => Err(invalid()),
        },
        ColorInput::Rgba { r, g, b, a } => {
            channels(*r, *g, *b, a.unwrap_or(255.0)).ok_or_else(invalid)
        },
    }
}

fn channel(v: f64) -> Option<u8> {
    if v.is_finite() {
        Some(v.round().clamp(0.0, 255.0) as u8)
    } else {
        None
    }
}

fn channels(r: f64, g: f64, b: f64, a: f64) -> Option<Color> {
    Some(Color::rgba(channel(r)?, channel(g)?, channel(b)?, channel(a)?))
}

fn parse_color_str(text: &str) -> Option<Color> {
    let text = text.trim();
    if let Some(color) = parse_hex(text) {
        return Some(color);
    }
    if let Some(color) = parse_rgb_function(text) {
        return Some(color);
    }
    named_color(text)
}

/// Short form expands each nibble to `n * 16 - 1` (0 stays 0).
fn parse_hex(text: &str) -> Option<Color> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let pair = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        3 => {
            let nibble = |i: usize| {
                u8::from_str_radix(&digits[i..=i], 16)
                    .ok()
                    .map(|n| (n * 16).saturating_sub(1))
            };
            Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        },
        6 => Some(Color::rgb(pair(0)?, pair(2)?, pair(4)?)),
        8 => Some(Color::rgba(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        _ => None,
    }
}

/// `rgb(r, g, b)` / `rgba(r, g, b, alpha)` with alpha as a 0-1 fraction
fn parse_rgb_function(text: &str) -> Option<Color> {
    let lower = text.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<f64> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(str::parse::<f64>)
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [r, g, b] => channels(*r, *g, *b, 255.0),
        [r, g, b, a] if a.is_finite() => channels(*r, *g, *b, a.clamp(0.0, 1.0) * 255.0),
        _ => None,
    }
}

const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("transparent", [0, 0, 0, 0]),
    ("black", [0, 0, 0, 255]),
    ("silver", [192, 192, 192, 255]),
    ("gray", [128, 128, 128, 255]),
    ("grey", [128, 128, 128, 255]),
    ("white", [255, 255, 255, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("red", [255, 0, 0, 255]),
    ("purple", [128, 0, 128, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("green", [0, 128, 0, 255]),
    ("lime", [0, 255, 0, 255]),
    ("olive", [128, 128, 0, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("navy", [0, 0, 128, 255]),
    ("blue", [0, 0, 255, 255]),
    ("teal", [0, 128, 128, 255]),
    ("aqua", [0, 255, 255, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("orange", [255, 165, 0, 255]),
    ("brown", [165, 42, 42, 255]),
    ("pink", [255, 192, 203, 255]),
    ("gold", [255, 215, 0, 255]),
    ("indigo", [75, 0, 130, 255]),
    ("violet", [238, 130, 238, 255]),
    ("crimson", [220, 20, 60, 255]),
    ("coral", [255, 127, 80, 255]),
    ("salmon", [250, 128, 114, 255]),
    ("tomato", [255, 99, 71, 255]),
    ("khaki", [240, 230, 140, 255]),
    ("beige", [245, 245, 220, 255]),
    ("ivory", [255, 255, 240, 255]),
    ("lavender", [230, 230, 250, 255]),
    ("turquoise", [64, 224, 208, 255]),
    ("skyblue", [135, 206, 235, 255]),
    ("steelblue", [70, 130, 180, 255]),
    ("royalblue", [65, 105, 225, 255]),
    ("darkblue", [0, 0, 139, 255]),
    ("darkgreen", [0, 100, 0, 255]),
    ("darkred", [139, 0, 0, 255]),
    ("darkgray", [169, 169, 169, 255]),
    ("darkgrey", [169, 169, 169, 255]),
    ("lightgray", [211, 211, 211, 255]),
    ("lightgrey", [211, 211, 211, 255]),
    ("dimgray", [105, 105, 105, 255]),
    ("dimgrey", [105, 105, 105, 255]),
    ("chocolate", [210, 105, 30, 255]),
    ("tan", [210, 180, 140, 255]),
    ("orchid", [218, 112, 214, 255]),
    ("plum", [221, 160, 221, 255]),
    ("limegreen", [50, 205, 50, 255]),
    ("forestgreen", [34, 139, 34, 255]),
    ("seagreen", [46, 139, 87, 255]),
    ("slategray", [112, 128, 144, 255]),
    ("slategrey", [112, 128, 144, 255]),
];

fn named_color(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| Color::from_array(c))
}
