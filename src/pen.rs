//! Pens: how one logical point becomes a set of physical pixels.

use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};

/// Pen shape selector used by [`Pen::new`] and the config format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenShape {
    Pixel,
    Square,
    Circle,
}

/// Largest accepted pen size
pub const MAX_PEN_SIZE: u32 = 32_767;

/// Active pen. A size of 1 is always stored as [`Pen::Point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "PenSpec", into = "PenSpec")]
pub enum Pen {
    #[default]
    Point,
    Square(u32),
    Circle(u32),
}

#[derive(Serialize, Deserialize)]
struct PenSpec {
    shape: PenShape,
    #[serde(default = "one")]
    size: u32,
}

const fn one() -> u32 {
    1
}

impl TryFrom<PenSpec> for Pen {
    type Error = DrawError;

    fn try_from(spec: PenSpec) -> Result<Self> {
        Self::new(spec.shape, spec.size)
    }
}

impl From<Pen> for PenSpec {
    fn from(pen: Pen) -> Self {
        Self {
            shape: pen.shape(),
            size: pen.size(),
        }
    }
}

impl Pen {
    /// Validating constructor. Size must be in `1..=MAX_PEN_SIZE`; size 1 yields `Point`.
    pub fn new(shape: PenShape, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(DrawError::invalid_parameter(
                "set_pen",
                "pen size must be a positive integer",
            ));
        }
        if size > MAX_PEN_SIZE {
            return Err(DrawError::invalid_parameter(
                "set_pen",
                format!("pen size must be at most {MAX_PEN_SIZE}"),
            ));
        }
        Ok(match (shape, size) {
            (_, 1) | (PenShape::Pixel, _) => Self::Point,
            (PenShape::Square, s) => Self::Square(s),
            (PenShape::Circle, s) => Self::Circle(s),
        })
    }

    pub fn shape(self) -> PenShape {
        match self {
            Self::Point => PenShape::Pixel,
            Self::Square(_) => PenShape::Square,
            Self::Circle(_) => PenShape::Circle,
        }
    }

    pub fn size(self) -> u32 {
        match self {
            Self::Point => 1,
            Self::Square(s) | Self::Circle(s) => s,
        }
    }

    /// Visit every pixel this pen covers when stamped at `(x, y)`.
    ///
    /// Square pens cover a `(2s-1)²` block so that each size step grows the
    /// block by one pixel on every side. Circle pens of size 2 are a plus;
    /// larger ones keep pixels whose rounded distance from the center is
    /// below the size. Sizes above [`MAX_PEN_SIZE`] stamp as if clamped to it.
    pub fn for_each_pixel(self, x: i32, y: i32, mut plot: impl FnMut(i32, i32)) {
        match self {
            Self::Point | Self::Square(1) | Self::Circle(1) => plot(x, y),
            Self::Square(size) => {
                let s = size.min(MAX_PEN_SIZE) as i32;
                let offset = s - 1;
                let span = 2 * s - 1;
                for dy in 0..span {
                    for dx in 0..span {
                        plot(x.saturating_add(dx - offset), y.saturating_add(dy - offset));
                    }
                }
            },
            Self::Circle(2) => {
                plot(x, y);
                plot(x.saturating_add(1), y);
                plot(x.saturating_sub(1), y);
                plot(x, y.saturating_add(1));
                plot(x, y.saturating_sub(1));
            },
            Self::Circle(size) => {
                let s = size.min(MAX_PEN_SIZE) as i32;
                for dy in -s..s {
                    for dx in -s..s {
                        let dist = f64::from(dx * dx + dy * dy).sqrt();
                        if (dist.round() as i32) < s {
                            plot(x.saturating_add(dx), y.saturating_add(dy));
                        }
                    }
                }
            },
        }
    }
}
