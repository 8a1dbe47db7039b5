//! Drawing commands.
//!
//! Each command resolves its color argument against the surface, then hands
//! the raw geometry to the surface's [`ShapeRenderer`](crate::ShapeRenderer).
//! Validation happens before the first pixel write, so an `Err` leaves the
//! surface exactly as it was.

use log::trace;

use crate::color::{Color, ColorInput};
use crate::display::Surface;
use crate::error::Result;

fn resolve_fill(
    surface: &Surface,
    fill: Option<&ColorInput>,
    op: &'static str,
) -> Result<Option<Color>> {
    fill.map(|input| surface.resolve_draw_color(input, op)).transpose()
}

/// Plot one point with the active pen
pub fn pset(surface: &mut Surface, x: impl Into<f64>, y: impl Into<f64>) -> Result<()> {
    let (x, y) = (x.into(), y.into());
    trace!("pset({x}, {y})");
    surface.renderer().point(surface, x, y)
}

/// Straight line, both endpoints inclusive
pub fn line(
    surface: &mut Surface,
    x1: impl Into<f64>,
    y1: impl Into<f64>,
    x2: impl Into<f64>,
    y2: impl Into<f64>,
) -> Result<()> {
    let (x1, y1, x2, y2) = (x1.into(), y1.into(), x2.into(), y2.into());
    trace!("line({x1}, {y1}, {x2}, {y2})");
    surface.renderer().line(surface, x1, y1, x2, y2)
}

/// Rectangle outline, optionally filled strictly inside the border
pub fn rect(
    surface: &mut Surface,
    x: impl Into<f64>,
    y: impl Into<f64>,
    width: impl Into<f64>,
    height: impl Into<f64>,
    fill: Option<&ColorInput>,
) -> Result<()> {
    let (x, y, width, height) = (x.into(), y.into(), width.into(), height.into());
    let fill = resolve_fill(surface, fill, "rect")?;
    trace!("rect({x}, {y}, {width}, {height}, fill={fill:?})");
    surface.renderer().rect(surface, x, y, width, height, fill)
}

pub fn circle(
    surface: &mut Surface,
    x: impl Into<f64>,
    y: impl Into<f64>,
    radius: impl Into<f64>,
    fill: Option<&ColorInput>,
) -> Result<()> {
    let (x, y, radius) = (x.into(), y.into(), radius.into());
    let fill = resolve_fill(surface, fill, "circle")?;
    trace!("circle({x}, {y}, {radius}, fill={fill:?})");
    surface.renderer().circle(surface, x, y, radius, fill)
}

pub fn ellipse(
    surface: &mut Surface,
    x: impl Into<f64>,
    y: impl Into<f64>,
    radius_x: impl Into<f64>,
    radius_y: impl Into<f64>,
    fill: Option<&ColorInput>,
) -> Result<()> {
    let (x, y, rx, ry) = (x.into(), y.into(), radius_x.into(), radius_y.into());
    let fill = resolve_fill(surface, fill, "ellipse")?;
    trace!("ellipse({x}, {y}, {rx}, {ry}, fill={fill:?})");
    surface.renderer().ellipse(surface, x, y, rx, ry, fill)
}

/// Circle outline masked to `[angle1, angle2]` degrees, wrapping through 0
/// when `angle1 > angle2`
pub fn arc(
    surface: &mut Surface,
    x: impl Into<f64>,
    y: impl Into<f64>,
    radius: impl Into<f64>,
    angle1: impl Into<f64>,
    angle2: impl Into<f64>,
) -> Result<()> {
    let (x, y, radius) = (x.into(), y.into(), radius.into());
    let (a1, a2) = (angle1.into(), angle2.into());
    trace!("arc({x}, {y}, {radius}, {a1}, {a2})");
    surface.renderer().arc(surface, x, y, radius, a1, a2)
}
