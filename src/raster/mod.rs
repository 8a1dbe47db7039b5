//! Shape rasterization.
//!
//! Every drawing command dispatches through the surface's [`ShapeRenderer`].
//! [`PixelRenderer`] is the pixel-exact implementation built from the pen
//! and pixel primitives; a host can install its own (e.g. smooth) renderer
//! with [`Surface::with_renderer`](crate::Surface::with_renderer).

mod arc;
mod circle;
mod ellipse;
mod line;
mod rect;

pub use arc::{arc_offsets, in_arc};
pub use circle::{circle_outline, circle_spans};
pub use ellipse::{ellipse_outline, ellipse_spans};
pub use line::bresenham;

use crate::color::Color;
use crate::display::Surface;
use crate::error::{DrawError, Result};

/// One method per drawing command.
///
/// Geometry arrives as raw numbers; each implementation decides what it
/// accepts. Colors are already resolved. Implementations must validate
/// everything before the first write.
pub trait ShapeRenderer {
    fn point(&self, surface: &mut Surface, x: f64, y: f64) -> Result<()>;

    fn line(&self, surface: &mut Surface, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()>;

    fn rect(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
    ) -> Result<()>;

    fn circle(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        radius: f64,
        fill: Option<Color>,
    ) -> Result<()>;

    fn ellipse(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        fill: Option<Color>,
    ) -> Result<()>;

    /// Angles in degrees, measured clockwise on screen from +x
    fn arc(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<()>;
}

/// Integer check for pixel-mode geometry
pub(crate) fn int_arg(op: &'static str, name: &'static str, value: f64) -> Result<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Ok(value as i32)
    } else {
        Err(DrawError::InvalidCoordinates {
            op,
            name,
            value: value.to_string(),
        })
    }
}

fn radius_arg(op: &'static str, name: &'static str, value: f64) -> Result<i32> {
    let r = int_arg(op, name, value)?;
    if r < 0 {
        return Err(DrawError::invalid_parameter(
            op,
            format!("`{name}` must not be negative, got {r}"),
        ));
    }
    Ok(r)
}

fn angle_arg(op: &'static str, name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DrawError::InvalidCoordinates {
            op,
            name,
            value: value.to_string(),
        })
    }
}

/// Write a fill span directly (no pen), clipped to the surface
fn fill_span(surface: &mut Surface, x1: i32, x2: i32, y: i32, color: Color) {
    if y < 0 || i64::from(y) >= i64::from(surface.height()) {
        return;
    }
    let start = x1.max(0);
    let end = i64::from(x2).min(i64::from(surface.width()) - 1) as i32;
    for x in start..=end {
        surface.set_pixel_safe(x, y, color);
    }
}

/// Pixel-exact renderer: integer geometry, pen-stamped outlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelRenderer;

impl ShapeRenderer for PixelRenderer {
    fn point(&self, surface: &mut Surface, x: f64, y: f64) -> Result<()> {
        let x = int_arg("pset", "x", x)?;
        let y = int_arg("pset", "y", y)?;
        let color = surface.state().color;
        surface.plot(x, y, color);
        Ok(())
    }

    fn line(&self, surface: &mut Surface, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        let x1 = int_arg("line", "x1", x1)?;
        let y1 = int_arg("line", "y1", y1)?;
        let x2 = int_arg("line", "x2", x2)?;
        let y2 = int_arg("line", "y2", y2)?;
        let color = surface.state().color;
        bresenham(x1, y1, x2, y2, |x, y| surface.plot(x, y, color));
        Ok(())
    }

    fn rect(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
    ) -> Result<()> {
        let x = int_arg("rect", "x", x)?;
        let y = int_arg("rect", "y", y)?;
        let width = int_arg("rect", "width", width)?;
        let height = int_arg("rect", "height", height)?;
        rect::draw(surface, x, y, width, height, fill);
        Ok(())
    }

    fn circle(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        radius: f64,
        fill: Option<Color>,
    ) -> Result<()> {
        let x = int_arg("circle", "x", x)?;
        let y = int_arg("circle", "y", y)?;
        let radius = radius_arg("circle", "radius", radius)?;
        circle::draw(surface, x, y, radius, fill);
        Ok(())
    }

    fn ellipse(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        fill: Option<Color>,
    ) -> Result<()> {
        let x = int_arg("ellipse", "x", x)?;
        let y = int_arg("ellipse", "y", y)?;
        let rx = radius_arg("ellipse", "radius_x", radius_x)?;
        let ry = radius_arg("ellipse", "radius_y", radius_y)?;
        ellipse::draw(surface, x, y, rx, ry, fill);
        Ok(())
    }

    fn arc(
        &self,
        surface: &mut Surface,
        x: f64,
        y: f64,
        radius: f64,
        angle1: f64,
        angle2: f64,
    ) -> Result<()> {
        let x = int_arg("arc", "x", x)?;
        let y = int_arg("arc", "y", y)?;
        let radius = radius_arg("arc", "radius", radius)?;
        let angle1 = angle_arg("arc", "angle1", angle1)?;
        let angle2 = angle_arg("arc", "angle2", angle2)?;
        arc::draw(surface, x, y, radius, angle1, angle2);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_arg() {
        assert_eq!(int_arg("t", "x", -3.0).unwrap(), -3);
        for bad in [0.5, f64::NAN, f64::INFINITY, 1e12] {
            assert!(matches!(
                int_arg("t", "x", bad),
                Err(DrawError::InvalidCoordinates { name: "x", .. })
            ));
        }
    }

    #[test]
    fn test_negative_radius_is_invalid_parameter() {
        assert!(matches!(
            radius_arg("circle", "radius", -1.0),
            Err(DrawError::InvalidParameter { op: "circle", .. })
        ));
        assert!(matches!(
            radius_arg("circle", "radius", 1.5),
            Err(DrawError::InvalidCoordinates { .. })
        ));
    }
}
