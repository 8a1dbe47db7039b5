use super::fill_span;
use crate::color::Color;
use crate::display::Surface;

/// Outline through the pen, optional fill strictly inside the border.
///
/// Negative extents grow the rectangle left/up from `(x, y)`; zero extents
/// draw nothing.
pub(super) fn draw(
    surface: &mut Surface,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    fill: Option<Color>,
) {
    let (x, width) = normalize(x, width);
    let (y, height) = normalize(y, height);
    if width == 0 || height == 0 {
        return;
    }
    let x2 = x.saturating_add(width - 1);
    let y2 = y.saturating_add(height - 1);

    if let Some(fill) = fill {
        for py in y.saturating_add(1)..y2 {
            fill_span(surface, x.saturating_add(1), x2.saturating_sub(1), py, fill);
        }
    }

    let color = surface.state().color;
    for px in x..=x2 {
        surface.plot(px, y, color);
    }
    if y2 != y {
        for px in x..=x2 {
            surface.plot(px, y2, color);
        }
    }
    for py in y.saturating_add(1)..y2 {
        surface.plot(x, py, color);
        if x2 != x {
            surface.plot(x2, py, color);
        }
    }
}

fn normalize(start: i32, extent: i32) -> (i32, i32) {
    if extent < 0 {
        (start.saturating_add(extent), extent.saturating_neg())
    } else {
        (start, extent)
    }
}
