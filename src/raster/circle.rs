use super::fill_span;
use crate::color::Color;
use crate::display::Surface;

/// The outline is stepped on `radius - 1` so a pen-width stroke stays
/// inside the requested radius.
#[inline]
fn stepped_radius(radius: i32) -> i32 {
    (radius - 1).max(0)
}

/// Outline pixels relative to the center, each listed once.
///
/// Radius 0 is the center alone and radius 1 a plus; anything larger is
/// 8-way midpoint stepping on `radius - 1`.
pub fn circle_outline(radius: i32) -> Vec<(i32, i32)> {
    match radius {
        i32::MIN..=0 => return vec![(0, 0)],
        1 => return vec![(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)],
        _ => {},
    }

    let mut points = Vec::new();
    let mut x = stepped_radius(radius);
    let mut y = 0;
    let mut err = 1 - x;

    while x >= y {
        points.extend_from_slice(&[
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ]);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    // axis and diagonal steps reflect onto themselves
    points.sort_unstable();
    points.dedup();
    points
}

/// Fill rows as `(dy, half_width)` with `half_width = floor(sqrt(r² - dy²))`
pub fn circle_spans(radius: i32) -> Vec<(i32, i32)> {
    let r = stepped_radius(radius);
    let r2 = i64::from(r) * i64::from(r);
    (-r..=r)
        .map(|dy| {
            let rest = r2 - i64::from(dy) * i64::from(dy);
            (dy, (rest as f64).sqrt().floor() as i32)
        })
        .collect()
}

/// Fill first (direct writes), outline second (through the pen)
pub(super) fn draw(surface: &mut Surface, cx: i32, cy: i32, radius: i32, fill: Option<Color>) {
    if let Some(fill) = fill {
        for (dy, half) in circle_spans(radius) {
            fill_span(
                surface,
                cx.saturating_sub(half),
                cx.saturating_add(half),
                cy.saturating_add(dy),
                fill,
            );
        }
    }

    let color = surface.state().color;
    for (dx, dy) in circle_outline(radius) {
        surface.plot(cx.saturating_add(dx), cy.saturating_add(dy), color);
    }
}
