use super::fill_span;
use crate::color::Color;
use crate::display::Surface;

// ============================================================================
// Outline
// ============================================================================

/// Midpoint ellipse, two regions, decision variable scaled by 4 to stay in
/// integers. The decision terms reach `radius⁴`, so they are kept in i128.
///
/// A zero radius collapses to the straight segment along the other axis.
/// Offsets are relative to the center and listed once.
pub fn ellipse_outline(rx: i32, ry: i32) -> Vec<(i32, i32)> {
    if rx == 0 || ry == 0 {
        let mut points = Vec::new();
        for x in -rx..=rx {
            for y in -ry..=ry {
                points.push((x, y));
            }
        }
        return points;
    }

    let mut points = Vec::new();
    let mut plot4 = |x: i128, y: i128| {
        let (x, y) = (x as i32, y as i32);
        points.extend_from_slice(&[(x, y), (-x, y), (x, -y), (-x, -y)]);
    };

    let rx2 = i128::from(rx) * i128::from(rx);
    let ry2 = i128::from(ry) * i128::from(ry);
    let mut x: i128 = 0;
    let mut y = i128::from(ry);
    let mut px: i128 = 0;
    let mut py = 2 * rx2 * y;

    // region 1: slope shallower than -1
    let mut p = 4 * ry2 - 4 * rx2 * y + rx2;
    while px < py {
        plot4(x, y);
        x += 1;
        px += 2 * ry2;
        if p < 0 {
            p += 4 * (ry2 + px);
        } else {
            y -= 1;
            py -= 2 * rx2;
            p += 4 * (ry2 + px - py);
        }
    }

    // region 2
    let mut p = ry2 * (2 * x + 1) * (2 * x + 1) + 4 * rx2 * (y - 1) * (y - 1) - 4 * rx2 * ry2;
    let mut last_x = x;
    while y >= 0 {
        plot4(x, y);
        last_x = x;
        y -= 1;
        py -= 2 * rx2;
        if p > 0 {
            p += 4 * (rx2 - py);
        } else {
            x += 1;
            px += 2 * ry2;
            p += 4 * (rx2 - py + px);
        }
    }

    // flat ellipses leave region 2 before reaching the tips
    for tip in last_x + 1..=i128::from(rx) {
        plot4(tip, 0);
    }

    points.sort_unstable();
    points.dedup();
    points
}

/// Fill rows as `(dy, half_width)` with `half_width = floor(rx * sqrt(1 - dy²/ry²))`
pub fn ellipse_spans(rx: i32, ry: i32) -> Vec<(i32, i32)> {
    if ry == 0 {
        return vec![(0, rx)];
    }
    let (rxf, ryf) = (f64::from(rx), f64::from(ry));
    (-ry..=ry)
        .map(|dy| {
            let t = f64::from(dy) / ryf;
            let half = (rxf * (1.0 - t * t).max(0.0).sqrt()).floor();
            (dy, half as i32)
        })
        .collect()
}

// ============================================================================
// Drawing
// ============================================================================

pub(super) fn draw(
    surface: &mut Surface,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    fill: Option<Color>,
) {
    if let Some(fill) = fill {
        for (dy, half) in ellipse_spans(rx, ry) {
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
    for (dx, dy) in ellipse_outline(rx, ry) {
        surface.plot(cx.saturating_add(dx), cy.saturating_add(dy), color);
    }
}
