use super::circle::circle_outline;
use crate::display::Surface;

/// Fold an angle into `[0, 360]`; values already inside are kept so that
/// `360` stays distinct from `0`.
fn normalize_degrees(angle: f64) -> f64 {
    if (0.0..=360.0).contains(&angle) {
        angle
    } else {
        angle.rem_euclid(360.0)
    }
}

/// Screen angle of an offset in degrees, `[0, 360)`, clockwise from +x
/// because y grows downward.
#[inline]
fn offset_angle(dx: i32, dy: i32) -> f64 {
    let a = f64::from(dy).atan2(f64::from(dx)).to_degrees();
    if a < 0.0 { a + 360.0 } else { a }
}

/// Inclusive arc membership; `angle1 > angle2` wraps through 0.
pub fn in_arc(angle: f64, angle1: f64, angle2: f64) -> bool {
    let a1 = normalize_degrees(angle1);
    let a2 = normalize_degrees(angle2);
    if a1 <= a2 {
        a1 <= angle && angle <= a2
    } else {
        angle >= a1 || angle <= a2
    }
}

/// The circle outline of `radius` restricted to the angular range
pub fn arc_offsets(radius: i32, angle1: f64, angle2: f64) -> Vec<(i32, i32)> {
    circle_outline(radius)
        .into_iter()
        .filter(|&(dx, dy)| in_arc(offset_angle(dx, dy), angle1, angle2))
        .collect()
}

pub(super) fn draw(surface: &mut Surface, cx: i32, cy: i32, radius: i32, angle1: f64, angle2: f64) {
    let color = surface.state().color;
    for (dx, dy) in arc_offsets(radius, angle1, angle2) {
        surface.plot(cx.saturating_add(dx), cy.saturating_add(dy), color);
    }
}
