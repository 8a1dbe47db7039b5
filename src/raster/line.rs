/// Bresenham's line, both endpoints inclusive.
///
/// Endpoints are ordered before stepping so `(a, b)` and `(b, a)` visit the
/// same pixels. Each step compares the doubled error against `-dy` first,
/// then `dx`.
pub fn bresenham(x1: i32, y1: i32, x2: i32, y2: i32, mut plot: impl FnMut(i32, i32)) {
    let ((x0, y0), (x1, y1)) = if (x1, y1) <= (x2, y2) {
        ((x1, y1), (x2, y2))
    } else {
        ((x2, y2), (x1, y1))
    };

    let dx = (i64::from(x1) - i64::from(x0)).abs();
    let dy = (i64::from(y1) - i64::from(y0)).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        bresenham(x1, y1, x2, y2, |x, y| out.push((x, y)));
        out
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(points(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_shallow_tie_break() {
        assert_eq!(
            points(0, 0, 5, 2),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
        );
        assert_eq!(
            points(0, 0, 2, 5),
            vec![(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)]
        );
    }

    #[test]
    fn test_endpoint_order_independent() {
        let cases = [(0, 0, 2, 1), (-3, 7, 4, -2), (5, 5, 5, -5), (9, 1, -9, 0), (1, 2, 8, 3)];
        for (x1, y1, x2, y2) in cases {
            let mut a = points(x1, y1, x2, y2);
            let mut b = points(x2, y2, x1, y1);
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "line ({x1},{y1})-({x2},{y2})");
        }
    }

    #[test]
    fn test_single_point_and_axis_lines() {
        assert_eq!(points(4, 4, 4, 4), vec![(4, 4)]);
        assert_eq!(points(3, 0, 0, 0), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(points(0, 2, 0, 0).len(), 3);
    }
}
