use std::collections::HashSet;

use retrodraw::raster::{arc_offsets, circle_outline, ellipse_outline};
use retrodraw::{
    draw, parse_color, BlendLaw, Color, ColorInput, DrawError, Noise, Palette, Pen, PixelBuffer,
    Rng, Surface,
};

fn lit_pixels(surface: &Surface) -> HashSet<(i32, i32)> {
    let mut out = HashSet::new();
    for y in 0..surface.height() as i32 {
        for x in 0..surface.width() as i32 {
            if surface.get_pixel_safe(x, y) != Some(Color::TRANSPARENT) {
                out.insert((x, y));
            }
        }
    }
    out
}

#[test_log::test]
fn filled_rect_from_palette() {
    let mut surface = Surface::new(10, 10);
    surface.set_palette(Palette::with_colors([Color::RED]));

    draw::rect(&mut surface, 2, 2, 4, 4, Some(&ColorInput::Index(1))).unwrap();

    assert_eq!(surface.get_pixel_safe(3, 3), Some(Color::RED));
    assert_eq!(surface.get_pixel_safe(0, 0), surface.state().palette.get(0));
}

#[test_log::test]
fn diagonal_line_on_empty_surface() {
    let mut surface = Surface::new(4, 4);
    draw::line(&mut surface, 0, 0, 3, 3).unwrap();

    let expected: HashSet<_> = [(0, 0), (1, 1), (2, 2), (3, 3)].into();
    assert_eq!(lit_pixels(&surface), expected);
}

#[test]
fn failed_commands_leave_no_trace() {
    let mut surface = Surface::new(6, 6);
    let mut frames = 0;
    let mut count = |_: &PixelBuffer| frames += 1;

    assert!(draw::pset(&mut surface, 1.5, 0).is_err());
    assert!(draw::circle(&mut surface, 3, 3, -2, None).is_err());
    assert!(draw::rect(&mut surface, 0, 0, 3, 3, Some(&ColorInput::Index(1))).is_err());
    let bogus = ColorInput::from("nope");
    assert!(draw::ellipse(&mut surface, 3, 3, 2, 2, Some(&bogus)).is_err());

    assert!(!surface.is_dirty());
    assert!(lit_pixels(&surface).is_empty());
    assert!(!surface.tick(&mut count));
    assert_eq!(frames, 0);
}

#[test]
fn many_writes_one_repaint() {
    let mut surface = Surface::new(16, 16);
    let mut frames = Vec::new();
    let mut record = |frame: &PixelBuffer| frames.push(frame.clone());

    draw::circle(&mut surface, 8, 8, 6, Some(&ColorInput::from("blue"))).unwrap();
    draw::line(&mut surface, 0, 15, 15, 0).unwrap();
    draw::arc(&mut surface, 8, 8, 4, 0, 180).unwrap();
    assert_eq!(surface.scheduler().repaints(), 0);

    assert!(surface.tick(&mut record));
    assert!(!surface.tick(&mut record));
    assert_eq!(frames.len(), 1);
    assert_eq!(surface.scheduler().repaints(), 1);
    assert_eq!(frames[0].get_pixel(8, 8), Some(Color::BLUE));
    assert!(!surface.is_dirty());
}

#[test]
fn filled_circle_interior_and_outline() {
    let mut surface = Surface::new(32, 32);
    surface.set_color(&ColorInput::from("#0F0")).unwrap();
    let stroke = surface.state().color;
    draw::circle(&mut surface, 16, 16, 9, Some(&ColorInput::from("magenta"))).unwrap();

    let outline: HashSet<_> = circle_outline(9).into_iter().collect();
    for &(dx, dy) in &outline {
        assert_eq!(surface.get_pixel_safe(16 + dx, 16 + dy), Some(stroke));
    }
    // strictly inside: well within radius - 1 and not on the outline
    for dy in -6..=6_i32 {
        for dx in -6..=6_i32 {
            if dx * dx + dy * dy < 36 && !outline.contains(&(dx, dy)) {
                assert_eq!(
                    surface.get_pixel_safe(16 + dx, 16 + dy),
                    Some(Color::rgb(255, 0, 255)),
                    "({dx},{dy})"
                );
            }
        }
    }
}

#[test]
fn arc_through_zero_degrees() {
    let mut surface = Surface::new(40, 40);
    draw::arc(&mut surface, 20, 20, 15, 350, 10).unwrap();

    let lit = lit_pixels(&surface);
    assert!(!lit.is_empty());
    for (x, y) in lit {
        let angle = f64::from(y - 20).atan2(f64::from(x - 20)).to_degrees();
        let angle = if angle < 0.0 { angle + 360.0 } else { angle };
        assert!(angle >= 350.0 || angle <= 10.0, "({x},{y}) at {angle}");
    }
}

#[test]
fn line_is_symmetric_in_endpoints() {
    for (x1, y1, x2, y2) in [(0, 0, 7, 3), (6, 1, 1, 5), (2, 7, 2, 0), (7, 7, 0, 6)] {
        let mut a = Surface::new(8, 8);
        let mut b = Surface::new(8, 8);
        draw::line(&mut a, x1, y1, x2, y2).unwrap();
        draw::line(&mut b, x2, y2, x1, y1).unwrap();
        assert_eq!(lit_pixels(&a), lit_pixels(&b));
    }
}

#[test]
fn color_forms_agree() {
    let hex = parse_color(&ColorInput::from("#FF00FF")).unwrap();
    let array = parse_color(&ColorInput::from([255_u8, 0, 255, 255])).unwrap();
    let record = parse_color(&ColorInput::Rgba {
        r: 255.0,
        g: 0.0,
        b: 255.0,
        a: Some(255.0),
    })
    .unwrap();
    assert_eq!(hex, array);
    assert_eq!(array, record);

    let surface = Surface::new(1, 1);
    assert!(matches!(
        surface.resolve_draw_color(&ColorInput::Index(1), "fill"),
        Err(DrawError::ColorOutOfRange { index: 1, len: 1, .. })
    ));
}

#[test]
fn shapes_clip_at_every_edge() {
    let mut surface = Surface::new(5, 5);
    draw::circle(&mut surface, -2, -2, 6, Some(&ColorInput::from("red"))).unwrap();
    draw::ellipse(&mut surface, 7, 2, 4, 9, None).unwrap();
    draw::line(&mut surface, -100, 2, 100, 2).unwrap();
    draw::rect(&mut surface, -1, -1, 100, 100, None).unwrap();
    assert!(lit_pixels(&surface)
        .iter()
        .all(|&(x, y)| (0..5).contains(&x) && (0..5).contains(&y)));
    assert_eq!(surface.get_pixel_safe(5, 0), None);
}

#[test]
fn alpha_blend_keeps_existing_alpha() {
    let mut surface = Surface::new(2, 1);
    surface.set_color(&ColorInput::from("blue")).unwrap();
    draw::pset(&mut surface, 0, 0).unwrap();

    surface.set_blend(BlendLaw::Alpha);
    surface
        .set_color(&ColorInput::from("rgba(255, 0, 0, 0.5)"))
        .unwrap();
    draw::pset(&mut surface, 0, 0).unwrap();
    assert_eq!(surface.get_pixel_safe(0, 0), Some(Color::rgba(128, 0, 127, 255)));
}

#[test]
fn seeded_noise_is_reproducible() {
    let paint = || {
        let mut surface = Surface::new(8, 1);
        surface.set_color(&ColorInput::from("gray")).unwrap();
        surface.set_noise(Some(Noise::Shared(60.0)));
        surface.set_random_source(Box::new(Rng::new(42)));
        draw::line(&mut surface, 0, 0, 7, 0).unwrap();
        let pixels: Vec<_> = (0..8).map(|x| surface.get_pixel_safe(x, 0)).collect();
        (pixels, surface.state().color)
    };
    let (first, stored) = paint();
    assert_eq!(first, paint().0);
    // jitter lands in the pixels only
    assert_eq!(stored, Color::rgb(128, 128, 128));
    assert!(first.iter().any(|&p| p != Some(stored)));
}

fn band(
    rows: impl IntoIterator<Item = (i32, std::ops::RangeInclusive<i32>)>,
) -> HashSet<(i32, i32)> {
    rows.into_iter()
        .flat_map(|(y, xs)| xs.map(move |x| (x, y)))
        .collect()
}

#[test]
fn square_pen_thickens_a_line() {
    let mut surface = Surface::new(16, 11);
    surface.set_pen(Pen::Square(2));
    draw::line(&mut surface, 2, 5, 12, 5).unwrap();

    let expected = band((4..=6).map(|y| (y, 1..=13)));
    assert_eq!(expected.len(), 39);
    assert_eq!(lit_pixels(&surface), expected);
}

#[test]
fn circle_pen_rounds_the_line_caps() {
    let mut surface = Surface::new(16, 11);
    surface.set_pen(Pen::Circle(3));
    draw::line(&mut surface, 2, 5, 12, 5).unwrap();

    let expected = band([
        (3, 1..=13),
        (4, 0..=14),
        (5, 0..=14),
        (6, 0..=14),
        (7, 1..=13),
    ]);
    assert_eq!(expected.len(), 71);
    assert_eq!(lit_pixels(&surface), expected);
}

#[test]
fn pen_applies_along_curved_outlines() {
    let stamp = |points: Vec<(i32, i32)>| -> HashSet<(i32, i32)> {
        points
            .into_iter()
            .flat_map(|(dx, dy)| {
                let (x, y) = (12 + dx, 12 + dy);
                (-1..=1).flat_map(move |oy| (-1..=1).map(move |ox| (x + ox, y + oy)))
            })
            .collect()
    };

    let mut surface = Surface::new(24, 24);
    surface.set_pen(Pen::Square(2));
    draw::circle(&mut surface, 12, 12, 7, None).unwrap();
    assert_eq!(lit_pixels(&surface), stamp(circle_outline(7)));

    let mut surface = Surface::new(24, 24);
    surface.set_pen(Pen::Square(2));
    draw::ellipse(&mut surface, 12, 12, 9, 4, None).unwrap();
    assert_eq!(lit_pixels(&surface), stamp(ellipse_outline(9, 4)));

    let mut surface = Surface::new(24, 24);
    surface.set_pen(Pen::Square(2));
    draw::arc(&mut surface, 12, 12, 8, 0, 90).unwrap();
    assert_eq!(lit_pixels(&surface), stamp(arc_offsets(8, 0.0, 90.0)));
}

#[test]
fn shapes_at_coordinate_limits_are_clipped() {
    let mut surface = Surface::new(4, 4);
    draw::circle(&mut surface, i32::MAX, 0, 3, Some(&ColorInput::from("red"))).unwrap();
    draw::ellipse(&mut surface, i32::MIN, 0, 3, 3, Some(&ColorInput::from("red"))).unwrap();
    draw::arc(&mut surface, 0, i32::MIN, 3, 0, 360).unwrap();
    surface.set_pen(Pen::Square(3));
    draw::pset(&mut surface, i32::MAX, 0).unwrap();
    draw::line(&mut surface, i32::MIN, i32::MAX, i32::MIN, i32::MAX - 10).unwrap();

    assert!(!surface.is_dirty());
    assert!(lit_pixels(&surface).is_empty());
}

#[test]
fn huge_ellipse_clips_to_its_visible_tip() {
    let mut surface = Surface::new(8, 8);
    draw::ellipse(&mut surface, 50_000, 4, 50_000, 50_000, None).unwrap();

    let expected = band((0..8).map(|y| (y, 0..=0)));
    assert_eq!(lit_pixels(&surface), expected);
}
