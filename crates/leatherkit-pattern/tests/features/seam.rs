use leatherkit_pattern::model::{Point, Shape};
use leatherkit_pattern::seam::{SeamAllowance, SeamOffsetBuilder};

fn half_circle() -> Shape {
    Shape::arc(
        "arc",
        "front",
        "cut",
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(-10.0, 0.0),
    )
}

#[test]
fn test_invisible_offsets_yield_nothing() {
    let builder = SeamOffsetBuilder::default();
    let shape = half_circle();
    assert!(builder.build_offset_path(&shape, 0.0).is_none());
    assert!(builder.build_offset_path(&shape, 0.0005).is_none());
    assert!(builder.build_offset_path(&shape, -0.001).is_none());
    assert!(builder.build_offset_path(&shape, f64::NAN).is_none());
    assert!(builder.build_offset_path(&shape, f64::INFINITY).is_none());
}

#[test]
fn test_offset_path_has_one_point_per_sample() {
    let builder = SeamOffsetBuilder::default();
    let data = builder.build_offset_path(&half_circle(), 3.0).unwrap();
    assert!(data.starts_with("M "));
    assert_eq!(data.matches('M').count(), 1);
    assert_eq!(data.matches(" L ").count(), 35);

    let line = Shape::line("l", "front", "cut", Point::new(0.0, 0.0), Point::new(70.0, 0.0));
    let data = builder.build_offset_path(&line, 3.0).unwrap();
    assert_eq!(data.matches(" L ").count(), 35);
}

#[test]
fn test_offset_sign_picks_side() {
    let builder = SeamOffsetBuilder::default();
    // Counter-clockwise travel: the left side faces the center.
    let inside = builder.offset_points(&half_circle(), 3.0).unwrap();
    let outside = builder.offset_points(&half_circle(), -3.0).unwrap();
    assert_eq!(inside.len(), 36);
    for p in &inside[1..35] {
        assert!((p.x.hypot(p.y) - 7.0).abs() < 1e-6);
    }
    for p in &outside[1..35] {
        assert!((p.x.hypot(p.y) - 13.0).abs() < 1e-6);
    }
}

#[test]
fn test_line_offset_is_parallel() {
    let line = Shape::line("l", "front", "cut", Point::new(0.0, 0.0), Point::new(35.0, 0.0));
    let points = SeamOffsetBuilder::default().offset_points(&line, 2.0).unwrap();
    assert!(points.iter().all(|p| p.y == 2.0));
    assert_eq!(points[0].x, 0.0);
    assert_eq!(points[35].x, 35.0);
}

#[test]
fn test_degenerate_shape_keeps_points() {
    let p = Point::new(4.0, 4.0);
    let dot = Shape::line("dot", "front", "cut", p, p);
    let points = SeamOffsetBuilder::new(8).offset_points(&dot, 3.0).unwrap();
    assert_eq!(points, vec![p; 8]);
}

#[test]
fn test_build_seam_paths_skips_missing_and_invisible() {
    let shapes = vec![
        half_circle(),
        Shape::line("l", "front", "cut", Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
    ];
    let allowances = vec![
        SeamAllowance::new("s1", "l", 3.0),
        SeamAllowance::new("s2", "ghost", 3.0),
        SeamAllowance::new("s3", "arc", 0.0),
        SeamAllowance::new("s4", "arc", -2.5),
    ];
    let builder = SeamOffsetBuilder::new(4);
    let paths = builder.build_seam_paths(&shapes, &allowances);

    let ids: Vec<&str> = paths.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s4"]);
    assert_eq!(paths[0].1, "M 0.000 3.000 L 3.333 3.000 L 6.667 3.000 L 10.000 3.000");
}

#[test]
fn test_build_seam_paths_uses_first_shape_with_id() {
    let shapes = vec![
        Shape::line("dup", "front", "cut", Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
        Shape::line("dup", "front", "cut", Point::new(0.0, 50.0), Point::new(10.0, 50.0)),
    ];
    let allowances = vec![SeamAllowance::new("s1", "dup", 1.0)];
    let paths = SeamOffsetBuilder::new(2).build_seam_paths(&shapes, &allowances);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].1, "M 0.000 1.000 L 10.000 1.000");
}

#[test]
fn test_collinear_arc_offset_has_full_sample_count() {
    let flat = Shape::arc(
        "flat",
        "front",
        "cut",
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(10.0, 0.0),
    );
    let points = SeamOffsetBuilder::default().offset_points(&flat, 2.0).unwrap();
    assert_eq!(points.len(), 36);
    assert!(points.iter().all(|p| (p.y.abs() - 2.0).abs() < 1e-9));
}
