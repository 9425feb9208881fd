use leatherkit_pattern::model::{FoldLine, LineRole, Point, Shape, ShapeGeometry, ShapeType};

#[test]
fn test_line_role_classification() {
    assert_eq!(LineRole::from_line_type("stitch"), LineRole::Stitch);
    assert_eq!(LineRole::from_line_type("Fold"), LineRole::Fold);
    assert_eq!(LineRole::from_line_type("decorative"), LineRole::Other);
    assert!("decorative".parse::<LineRole>().is_err());
}

#[test]
fn test_shape_accessors() {
    let shape = Shape::bezier(
        "b1",
        "front",
        "cut",
        Point::new(0.0, 0.0),
        Point::new(5.0, 8.0),
        Point::new(10.0, 0.0),
    )
    .with_group("strap");
    assert_eq!(shape.shape_type(), ShapeType::Bezier);
    assert_eq!(shape.start(), Point::new(0.0, 0.0));
    assert_eq!(shape.end(), Point::new(10.0, 0.0));
    assert_eq!(shape.mid_anchor(), Point::new(5.0, 8.0));
    assert_eq!(shape.group_id.as_deref(), Some("strap"));
    assert_eq!(shape.role(), LineRole::Cut);
}

#[test]
fn test_translate_moves_every_control_point() {
    let shape = Shape::arc(
        "a1",
        "front",
        "cut",
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
        Point::new(-10.0, 0.0),
    );
    let moved = shape.translated(2.0, -3.0);
    match &moved.geometry {
        ShapeGeometry::Arc(arc) => {
            assert_eq!(arc.start, Point::new(12.0, -3.0));
            assert_eq!(arc.mid, Point::new(2.0, 7.0));
            assert_eq!(arc.end, Point::new(-8.0, -3.0));
        }
        other => panic!("expected arc, got {:?}", other),
    }
    // The original snapshot is left alone.
    assert_eq!(shape.start(), Point::new(10.0, 0.0));
}

#[test]
fn test_fold_line_projection_clamps() {
    let fold = FoldLine::new("f1", Point::new(0.0, 0.0), Point::new(0.0, 10.0));
    assert_eq!(fold.project(Point::new(3.0, 4.0)), Point::new(0.0, 4.0));
    assert_eq!(fold.project(Point::new(3.0, 14.0)), Point::new(0.0, 10.0));
    assert_eq!(fold.project(Point::new(-1.0, -5.0)), Point::new(0.0, 0.0));
}

#[test]
fn test_lyon_path_handoff() {
    let shape = Shape::line("l1", "front", "cut", Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let path = shape.to_lyon_path(24);
    // begin, line_to, end
    assert_eq!(path.iter().count(), 3);
}

#[test]
fn test_shape_json_round_trip_keeps_tags() {
    let shape = Shape::line("l1", "front", "stitch", Point::new(0.0, 0.0), Point::new(1.0, 2.0));
    let json = serde_json::to_value(&shape).unwrap();
    assert_eq!(json["geometry"]["type"], "line");
    let back: Shape = serde_json::from_value(json).unwrap();
    assert_eq!(back, shape);
}
