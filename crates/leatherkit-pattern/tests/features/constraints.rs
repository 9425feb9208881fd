use leatherkit_core::SequentialIdGenerator;
use leatherkit_pattern::constraints::{
    apply_constraints, apply_with_report, AlignAxis, Anchor, ConstraintOutcome, Edge,
    ParametricConstraint,
};
use leatherkit_pattern::model::{Layer, Point, Shape};

fn layers() -> Vec<Layer> {
    vec![
        Layer::new("back", "Back panel"),
        Layer::new("front", "Front panel"),
        Layer::new("empty", "Empty"),
    ]
}

fn shapes() -> Vec<Shape> {
    vec![
        Shape::line("a", "front", "cut", Point::new(5.0, 5.0), Point::new(25.0, 5.0)),
        Shape::line("b", "back", "cut", Point::new(0.0, 0.0), Point::new(50.0, 40.0)),
    ]
}

fn edge_offset(shape_id: &str, layer_id: &str, edge: Edge, anchor: Anchor, offset: f64) -> ParametricConstraint {
    let mut ids = SequentialIdGenerator::new("constraint");
    ParametricConstraint::edge_offset(&mut ids, shape_id, layer_id, edge, anchor, offset)
}

fn align(shape_id: &str, reference: &str, axis: AlignAxis, anchor: Anchor, reference_anchor: Anchor) -> ParametricConstraint {
    let mut ids = SequentialIdGenerator::new("constraint");
    ParametricConstraint::align(&mut ids, shape_id, reference, axis, anchor, reference_anchor)
}

fn find<'a>(shapes: &'a [Shape], id: &str) -> &'a Shape {
    shapes.iter().find(|s| s.id == id).unwrap()
}

#[test]
fn test_left_edge_offset() {
    let result = apply_constraints(
        &shapes(),
        &layers(),
        &[edge_offset("a", "back", Edge::Left, Anchor::Start, 10.0)],
    );
    let a = find(&result, "a");
    assert_eq!(a.start(), Point::new(10.0, 5.0));
    assert_eq!(a.end(), Point::new(30.0, 5.0));
    // The reference shape is untouched.
    assert_eq!(find(&result, "b"), &shapes()[1]);
}

#[test]
fn test_other_edges() {
    let result = apply_constraints(
        &shapes(),
        &layers(),
        &[edge_offset("a", "back", Edge::Right, Anchor::End, 10.0)],
    );
    assert_eq!(find(&result, "a").end(), Point::new(40.0, 5.0));

    let result = apply_constraints(
        &shapes(),
        &layers(),
        &[edge_offset("a", "back", Edge::Top, Anchor::Start, 2.0)],
    );
    assert_eq!(find(&result, "a").start(), Point::new(5.0, 2.0));

    let result = apply_constraints(
        &shapes(),
        &layers(),
        &[edge_offset("a", "back", Edge::Bottom, Anchor::Start, 2.0)],
    );
    assert_eq!(find(&result, "a").start(), Point::new(5.0, 38.0));
}

#[test]
fn test_align_single_axis_and_both() {
    let result = apply_constraints(
        &shapes(),
        &layers(),
        &[align("a", "b", AlignAxis::X, Anchor::Start, Anchor::End)],
    );
    assert_eq!(find(&result, "a").start(), Point::new(50.0, 5.0));

    let result = apply_constraints(
        &shapes(),
        &layers(),
        &[align("a", "b", AlignAxis::Both, Anchor::Start, Anchor::End)],
    );
    assert_eq!(find(&result, "a").start(), Point::new(50.0, 40.0));
}

#[test]
fn test_center_anchor_uses_sample_centroid() {
    let result = apply_constraints(
        &shapes(),
        &layers(),
        &[align("a", "b", AlignAxis::X, Anchor::Center, Anchor::Mid)],
    );
    // Center of a is (15, 5); mid of b is (25, 20).
    assert_eq!(find(&result, "a").start(), Point::new(15.0, 5.0));
}

#[test]
fn test_constraints_see_earlier_moves() {
    let mut input = shapes();
    input.push(Shape::line("c", "back", "cut", Point::new(100.0, 100.0), Point::new(110.0, 100.0)));

    let result = apply_constraints(
        &input,
        &layers(),
        &[
            align("b", "c", AlignAxis::Both, Anchor::Start, Anchor::Start),
            align("a", "b", AlignAxis::Both, Anchor::Start, Anchor::Start),
        ],
    );
    assert_eq!(find(&result, "b").start(), Point::new(100.0, 100.0));
    assert_eq!(find(&result, "a").start(), Point::new(100.0, 100.0));
}

#[test]
fn test_dangling_references_are_skipped() {
    let constraints = vec![
        edge_offset("a", "nowhere", Edge::Left, Anchor::Start, 10.0),
        edge_offset("ghost", "back", Edge::Left, Anchor::Start, 10.0),
        align("a", "ghost", AlignAxis::X, Anchor::Start, Anchor::Start),
        edge_offset("a", "empty", Edge::Left, Anchor::Start, 10.0),
        edge_offset("a", "back", Edge::Left, Anchor::Start, 1.0),
    ];
    let (result, reports) = apply_with_report(&shapes(), &layers(), &constraints);

    let outcomes: Vec<ConstraintOutcome> = reports.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            ConstraintOutcome::MissingReference,
            ConstraintOutcome::MissingShape,
            ConstraintOutcome::MissingReference,
            ConstraintOutcome::EmptyReferenceLayer,
            ConstraintOutcome::Applied,
        ]
    );
    // Only the last constraint moved anything.
    assert_eq!(find(&result, "a").start(), Point::new(1.0, 5.0));
}

#[test]
fn test_disabled_constraint_is_skipped() {
    let mut constraint = edge_offset("a", "back", Edge::Left, Anchor::Start, 10.0);
    constraint.set_enabled(false);
    let (result, reports) = apply_with_report(&shapes(), &layers(), &[constraint]);
    assert_eq!(result, shapes());
    assert_eq!(reports[0].outcome, ConstraintOutcome::Disabled);
}

#[test]
fn test_constructors_draw_ids() {
    let mut ids = SequentialIdGenerator::new("c");
    let first = ParametricConstraint::edge_offset(&mut ids, "a", "back", Edge::Left, Anchor::Start, 1.0);
    let second = ParametricConstraint::align(&mut ids, "a", "b", AlignAxis::Y, Anchor::Mid, Anchor::Mid);
    assert_eq!(first.id(), "c-0");
    assert_eq!(second.id(), "c-1");
    assert!(first.is_enabled() && second.is_enabled());
    assert_eq!(second.shape_id(), "a");
}

#[test]
fn test_constraint_json_shape() {
    let constraint = edge_offset("a", "back", Edge::Left, Anchor::Start, 10.0);
    let json = serde_json::to_value(&constraint).unwrap();
    assert_eq!(json["kind"], "edge_offset");
    assert_eq!(json["edge"], "left");
    let back: ParametricConstraint = serde_json::from_value(json).unwrap();
    assert_eq!(back, constraint);
}
