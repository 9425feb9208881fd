use leatherkit_pattern::model::{Point, Shape};
use leatherkit_pattern::sequence::{
    holes_for_shape, normalize, resequence_on_shape, rotate_from, select_next, select_previous,
};
use leatherkit_pattern::stitching::{HoleType, StitchHole};

fn hole(id: &str, shape_id: &str, x: f64, sequence: usize) -> StitchHole {
    StitchHole {
        id: id.to_string(),
        shape_id: shape_id.to_string(),
        point: Point::new(x, 0.0),
        angle_deg: 0.0,
        hole_type: HoleType::Round,
        sequence,
    }
}

fn edge() -> Shape {
    Shape::line("edge", "front", "stitch", Point::new(0.0, 0.0), Point::new(100.0, 0.0))
}

fn sequence_of(holes: &[StitchHole], id: &str) -> usize {
    holes
        .iter()
        .find(|h| h.id == id)
        .map(|h| h.sequence)
        .unwrap_or_else(|| panic!("hole {} missing", id))
}

/// Hole ids ordered by their sequence number on `shape_id`.
fn order_on(holes: &[StitchHole], shape_id: &str) -> Vec<String> {
    holes_for_shape(holes, shape_id)
        .into_iter()
        .map(|h| h.id)
        .collect()
}

fn shuffled() -> Vec<StitchHole> {
    vec![
        hole("h-a", "edge", 50.0, 0),
        hole("h-b", "edge", 10.0, 1),
        hole("h-c", "edge", 90.0, 2),
    ]
}

#[test]
fn test_normalize_groups_and_renumbers() {
    let holes = vec![
        hole("x2", "s1", 0.0, 5),
        hole("y1", "s2", 0.0, 3),
        hole("x1", "s1", 0.0, 2),
        hole("x0", "s1", 0.0, 2),
    ];
    let normalized = normalize(&holes);
    let summary: Vec<(&str, &str, usize)> = normalized
        .iter()
        .map(|h| (h.shape_id.as_str(), h.id.as_str(), h.sequence))
        .collect();
    assert_eq!(
        summary,
        vec![("s1", "x0", 0), ("s1", "x1", 1), ("s1", "x2", 2), ("s2", "y1", 0)]
    );
    assert_eq!(normalize(&normalized), normalized);
}

#[test]
fn test_empty_and_single_collections() {
    assert!(normalize(&[]).is_empty());
    assert!(select_next(&[], None).is_none());
    assert!(select_previous(&[], Some("nope")).is_none());

    let single = vec![hole("only", "edge", 4.0, 9)];
    assert_eq!(normalize(&single)[0].sequence, 0);
    assert_eq!(select_next(&single, Some("only")).unwrap().id, "only");
    assert_eq!(resequence_on_shape(&single, &edge(), true)[0].sequence, 0);
}

#[test]
fn test_resequence_follows_path() {
    let result = resequence_on_shape(&shuffled(), &edge(), false);
    assert_eq!(order_on(&result, "edge"), vec!["h-b", "h-a", "h-c"]);
}

#[test]
fn test_reverse_flips_current_direction() {
    let forward = resequence_on_shape(&shuffled(), &edge(), false);
    let backward = resequence_on_shape(&forward, &edge(), true);
    assert_eq!(order_on(&backward, "edge"), vec!["h-c", "h-a", "h-b"]);

    let restored = resequence_on_shape(&backward, &edge(), true);
    assert_eq!(order_on(&restored, "edge"), vec!["h-b", "h-a", "h-c"]);
}

#[test]
fn test_resequence_leaves_other_shapes_alone() {
    let mut holes = shuffled();
    holes.insert(1, hole("o-1", "other", 500.0, 7));
    let result = resequence_on_shape(&holes, &edge(), false);

    assert_eq!(result.len(), 4);
    assert_eq!(result[1], holes[1]);
    assert_eq!(sequence_of(&result, "h-b"), 0);
}

#[test]
fn test_rotate_from_starts_at_chosen_hole() {
    let result = rotate_from(&shuffled(), &edge(), "h-a", false);
    assert_eq!(order_on(&result, "edge"), vec!["h-a", "h-c", "h-b"]);

    assert_eq!(sequence_of(&result, "h-a"), 0);
    assert_eq!(sequence_of(&result, "h-b"), 2);
}

#[test]
fn test_rotate_from_reversed_walks_backwards() {
    let forward = resequence_on_shape(&shuffled(), &edge(), false);
    let reversed = rotate_from(&forward, &edge(), "h-a", true);
    assert_eq!(order_on(&reversed, "edge"), vec!["h-a", "h-b", "h-c"]);
    assert_eq!(sequence_of(&reversed, "h-a"), 0);
    assert_eq!(sequence_of(&reversed, "h-c"), 2);
}

#[test]
fn test_reverse_from_backward_numbering_yields_path_order() {
    let forward = resequence_on_shape(&shuffled(), &edge(), false);
    let backward = resequence_on_shape(&forward, &edge(), true);
    let flipped = resequence_on_shape(&backward, &edge(), true);
    assert_eq!(flipped, forward);
}

#[test]
fn test_rotate_from_unknown_hole_only_resequences() {
    let result = rotate_from(&shuffled(), &edge(), "missing", false);
    assert_eq!(result, resequence_on_shape(&shuffled(), &edge(), false));
}

#[test]
fn test_select_next_cycles_within_shape() {
    let holes = vec![
        hole("a", "s1", 0.0, 0),
        hole("b", "s1", 1.0, 1),
        hole("c", "s1", 2.0, 2),
        hole("z", "s2", 0.0, 0),
    ];
    assert_eq!(select_next(&holes, None).unwrap().id, "a");
    assert_eq!(select_next(&holes, Some("a")).unwrap().id, "b");
    assert_eq!(select_next(&holes, Some("c")).unwrap().id, "a");
    assert_eq!(select_next(&holes, Some("z")).unwrap().id, "z");
    assert_eq!(select_next(&holes, Some("ghost")).unwrap().id, "a");
}

#[test]
fn test_select_previous_wraps() {
    let holes = vec![
        hole("a", "s1", 0.0, 0),
        hole("b", "s1", 1.0, 1),
        hole("c", "s1", 2.0, 2),
    ];
    assert_eq!(select_previous(&holes, Some("a")).unwrap().id, "c");
    assert_eq!(select_previous(&holes, Some("c")).unwrap().id, "b");
    assert_eq!(select_previous(&holes, None).unwrap().id, "a");
}
