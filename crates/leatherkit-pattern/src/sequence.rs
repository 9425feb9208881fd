//! Hole numbering and ordering.
//!
//! All operations take a snapshot of holes and return a new collection.
//! Empty and single-hole collections pass through unchanged, and unknown ids
//! never cause a failure.

use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::trace;

use crate::model::Shape;
use crate::path::SampledPath;
use crate::sampler::PITCH_SEGMENTS;
use crate::stitching::StitchHole;

fn by_sequence_then_id(a: &StitchHole, b: &StitchHole) -> Ordering {
    a.sequence.cmp(&b.sequence).then_with(|| a.id.cmp(&b.id))
}

/// Groups holes by shape (in order of first appearance), sorts each group by
/// `(sequence, id)` and renumbers it `0..n-1`.
pub fn normalize(holes: &[StitchHole]) -> Vec<StitchHole> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&StitchHole>> = HashMap::new();
    for hole in holes {
        groups
            .entry(hole.shape_id.as_str())
            .or_insert_with(|| {
                order.push(hole.shape_id.as_str());
                Vec::new()
            })
            .push(hole);
    }

    let mut result = Vec::with_capacity(holes.len());
    for shape_id in order {
        let Some(group) = groups.get_mut(shape_id) else {
            continue;
        };
        group.sort_by(|a, b| by_sequence_then_id(a, b));
        result.extend(group.iter().enumerate().map(|(i, hole)| StitchHole {
            sequence: i,
            ..(*hole).clone()
        }));
    }
    result
}

/// Holes belonging to `shape_id`, ordered by sequence.
pub fn holes_for_shape(holes: &[StitchHole], shape_id: &str) -> Vec<StitchHole> {
    let mut selected: Vec<StitchHole> = holes
        .iter()
        .filter(|h| h.shape_id == shape_id)
        .cloned()
        .collect();
    selected.sort_by(by_sequence_then_id);
    selected
}

/// Orders the holes of `shape` by where they project onto the shape and
/// renumbers them.
///
/// Without `reverse` the numbering follows the path direction. With
/// `reverse` the current numbering direction is flipped, so reversing twice
/// restores path order. Holes on other shapes keep their slots untouched.
///
/// Note that `reverse = true` yields forward path order when the holes are
/// currently numbered against the path.
pub fn resequence_on_shape(holes: &[StitchHole], shape: &Shape, reverse: bool) -> Vec<StitchHole> {
    let ordered = ordered_on_shape(holes, shape, reverse);
    write_back(holes, shape, renumber(ordered))
}

/// Resequences like [`resequence_on_shape`] and then rotates the order so
/// `start_hole_id` becomes hole 0. An unknown id leaves the resequenced
/// order as is.
pub fn rotate_from(
    holes: &[StitchHole],
    shape: &Shape,
    start_hole_id: &str,
    reverse: bool,
) -> Vec<StitchHole> {
    let mut ordered = ordered_on_shape(holes, shape, reverse);
    if let Some(pos) = ordered.iter().position(|h| h.id == start_hole_id) {
        ordered.rotate_left(pos);
    }
    write_back(holes, shape, renumber(ordered))
}

/// Cyclic successor of `current_hole_id` within its shape.
///
/// `None`, or an id that is not present, selects the first hole in
/// normalized order.
pub fn select_next(holes: &[StitchHole], current_hole_id: Option<&str>) -> Option<StitchHole> {
    select_step(holes, current_hole_id, 1)
}

/// Cyclic predecessor of `current_hole_id` within its shape.
pub fn select_previous(holes: &[StitchHole], current_hole_id: Option<&str>) -> Option<StitchHole> {
    select_step(holes, current_hole_id, -1)
}

fn select_step(holes: &[StitchHole], current_hole_id: Option<&str>, step: isize) -> Option<StitchHole> {
    let normalized = normalize(holes);
    let current = current_hole_id.and_then(|id| normalized.iter().find(|h| h.id == id));
    let Some(current) = current else {
        return normalized.first().cloned();
    };

    // normalize() keeps each shape's holes contiguous and in sequence order.
    let group: Vec<&StitchHole> = normalized
        .iter()
        .filter(|h| h.shape_id == current.shape_id)
        .collect();
    let len = group.len() as isize;
    let pos = group.iter().position(|h| h.id == current.id)? as isize;
    let next = (pos + step).rem_euclid(len) as usize;
    Some(group[next].clone())
}

/// The holes of `shape` in their new order, still carrying their old
/// sequence numbers.
fn ordered_on_shape(holes: &[StitchHole], shape: &Shape, reverse: bool) -> Vec<StitchHole> {
    let path = SampledPath::from_shape(shape, PITCH_SEGMENTS);
    let mut positioned: Vec<(f64, &StitchHole)> = holes
        .iter()
        .filter(|h| h.shape_id == shape.id)
        .map(|h| {
            let along = path
                .project_point(h.point)
                .map(|p| p.distance_along)
                .unwrap_or(0.0);
            (along, h)
        })
        .collect();

    let runs_backwards = runs_against_path(&positioned);
    positioned.sort_by(|(da, a), (db, b)| {
        da.total_cmp(db).then_with(|| by_sequence_then_id(a, b))
    });
    if reverse && !runs_backwards {
        positioned.reverse();
    }

    trace!(
        "Resequenced {} holes on shape {} (reverse: {})",
        positioned.len(),
        shape.id,
        reverse
    );

    positioned.into_iter().map(|(_, hole)| hole.clone()).collect()
}

fn renumber(ordered: Vec<StitchHole>) -> Vec<StitchHole> {
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, hole)| StitchHole { sequence: i, ..hole })
        .collect()
}

/// Whether the current numbering runs from the path end towards its start.
fn runs_against_path(positioned: &[(f64, &StitchHole)]) -> bool {
    let first = positioned
        .iter()
        .min_by(|(_, a), (_, b)| by_sequence_then_id(a, b));
    let last = positioned
        .iter()
        .max_by(|(_, a), (_, b)| by_sequence_then_id(a, b));
    match (first, last) {
        (Some((d_first, _)), Some((d_last, _))) => d_first > d_last,
        _ => false,
    }
}

/// Puts `ordered` into the slots previously held by `shape`'s holes.
fn write_back(holes: &[StitchHole], shape: &Shape, ordered: Vec<StitchHole>) -> Vec<StitchHole> {
    let mut replacements = ordered.into_iter();
    holes
        .iter()
        .map(|hole| {
            if hole.shape_id == shape.id {
                replacements.next().unwrap_or_else(|| hole.clone())
            } else {
                hole.clone()
            }
        })
        .collect()
}
