//! Shape sampling.
//!
//! Turns line, arc and quadratic bezier primitives into ordered point
//! sequences. Callers pick the density: coarse for bounds and anchors, fine
//! for stitch placement.

use crate::model::{PatternPrimitive, Point, Shape, ShapeGeometry};
use leatherkit_core::Bounds;

/// Density used for bounding boxes and anchor centroids.
pub const BOUNDS_SEGMENTS: usize = 24;
/// Density used when placing stitch holes and projecting onto paths.
pub const PITCH_SEGMENTS: usize = 72;
/// Density used for seam allowance offsets.
pub const SEAM_SEGMENTS: usize = 36;

/// Samples a shape into an ordered point sequence.
///
/// Lines always return `[start, end]`. Arcs and beziers return `segments`
/// points (at least two) from start to end inclusive. Degenerate shapes
/// return their repeated point rather than failing.
pub fn sample(shape: &Shape, segments: usize) -> Vec<Point> {
    shape.geometry.sample(segments)
}

/// Samples exactly `count` points (at least two).
///
/// Lines, and curves whose sampling collapses to their endpoints (such as
/// collinear arcs), are subdivided evenly from start to end.
pub fn sample_uniform(shape: &Shape, count: usize) -> Vec<Point> {
    let count = count.max(2);
    if !matches!(shape.geometry, ShapeGeometry::Line(_)) {
        let points = shape.geometry.sample(count);
        if points.len() >= count {
            return points;
        }
    }

    let (start, end) = (shape.start(), shape.end());
    let last = (count - 1) as f64;
    (0..count)
        .map(|i| start.lerp(&end, i as f64 / last))
        .collect()
}

/// Bounding box of a single shape at bounds density.
pub fn shape_bounds(shape: &Shape) -> Bounds {
    shape.bounds(BOUNDS_SEGMENTS)
}

/// Union of the bounds of every shape, or `None` if there are none.
pub fn collection_bounds<'a, I>(shapes: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a Shape>,
{
    shapes
        .into_iter()
        .map(shape_bounds)
        .reduce(|acc, b| acc.union(&b))
}

/// Centroid of a sampled point sequence.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Point::default(), |acc, p| acc + *p);
    Some(sum * (1.0 / points.len() as f64))
}
