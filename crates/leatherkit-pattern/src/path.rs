//! Arc-length parametrization of sampled paths.
//!
//! A [`SampledPath`] pairs an ordered point sequence with its cumulative
//! Euclidean lengths, so positions can be addressed by distance traveled
//! independent of how densely the source shape was sampled.

use crate::model::{Point, Shape};
use crate::sampler;
use leatherkit_core::EPSILON;

/// A position on a path with the local direction of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub point: Point,
    /// Tangent angle in degrees, `atan2` convention.
    pub angle_deg: f64,
}

/// Result of projecting an arbitrary point onto a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathProjection {
    /// Closest point on the path.
    pub point: Point,
    /// Arc-length position of `point` from the path start.
    pub distance_along: f64,
    /// Distance from the query point to `point`.
    pub distance: f64,
}

/// Ordered points plus a parallel, non-decreasing cumulative length table.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledPath {
    points: Vec<Point>,
    lengths: Vec<f64>,
}

impl SampledPath {
    /// Builds the cumulative length table over `points`.
    pub fn new(points: Vec<Point>) -> Self {
        let mut lengths = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                total += points[i - 1].distance_to(p);
            }
            lengths.push(total);
        }
        Self { points, lengths }
    }

    /// Samples `shape` at the given density and parametrizes the result.
    pub fn from_shape(shape: &Shape, segments: usize) -> Self {
        Self::new(sampler::sample(shape, segments))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Position and tangent at arc-length `distance`, clamped to the path.
    ///
    /// Returns `None` only for an empty path.
    pub fn point_at_distance(&self, distance: f64) -> Option<PathSample> {
        let first = *self.points.first()?;
        if self.points.len() == 1 {
            return Some(PathSample {
                point: first,
                angle_deg: 0.0,
            });
        }

        let total = self.total_length();
        let d = if distance.is_nan() {
            0.0
        } else {
            distance.clamp(0.0, total)
        };

        // First segment whose end reaches `d`.
        let last = self.points.len() - 1;
        let mut i = (1 + self.lengths[1..].partition_point(|&l| l < d)).min(last);
        // Zero-length segments carry no direction; move on to the next real one.
        while i < last && self.segment_length(i) <= EPSILON {
            i += 1;
        }

        let a = self.points[i - 1];
        let b = self.points[i];
        let seg_len = self.segment_length(i);
        let t = if seg_len > EPSILON {
            ((d - self.lengths[i - 1]) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Some(PathSample {
            point: a.lerp(&b, t),
            angle_deg: (b.y - a.y).atan2(b.x - a.x).to_degrees(),
        })
    }

    /// Closest point on the path to `p` and its arc-length position.
    ///
    /// Near-zero-length segments are skipped. Returns `None` when the path
    /// has no usable segment.
    pub fn project_point(&self, p: Point) -> Option<PathProjection> {
        let mut best: Option<PathProjection> = None;

        for i in 1..self.points.len() {
            let a = self.points[i - 1];
            let b = self.points[i];
            let ab = b - a;
            let len_sq = ab.dot(&ab);
            if len_sq <= EPSILON * EPSILON {
                continue;
            }

            let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
            let projected = a.lerp(&b, t);
            let distance = projected.distance_to(&p);

            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PathProjection {
                    point: projected,
                    distance_along: self.lengths[i - 1] + projected.distance_to(&a),
                    distance,
                });
            }
        }

        best
    }

    fn segment_length(&self, i: usize) -> f64 {
        self.lengths[i] - self.lengths[i - 1]
    }
}
