//! Seam allowance offset curves.
//!
//! Offsets are built by shifting each sample of a shape along its local
//! left-hand normal. The sign of the offset picks the side: positive moves
//! to the left of the direction of travel, negative to the right.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::model::{Point, Shape};
use crate::sampler::{self, SEAM_SEGMENTS};
use leatherkit_core::EPSILON;

/// Offsets closer to zero than this are not drawn.
pub const MIN_VISIBLE_OFFSET_MM: f64 = 1e-3;

/// A seam allowance attached to a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeamAllowance {
    pub id: String,
    pub shape_id: String,
    /// Signed offset; the sign selects the side.
    pub offset_mm: f64,
}

impl SeamAllowance {
    pub fn new(id: impl Into<String>, shape_id: impl Into<String>, offset_mm: f64) -> Self {
        Self {
            id: id.into(),
            shape_id: shape_id.into(),
            offset_mm,
        }
    }
}

/// Serializes points as an open `M`/`L` polyline command string.
pub fn polyline_path_data(points: &[Point]) -> String {
    let mut data = String::with_capacity(points.len() * 24);
    for (i, p) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            data.push(' ');
        }
        data.push_str(&format!("{} {:.3} {:.3}", command, p.x, p.y));
    }
    data
}

/// Builds offset polylines for shapes.
#[derive(Debug, Clone)]
pub struct SeamOffsetBuilder {
    samples: usize,
}

impl Default for SeamOffsetBuilder {
    fn default() -> Self {
        Self::new(SEAM_SEGMENTS)
    }
}

impl SeamOffsetBuilder {
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(2),
        }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Offset samples of `shape`, or `None` when the offset is not finite or
    /// too small to see.
    pub fn offset_points(&self, shape: &Shape, offset_mm: f64) -> Option<Vec<Point>> {
        if !offset_mm.is_finite() || offset_mm.abs() <= MIN_VISIBLE_OFFSET_MM {
            return None;
        }

        let points = sampler::sample_uniform(shape, self.samples);
        let last = points.len() - 1;
        let shifted = (0..points.len())
            .map(|i| {
                let prev = points[i.saturating_sub(1)];
                let next = points[(i + 1).min(last)];
                let tangent = next - prev;
                let len = tangent.length();
                if len <= EPSILON {
                    return points[i];
                }
                let normal = Point::new(-tangent.y / len, tangent.x / len);
                points[i] + normal * offset_mm
            })
            .collect();
        Some(shifted)
    }

    /// Offset curve of `shape` as path data, or `None` when there is nothing
    /// to draw.
    pub fn build_offset_path(&self, shape: &Shape, offset_mm: f64) -> Option<String> {
        self.offset_points(shape, offset_mm)
            .map(|points| polyline_path_data(&points))
    }

    /// Path data for every allowance whose shape exists, as
    /// `(allowance id, path data)` pairs in allowance order.
    pub fn build_seam_paths(
        &self,
        shapes: &[Shape],
        allowances: &[SeamAllowance],
    ) -> Vec<(String, String)> {
        let mut by_id: HashMap<&str, &Shape> = HashMap::new();
        for shape in shapes {
            by_id.entry(shape.id.as_str()).or_insert(shape);
        }

        allowances
            .iter()
            .filter_map(|allowance| {
                let Some(shape) = by_id.get(allowance.shape_id.as_str()) else {
                    debug!(
                        "Seam allowance {} references missing shape {}",
                        allowance.id, allowance.shape_id
                    );
                    return None;
                };
                let path = self.build_offset_path(shape, allowance.offset_mm)?;
                Some((allowance.id.clone(), path))
            })
            .collect()
    }
}
