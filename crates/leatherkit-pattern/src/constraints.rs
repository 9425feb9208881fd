//! Parametric layout constraints.
//!
//! Constraints reposition one shape relative to either the bounding box of a
//! reference layer or an anchor on another shape. They are applied strictly
//! in list order against a running copy of the shapes, because a later
//! constraint may measure against a shape an earlier one has moved. A
//! constraint whose references cannot be resolved is skipped on its own; it
//! never stops the rest of the list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::model::{Layer, Point, Shape};
use crate::sampler::{self, BOUNDS_SEGMENTS};
use leatherkit_core::{IdGenerator, PatternError, Result};

/// Bounding-box edge an edge-offset constraint measures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Named reference point on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Start,
    End,
    Mid,
    Center,
}

/// Axes an alignment constraint acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignAxis {
    X,
    Y,
    Both,
}

macro_rules! string_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $name),)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = PatternError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(PatternError::unknown($kind, s)),
                }
            }
        }
    };
}

string_enum!(Edge, "edge", { Left => "left", Right => "right", Top => "top", Bottom => "bottom" });
string_enum!(Anchor, "anchor", { Start => "start", End => "end", Mid => "mid", Center => "center" });
string_enum!(AlignAxis, "align axis", { X => "x", Y => "y", Both => "both" });

/// Keeps a shape's anchor a fixed distance inside an edge of a layer's bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeOffsetConstraint {
    pub id: String,
    pub shape_id: String,
    pub reference_layer_id: String,
    pub edge: Edge,
    pub anchor: Anchor,
    pub offset_mm: f64,
    pub enabled: bool,
}

/// Lines up a shape's anchor with another shape's anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignConstraint {
    pub id: String,
    pub shape_id: String,
    pub reference_shape_id: String,
    pub axis: AlignAxis,
    pub anchor: Anchor,
    pub reference_anchor: Anchor,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParametricConstraint {
    EdgeOffset(EdgeOffsetConstraint),
    Align(AlignConstraint),
}

impl ParametricConstraint {
    /// New enabled edge-offset constraint with an id from `ids`.
    pub fn edge_offset(
        ids: &mut dyn IdGenerator,
        shape_id: impl Into<String>,
        reference_layer_id: impl Into<String>,
        edge: Edge,
        anchor: Anchor,
        offset_mm: f64,
    ) -> Self {
        ParametricConstraint::EdgeOffset(EdgeOffsetConstraint {
            id: ids.next_id(),
            shape_id: shape_id.into(),
            reference_layer_id: reference_layer_id.into(),
            edge,
            anchor,
            offset_mm,
            enabled: true,
        })
    }

    /// New enabled alignment constraint with an id from `ids`.
    pub fn align(
        ids: &mut dyn IdGenerator,
        shape_id: impl Into<String>,
        reference_shape_id: impl Into<String>,
        axis: AlignAxis,
        anchor: Anchor,
        reference_anchor: Anchor,
    ) -> Self {
        ParametricConstraint::Align(AlignConstraint {
            id: ids.next_id(),
            shape_id: shape_id.into(),
            reference_shape_id: reference_shape_id.into(),
            axis,
            anchor,
            reference_anchor,
            enabled: true,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            ParametricConstraint::EdgeOffset(c) => &c.id,
            ParametricConstraint::Align(c) => &c.id,
        }
    }

    /// The shape this constraint moves.
    pub fn shape_id(&self) -> &str {
        match self {
            ParametricConstraint::EdgeOffset(c) => &c.shape_id,
            ParametricConstraint::Align(c) => &c.shape_id,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            ParametricConstraint::EdgeOffset(c) => c.enabled,
            ParametricConstraint::Align(c) => c.enabled,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            ParametricConstraint::EdgeOffset(c) => c.enabled = enabled,
            ParametricConstraint::Align(c) => c.enabled = enabled,
        }
    }
}

/// What happened to a single constraint during a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOutcome {
    Applied,
    Disabled,
    /// The constrained shape does not exist.
    MissingShape,
    /// The reference layer or reference shape does not exist.
    MissingReference,
    /// The reference layer exists but holds no shapes to measure.
    EmptyReferenceLayer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintReport {
    pub constraint_id: String,
    pub outcome: ConstraintOutcome,
}

/// Resolves an anchor on `shape`.
///
/// `Mid` is the line midpoint, arc mid point or bezier control point;
/// `Center` is the centroid of a coarse sample of the outline.
pub fn anchor_point(shape: &Shape, anchor: Anchor) -> Point {
    match anchor {
        Anchor::Start => shape.start(),
        Anchor::End => shape.end(),
        Anchor::Mid => shape.mid_anchor(),
        Anchor::Center => {
            let points = sampler::sample(shape, BOUNDS_SEGMENTS);
            sampler::centroid(&points).unwrap_or_else(|| shape.start())
        }
    }
}

/// Applies `constraints` in order and returns the repositioned shapes.
pub fn apply_constraints(
    shapes: &[Shape],
    layers: &[Layer],
    constraints: &[ParametricConstraint],
) -> Vec<Shape> {
    apply_with_report(shapes, layers, constraints).0
}

/// Like [`apply_constraints`], also reporting the outcome of every constraint.
pub fn apply_with_report(
    shapes: &[Shape],
    layers: &[Layer],
    constraints: &[ParametricConstraint],
) -> (Vec<Shape>, Vec<ConstraintReport>) {
    let mut working = shapes.to_vec();
    let mut reports = Vec::with_capacity(constraints.len());

    for constraint in constraints {
        let outcome = if constraint.is_enabled() {
            match constraint {
                ParametricConstraint::EdgeOffset(c) => apply_edge_offset(&mut working, layers, c),
                ParametricConstraint::Align(c) => apply_align(&mut working, c),
            }
        } else {
            ConstraintOutcome::Disabled
        };

        if !matches!(
            outcome,
            ConstraintOutcome::Applied | ConstraintOutcome::Disabled
        ) {
            debug!(
                "Skipping constraint {} on shape {}: {:?}",
                constraint.id(),
                constraint.shape_id(),
                outcome
            );
        }

        reports.push(ConstraintReport {
            constraint_id: constraint.id().to_string(),
            outcome,
        });
    }

    (working, reports)
}

/// Fresh id -> index map over the running shape list; the first shape wins
/// on duplicate ids.
fn index_shapes(shapes: &[Shape]) -> HashMap<&str, usize> {
    let mut index = HashMap::with_capacity(shapes.len());
    for (i, shape) in shapes.iter().enumerate() {
        index.entry(shape.id.as_str()).or_insert(i);
    }
    index
}

fn apply_edge_offset(
    shapes: &mut [Shape],
    layers: &[Layer],
    c: &EdgeOffsetConstraint,
) -> ConstraintOutcome {
    let Some(target) = index_shapes(shapes).get(c.shape_id.as_str()).copied() else {
        return ConstraintOutcome::MissingShape;
    };
    if !layers.iter().any(|l| l.id == c.reference_layer_id) {
        return ConstraintOutcome::MissingReference;
    }
    let Some(bounds) = sampler::collection_bounds(
        shapes
            .iter()
            .filter(|s| s.layer_id == c.reference_layer_id),
    ) else {
        return ConstraintOutcome::EmptyReferenceLayer;
    };

    let anchor = anchor_point(&shapes[target], c.anchor);
    let (dx, dy) = match c.edge {
        Edge::Left => (bounds.min_x + c.offset_mm - anchor.x, 0.0),
        Edge::Right => (bounds.max_x - c.offset_mm - anchor.x, 0.0),
        Edge::Top => (0.0, bounds.min_y + c.offset_mm - anchor.y),
        Edge::Bottom => (0.0, bounds.max_y - c.offset_mm - anchor.y),
    };
    shapes[target].translate(dx, dy);
    ConstraintOutcome::Applied
}

fn apply_align(shapes: &mut [Shape], c: &AlignConstraint) -> ConstraintOutcome {
    let index = index_shapes(shapes);
    let target = index.get(c.shape_id.as_str()).copied();
    let reference = index.get(c.reference_shape_id.as_str()).copied();
    let (target, reference) = match (target, reference) {
        (None, _) => return ConstraintOutcome::MissingShape,
        (_, None) => return ConstraintOutcome::MissingReference,
        (Some(t), Some(r)) => (t, r),
    };

    let anchor = anchor_point(&shapes[target], c.anchor);
    let reference_point = anchor_point(&shapes[reference], c.reference_anchor);
    let dx = reference_point.x - anchor.x;
    let dy = reference_point.y - anchor.y;
    let (dx, dy) = match c.axis {
        AlignAxis::X => (dx, 0.0),
        AlignAxis::Y => (0.0, dy),
        AlignAxis::Both => (dx, dy),
    };
    shapes[target].translate(dx, dy);
    ConstraintOutcome::Applied
}
