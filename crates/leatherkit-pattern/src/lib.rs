//! # LeatherKit Pattern Engine
//!
//! The pure geometry layer behind the pattern editor. Every function takes
//! a snapshot of document state and returns new values; nothing here owns
//! identity, keeps state between calls or touches I/O.
//!
//! ## Core Components
//!
//! - **Sampler**: lines, three-point arcs and quadratic beziers to polylines
//! - **Path**: cumulative arc-length tables, point-at-distance, projection
//! - **Stitching**: fixed and variable pitch stitch hole placement
//! - **Sequence**: hole renumbering, path-order resequencing, rotation, cycling
//! - **Snapping**: grid, endpoint, midpoint, guide and hardware snapping
//! - **Constraints**: ordered edge-offset and alignment constraints
//! - **Seam**: seam allowance offset curves
//!
//! ## Architecture
//!
//! ```text
//! Sampler ──> Path ──┬──> Stitching
//!                    ├──> Sequence (resequence / rotate)
//!                    └──> Seam
//! Sampler (bounds) ──┬──> Snapping
//!                    └──> Constraints
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use leatherkit_core::SequentialIdGenerator;
//! use leatherkit_pattern::{HoleType, Point, Shape, StitchHoleScheduler};
//!
//! let edge = Shape::line("edge", "front", "stitch", Point::new(0.0, 0.0), Point::new(100.0, 0.0));
//! let mut ids = SequentialIdGenerator::new("hole");
//! let holes = StitchHoleScheduler::default().place_fixed_pitch(&edge, 10.0, HoleType::Round, 0, &mut ids);
//! assert_eq!(holes.len(), 11);
//! ```

pub mod constraints;
pub mod model;
pub mod path;
pub mod sampler;
pub mod seam;
pub mod sequence;
pub mod snapping;
pub mod stitching;

pub use constraints::{
    anchor_point, apply_constraints, apply_with_report, AlignAxis, AlignConstraint, Anchor,
    ConstraintOutcome, ConstraintReport, Edge, EdgeOffsetConstraint, ParametricConstraint,
};
pub use model::{
    FoldLine, HardwareMarker, Layer, LineRole, PatternArc, PatternBezier, PatternLine,
    PatternPrimitive, Point, Shape, ShapeGeometry, ShapeType,
};
pub use path::{PathProjection, PathSample, SampledPath};
pub use seam::{polyline_path_data, SeamAllowance, SeamOffsetBuilder};
pub use sequence::{
    holes_for_shape, normalize, resequence_on_shape, rotate_from, select_next, select_previous,
};
pub use snapping::{SnapContext, SnapReason, SnapResolver, SnapResult, SnapSettings};
pub use stitching::{
    HoleType, PitchPolicy, StitchHole, StitchHoleScheduler, StitchSettings, StitchSummary,
};
