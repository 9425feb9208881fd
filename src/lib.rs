//! # LeatherKit
//!
//! Geometry and constraint engine for leathercraft pattern editors.
//!
//! ## Architecture
//!
//! LeatherKit is organized as a workspace with multiple crates:
//!
//! 1. **leatherkit-core** - Points, bounds, id generation, error types
//! 2. **leatherkit-pattern** - Sampling, stitch holes, sequencing, snapping,
//!    constraints and seam allowances
//! 3. **leatherkit-settings** - Engine configuration and persistence
//! 4. **leatherkit** - Facade that re-exports the crates above
//!
//! The engine is a set of pure functions over document snapshots. The
//! editor owns the document, undo history and rendering; it hands shapes,
//! holes and constraints in and stores what comes back.

pub use leatherkit_core::{
    Bounds, IdGenerator, PatternError, Point, Result, SequentialIdGenerator, UuidIdGenerator,
};

pub use leatherkit_pattern::{
    anchor_point, apply_constraints, apply_with_report, holes_for_shape, normalize,
    polyline_path_data, resequence_on_shape, rotate_from, select_next, select_previous,
    AlignAxis, AlignConstraint, Anchor, ConstraintOutcome, ConstraintReport, Edge,
    EdgeOffsetConstraint, FoldLine, HardwareMarker, HoleType, Layer, LineRole,
    ParametricConstraint, PathProjection, PathSample, PatternArc, PatternBezier, PatternLine,
    PatternPrimitive, PitchPolicy, SampledPath, SeamAllowance, SeamOffsetBuilder, Shape,
    ShapeGeometry, ShapeType, SnapContext, SnapReason, SnapResolver, SnapResult, SnapSettings,
    StitchHole, StitchHoleScheduler, StitchSettings, StitchSummary,
};
pub use leatherkit_pattern::sampler;

pub use leatherkit_settings::{
    Config, SeamSettings, SettingsError, SettingsResult, SnappingSettings, StitchingSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` otherwise
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
