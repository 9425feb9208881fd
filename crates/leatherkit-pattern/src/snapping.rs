//! Point snapping against grid, geometry, guides and hardware.
//!
//! Every enabled source registers candidate points; the closest candidate
//! within a screen-space pixel budget (converted to millimeters through the
//! viewport scale) wins. Sources are visited in a fixed order and a later
//! candidate only wins when it is strictly closer, so ties resolve to the
//! first registered candidate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::model::{FoldLine, HardwareMarker, Point, Shape};
use leatherkit_core::{PatternError, Result};

/// Default snap radius in screen pixels.
pub const DEFAULT_PIXEL_THRESHOLD: f64 = 14.0;
/// Viewport scales below this are treated as this value.
pub const MIN_VIEWPORT_SCALE: f64 = 0.1;

/// Which candidate sources are active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    pub enabled: bool,
    pub grid: bool,
    pub endpoints: bool,
    pub midpoints: bool,
    pub guides: bool,
    pub hardware: bool,
    /// Grid spacing in mm.
    pub grid_step: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            grid: true,
            endpoints: true,
            midpoints: true,
            guides: true,
            hardware: true,
            grid_step: 5.0,
        }
    }
}

impl SnapSettings {
    /// Settings with every source switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// The source a snapped point came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapReason {
    Grid,
    Endpoint,
    Midpoint,
    Guide,
    Hardware,
}

impl fmt::Display for SnapReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => write!(f, "grid"),
            Self::Endpoint => write!(f, "endpoint"),
            Self::Midpoint => write!(f, "midpoint"),
            Self::Guide => write!(f, "guide"),
            Self::Hardware => write!(f, "hardware"),
        }
    }
}

impl FromStr for SnapReason {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "endpoint" => Ok(Self::Endpoint),
            "midpoint" => Ok(Self::Midpoint),
            "guide" => Ok(Self::Guide),
            "hardware" => Ok(Self::Hardware),
            _ => Err(PatternError::unknown("snap reason", s)),
        }
    }
}

/// Document snapshot the resolver snaps against.
#[derive(Debug, Clone, Copy)]
pub struct SnapContext<'a> {
    pub shapes: &'a [Shape],
    pub fold_lines: &'a [FoldLine],
    pub hardware: &'a [HardwareMarker],
    /// Screen pixels per millimeter, supplied by the renderer.
    pub viewport_scale: f64,
}

impl<'a> SnapContext<'a> {
    pub fn new(shapes: &'a [Shape], viewport_scale: f64) -> Self {
        Self {
            shapes,
            fold_lines: &[],
            hardware: &[],
            viewport_scale,
        }
    }

    pub fn with_fold_lines(mut self, fold_lines: &'a [FoldLine]) -> Self {
        self.fold_lines = fold_lines;
        self
    }

    pub fn with_hardware(mut self, hardware: &'a [HardwareMarker]) -> Self {
        self.hardware = hardware;
        self
    }
}

/// Outcome of a snap query. `reason` is `None` when nothing snapped and
/// `point` is the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub point: Point,
    pub reason: Option<SnapReason>,
}

impl SnapResult {
    pub fn unsnapped(point: Point) -> Self {
        Self {
            point,
            reason: None,
        }
    }

    pub fn is_snapped(&self) -> bool {
        self.reason.is_some()
    }
}

/// Tracks the best candidate seen so far.
struct Best {
    query: Point,
    threshold: f64,
    distance: f64,
    found: Option<(Point, SnapReason)>,
}

impl Best {
    fn offer(&mut self, candidate: Point, reason: SnapReason) {
        let distance = candidate.distance_to(&self.query);
        if distance <= self.threshold && distance < self.distance {
            self.distance = distance;
            self.found = Some((candidate, reason));
        }
    }
}

/// Resolves snap queries with a fixed screen-space radius.
#[derive(Debug, Clone)]
pub struct SnapResolver {
    pixel_threshold: f64,
}

impl Default for SnapResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PIXEL_THRESHOLD)
    }
}

impl SnapResolver {
    pub fn new(pixel_threshold: f64) -> Self {
        Self { pixel_threshold }
    }

    pub fn pixel_threshold(&self) -> f64 {
        self.pixel_threshold
    }

    /// Snap radius in millimeters at the given viewport scale.
    pub fn threshold_mm(&self, viewport_scale: f64) -> f64 {
        self.pixel_threshold / viewport_scale.max(MIN_VIEWPORT_SCALE)
    }

    /// Snaps `point` to the nearest enabled candidate within range.
    pub fn resolve(&self, point: Point, settings: &SnapSettings, context: &SnapContext<'_>) -> SnapResult {
        if !settings.enabled {
            return SnapResult::unsnapped(point);
        }

        let mut best = Best {
            query: point,
            threshold: self.threshold_mm(context.viewport_scale),
            distance: f64::INFINITY,
            found: None,
        };

        if settings.grid && settings.grid_step.is_finite() && settings.grid_step > 0.0 {
            let step = settings.grid_step;
            let grid_point = Point::new(
                (point.x / step).round() * step,
                (point.y / step).round() * step,
            );
            best.offer(grid_point, SnapReason::Grid);
        }

        if settings.endpoints {
            for shape in context.shapes {
                best.offer(shape.start(), SnapReason::Endpoint);
                best.offer(shape.end(), SnapReason::Endpoint);
            }
        }

        if settings.midpoints {
            for shape in context.shapes {
                best.offer(shape.mid_anchor(), SnapReason::Midpoint);
            }
        }

        if settings.guides {
            for fold in context.fold_lines {
                best.offer(fold.project(point), SnapReason::Guide);
            }
        }

        if settings.hardware {
            for marker in context.hardware {
                best.offer(marker.point, SnapReason::Hardware);
            }
        }

        match best.found {
            Some((snapped, reason)) => {
                trace!("Snapped to {} at ({:.3}, {:.3})", reason, snapped.x, snapped.y);
                SnapResult {
                    point: snapped,
                    reason: Some(reason),
                }
            }
            None => SnapResult::unsnapped(point),
        }
    }
}
