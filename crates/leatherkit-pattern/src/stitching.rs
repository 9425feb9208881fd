//! Stitch hole placement along pattern paths.
//!
//! Walks a shape's arc-length parametrization at a constant or linearly
//! varying pitch and turns every target distance into a hole oriented along
//! the local tangent. A path end that the walk falls short of gets its own
//! anchor hole unless that hole would nearly duplicate the last one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::model::{LineRole, Point, Shape, ShapeType};
use crate::path::SampledPath;
use crate::sampler::PITCH_SEGMENTS;
use leatherkit_core::{lerp, IdGenerator, PatternError, Result};

/// Paths shorter than this receive no holes.
pub const MIN_PATH_LENGTH_MM: f64 = 1e-6;

/// Shape of the punched hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoleType {
    #[default]
    Round,
    Slit,
}

impl HoleType {
    pub fn name(&self) -> &'static str {
        match self {
            HoleType::Round => "round",
            HoleType::Slit => "slit",
        }
    }
}

impl fmt::Display for HoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HoleType {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "round" => Ok(Self::Round),
            "slit" => Ok(Self::Slit),
            _ => Err(PatternError::unknown("hole type", s)),
        }
    }
}

/// A punched stitch hole.
///
/// `shape_id` is a lookup key only; the document decides how long the hole
/// outlives its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchHole {
    pub id: String,
    pub shape_id: String,
    pub point: Point,
    pub angle_deg: f64,
    pub hole_type: HoleType,
    pub sequence: usize,
}

/// How the spacing between consecutive holes is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PitchPolicy {
    Fixed { pitch_mm: f64 },
    Variable { start_mm: f64, end_mm: f64 },
}

impl PitchPolicy {
    pub fn fixed(pitch_mm: f64) -> Self {
        PitchPolicy::Fixed { pitch_mm }
    }

    pub fn variable(start_mm: f64, end_mm: f64) -> Self {
        PitchPolicy::Variable { start_mm, end_mm }
    }

    /// Unclamped pitch at `progress` in `[0, 1]` along the path.
    pub fn pitch_at(&self, progress: f64) -> f64 {
        match *self {
            PitchPolicy::Fixed { pitch_mm } => pitch_mm,
            PitchPolicy::Variable { start_mm, end_mm } => lerp(start_mm, end_mm, progress),
        }
    }
}

/// Tuning for the hole scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchSettings {
    /// Smallest step the walk will take, in mm.
    pub min_pitch_mm: f64,
    /// Hard cap on walk steps; guarantees termination on malformed input.
    pub max_iterations: usize,
    /// The end anchor is added only if the remaining gap exceeds this
    /// fraction of the tail pitch.
    pub tail_gap_ratio: f64,
    /// Progress at which the tail pitch is estimated.
    pub tail_progress: f64,
    /// Sampling density for arcs and beziers.
    pub curve_segments: usize,
}

impl Default for StitchSettings {
    fn default() -> Self {
        Self {
            min_pitch_mm: 0.2,
            max_iterations: 10_000,
            tail_gap_ratio: 0.35,
            tail_progress: 0.85,
            curve_segments: PITCH_SEGMENTS,
        }
    }
}

impl StitchSettings {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("min_pitch_mm", self.min_pitch_mm),
            ("tail_gap_ratio", self.tail_gap_ratio),
            ("tail_progress", self.tail_progress),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PatternError::not_finite(*name));
        }
        if self.min_pitch_mm <= 0.0 {
            return Err(PatternError::out_of_range(
                "min_pitch_mm",
                self.min_pitch_mm,
                "must be positive",
            ));
        }
        if self.max_iterations == 0 {
            return Err(PatternError::out_of_range(
                "max_iterations",
                0.0,
                "must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.tail_gap_ratio) {
            return Err(PatternError::out_of_range(
                "tail_gap_ratio",
                self.tail_gap_ratio,
                "must be within 0..=1",
            ));
        }
        if !(0.0..=1.0).contains(&self.tail_progress) {
            return Err(PatternError::out_of_range(
                "tail_progress",
                self.tail_progress,
                "must be within 0..=1",
            ));
        }
        if self.curve_segments < 2 {
            return Err(PatternError::out_of_range(
                "curve_segments",
                self.curve_segments as f64,
                "must be >= 2",
            ));
        }
        Ok(())
    }
}

/// Per-shape placement statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchSummary {
    pub shape_id: String,
    pub hole_count: usize,
    pub path_length_mm: f64,
    /// Path length divided by the number of gaps; zero for fewer than two holes.
    pub mean_spacing_mm: f64,
}

/// Places stitch holes along shapes.
#[derive(Debug, Clone, Default)]
pub struct StitchHoleScheduler {
    settings: StitchSettings,
}

impl StitchHoleScheduler {
    /// Creates a scheduler with the given settings.
    pub fn new(settings: StitchSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &StitchSettings {
        &self.settings
    }

    /// Places holes at a constant pitch.
    pub fn place_fixed_pitch(
        &self,
        shape: &Shape,
        pitch_mm: f64,
        hole_type: HoleType,
        sequence_start: usize,
        ids: &mut dyn IdGenerator,
    ) -> Vec<StitchHole> {
        self.place(
            shape,
            PitchPolicy::fixed(pitch_mm),
            hole_type,
            sequence_start,
            ids,
        )
    }

    /// Places holes with a pitch interpolated linearly from start to end.
    pub fn place_variable_pitch(
        &self,
        shape: &Shape,
        start_pitch_mm: f64,
        end_pitch_mm: f64,
        hole_type: HoleType,
        sequence_start: usize,
        ids: &mut dyn IdGenerator,
    ) -> Vec<StitchHole> {
        self.place(
            shape,
            PitchPolicy::variable(start_pitch_mm, end_pitch_mm),
            hole_type,
            sequence_start,
            ids,
        )
    }

    /// Places holes on `shape` according to `policy`.
    ///
    /// Sequence numbers run from `sequence_start` in path order. One id is
    /// drawn from `ids` per hole.
    pub fn place(
        &self,
        shape: &Shape,
        policy: PitchPolicy,
        hole_type: HoleType,
        sequence_start: usize,
        ids: &mut dyn IdGenerator,
    ) -> Vec<StitchHole> {
        let path = self.parametrize(shape);
        let targets = self.target_distances(&path, policy);

        let holes: Vec<StitchHole> = targets
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| {
                let sample = path.point_at_distance(d)?;
                Some(StitchHole {
                    id: ids.next_id(),
                    shape_id: shape.id.clone(),
                    point: sample.point,
                    angle_deg: sample.angle_deg,
                    hole_type,
                    sequence: sequence_start + i,
                })
            })
            .collect();

        debug!(
            "Placed {} {} holes on shape {} ({:.2}mm)",
            holes.len(),
            hole_type,
            shape.id,
            path.total_length()
        );
        holes
    }

    /// Places holes on every stitch-role shape; each shape numbers from 0.
    pub fn place_on_shapes(
        &self,
        shapes: &[Shape],
        policy: PitchPolicy,
        hole_type: HoleType,
        ids: &mut dyn IdGenerator,
    ) -> Vec<StitchHole> {
        shapes
            .iter()
            .filter(|shape| shape.role() == LineRole::Stitch)
            .flat_map(|shape| self.place(shape, policy, hole_type, 0, ids))
            .collect()
    }

    /// Number of holes `place` would produce, without allocating ids.
    pub fn estimate_hole_count(&self, shape: &Shape, policy: PitchPolicy) -> usize {
        let path = self.parametrize(shape);
        self.target_distances(&path, policy).len()
    }

    /// Summarizes the holes belonging to `shape`.
    pub fn summarize(&self, shape: &Shape, holes: &[StitchHole]) -> StitchSummary {
        let path_length_mm = self.parametrize(shape).total_length();
        let hole_count = holes.iter().filter(|h| h.shape_id == shape.id).count();
        let mean_spacing_mm = if hole_count > 1 {
            path_length_mm / (hole_count - 1) as f64
        } else {
            0.0
        };
        StitchSummary {
            shape_id: shape.id.clone(),
            hole_count,
            path_length_mm,
            mean_spacing_mm,
        }
    }

    fn parametrize(&self, shape: &Shape) -> SampledPath {
        // Lines sample to their two endpoints regardless of the density asked for.
        let segments = match shape.shape_type() {
            ShapeType::Line => 2,
            ShapeType::Arc | ShapeType::Bezier => self.settings.curve_segments,
        };
        SampledPath::from_shape(shape, segments)
    }

    /// Arc-length positions of every hole along `path`.
    fn target_distances(&self, path: &SampledPath, policy: PitchPolicy) -> Vec<f64> {
        let total = path.total_length();
        if !(total >= MIN_PATH_LENGTH_MM) {
            return Vec::new();
        }

        let min_pitch = self.settings.min_pitch_mm;
        let mut targets = Vec::new();
        let mut distance = 0.0;
        let mut iterations = 0;

        while distance < total {
            if iterations >= self.settings.max_iterations {
                warn!(
                    "Stitch placement stopped after {} steps at {:.3}mm of {:.3}mm",
                    iterations, distance, total
                );
                break;
            }
            targets.push(distance);
            let progress = distance / total;
            // f64::max ignores NaN, so malformed pitches fall back to the minimum.
            distance += policy.pitch_at(progress).max(min_pitch);
            iterations += 1;
        }

        let tail_pitch = policy
            .pitch_at(self.settings.tail_progress)
            .max(min_pitch);
        let last = targets.last().copied().unwrap_or(0.0);
        if total - last > tail_pitch * self.settings.tail_gap_ratio {
            targets.push(total);
        }

        targets
    }
}
