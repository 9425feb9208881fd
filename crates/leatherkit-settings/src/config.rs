//! Configuration for the pattern engine.
//!
//! Every tunable constant of the engine lives here with its documented
//! default, so an editor can ship a config file instead of patching code.
//! Supports JSON and TOML file formats; the default location is the
//! platform config directory.
//!
//! Configuration is organized into sections:
//! - Stitching (scheduler tuning, default pitch and hole type)
//! - Snapping (enabled sources, grid step, pixel threshold)
//! - Seam allowances (sample count, default offset)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};
use leatherkit_pattern::sampler::SEAM_SEGMENTS;
use leatherkit_pattern::snapping::DEFAULT_PIXEL_THRESHOLD;
use leatherkit_pattern::{
    HoleType, PitchPolicy, SeamOffsetBuilder, SnapResolver, SnapSettings, StitchHoleScheduler,
    StitchSettings,
};

/// Stitch placement preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchingSettings {
    #[serde(flatten)]
    pub scheduler: StitchSettings,
    /// Pitch offered for new stitch runs, in mm
    pub default_pitch_mm: f64,
    pub default_hole_type: HoleType,
}

impl Default for StitchingSettings {
    fn default() -> Self {
        Self {
            scheduler: StitchSettings::default(),
            default_pitch_mm: 4.0,
            default_hole_type: HoleType::Round,
        }
    }
}

/// Snapping preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnappingSettings {
    #[serde(flatten)]
    pub sources: SnapSettings,
    /// Snap radius in screen pixels
    pub pixel_threshold: f64,
}

impl Default for SnappingSettings {
    fn default() -> Self {
        Self {
            sources: SnapSettings::default(),
            pixel_threshold: DEFAULT_PIXEL_THRESHOLD,
        }
    }
}

/// Seam allowance preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeamSettings {
    /// Points per offset curve
    pub samples: usize,
    /// Offset offered for new allowances, in mm
    pub default_offset_mm: f64,
}

impl Default for SeamSettings {
    fn default() -> Self {
        Self {
            samples: SEAM_SEGMENTS,
            default_offset_mm: 3.0,
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub stitching: StitchingSettings,
    pub snapping: SnappingSettings,
    pub seam: SeamSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/leatherkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("leatherkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.stitching.scheduler.validate()?;

        let pitch = self.stitching.default_pitch_mm;
        if !(pitch.is_finite() && pitch > 0.0) {
            return Err(SettingsError::invalid(
                "stitching.default_pitch_mm",
                "must be positive",
            ));
        }

        let step = self.snapping.sources.grid_step;
        if !(step.is_finite() && step > 0.0) {
            return Err(SettingsError::invalid("snapping.grid_step", "must be positive"));
        }

        let threshold = self.snapping.pixel_threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(SettingsError::invalid(
                "snapping.pixel_threshold",
                "must be positive",
            ));
        }

        if self.seam.samples < 2 {
            return Err(SettingsError::invalid("seam.samples", "must be >= 2"));
        }

        if !self.seam.default_offset_mm.is_finite() {
            return Err(SettingsError::invalid(
                "seam.default_offset_mm",
                "must be finite",
            ));
        }

        Ok(())
    }

    pub fn stitch_scheduler(&self) -> StitchHoleScheduler {
        StitchHoleScheduler::new(self.stitching.scheduler.clone())
    }

    pub fn default_pitch_policy(&self) -> PitchPolicy {
        PitchPolicy::fixed(self.stitching.default_pitch_mm)
    }

    pub fn snap_resolver(&self) -> SnapResolver {
        SnapResolver::new(self.snapping.pixel_threshold)
    }

    pub fn snap_settings(&self) -> &SnapSettings {
        &self.snapping.sources
    }

    pub fn seam_builder(&self) -> SeamOffsetBuilder {
        SeamOffsetBuilder::new(self.seam.samples)
    }
}
