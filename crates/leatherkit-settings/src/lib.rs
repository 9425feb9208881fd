//! LeatherKit Settings Crate
//!
//! Engine configuration: the tunable defaults of the pattern engine, loaded
//! from and saved to JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, SeamSettings, SnappingSettings, StitchingSettings};
pub use error::{SettingsError, SettingsResult};
