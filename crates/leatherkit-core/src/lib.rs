//! # LeatherKit Core
//!
//! Core types shared by the pattern engine and its collaborators:
//! millimeter-space points and bounding boxes, the injected id generation
//! capability, and the error types used at the fallible edges (parsing and
//! parameter validation).

pub mod error;
pub mod geometry;
pub mod ids;

pub use error::{PatternError, Result};
pub use geometry::{lerp, Bounds, Point, EPSILON};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
