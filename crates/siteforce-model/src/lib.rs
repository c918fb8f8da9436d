#![forbid(unsafe_code)]

//! Site-plan data model shared by the `siteforce` clearance engine.
//!
//! Everything here is a plain value type. Raw rotation angles are validated on construction (and
//! on deserialization), so downstream code only ever sees the four supported rotations.

pub mod cluster;
pub mod error;
pub mod footprint;
pub mod offset_rules;
pub mod position;
pub mod rotation;

pub use cluster::{
    Building, BuildingWrapper, ClusterConnection, ClusterShape, ConnectionPoint, FunctionalArea,
};
pub use error::{ModelError, Result};
pub use footprint::Footprint;
pub use offset_rules::{OffsetRule, OffsetRules};
pub use position::{ClusterPosition, Position};
pub use rotation::{ROTATION_EPSILON_DEG, Rotation};
