#![forbid(unsafe_code)]

//! Clearance engine for site-plan layouts.
//!
//! Buildings are boxed footprints (rectangles, or circles treated as squares) placed at one of
//! four axis-aligned rotations. Clusters of buildings move rigidly. This crate answers "how far
//! apart are these two clusters?" (plainly, or relative to the required minimum offsets) and
//! provides the force/shift accumulators an iterative placement solver feeds on.

pub mod clearance;
pub mod cluster;
pub mod error;
pub mod force;
pub mod options;
pub mod transform;

pub use siteforce_model as model;

pub use clearance::{Clearance, OVERLAP_SENTINEL, building_clearance};
pub use cluster::{
    NormalizedClearance, cluster_clearance, cluster_clearance_with_options,
    normalized_cluster_clearance, normalized_cluster_clearance_with_options,
};
pub use error::{Error, Result};
pub use force::{
    Accumulator, AccumulatorError, AccumulatorKind, ClusterForce, ClusterShift, Direction, Force,
    Shift,
};
pub use options::{Parallelism, ReductionOptions};
pub use siteforce_model::{
    BuildingWrapper, ClusterPosition, ClusterShape, Footprint, OffsetRules, Position, Rotation,
};
pub use transform::{to_global, to_global_all, to_global_deg};
