//! Cluster-local to global coordinates.
//!
//! A cluster is a rigid body: every member is turned about the cluster origin by the cluster's
//! rotation and then shifted by the cluster's offset.

use crate::error::Result;
use siteforce_model::{BuildingWrapper, ClusterPosition, Position, Rotation};
use uuid::Uuid;

pub fn to_global(local: &Position, cluster: &ClusterPosition) -> Position {
    let (x, y) = cluster.angle.rotate(local.offset_x_m, local.offset_y_m);
    Position {
        entity_id: local.entity_id,
        offset_x_m: x + cluster.offset_x_m,
        offset_y_m: y + cluster.offset_y_m,
        angle: local.angle.compose(cluster.angle),
    }
}

/// Like [`to_global`], for callers holding an unvalidated cluster angle in degrees.
pub fn to_global_deg(
    local: &Position,
    cluster_offset_x_m: f64,
    cluster_offset_y_m: f64,
    cluster_angle_deg: f64,
) -> Result<Position> {
    let cluster = ClusterPosition::new(
        Uuid::nil(),
        cluster_offset_x_m,
        cluster_offset_y_m,
        Rotation::from_degrees(cluster_angle_deg)?,
    );
    Ok(to_global(local, &cluster))
}

/// Global positions of `buildings`, in input order.
pub fn to_global_all(buildings: &[BuildingWrapper], cluster: &ClusterPosition) -> Vec<Position> {
    buildings
        .iter()
        .map(|b| to_global(&b.local_position, cluster))
        .collect()
}
