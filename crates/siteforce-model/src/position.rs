use crate::error::Result;
use crate::rotation::Rotation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Center and orientation of a footprint, either cluster-local or global.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(alias = "building_id")]
    pub entity_id: Uuid,
    pub offset_x_m: f64,
    pub offset_y_m: f64,
    /// Clockwise rotation about the footprint's center.
    #[serde(rename = "angle_deg")]
    pub angle: Rotation,
}

impl Position {
    pub fn new(entity_id: Uuid, offset_x_m: f64, offset_y_m: f64, angle: Rotation) -> Self {
        Self {
            entity_id,
            offset_x_m,
            offset_y_m,
            angle,
        }
    }

    /// Builds a position from a raw degree value, rejecting anything but 0/90/180/270.
    pub fn from_degrees(
        entity_id: Uuid,
        offset_x_m: f64,
        offset_y_m: f64,
        angle_deg: f64,
    ) -> Result<Self> {
        Ok(Self::new(
            entity_id,
            offset_x_m,
            offset_y_m,
            Rotation::from_degrees(angle_deg)?,
        ))
    }
}

/// Rigid placement of a whole cluster in the global frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterPosition {
    pub cluster_id: Uuid,
    pub offset_x_m: f64,
    pub offset_y_m: f64,
    #[serde(rename = "angle_deg")]
    pub angle: Rotation,
}

impl ClusterPosition {
    pub fn new(cluster_id: Uuid, offset_x_m: f64, offset_y_m: f64, angle: Rotation) -> Self {
        Self {
            cluster_id,
            offset_x_m,
            offset_y_m,
            angle,
        }
    }

    pub fn from_degrees(
        cluster_id: Uuid,
        offset_x_m: f64,
        offset_y_m: f64,
        angle_deg: f64,
    ) -> Result<Self> {
        Ok(Self::new(
            cluster_id,
            offset_x_m,
            offset_y_m,
            Rotation::from_degrees(angle_deg)?,
        ))
    }

    /// Unrotated placement at the global origin.
    pub fn origin(cluster_id: Uuid) -> Self {
        Self::new(cluster_id, 0.0, 0.0, Rotation::Rot0)
    }
}
