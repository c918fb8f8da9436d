//! Buildings and the clusters that group them.

use crate::footprint::Footprint;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Functional zone of a structure on the site plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FunctionalArea {
    #[default]
    One,
    Two,
    Three,
    FlareStackZone,
}

impl TryFrom<u8> for FunctionalArea {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FunctionalArea::One),
            2 => Ok(FunctionalArea::Two),
            3 => Ok(FunctionalArea::Three),
            4 => Ok(FunctionalArea::FlareStackZone),
            other => Err(format!("unknown functional area: {other}")),
        }
    }
}

impl From<FunctionalArea> for u8 {
    fn from(area: FunctionalArea) -> Self {
        match area {
            FunctionalArea::One => 1,
            FunctionalArea::Two => 2,
            FunctionalArea::Three => 3,
            FunctionalArea::FlareStackZone => 4,
        }
    }
}

/// Attachment point for a connection (pipe, power line, ...), relative to the footprint center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectionPoint {
    pub id: Uuid,
    pub building_id: Uuid,
    pub point_m: [f64; 2],
}

/// A building as supplied by the caller, before it is placed into a cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Building {
    pub id: Uuid,
    #[serde(alias = "figure")]
    pub footprint: Footprint,
    #[serde(default)]
    pub functional_area: FunctionalArea,
    #[serde(default)]
    pub connection_points: Vec<ConnectionPoint>,
    #[serde(default)]
    pub label: String,
}

/// A building as seen inside a cluster; `local_position` is relative to the cluster origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingWrapper {
    pub id: Uuid,
    #[serde(alias = "figure")]
    pub footprint: Footprint,
    pub local_position: Position,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub connection_points: Vec<ConnectionPoint>,
}

impl BuildingWrapper {
    pub fn new(id: Uuid, footprint: Footprint, local_position: Position) -> Self {
        Self {
            id,
            footprint,
            local_position,
            label: String::new(),
            connection_points: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Places `building` into a cluster at `local_position`.
    pub fn from_building(building: &Building, local_position: Position) -> Self {
        Self {
            id: building.id,
            footprint: building.footprint,
            local_position,
            label: building.label.clone(),
            connection_points: building.connection_points.clone(),
        }
    }
}

/// Static, cluster-local geometry of a group of buildings.
///
/// Never mutated once built; the cluster moves only through its accompanying
/// [`ClusterPosition`](crate::ClusterPosition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterShape {
    pub cluster_id: Uuid,
    #[serde(default)]
    pub functional_area: FunctionalArea,
    #[serde(alias = "bounds")]
    pub bounding_footprint: Footprint,
    pub buildings: Vec<BuildingWrapper>,
}

impl ClusterShape {
    pub fn new(
        cluster_id: Uuid,
        functional_area: FunctionalArea,
        bounding_footprint: Footprint,
        buildings: Vec<BuildingWrapper>,
    ) -> Self {
        Self {
            cluster_id,
            functional_area,
            bounding_footprint,
            buildings,
        }
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

/// Connection demand between two clusters, weighted by its normalized laying cost.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClusterConnection {
    pub first_cluster_id: Uuid,
    pub second_cluster_id: Uuid,
    pub normalized_connection_cost: f64,
}
