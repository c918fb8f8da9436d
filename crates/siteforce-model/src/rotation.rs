//! Axis-aligned rotations.
//!
//! Footprints and clusters may only be turned by multiples of 90 degrees (clockwise). Raw degree
//! values are validated once, here, so the clearance code never compares floats against angles.

use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Tolerance used when mapping a raw degree value onto one of the four supported rotations.
pub const ROTATION_EPSILON_DEG: f64 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Rotation {
    #[default]
    Rot0,
    Rot90,
    Rot180,
    Rot270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Rot0,
        Rotation::Rot90,
        Rotation::Rot180,
        Rotation::Rot270,
    ];

    pub fn from_degrees(angle_deg: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| (angle_deg - r.degrees()).abs() < ROTATION_EPSILON_DEG)
            .ok_or(ModelError::UnsupportedRotation { angle_deg })
    }

    pub fn degrees(self) -> f64 {
        match self {
            Rotation::Rot0 => 0.0,
            Rotation::Rot90 => 90.0,
            Rotation::Rot180 => 180.0,
            Rotation::Rot270 => 270.0,
        }
    }

    fn quarter_turns(self) -> u8 {
        match self {
            Rotation::Rot0 => 0,
            Rotation::Rot90 => 1,
            Rotation::Rot180 => 2,
            Rotation::Rot270 => 3,
        }
    }

    fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::Rot0,
            1 => Rotation::Rot90,
            2 => Rotation::Rot180,
            _ => Rotation::Rot270,
        }
    }

    /// `true` for 90 and 270 degrees, where a footprint's width and length trade axes.
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::Rot90 | Rotation::Rot270)
    }

    /// Adds two rotations, wrapping at 360 degrees.
    pub fn compose(self, other: Rotation) -> Rotation {
        Rotation::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// The rotation that undoes `self`.
    pub fn inverse(self) -> Rotation {
        Rotation::from_quarter_turns(4 - self.quarter_turns())
    }

    /// Rotates a vector clockwise about the origin.
    ///
    /// Only sign flips and component swaps are involved, so the result is exact.
    pub fn rotate(self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Rotation::Rot0 => (x, y),
            Rotation::Rot90 => (y, -x),
            Rotation::Rot180 => (-x, -y),
            Rotation::Rot270 => (-y, x),
        }
    }
}

impl TryFrom<f64> for Rotation {
    type Error = ModelError;

    fn try_from(angle_deg: f64) -> Result<Self> {
        Rotation::from_degrees(angle_deg)
    }
}

impl From<Rotation> for f64 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
