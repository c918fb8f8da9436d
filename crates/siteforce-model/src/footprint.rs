use crate::rotation::Rotation;
use serde::{Deserialize, Serialize};

/// Plan-view shape of a building in its unrotated local frame.
///
/// For rectangles the width is the vertical side and the length the horizontal side:
///
/// ```text
///       ______________
///       |            |
/// width |            |
///       |____________|
///           length
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Footprint {
    Circle { radius_m: f64 },
    Rectangle { width_m: f64, length_m: f64 },
}

impl Footprint {
    pub fn circle(radius_m: f64) -> Self {
        Footprint::Circle { radius_m }
    }

    pub fn rectangle(width_m: f64, length_m: f64) -> Self {
        Footprint::Rectangle { width_m, length_m }
    }

    /// Returns `(half_width, half_length)` of the footprint's axis-aligned box once placed with
    /// `rotation`.
    ///
    /// A circle is boxed by its radius on both axes. On quarter turns the two extents swap, since
    /// length is measured along the unrotated horizontal axis.
    pub fn half_extents(&self, rotation: Rotation) -> (f64, f64) {
        let (half_width, half_length) = match *self {
            Footprint::Circle { radius_m } => (radius_m, radius_m),
            Footprint::Rectangle { width_m, length_m } => (width_m / 2.0, length_m / 2.0),
        };
        if rotation.is_quarter_turn() {
            (half_length, half_width)
        } else {
            (half_width, half_length)
        }
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Footprint::Circle { radius_m: 0.0 }
    }
}
