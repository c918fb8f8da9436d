//! Pairwise clearance between two placed footprints.
//!
//! Footprints are approximated by their axis-aligned boxes (a circle by the square around it), so
//! each pair costs a handful of comparisons and at most one square root. The formulas are kept in
//! the same operation order as the reference implementation; results must match it bit-for-bit.

use siteforce_model::{Footprint, Position};

/// Legacy scalar reported for overlapping footprints by [`Clearance::as_raw`].
pub const OVERLAP_SENTINEL: f64 = -1.0;

/// Outcome of a clearance test.
///
/// `Overlap` carries no penetration depth. It orders below every `Separated` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clearance {
    Overlap,
    Separated(f64),
}

impl Clearance {
    pub fn is_overlap(self) -> bool {
        matches!(self, Clearance::Overlap)
    }

    pub fn distance(self) -> Option<f64> {
        match self {
            Clearance::Overlap => None,
            Clearance::Separated(d) => Some(d),
        }
    }

    /// Scalar form used by the normalized reduction: meters, or [`OVERLAP_SENTINEL`].
    pub fn as_raw(self) -> f64 {
        match self {
            Clearance::Overlap => OVERLAP_SENTINEL,
            Clearance::Separated(d) => d,
        }
    }

    pub fn min(self, other: Clearance) -> Clearance {
        match (self, other) {
            (Clearance::Overlap, _) | (_, Clearance::Overlap) => Clearance::Overlap,
            (Clearance::Separated(a), Clearance::Separated(b)) => Clearance::Separated(a.min(b)),
        }
    }
}

impl PartialOrd for Clearance {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering;
        match (self, other) {
            (Clearance::Overlap, Clearance::Overlap) => Some(Ordering::Equal),
            (Clearance::Overlap, Clearance::Separated(_)) => Some(Ordering::Less),
            (Clearance::Separated(_), Clearance::Overlap) => Some(Ordering::Greater),
            (Clearance::Separated(a), Clearance::Separated(b)) => a.partial_cmp(b),
        }
    }
}

pub fn building_clearance(
    first_footprint: &Footprint,
    second_footprint: &Footprint,
    first_position: &Position,
    second_position: &Position,
) -> Clearance {
    let delta_x = (first_position.offset_x_m - second_position.offset_x_m).abs();
    let delta_y = (first_position.offset_y_m - second_position.offset_y_m).abs();
    let (total_half_width, total_half_length) = total_half_extents(
        first_footprint,
        second_footprint,
        first_position,
        second_position,
    );

    if delta_x < total_half_length && delta_y >= total_half_width {
        Clearance::Separated(delta_y - total_half_width)
    } else if delta_x >= total_half_length && delta_y < total_half_width {
        Clearance::Separated(delta_x - total_half_length)
    } else if delta_x >= total_half_length && delta_y >= total_half_width {
        Clearance::Separated(
            ((delta_x - total_half_length).powi(2) + (delta_y - total_half_width).powi(2)).sqrt(),
        )
    } else {
        Clearance::Overlap
    }
}

/// Summed `(half_width, half_length)` of both footprints in their placed orientation.
fn total_half_extents(
    first_footprint: &Footprint,
    second_footprint: &Footprint,
    first_position: &Position,
    second_position: &Position,
) -> (f64, f64) {
    let (first_width, first_length) = first_footprint.half_extents(first_position.angle);
    let (second_width, second_length) = second_footprint.half_extents(second_position.angle);
    (first_width + second_width, first_length + second_length)
}
