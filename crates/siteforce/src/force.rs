//! Vector quantities exchanged with the placement solver.
//!
//! The solver turns clearance violations into forces, sums them per building or cluster over
//! one sweep, and integrates the sums into shifts. Summing two accumulators that belong to
//! different entities is a programming error and is reported instead of merged.

use std::ops::{Add, Mul, Neg};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorKind {
    Force,
    Shift,
    ClusterForce,
    ClusterShift,
}

impl std::fmt::Display for AccumulatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AccumulatorKind::Force => "Force",
            AccumulatorKind::Shift => "Shift",
            AccumulatorKind::ClusterForce => "ClusterForce",
            AccumulatorKind::ClusterShift => "ClusterShift",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccumulatorError {
    #[error("cannot accumulate {found} into {expected}")]
    KindMismatch {
        expected: AccumulatorKind,
        found: AccumulatorKind,
    },

    #[error("cannot accumulate {kind} of {found} into {kind} of {expected}")]
    IdentityMismatch {
        kind: AccumulatorKind,
        expected: Uuid,
        found: Uuid,
    },
}

/// Free 2D vector; not tied to any entity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
}

impl Direction {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Direction> {
        let len = self.length();
        (len > 0.0 && len.is_finite()).then(|| Direction::new(self.x / len, self.y / len))
    }
}

impl Mul<f64> for Direction {
    type Output = Direction;

    fn mul(self, k: f64) -> Direction {
        Direction::new(k * self.x, k * self.y)
    }
}

impl Mul<Direction> for f64 {
    type Output = Direction;

    fn mul(self, d: Direction) -> Direction {
        Direction::new(self * d.x, self * d.y)
    }
}

impl Add for Direction {
    type Output = Direction;

    fn add(self, other: Direction) -> Direction {
        Direction::new(other.x + self.x, other.y + self.y)
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction::new(-self.x, -self.y)
    }
}

macro_rules! accumulator {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:ident, $id:ident, $x:ident, $y:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            pub $id: Uuid,
            pub $x: f64,
            pub $y: f64,
        }

        impl $name {
            pub const KIND: AccumulatorKind = AccumulatorKind::$kind;

            pub fn new($id: Uuid, $x: f64, $y: f64) -> Self {
                Self { $id, $x, $y }
            }

            pub fn zero($id: Uuid) -> Self {
                Self::new($id, 0.0, 0.0)
            }

            pub fn along($id: Uuid, direction: Direction) -> Self {
                Self::new($id, direction.x, direction.y)
            }

            pub fn entity_id(&self) -> Uuid {
                self.$id
            }

            pub fn vector(&self) -> Direction {
                Direction::new(self.$x, self.$y)
            }

            /// Adds `other` in place. Both must refer to the same entity.
            pub fn accumulate(&mut self, other: &$name) -> Result<(), AccumulatorError> {
                if other.$id != self.$id {
                    return Err(AccumulatorError::IdentityMismatch {
                        kind: Self::KIND,
                        expected: self.$id,
                        found: other.$id,
                    });
                }
                self.$x += other.$x;
                self.$y += other.$y;
                Ok(())
            }
        }
    };
}

accumulator!(
    /// Force acting on a single building.
    Force, Force, building_id, fx, fy
);
accumulator!(
    /// Displacement of a single building.
    Shift, Shift, building_id, dx, dy
);
accumulator!(
    /// Force acting on a whole cluster.
    ClusterForce, ClusterForce, cluster_id, fx, fy
);
accumulator!(
    /// Displacement of a whole cluster.
    ClusterShift, ClusterShift, cluster_id, dx, dy
);

/// Any accumulator, for sweeps that handle several kinds through one code path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accumulator {
    Force(Force),
    Shift(Shift),
    ClusterForce(ClusterForce),
    ClusterShift(ClusterShift),
}

impl Accumulator {
    pub fn kind(&self) -> AccumulatorKind {
        match self {
            Accumulator::Force(_) => AccumulatorKind::Force,
            Accumulator::Shift(_) => AccumulatorKind::Shift,
            Accumulator::ClusterForce(_) => AccumulatorKind::ClusterForce,
            Accumulator::ClusterShift(_) => AccumulatorKind::ClusterShift,
        }
    }

    pub fn entity_id(&self) -> Uuid {
        match self {
            Accumulator::Force(a) => a.entity_id(),
            Accumulator::Shift(a) => a.entity_id(),
            Accumulator::ClusterForce(a) => a.entity_id(),
            Accumulator::ClusterShift(a) => a.entity_id(),
        }
    }

    pub fn vector(&self) -> Direction {
        match self {
            Accumulator::Force(a) => a.vector(),
            Accumulator::Shift(a) => a.vector(),
            Accumulator::ClusterForce(a) => a.vector(),
            Accumulator::ClusterShift(a) => a.vector(),
        }
    }

    /// Adds `other` in place. Kinds are checked before identities.
    pub fn accumulate(&mut self, other: &Accumulator) -> Result<(), AccumulatorError> {
        match (self, other) {
            (Accumulator::Force(a), Accumulator::Force(b)) => a.accumulate(b),
            (Accumulator::Shift(a), Accumulator::Shift(b)) => a.accumulate(b),
            (Accumulator::ClusterForce(a), Accumulator::ClusterForce(b)) => a.accumulate(b),
            (Accumulator::ClusterShift(a), Accumulator::ClusterShift(b)) => a.accumulate(b),
            (this, other) => Err(AccumulatorError::KindMismatch {
                expected: this.kind(),
                found: other.kind(),
            }),
        }
    }
}

impl From<Force> for Accumulator {
    fn from(v: Force) -> Self {
        Accumulator::Force(v)
    }
}

impl From<Shift> for Accumulator {
    fn from(v: Shift) -> Self {
        Accumulator::Shift(v)
    }
}

impl From<ClusterForce> for Accumulator {
    fn from(v: ClusterForce) -> Self {
        Accumulator::ClusterForce(v)
    }
}

impl From<ClusterShift> for Accumulator {
    fn from(v: ClusterShift) -> Self {
        Accumulator::ClusterShift(v)
    }
}
