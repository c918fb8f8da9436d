//! Clearance between two clusters: the minimum over every cross pair of member buildings.
//!
//! Each cluster's members are first moved into the global frame (see [`crate::transform`]), then
//! every pair in the Cartesian product is evaluated with [`building_clearance`]. Pair evaluations
//! are independent, so large products are split across the rayon pool; the result does not depend
//! on the evaluation order.

use crate::clearance::{Clearance, building_clearance};
use crate::error::{Error, Result};
use crate::options::ReductionOptions;
use crate::transform::to_global;
use rayon::prelude::*;
use siteforce_model::{ClusterPosition, ClusterShape, Footprint, OffsetRules, Position};
use std::cmp::Ordering;
use uuid::Uuid;

/// The binding building pair of a normalized cluster reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedClearance {
    /// `clearance.as_raw() / offset_m`; below `1.0` the offset rule is violated.
    pub ratio: f64,
    pub offset_m: f64,
    pub clearance: Clearance,
    pub first_building: Uuid,
    pub second_building: Uuid,
}

impl NormalizedClearance {
    pub fn is_violated(&self) -> bool {
        self.ratio < 1.0
    }

    pub fn into_tuple(self) -> (f64, f64) {
        (self.ratio, self.offset_m)
    }
}

#[derive(Debug, Clone, Copy)]
struct PlacedBuilding<'a> {
    id: Uuid,
    footprint: &'a Footprint,
    position: Position,
}

fn place<'a>(
    cluster: &'a ClusterShape,
    cluster_position: &ClusterPosition,
) -> Result<Vec<PlacedBuilding<'a>>> {
    if cluster.is_empty() {
        return Err(Error::EmptyCluster {
            cluster_id: cluster.cluster_id,
        });
    }
    Ok(cluster
        .buildings
        .iter()
        .map(|b| PlacedBuilding {
            id: b.id,
            footprint: &b.footprint,
            position: to_global(&b.local_position, cluster_position),
        })
        .collect())
}

fn pair_clearance(a: &PlacedBuilding<'_>, b: &PlacedBuilding<'_>) -> Clearance {
    building_clearance(a.footprint, b.footprint, &a.position, &b.position)
}

pub fn cluster_clearance(
    first_cluster: &ClusterShape,
    second_cluster: &ClusterShape,
    first_cluster_position: &ClusterPosition,
    second_cluster_position: &ClusterPosition,
) -> Result<Clearance> {
    cluster_clearance_with_options(
        first_cluster,
        second_cluster,
        first_cluster_position,
        second_cluster_position,
        &ReductionOptions::default(),
    )
}

pub fn cluster_clearance_with_options(
    first_cluster: &ClusterShape,
    second_cluster: &ClusterShape,
    first_cluster_position: &ClusterPosition,
    second_cluster_position: &ClusterPosition,
    opts: &ReductionOptions,
) -> Result<Clearance> {
    let first = place(first_cluster, first_cluster_position)?;
    let second = place(second_cluster, second_cluster_position)?;

    let pairs = first.len() * second.len();
    let parallel = opts.use_parallel(pairs);
    tracing::debug!(
        first_cluster = %first_cluster.cluster_id,
        second_cluster = %second_cluster.cluster_id,
        pairs,
        parallel,
        "cluster clearance"
    );

    // Both sides are non-empty, so the identity never survives the reduction.
    let identity = Clearance::Separated(f64::INFINITY);
    let min = if parallel {
        let second = &second;
        first
            .par_iter()
            .flat_map_iter(|a| second.iter().map(move |b| pair_clearance(a, b)))
            .reduce(|| identity, Clearance::min)
    } else {
        first
            .iter()
            .flat_map(|a| second.iter().map(move |b| pair_clearance(a, b)))
            .fold(identity, Clearance::min)
    };
    Ok(min)
}

pub fn normalized_cluster_clearance(
    first_cluster: &ClusterShape,
    second_cluster: &ClusterShape,
    first_cluster_position: &ClusterPosition,
    second_cluster_position: &ClusterPosition,
    offset_rules: &OffsetRules,
) -> Result<NormalizedClearance> {
    normalized_cluster_clearance_with_options(
        first_cluster,
        second_cluster,
        first_cluster_position,
        second_cluster_position,
        offset_rules,
        &ReductionOptions::default(),
    )
}

/// Minimum of `clearance / required_offset` over all building pairs.
///
/// The offset is looked up per building pair, ordered `(first_cluster member, second_cluster
/// member)`. Ties on the ratio go to the smaller required offset, then to the earliest pair in
/// row-major order. A missing rule fails the whole reduction; when several are missing, the
/// earliest pair in row-major order is reported.
pub fn normalized_cluster_clearance_with_options(
    first_cluster: &ClusterShape,
    second_cluster: &ClusterShape,
    first_cluster_position: &ClusterPosition,
    second_cluster_position: &ClusterPosition,
    offset_rules: &OffsetRules,
    opts: &ReductionOptions,
) -> Result<NormalizedClearance> {
    let first = place(first_cluster, first_cluster_position)?;
    let second = place(second_cluster, second_cluster_position)?;

    let pairs = first.len() * second.len();
    let parallel = opts.use_parallel(pairs);
    tracing::debug!(
        first_cluster = %first_cluster.cluster_id,
        second_cluster = %second_cluster.cluster_id,
        pairs,
        parallel,
        "normalized cluster clearance"
    );

    let cols = second.len();
    let evaluate = |i: usize, j: usize| -> PairOutcome {
        let (a, b) = (&first[i], &second[j]);
        let index = i * cols + j;
        let Some(offset_m) = offset_rules.get(a.id, b.id) else {
            return Err(MissingRule {
                index,
                first: a.id,
                second: b.id,
            });
        };
        let clearance = pair_clearance(a, b);
        Ok(Candidate {
            index,
            result: NormalizedClearance {
                ratio: clearance.as_raw() / offset_m,
                offset_m,
                clearance,
                first_building: a.id,
                second_building: b.id,
            },
        })
    };

    let best = if parallel {
        (0..first.len())
            .into_par_iter()
            .flat_map_iter(|i| (0..cols).map(move |j| evaluate(i, j)))
            .reduce_with(merge)
    } else {
        let mut best: Option<Candidate> = None;
        for i in 0..first.len() {
            for j in 0..cols {
                let c = evaluate(i, j)?;
                best = Some(match best {
                    Some(b) => prefer(b, c),
                    None => c,
                });
            }
        }
        best.map(Ok)
    };

    match best {
        Some(Ok(c)) => Ok(c.result),
        Some(Err(missing)) => Err(missing.into()),
        None => Err(Error::EmptyCluster {
            cluster_id: first_cluster.cluster_id,
        }),
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    result: NormalizedClearance,
}

#[derive(Debug, Clone, Copy)]
struct MissingRule {
    index: usize,
    first: Uuid,
    second: Uuid,
}

impl From<MissingRule> for Error {
    fn from(m: MissingRule) -> Self {
        Error::MissingOffsetRule {
            first: m.first,
            second: m.second,
        }
    }
}

type PairOutcome = std::result::Result<Candidate, MissingRule>;

fn prefer(a: Candidate, b: Candidate) -> Candidate {
    let order = a
        .result
        .ratio
        .total_cmp(&b.result.ratio)
        .then(a.result.offset_m.total_cmp(&b.result.offset_m))
        .then(a.index.cmp(&b.index));
    match order {
        Ordering::Greater => b,
        Ordering::Less | Ordering::Equal => a,
    }
}

fn merge(a: PairOutcome, b: PairOutcome) -> PairOutcome {
    match (a, b) {
        (Err(x), Err(y)) => Err(if x.index <= y.index { x } else { y }),
        (Err(x), Ok(_)) | (Ok(_), Err(x)) => Err(x),
        (Ok(x), Ok(y)) => Ok(prefer(x, y)),
    }
}
