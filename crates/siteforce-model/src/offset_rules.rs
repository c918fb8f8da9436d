//! Minimum-offset rules between pairs of entities (buildings or clusters).

use crate::error::{ModelError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Required minimum clearance between an ordered pair of entities.
///
/// For example: "Building 1" must stay at least 8 m away from "Building 2".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetRule {
    #[serde(alias = "first_building_id", alias = "first_cluster_id")]
    pub first_id: Uuid,
    #[serde(alias = "second_building_id", alias = "second_cluster_id")]
    pub second_id: Uuid,
    pub offset_m: f64,
}

/// Lookup table of offset rules keyed by the ordered `(first, second)` pair.
///
/// Lookups never fall back to the reversed pair; rules that should apply both ways have to be
/// inserted both ways (see [`OffsetRules::insert_symmetric`]).
#[derive(Debug, Clone, Default)]
pub struct OffsetRules {
    offsets: FxHashMap<(Uuid, Uuid), f64>,
}

impl OffsetRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules<I>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = OffsetRule>,
    {
        let mut out = Self::new();
        for rule in rules {
            out.insert(rule.first_id, rule.second_id, rule.offset_m)?;
        }
        tracing::trace!(rules = out.len(), "loaded offset rules");
        Ok(out)
    }

    /// Parses the flat `{"<first>_<second>": offset_m}` JSON object format.
    pub fn from_keyed_json_str(json: &str) -> Result<Self> {
        let raw: FxHashMap<String, f64> = serde_json::from_str(json)?;
        let mut out = Self::new();
        for (key, offset_m) in raw {
            let (first, second) = parse_pair_key(&key)?;
            out.insert(first, second, offset_m)?;
        }
        tracing::trace!(rules = out.len(), "loaded keyed offset rules");
        Ok(out)
    }

    /// Inserts or replaces the rule for `(first, second)`.
    ///
    /// Offsets divide clearances in the normalized reduction, so they must be positive and finite.
    pub fn insert(&mut self, first: Uuid, second: Uuid, offset_m: f64) -> Result<()> {
        if !(offset_m.is_finite() && offset_m > 0.0) {
            return Err(ModelError::NonPositiveOffset {
                first,
                second,
                offset_m,
            });
        }
        self.offsets.insert((first, second), offset_m);
        Ok(())
    }

    pub fn insert_symmetric(&mut self, a: Uuid, b: Uuid, offset_m: f64) -> Result<()> {
        self.insert(a, b, offset_m)?;
        self.insert(b, a, offset_m)
    }

    pub fn get(&self, first: Uuid, second: Uuid) -> Option<f64> {
        self.offsets.get(&(first, second)).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = OffsetRule> + '_ {
        self.offsets
            .iter()
            .map(|(&(first_id, second_id), &offset_m)| OffsetRule {
                first_id,
                second_id,
                offset_m,
            })
    }
}

fn parse_pair_key(key: &str) -> Result<(Uuid, Uuid)> {
    let invalid = || ModelError::InvalidRuleKey {
        key: key.to_string(),
    };
    // Hyphenated UUIDs never contain `_`, so the separator is unambiguous.
    let (first, second) = key.split_once('_').ok_or_else(invalid)?;
    let first = Uuid::parse_str(first).map_err(|_| invalid())?;
    let second = Uuid::parse_str(second).map_err(|_| invalid())?;
    Ok((first, second))
}
