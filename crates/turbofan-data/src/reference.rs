//! True-RUL Reference Mapping

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit unit-id to true-RUL mapping for a test split.
///
/// The source reference file is positional: line `i` (1-indexed) belongs to
/// unit `i`. That contract is applied exactly once, in
/// [`RulReference::from_positional`]; everything downstream joins by unit id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulReference {
    by_unit: BTreeMap<u32, u32>,
}

impl RulReference {
    /// Build the mapping from positional file values: `values[i]` is the
    /// true RUL at truncation of unit `i + 1`.
    pub fn from_positional(values: &[u32]) -> Self {
        let by_unit = values
            .iter()
            .enumerate()
            .map(|(i, &rul)| (i as u32 + 1, rul))
            .collect();
        Self { by_unit }
    }

    /// True RUL at truncation for a unit, if present
    pub fn get(&self, unit: u32) -> Option<u32> {
        self.by_unit.get(&unit).copied()
    }

    /// Unit ids covered by the reference, ascending
    pub fn units(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_unit.keys().copied()
    }

    /// Number of reference entries
    pub fn len(&self) -> usize {
        self.by_unit.len()
    }

    /// Whether the reference is empty
    pub fn is_empty(&self) -> bool {
        self.by_unit.is_empty()
    }
}
