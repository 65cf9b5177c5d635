//! Weight table model.
//!
//! Maps grading-criterion names to positive integer weights. A single
//! table is provided once per partition run and read unchanged by every
//! stage, so scores stay comparable across placement, optimization, and
//! summarization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Criterion → weight mapping for score computation.
///
/// Weights must be positive; [`validation`](crate::validation) rejects
/// non-positive entries before any placement begins. A `BTreeMap` keeps
/// criterion iteration order stable across runs.
///
/// # Example
///
/// ```
/// use classform::models::WeightTable;
///
/// let weights = WeightTable::new()
///     .with_weight("academic", 1)
///     .with_weight("behavioral-support", 2);
/// assert_eq!(weights.weight("behavioral-support"), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    criteria: BTreeMap<String, i64>,
}

impl WeightTable {
    /// Creates an empty weight table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a weighted criterion.
    pub fn with_weight(mut self, criterion: impl Into<String>, weight: i64) -> Self {
        self.criteria.insert(criterion.into(), weight);
        self
    }

    /// Weight for a criterion, if configured.
    pub fn weight(&self, criterion: &str) -> Option<i64> {
        self.criteria.get(criterion).copied()
    }

    /// Iterates over `(criterion, weight)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.criteria.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Whether any criterion is configured.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Number of configured criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_lookup() {
        let w = WeightTable::new().with_weight("academic", 1).with_weight("conduct", 2);
        assert_eq!(w.weight("academic"), Some(1));
        assert_eq!(w.weight("conduct"), Some(2));
        assert_eq!(w.weight("missing"), None);
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let w = WeightTable::new().with_weight("b", 2).with_weight("a", 1);
        let names: Vec<&str> = w.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_empty() {
        assert!(WeightTable::new().is_empty());
    }
}
