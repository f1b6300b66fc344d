//! Ordered per-building loss ledger
//!
//! Keys are building ids. Entries keep first-insertion order; inserting an id
//! that is already present replaces its estimate in place (last write wins).

use crate::loss::LossEstimate;
use log::warn;
use std::collections::HashMap;

/// Insertion-ordered map from building id to loss estimate
#[derive(Debug, Clone, Default)]
pub struct LossLedger {
    entries: Vec<(String, LossEstimate)>,
    index: HashMap<String, usize>,
}

impl LossLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an estimate, returning the one it replaced if the id was already present
    pub fn insert(&mut self, building_id: String, estimate: LossEstimate) -> Option<LossEstimate> {
        if let Some(&pos) = self.index.get(&building_id) {
            warn!("Duplicate building id {}; keeping the later estimate", building_id);
            let previous = std::mem::replace(&mut self.entries[pos].1, estimate);
            return Some(previous);
        }

        self.index.insert(building_id.clone(), self.entries.len());
        self.entries.push((building_id, estimate));
        None
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LossEstimate)> {
        self.entries.iter().map(|(id, estimate)| (id.as_str(), estimate))
    }

    /// Sum of all loss estimates
    pub fn total_loss(&self) -> f64 {
        self.entries.iter().fold(0.0, |total, (_, e)| total + e.loss_estimate)
    }
}

impl FromIterator<(String, LossEstimate)> for LossLedger {
    fn from_iter<I: IntoIterator<Item = (String, LossEstimate)>>(iter: I) -> Self {
        let mut ledger = LossLedger::new();
        for (building_id, estimate) in iter {
            ledger.insert(building_id, estimate);
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ledger_of(values: &[(&str, f64)]) -> LossLedger {
        values
            .iter()
            .map(|(id, v)| (id.to_string(), LossEstimate::new(*v)))
            .collect()
    }

    #[test]
    fn test_total_loss() {
        let ledger = ledger_of(&[("A", 100.0), ("B", 250.5), ("C", -10.0)]);
        assert_eq!(ledger.len(), 3);
        assert_relative_eq!(ledger.total_loss(), 340.5, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_ledger_total_is_zero() {
        let ledger = LossLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_loss(), 0.0);
    }

    #[test]
    fn test_duplicate_id_last_write_wins_in_place() {
        let ledger = ledger_of(&[("A", 1.0), ("B", 2.0), ("A", 5.0)]);

        assert_eq!(ledger.len(), 2);
        let entries: Vec<(&str, f64)> = ledger.iter().map(|(id, e)| (id, e.loss_estimate)).collect();
        assert_eq!(entries, vec![("A", 5.0), ("B", 2.0)]);
        assert_eq!(ledger.total_loss(), 7.0);
    }

    #[test]
    fn test_insert_returns_replaced_estimate() {
        let mut ledger = LossLedger::new();
        assert!(ledger.insert("A".into(), LossEstimate::new(1.0)).is_none());
        let previous = ledger.insert("A".into(), LossEstimate::new(3.0)).unwrap();
        assert_eq!(previous.loss_estimate, 1.0);
    }

    #[test]
    fn test_total_is_order_independent() {
        let values: Vec<(String, f64)> = (0..200)
            .map(|i| (format!("B{}", i), 1_000.0 * (i as f64).sin().abs() + 0.123 * i as f64))
            .collect();

        let forward: LossLedger = values
            .iter()
            .map(|(id, v)| (id.clone(), LossEstimate::new(*v)))
            .collect();
        let reversed: LossLedger = values
            .iter()
            .rev()
            .map(|(id, v)| (id.clone(), LossEstimate::new(*v)))
            .collect();

        assert_relative_eq!(forward.total_loss(), reversed.total_loss(), max_relative = 1e-9);
    }
}
