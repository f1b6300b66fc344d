//! Per-building loss calculation over a portfolio

use super::formula::LossFormula;
use crate::building::BuildingRecord;
use crate::ledger::LossLedger;
use log::debug;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Loss estimate for one building
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossEstimate {
    /// Projected loss in today's currency terms
    pub loss_estimate: f64,

    /// Wall-clock time spent evaluating the formula
    pub runtime: Duration,
}

impl LossEstimate {
    pub fn new(loss_estimate: f64) -> Self {
        Self { loss_estimate, runtime: Duration::ZERO }
    }
}

/// Applies one formula over a fixed horizon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossCalculator {
    pub formula: LossFormula,
    pub years_out: u32,
}

impl LossCalculator {
    pub fn new(formula: LossFormula, years_out: u32) -> Self {
        Self { formula, years_out }
    }

    /// Estimate a single building, timing the formula evaluation
    pub fn estimate(&self, building: &BuildingRecord) -> LossEstimate {
        let start = Instant::now();
        let loss_estimate = self.formula.loss_estimate(building, self.years_out);
        let runtime = start.elapsed();

        debug!(
            "{} loss for building {}: {}",
            self.formula.kind().label(),
            building.building_id,
            loss_estimate
        );

        LossEstimate { loss_estimate, runtime }
    }

    /// Sum of the loss over every record, duplicate ids included
    pub fn total_over(&self, buildings: &[BuildingRecord]) -> f64 {
        buildings
            .iter()
            .fold(0.0, |total, b| total + self.formula.loss_estimate(b, self.years_out))
    }

    /// Estimate every building in input order
    pub fn estimate_all(&self, buildings: &[BuildingRecord]) -> LossLedger {
        buildings
            .iter()
            .map(|b| (b.building_id.clone(), self.estimate(b)))
            .collect()
    }

    /// Estimate every building in parallel. Ledger order still follows the input.
    pub fn estimate_all_par(&self, buildings: &[BuildingRecord]) -> LossLedger {
        let estimates: Vec<(String, LossEstimate)> = buildings
            .par_iter()
            .map(|b| (b.building_id.clone(), self.estimate(b)))
            .collect();

        estimates.into_iter().collect()
    }
}
