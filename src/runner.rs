//! Runner for loss calculations over a loaded portfolio
//!
//! Loads building data once, then runs any number of formula configurations
//! against it without re-reading the input.

use crate::building::{load_buildings, load_buildings_from_reader, BuildingRecord};
use crate::error::Result;
use crate::ledger::LossLedger;
use crate::loss::{LossCalculator, LossFormula};
use log::info;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

/// Projection horizon used when none is given
pub const DEFAULT_YEARS_OUT: u32 = 10;

/// One calculation: which formula, over how many years, and how to schedule it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationConfig {
    pub formula: LossFormula,
    pub years_out: u32,
    /// Evaluate buildings on the rayon thread pool
    pub parallel: bool,
}

impl CalculationConfig {
    pub fn new(formula: LossFormula, years_out: u32) -> Self {
        Self { formula, years_out, parallel: false }
    }

    pub fn in_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self::new(LossFormula::Portfolio, DEFAULT_YEARS_OUT)
    }
}

/// Result of one calculation over the portfolio
#[derive(Debug, Clone)]
pub struct LossRun {
    pub config: CalculationConfig,
    pub ledger: LossLedger,
    /// Time spent loading the input this run was computed from
    pub load_time: Duration,
    /// Time spent evaluating all buildings
    pub calc_time: Duration,
}

impl LossRun {
    pub fn total_loss(&self) -> f64 {
        self.ledger.total_loss()
    }
}

/// Pre-loaded portfolio runner
#[derive(Debug, Clone)]
pub struct LossRunner {
    buildings: Vec<BuildingRecord>,
    load_time: Duration,
}

impl LossRunner {
    /// Load buildings from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let start = Instant::now();
        let buildings = load_buildings(path)?;
        Ok(Self { buildings, load_time: start.elapsed() })
    }

    /// Load buildings from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let start = Instant::now();
        let buildings = load_buildings_from_reader(reader)?;
        Ok(Self { buildings, load_time: start.elapsed() })
    }

    /// Create runner with already-loaded buildings
    pub fn with_buildings(buildings: Vec<BuildingRecord>) -> Self {
        Self { buildings, load_time: Duration::ZERO }
    }

    pub fn buildings(&self) -> &[BuildingRecord] {
        &self.buildings
    }

    pub fn load_time(&self) -> Duration {
        self.load_time
    }

    /// Run a single calculation
    pub fn run(&self, config: CalculationConfig) -> LossRun {
        let calculator = LossCalculator::new(config.formula, config.years_out);

        let start = Instant::now();
        let ledger = if config.parallel {
            calculator.estimate_all_par(&self.buildings)
        } else {
            calculator.estimate_all(&self.buildings)
        };
        let calc_time = start.elapsed();

        info!(
            "{} loss over {} years for {} buildings computed in {:?}",
            config.formula.kind().label(),
            config.years_out,
            ledger.len(),
            calc_time
        );

        LossRun { config, ledger, load_time: self.load_time, calc_time }
    }

    /// Run several calculations against the same buildings
    pub fn run_many(&self, configs: &[CalculationConfig]) -> Vec<LossRun> {
        configs.iter().map(|config| self.run(*config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loss::FormulaKind;
    use approx::assert_relative_eq;

    const DATA: &str = r#"[
        {"buildingId": "B1", "floor_area": 1000, "construction_cost": 100000,
         "hazard_probability": 0.1, "inflation_rate": 0.02},
        {"buildingId": "B2", "floor_area": 2000, "construction_cost": 250000,
         "hazard_probability": 0.05, "inflation_rate": 0.03},
        {"buildingId": "B3", "floor_area": 800, "construction_cost": 90000,
         "hazard_probability": 0.2, "inflation_rate": 0.01}
    ]"#;

    #[test]
    fn test_default_config_is_portfolio_ten_years() {
        let config = CalculationConfig::default();
        assert_eq!(config.formula.kind(), FormulaKind::Portfolio);
        assert_eq!(config.years_out, 10);
        assert!(!config.parallel);
    }

    #[test]
    fn test_run_totals_each_building() {
        let runner = LossRunner::from_reader(DATA.as_bytes()).unwrap();
        let run = runner.run(CalculationConfig::new(LossFormula::simple(0.05), 5));

        let expected: f64 = runner
            .buildings()
            .iter()
            .map(|b| LossFormula::simple(0.05).loss_estimate(b, 5))
            .sum();

        assert_eq!(run.ledger.len(), 3);
        assert_relative_eq!(run.total_loss(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_simple_at_default_rate_matches_portfolio_total() {
        let runner = LossRunner::from_reader(DATA.as_bytes()).unwrap();
        let runs = runner.run_many(&[
            CalculationConfig::default(),
            CalculationConfig::new(LossFormula::simple(0.05), 10),
        ]);

        assert_eq!(runs[0].total_loss(), runs[1].total_loss());
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let runner = LossRunner::from_reader(DATA.as_bytes()).unwrap();
        let config = CalculationConfig::new(LossFormula::complex(0.07), 12);

        let sequential = runner.run(config);
        let parallel = runner.run(config.in_parallel(true));

        assert_relative_eq!(sequential.total_loss(), parallel.total_loss(), max_relative = 1e-9);
    }

    #[test]
    fn test_malformed_input_fails_before_running() {
        assert!(LossRunner::from_reader("[{".as_bytes()).is_err());
    }
}
