//! Building Loss - projected hazard losses for building portfolios
//!
//! This library provides:
//! - Validated loading of building records from JSON
//! - Portfolio, simple, and complex loss formulas with inflation and discounting
//! - Ordered per-building loss ledgers and portfolio totals
//! - Text and CSV reporting

pub mod error;
pub mod building;
pub mod loss;
pub mod ledger;
pub mod runner;
pub mod report;

// Re-export commonly used types
pub use error::LossError;
pub use building::BuildingRecord;
pub use loss::{FormulaKind, LossCalculator, LossEstimate, LossFormula, PortfolioBreakdown};
pub use ledger::LossLedger;
pub use runner::{CalculationConfig, LossRun, LossRunner};
