//! Loss formulas, discounting, and per-building calculation

mod calculator;
pub mod discount;
mod formula;

pub use calculator::{LossCalculator, LossEstimate};
pub use discount::{DiscountRate, PORTFOLIO_DISCOUNT_RATE};
pub use formula::{
    complex_loss, simple_loss, FormulaKind, LossFormula, PortfolioBreakdown,
    COMPLEX_FLOOR_AREA_SCALE, MAINTENANCE_RATE_PER_SQM,
};
