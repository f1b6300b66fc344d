//! Loss formula variants
//!
//! Three closed strategies, selectable by name:
//! - **Portfolio**: compounding inflation, survival-adjusted hazard, fixed 5% discount,
//!   with a maintenance cost breakdown that is reported but excluded from the loss
//! - **Simple**: the portfolio loss term with a caller-supplied discount rate
//! - **Complex**: exponential inflation/floor-area model with a linear hazard multiplier

use super::discount::{compound_factor, survival_factor, DiscountRate};
use crate::building::BuildingRecord;

/// Flat annual maintenance rate per square meter
pub const MAINTENANCE_RATE_PER_SQM: f64 = 50.0;

/// Floor area divisor in the complex formula's exponent
pub const COMPLEX_FLOOR_AREA_SCALE: f64 = 1000.0;

/// Which formula a calculation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaKind {
    Portfolio,
    Simple,
    Complex,
}

impl FormulaKind {
    /// Label used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            FormulaKind::Portfolio => "Portfolio",
            FormulaKind::Simple => "Simple",
            FormulaKind::Complex => "Complex",
        }
    }
}

/// A loss formula together with its discounting parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LossFormula {
    /// Always discounts at 5%
    Portfolio,
    Simple { discount: DiscountRate },
    Complex { discount: DiscountRate },
}

impl LossFormula {
    /// Build a formula from its name. The portfolio formula ignores `discount_rate`.
    pub fn from_kind(kind: FormulaKind, discount_rate: f64) -> Self {
        let discount = DiscountRate::new(discount_rate);
        match kind {
            FormulaKind::Portfolio => LossFormula::Portfolio,
            FormulaKind::Simple => LossFormula::Simple { discount },
            FormulaKind::Complex => LossFormula::Complex { discount },
        }
    }

    pub fn simple(discount_rate: f64) -> Self {
        LossFormula::Simple { discount: DiscountRate::new(discount_rate) }
    }

    pub fn complex(discount_rate: f64) -> Self {
        LossFormula::Complex { discount: DiscountRate::new(discount_rate) }
    }

    pub fn kind(&self) -> FormulaKind {
        match self {
            LossFormula::Portfolio => FormulaKind::Portfolio,
            LossFormula::Simple { .. } => FormulaKind::Simple,
            LossFormula::Complex { .. } => FormulaKind::Complex,
        }
    }

    /// Effective annual discount rate
    pub fn discount(&self) -> DiscountRate {
        match self {
            LossFormula::Portfolio => DiscountRate::default(),
            LossFormula::Simple { discount } | LossFormula::Complex { discount } => *discount,
        }
    }

    /// Loss estimate for one building over `years_out` years
    pub fn loss_estimate(&self, building: &BuildingRecord, years_out: u32) -> f64 {
        match self {
            LossFormula::Portfolio => PortfolioBreakdown::compute(building, years_out).contribution(),
            LossFormula::Simple { discount } => simple_loss(building, years_out, *discount),
            LossFormula::Complex { discount } => complex_loss(building, years_out, *discount),
        }
    }
}

/// Present value of the survival-adjusted, inflation-compounded construction cost
pub fn simple_loss(building: &BuildingRecord, years_out: u32, discount: DiscountRate) -> f64 {
    let future_cost = building.construction_cost * compound_factor(building.inflation_rate, years_out);
    let risk_adjusted_loss = future_cost * survival_factor(building.hazard_probability, years_out);
    discount.present_value(risk_adjusted_loss, years_out)
}

/// `cost * exp(inflation * area / 1000) * hazard / (1 + rate)^years`
pub fn complex_loss(building: &BuildingRecord, years_out: u32, discount: DiscountRate) -> f64 {
    let growth = (building.inflation_rate * building.floor_area / COMPLEX_FLOOR_AREA_SCALE).exp();
    building.construction_cost * growth * building.hazard_probability
        / discount.accumulation_factor(years_out)
}

/// Every intermediate value of the portfolio formula for one building
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioBreakdown {
    pub future_cost: f64,
    pub risk_adjusted_loss: f64,
    pub present_value_loss: f64,
    /// Annual maintenance at the flat per-square-meter rate
    pub maintenance_cost: f64,
    /// Maintenance over the horizon. Not part of the projected loss.
    pub total_maintenance_cost: f64,
}

impl PortfolioBreakdown {
    pub fn compute(building: &BuildingRecord, years_out: u32) -> Self {
        let discount = DiscountRate::default();

        let future_cost = building.construction_cost * compound_factor(building.inflation_rate, years_out);
        let risk_adjusted_loss = future_cost * survival_factor(building.hazard_probability, years_out);
        let present_value_loss = discount.present_value(risk_adjusted_loss, years_out);

        let maintenance_cost = building.floor_area * MAINTENANCE_RATE_PER_SQM;
        let total_maintenance_cost = discount.level_cost_over(maintenance_cost, years_out);

        Self {
            future_cost,
            risk_adjusted_loss,
            present_value_loss,
            maintenance_cost,
            total_maintenance_cost,
        }
    }

    /// Amount added to the portfolio total (present value loss only)
    pub fn contribution(&self) -> f64 {
        self.present_value_loss
    }
}
