//! Annual compounding and discounting helpers
//!
//! All projections use whole years with annual compounding:
//! - Growth: `amount * (1 + rate)^years`
//! - Discounting: `amount / (1 + rate)^years`

/// Discount rate applied to the portfolio formula
pub const PORTFOLIO_DISCOUNT_RATE: f64 = 0.05;

/// Annual discount rate for converting future values to today's terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountRate {
    /// Annual fractional rate (0.05 = 5%)
    pub annual_rate: f64,
}

impl DiscountRate {
    pub fn new(annual_rate: f64) -> Self {
        Self { annual_rate }
    }

    /// Accumulation factor `(1 + rate)^years`
    pub fn accumulation_factor(&self, years: u32) -> f64 {
        compound_factor(self.annual_rate, years)
    }

    /// Present value of an amount received `years` from now
    pub fn present_value(&self, amount: f64, years: u32) -> f64 {
        amount / self.accumulation_factor(years)
    }

    /// Single-year discount applied to a level annual amount, then scaled by the horizon
    ///
    /// Matches the maintenance cost convention: `(amount / (1 + rate)) * years`.
    pub fn level_cost_over(&self, annual_amount: f64, years: u32) -> f64 {
        annual_amount / (1.0 + self.annual_rate) * years as f64
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self::new(PORTFOLIO_DISCOUNT_RATE)
    }
}

/// `(1 + rate)^years`, with `years = 0` giving exactly 1.
///
/// Evaluated with `powf` so the full `u32` range is usable and results match
/// a libm `pow`; very long horizons saturate to infinity or zero.
pub fn compound_factor(rate: f64, years: u32) -> f64 {
    (1.0 + rate).powf(f64::from(years))
}

/// Probability of no hazard event over `years`: `(1 - p)^years`
pub fn survival_factor(hazard_probability: f64, years: u32) -> f64 {
    (1.0 - hazard_probability).powf(f64::from(years))
}
