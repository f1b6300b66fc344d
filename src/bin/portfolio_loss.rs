//! Total projected loss for the portfolio in data.json
//!
//! Applies the portfolio formula over a 10 year horizon at a 5% discount
//! rate and prints the total. Every record counts toward the total, even
//! when building ids repeat. Maintenance costs are computed per building
//! but are not part of the projected loss.

use anyhow::{Context, Result};
use building_loss::building::{load_default_data, DEFAULT_DATA_PATH};
use building_loss::report::projected_loss_line;
use building_loss::runner::CalculationConfig;
use building_loss::{BuildingRecord, LossCalculator, PortfolioBreakdown};
use log::debug;
use std::io::{self, Write};

/// Write the projected loss line for `buildings`
fn execute<W: Write>(buildings: &[BuildingRecord], out: &mut W) -> Result<()> {
    let config = CalculationConfig::default();
    let calculator = LossCalculator::new(config.formula, config.years_out);

    for building in buildings {
        let breakdown = PortfolioBreakdown::compute(building, config.years_out);
        debug!(
            "Building {}: present value loss {:.2}, excluded maintenance {:.2}",
            building.building_id, breakdown.present_value_loss, breakdown.total_maintenance_cost
        );
    }

    writeln!(out, "{}", projected_loss_line(calculator.total_over(buildings)))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let buildings = load_default_data()
        .with_context(|| format!("Failed to load building data from {}", DEFAULT_DATA_PATH))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&buildings, &mut out)
}
