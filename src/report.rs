//! Human-readable and CSV output for loss runs

use crate::error::Result;
use crate::ledger::LossLedger;
use crate::runner::LossRun;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One CSV output row
#[derive(Debug, Serialize)]
struct EstimateRow<'a> {
    building_id: &'a str,
    loss_estimate: f64,
}

/// Portfolio summary line, e.g. `Total Projected Loss: $51081.88`
pub fn projected_loss_line(total_loss: f64) -> String {
    format!("Total Projected Loss: ${:.2}", total_loss)
}

/// Write one block per building followed by the portfolio total.
///
/// With `show_timings`, load time, per-building runtimes and the overall
/// calculation time are included.
pub fn write_text_report<W: Write>(run: &LossRun, show_timings: bool, out: &mut W) -> Result<()> {
    let label = run.config.formula.kind().label();
    let discount_rate = run.config.formula.discount().annual_rate;

    if show_timings {
        writeln!(out, "--- Loading data took {} seconds ---", run.load_time.as_secs_f64())?;
    }

    for (building_id, estimate) in run.ledger.iter() {
        writeln!(out, "--- Building ID: {} ---", building_id)?;
        writeln!(out, "Over {} years", run.config.years_out)?;
        writeln!(out, "Standard discount rate of {}", discount_rate)?;
        writeln!(out, "{} loss estimate: {}", label, estimate.loss_estimate)?;
        if show_timings {
            writeln!(out, "Took {} seconds to run", estimate.runtime.as_secs_f64())?;
        }
    }

    writeln!(out, "--- Total Loss Over All Properties: {} ---", run.total_loss())?;

    if show_timings {
        let total = run.load_time + run.calc_time;
        writeln!(out, "--- Total calculation took {} seconds ---", total.as_secs_f64())?;
    }

    Ok(())
}

/// Write `building_id,loss_estimate` rows in ledger order
pub fn write_csv_report<W: Write>(ledger: &LossLedger, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for (building_id, estimate) in ledger.iter() {
        writer.serialize(EstimateRow { building_id, loss_estimate: estimate.loss_estimate })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the CSV report to a file
pub fn write_csv_file<P: AsRef<Path>>(ledger: &LossLedger, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_csv_report(ledger, file)
}
