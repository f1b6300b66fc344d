//! Building Loss CLI
//!
//! Runs a loss formula over a portfolio JSON file and prints per-building
//! estimates with the portfolio total.
//!
//! Usage:
//!   building_loss simple_loss <YEARS_OUT> [STANDARD_DISCOUNT_RATE] --input <FILE>
//!   building_loss complex_loss <YEARS_OUT> [STANDARD_DISCOUNT_RATE] --input <FILE>
//!   building_loss portfolio [YEARS_OUT] [--input <FILE>]
//!
//! Example:
//!   building_loss simple_loss 8 0.05 --input data.json --csv losses.csv

use anyhow::{Context, Result};
use building_loss::building::DEFAULT_DATA_PATH;
use building_loss::loss::{FormulaKind, LossFormula, PORTFOLIO_DISCOUNT_RATE};
use building_loss::report::{projected_loss_line, write_csv_file, write_text_report};
use building_loss::runner::{CalculationConfig, LossRunner, DEFAULT_YEARS_OUT};
use building_loss::LossCalculator;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "building_loss")]
#[command(version, about = "Projected hazard losses for a building portfolio")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compounded inflation, survival-adjusted hazard, discounted at the given rate
    #[command(name = "simple_loss")]
    SimpleLoss(FormulaArgs),
    /// Exponential inflation/floor-area model with a linear hazard multiplier
    #[command(name = "complex_loss")]
    ComplexLoss(FormulaArgs),
    /// Portfolio formula at a fixed 5% discount rate
    Portfolio(PortfolioArgs),
}

#[derive(Args, Debug)]
struct FormulaArgs {
    /// Number of years to project the loss over
    years_out: u32,

    /// Annual discount rate
    #[arg(default_value_t = PORTFOLIO_DISCOUNT_RATE, allow_negative_numbers = true)]
    standard_discount_rate: f64,

    /// Building data JSON file
    #[arg(long)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct PortfolioArgs {
    /// Number of years to project the loss over
    #[arg(default_value_t = DEFAULT_YEARS_OUT)]
    years_out: u32,

    /// Building data JSON file
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Evaluate buildings in parallel
    #[arg(long)]
    parallel: bool,

    /// Also write per-building estimates to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print load, per-building, and total runtimes
    #[arg(long)]
    timings: bool,
}

impl Commands {
    fn into_parts(self) -> (CalculationConfig, PathBuf, OutputArgs) {
        match self {
            Commands::SimpleLoss(args) => args.into_parts(FormulaKind::Simple),
            Commands::ComplexLoss(args) => args.into_parts(FormulaKind::Complex),
            Commands::Portfolio(args) => {
                let config = CalculationConfig::new(LossFormula::Portfolio, args.years_out)
                    .in_parallel(args.output.parallel);
                (config, args.input, args.output)
            }
        }
    }
}

impl FormulaArgs {
    fn into_parts(self, kind: FormulaKind) -> (CalculationConfig, PathBuf, OutputArgs) {
        let formula = LossFormula::from_kind(kind, self.standard_discount_rate);
        let config = CalculationConfig::new(formula, self.years_out).in_parallel(self.output.parallel);
        (config, self.input, self.output)
    }
}

/// Load, calculate, and report. Nothing is written to `out` unless every step succeeds.
fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let (config, input, output) = cli.command.into_parts();

    let runner = LossRunner::from_path(&input)
        .with_context(|| format!("Failed to load building data from {}", input.display()))?;
    let run = runner.run(config);

    if let Some(csv_path) = &output.csv {
        write_csv_file(&run.ledger, csv_path)
            .with_context(|| format!("Failed to write {}", csv_path.display()))?;
    }

    write_text_report(&run, output.timings, out)?;
    if config.formula.kind() == FormulaKind::Portfolio {
        let calculator = LossCalculator::new(config.formula, config.years_out);
        writeln!(out, "{}", projected_loss_line(calculator.total_over(runner.buildings())))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}
