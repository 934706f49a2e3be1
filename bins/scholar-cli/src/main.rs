//! scholar — Command-line scholarship award estimator.
//!
//! Validates income and household size, runs the award engine, and prints
//! the K-8 and 9-12 award amounts as text or JSON.

mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use scholar_award::AwardEngine;
use scholar_core::traits::AwardCalculator;
use scholar_core::types::{AwardInput, Usd};
use scholar_core::validation::{parse_agi, parse_household_size};
use tracing::{debug, info};

use crate::config::{CliConfig, LogFormat, OutputFormat};
use crate::render::ScheduleRow;

/// Most rows a single schedule may print.
const MAX_SCHEDULE_ROWS: usize = 10_000;

/// Scholarship award estimator.
#[derive(Parser, Debug)]
#[command(name = "scholar")]
#[command(version, about = "Estimate a means-tested scholarship award from income and household size.")]
struct Cli {
    /// Log level (trace, debug, info, warn, error). Overrides SCHOLAR_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format. Overrides SCHOLAR_LOG_FORMAT.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Result output format. Overrides SCHOLAR_OUTPUT.
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the award for one household.
    Estimate(EstimateArgs),
    /// Print the award across a range of incomes for one household size.
    Schedule(ScheduleArgs),
    /// Print the fixed policy constants.
    Constants,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Adjusted gross income in dollars (e.g. 45000).
    #[arg(short, long, allow_hyphen_values = true)]
    agi: String,

    /// Number of people in the household.
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    household_size: String,

    /// Also show the poverty threshold, FPL ratio, and award ratio.
    #[arg(short, long)]
    explain: bool,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    /// Number of people in the household.
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    household_size: String,

    /// First income in the schedule, in dollars.
    #[arg(long, default_value = "10000")]
    from: String,

    /// Last income in the schedule, in dollars.
    #[arg(long, default_value = "200000")]
    to: String,

    /// Income increment between rows, in dollars.
    #[arg(long, default_value = "10000")]
    step: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::from_env()
        .context("invalid environment configuration")?
        .with_overrides(cli.log_level.clone(), cli.log_format, cli.output);

    init_logging(&config.log_level, config.log_format);
    debug!(?config, "configuration loaded");

    let engine = AwardEngine::new();
    let out = run(cli.command, &config, &engine)?;
    println!("{out}");
    Ok(())
}

/// Execute a subcommand and return what should go to stdout.
fn run(command: Commands, config: &CliConfig, engine: &impl AwardCalculator) -> Result<String> {
    match command {
        Commands::Estimate(args) => estimate(args, config, engine),
        Commands::Schedule(args) => schedule(args, config, engine),
        Commands::Constants => match config.output {
            OutputFormat::Text => Ok(render::constants_text()),
            OutputFormat::Json => render::constants_json(),
        },
    }
}

fn estimate(args: EstimateArgs, config: &CliConfig, engine: &impl AwardCalculator) -> Result<String> {
    let input = AwardInput::parse(&args.agi, &args.household_size).context("invalid input")?;
    let breakdown = engine.breakdown(&input);
    info!(
        household_size = input.household_size(),
        award_ratio = breakdown.award_ratio,
        "estimate complete"
    );

    match config.output {
        OutputFormat::Text => Ok(render::estimate_text(&breakdown, args.explain)),
        OutputFormat::Json => render::estimate_json(&breakdown, args.explain),
    }
}

/// Incomes `from, from + step, …` up to and including `to`.
///
/// Bounds and step are rounded to the cent and stepped in whole cents, so an
/// endpoint that lies on the grid is always included.
fn schedule_incomes(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    let from = Usd::from_dollars(from).context("invalid --from")?;
    let to = Usd::from_dollars(to).context("invalid --to")?;
    let step = Usd::from_dollars(step).context("invalid --step")?;
    if step.is_zero() {
        bail!("--step must be at least one cent");
    }
    if to < from {
        bail!("--to ({to}) must not be below --from ({from})");
    }
    let steps = (to.cents() - from.cents()) / step.cents();
    if steps >= MAX_SCHEDULE_ROWS as u64 {
        bail!("schedule would exceed {MAX_SCHEDULE_ROWS} rows; use a larger --step");
    }
    Ok((0..=steps)
        .map(|i| Usd::from_cents(from.cents() + step.cents() * i).as_dollars())
        .collect())
}

fn schedule(args: ScheduleArgs, config: &CliConfig, engine: &impl AwardCalculator) -> Result<String> {
    let household_size = parse_household_size(&args.household_size).context("invalid --household-size")?;
    let from = parse_agi(&args.from).context("invalid --from")?;
    let to = parse_agi(&args.to).context("invalid --to")?;
    let step = parse_agi(&args.step).context("invalid --step")?;

    let rows = schedule_incomes(from, to, step)?
        .into_iter()
        .map(|agi| -> Result<ScheduleRow> {
            let input = AwardInput::new(agi, household_size)?;
            Ok(ScheduleRow::from(&engine.breakdown(&input)))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(household_size, rows = rows.len(), "schedule complete");

    match config.output {
        OutputFormat::Text => Ok(render::schedule_text(household_size, &rows)),
        OutputFormat::Json => render::schedule_json(&rows),
    }
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so stdout carries only results. `RUST_LOG`, when set,
/// takes precedence over `level_str`.
fn init_logging(level_str: &str, format: LogFormat) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = parse(args);
        let config = CliConfig::default().with_overrides(None, None, cli.output);
        run(cli.command, &config, &AwardEngine::new())
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_estimate_flags() {
        let cli = parse(&["scholar", "estimate", "--agi", "45000", "-n", "4", "--explain"]);
        match cli.command {
            Commands::Estimate(args) => {
                assert_eq!(args.agi, "45000");
                assert_eq!(args.household_size, "4");
                assert!(args.explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&[
            "scholar", "estimate", "--agi", "1", "-n", "1", "--output", "json", "--log-format", "json",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
    }

    #[test]
    fn missing_required_flag_is_rejected() {
        assert!(Cli::try_parse_from(["scholar", "estimate", "--agi", "45000"]).is_err());
    }

    #[test]
    fn estimate_full_award_text() {
        let out = run_args(&["scholar", "estimate", "--agi", "45000", "-n", "4"]).unwrap();
        assert_eq!(out, "K-8:  $6,166.00\n9-12: $8,408.00");
    }

    #[test]
    fn estimate_floor_json() {
        let out = run_args(&["scholar", "estimate", "--agi", "10000000", "-n", "1", "-o", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!({ "k8": 616.6, "high": 840.8 }));
    }

    #[test]
    fn estimate_rejects_bad_input() {
        let err = run_args(&["scholar", "estimate", "--agi", "-5", "-n", "2"]).unwrap_err();
        assert!(format!("{err:#}").contains("must be positive"), "{err:#}");

        let err = run_args(&["scholar", "estimate", "--agi", "5000", "-n", "2.5"]).unwrap_err();
        assert!(format!("{err:#}").contains("whole number"), "{err:#}");
    }

    #[test]
    fn schedule_incomes_inclusive_range() {
        assert_eq!(
            schedule_incomes(10_000.0, 30_000.0, 10_000.0).unwrap(),
            vec![10_000.0, 20_000.0, 30_000.0]
        );
        assert_eq!(schedule_incomes(10_000.0, 25_000.0, 10_000.0).unwrap(), vec![10_000.0, 20_000.0]);
        assert_eq!(schedule_incomes(5.0, 5.0, 1.0).unwrap(), vec![5.0]);
    }

    #[test]
    fn schedule_incomes_includes_endpoint_on_cent_steps() {
        // (1000.3 - 1000.1) / 0.1 lands just under 2.0 in floating point.
        assert_eq!(
            schedule_incomes(1000.10, 1000.30, 0.10).unwrap(),
            vec![1000.1, 1000.2, 1000.3]
        );
        assert_eq!(schedule_incomes(0.1, 0.3, 0.1).unwrap(), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn schedule_incomes_rejects_sub_cent_step() {
        let err = schedule_incomes(1.0, 2.0, 0.001).unwrap_err();
        assert!(err.to_string().contains("at least one cent"), "{err}");
    }

    #[test]
    fn schedule_incomes_rejects_bad_ranges() {
        assert!(schedule_incomes(20_000.0, 10_000.0, 1_000.0).is_err());
        assert!(schedule_incomes(1.0, 1_000_000.0, 1.0).is_err());
    }

    #[test]
    fn schedule_negative_household_reaches_validation() {
        let err = run_args(&["scholar", "schedule", "-n", "-3"]).unwrap_err();
        assert!(format!("{err:#}").contains("at least 1"), "{err:#}");
    }

    #[test]
    fn schedule_default_range() {
        let out = run_args(&["scholar", "schedule", "-n", "2"]).unwrap();
        // Header lines plus 20 rows from $10,000 to $200,000.
        assert_eq!(out.lines().count(), 22);
        assert!(out.contains("$200,000.00"));
    }

    #[test]
    fn schedule_json_is_non_increasing() {
        let out = run_args(&[
            "scholar", "schedule", "-n", "3", "--from", "50000", "--to", "300000", "--step", "25000", "-o",
            "json",
        ])
        .unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(rows.len(), 11);
        let k8: Vec<f64> = rows.iter().map(|r| r["k8"].as_f64().unwrap()).collect();
        assert!(k8.windows(2).all(|w| w[0] >= w[1]), "{k8:?}");
    }

    #[test]
    fn constants_command() {
        let out = run_args(&["scholar", "constants"]).unwrap();
        assert!(out.contains("Decay base:             0.5"), "{out}");
    }
}
