use std::{io, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    bands::BandsArg, compare::CompareArg, report::ReportArg, rolling::RollingArg,
    scenarios::ScenariosArg, summary::SummaryArg, waiting_time::WaitingTimeArg,
};

mod bands;
mod compare;
mod report;
mod rolling;
mod scenarios;
mod summary;
mod waiting_time;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Show aggregate statistics for all episodes or one scenario
    Summary(#[clap(flatten)] SummaryArg),
    /// Show mean reward and cost for each traffic scenario
    Scenarios(#[clap(flatten)] ScenariosArg),
    /// Compute the trailing moving average of reward and cost
    Rolling(#[clap(flatten)] RollingArg),
    /// Compute mean and standard deviation of cost per group of episodes
    Bands(#[clap(flatten)] BandsArg),
    /// List waiting time against the global simulation step
    WaitingTime(#[clap(flatten)] WaitingTimeArg),
    /// Compare against baseline methods
    Compare(#[clap(flatten)] CompareArg),
    /// Write every derived series as one JSON document
    Report(#[clap(flatten)] ReportArg),
}

/// Path to the trainer's metrics log, shared by every command
#[derive(Debug, Clone, Args)]
pub(crate) struct MetricsArg {
    /// Path to the metrics JSON file
    #[arg(value_name = "METRICS")]
    pub path: PathBuf,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Scenarios(arg) => scenarios::run(&arg)?,
        Mode::Rolling(arg) => rolling::run(&arg)?,
        Mode::Bands(arg) => bands::run(&arg)?,
        Mode::WaitingTime(arg) => waiting_time::run(&arg)?,
        Mode::Compare(arg) => compare::run(&arg)?,
        Mode::Report(arg) => report::run(&arg)?,
    }
    Ok(())
}

/// Install the global tracing subscriber, logging to stderr.
fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["rlmon", "rolling", "metrics.json"]).unwrap();
        assert_eq!(args.verbose, 0);
        let Mode::Rolling(arg) = args.mode else {
            panic!("expected rolling command");
        };
        assert_eq!(arg.window, rlmon_metrics::rolling::DEFAULT_WINDOW_SIZE);
        assert_eq!(arg.metrics.path, PathBuf::from("metrics.json"));
    }

    #[test]
    fn test_scenario_and_verbosity() {
        let args =
            CommandArgs::try_parse_from(["rlmon", "summary", "m.json", "--scenario", "High", "-vv"])
                .unwrap();
        assert_eq!(args.verbose, 2);
        let Mode::Summary(arg) = args.mode else {
            panic!("expected summary command");
        };
        assert_eq!(
            arg.scenario,
            rlmon_metrics::filter::ScenarioFilter::Only(rlmon_metrics::episode::Scenario::High)
        );
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        assert!(
            CommandArgs::try_parse_from(["rlmon", "summary", "m.json", "--scenario", "rush"])
                .is_err()
        );
    }
}
