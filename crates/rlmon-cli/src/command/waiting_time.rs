use std::path::PathBuf;

use rlmon_metrics::{
    filter::ScenarioFilter,
    waiting_time::{WaitingTimePoint, WaitingTimeSeries},
};

use crate::{
    command::MetricsArg,
    table,
    util::{self, OutputFormat},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct WaitingTimeArg {
    #[command(flatten)]
    pub metrics: MetricsArg,
    /// Scenario to list: all, low, medium or high
    #[arg(long, default_value = "all")]
    pub scenario: ScenarioFilter,
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
    /// Write JSON to this file instead of printing
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &WaitingTimeArg) -> anyhow::Result<()> {
    let dataset = util::read_metrics_file(&arg.metrics.path)?;
    let series = WaitingTimeSeries::from_dataset(&dataset);
    let points = match arg.scenario {
        ScenarioFilter::All => series.points().to_vec(),
        ScenarioFilter::Only(scenario) => series.for_scenario(scenario).copied().collect(),
    };
    if points.is_empty() {
        tracing::warn!("no episodes for scenario {}", arg.scenario);
    }

    util::present(&points, arg.format, arg.output.clone(), |points| {
        print_points(arg.scenario, points);
    })
}

fn print_points(scenario: ScenarioFilter, points: &[WaitingTimePoint]) {
    table::print_title(&format!("Waiting Time by Global Step (scenario: {scenario})"));
    table::print_header(
        "Episode",
        8,
        &[("Global Step", 12), ("Scenario", 8), ("Wait Time", 10)],
    );
    for point in points {
        println!(
            "  {:<8} {:>12} {:>8} {:>10.4}",
            point.episode,
            point.global_step,
            point.scenario.as_str(),
            point.waiting_time,
        );
    }
}
