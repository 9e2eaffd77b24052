use std::path::PathBuf;

use rlmon_metrics::rolling::{self, DEFAULT_WINDOW_SIZE, RollingPoint};

use crate::{
    command::MetricsArg,
    table,
    util::{self, OutputFormat},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RollingArg {
    #[command(flatten)]
    pub metrics: MetricsArg,
    /// Number of episodes in the trailing window
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window: usize,
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
    /// Write JSON to this file instead of printing
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &RollingArg) -> anyhow::Result<()> {
    let dataset = util::read_metrics_file(&arg.metrics.path)?;
    let points = rolling::rolling_average(&dataset, arg.window)?;
    tracing::debug!(window = arg.window, points = points.len(), "computed rolling average");

    util::present(&points, arg.format, arg.output.clone(), |points| {
        print_points(arg.window, points);
    })
}

fn print_points(window: usize, points: &[RollingPoint]) {
    table::print_title(&format!("Rolling Average (window: {window})"));
    table::print_header(
        "Episode",
        8,
        &[
            ("Scenario", 8),
            ("Window", 6),
            ("Avg Reward", 12),
            ("Avg Cost", 10),
        ],
    );
    for point in points {
        println!(
            "  {:<8} {:>8} {:>6} {:>12.2} {:>10.4}",
            point.episode,
            point.scenario.as_str(),
            point.window_len,
            point.avg_reward,
            point.avg_cost,
        );
    }
}
