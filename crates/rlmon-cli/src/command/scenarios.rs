use rlmon_metrics::summary::{self, ScenarioSummary};

use crate::{
    command::MetricsArg,
    table,
    util::{self, OutputFormat},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScenariosArg {
    #[command(flatten)]
    pub metrics: MetricsArg,
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

pub(crate) fn run(arg: &ScenariosArg) -> anyhow::Result<()> {
    let dataset = util::read_metrics_file(&arg.metrics.path)?;
    let breakdown = summary::scenario_breakdown(&dataset);
    tracing::debug!(scenarios = breakdown.len(), "computed scenario breakdown");

    util::present(&breakdown, arg.format, None, |rows| print_breakdown(rows))
}

fn print_breakdown(rows: &[ScenarioSummary]) {
    table::print_title("Scenario Breakdown");
    table::print_header(
        "Scenario",
        10,
        &[
            ("Episodes", 8),
            ("Avg Reward", 12),
            ("Avg Cost", 10),
            ("Max Reward", 12),
            ("Min Cost", 10),
        ],
    );
    for ScenarioSummary { scenario, summary } in rows {
        println!(
            "  {:<10} {:>8} {:>12.2} {:>10.4} {:>12.2} {:>10.4}",
            scenario.as_str(),
            summary.count,
            summary.avg_reward,
            summary.avg_cost,
            summary.max_reward,
            summary.min_cost,
        );
    }
}
