use rlmon_metrics::{
    episode::EpisodeRecord,
    filter::ScenarioFilter,
    summary::{self, AggregateSummary},
};
use serde::Serialize;

use crate::{
    command::MetricsArg,
    table,
    util::{self, OutputFormat},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummaryArg {
    #[command(flatten)]
    pub metrics: MetricsArg,
    /// Scenario to summarize: all, low, medium or high
    #[arg(long, default_value = "all")]
    pub scenario: ScenarioFilter,
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct SummaryView {
    scenario: ScenarioFilter,
    #[serde(flatten)]
    summary: AggregateSummary,
    best_episode: EpisodeRecord,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let dataset = util::read_metrics_file(&arg.metrics.path)?;
    let summary = summary::summarize_dataset(&dataset, arg.scenario)?;
    let view = SummaryView {
        scenario: arg.scenario,
        summary,
        best_episode: *summary::best_episode(&dataset),
    };

    util::present(&view, arg.format, None, print_summary)
}

fn print_summary(view: &SummaryView) {
    let SummaryView {
        scenario,
        summary,
        best_episode,
    } = view;

    table::print_title(&format!("Training Summary (scenario: {scenario})"));
    println!("  Episodes      : {}", summary.count);
    println!("  Avg Reward    : {:.2}", summary.avg_reward);
    println!("  Avg Cost      : {:.4}", summary.avg_cost);
    println!("  Max Reward    : {:.2}", summary.max_reward);
    println!("  Min Cost      : {:.4}", summary.min_cost);
    println!(
        "  Best Episode  : {} ({}, reward {:.2}, cost {:.4})",
        best_episode.episode, best_episode.scenario, best_episode.reward, best_episode.avg_cost
    );
}
