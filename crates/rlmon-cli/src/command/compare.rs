use std::path::PathBuf;

use rlmon_metrics::{
    baseline::{BaselineComparison, BaselineTable},
    filter::ScenarioFilter,
    summary::{self, AggregateSummary},
};
use serde::Serialize;

use crate::{
    command::MetricsArg,
    config::{self, DEFAULT_REFERENCE_BASELINE},
    table,
    util::{self, OutputFormat},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CompareArg {
    #[command(flatten)]
    pub metrics: MetricsArg,
    /// Scenario to compare: all, low, medium or high
    #[arg(long, default_value = "all")]
    pub scenario: ScenarioFilter,
    /// Path to a baseline table JSON file (built-in table if omitted)
    #[arg(long)]
    pub baselines: Option<PathBuf>,
    /// Baseline named in the closing verdict
    #[arg(long, default_value = DEFAULT_REFERENCE_BASELINE)]
    pub reference: String,
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ComparisonView<'a> {
    scenario: ScenarioFilter,
    summary: AggregateSummary,
    baselines: &'a BaselineTable,
    comparisons: Vec<BaselineComparison>,
}

pub(crate) fn run(arg: &CompareArg) -> anyhow::Result<()> {
    let dataset = util::read_metrics_file(&arg.metrics.path)?;
    let baselines = config::load_baselines(arg.baselines.as_deref())?;
    let summary = summary::summarize_dataset(&dataset, arg.scenario)?;
    let comparisons = baselines.compare_all(&summary)?;
    let reference = baselines.get(&arg.reference).map(|entry| entry.method.as_str());
    if reference.is_none() {
        tracing::warn!(
            "reference baseline {:?} is not in the baseline table",
            arg.reference
        );
    }

    let view = ComparisonView {
        scenario: arg.scenario,
        summary,
        baselines: &baselines,
        comparisons,
    };
    util::present(&view, arg.format, None, |view| {
        print_comparison(view, reference);
    })
}

fn print_comparison(view: &ComparisonView<'_>, reference: Option<&str>) {
    table::print_title(&format!(
        "Baseline Comparison (scenario: {}, {} episodes)",
        view.scenario, view.summary.count
    ));
    table::print_header(
        "Method",
        14,
        &[
            ("Reward", 10),
            ("Cost", 8),
            ("Reward Δ", 10),
            ("Cost Δ", 10),
        ],
    );
    println!(
        "  {:<14} {:>10.2} {:>8.4} {:>10} {:>10}",
        "(this run)", view.summary.avg_reward, view.summary.avg_cost, "", ""
    );
    for (baseline, comparison) in view.baselines.baselines.iter().zip(&view.comparisons) {
        println!(
            "  {:<14} {:>10.2} {:>8.4} {:>10} {:>10}",
            baseline.method,
            baseline.reward,
            baseline.cost,
            table::signed_pct(comparison.delta.reward_delta_pct),
            table::signed_pct(comparison.delta.cost_delta_pct),
        );
    }
    println!();

    if let Some(comparison) = reference
        .and_then(|method| view.comparisons.iter().find(|c| c.method == method))
    {
        println!(
            "{:.2}% increase in reward and {:.2}% reduction in waiting time compared to {}.",
            comparison.delta.reward_delta_pct, comparison.delta.cost_delta_pct, comparison.method
        );
    }
}
