use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rlmon_metrics::{
    bands::DEFAULT_GROUP_SIZE,
    filter::ScenarioFilter,
    report::{Report, ReportParams},
    rolling::DEFAULT_WINDOW_SIZE,
};
use serde::Serialize;

use crate::{
    command::MetricsArg,
    config,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[command(flatten)]
    pub metrics: MetricsArg,
    /// Scenario for the summary and baseline comparisons
    #[arg(long, default_value = "all")]
    pub scenario: ScenarioFilter,
    /// Number of episodes in the rolling-average window
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window: usize,
    /// Number of episodes per band
    #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
    pub group_size: usize,
    /// Path to a baseline table JSON file (built-in table if omitted)
    #[arg(long)]
    pub baselines: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ReportDocument {
    generated_at: DateTime<Utc>,
    source: PathBuf,
    #[serde(flatten)]
    report: Report,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let dataset = util::read_metrics_file(&arg.metrics.path)?;
    let baselines = config::load_baselines(arg.baselines.as_deref())?;
    let params = ReportParams {
        scenario: arg.scenario,
        window_size: arg.window,
        group_size: arg.group_size,
    };
    let report = Report::build(&dataset, params, &baselines)?;
    tracing::info!(
        rolling = report.rolling.len(),
        bands = report.bands.len(),
        comparisons = report.comparisons.len(),
        "built report"
    );

    let document = ReportDocument {
        generated_at: Utc::now(),
        source: arg.metrics.path.clone(),
        report,
    };
    Output::save_json(&document, arg.output.clone())
}
