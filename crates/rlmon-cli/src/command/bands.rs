use std::path::PathBuf;

use rlmon_metrics::bands::{self, DEFAULT_GROUP_SIZE, GroupBand};

use crate::{
    command::MetricsArg,
    table,
    util::{self, OutputFormat},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BandsArg {
    #[command(flatten)]
    pub metrics: MetricsArg,
    /// Number of episodes per group
    #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
    pub group_size: usize,
    /// Output format: table or json
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
    /// Write JSON to this file instead of printing
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &BandsArg) -> anyhow::Result<()> {
    let dataset = util::read_metrics_file(&arg.metrics.path)?;
    let bands = bands::grouped_bands(&dataset, arg.group_size)?;
    tracing::debug!(group_size = arg.group_size, bands = bands.len(), "computed group bands");

    util::present(&bands, arg.format, arg.output.clone(), |bands| {
        print_bands(arg.group_size, bands);
    })
}

fn print_bands(group_size: usize, bands: &[GroupBand]) {
    table::print_title(&format!("Waiting Time Bands (group size: {group_size})"));
    table::print_header(
        "Episodes",
        10,
        &[("Center", 6), ("Count", 5), ("Mean", 10), ("Std Dev", 10)],
    );
    for band in bands {
        println!(
            "  {:<10} {:>6} {:>5} {:>10.4} {:>10.4}",
            band.label, band.center, band.count, band.mean, band.std_dev,
        );
    }
}
