//! Baseline reference table configuration.
//!
//! The table is read from a JSON file:
//!
//! ```json
//! {
//!   "baselines": [
//!     {"method": "Fixed-Time", "reward": 3402.23, "cost": 0.0694},
//!     {"method": "Actuated", "reward": 3425.46, "cost": 0.0680}
//!   ]
//! }
//! ```
//!
//! Without a file the built-in table below is used.

use std::path::Path;

use anyhow::bail;
use rlmon_metrics::baseline::{BaselineEntry, BaselineTable};

use crate::util;

/// Baseline named in the one-line verdict of the `compare` command.
pub(crate) const DEFAULT_REFERENCE_BASELINE: &str = "Actuated";

/// Fixed-time and actuated signal control measured on the 4x4 grid.
pub(crate) fn default_baselines() -> BaselineTable {
    BaselineTable::new(vec![
        BaselineEntry::new("Fixed-Time", 3402.23, 0.0694),
        BaselineEntry::new("Actuated", 3425.46, 0.0680),
    ])
}

pub(crate) fn load_baselines(path: Option<&Path>) -> anyhow::Result<BaselineTable> {
    let Some(path) = path else {
        tracing::debug!("using built-in baseline table");
        return Ok(default_baselines());
    };

    let table: BaselineTable = util::read_json_file("baseline", path)?;
    if table.baselines.is_empty() {
        bail!("{} defines no baselines", path.display());
    }
    tracing::info!(
        baselines = table.baselines.len(),
        "loaded baseline table {}",
        path.display()
    );
    Ok(table)
}
