//! Percentage comparisons against reference baseline methods.
//!
//! A baseline is a fixed method's known aggregate performance (for example a
//! fixed-time or actuated signal controller). The table of baselines is
//! configuration owned by the caller; this module only does the arithmetic.
//!
//! The two deltas use opposite sign conventions so that "better" is always
//! positive:
//!
//! ```text
//! reward_delta_pct = (avg_reward - baseline.reward) / baseline.reward * 100
//! cost_delta_pct   = (baseline.cost - avg_cost)     / baseline.cost   * 100
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{BaselineField, InvalidArgument},
    summary::AggregateSummary,
};

/// Known aggregate performance of a reference method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub method: String,
    pub reward: f64,
    pub cost: f64,
}

impl BaselineEntry {
    pub fn new(method: impl Into<String>, reward: f64, cost: f64) -> Self {
        Self {
            method: method.into(),
            reward,
            cost,
        }
    }
}

/// Relative improvement over a baseline, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineDelta {
    /// Positive when the mean reward is higher than the baseline's.
    pub reward_delta_pct: f64,
    /// Positive when the mean cost is lower than the baseline's.
    pub cost_delta_pct: f64,
}

/// Compares `summary` against `baseline`.
///
/// # Errors
///
/// Returns [`InvalidArgument::ZeroBaseline`] when the baseline's reward or
/// cost is zero.
///
/// # Examples
///
/// ```
/// use rlmon_metrics::{
///     baseline::{BaselineEntry, compare},
///     summary::AggregateSummary,
/// };
///
/// let summary = AggregateSummary {
///     avg_reward: 110.0,
///     avg_cost: 0.5,
///     max_reward: 120.0,
///     min_cost: 0.4,
///     count: 4,
/// };
/// let delta = compare(&summary, &BaselineEntry::new("Fixed-Time", 100.0, 2.0)).unwrap();
/// assert_eq!(delta.reward_delta_pct, 10.0);
/// assert_eq!(delta.cost_delta_pct, 75.0);
/// ```
pub fn compare(
    summary: &AggregateSummary,
    baseline: &BaselineEntry,
) -> Result<BaselineDelta, InvalidArgument> {
    let zero = |field| InvalidArgument::ZeroBaseline {
        method: baseline.method.clone(),
        field,
    };
    if baseline.reward == 0.0 {
        return Err(zero(BaselineField::Reward));
    }
    if baseline.cost == 0.0 {
        return Err(zero(BaselineField::Cost));
    }

    Ok(BaselineDelta {
        reward_delta_pct: (summary.avg_reward - baseline.reward) / baseline.reward * 100.0,
        cost_delta_pct: (baseline.cost - summary.avg_cost) / baseline.cost * 100.0,
    })
}

/// Comparison of a summary against one named baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineComparison {
    pub method: String,
    #[serde(flatten)]
    pub delta: BaselineDelta,
}

/// Ordered set of baselines, as loaded from configuration.
///
/// ```
/// use rlmon_metrics::baseline::BaselineTable;
///
/// let table: BaselineTable = serde_json::from_str(
///     r#"{"baselines": [{"method": "Actuated", "reward": 3425.46, "cost": 0.068}]}"#,
/// )
/// .unwrap();
/// assert_eq!(table.get("actuated").unwrap().reward, 3425.46);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineTable {
    pub baselines: Vec<BaselineEntry>,
}

impl BaselineTable {
    #[must_use]
    pub fn new(baselines: Vec<BaselineEntry>) -> Self {
        Self { baselines }
    }

    /// Looks a baseline up by method name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, method: &str) -> Option<&BaselineEntry> {
        self.baselines
            .iter()
            .find(|entry| entry.method.eq_ignore_ascii_case(method))
    }

    /// Compares `summary` against every baseline, in table order.
    ///
    /// # Errors
    ///
    /// Fails on the first baseline with a zero reward or cost.
    pub fn compare_all(
        &self,
        summary: &AggregateSummary,
    ) -> Result<Vec<BaselineComparison>, InvalidArgument> {
        self.baselines
            .iter()
            .map(|baseline| {
                Ok(BaselineComparison {
                    method: baseline.method.clone(),
                    delta: compare(summary, baseline)?,
                })
            })
            .collect()
    }
}
