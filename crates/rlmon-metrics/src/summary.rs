//! Aggregate statistics over a subset of episodes.
//!
//! [`summarize`] reduces any set of episode records to an
//! [`AggregateSummary`]: mean reward, mean cost, best (maximum) reward, best
//! (minimum) cost and the number of episodes. Empty input is an error, never
//! a summary of zeros.
//!
//! # Examples
//!
//! ```
//! use rlmon_metrics::{
//!     episode::{EpisodeDataset, RawEpisodeRecord},
//!     filter::ScenarioFilter,
//!     summary::summarize_dataset,
//! };
//!
//! let dataset = EpisodeDataset::load([
//!     RawEpisodeRecord::new(1, "low", 100.0, 0.10, 3600),
//!     RawEpisodeRecord::new(2, "high", 300.0, 0.30, 3600),
//! ])
//! .unwrap();
//!
//! let summary = summarize_dataset(&dataset, ScenarioFilter::All).unwrap();
//! assert_eq!(summary.avg_reward, 200.0);
//! assert_eq!(summary.max_reward, 300.0);
//! assert_eq!(summary.min_cost, 0.10);
//! assert_eq!(summary.count, 2);
//! ```

use rlmon_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{
    episode::{EpisodeDataset, EpisodeRecord, Scenario},
    error::{EmptyInputError, MetricsError},
    filter::{self, ScenarioFilter},
};

/// Scalar summary of a set of episodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// Mean reward.
    pub avg_reward: f64,
    /// Mean of the per-episode average cost.
    pub avg_cost: f64,
    /// Highest reward.
    pub max_reward: f64,
    /// Lowest per-episode average cost.
    pub min_cost: f64,
    /// Number of episodes summarized.
    pub count: usize,
}

/// Summarizes `subset`.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when `subset` yields no records.
pub fn summarize<'a, I>(subset: I) -> Result<AggregateSummary, EmptyInputError>
where
    I: IntoIterator<Item = &'a EpisodeRecord>,
{
    let (rewards, costs): (Vec<f64>, Vec<f64>) = subset
        .into_iter()
        .map(|record| (record.reward, record.avg_cost))
        .unzip();

    let reward = DescriptiveStats::from_slice(&rewards).ok_or(EmptyInputError)?;
    let cost = DescriptiveStats::from_slice(&costs).ok_or(EmptyInputError)?;
    debug_assert_eq!(reward.count, cost.count);

    Ok(AggregateSummary {
        avg_reward: reward.mean,
        avg_cost: cost.mean,
        max_reward: reward.max,
        min_cost: cost.min,
        count: reward.count,
    })
}

/// Summarizes the episodes of `dataset` selected by `filter`.
///
/// # Errors
///
/// Returns [`EmptyInputError`] when no episode matches `filter`.
pub fn summarize_dataset(
    dataset: &EpisodeDataset,
    filter: ScenarioFilter,
) -> Result<AggregateSummary, EmptyInputError> {
    summarize(filter::filter(dataset, filter))
}

/// Summarizes the episodes selected by a textual filter such as `"all"` or
/// `"medium"`.
///
/// # Errors
///
/// Returns [`MetricsError::InvalidArgument`] for an unknown token and
/// [`MetricsError::EmptyInput`] when nothing matches.
///
/// ```
/// use rlmon_metrics::{
///     episode::{EpisodeDataset, RawEpisodeRecord},
///     error::{EmptyInputError, MetricsError},
///     summary::summarize_scenario,
/// };
///
/// let dataset =
///     EpisodeDataset::load([RawEpisodeRecord::new(1, "low", 1.0, 0.1, 10)]).unwrap();
///
/// assert!(summarize_scenario(&dataset, "low").is_ok());
/// assert_eq!(
///     summarize_scenario(&dataset, "high"),
///     Err(MetricsError::EmptyInput(EmptyInputError))
/// );
/// assert!(matches!(
///     summarize_scenario(&dataset, "heavy"),
///     Err(MetricsError::InvalidArgument(_))
/// ));
/// ```
pub fn summarize_scenario(
    dataset: &EpisodeDataset,
    filter: &str,
) -> Result<AggregateSummary, MetricsError> {
    let filter = filter.parse::<ScenarioFilter>()?;
    Ok(summarize_dataset(dataset, filter)?)
}

/// Summary of one scenario's episodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub scenario: Scenario,
    #[serde(flatten)]
    pub summary: AggregateSummary,
}

/// Per-scenario summaries in low, medium, high order.
///
/// Scenarios with no episodes in `dataset` are left out.
#[must_use]
pub fn scenario_breakdown(dataset: &EpisodeDataset) -> Vec<ScenarioSummary> {
    Scenario::ALL
        .into_iter()
        .filter_map(|scenario| {
            let summary = summarize_dataset(dataset, scenario.into()).ok()?;
            Some(ScenarioSummary { scenario, summary })
        })
        .collect()
}

/// The episode with the highest reward; the earliest one wins ties.
#[must_use]
pub fn best_episode(dataset: &EpisodeDataset) -> &EpisodeRecord {
    dataset
        .iter()
        .reduce(|best, record| if record.reward > best.reward { record } else { best })
        .expect("episode dataset is never empty")
}
