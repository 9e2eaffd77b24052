//! Trailing moving averages over the full episode sequence.
//!
//! Point `i` of the series averages the records at positions
//! `max(0, i + 1 - window_size) ..= i`. The window grows over the first
//! `window_size - 1` episodes and then slides; there is no padding and no
//! look-ahead. The series always covers the whole, unfiltered dataset.

use rlmon_stats::window::TrailingWindow;
use serde::Serialize;

use crate::{
    episode::{EpisodeDataset, EpisodeRecord, Scenario},
    error::InvalidArgument,
};

pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Smoothed reward and cost at one episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RollingPoint {
    pub episode: u32,
    /// Mean `avg_cost` over the trailing window ending at this episode.
    pub avg_cost: f64,
    /// Mean `reward` over the trailing window ending at this episode.
    pub avg_reward: f64,
    pub scenario: Scenario,
    /// Number of episodes in the window (less than the window size only at the start).
    pub window_len: usize,
}

/// Computes the trailing moving average of reward and cost, one point per
/// episode in dataset order.
///
/// # Errors
///
/// Returns [`InvalidArgument::NonPositiveWindowSize`] when `window_size` is 0.
///
/// # Examples
///
/// ```
/// use rlmon_metrics::{
///     episode::{EpisodeDataset, RawEpisodeRecord},
///     rolling::rolling_average,
/// };
///
/// let dataset = EpisodeDataset::load([
///     RawEpisodeRecord::new(1, "low", 100.0, 0.5, 3600),
///     RawEpisodeRecord::new(2, "medium", 200.0, 1.5, 3600),
///     RawEpisodeRecord::new(3, "high", 300.0, 2.5, 3600),
/// ])
/// .unwrap();
///
/// let points = rolling_average(&dataset, 2).unwrap();
/// let rewards = points.iter().map(|p| p.avg_reward).collect::<Vec<_>>();
/// assert_eq!(rewards, vec![100.0, 150.0, 250.0]);
/// ```
pub fn rolling_average(
    dataset: &EpisodeDataset,
    window_size: usize,
) -> Result<Vec<RollingPoint>, InvalidArgument> {
    if window_size == 0 {
        return Err(InvalidArgument::NonPositiveWindowSize);
    }

    let mut window = TrailingWindow::with_capacity(window_size);
    let points = dataset
        .iter()
        .map(|record| {
            window.push(record);
            let mean_of = |value: fn(&EpisodeRecord) -> f64| {
                window
                    .mean_by(|r| value(r))
                    .expect("window holds at least the record just pushed")
            };
            RollingPoint {
                episode: record.episode,
                avg_cost: mean_of(|r| r.avg_cost),
                avg_reward: mean_of(|r| r.reward),
                scenario: record.scenario,
                window_len: window.len(),
            }
        })
        .collect();

    Ok(points)
}
