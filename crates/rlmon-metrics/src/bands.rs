//! Fixed-size group bands for error-bar plots.
//!
//! The dataset is cut into contiguous, non-overlapping groups of
//! `group_size` episodes, starting at position 0. The last group keeps
//! whatever is left over, so `n` episodes always produce `ceil(n / group_size)`
//! bands. Each band carries the mean and the population standard deviation
//! of the group's `avg_cost`.
//!
//! Labels and centers come from positions in the dataset, not from episode
//! numbers, so gaps in the episode numbering do not shift them.

use rlmon_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{episode::EpisodeDataset, error::InvalidArgument};

pub const DEFAULT_GROUP_SIZE: usize = 10;

/// Mean and spread of `avg_cost` over one group of episodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupBand {
    /// 1-based `"first-last"` position range, e.g. `"11-20"`.
    pub label: String,
    /// 0-based position of the group's first episode.
    pub first_position: usize,
    /// 0-based position of the group's last episode.
    pub last_position: usize,
    /// 0-based position of the group's midpoint; the plotting abscissa.
    pub center: usize,
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl GroupBand {
    fn new(first_position: usize, stats: &DescriptiveStats) -> Self {
        let last_position = first_position + stats.count - 1;
        Self {
            label: format!("{}-{}", first_position + 1, last_position + 1),
            first_position,
            last_position,
            center: first_position + stats.count / 2,
            count: stats.count,
            mean: stats.mean,
            std_dev: stats.std_dev,
        }
    }
}

/// Splits the dataset into groups of `group_size` episodes and summarizes
/// each group's `avg_cost`.
///
/// # Errors
///
/// Returns [`InvalidArgument::NonPositiveGroupSize`] when `group_size` is 0.
///
/// # Examples
///
/// ```
/// use rlmon_metrics::{
///     bands::grouped_bands,
///     episode::{EpisodeDataset, RawEpisodeRecord},
/// };
///
/// let dataset = EpisodeDataset::load([
///     RawEpisodeRecord::new(1, "low", 1.0, 1.0, 10),
///     RawEpisodeRecord::new(2, "low", 1.0, 3.0, 10),
///     RawEpisodeRecord::new(3, "low", 1.0, 5.0, 10),
/// ])
/// .unwrap();
///
/// let bands = grouped_bands(&dataset, 2).unwrap();
/// assert_eq!(bands.len(), 2);
/// assert_eq!((bands[0].label.as_str(), bands[0].mean, bands[0].std_dev), ("1-2", 2.0, 1.0));
/// assert_eq!((bands[1].label.as_str(), bands[1].mean, bands[1].std_dev), ("3-3", 5.0, 0.0));
/// ```
pub fn grouped_bands(
    dataset: &EpisodeDataset,
    group_size: usize,
) -> Result<Vec<GroupBand>, InvalidArgument> {
    if group_size == 0 {
        return Err(InvalidArgument::NonPositiveGroupSize);
    }

    let bands = dataset
        .records()
        .chunks(group_size)
        .enumerate()
        .filter_map(|(index, group)| {
            let costs = group.iter().map(|r| r.avg_cost).collect::<Vec<_>>();
            let stats = DescriptiveStats::from_slice(&costs)?;
            Some(GroupBand::new(index * group_size, &stats))
        })
        .collect();

    Ok(bands)
}
