//! Derived views over reinforcement-learning training runs
//!
//! This crate turns a log of per-episode training records (reward, waiting-time
//! cost, traffic scenario, step count) into the series used to monitor
//! training progress.
//!
//! # Overview
//!
//! Everything starts from an [`episode::EpisodeDataset`], validated once and
//! read-only afterwards. Each view is a pure function of the dataset:
//!
//! 1. **Load** ([`episode::EpisodeDataset::load`]): Validate raw records
//! 2. **Select** ([`filter::ScenarioFilter`]): Pick all episodes or one scenario's
//! 3. **Summarize** ([`summary::summarize`]): Mean reward/cost, best reward/cost, count
//! 4. **Smooth** ([`rolling::rolling_average`]): Trailing moving average per episode
//! 5. **Band** ([`bands::grouped_bands`]): Mean and population standard deviation
//!    of cost per fixed-size group of episodes
//! 6. **Compare** ([`baseline::compare`]): Percentage improvement over reference methods
//!
//! Supporting views:
//!
//! - [`summary::scenario_breakdown`] and [`summary::best_episode`]
//! - [`waiting_time::WaitingTimeSeries`]: waiting time against global simulation step
//! - [`report::Report`]: all of the above in one serializable value
//! - [`metrics_log::MetricsLog`]: the trainer's `metrics.json` format
//!
//! # Errors
//!
//! Loading fails with [`error::ValidationError`]; queries with out-of-domain
//! parameters fail with [`error::InvalidArgument`]; statistics over no episodes
//! fail with [`error::EmptyInputError`]. Composed operations report any of
//! them through [`error::MetricsError`].
//!
//! # Examples
//!
//! ```
//! use rlmon_metrics::{
//!     bands::grouped_bands,
//!     baseline::{BaselineEntry, compare},
//!     episode::{EpisodeDataset, RawEpisodeRecord},
//!     filter::ScenarioFilter,
//!     rolling::rolling_average,
//!     summary::summarize_dataset,
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let dataset = EpisodeDataset::load([
//!     RawEpisodeRecord::new(1, "medium", 3609.37, 0.0487, 3600),
//!     RawEpisodeRecord::new(2, "high", 3566.77, 0.0497, 3600),
//!     RawEpisodeRecord::new(3, "low", 3566.19, 0.0500, 3600),
//! ])?;
//!
//! let summary = summarize_dataset(&dataset, "high".parse::<ScenarioFilter>()?)?;
//! assert_eq!(summary.count, 1);
//!
//! let smoothed = rolling_average(&dataset, 10)?;
//! assert_eq!(smoothed.len(), 3);
//!
//! let bands = grouped_bands(&dataset, 2)?;
//! assert_eq!(bands.len(), 2);
//!
//! let delta = compare(&summary, &BaselineEntry::new("Actuated", 3425.46, 0.0680))?;
//! assert!(delta.cost_delta_pct > 0.0);
//! # Ok(())
//! # }
//! ```

pub mod bands;
pub mod baseline;
pub mod episode;
pub mod error;
pub mod filter;
pub mod metrics_log;
pub mod report;
pub mod rolling;
pub mod summary;
pub mod waiting_time;
