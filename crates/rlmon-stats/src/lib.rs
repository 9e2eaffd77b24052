//! Numeric building blocks for training-run monitoring.
//!
//! This crate provides the small, domain-independent statistics used by
//! `rlmon-metrics`:
//!
//! - **Descriptive statistics**: count, min, max, mean and population
//!   variance / standard deviation of a set of `f64` values
//! - **Trailing windows**: a fixed-capacity window that keeps the most recent
//!   values and averages them, used for moving-average smoothing
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`window`]: Trailing windows for moving averages
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use rlmon_stats::descriptive::DescriptiveStats;
//!
//! let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let stats = DescriptiveStats::from_slice(&values).unwrap();
//! assert_eq!(stats.mean, 5.0);
//! assert_eq!(stats.std_dev, 2.0);
//! ```
//!
//! ## Smoothing a series with a trailing window
//!
//! ```
//! use rlmon_stats::window::TrailingWindow;
//!
//! let mut window = TrailingWindow::with_capacity(2);
//! let means = [1.0, 3.0, 5.0, 7.0]
//!     .into_iter()
//!     .map(|v| {
//!         window.push(v);
//!         window.mean_by(|v| *v).unwrap()
//!     })
//!     .collect::<Vec<_>>();
//! assert_eq!(means, vec![1.0, 2.0, 4.0, 6.0]);
//! ```

pub mod descriptive;
pub mod window;
