//! The trainer's `metrics.json` episode log.
//!
//! ```json
//! {
//!   "episodes": [
//!     {"episode": 1, "scenario": "medium", "reward": 3609.37, "avg_cost": 0.0487, "steps": 3600},
//!     {"episode": 2, "scenario": "high", "reward": 3566.77, "avg_cost": 0.0497, "steps": 3600}
//!   ],
//!   "best_reward": 3609.37,
//!   "best_episode": 1
//! }
//! ```
//!
//! `best_reward` and `best_episode` are written by the trainer and may be
//! missing. They are never trusted: [`MetricsLog::check_best`] recomputes the
//! best episode from the records and reports any disagreement.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    episode::{EpisodeDataset, RawEpisodeRecord},
    error::ValidationError,
    summary,
};

/// Episode log as written by the trainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsLog {
    pub episodes: Vec<RawEpisodeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_reward: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_episode: Option<i64>,
}

impl MetricsLog {
    /// Validates the logged episodes into a dataset.
    pub fn to_dataset(&self) -> Result<EpisodeDataset, ValidationError> {
        EpisodeDataset::load(self.episodes.iter().cloned())
    }

    /// Compares the recorded best episode with the one found in `dataset`.
    ///
    /// Returns `None` when they agree or when nothing was recorded.
    #[must_use]
    pub fn check_best(&self, dataset: &EpisodeDataset) -> Option<BestEpisodeMismatch> {
        let best = summary::best_episode(dataset);
        let episode_differs = self
            .best_episode
            .is_some_and(|episode| episode != i64::from(best.episode));
        let reward_differs = self
            .best_reward
            .is_some_and(|reward| (reward - best.reward).abs() > 1e-9 * reward.abs().max(1.0));

        (episode_differs || reward_differs).then(|| BestEpisodeMismatch {
            recorded_episode: self.best_episode,
            recorded_reward: self.best_reward,
            computed_episode: best.episode,
            computed_reward: best.reward,
        })
    }
}

/// Recorded best episode that disagrees with the episode records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestEpisodeMismatch {
    pub recorded_episode: Option<i64>,
    pub recorded_reward: Option<f64>,
    pub computed_episode: u32,
    pub computed_reward: f64,
}

impl fmt::Display for BestEpisodeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log records best episode ")?;
        match self.recorded_episode {
            Some(episode) => write!(f, "{episode}")?,
            None => write!(f, "<none>")?,
        }
        if let Some(reward) = self.recorded_reward {
            write!(f, " (reward {reward:.2})")?;
        }
        write!(
            f,
            ", but episode {} has the highest reward ({:.2})",
            self.computed_episode, self.computed_reward
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG: &str = r#"{
        "episodes": [
            {"episode": 1, "scenario": "medium", "reward": 3609.371581907384, "avg_cost": 0.048709326684474946, "steps": 3600},
            {"episode": 2, "scenario": "high", "reward": 3566.77270154655, "avg_cost": 0.04971971999970265, "steps": 3600},
            {"episode": 3, "scenario": "low", "reward": 3566.189090117812, "avg_cost": 0.050014850600208674, "steps": 3600}
        ],
        "best_reward": 3609.371581907384,
        "best_episode": 1
    }"#;

    #[test]
    fn test_parse_trainer_log() {
        let log: MetricsLog = serde_json::from_str(LOG).unwrap();
        let dataset = log.to_dataset().unwrap();

        assert_eq!(dataset.num_episodes(), 3);
        assert_eq!(log.best_episode, Some(1));
        assert_eq!(log.check_best(&dataset), None);
    }

    #[test]
    fn test_best_fields_are_optional() {
        let log: MetricsLog = serde_json::from_str(
            r#"{"episodes": [{"episode": 1, "scenario": "low", "reward": 1.0, "avg_cost": 0.1, "steps": 10}]}"#,
        )
        .unwrap();
        let dataset = log.to_dataset().unwrap();

        assert_eq!(log.best_reward, None);
        assert_eq!(log.check_best(&dataset), None);
    }

    #[test]
    fn test_mismatched_best_episode_is_reported() {
        let mut log: MetricsLog = serde_json::from_str(LOG).unwrap();
        log.best_episode = Some(2);
        let dataset = log.to_dataset().unwrap();

        let mismatch = log.check_best(&dataset).unwrap();
        assert_eq!(mismatch.recorded_episode, Some(2));
        assert_eq!(mismatch.computed_episode, 1);
        assert!(mismatch.to_string().contains("episode 1 has the highest reward"));
    }

    #[test]
    fn test_invalid_log_record_is_validation_error() {
        let log: MetricsLog = serde_json::from_str(
            r#"{"episodes": [{"episode": 1, "scenario": "gridlock", "reward": 1.0, "avg_cost": 0.1, "steps": 10}]}"#,
        )
        .unwrap();
        assert!(matches!(
            log.to_dataset(),
            Err(ValidationError::InvalidField { episode: 1, .. })
        ));
    }
}
