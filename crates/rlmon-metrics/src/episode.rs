//! Episode records and the immutable episode dataset.
//!
//! Training runs are logged one record per episode. Records arrive in their
//! wire form ([`RawEpisodeRecord`]) and are validated once, at load time, into
//! an [`EpisodeDataset`]. After that the dataset is read-only; every derived
//! series is recomputed from it on demand.
//!
//! # Load-time validation
//!
//! Records are checked in input order and the first problem is reported:
//!
//! - `episode` must be a positive integer and strictly greater than the
//!   previous record's episode
//! - `scenario` must be one of `low`, `medium`, `high`
//! - `reward` and `avg_cost` must be finite
//! - `steps` must be a positive integer
//!
//! The dataset keeps input order. It is never re-sorted; out-of-order input
//! is rejected instead.
//!
//! # Examples
//!
//! ```
//! use rlmon_metrics::episode::{EpisodeDataset, RawEpisodeRecord, Scenario};
//!
//! let dataset = EpisodeDataset::load([
//!     RawEpisodeRecord::new(1, "medium", 3609.37, 0.0487, 3600),
//!     RawEpisodeRecord::new(2, "high", 3566.77, 0.0497, 3600),
//! ])
//! .unwrap();
//!
//! assert_eq!(dataset.num_episodes(), 2);
//! assert_eq!(dataset.records()[1].scenario, Scenario::High);
//! ```

use std::{fmt, slice, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{InvalidArgument, RecordField, ValidationError};

/// Traffic-load category of an episode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Low,
    Medium,
    High,
}

impl Scenario {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl FromStr for Scenario {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidArgument::UnknownScenario {
                token: s.to_owned(),
            })
    }
}

/// An episode record as written by the trainer, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEpisodeRecord {
    pub episode: i64,
    pub scenario: String,
    pub reward: f64,
    pub avg_cost: f64,
    pub steps: i64,
}

impl RawEpisodeRecord {
    pub fn new(
        episode: i64,
        scenario: impl Into<String>,
        reward: f64,
        avg_cost: f64,
        steps: i64,
    ) -> Self {
        Self {
            episode,
            scenario: scenario.into(),
            reward,
            avg_cost,
            steps,
        }
    }
}

/// A validated record of one training episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpisodeRecord {
    /// Sequence key, positive and strictly increasing within a dataset.
    pub episode: u32,
    pub scenario: Scenario,
    /// Total reward collected during the episode.
    pub reward: f64,
    /// Average waiting-time cost over the episode.
    pub avg_cost: f64,
    /// Number of simulation steps in the episode.
    pub steps: u32,
}

impl EpisodeRecord {
    fn validate(
        raw: &RawEpisodeRecord,
        previous_episode: Option<u32>,
    ) -> Result<Self, ValidationError> {
        let invalid = |field, reason: String| ValidationError::InvalidField {
            episode: raw.episode,
            field,
            reason,
        };

        let episode = u32::try_from(raw.episode)
            .ok()
            .filter(|episode| *episode > 0)
            .ok_or_else(|| {
                invalid(
                    RecordField::Episode,
                    "must be a positive integer".to_owned(),
                )
            })?;
        if let Some(previous) = previous_episode.filter(|previous| episode <= *previous) {
            return Err(invalid(
                RecordField::Episode,
                format!("must be greater than the previous episode {previous}"),
            ));
        }
        let scenario = raw.scenario.parse::<Scenario>().map_err(|_| {
            invalid(
                RecordField::Scenario,
                format!("`{}` is not one of low, medium, high", raw.scenario),
            )
        })?;
        if !raw.reward.is_finite() {
            return Err(invalid(RecordField::Reward, "must be finite".to_owned()));
        }
        if !raw.avg_cost.is_finite() {
            return Err(invalid(RecordField::AvgCost, "must be finite".to_owned()));
        }
        let steps = u32::try_from(raw.steps)
            .ok()
            .filter(|steps| *steps > 0)
            .ok_or_else(|| invalid(RecordField::Steps, "must be a positive integer".to_owned()))?;

        Ok(Self {
            episode,
            scenario,
            reward: raw.reward,
            avg_cost: raw.avg_cost,
            steps,
        })
    }
}

/// Non-empty, read-only sequence of episode records in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EpisodeDataset {
    records: Vec<EpisodeRecord>,
}

impl EpisodeDataset {
    /// Validates `records` and builds a dataset from them.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] for the first record that
    /// fails validation, naming the field and the record's episode number,
    /// and [`ValidationError::EmptyDataset`] when `records` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlmon_metrics::{
    ///     episode::{EpisodeDataset, RawEpisodeRecord},
    ///     error::{RecordField, ValidationError},
    /// };
    ///
    /// let err = EpisodeDataset::load([
    ///     RawEpisodeRecord::new(1, "low", 10.0, 0.1, 100),
    ///     RawEpisodeRecord::new(2, "rush-hour", 20.0, 0.2, 100),
    /// ])
    /// .unwrap_err();
    ///
    /// assert!(matches!(
    ///     err,
    ///     ValidationError::InvalidField { episode: 2, field: RecordField::Scenario, .. }
    /// ));
    /// ```
    pub fn load<I>(records: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = RawEpisodeRecord>,
    {
        let mut validated = Vec::new();
        let mut previous_episode = None;
        for raw in records {
            let record = EpisodeRecord::validate(&raw, previous_episode)?;
            previous_episode = Some(record.episode);
            validated.push(record);
        }

        if validated.is_empty() {
            return Err(ValidationError::EmptyDataset);
        }

        tracing::debug!(
            episodes = validated.len(),
            first_episode = validated[0].episode,
            last_episode = validated[validated.len() - 1].episode,
            "loaded episode dataset"
        );

        Ok(Self { records: validated })
    }

    #[must_use]
    pub fn records(&self) -> &[EpisodeRecord] {
        &self.records
    }

    /// Number of episodes; always at least 1.
    #[must_use]
    pub fn num_episodes(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, EpisodeRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a EpisodeDataset {
    type Item = &'a EpisodeRecord;
    type IntoIter = slice::Iter<'a, EpisodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(episode: i64, scenario: &str) -> RawEpisodeRecord {
        RawEpisodeRecord::new(episode, scenario, 100.0, 0.05, 3600)
    }

    fn invalid_field(err: &ValidationError) -> (i64, RecordField) {
        match err {
            ValidationError::InvalidField { episode, field, .. } => (*episode, *field),
            ValidationError::EmptyDataset => panic!("expected InvalidField, got {err:?}"),
        }
    }

    #[test]
    fn test_load_keeps_input_order() {
        let dataset =
            EpisodeDataset::load([raw(1, "medium"), raw(2, "high"), raw(5, "low")]).unwrap();

        let episodes = dataset.iter().map(|r| r.episode).collect::<Vec<_>>();
        assert_eq!(episodes, vec![1, 2, 5]);
        assert_eq!(
            dataset.iter().map(|r| r.scenario).collect::<Vec<_>>(),
            vec![Scenario::Medium, Scenario::High, Scenario::Low]
        );
    }

    #[test]
    fn test_load_rejects_empty_input() {
        assert_eq!(
            EpisodeDataset::load(Vec::new()),
            Err(ValidationError::EmptyDataset)
        );
    }

    #[test]
    fn test_load_rejects_non_positive_episode() {
        let err = EpisodeDataset::load([raw(0, "low")]).unwrap_err();
        assert_eq!(invalid_field(&err), (0, RecordField::Episode));

        let err = EpisodeDataset::load([raw(-3, "low")]).unwrap_err();
        assert_eq!(invalid_field(&err), (-3, RecordField::Episode));
    }

    #[test]
    fn test_load_rejects_unknown_scenario() {
        let err = EpisodeDataset::load([raw(1, "low"), raw(2, "extreme")]).unwrap_err();
        assert_eq!(invalid_field(&err), (2, RecordField::Scenario));
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn test_load_reports_first_invalid_record() {
        let err = EpisodeDataset::load([raw(1, "low"), raw(2, "bogus"), raw(0, "low")])
            .unwrap_err();
        assert_eq!(invalid_field(&err), (2, RecordField::Scenario));
    }

    #[test]
    fn test_load_rejects_non_increasing_episodes() {
        let err = EpisodeDataset::load([raw(1, "low"), raw(3, "low"), raw(2, "low")])
            .unwrap_err();
        assert_eq!(invalid_field(&err), (2, RecordField::Episode));

        let err = EpisodeDataset::load([raw(4, "low"), raw(4, "high")]).unwrap_err();
        assert_eq!(invalid_field(&err), (4, RecordField::Episode));
    }

    #[test]
    fn test_load_rejects_non_finite_values() {
        let mut record = raw(1, "low");
        record.reward = f64::NAN;
        let err = EpisodeDataset::load([record]).unwrap_err();
        assert_eq!(invalid_field(&err), (1, RecordField::Reward));

        let mut record = raw(1, "low");
        record.avg_cost = f64::INFINITY;
        let err = EpisodeDataset::load([record]).unwrap_err();
        assert_eq!(invalid_field(&err), (1, RecordField::AvgCost));
    }

    #[test]
    fn test_load_rejects_zero_steps() {
        let mut record = raw(7, "high");
        record.steps = 0;
        let err = EpisodeDataset::load([record]).unwrap_err();
        assert_eq!(invalid_field(&err), (7, RecordField::Steps));
    }

    #[test]
    fn test_scenario_parsing() {
        assert_eq!("low".parse::<Scenario>(), Ok(Scenario::Low));
        assert_eq!(" Medium ".parse::<Scenario>(), Ok(Scenario::Medium));
        assert_eq!("HIGH".parse::<Scenario>(), Ok(Scenario::High));
        assert_eq!(
            "all".parse::<Scenario>(),
            Err(InvalidArgument::UnknownScenario {
                token: "all".to_owned()
            })
        );
    }

    #[test]
    fn test_raw_record_json_shape() {
        let json = r#"{"episode": 1, "scenario": "medium", "reward": 3609.37, "avg_cost": 0.0487, "steps": 3600}"#;
        let record: RawEpisodeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record,
            RawEpisodeRecord::new(1, "medium", 3609.37, 0.0487, 3600)
        );
    }
}
