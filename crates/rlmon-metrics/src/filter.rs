//! Scenario selection over an episode dataset.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::{
    episode::{EpisodeDataset, EpisodeRecord, Scenario},
    error::InvalidArgument,
};

/// Which episodes a query covers: every episode, or one scenario's.
///
/// Parses from `"all"` or a scenario name, case-insensitively.
///
/// ```
/// use rlmon_metrics::{episode::Scenario, filter::ScenarioFilter};
///
/// assert_eq!("all".parse::<ScenarioFilter>(), Ok(ScenarioFilter::All));
/// assert_eq!(
///     "high".parse::<ScenarioFilter>(),
///     Ok(ScenarioFilter::Only(Scenario::High))
/// );
/// assert!("rush-hour".parse::<ScenarioFilter>().is_err());
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioFilter {
    #[default]
    All,
    Only(Scenario),
}

impl ScenarioFilter {
    #[must_use]
    pub fn matches(self, record: &EpisodeRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(scenario) => record.scenario == scenario,
        }
    }
}

impl From<Scenario> for ScenarioFilter {
    fn from(scenario: Scenario) -> Self {
        Self::Only(scenario)
    }
}

impl fmt::Display for ScenarioFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => fmt::Display::fmt("all", f),
            Self::Only(scenario) => fmt::Display::fmt(scenario, f),
        }
    }
}

impl FromStr for ScenarioFilter {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<Scenario>().map(Self::Only)
    }
}

impl Serialize for ScenarioFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Records matching `filter`, in dataset order.
///
/// An empty result is not an error; callers that need statistics over it
/// get [`EmptyInputError`](crate::error::EmptyInputError) from
/// [`summarize`](crate::summary::summarize).
#[must_use]
pub fn filter(dataset: &EpisodeDataset, filter: ScenarioFilter) -> Vec<&EpisodeRecord> {
    dataset
        .iter()
        .filter(|record| filter.matches(record))
        .collect()
}
