//! Every derived series for one dataset, bundled for serialization.

use serde::Serialize;

use crate::{
    bands::{self, DEFAULT_GROUP_SIZE, GroupBand},
    baseline::{BaselineComparison, BaselineTable},
    episode::{EpisodeDataset, EpisodeRecord},
    error::MetricsError,
    filter::ScenarioFilter,
    rolling::{self, DEFAULT_WINDOW_SIZE, RollingPoint},
    summary::{self, AggregateSummary, ScenarioSummary},
    waiting_time::WaitingTimeSeries,
};

/// Query parameters for [`Report::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportParams {
    /// Episodes covered by the summary and the baseline comparisons.
    pub scenario: ScenarioFilter,
    pub window_size: usize,
    pub group_size: usize,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            scenario: ScenarioFilter::All,
            window_size: DEFAULT_WINDOW_SIZE,
            group_size: DEFAULT_GROUP_SIZE,
        }
    }
}

/// Summary, breakdowns and series derived from one dataset.
///
/// Rolling, band and waiting-time series always cover the whole dataset;
/// `params.scenario` only narrows `summary` and `comparisons`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub params: ReportParams,
    pub summary: AggregateSummary,
    pub scenarios: Vec<ScenarioSummary>,
    pub best_episode: EpisodeRecord,
    pub rolling: Vec<RollingPoint>,
    pub bands: Vec<GroupBand>,
    pub waiting_time: WaitingTimeSeries,
    pub comparisons: Vec<BaselineComparison>,
}

impl Report {
    /// Derives every series of the report.
    ///
    /// # Errors
    ///
    /// Fails when the scenario selects no episode, when the window or group
    /// size is zero, or when a baseline has a zero reward or cost.
    pub fn build(
        dataset: &EpisodeDataset,
        params: ReportParams,
        baselines: &BaselineTable,
    ) -> Result<Self, MetricsError> {
        let summary = summary::summarize_dataset(dataset, params.scenario)?;
        let comparisons = baselines.compare_all(&summary)?;

        Ok(Self {
            params,
            summary,
            scenarios: summary::scenario_breakdown(dataset),
            best_episode: *summary::best_episode(dataset),
            rolling: rolling::rolling_average(dataset, params.window_size)?,
            bands: bands::grouped_bands(dataset, params.group_size)?,
            waiting_time: WaitingTimeSeries::from_dataset(dataset),
            comparisons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        baseline::BaselineEntry,
        episode::{RawEpisodeRecord, Scenario},
        error::{EmptyInputError, InvalidArgument},
    };

    fn dataset() -> EpisodeDataset {
        let scenarios = ["medium", "high", "low"];
        let records = (1..=23_u32).map(|episode| {
            let scenario = scenarios[(episode as usize - 1) % scenarios.len()];
            let reward = 3500.0 + f64::from(episode);
            let cost = 0.05 - f64::from(episode) / 10_000.0;
            RawEpisodeRecord::new(i64::from(episode), scenario, reward, cost, 3600)
        });
        EpisodeDataset::load(records).unwrap()
    }

    fn baselines() -> BaselineTable {
        BaselineTable::new(vec![
            BaselineEntry::new("Fixed-Time", 3402.23, 0.0694),
            BaselineEntry::new("Actuated", 3425.46, 0.0680),
        ])
    }

    #[test]
    fn test_default_report() {
        let dataset = dataset();
        let report = Report::build(&dataset, ReportParams::default(), &baselines()).unwrap();

        assert_eq!(report.summary.count, 23);
        assert_eq!(report.scenarios.len(), 3);
        assert_eq!(report.best_episode.episode, 23);
        assert_eq!(report.rolling.len(), 23);
        assert_eq!(report.bands.len(), 3);
        assert_eq!(report.bands[2].count, 3);
        assert_eq!(report.waiting_time.points().len(), 23);
        assert_eq!(report.comparisons.len(), 2);
    }

    #[test]
    fn test_scenario_only_narrows_summary() {
        let dataset = dataset();
        let params = ReportParams {
            scenario: ScenarioFilter::Only(Scenario::High),
            ..ReportParams::default()
        };
        let report = Report::build(&dataset, params, &baselines()).unwrap();

        assert_eq!(report.summary.count, 8);
        assert_eq!(report.rolling.len(), 23);
    }

    #[test]
    fn test_invalid_params_are_reported() {
        let dataset = dataset();
        let params = ReportParams {
            window_size: 0,
            ..ReportParams::default()
        };
        assert_eq!(
            Report::build(&dataset, params, &baselines()),
            Err(MetricsError::InvalidArgument(
                InvalidArgument::NonPositiveWindowSize
            ))
        );

        let single =
            EpisodeDataset::load([RawEpisodeRecord::new(1, "low", 1.0, 0.1, 10)]).unwrap();
        let params = ReportParams {
            scenario: ScenarioFilter::Only(Scenario::High),
            ..ReportParams::default()
        };
        assert_eq!(
            Report::build(&single, params, &baselines()),
            Err(MetricsError::EmptyInput(EmptyInputError))
        );
    }

    #[test]
    fn test_empty_scenario_error_chain_has_one_message() {
        let single =
            EpisodeDataset::load([RawEpisodeRecord::new(1, "low", 1.0, 0.1, 10)]).unwrap();
        let params = ReportParams {
            scenario: ScenarioFilter::Only(Scenario::High),
            ..ReportParams::default()
        };
        let err = Report::build(&single, params, &baselines()).unwrap_err();

        assert_eq!(err.to_string(), "cannot summarize an empty set of episodes");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_report_serializes_scenario_filter_as_text() {
        let dataset = dataset();
        let report = Report::build(&dataset, ReportParams::default(), &baselines()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["params"]["scenario"], "all");
        assert_eq!(json["scenarios"][0]["scenario"], "low");
        assert_eq!(json["comparisons"][1]["method"], "Actuated");
        assert!(json["comparisons"][1]["cost_delta_pct"].is_number());
        assert_eq!(json["bands"][0]["label"], "1-10");
    }
}
