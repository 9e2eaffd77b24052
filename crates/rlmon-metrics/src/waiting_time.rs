//! Waiting time plotted against the global simulation step.

use serde::Serialize;

use crate::episode::{EpisodeDataset, Scenario};

/// Average waiting time of one episode, placed at its global step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaitingTimePoint {
    pub episode: u32,
    /// `episode * steps`
    pub global_step: u64,
    pub waiting_time: f64,
    pub scenario: Scenario,
}

/// One [`WaitingTimePoint`] per episode, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WaitingTimeSeries {
    points: Vec<WaitingTimePoint>,
}

impl WaitingTimeSeries {
    #[must_use]
    pub fn from_dataset(dataset: &EpisodeDataset) -> Self {
        let points = dataset
            .iter()
            .map(|record| WaitingTimePoint {
                episode: record.episode,
                global_step: u64::from(record.episode) * u64::from(record.steps),
                waiting_time: record.avg_cost,
                scenario: record.scenario,
            })
            .collect();
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[WaitingTimePoint] {
        &self.points
    }

    /// Points of a single scenario, in dataset order.
    pub fn for_scenario(&self, scenario: Scenario) -> impl Iterator<Item = &WaitingTimePoint> {
        self.points
            .iter()
            .filter(move |point| point.scenario == scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::episode::RawEpisodeRecord;

    #[test]
    fn test_global_step_is_episode_times_steps() {
        let dataset = EpisodeDataset::load([
            RawEpisodeRecord::new(1, "low", 1.0, 0.05, 3600),
            RawEpisodeRecord::new(2, "high", 1.0, 0.04, 3600),
            RawEpisodeRecord::new(3, "low", 1.0, 0.03, 1800),
        ])
        .unwrap();
        let series = WaitingTimeSeries::from_dataset(&dataset);

        assert_eq!(
            series
                .points()
                .iter()
                .map(|p| p.global_step)
                .collect::<Vec<_>>(),
            vec![3600, 7200, 5400]
        );
        assert_eq!(series.points()[1].waiting_time, 0.04);
    }

    #[test]
    fn test_global_step_does_not_overflow_u32() {
        let dataset = EpisodeDataset::load([RawEpisodeRecord::new(
            4_000_000,
            "medium",
            1.0,
            0.05,
            3600,
        )])
        .unwrap();
        let series = WaitingTimeSeries::from_dataset(&dataset);
        assert_eq!(series.points()[0].global_step, 14_400_000_000);
    }

    #[test]
    fn test_for_scenario() {
        let dataset = EpisodeDataset::load([
            RawEpisodeRecord::new(1, "low", 1.0, 0.05, 10),
            RawEpisodeRecord::new(2, "high", 1.0, 0.04, 10),
            RawEpisodeRecord::new(3, "low", 1.0, 0.03, 10),
        ])
        .unwrap();
        let series = WaitingTimeSeries::from_dataset(&dataset);

        let low = series
            .for_scenario(Scenario::Low)
            .map(|p| p.episode)
            .collect::<Vec<_>>();
        assert_eq!(low, vec![1, 3]);
        assert_eq!(series.for_scenario(Scenario::Medium).count(), 0);
    }
}
