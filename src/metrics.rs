//! Artist metric records and their projection into compare-chart input.
//!
//! The hosting application tracks a follower count and a history of
//! popularity snapshots per artist; the compare chart plots the latest
//! popularity next to followers scaled to millions so both metrics share one
//! value axis.

use chrono::{DateTime, Utc};

use crate::api::CompareChartData;

pub const POPULARITY_LABEL: &str = "Popularity";
pub const FOLLOWERS_LABEL: &str = "Followers (M)";

const POPULARITY_MAX: u8 = 100;
const FOLLOWERS_PER_MILLION: f64 = 1_000_000.0;

/// One recorded popularity observation on the 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularitySnapshot {
    pub popularity: u8,
    pub recorded_at: DateTime<Utc>,
}

impl PopularitySnapshot {
    /// Clamps out-of-scale observations to the 0..=100 popularity range.
    #[must_use]
    pub fn new(popularity: u8, recorded_at: DateTime<Utc>) -> Self {
        Self {
            popularity: popularity.min(POPULARITY_MAX),
            recorded_at,
        }
    }
}

/// Metrics tracked for one artist.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistMetrics {
    pub name: String,
    pub followers: u64,
    pub snapshots: Vec<PopularitySnapshot>,
}

impl ArtistMetrics {
    #[must_use]
    pub fn new(name: impl Into<String>, followers: u64) -> Self {
        Self {
            name: name.into(),
            followers,
            snapshots: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_snapshot(mut self, snapshot: PopularitySnapshot) -> Self {
        self.snapshots.push(snapshot);
        self
    }

    /// Value of the most recent snapshot, or 0 when none was ever recorded.
    #[must_use]
    pub fn latest_popularity(&self) -> f64 {
        self.snapshots
            .iter()
            .max_by_key(|snapshot| snapshot.recorded_at)
            .map_or(0.0, |snapshot| f64::from(snapshot.popularity))
    }

    /// Follower count scaled to millions.
    #[must_use]
    pub fn followers_millions(&self) -> f64 {
        self.followers as f64 / FOLLOWERS_PER_MILLION
    }
}

impl CompareChartData {
    /// Builds the two-series comparison input for a pair of artists.
    #[must_use]
    pub fn from_artist_pair(first: &ArtistMetrics, second: &ArtistMetrics) -> Self {
        Self::new()
            .with_labels(vec![POPULARITY_LABEL.to_owned(), FOLLOWERS_LABEL.to_owned()])
            .with_series1(vec![first.latest_popularity(), first.followers_millions()])
            .with_series2(vec![second.latest_popularity(), second.followers_millions()])
            .with_series1_name(first.name.clone())
            .with_series2_name(second.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{ArtistMetrics, FOLLOWERS_LABEL, POPULARITY_LABEL, PopularitySnapshot};
    use crate::api::CompareChartData;

    fn at(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn latest_popularity_picks_most_recent_snapshot() {
        let artist = ArtistMetrics::new("Nadia Reid", 2_400_000)
            .with_snapshot(PopularitySnapshot::new(71, at(14)))
            .with_snapshot(PopularitySnapshot::new(64, at(2)))
            .with_snapshot(PopularitySnapshot::new(68, at(9)));

        assert_eq!(artist.latest_popularity(), 71.0);
    }

    #[test]
    fn latest_popularity_is_zero_without_snapshots() {
        let artist = ArtistMetrics::new("Unknown", 10);
        assert_eq!(artist.latest_popularity(), 0.0);
    }

    #[test]
    fn snapshot_clamps_out_of_scale_popularity() {
        let snapshot = PopularitySnapshot::new(180, at(1));
        assert_eq!(snapshot.popularity, 100);
    }

    #[test]
    fn followers_scale_to_millions() {
        let artist = ArtistMetrics::new("Nadia Reid", 12_500_000);
        assert_eq!(artist.followers_millions(), 12.5);
    }

    #[test]
    fn artist_pair_maps_to_chart_input() {
        let first = ArtistMetrics::new("Mitski", 5_000_000)
            .with_snapshot(PopularitySnapshot::new(80, at(10)));
        let second = ArtistMetrics::new("Grimes", 30_000_000)
            .with_snapshot(PopularitySnapshot::new(65, at(11)));

        let data = CompareChartData::from_artist_pair(&first, &second);

        assert_eq!(data.labels, vec![POPULARITY_LABEL, FOLLOWERS_LABEL]);
        assert_eq!(data.series1, vec![80.0, 5.0]);
        assert_eq!(data.series2, vec![65.0, 30.0]);
        assert_eq!(data.series1_display_name(), "Mitski");
        assert_eq!(data.series2_display_name(), "Grimes");
    }
}
