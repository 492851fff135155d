//! The statistics behind the info boxes.

use super::country::CountrySummary;
use super::metric::MetricKind;
use super::timeline::Timeline;
use super::viewport::DEFAULT_CENTER;

/// Display label for the aggregate selection.
pub const WORLDWIDE: &str = "Worldwide";

/// Counts for the current selection. Replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryStats {
    pub cases_today: i64,
    pub cases_total: i64,
    pub recovered_today: i64,
    pub recovered_total: i64,
    pub deaths_today: i64,
    pub deaths_total: i64,
    pub country_name: String,
    pub lat: f64,
    pub long: f64,
}

impl CountryStats {
    pub fn from_summary(summary: &CountrySummary) -> Self {
        Self {
            cases_today: summary.today_cases,
            cases_total: summary.cases,
            recovered_today: summary.today_recovered,
            recovered_total: summary.recovered,
            deaths_today: summary.today_deaths,
            deaths_total: summary.deaths,
            country_name: summary.name.clone(),
            lat: summary.lat,
            long: summary.long,
        }
    }

    /// Aggregate stats: totals are the last data point, "today" is the last daily increase.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        Self {
            cases_today: timeline.latest_delta(MetricKind::Cases),
            cases_total: timeline.latest(MetricKind::Cases),
            recovered_today: timeline.latest_delta(MetricKind::Recovered),
            recovered_total: timeline.latest(MetricKind::Recovered),
            deaths_today: timeline.latest_delta(MetricKind::Deaths),
            deaths_total: timeline.latest(MetricKind::Deaths),
            country_name: WORLDWIDE.to_string(),
            lat: DEFAULT_CENTER.lat,
            long: DEFAULT_CENTER.lng,
        }
    }

    /// `(today, total)` for a metric.
    pub fn counts(&self, metric: MetricKind) -> (i64, i64) {
        match metric {
            MetricKind::Cases => (self.cases_today, self.cases_total),
            MetricKind::Recovered => (self.recovered_today, self.recovered_total),
            MetricKind::Deaths => (self.deaths_today, self.deaths_total),
        }
    }
}

impl Default for CountryStats {
    fn default() -> Self {
        Self {
            cases_today: 0,
            cases_total: 0,
            recovered_today: 0,
            recovered_total: 0,
            deaths_today: 0,
            deaths_total: 0,
            country_name: WORLDWIDE.to_string(),
            lat: DEFAULT_CENTER.lat,
            long: DEFAULT_CENTER.lng,
        }
    }
}
