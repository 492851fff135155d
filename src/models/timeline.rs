//! Historical daily series.

use chrono::NaiveDate;

use super::metric::MetricKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub value: i64,
}

/// Cumulative counts per day, each series sorted by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    pub cases: Vec<DailyPoint>,
    pub deaths: Vec<DailyPoint>,
    pub recovered: Vec<DailyPoint>,
}

impl Timeline {
    pub fn series(&self, metric: MetricKind) -> &[DailyPoint] {
        match metric {
            MetricKind::Cases => &self.cases,
            MetricKind::Recovered => &self.recovered,
            MetricKind::Deaths => &self.deaths,
        }
    }

    /// Last cumulative value.
    pub fn latest(&self, metric: MetricKind) -> i64 {
        self.series(metric).last().map(|p| p.value).unwrap_or(0)
    }

    /// Difference between the last two data points, saturating at the `i64` range.
    pub fn latest_delta(&self, metric: MetricKind) -> i64 {
        match self.series(metric) {
            [.., prev, last] => last.value.saturating_sub(prev.value),
            _ => 0,
        }
    }
}
