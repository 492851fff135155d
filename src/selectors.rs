//! Pure functions deriving display data from the view state.
//!
//! Nothing in here touches the terminal, so every selector is unit-tested
//! directly and benchmarked in `benches/selectors_benchmark.rs`.

use std::collections::HashSet;

use crate::models::{CountryOption, CountryStats, CountrySummary, MetricKind, TableRow, Timeline};

/// Approximate length of one degree of latitude.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Largest marker radius in degrees, keeps the biggest countries from covering the map.
pub const MAX_MARKER_RADIUS: f64 = 15.0;

const UNITS: [(f64, &str); 5] = [(1.0, ""), (1e3, "k"), (1e6, "m"), (1e9, "b"), (1e12, "t")];

/// Abbreviated, signed count: `+1.2k`, `+3.4m`, `+0`.
pub fn format_count(value: Option<i64>) -> String {
    let value = match value {
        None | Some(0) => return "+0".to_string(),
        Some(v) => v,
    };

    let sign = if value < 0 { '-' } else { '+' };
    let abs = value.unsigned_abs() as f64;

    let mut unit = UNITS.iter().rposition(|(scale, _)| abs >= *scale).unwrap_or(0);
    let mut scaled = round_one_decimal(abs / UNITS[unit].0);
    // 999_950 rounds to "1000.0k", show it as "1.0m" instead
    if scaled >= 1000.0 && unit + 1 < UNITS.len() {
        unit += 1;
        scaled = round_one_decimal(abs / UNITS[unit].0);
    }

    format!("{}{:.1}{}", sign, scaled, UNITS[unit].1)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `1234567` -> `"1,234,567"`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Picker options: entries with an iso code, first occurrence of each code wins.
pub fn country_options(countries: &[CountrySummary]) -> Vec<CountryOption> {
    let mut seen = HashSet::new();
    countries
        .iter()
        .filter(|c| !c.name.is_empty())
        .filter_map(|c| {
            let code = c.iso_code.as_ref()?;
            seen.insert(code.clone()).then(|| CountryOption {
                name: c.name.clone(),
                iso_code: code.clone(),
            })
        })
        .collect()
}

/// Country table, highest case count first. Ties keep the API order.
pub fn table_rows(countries: &[CountrySummary]) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = countries
        .iter()
        .map(|c| TableRow {
            country: c.name.clone(),
            cases: c.cases,
        })
        .collect();
    rows.sort_by(|a, b| b.cases.cmp(&a.cases));
    rows
}

/// A circle on the world map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub name: String,
    pub lat: f64,
    pub long: f64,
    /// Radius in degrees.
    pub radius: f64,
    pub value: i64,
    pub metric: MetricKind,
}

/// Marker radius multiplier in meters per sqrt(count).
pub fn marker_multiplier(metric: MetricKind) -> f64 {
    match metric {
        MetricKind::Cases => 800.0,
        MetricKind::Recovered => 1200.0,
        MetricKind::Deaths => 2000.0,
    }
}

pub fn marker_radius(value: i64, metric: MetricKind) -> f64 {
    let meters = (value.max(0) as f64).sqrt() * marker_multiplier(metric);
    (meters / METERS_PER_DEGREE).min(MAX_MARKER_RADIUS)
}

/// One marker per country with a positive count for `metric`.
pub fn map_markers(countries: &[CountrySummary], metric: MetricKind) -> Vec<MapMarker> {
    countries
        .iter()
        .filter_map(|c| {
            let value = c.total(metric);
            (value > 0).then(|| MapMarker {
                name: c.name.clone(),
                lat: c.lat,
                long: c.long,
                radius: marker_radius(value, metric),
                value,
                metric,
            })
        })
        .collect()
}

/// Day-over-day increase as `(day index, delta)`, negative corrections clamped to 0.
pub fn daily_series(timeline: &Timeline, metric: MetricKind) -> Vec<(f64, f64)> {
    timeline
        .series(metric)
        .windows(2)
        .enumerate()
        .map(|(i, pair)| (i as f64, pair[1].value.saturating_sub(pair[0].value).max(0) as f64))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoBox {
    pub metric: MetricKind,
    pub title: &'static str,
    pub today: String,
    pub total: String,
    pub active: bool,
}

/// The three summary boxes above the map, in `MetricKind::ALL` order.
pub fn info_boxes(stats: &CountryStats, active: MetricKind) -> [InfoBox; 3] {
    MetricKind::ALL.map(|metric| {
        let (today, total) = stats.counts(metric);
        InfoBox {
            metric,
            title: metric.title(),
            today: format_count(Some(today)),
            total: format_thousands(total),
            active: metric == active,
        }
    })
}
