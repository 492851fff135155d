//! Raw `disease.sh` payloads and their validation into typed models.
//!
//! Everything coming off the wire is `Option` here; nothing leaves this
//! module without passing a `validate`/`into_*` step.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DataError;
use crate::models::{CountrySummary, DailyPoint, IsoCode, Timeline};

/// Date format used as timeline keys, e.g. `"3/9/23"`.
const TIMELINE_DATE_FORMAT: &str = "%m/%d/%y";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountryInfo {
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

/// Entry of `GET /v3/covid-19/countries` and body of `/countries/{iso2}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCountry {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_info: RawCountryInfo,
    #[serde(default)]
    pub cases: Option<i64>,
    #[serde(default)]
    pub today_cases: Option<i64>,
    #[serde(default)]
    pub recovered: Option<i64>,
    #[serde(default)]
    pub today_recovered: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default)]
    pub today_deaths: Option<i64>,
}

impl RawCountry {
    /// Validate a single entry. Name and coordinates are required; a
    /// missing or malformed iso2 only drops the entry from the picker.
    pub fn validate(self, endpoint: &str) -> Result<CountrySummary, DataError> {
        let name = self
            .country
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| DataError::invalid(endpoint, "missing country name"))?;

        let (lat, long) = match (self.country_info.lat, self.country_info.long) {
            (Some(lat), Some(long)) if lat.is_finite() && long.is_finite() => (lat, long),
            _ => {
                return Err(DataError::invalid(
                    endpoint,
                    format!("missing coordinates for {}", name),
                ))
            }
        };

        let iso_code = self
            .country_info
            .iso2
            .as_deref()
            .and_then(|raw| IsoCode::parse(raw).ok());

        Ok(CountrySummary {
            name,
            iso_code,
            lat,
            long,
            cases: self.cases.unwrap_or(0),
            today_cases: self.today_cases.unwrap_or(0),
            recovered: self.recovered.unwrap_or(0),
            today_recovered: self.today_recovered.unwrap_or(0),
            deaths: self.deaths.unwrap_or(0),
            today_deaths: self.today_deaths.unwrap_or(0),
        })
    }
}

/// Validate the whole country list.
///
/// Invalid entries are skipped with a warning rather than failing the
/// load. A repeated iso2 keeps its code only on the first entry, so codes
/// stay unique across the list.
pub fn validate_country_list(raw: Vec<RawCountry>, endpoint: &str) -> Vec<CountrySummary> {
    let mut seen = HashSet::new();
    let mut summaries = Vec::with_capacity(raw.len());

    for entry in raw {
        match entry.validate(endpoint) {
            Ok(mut summary) => {
                if let Some(code) = &summary.iso_code {
                    if !seen.insert(code.clone()) {
                        tracing::warn!(country = %summary.name, iso2 = %code, "duplicate iso2, dropping code");
                        summary.iso_code = None;
                    }
                }
                summaries.push(summary);
            }
            Err(err) => tracing::warn!(error = %err, "skipping country entry"),
        }
    }

    summaries
}

/// `{cases: {date: n}, deaths: {..}, recovered: {..}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTimeline {
    #[serde(default)]
    pub cases: BTreeMap<String, i64>,
    #[serde(default)]
    pub deaths: BTreeMap<String, i64>,
    #[serde(default)]
    pub recovered: BTreeMap<String, i64>,
}

impl RawTimeline {
    pub fn into_timeline(self, endpoint: &str) -> Result<Timeline, DataError> {
        Ok(Timeline {
            cases: parse_series(self.cases, endpoint)?,
            deaths: parse_series(self.deaths, endpoint)?,
            recovered: parse_series(self.recovered, endpoint)?,
        })
    }
}

/// Body of `GET /v3/covid-19/historical/{iso2}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountryHistory {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timeline: RawTimeline,
}

fn parse_series(raw: BTreeMap<String, i64>, endpoint: &str) -> Result<Vec<DailyPoint>, DataError> {
    // BTreeMap orders the keys as strings ("1/10/21" < "1/2/21"), so sort by parsed date
    let mut points = raw
        .into_iter()
        .map(|(key, value)| {
            NaiveDate::parse_from_str(&key, TIMELINE_DATE_FORMAT)
                .map(|date| DailyPoint { date, value })
                .map_err(|e| DataError::invalid(endpoint, format!("bad date '{}': {}", key, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    points.sort_by_key(|p| p.date);
    Ok(points)
}
