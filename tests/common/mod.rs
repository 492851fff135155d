//! Common test utilities for integration tests.
//!
//! Fixtures mirror the `disease.sh` v3 payload shapes. Every test talks to
//! `BASE` through a [`MockHttpClient`] unless it spins up a wiremock server.
//!
//! # Example
//!
//! ```ignore
//! let api = MockApi::new().with_countries(&[peru(), chile()]);
//! let mut app = api.app(30);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::time::Duration;

use covidash::app::{App, AppMessage};
use covidash::view_state::ApplyOutcome;

/// Base URL used with the mock client.
pub const BASE: &str = "http://api.test";

/// A country entry as `/countries` returns it.
pub struct CountryFixture {
    pub name: &'static str,
    pub iso2: &'static str,
    pub lat: f64,
    pub long: f64,
    pub cases: i64,
    pub today_cases: i64,
}

impl CountryFixture {
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"country":"{}","countryInfo":{{"iso2":"{}","lat":{},"long":{}}},"cases":{},"todayCases":{},"recovered":{},"todayRecovered":{},"deaths":{},"todayDeaths":{}}}"#,
            self.name,
            self.iso2,
            self.lat,
            self.long,
            self.cases,
            self.today_cases,
            self.cases / 2,
            self.today_cases / 2,
            self.cases / 100,
            self.today_cases / 100,
        )
    }
}

pub fn peru() -> CountryFixture {
    CountryFixture {
        name: "Peru",
        iso2: "PE",
        lat: -10.0,
        long: -76.0,
        cases: 100,
        today_cases: 10,
    }
}

pub fn chile() -> CountryFixture {
    CountryFixture {
        name: "Chile",
        iso2: "CL",
        lat: -30.0,
        long: -71.0,
        cases: 50,
        today_cases: 4,
    }
}

pub fn brazil() -> CountryFixture {
    CountryFixture {
        name: "Brazil",
        iso2: "BR",
        lat: -10.0,
        long: -55.0,
        cases: 3_000_000,
        today_cases: 25_000,
    }
}

pub fn countries_json(countries: &[CountryFixture]) -> String {
    let entries: Vec<String> = countries.iter().map(CountryFixture::to_json).collect();
    format!("[{}]", entries.join(","))
}

/// Three days of history: `base`, `2 * base`, `4 * base` cases.
pub fn timeline_json(base: i64) -> String {
    format!(
        r#"{{"cases":{{"3/1/21":{},"3/2/21":{},"3/3/21":{}}},"deaths":{{"3/1/21":{},"3/2/21":{},"3/3/21":{}}},"recovered":{{"3/1/21":{},"3/2/21":{},"3/3/21":{}}}}}"#,
        base,
        base * 2,
        base * 4,
        base / 100,
        base / 50,
        base / 25,
        base / 2,
        base,
        base * 2,
    )
}

pub fn country_history_json(name: &str, base: i64) -> String {
    format!(r#"{{"country":"{}","timeline":{}}}"#, name, timeline_json(base))
}

/// Receive the next fetch result and apply it.
pub async fn apply_next(app: &mut App) -> Option<ApplyOutcome> {
    let msg = next_message(app, Duration::from_secs(2)).await?;
    Some(app.handle_message(msg))
}

/// Wait up to `timeout` for a fetch result.
pub async fn next_message(app: &mut App, timeout: Duration) -> Option<AppMessage> {
    let rx = app.message_rx.as_mut()?;
    tokio::time::timeout(timeout, rx.recv()).await.ok().flatten()
}
