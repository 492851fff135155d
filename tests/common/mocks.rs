//! Mock API setup on top of `covidash::adapters::mock`.

pub use covidash::adapters::mock::{MockHttpClient, MockResponse};
pub use covidash::traits::{HttpError, Response};

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use covidash::api::DiseaseClient;
use covidash::app::App;

use super::{countries_json, country_history_json, timeline_json, CountryFixture, BASE};

/// Builder for a mock `disease.sh`.
pub struct MockApi {
    http: MockHttpClient,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            http: MockHttpClient::new(),
        }
    }

    pub fn url(path: &str) -> String {
        format!("{}/v3/covid-19{}", BASE, path)
    }

    pub fn with_countries(self, countries: &[CountryFixture]) -> Self {
        self.http.set_json(&Self::url("/countries"), &countries_json(countries));
        self
    }

    pub fn with_global_history(self, base: i64) -> Self {
        self.http.set_json(&Self::url("/historical/all"), &timeline_json(base));
        self
    }

    /// Country stats and history, both answering after `delay`.
    pub fn with_country(self, country: &CountryFixture, history_base: i64, delay: Duration) -> Self {
        self.http.set_delayed_response(
            &Self::url(&format!("/countries/{}", country.iso2)),
            MockResponse::Success(Response::json_body(country.to_json())),
            delay,
        );
        self.http.set_delayed_response(
            &Self::url(&format!("/historical/{}", country.iso2)),
            MockResponse::Success(Response::json_body(country_history_json(country.name, history_base))),
            delay,
        );
        self
    }

    pub fn with_status(self, path: &str, status: u16, body: &str) -> Self {
        self.http.set_response(
            &Self::url(path),
            MockResponse::Success(Response::new(status, Bytes::from(body.to_string()))),
        );
        self
    }

    pub fn with_error(self, path: &str, error: HttpError) -> Self {
        self.http.set_response(&Self::url(path), MockResponse::Error(error));
        self
    }

    pub fn http(&self) -> MockHttpClient {
        self.http.clone()
    }

    pub fn client(&self) -> Arc<DiseaseClient> {
        Arc::new(DiseaseClient::new(Arc::new(self.http.clone()), BASE))
    }

    pub fn app(&self, timeline_days: u32) -> App {
        App::new(self.client(), timeline_days)
    }
}
