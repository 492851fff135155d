//! Client for the `disease.sh` COVID-19 endpoints.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::payloads::{validate_country_list, RawCountry, RawCountryHistory, RawTimeline};
use crate::adapters::ReqwestHttpClient;
use crate::config::DashConfig;
use crate::error::{DashResult, DataError, ErrorContext, NetworkError, ResultExt};
use crate::models::{CountrySummary, IsoCode, Selection, Timeline};
use crate::traits::{Headers, HttpClient};

pub const DEFAULT_BASE_URL: &str = "https://disease.sh";

const API_PREFIX: &str = "/v3/covid-19";

/// What a selection fetch resolved to, before it is applied to the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionData {
    /// The aggregate history.
    Global(Timeline),
    /// Current stats for one country, plus its history when that fetch succeeded.
    Country {
        summary: CountrySummary,
        timeline: Option<Timeline>,
    },
}

/// Fetches and validates statistics.
///
/// Generic over the transport through [`HttpClient`], so tests can swap in
/// `MockHttpClient`.
#[derive(Clone)]
pub struct DiseaseClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DiseaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiseaseClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DiseaseClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Production client with the configured base URL and timeout.
    pub fn from_config(config: &DashConfig) -> DashResult<Self> {
        let http = ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs))
            .map_err(|e| NetworkError::from_http(e, &config.api_base_url))?;
        Ok(Self::new(Arc::new(http), config.api_base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn countries_url(&self) -> String {
        format!("{}{}/countries", self.base_url, API_PREFIX)
    }

    pub fn global_history_url(&self, days: u32) -> String {
        format!("{}{}/historical/all?lastdays={}", self.base_url, API_PREFIX, days)
    }

    pub fn country_url(&self, iso: &IsoCode) -> String {
        format!(
            "{}{}/countries/{}",
            self.base_url,
            API_PREFIX,
            urlencoding::encode(iso.as_str())
        )
    }

    pub fn country_history_url(&self, iso: &IsoCode, days: u32) -> String {
        format!(
            "{}{}/historical/{}?lastdays={}",
            self.base_url,
            API_PREFIX,
            urlencoding::encode(iso.as_str()),
            days
        )
    }

    /// `GET /v3/covid-19/countries`
    pub async fn fetch_countries(&self) -> DashResult<Vec<CountrySummary>> {
        let url = self.countries_url();
        let raw: Vec<RawCountry> = self
            .get_json("/countries", &url)
            .await
            .context(ErrorContext::new("fetch_countries").with_component("api"))?;
        let summaries = validate_country_list(raw, "/countries");
        tracing::debug!(count = summaries.len(), "country list loaded");
        Ok(summaries)
    }

    /// `GET /v3/covid-19/historical/all?lastdays={days}`
    pub async fn fetch_global_timeline(&self, days: u32) -> DashResult<Timeline> {
        let url = self.global_history_url(days);
        let raw: RawTimeline = self
            .get_json("/historical/all", &url)
            .await
            .context(ErrorContext::new("fetch_global_timeline").with_selection("global"))?;
        raw.into_timeline("/historical/all")
            .context(ErrorContext::new("fetch_global_timeline").with_selection("global"))
    }

    /// `GET /v3/covid-19/countries/{iso2}`
    pub async fn fetch_country(&self, iso: &IsoCode) -> DashResult<CountrySummary> {
        let url = self.country_url(iso);
        let ctx = || ErrorContext::new("fetch_country").with_selection(iso.as_str());
        let raw: RawCountry = self.get_json("/countries/{iso2}", &url).await.with_context(ctx)?;
        raw.validate("/countries/{iso2}").with_context(ctx)
    }

    /// `GET /v3/covid-19/historical/{iso2}?lastdays={days}`
    pub async fn fetch_country_timeline(&self, iso: &IsoCode, days: u32) -> DashResult<Timeline> {
        let url = self.country_history_url(iso, days);
        let ctx = || ErrorContext::new("fetch_country_timeline").with_selection(iso.as_str());
        let raw: RawCountryHistory = self
            .get_json("/historical/{iso2}", &url)
            .await
            .with_context(ctx)?;
        raw.timeline.into_timeline("/historical/{iso2}").with_context(ctx)
    }

    /// Everything a selection needs, in one call.
    ///
    /// For a country the stats and the history are fetched concurrently.
    /// Only the stats are required; a failed history leaves the graph empty.
    pub async fn fetch_selection(&self, selection: &Selection, days: u32) -> DashResult<SelectionData> {
        match selection {
            Selection::Global => self.fetch_global_timeline(days).await.map(SelectionData::Global),
            Selection::Country(iso) => {
                let (summary, timeline) = futures::join!(
                    self.fetch_country(iso),
                    self.fetch_country_timeline(iso, days)
                );
                let summary = summary?;
                let timeline = match timeline {
                    Ok(timeline) => Some(timeline),
                    Err(err) => {
                        tracing::warn!(iso2 = %iso, error = %err, "country history unavailable");
                        None
                    }
                };
                Ok(SelectionData::Country { summary, timeline })
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, url: &str) -> DashResult<T> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url, &headers)
            .await
            .map_err(|e| NetworkError::from_http(e, url))?;

        if !response.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NetworkError::from_status(
                response.status,
                &body,
                response.headers.get("retry-after"),
            )
            .into());
        }

        response
            .json::<T>()
            .map_err(|e| DataError::malformed(endpoint, e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::DashError;
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    const BASE: &str = "http://api.test";

    fn client(mock: &MockHttpClient) -> DiseaseClient {
        DiseaseClient::new(Arc::new(mock.clone()), format!("{}/", BASE))
    }

    #[test]
    fn test_urls() {
        let client = client(&MockHttpClient::new());
        let pe = IsoCode::parse("pe").unwrap();
        assert_eq!(client.base_url(), BASE);
        assert_eq!(client.countries_url(), "http://api.test/v3/covid-19/countries");
        assert_eq!(
            client.global_history_url(30),
            "http://api.test/v3/covid-19/historical/all?lastdays=30"
        );
        assert_eq!(client.country_url(&pe), "http://api.test/v3/covid-19/countries/PE");
        assert_eq!(
            client.country_history_url(&pe, 120),
            "http://api.test/v3/covid-19/historical/PE?lastdays=120"
        );
    }

    #[tokio::test]
    async fn test_fetch_countries_sends_accept_header() {
        let mock = MockHttpClient::new();
        mock.set_json(
            &format!("{}/v3/covid-19/countries", BASE),
            r#"[{"country":"Peru","countryInfo":{"iso2":"PE","lat":-10,"long":-76},"cases":5}]"#,
        );

        let countries = client(&mock).fetch_countries().await.unwrap();
        assert_eq!(countries.len(), 1);

        let requests = mock.get_requests();
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_not_found_is_network_status_error() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{}/v3/covid-19/countries/ZZ", BASE),
            MockResponse::Success(Response::new(
                404,
                Bytes::from(r#"{"message":"Country not found"}"#),
            )),
        );

        let err = client(&mock)
            .fetch_country(&IsoCode::parse("ZZ").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err.root(),
            DashError::Network(NetworkError::HttpStatus { status: 404, .. })
        ));
        assert_eq!(err.context().unwrap().selection.as_deref(), Some("ZZ"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_data_error() {
        let mock = MockHttpClient::new();
        mock.set_json(&format!("{}/v3/covid-19/countries", BASE), r#"{"not":"a list"}"#);

        let err = client(&mock).fetch_countries().await.unwrap_err();
        assert!(matches!(err.root(), DashError::Data(DataError::Malformed { .. })));
    }

    #[tokio::test]
    async fn test_country_selection_tolerates_missing_history() {
        let mock = MockHttpClient::new();
        mock.set_json(
            &format!("{}/v3/covid-19/countries/PE", BASE),
            r#"{"country":"Peru","countryInfo":{"iso2":"PE","lat":-10,"long":-76},"cases":5}"#,
        );
        mock.set_response(
            &format!("{}/v3/covid-19/historical/PE", BASE),
            MockResponse::Error(HttpError::Timeout("slow".into())),
        );

        let data = client(&mock)
            .fetch_selection(&Selection::parse("PE").unwrap(), 30)
            .await
            .unwrap();
        match data {
            SelectionData::Country { summary, timeline } => {
                assert_eq!(summary.name, "Peru");
                assert!(timeline.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_country_selection_fails_without_stats() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{}/v3/covid-19/countries/PE", BASE),
            MockResponse::Error(HttpError::ConnectionFailed("refused".into())),
        );
        mock.set_json(&format!("{}/v3/covid-19/historical/PE", BASE), r#"{"timeline":{}}"#);

        let result = client(&mock)
            .fetch_selection(&Selection::parse("PE").unwrap(), 30)
            .await;
        assert!(result.unwrap_err().is_retryable());
    }
}
