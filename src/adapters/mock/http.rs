//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors, optionally after a delay so tests can control the
//! order in which concurrent requests resolve.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
}

#[derive(Debug, Clone)]
struct MockEntry {
    response: MockResponse,
    delay: Option<Duration>,
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use covidash::adapters::mock::{MockHttpClient, MockResponse};
/// use covidash::traits::{Headers, HttpClient, Response};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://disease.sh/v3/covid-19/countries",
///     MockResponse::Success(Response::json_body("[]")),
/// );
///
/// let response = client.get("https://disease.sh/v3/covid-19/countries", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockEntry>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL.
    ///
    /// URLs are matched exactly first, then by prefix.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.insert(url, response, None);
    }

    /// Set a response that resolves only after `delay`.
    pub fn set_delayed_response(&self, url: &str, response: MockResponse, delay: Duration) {
        self.insert(url, response, Some(delay));
    }

    /// Convenience for a 200 JSON response.
    pub fn set_json(&self, url: &str, json: &str) {
        self.set_response(url, MockResponse::Success(Response::json_body(json)));
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded requests whose URL starts with `prefix`.
    pub fn request_count(&self, prefix: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.starts_with(prefix))
            .count()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn insert(&self, url: &str, response: MockResponse, delay: Option<Duration>) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), MockEntry { response, delay });
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn lookup(&self, url: &str) -> Option<MockEntry> {
        let responses = self.responses.lock().unwrap();

        if let Some(entry) = responses.get(url) {
            return Some(entry.clone());
        }

        // Longest prefix wins so "/countries/PE" beats "/countries"
        let best = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, entry)| entry.clone());
        if best.is_some() {
            return best;
        }

        let default = self.default_response.lock().unwrap();
        default.clone().map(|response| MockEntry {
            response,
            delay: None,
        })
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        let Some(entry) = self.lookup(url) else {
            return Err(HttpError::Other(format!("No mock response for URL: {}", url)));
        };

        if let Some(delay) = entry.delay {
            tokio::time::sleep(delay).await;
        }

        match entry.response {
            MockResponse::Success(response) => Ok(response),
            MockResponse::Error(err) => Err(err),
        }
    }
}
