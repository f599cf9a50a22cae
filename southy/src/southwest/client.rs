//! Southwest mobile API client.
//!
//! Sends requests through a [`Transport`], turns empty bodies into a
//! synthetic transient error, captures every parsed payload through the
//! [`ResponsePersister`], and decodes into the typed response model.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::airports::AirportDirectory;
use crate::persist::{NoopPersister, ResponsePersister};

use super::error::SouthwestError;
use super::retry::{DEFAULT_MAX_RETRIES, RetryPolicy};
use super::transport::{ApiRequest, HttpTransport, Transport};
use super::types::ApiEnvelope;

/// Default base URL for the mobile API.
pub const DEFAULT_BASE_URL: &str = "https://mobile.southwest.com";

/// Default client identifier sent with every request.
pub const DEFAULT_CLIENT_ID: &str = "IOS";

/// Message of the record substituted for an empty response body.
pub const EMPTY_BODY_ERRMSG: &str = "empty response body";

/// Configuration for the Southwest client.
#[derive(Debug, Clone)]
pub struct SouthwestConfig {
    /// API key for authentication
    pub api_key: String,
    /// Client identifier header value
    pub client_id: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries of transient failures after the first attempt
    pub max_retries: u32,
}

impl SouthwestConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the client identifier header value.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set how many times a transient failure is retried.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }
}

/// Southwest mobile API client.
///
/// Owns its transport exclusively; calls are made one at a time by a single
/// caller. Lookup and check-in are provided by
/// [`lookup_reservation`](SouthwestClient::lookup_reservation) and
/// [`check_in`](SouthwestClient::check_in).
#[derive(Debug)]
pub struct SouthwestClient<T = HttpTransport, P = NoopPersister> {
    transport: T,
    persister: P,
    retry: RetryPolicy,
    airports: Arc<AirportDirectory>,
}

impl SouthwestClient {
    /// Create an HTTP-backed client with the given configuration.
    pub fn new(config: SouthwestConfig) -> Result<Self, SouthwestError> {
        let transport = HttpTransport::new(&config)?;
        Ok(SouthwestClient::with_transport(transport, &config))
    }
}

impl<T: Transport> SouthwestClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: T, config: &SouthwestConfig) -> Self {
        Self {
            transport,
            persister: NoopPersister,
            retry: RetryPolicy::new(config.max_retries),
            airports: AirportDirectory::southwest(),
        }
    }
}

impl<T: Transport, P: ResponsePersister> SouthwestClient<T, P> {
    /// Capture every parsed response through `persister`.
    pub fn with_persister<Q: ResponsePersister>(self, persister: Q) -> SouthwestClient<T, Q> {
        SouthwestClient {
            transport: self.transport,
            persister,
            retry: self.retry,
            airports: self.airports,
        }
    }

    /// Resolve airports against a different directory.
    pub fn with_airports(mut self, airports: Arc<AirportDirectory>) -> Self {
        self.airports = airports;
        self
    }

    pub fn airports(&self) -> &AirportDirectory {
        &self.airports
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn persister(&self) -> &P {
        &self.persister
    }

    /// Send a request once and decode the response.
    ///
    /// An empty body becomes `{"errmsg": "empty response body", "opstatus": -1}`
    /// so it is treated as transient. The parsed payload is persisted before
    /// decoding; a persistence failure is logged and otherwise ignored.
    pub async fn send<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R, SouthwestError> {
        let body = self.transport.execute(request).await?;

        let payload = if body.trim().is_empty() {
            debug!(name = request.name, "empty response body");
            serde_json::json!({ "errmsg": EMPTY_BODY_ERRMSG, "opstatus": -1 })
        } else {
            serde_json::from_str(&body).map_err(|e| SouthwestError::json(e, Some(&body)))?
        };

        if let Err(e) = self
            .persister
            .save(&request.confirmation, request.name, &payload)
        {
            warn!(
                confirmation = %request.confirmation,
                name = request.name,
                "failed to persist response: {e}"
            );
        }

        serde_json::from_value(payload).map_err(|e| SouthwestError::decode(request.name, e))
    }

    /// Send a request, reissuing it while the response is transient.
    pub async fn send_with_retry<R>(&self, request: &ApiRequest) -> Result<R, SouthwestError>
    where
        R: DeserializeOwned + ApiEnvelope,
    {
        self.retry.run(|| self.send::<R>(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryPersister;
    use crate::southwest::mock::MockTransport;
    use crate::southwest::types::{CheckInSessionResponse, ViewReservationResponse};

    #[test]
    fn config_builder() {
        let config = SouthwestConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_client_id("ANDROID")
            .with_timeout(60)
            .with_max_retries(3);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.client_id, "ANDROID");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn config_defaults() {
        let config = SouthwestConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.client_id, DEFAULT_CLIENT_ID);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 10);
    }

    #[test]
    fn client_creation() {
        assert!(SouthwestClient::new(SouthwestConfig::new("test-key")).is_ok());
    }

    #[tokio::test]
    async fn empty_body_becomes_transient_record() {
        let transport = MockTransport::sequence(vec![""]);
        let client = SouthwestClient::with_transport(transport, &SouthwestConfig::new("k"));

        let request = ApiRequest::view_reservation("ABC123", "Jo", "Smith");
        let response: ViewReservationResponse = client.send(&request).await.unwrap();

        assert!(response.is_transient());
        assert_eq!(response.status.error_message(), Some(EMPTY_BODY_ERRMSG));
    }

    #[tokio::test]
    async fn payload_is_persisted_verbatim() {
        let transport = MockTransport::sequence(vec![r#"{"checkInSessionToken": "tok", "extra": [1, 2]}"#]);
        let client = SouthwestClient::with_transport(transport, &SouthwestConfig::new("k"))
            .with_persister(MemoryPersister::default());

        let request = ApiRequest::check_in_session("ABC123", "Jo", "Smith");
        let response: CheckInSessionResponse = client.send(&request).await.unwrap();
        assert_eq!(response.token(), Some("tok"));

        let saved = client.persister().saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, "ABC123");
        assert_eq!(saved[0].1, "check-in-session");
        assert_eq!(saved[0].2["extra"], serde_json::json!([1, 2]));
    }

    #[tokio::test]
    async fn invalid_json_is_an_error() {
        let transport = MockTransport::sequence(vec!["<html>oops</html>"]);
        let client = SouthwestClient::with_transport(transport, &SouthwestConfig::new("k"));

        let request = ApiRequest::view_reservation("ABC123", "Jo", "Smith");
        let result = client.send::<ViewReservationResponse>(&request).await;

        assert!(matches!(result, Err(SouthwestError::Json { .. })));
    }

    #[tokio::test]
    async fn mistyped_payload_is_a_decode_error() {
        let transport = MockTransport::sequence(vec![r#"{"checkInSessionToken": ["tok"]}"#]);
        let client = SouthwestClient::with_transport(transport, &SouthwestConfig::new("k"))
            .with_persister(MemoryPersister::default());

        let request = ApiRequest::check_in_session("ABC123", "Jo", "Smith");
        let result = client.send::<CheckInSessionResponse>(&request).await;

        assert!(matches!(
            result,
            Err(SouthwestError::Decode { name: "check-in-session", .. })
        ));
        assert_eq!(client.persister().saved().len(), 1);
    }

    #[tokio::test]
    async fn retry_reissues_identical_request() {
        let transient = r#"{"errmsg": "Backend timeout", "opstatus": 8009}"#;
        let transport = MockTransport::sequence(vec![
            transient,
            transient,
            r#"{"checkInSessionToken": "tok"}"#,
        ]);
        let client = SouthwestClient::with_transport(transport, &SouthwestConfig::new("k"));

        let request = ApiRequest::check_in_session("ABC123", "Jo", "Smith");
        let response: CheckInSessionResponse = client.send_with_retry(&request).await.unwrap();

        assert_eq!(response.token(), Some("tok"));
        let sent = client.transport().requests();
        assert_eq!(sent.len(), 3);
        assert!(sent.iter().all(|r| *r == request));
    }

    #[tokio::test]
    async fn retry_budget_comes_from_config() {
        let transport = MockTransport::new(|_| String::new());
        let config = SouthwestConfig::new("k").with_max_retries(2);
        let client = SouthwestClient::with_transport(transport, &config);

        let request = ApiRequest::view_reservation("ABC123", "Jo", "Smith");
        let response: ViewReservationResponse = client.send_with_retry(&request).await.unwrap();

        assert!(response.is_transient());
        assert_eq!(client.transport().request_count(), 3);
    }
}
