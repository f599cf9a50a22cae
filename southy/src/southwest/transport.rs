//! Raw HTTP transport for the mobile API.
//!
//! A [`Transport`] turns an [`ApiRequest`] into a response body. It knows
//! nothing about retries, parsing or persistence; those live in
//! [`SouthwestClient`](super::SouthwestClient). Tests swap in
//! [`MockTransport`](super::MockTransport).

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use super::client::SouthwestConfig;
use super::error::SouthwestError;
use super::types::CheckInBody;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the fixed client identifier.
pub const CLIENT_ID_HEADER: &str = "x-channel-id";

/// Logical name of the reservation lookup request.
pub const VIEW_RESERVATION: &str = "view-reservation";

/// Logical name of the first check-in phase.
pub const CHECK_IN_SESSION: &str = "check-in-session";

/// Logical name of the second check-in phase.
pub const CHECK_IN: &str = "check-in";

const RESERVATION_PATH: &str =
    "/api/mobile-air-booking/v1/mobile-air-booking/page/view-reservation";
const CHECK_IN_PATH: &str = "/api/mobile-air-operations/v1/mobile-air-operations/page/check-in";

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request to the mobile API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Logical request name, used to label persisted payloads.
    pub name: &'static str,
    /// Confirmation number the request concerns.
    pub confirmation: String,
    pub method: Method,
    /// Path relative to the configured base URL.
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// `GET view-reservation/{confirmation}`.
    pub fn view_reservation(confirmation: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            name: VIEW_RESERVATION,
            confirmation: confirmation.to_string(),
            method: Method::Get,
            path: format!("{RESERVATION_PATH}/{confirmation}"),
            query: name_query(first_name, last_name),
            body: None,
        }
    }

    /// `GET check-in/{confirmation}`, the first check-in phase.
    pub fn check_in_session(confirmation: &str, first_name: &str, last_name: &str) -> Self {
        Self {
            name: CHECK_IN_SESSION,
            confirmation: confirmation.to_string(),
            method: Method::Get,
            path: format!("{CHECK_IN_PATH}/{confirmation}"),
            query: name_query(first_name, last_name),
            body: None,
        }
    }

    /// `POST check-in`, the second check-in phase.
    pub fn check_in(
        confirmation: &str,
        first_name: &str,
        last_name: &str,
        session_token: &str,
    ) -> Self {
        let body = CheckInBody {
            record_locator: confirmation.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            check_in_session_token: session_token.to_string(),
        };

        Self {
            name: CHECK_IN,
            confirmation: confirmation.to_string(),
            method: Method::Post,
            path: CHECK_IN_PATH.to_string(),
            query: Vec::new(),
            body: serde_json::to_value(body).ok(),
        }
    }

    /// Value of a query parameter, if present.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn name_query(first_name: &str, last_name: &str) -> Vec<(&'static str, String)> {
    vec![
        ("first-name", first_name.to_string()),
        ("last-name", last_name.to_string()),
    ]
}

/// Something that can execute API requests and return the raw body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn execute(&self, request: &ApiRequest) -> Result<String, SouthwestError>;
}

/// Transport backed by a reqwest client.
///
/// The connection pool is reused for every request made through this
/// transport. Authentication headers are attached to every request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport from the client configuration.
    pub fn new(config: &SouthwestConfig) -> Result<Self, SouthwestError> {
        Self::from_builder(Self::builder(config)?, config)
    }

    /// A reqwest builder carrying the authentication headers and timeout.
    fn builder(config: &SouthwestConfig) -> Result<reqwest::ClientBuilder, SouthwestError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| SouthwestError::InvalidConfig("invalid API key format".to_string()))?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let client_id = HeaderValue::from_str(&config.client_id).map_err(|_| {
            SouthwestError::InvalidConfig("invalid client identifier format".to_string())
        })?;
        headers.insert(HeaderName::from_static(CLIENT_ID_HEADER), client_id);

        Ok(reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs)))
    }

    fn from_builder(
        builder: reqwest::ClientBuilder,
        config: &SouthwestConfig,
    ) -> Result<Self, SouthwestError> {
        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path)
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<String, SouthwestError> {
        let url = self.url(request);
        debug!(name = request.name, %url, "sending request");

        let builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        let builder = builder.query(&request.query);
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // 4xx with a JSON payload is a business rejection for the flows
        if !status.is_success() && !body.trim_start().starts_with('{') && !body.trim().is_empty()
        {
            return Err(SouthwestError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        Ok(body)
    }
}
