//! Southwest client error types.

/// Errors from talking to the Southwest mobile API.
///
/// Business rejections (unknown reservation, bad request) are not errors
/// here: they arrive as regular JSON responses and are classified by the
/// flows. These variants cover the transport and the boundary itself.
#[derive(Debug, thiserror::Error)]
pub enum SouthwestError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Valid JSON whose shape does not match the expected response
    #[error("unexpected {name} payload: {message}")]
    Decode { name: &'static str, message: String },

    /// Non-success status with a body that is not a JSON payload
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Client could not be built from the supplied configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SouthwestError {
    /// Build a JSON error, keeping a bounded excerpt of the offending body.
    pub(crate) fn json(err: serde_json::Error, body: Option<&str>) -> Self {
        SouthwestError::Json {
            message: err.to_string(),
            body: body.map(|b| b.chars().take(500).collect()),
        }
    }

    pub(crate) fn decode(name: &'static str, err: serde_json::Error) -> Self {
        SouthwestError::Decode {
            name,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SouthwestError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");

        let err = SouthwestError::InvalidConfig("API key contains a newline".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: API key contains a newline"
        );
    }

    #[test]
    fn json_error_truncates_body() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let body = "x".repeat(2000);
        let err = SouthwestError::json(parse_err, Some(&body));

        assert!(err.to_string().starts_with("JSON parse error"));
        match err {
            SouthwestError::Json { body: Some(b), .. } => assert_eq!(b.len(), 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
