//! Environment-driven configuration for the `southy` binary.

use std::path::PathBuf;

use crate::persist::JsonFilePersister;
use crate::southwest::{HttpTransport, SouthwestClient, SouthwestConfig, SouthwestError};

pub const API_KEY_VAR: &str = "SOUTHY_API_KEY";
pub const BASE_URL_VAR: &str = "SOUTHY_BASE_URL";
pub const CLIENT_ID_VAR: &str = "SOUTHY_CLIENT_ID";
pub const TIMEOUT_VAR: &str = "SOUTHY_TIMEOUT_SECS";
pub const MAX_RETRIES_VAR: &str = "SOUTHY_MAX_RETRIES";
pub const CAPTURE_DIR_VAR: &str = "SOUTHY_CAPTURE_DIR";
pub const FIRST_NAME_VAR: &str = "SOUTHY_FIRST_NAME";
pub const LAST_NAME_VAR: &str = "SOUTHY_LAST_NAME";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Everything the binary needs to build a client.
#[derive(Debug, Clone)]
pub struct SouthyConfig {
    pub southwest: SouthwestConfig,
    /// Directory raw API payloads are captured under, if any.
    pub capture_dir: Option<PathBuf>,
    /// Traveller name used when none is given on the command line.
    pub default_name: Option<(String, String)>,
}

impl SouthyConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let mut southwest = SouthwestConfig::new(api_key);

        if let Some(url) = get(BASE_URL_VAR) {
            southwest = southwest.with_base_url(url);
        }
        if let Some(client_id) = get(CLIENT_ID_VAR) {
            southwest = southwest.with_client_id(client_id);
        }
        if let Some(value) = get(TIMEOUT_VAR) {
            southwest = southwest.with_timeout(parse_number(TIMEOUT_VAR, &value)?);
        }
        if let Some(value) = get(MAX_RETRIES_VAR) {
            southwest = southwest.with_max_retries(parse_number(MAX_RETRIES_VAR, &value)?);
        }

        let default_name = match (get(FIRST_NAME_VAR), get(LAST_NAME_VAR)) {
            (Some(first), Some(last)) => Some((first, last)),
            _ => None,
        };

        Ok(Self {
            southwest,
            capture_dir: get(CAPTURE_DIR_VAR).map(PathBuf::from),
            default_name,
        })
    }

    /// Persister for captured payloads, when a capture directory is set.
    pub fn persister(&self) -> Option<JsonFilePersister> {
        self.capture_dir.as_ref().map(JsonFilePersister::new)
    }

    /// Build the HTTP client described by this configuration.
    pub fn client(
        &self,
    ) -> Result<SouthwestClient<HttpTransport, Option<JsonFilePersister>>, SouthwestError> {
        Ok(SouthwestClient::new(self.southwest.clone())?.with_persister(self.persister()))
    }
}

fn parse_number<N: std::str::FromStr>(var: &'static str, value: &str) -> Result<N, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::southwest::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES};
    use std::collections::HashMap;

    fn from(vars: &[(&str, &str)]) -> Result<SouthyConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SouthyConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn api_key_is_required() {
        assert_eq!(from(&[]).unwrap_err(), ConfigError::Missing(API_KEY_VAR));
        assert_eq!(
            from(&[(API_KEY_VAR, "  ")]).unwrap_err(),
            ConfigError::Missing(API_KEY_VAR)
        );
    }

    #[test]
    fn defaults() {
        let config = from(&[(API_KEY_VAR, "key")]).unwrap();

        assert_eq!(config.southwest.api_key, "key");
        assert_eq!(config.southwest.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.southwest.max_retries, DEFAULT_MAX_RETRIES);
        assert!(config.capture_dir.is_none());
        assert!(config.persister().is_none());
        assert!(config.default_name.is_none());
    }

    #[test]
    fn overrides() {
        let config = from(&[
            (API_KEY_VAR, "key"),
            (BASE_URL_VAR, "http://localhost:9000"),
            (CLIENT_ID_VAR, "ANDROID"),
            (TIMEOUT_VAR, " 5 "),
            (MAX_RETRIES_VAR, "2"),
            (CAPTURE_DIR_VAR, "/tmp/southy"),
            (FIRST_NAME_VAR, "Jo"),
            (LAST_NAME_VAR, "Smith"),
        ])
        .unwrap();

        assert_eq!(config.southwest.base_url, "http://localhost:9000");
        assert_eq!(config.southwest.client_id, "ANDROID");
        assert_eq!(config.southwest.timeout_secs, 5);
        assert_eq!(config.southwest.max_retries, 2);
        assert_eq!(
            config.persister().unwrap().dir(),
            std::path::Path::new("/tmp/southy")
        );
        assert_eq!(
            config.default_name,
            Some(("Jo".to_string(), "Smith".to_string()))
        );
    }

    #[test]
    fn malformed_numbers_are_errors() {
        let err = from(&[(API_KEY_VAR, "key"), (TIMEOUT_VAR, "soon")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: TIMEOUT_VAR,
                value: "soon".to_string()
            }
        );
        assert!(from(&[(API_KEY_VAR, "key"), (MAX_RETRIES_VAR, "-1")]).is_err());
    }

    #[test]
    fn half_a_default_name_is_ignored() {
        let config = from(&[(API_KEY_VAR, "key"), (FIRST_NAME_VAR, "Jo")]).unwrap();
        assert!(config.default_name.is_none());
    }

    #[test]
    fn builds_client() {
        let config = from(&[(API_KEY_VAR, "key")]).unwrap();
        assert!(config.client().is_ok());
    }
}
