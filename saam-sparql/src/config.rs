//! Endpoint configuration with sensible defaults.
//!
//! [`EndpointConfig`] controls where the query is sent, which fixed query
//! variant is used, request timeouts and response caching.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SparqlError;
use crate::query::QueryVariant;

/// Public SPARQL endpoint of the Smithsonian American Art Museum.
pub const DEFAULT_ENDPOINT: &str = "http://edan.si.edu/saam/sparql";

/// Configuration for the query provider.
///
/// Use [`Default::default()`] for the public endpoint, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// SPARQL endpoint URL. Must be `http` or `https`.
    pub url: String,
    /// Which fixed query to send.
    pub query: QueryVariant,
    /// HTTP request timeout in seconds. The endpoint is slow for large
    /// result sets, so the default is generous.
    pub timeout_seconds: u64,
    /// How long a fetched response is reused, in seconds. Set to 0 to disable caching.
    pub cache_ttl_seconds: u64,
    /// Custom User-Agent string. If `None`, a crate-identifying default is sent.
    pub user_agent: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_owned(),
            query: QueryVariant::default(),
            timeout_seconds: 30,
            cache_ttl_seconds: 600,
            user_agent: None,
        }
    }
}

impl EndpointConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `url` must parse and use the `http` or `https` scheme
    /// - `timeout_seconds` must be greater than 0
    /// - `user_agent`, if set, must not be blank
    pub fn validate(&self) -> Result<(), SparqlError> {
        let parsed = Url::parse(&self.url)
            .map_err(|e| SparqlError::Config(format!("invalid endpoint url: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SparqlError::Config(format!(
                "endpoint url must use http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(SparqlError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.user_agent.as_deref().is_some_and(|ua| ua.trim().is_empty()) {
            return Err(SparqlError::Config("user_agent must not be blank".into()));
        }
        Ok(())
    }
}
