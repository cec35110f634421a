//! Shared HTTP client construction for endpoint requests.

use std::time::Duration;

use crate::config::EndpointConfig;
use crate::error::SparqlError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "saam-sparql/",
    env!("CARGO_PKG_VERSION"),
    " (+https://americanart.si.edu)"
);

/// Content types accepted from the endpoint, most specific first.
pub const ACCEPT: &str = "application/sparql-results+json, application/json;q=0.9";

/// Build a [`reqwest::Client`] configured for the SPARQL endpoint.
///
/// The client has:
/// - Timeout from config
/// - User-Agent from config, or [`DEFAULT_USER_AGENT`]
/// - gzip decompression
///
/// # Errors
///
/// Returns [`SparqlError::Http`] if the client cannot be constructed.
pub fn build_client(config: &EndpointConfig) -> Result<reqwest::Client, SparqlError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SparqlError::Http(format!("failed to build HTTP client: {e}")))
}
