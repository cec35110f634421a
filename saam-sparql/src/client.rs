//! Network query provider for the SAAM SPARQL endpoint.
//!
//! Sends `GET <endpoint>?format=json&query=<text>` and decodes the SPARQL
//! JSON results document.

use crate::config::EndpointConfig;
use crate::error::SparqlError;
use crate::http;
use crate::provider::QueryProvider;
use crate::types::SparqlResponse;

/// SPARQL-over-HTTP provider.
///
/// Holds one [`reqwest::Client`] for its lifetime so connection pooling
/// survives repeated fetches.
#[derive(Debug, Clone)]
pub struct SparqlClient {
    client: reqwest::Client,
    endpoint: String,
    query: &'static str,
}

impl SparqlClient {
    /// Build a provider from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`SparqlError::Config`] if the config is invalid, or
    /// [`SparqlError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &EndpointConfig) -> Result<Self, SparqlError> {
        config.validate()?;
        Ok(Self {
            client: http::build_client(config)?,
            endpoint: config.url.clone(),
            query: config.query.text(),
        })
    }
}

impl QueryProvider for SparqlClient {
    async fn fetch(&self) -> Result<SparqlResponse, SparqlError> {
        tracing::trace!(endpoint = %self.endpoint, "SPARQL query");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("query", self.query)])
            .header(reqwest::header::ACCEPT, http::ACCEPT)
            .send()
            .await
            .map_err(|e| SparqlError::Http(format!("endpoint request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SparqlError::Http(format!("endpoint returned error status: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SparqlError::Http(format!("endpoint response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "SPARQL response received");

        parse_response(&body)
    }

    fn query_text(&self) -> &str {
        self.query
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Parse a SPARQL JSON results body.
///
/// Extracted as a separate function for testability with fixture bodies.
///
/// # Errors
///
/// Returns [`SparqlError::Parse`] if the body is not a JSON object of the
/// expected shape. A well-formed object lacking `results` is not an error.
pub fn parse_response(body: &str) -> Result<SparqlResponse, SparqlError> {
    let response: SparqlResponse = serde_json::from_str(body)
        .map_err(|e| SparqlError::Parse(format!("invalid SPARQL JSON: {e}")))?;
    tracing::debug!(count = response.bindings().len(), "SPARQL bindings parsed");
    Ok(response)
}
