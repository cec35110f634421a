//! Trait definition for query providers.
//!
//! The normalizer only needs a source of [`SparqlResponse`] documents.
//! [`crate::client::SparqlClient`] is the network implementation; tests and
//! offline callers can supply their own.

use crate::error::SparqlError;
use crate::types::SparqlResponse;

/// A source of raw artwork query results.
///
/// Implementors own the fixed query text and the transport. Failures are
/// returned as-is; providers do not retry.
///
/// All implementations must be `Send + Sync` so a provider can be shared
/// across tasks.
pub trait QueryProvider: Send + Sync {
    /// Run the fixed query and return the parsed response envelope.
    ///
    /// # Errors
    ///
    /// Returns [`SparqlError::Http`] on transport failure or a non-success
    /// status, and [`SparqlError::Parse`] if the body is not valid JSON.
    fn fetch(
        &self,
    ) -> impl std::future::Future<Output = Result<SparqlResponse, SparqlError>> + Send;

    /// The exact query text this provider sends. Used as the cache key.
    fn query_text(&self) -> &str;

    /// Where the query is sent. Part of the cache key so two endpoints
    /// never share cached responses.
    fn endpoint(&self) -> &str;
}
