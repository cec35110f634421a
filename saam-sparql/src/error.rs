//! Error types for the saam-sparql crate.
//!
//! Messages are stable, lowercase strings suitable for display to users.
//! Query text is never embedded in error messages; it is long and adds
//! nothing a log reader can act on.

/// Errors that can occur while querying the endpoint or selecting a record.
#[derive(Debug, thiserror::Error)]
pub enum SparqlError {
    /// The HTTP request failed or the endpoint answered with a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body was not a valid SPARQL JSON results document.
    #[error("parse error: {0}")]
    Parse(String),

    /// A binding lacked a field the record contract requires.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A record was requested from an empty collection.
    #[error("no data available")]
    NoData,

    /// Invalid endpoint configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for saam-sparql results.
pub type Result<T> = std::result::Result<T, SparqlError>;
