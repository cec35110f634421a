//! Error types for the artomatic display.

use saam_sparql::SparqlError;

/// Top-level error type for the art display.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    /// Configuration file missing, unreadable, or invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Fetching, parsing, or selecting artwork failed.
    #[error(transparent)]
    Query(#[from] SparqlError),

    /// A card could not be rendered in the requested format.
    #[error("render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ArtError>;
