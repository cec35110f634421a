//! # saam-sparql
//!
//! Artwork records from the Smithsonian American Art Museum linked-data
//! endpoint.
//!
//! This crate sends one fixed SPARQL query, decodes the JSON results, and
//! normalizes each sparse result row into a complete [`ArtworkRecord`].
//!
//! ## Design
//!
//! - The query text is a compile-time constant ([`QueryVariant`]); callers
//!   never build SPARQL
//! - [`QueryProvider`] is the seam between transport and normalization
//! - Required fields missing from a row cause that row to be skipped and
//!   logged; optional fields are defaulted
//! - Biography text is stripped of `<...>` markup
//! - Responses can be memoized in an injected [`ResponseCache`]
//!
//! Transport failures are never retried. Callers surface them and let the
//! user refresh.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod markup;
pub mod normalize;
pub mod provider;
pub mod query;
pub mod types;

pub use cache::{CacheKey, ResponseCache};
pub use client::SparqlClient;
pub use config::EndpointConfig;
pub use error::{Result, SparqlError};
pub use markup::strip_markup;
pub use normalize::{
    PLACEHOLDER_IMAGE_URL, normalize_binding, normalize_bindings, normalize_response,
};
pub use provider::QueryProvider;
pub use query::QueryVariant;
pub use types::{ArtworkCollection, ArtworkRecord, RawBinding, SparqlResponse, Term};

/// Fetch and normalize artwork records.
///
/// Uses `cache` when given, so repeated calls within one session reuse the
/// same response instead of re-querying.
///
/// # Errors
///
/// Returns the provider's [`SparqlError::Http`] or [`SparqlError::Parse`]
/// unchanged. A response with no usable rows is an empty collection, not
/// an error.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> saam_sparql::Result<()> {
/// let client = saam_sparql::SparqlClient::new(&saam_sparql::EndpointConfig::default())?;
/// let cache = saam_sparql::ResponseCache::new(600);
/// let artworks = saam_sparql::load_artworks(&client, Some(&cache)).await?;
/// for art in &artworks {
///     println!("{}: {}", art.label, art.work);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn load_artworks<P: QueryProvider>(
    provider: &P,
    cache: Option<&ResponseCache>,
) -> Result<ArtworkCollection> {
    let response = match cache {
        Some(cache) => cache.fetch(provider).await?,
        None => std::sync::Arc::new(provider.fetch().await?),
    };
    Ok(normalize_response(&response))
}

/// Fetch and normalize artwork records using [`EndpointConfig::default()`]
/// and no cache.
///
/// # Errors
///
/// Same as [`load_artworks`], plus [`SparqlError::Http`] if the HTTP client
/// cannot be built.
pub async fn load_artworks_default() -> Result<ArtworkCollection> {
    let client = SparqlClient::new(&EndpointConfig::default())?;
    load_artworks(&client, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(&'static str);

    impl QueryProvider for FixedProvider {
        async fn fetch(&self) -> Result<SparqlResponse> {
            client::parse_response(self.0)
        }

        fn query_text(&self) -> &str {
            QueryVariant::Sampled.text()
        }

        fn endpoint(&self) -> &str {
            config::DEFAULT_ENDPOINT
        }
    }

    #[tokio::test]
    async fn empty_bindings_load_as_empty_collection() {
        let provider = FixedProvider(r#"{"results": {"bindings": []}}"#);
        let artworks = load_artworks(&provider, None).await.expect("should load");
        assert!(artworks.is_empty());

        let mut rng = rand::thread_rng();
        assert!(matches!(artworks.choose(&mut rng), Err(SparqlError::NoData)));
    }

    #[tokio::test]
    async fn malformed_envelope_loads_as_empty_collection() {
        let provider = FixedProvider(r#"{"head": {}}"#);
        let artworks = load_artworks(&provider, None).await.expect("should load");
        assert!(artworks.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let provider = FixedProvider("not json");
        let err = load_artworks(&provider, None).await.unwrap_err();
        assert!(matches!(err, SparqlError::Parse(_)));
    }

    #[tokio::test]
    async fn load_through_cache_normalizes_rows() {
        let provider = FixedProvider(
            r#"{"results": {"bindings": [{
                "artist": {"value": "http://edan.si.edu/saam/id/person-institution/1"},
                "sampleLabel": {"value": "Albert Pinkham Ryder"},
                "shortBio": {"value": "<i>Visionary</i> painter"},
                "workRepresentation": {"value": "https://example.org/r.jpg"},
                "work": {"value": "http://edan.si.edu/saam/id/object/1929.6.98"}
            }]}}"#,
        );
        let cache = ResponseCache::new(60);
        let artworks = load_artworks(&provider, Some(&cache))
            .await
            .expect("should load");
        assert_eq!(artworks.len(), 1);
        let art = &artworks.records()[0];
        assert_eq!(art.short_bio, "Visionary painter");
        assert_eq!(art.image, PLACEHOLDER_IMAGE_URL);
        assert!(cache.get(&CacheKey::for_provider(&provider)).await.is_some());
    }
}
