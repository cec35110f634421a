//! In-memory cache for fetched query responses.
//!
//! Keyed by the (endpoint, query text) pair. Uses [`moka`] for
//! async-friendly caching with a TTL and bounded capacity. The cache is an
//! ordinary value owned by whoever needs it; there is no process-wide
//! instance.

use std::collections::hash_map::DefaultHasher;
use std::future::Future;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::error::SparqlError;
use crate::provider::QueryProvider;
use crate::types::SparqlResponse;

/// Maximum number of cached responses. There are only two fixed queries,
/// so this is never reached in practice.
const MAX_CACHE_ENTRIES: u64 = 16;

/// Composite cache key: endpoint URL + hash of the query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    endpoint: String,
    query_hash: u64,
}

impl CacheKey {
    /// Build a deterministic cache key. The endpoint's trailing slash is
    /// ignored; the query text is hashed verbatim.
    pub fn new(endpoint: &str, query_text: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        query_text.hash(&mut hasher);
        Self {
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            query_hash: hasher.finish(),
        }
    }

    /// Key for whatever the given provider sends.
    pub fn for_provider<P: QueryProvider + ?Sized>(provider: &P) -> Self {
        Self::new(provider.endpoint(), provider.query_text())
    }
}

/// Get-or-populate cache of parsed responses.
///
/// Cloning is cheap and clones share storage.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Option<Cache<CacheKey, Arc<SparqlResponse>>>,
}

impl ResponseCache {
    /// Create a cache whose entries live for `ttl_seconds`.
    /// A TTL of 0 disables caching: every lookup misses.
    pub fn new(ttl_seconds: u64) -> Self {
        let inner = (ttl_seconds > 0).then(|| {
            Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(ttl_seconds))
                .build()
        });
        Self { inner }
    }

    /// Whether lookups can ever hit.
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Look up a cached response. Returns `None` on miss.
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<SparqlResponse>> {
        self.inner.as_ref()?.get(key).await
    }

    /// Store a response under `key`.
    pub async fn insert(&self, key: CacheKey, response: Arc<SparqlResponse>) {
        if let Some(cache) = &self.inner {
            cache.insert(key, response).await;
        }
    }

    /// Return the cached response for `key`, or run `populate`, store its
    /// success, and return it. Errors from `populate` are returned unchanged
    /// and never cached.
    pub async fn get_or_populate<F, Fut>(
        &self,
        key: CacheKey,
        populate: F,
    ) -> Result<Arc<SparqlResponse>, SparqlError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<SparqlResponse, SparqlError>>,
    {
        if let Some(hit) = self.get(&key).await {
            tracing::debug!(endpoint = %key.endpoint, "response cache hit");
            return Ok(hit);
        }

        let response = Arc::new(populate().await?);
        self.insert(key, Arc::clone(&response)).await;
        Ok(response)
    }

    /// Fetch through `provider`, reusing a cached response when present.
    ///
    /// # Errors
    ///
    /// Propagates the provider's error on a miss.
    pub async fn fetch<P: QueryProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<Arc<SparqlResponse>, SparqlError> {
        self.get_or_populate(CacheKey::for_provider(provider), || provider.fetch())
            .await
    }

    /// Drop every cached response.
    pub fn clear(&self) {
        if let Some(cache) = &self.inner {
            cache.invalidate_all();
        }
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
