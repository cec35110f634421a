//! One display session: fetch once, then show random artworks.

use rand::SeedableRng;
use rand::rngs::StdRng;
use saam_sparql::{ArtworkCollection, QueryProvider, ResponseCache, SparqlClient};

use crate::card::ArtworkCard;
use crate::config::ArtConfig;
use crate::error::Result;

/// Owns the provider, the session cache and the random source.
///
/// Every pick within a session reuses the cached response when caching is
/// enabled, so showing several cards costs one query.
pub struct DisplaySession<P: QueryProvider> {
    provider: P,
    cache: Option<ResponseCache>,
    rng: StdRng,
}

impl DisplaySession<SparqlClient> {
    /// Build a session against the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint config is invalid or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &ArtConfig) -> Result<Self> {
        let client = SparqlClient::new(&config.endpoint)?;
        let cache = ResponseCache::new(config.endpoint.cache_ttl_seconds);
        tracing::debug!(
            endpoint = %config.endpoint.url,
            query = %config.endpoint.query,
            cache = cache.is_enabled(),
            "display session created"
        );
        Ok(Self::new(client, Some(cache)))
    }
}

impl<P: QueryProvider> DisplaySession<P> {
    pub fn new(provider: P, cache: Option<ResponseCache>) -> Self {
        Self {
            provider,
            cache,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source with a seeded one, for reproducible picks.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Fetch (or reuse) the response and normalize it.
    ///
    /// # Errors
    ///
    /// Propagates transport and parse failures from the provider.
    pub async fn collection(&self) -> Result<ArtworkCollection> {
        Ok(saam_sparql::load_artworks(&self.provider, self.cache.as_ref()).await?)
    }

    /// Pick one artwork at random and build its card.
    ///
    /// # Errors
    ///
    /// Returns [`saam_sparql::SparqlError::NoData`] (wrapped) when the
    /// response has no usable rows, and propagates fetch failures.
    pub async fn next_card(&mut self) -> Result<ArtworkCard> {
        let collection = self.collection().await?;
        self.pick(&collection)
    }

    /// Pick `count` artworks independently (repeats are possible).
    ///
    /// The response is loaded and normalized once for the whole batch.
    ///
    /// # Errors
    ///
    /// Same as [`DisplaySession::next_card`].
    pub async fn cards(&mut self, count: usize) -> Result<Vec<ArtworkCard>> {
        let collection = self.collection().await?;
        let mut cards = Vec::new();
        for _ in 0..count {
            cards.push(self.pick(&collection)?);
        }
        Ok(cards)
    }

    fn pick(&mut self, collection: &ArtworkCollection) -> Result<ArtworkCard> {
        let record = collection.choose(&mut self.rng)?;
        tracing::info!(artist = %record.label, work = %record.work, "selected artwork");
        Ok(ArtworkCard::from_record(record))
    }
}
