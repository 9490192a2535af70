//! Link creation and slug resolution service.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::codec;
use crate::domain::entities::Link;
use crate::domain::error::LinkError;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;

/// Service for minting slugs and resolving them back to URLs.
///
/// Reads go through the cache first and fall back to the durable store,
/// repopulating the cache on the way out. Writes go only to the store; the
/// cache fills lazily on first resolution.
///
/// The repository and cache handles are shared with the rest of the process
/// and are never reconfigured here.
pub struct LinkService<R: LinkRepository + ?Sized, C: CacheService + ?Sized> {
    repository: Arc<R>,
    cache: Arc<C>,
}

impl<R: LinkRepository + ?Sized, C: CacheService + ?Sized> LinkService<R, C> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self { repository, cache }
    }

    /// Persists a URL and returns it with its new slug.
    ///
    /// Every call allocates a new identifier, so submitting the same URL twice
    /// yields two different slugs.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::StorageFailure`] if the store rejects the write.
    /// Returns [`LinkError::InvalidArgument`] if the store hands back a negative
    /// identifier.
    pub async fn create(&self, url: &str) -> Result<Link, LinkError> {
        let id = self.repository.insert(url).await.map_err(|e| {
            error!(error = %e, "Failed to persist link");
            LinkError::StorageFailure(e)
        })?;

        let slug = codec::encode(id)?;
        debug!(id, slug = %slug, "Created link");

        Ok(Link::with_slug(url, slug))
    }

    /// Resolves a slug to its URL.
    ///
    /// A cache hit is returned as-is without decoding the slug. On a miss, or
    /// when the cache errors, the slug is decoded and looked up in the store,
    /// and the result is written back to the cache once. A failed cache write
    /// is logged and ignored.
    ///
    /// # Errors
    ///
    /// - [`LinkError::DecodeFailure`] if the slug contains illegal characters;
    ///   the store is not consulted
    /// - [`LinkError::NotFound`] if no link backs the slug or the lookup fails
    pub async fn get(&self, slug: &str) -> Result<String, LinkError> {
        match self.cache.get_url(slug).await {
            Ok(Some(url)) => {
                debug!(slug, "Cache HIT");
                return Ok(url);
            }
            Ok(None) => debug!(slug, "Cache MISS"),
            Err(e) => warn!(slug, error = %e, "Cache lookup failed, treating as miss"),
        }

        let id = codec::decode(slug)?;

        let url = match self.repository.find_url(id).await {
            Ok(Some(url)) => url,
            Ok(None) => return Err(LinkError::NotFound),
            Err(e) => {
                warn!(slug, id, error = %e, "Link lookup failed");
                return Err(LinkError::NotFound);
            }
        };

        if let Err(e) = self.cache.set_url(slug, &url, None).await {
            warn!(slug, error = %e, "Failed to populate cache");
        }

        Ok(url)
    }
}
