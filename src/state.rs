//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;

/// Link service over type-erased store and cache handles.
pub type DynLinkService = LinkService<dyn LinkRepository, dyn CacheService>;

/// Handles shared by every request.
///
/// Cloning is cheap; all fields are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<DynLinkService>,
    pub repository: Arc<dyn LinkRepository>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Builds the state and the link service from shared store and cache handles.
    pub fn new(repository: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        let link_service = Arc::new(LinkService::new(repository.clone(), cache.clone()));

        Self {
            link_service,
            repository,
            cache,
        }
    }
}
