//! Application state shared across handlers.

use std::sync::Arc;

use sabrosa_core::catalog::Catalog;

use crate::config::StorefrontConfig;
use crate::content::{SiteInfo, StoreContent};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything inside is
/// immutable after startup - per-visitor state lives in the session, not
/// here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: StoreContent,
}

impl AppState {
    /// Create a new application state from loaded configuration and content.
    #[must_use]
    pub fn new(config: StorefrontConfig, content: StoreContent) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, content }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the fixed product and add-on catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.content.catalog
    }

    /// Get a reference to the fixed site information.
    #[must_use]
    pub fn site(&self) -> &SiteInfo {
        &self.inner.content.site
    }
}
