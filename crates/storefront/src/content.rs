//! Static store content loaded at startup.
//!
//! The catalog and site information are fixed configuration supplied by a
//! single JSON file; nothing here changes at runtime. Loading happens once
//! in `main` before the server starts, so a malformed file fails fast
//! instead of surfacing mid-session.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use sabrosa_core::catalog::Catalog;

/// Errors that can occur while loading store content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Opening hours for one day-of-week slot.
#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

/// Fixed site information rendered on the storefront page.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    /// Story paragraphs for the about section.
    pub story: Vec<String>,
    /// Human-readable contact phone (display form, not the order number).
    pub phone_display: String,
    pub instagram: String,
    pub payment_note: String,
    pub location: String,
    pub hours: Vec<OpeningHours>,
    #[serde(default)]
    pub hours_note: Option<String>,
}

/// Everything the storefront needs from disk: the catalog plus site info.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreContent {
    pub catalog: Catalog,
    pub site: SiteInfo,
}

impl StoreContent {
    /// Load store content from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the
    /// expected schema.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        let content: Self = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            products = content.catalog.products().len(),
            add_ons = content.catalog.add_ons().len(),
            "Loaded store content"
        );
        Ok(content)
    }
}
