//! The fixed product and add-on catalog.
//!
//! The catalog is supplied once at startup by the surrounding application and
//! never changes for the life of the session. All cart operations reference
//! catalog entries by ID, so lookups here are the only place an unknown ID
//! could surface; display lookups degrade instead of failing.

use serde::{Deserialize, Serialize};

use crate::types::{AddOnId, Price, ProductId};

/// A product on the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Base price per unit, before any add-on surcharge.
    pub price: Price,
    pub category: String,
    /// Image URL for product cards.
    pub image: String,
    /// Optional fine-print note shown on the product card (e.g. the
    /// gluten-free kitchen disclaimer).
    #[serde(default)]
    pub note: Option<String>,
}

/// An add-on a shopper can fold into a loaf.
///
/// The listed `price` is informational display only; the charged surcharge is
/// the flat per-unit fee in [`crate::cart::ADD_ON_FEE`], regardless of how
/// many add-ons are selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOn {
    pub id: AddOnId,
    pub name: String,
    #[serde(default)]
    pub price: Price,
}

/// The full static catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    add_ons: Vec<AddOn>,
}

impl Catalog {
    /// Create a catalog from fixed product and add-on lists.
    #[must_use]
    pub const fn new(products: Vec<Product>, add_ons: Vec<AddOn>) -> Self {
        Self { products, add_ons }
    }

    /// All products, in menu order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All add-ons, in display order.
    #[must_use]
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up an add-on by ID.
    #[must_use]
    pub fn add_on(&self, id: &AddOnId) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| &a.id == id)
    }

    /// Display name for an add-on ID.
    ///
    /// Add-on IDs always originate from this catalog, but a stale or
    /// malformed ID must not take the session down: unknown IDs resolve to an
    /// empty name and the order message simply renders without it.
    #[must_use]
    pub fn add_on_name(&self, id: &AddOnId) -> &str {
        self.add_on(id).map_or("", |a| a.name.as_str())
    }
}
