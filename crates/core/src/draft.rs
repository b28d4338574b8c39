//! The in-progress customization dialog state.
//!
//! A draft lives outside the cart while the dialog is open: it is discarded
//! on cancel and only touches the cart through [`crate::cart::Cart::confirm`].

use serde::{Deserialize, Serialize};

use crate::cart::{ADD_ON_FEE, AddOnSet, CartLine, unit_price};
use crate::catalog::Product;
use crate::types::{AddOnId, LineId, Price, ProductId};

/// Whether the draft adds a new configuration or edits an existing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftMode {
    New,
    Edit(LineId),
}

/// A customization in progress: target product, selected add-ons, and mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    product_id: ProductId,
    add_ons: AddOnSet,
    mode: DraftMode,
}

impl Draft {
    /// Start customizing a product from scratch, with no add-ons selected.
    #[must_use]
    pub const fn begin_new(product_id: ProductId) -> Self {
        Self {
            product_id,
            add_ons: AddOnSet::new(),
            mode: DraftMode::New,
        }
    }

    /// Start editing an existing cart line, copying its current selection.
    #[must_use]
    pub fn begin_edit(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            add_ons: line.add_ons.clone(),
            mode: DraftMode::Edit(line.id),
        }
    }

    /// The product being customized.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// The currently selected add-ons.
    #[must_use]
    pub const fn add_ons(&self) -> &AddOnSet {
        &self.add_ons
    }

    /// The draft's mode.
    #[must_use]
    pub const fn mode(&self) -> DraftMode {
        self.mode
    }

    /// Whether the draft edits an existing line.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, DraftMode::Edit(_))
    }

    /// Toggle an add-on in or out of the selection.
    pub fn toggle(&mut self, id: AddOnId) {
        if !self.add_ons.remove(&id) {
            self.add_ons.insert(id);
        }
    }

    /// Whether an add-on is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: &AddOnId) -> bool {
        self.add_ons.contains(id)
    }

    /// Per-unit price of the draft configuration.
    #[must_use]
    pub fn unit_price(&self, product: &Product) -> Price {
        unit_price(product, &self.add_ons)
    }

    /// Displayed per-add-on share of the flat fee (fee ÷ selected count,
    /// rounded to one decimal place), or `None` when nothing is selected.
    ///
    /// Cosmetic only: the charged total always comes from the flat-fee rule
    /// in [`unit_price`], never from summing shares.
    #[must_use]
    pub fn fee_share(&self) -> Option<Price> {
        let count = u32::try_from(self.add_ons.len()).ok()?;
        if count == 0 {
            None
        } else {
            Some(ADD_ON_FEE.divided_by(count).round_dp(1))
        }
    }
}
