//! The shopping cart: line identity, merging, and price recomputation.
//!
//! A cart line represents one *configuration* - a product plus a set of
//! selected add-ons. Configurations are the unit of merge identity: adding
//! the same configuration twice increments the existing line instead of
//! creating a duplicate. Identity is decided by [`ConfigKey`], a canonical
//! key built from the product ID and the sorted add-on IDs, so the order in
//! which add-ons were picked never matters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::draft::{Draft, DraftMode};
use crate::types::{AddOnId, LineId, Price, ProductId};

/// The set of add-ons selected for one configuration.
///
/// A `BTreeSet` keeps the IDs sorted, which makes canonical-key construction
/// and set equality order-independent by construction.
pub type AddOnSet = BTreeSet<AddOnId>;

/// Flat per-unit surcharge applied once a configuration has at least one
/// add-on. The fee does not scale with the number of add-ons.
pub const ADD_ON_FEE: Price = Price::shekels(5);

/// Per-unit price for a configuration: base price plus the flat surcharge if
/// and only if any add-ons are selected.
#[must_use]
pub fn unit_price(product: &Product, add_ons: &AddOnSet) -> Price {
    if add_ons.is_empty() {
        product.price
    } else {
        product.price + ADD_ON_FEE
    }
}

/// Canonical merge key for a configuration.
///
/// Built by pairing the product ID with the add-on IDs sorted and joined with
/// a fixed separator. Both lookup and equality go through this constructor,
/// so two representations of the same selection always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Build the key for a product and add-on selection.
    #[must_use]
    pub fn new(product_id: ProductId, add_ons: &AddOnSet) -> Self {
        let joined = add_ons
            .iter()
            .map(AddOnId::as_str)
            .collect::<Vec<_>>()
            .join("+");
        Self(format!("{product_id}|{joined}"))
    }
}

/// One row in the cart: a configuration at a given quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable identifier for edit/remove operations.
    pub id: LineId,
    pub product_id: ProductId,
    pub add_ons: AddOnSet,
    /// Always at least 1.
    pub quantity: u32,
    /// Stored line total: per-unit price × quantity.
    pub total: Price,
}

impl CartLine {
    /// The line's configuration merge key.
    #[must_use]
    pub fn key(&self) -> ConfigKey {
        ConfigKey::new(self.product_id, &self.add_ons)
    }

    /// Per-unit price recovered from the stored total.
    ///
    /// Exact under decimal arithmetic since the total is always a whole
    /// multiple of the unit price for the line's fixed configuration.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.total.divided_by(self.quantity)
    }
}

/// The session's shopping cart: cart lines in insertion order, at most one
/// line per distinct configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by its identifier.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Add one unit of a configuration.
    ///
    /// If a line with the same configuration key already exists its quantity
    /// is incremented and its total grows by one unit price; otherwise a new
    /// line is appended. Returns the affected line's identifier.
    pub fn add(&mut self, product: &Product, add_ons: AddOnSet) -> LineId {
        let unit = unit_price(product, &add_ons);
        let key = ConfigKey::new(product.id, &add_ons);

        if let Some(line) = self.lines.iter_mut().find(|l| l.key() == key) {
            line.quantity += 1;
            line.total += unit;
            line.id
        } else {
            let id = LineId::generate();
            self.lines.push(CartLine {
                id,
                product_id: product.id,
                add_ons,
                quantity: 1,
                total: unit,
            });
            id
        }
    }

    /// Adjust a line's quantity by a signed delta, clamping at 1.
    ///
    /// The new total is derived from the stored total (total ÷ old quantity ×
    /// new quantity) rather than re-running the pricing rule; the two agree
    /// exactly because the unit price is constant for a fixed configuration.
    /// Returns the updated line, or `None` for an unknown identifier.
    pub fn update_quantity(&mut self, id: LineId, delta: i32) -> Option<&CartLine> {
        let line = self.lines.iter_mut().find(|l| l.id == id)?;
        let new_quantity =
            u32::try_from((i64::from(line.quantity) + i64::from(delta)).max(1)).unwrap_or(u32::MAX);
        let unit = line.total.divided_by(line.quantity);
        line.quantity = new_quantity;
        line.total = unit.times(new_quantity);
        Some(line)
    }

    /// Remove a line unconditionally. Returns whether a line was removed.
    pub fn remove(&mut self, id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    /// Commit a customization draft.
    ///
    /// A new-mode draft behaves exactly like [`Cart::add`], including the
    /// merge rule. An edit-mode draft replaces the target line's add-on set
    /// and recomputes its total as the new unit price × the line's existing
    /// quantity. If the edited configuration now equals another line's key,
    /// the two are merged into that line (quantities summed, total
    /// recomputed) so the one-line-per-configuration invariant holds.
    ///
    /// Returns the identifier of the line holding the configuration.
    pub fn confirm(&mut self, draft: &Draft, product: &Product) -> LineId {
        match draft.mode() {
            DraftMode::New => self.add(product, draft.add_ons().clone()),
            DraftMode::Edit(line_id) => self.apply_edit(line_id, product, draft.add_ons()),
        }
    }

    fn apply_edit(&mut self, line_id: LineId, product: &Product, add_ons: &AddOnSet) -> LineId {
        let unit = unit_price(product, add_ons);
        let key = ConfigKey::new(product.id, add_ons);

        let Some(edited_pos) = self.lines.iter().position(|l| l.id == line_id) else {
            // The line was removed out from under the dialog; treat the
            // confirmation as a fresh add.
            return self.add(product, add_ons.clone());
        };

        let collision = self
            .lines
            .iter()
            .find(|l| l.id != line_id && l.key() == key)
            .map(|l| l.id);

        if let Some(target_id) = collision {
            let edited = self.lines.remove(edited_pos);
            if let Some(target) = self.lines.iter_mut().find(|l| l.id == target_id) {
                target.quantity += edited.quantity;
                target.total = unit.times(target.quantity);
            }
            target_id
        } else {
            if let Some(line) = self.lines.get_mut(edited_pos) {
                line.add_ons = add_ons.clone();
                line.total = unit.times(line.quantity);
            }
            line_id
        }
    }

    /// Total item count: the sum of line quantities. Recomputed on demand.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price: the sum of stored line totals. Recomputed on demand.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(|l| l.total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::tests::bakery_catalog;
    use crate::catalog::Catalog;

    fn set(ids: &[&str]) -> AddOnSet {
        ids.iter().map(|id| AddOnId::from(*id)).collect()
    }

    fn product(catalog: &Catalog, id: i32) -> Product {
        catalog.product(ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn repeated_adds_merge_regardless_of_add_on_order() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let mut cart = Cart::default();

        let first = cart.add(&spelt, set(&["walnuts", "olives"]));
        let second = cart.add(&spelt, set(&["olives", "walnuts"]));

        assert_eq!(first, second);
        assert_eq!(cart.lines().len(), 1);
        let line = cart.line(first).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.total, Price::shekels(70));
    }

    #[test]
    fn different_add_on_sets_get_distinct_lines() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let mut cart = Cart::default();

        cart.add(&spelt, set(&[]));
        cart.add(&spelt, set(&["walnuts"]));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_price(), Price::shekels(65));
    }

    #[test]
    fn surcharge_is_flat_not_per_add_on() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);

        assert_eq!(unit_price(&spelt, &set(&[])), Price::shekels(30));
        assert_eq!(unit_price(&spelt, &set(&["walnuts"])), Price::shekels(35));
        assert_eq!(
            unit_price(&spelt, &set(&["walnuts", "olives", "seeds"])),
            Price::shekels(35)
        );
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let mut cart = Cart::default();
        let id = cart.add(&spelt, set(&[]));

        cart.update_quantity(id, -5);
        let line = cart.line(id).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total, Price::shekels(30));
    }

    #[test]
    fn total_scales_linearly_with_quantity() {
        let catalog = bakery_catalog();
        let gluten_free = product(&catalog, 3);
        let mut cart = Cart::default();
        let id = cart.add(&gluten_free, set(&["walnuts"]));
        let unit = cart.line(id).unwrap().unit_price();

        for delta in [3, -1, 5, -2] {
            cart.update_quantity(id, delta);
            let line = cart.line(id).unwrap();
            assert_eq!(line.unit_price(), unit);
            assert_eq!(line.total, unit.times(line.quantity));
        }
    }

    #[test]
    fn updating_an_unknown_line_is_a_no_op() {
        let mut cart = Cart::default();
        assert!(cart.update_quantity(LineId::generate(), 1).is_none());
    }

    #[test]
    fn removal_is_unconditional_and_shrinks_totals() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let whole_wheat = product(&catalog, 2);
        let mut cart = Cart::default();
        let keep = cart.add(&spelt, set(&[]));
        let gone = cart.add(&whole_wheat, set(&["olives"]));

        assert!(cart.remove(gone));
        assert!(cart.line(gone).is_none());
        assert!(!cart.remove(gone));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_price(), cart.line(keep).unwrap().total);
    }

    #[test]
    fn derived_totals_match_line_sums_after_any_sequence() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let gluten_free = product(&catalog, 3);
        let mut cart = Cart::default();

        let a = cart.add(&spelt, set(&[]));
        cart.add(&spelt, set(&[]));
        let b = cart.add(&gluten_free, set(&["walnuts"]));
        cart.update_quantity(a, 2);
        cart.update_quantity(b, 1);
        cart.remove(a);
        cart.add(&spelt, set(&["seeds"]));

        let quantity_sum: u32 = cart.lines().iter().map(|l| l.quantity).sum();
        let total_sum: Price = cart.lines().iter().map(|l| l.total).sum();
        assert_eq!(cart.item_count(), quantity_sum);
        assert_eq!(cart.total_price(), total_sum);
    }

    #[test]
    fn new_mode_confirm_merges_with_existing_configuration() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let mut cart = Cart::default();
        let existing = cart.add(&spelt, set(&["walnuts"]));

        let mut draft = Draft::begin_new(spelt.id);
        draft.toggle(AddOnId::from("walnuts"));
        let confirmed = cart.confirm(&draft, &spelt);

        assert_eq!(confirmed, existing);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(existing).unwrap().quantity, 2);
    }

    #[test]
    fn edit_preserves_quantity_and_recomputes_total_exactly() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let mut cart = Cart::default();
        let id = cart.add(&spelt, set(&["walnuts"]));
        cart.update_quantity(id, 2);

        // Drop the add-on: 3 units fall back to the base price.
        let mut draft = Draft::begin_edit(cart.line(id).unwrap());
        draft.toggle(AddOnId::from("walnuts"));
        let confirmed = cart.confirm(&draft, &spelt);

        assert_eq!(confirmed, id);
        let line = cart.line(id).unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(line.total, Price::shekels(90));

        // Repeated edits do not drift.
        for _ in 0..4 {
            let mut redraft = Draft::begin_edit(cart.line(id).unwrap());
            redraft.toggle(AddOnId::from("olives"));
            redraft.toggle(AddOnId::from("olives"));
            cart.confirm(&redraft, &spelt);
        }
        assert_eq!(cart.line(id).unwrap().total, Price::shekels(90));
    }

    #[test]
    fn edit_collision_merges_into_the_existing_line() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let mut cart = Cart::default();
        let plain = cart.add(&spelt, set(&[]));
        cart.update_quantity(plain, 1);
        let with_walnuts = cart.add(&spelt, set(&["walnuts"]));

        // Editing the walnut line into the plain configuration collides with
        // the first line: merge, keep the target's id and position.
        let mut draft = Draft::begin_edit(cart.line(with_walnuts).unwrap());
        draft.toggle(AddOnId::from("walnuts"));
        let confirmed = cart.confirm(&draft, &spelt);

        assert_eq!(confirmed, plain);
        assert_eq!(cart.lines().len(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.id, plain);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.total, Price::shekels(90));
    }

    #[test]
    fn confirming_an_edit_of_a_removed_line_falls_back_to_add() {
        let catalog = bakery_catalog();
        let spelt = product(&catalog, 1);
        let mut cart = Cart::default();
        let id = cart.add(&spelt, set(&["olives"]));
        let draft = Draft::begin_edit(cart.line(id).unwrap());
        cart.remove(id);

        let confirmed = cart.confirm(&draft, &spelt);
        assert_ne!(confirmed, id);
        let line = cart.line(confirmed).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.total, Price::shekels(35));
    }
}
