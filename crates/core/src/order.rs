//! Rendering the cart as a WhatsApp order message.
//!
//! The message structure is a fixed contract: an opening greeting, one line
//! per cart line, a total line, and a closing phrase. The add-on list is
//! omitted when a line has no add-ons and the quantity suffix is omitted at
//! quantity 1. Percent-encoding for the `wa.me` deep link happens at the
//! transport boundary, not here.

use crate::cart::{Cart, CartLine};
use crate::catalog::Catalog;

/// Opening greeting line.
pub const GREETING: &str = "היי, אשמח להזמין:";

/// Label on the total line.
pub const TOTAL_LABEL: &str = "סה\"כ לתשלום";

/// Closing phrase.
pub const CLOSING: &str = "תודה!";

/// Separator between add-on names within one item line.
const ADD_ON_SEPARATOR: &str = ", ";

/// Render one cart line as an order item line.
///
/// Format: `- {product name}[ ({add-ons})][ x{quantity}]: {line total}`.
/// Names resolve through the catalog; unknown IDs degrade to empty names
/// rather than failing, since a slightly malformed order message beats a
/// crashed session.
fn item_line(line: &CartLine, catalog: &Catalog) -> String {
    let name = catalog
        .product(line.product_id)
        .map_or("", |p| p.name.as_str());

    let add_ons = if line.add_ons.is_empty() {
        String::new()
    } else {
        let names = line
            .add_ons
            .iter()
            .map(|id| catalog.add_on_name(id))
            .collect::<Vec<_>>()
            .join(ADD_ON_SEPARATOR);
        format!(" ({names})")
    };

    let quantity = if line.quantity > 1 {
        format!(" x{}", line.quantity)
    } else {
        String::new()
    };

    format!("- {name}{add_ons}{quantity}: {}", line.total)
}

/// Render the full order message for a cart.
///
/// An empty cart still produces the greeting/total/closing skeleton with a
/// total of `₪0`.
#[must_use]
pub fn order_message(cart: &Cart, catalog: &Catalog) -> String {
    let items = cart
        .lines()
        .iter()
        .map(|line| item_line(line, catalog))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{GREETING}\n{items}\n\n{TOTAL_LABEL}: {}\n{CLOSING}",
        cart.total_price()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::AddOnSet;
    use crate::catalog::tests::bakery_catalog;
    use crate::types::{AddOnId, Price, ProductId};

    fn set(ids: &[&str]) -> AddOnSet {
        ids.iter().map(|id| AddOnId::from(*id)).collect()
    }

    #[test]
    fn renders_the_worked_example() {
        let catalog = bakery_catalog();
        let spelt = catalog.product(ProductId::new(1)).unwrap().clone();
        let gluten_free = catalog.product(ProductId::new(3)).unwrap().clone();

        let mut cart = Cart::default();
        let plain = cart.add(&spelt, set(&[]));
        cart.update_quantity(plain, 1);
        cart.add(&gluten_free, set(&["walnuts"]));

        assert_eq!(cart.total_price(), Price::shekels(103));

        let message = order_message(&cart, &catalog);
        assert!(message.contains("- מחמצת כוסמין קלאסית x2: ₪60"));
        assert!(message.contains("- מחמצת מתערובת קמחים ללא גלוטן (אגוזי מלך): ₪43"));
        assert!(message.contains("סה\"כ לתשלום: ₪103"));
        assert!(message.starts_with("היי, אשמח להזמין:\n"));
        assert!(message.ends_with("\nתודה!"));
    }

    #[test]
    fn quantity_suffix_is_omitted_at_one() {
        let catalog = bakery_catalog();
        let spelt = catalog.product(ProductId::new(1)).unwrap().clone();
        let mut cart = Cart::default();
        cart.add(&spelt, set(&[]));

        let message = order_message(&cart, &catalog);
        assert!(message.contains("- מחמצת כוסמין קלאסית: ₪30"));
        assert!(!message.contains(" x1"));
    }

    #[test]
    fn add_on_list_is_omitted_when_empty_and_joined_when_not() {
        let catalog = bakery_catalog();
        let spelt = catalog.product(ProductId::new(1)).unwrap().clone();
        let mut cart = Cart::default();
        cart.add(&spelt, set(&["walnuts", "olives"]));

        let message = order_message(&cart, &catalog);
        // BTreeSet order: "olives" sorts before "walnuts".
        assert!(message.contains("- מחמצת כוסמין קלאסית (זיתי קלמטה, אגוזי מלך): ₪35"));
    }

    #[test]
    fn empty_cart_yields_the_skeleton_with_zero_total() {
        let catalog = bakery_catalog();
        let message = order_message(&Cart::default(), &catalog);
        assert_eq!(message, "היי, אשמח להזמין:\n\n\nסה\"כ לתשלום: ₪0\nתודה!");
    }

    #[test]
    fn unknown_add_on_renders_as_an_empty_name() {
        let catalog = bakery_catalog();
        let spelt = catalog.product(ProductId::new(1)).unwrap().clone();
        let mut cart = Cart::default();
        cart.add(&spelt, set(&["pistachios"]));

        let message = order_message(&cart, &catalog);
        assert!(message.contains("- מחמצת כוסמין קלאסית (): ₪35"));
    }
}
