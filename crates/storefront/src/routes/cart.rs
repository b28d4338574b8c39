//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart lives in the visitor's session; every handler loads it, applies
//! one engine operation, and saves it back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use sabrosa_core::cart::{AddOnSet, Cart, CartLine};
use sabrosa_core::catalog::Catalog;
use sabrosa_core::notice::Notice;
use sabrosa_core::types::{LineId, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session as shopper;
use crate::state::AppState;

/// Confirmation shown after an item lands in the cart.
pub const ADDED_TO_CART: &str = "התווסף לסל בהצלחה!";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    /// Selected add-on names, pre-joined for display.
    pub add_ons: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Build the display model for a cart, resolving names via the catalog.
    #[must_use]
    pub fn build(cart: &Cart, catalog: &Catalog) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView::build(line, catalog))
                .collect(),
            total: cart.total_price().to_string(),
            item_count: cart.item_count(),
        }
    }
}

impl CartLineView {
    fn build(line: &CartLine, catalog: &Catalog) -> Self {
        let product = catalog.product(line.product_id);
        let add_ons = line
            .add_ons
            .iter()
            .map(|id| catalog.add_on_name(id))
            .collect::<Vec<_>>()
            .join(" • ");

        Self {
            id: line.id.to_string(),
            name: product.map_or_else(String::new, |p| p.name.clone()),
            add_ons,
            quantity: line.quantity,
            unit_price: line.unit_price().to_string(),
            line_total: line.total.to_string(),
            image: product.map_or_else(String::new, |p| p.image.clone()),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub line_id: LineId,
    pub delta: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: LineId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Added-to-cart notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notice.html")]
pub struct NoticeTemplate {
    pub message: Option<String>,
}

/// Display the cart page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartShowTemplate> {
    let cart = shopper::cart(&session).await?;
    Ok(CartShowTemplate {
        cart: CartView::build(&cart, state.catalog()),
    })
}

/// Cart items fragment (HTMX refresh target).
#[instrument(skip(state, session))]
pub async fn items(State(state): State<AppState>, session: Session) -> Result<CartItemsTemplate> {
    let cart = shopper::cart(&session).await?;
    Ok(CartItemsTemplate {
        cart: CartView::build(&cart, state.catalog()),
    })
}

/// Add one unit of a product with no add-ons (HTMX).
///
/// Identical configurations merge into the existing line. Shows the
/// added-to-cart notice and returns the count badge with an HTMX trigger so
/// the rest of the page can refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .product(form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let mut cart = shopper::cart(&session).await?;
    cart.add(product, AddOnSet::new());
    shopper::save_cart(&session, &cart).await?;
    shopper::show_notice(&session, &Notice::new(ADDED_TO_CART, Utc::now())).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.item_count(),
        },
    )
        .into_response())
}

/// Adjust a line's quantity by a signed delta (HTMX).
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response> {
    let mut cart = shopper::cart(&session).await?;
    if cart.update_quantity(form.line_id, form.delta).is_none() {
        tracing::warn!(line_id = %form.line_id, "Quantity update for unknown cart line");
    }
    shopper::save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart, state.catalog()),
        },
    )
        .into_response())
}

/// Remove a line from the cart (HTMX). No confirmation step.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let mut cart = shopper::cart(&session).await?;
    cart.remove(form.line_id);
    shopper::save_cart(&session, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart, state.catalog()),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = shopper::cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

/// Get the added-to-cart notice fragment (HTMX).
///
/// Renders empty once the notice's 3-second display window has passed; a
/// newer notice replaces an older one (last wins).
#[instrument(skip(session))]
pub async fn notice(session: Session) -> Result<NoticeTemplate> {
    let message = shopper::notice(&session)
        .await?
        .filter(|n| n.is_visible(Utc::now()))
        .map(|n| n.message().to_owned());
    Ok(NoticeTemplate { message })
}
