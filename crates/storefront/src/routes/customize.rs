//! Customization dialog route handlers (HTMX fragments).
//!
//! The dialog edits a transient draft held in the session - the cart is only
//! touched on confirm. Opening the dialog for a product starts a fresh draft;
//! opening it from a cart line copies that line's selection and remembers
//! which line it edits.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use sabrosa_core::catalog::Product;
use sabrosa_core::draft::Draft;
use sabrosa_core::notice::Notice;
use sabrosa_core::types::{AddOnId, LineId, ProductId};

use crate::error::{AppError, Result};
use crate::models::session as shopper;
use crate::routes::cart::ADDED_TO_CART;
use crate::state::AppState;

/// Product display data for the dialog header.
#[derive(Clone)]
pub struct ProductView {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
        }
    }
}

/// Add-on display data for the dialog.
#[derive(Clone)]
pub struct AddOnView {
    pub id: String,
    pub name: String,
    pub selected: bool,
    /// Displayed share of the flat fee. Cosmetic only - the charged total
    /// always comes from the flat-fee rule.
    pub share: String,
}

/// Customization dialog fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/customize.html")]
pub struct CustomizeTemplate {
    pub product: ProductView,
    pub add_ons: Vec<AddOnView>,
    /// Per-unit total for the current selection.
    pub total: String,
    pub editing: bool,
}

/// Toggle add-on form data.
#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub add_on_id: AddOnId,
}

/// Render the dialog for the current draft state.
fn dialog(state: &AppState, draft: &Draft) -> Result<CustomizeTemplate> {
    let product = state
        .catalog()
        .product(draft.product_id())
        .ok_or_else(|| AppError::NotFound(format!("product {}", draft.product_id())))?;

    let fee_share = draft.fee_share();
    let add_ons = state
        .catalog()
        .add_ons()
        .iter()
        .map(|add_on| {
            let selected = draft.is_selected(&add_on.id);
            // Mirror the dialog's price hinting: a selected add-on shows its
            // share of the flat fee, an unselected one shows the full fee
            // while nothing is picked yet, and zero once the fee is already
            // being split.
            let share = match (&fee_share, selected) {
                (Some(share), true) => share.to_string(),
                (None, _) => sabrosa_core::cart::ADD_ON_FEE.to_string(),
                (Some(_), false) => "₪0".to_string(),
            };
            AddOnView {
                id: add_on.id.to_string(),
                name: add_on.name.clone(),
                selected,
                share,
            }
        })
        .collect();

    Ok(CustomizeTemplate {
        product: ProductView::from(product),
        add_ons,
        total: draft.unit_price(product).to_string(),
        editing: draft.is_editing(),
    })
}

/// Open the customization dialog for a product (new draft, empty selection).
#[instrument(skip(state, session))]
pub async fn begin(
    State(state): State<AppState>,
    session: Session,
    Path(product_id): Path<ProductId>,
) -> Result<CustomizeTemplate> {
    if state.catalog().product(product_id).is_none() {
        return Err(AppError::NotFound(format!("product {product_id}")));
    }

    let draft = Draft::begin_new(product_id);
    shopper::save_draft(&session, &draft).await?;
    dialog(&state, &draft)
}

/// Open the customization dialog for an existing cart line (edit draft).
#[instrument(skip(state, session))]
pub async fn edit(
    State(state): State<AppState>,
    session: Session,
    Path(line_id): Path<LineId>,
) -> Result<CustomizeTemplate> {
    let cart = shopper::cart(&session).await?;
    let line = cart
        .line(line_id)
        .ok_or_else(|| AppError::NotFound(format!("cart line {line_id}")))?;

    let draft = Draft::begin_edit(line);
    shopper::save_draft(&session, &draft).await?;
    dialog(&state, &draft)
}

/// Toggle an add-on in the draft selection (HTMX).
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ToggleForm>,
) -> Result<CustomizeTemplate> {
    let mut draft = shopper::draft(&session)
        .await?
        .ok_or_else(|| AppError::BadRequest("no customization in progress".to_string()))?;

    draft.toggle(form.add_on_id);
    shopper::save_draft(&session, &draft).await?;
    dialog(&state, &draft)
}

/// Commit the draft into the cart (HTMX).
///
/// A new-mode draft behaves like a plain add, including the merge rule and
/// the added-to-cart notice. An edit-mode draft updates its target line in
/// place, preserving the line's quantity.
#[instrument(skip(state, session))]
pub async fn confirm(State(state): State<AppState>, session: Session) -> Result<Response> {
    let draft = shopper::draft(&session)
        .await?
        .ok_or_else(|| AppError::BadRequest("no customization in progress".to_string()))?;
    let product = state
        .catalog()
        .product(draft.product_id())
        .ok_or_else(|| AppError::NotFound(format!("product {}", draft.product_id())))?;

    let mut cart = shopper::cart(&session).await?;
    cart.confirm(&draft, product);
    shopper::save_cart(&session, &cart).await?;
    if !draft.is_editing() {
        shopper::show_notice(&session, &Notice::new(ADDED_TO_CART, Utc::now())).await?;
    }
    shopper::clear_draft(&session).await?;

    // Empty body clears the dialog container; the trigger refreshes the
    // count badge, notice and cart items.
    Ok((AppendHeaders([("HX-Trigger", "cart-updated")]), Html("")).into_response())
}

/// Discard the draft and close the dialog (HTMX).
#[instrument(skip(session))]
pub async fn cancel(session: Session) -> Result<Response> {
    shopper::clear_draft(&session).await?;
    Ok((StatusCode::OK, Html("")).into_response())
}
