//! Order handoff to WhatsApp.
//!
//! Submitting an order means building the order message for the current cart
//! and redirecting to a `wa.me` deep link with the text percent-encoded. No
//! response is awaited and no delivery confirmation exists; if the host
//! environment cannot open the link, that failure is invisible here.

use axum::extract::State;
use axum::response::Redirect;
use tower_sessions::Session;
use tracing::instrument;

use sabrosa_core::order::order_message;

use crate::error::Result;
use crate::models::session as shopper;
use crate::state::AppState;

/// Redirect to the prefilled WhatsApp order message.
#[instrument(skip(state, session))]
pub async fn whatsapp(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let cart = shopper::cart(&session).await?;
    let message = order_message(&cart, state.catalog());
    let url = format!(
        "https://wa.me/{}?text={}",
        state.config().order_phone,
        urlencoding::encode(&message)
    );

    tracing::info!(
        items = cart.item_count(),
        total = %cart.total_price(),
        "Handing order off to WhatsApp"
    );
    Ok(Redirect::to(&url))
}
