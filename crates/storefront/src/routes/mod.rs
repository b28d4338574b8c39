//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Storefront page (hero, story, menu, contact)
//! GET  /health                  - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart                    - Cart page
//! GET  /cart/items              - Cart items fragment
//! POST /cart/add                - Add one unit of a product (returns count badge)
//! POST /cart/update             - Adjust a line's quantity (returns cart_items fragment)
//! POST /cart/remove             - Remove a line (returns cart_items fragment)
//! GET  /cart/count              - Cart count badge (fragment)
//! GET  /cart/notice             - Added-to-cart notice (fragment)
//! GET  /cart/{line_id}/edit     - Open the customization dialog for a line
//!
//! # Customization dialog (HTMX fragments)
//! GET  /customize/{product_id}  - Open the dialog for a product
//! POST /customize/toggle        - Toggle an add-on in the draft
//! POST /customize/confirm       - Commit the draft into the cart
//! POST /customize/cancel        - Discard the draft
//!
//! # Order handoff
//! GET  /order/whatsapp          - Redirect to the prefilled WhatsApp message
//! ```

pub mod cart;
pub mod customize;
pub mod home;
pub mod order;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
        .route("/notice", get(cart::notice))
        .route("/{line_id}/edit", get(customize::edit))
}

/// Create the customization dialog routes router.
pub fn customize_routes() -> Router<AppState> {
    Router::new()
        .route("/{product_id}", get(customize::begin))
        .route("/toggle", post(customize::toggle))
        .route("/confirm", post(customize::confirm))
        .route("/cancel", post(customize::cancel))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Storefront page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Customization dialog
        .nest("/customize", customize_routes())
        // Order handoff
        .route("/order/whatsapp", get(order::whatsapp))
}
