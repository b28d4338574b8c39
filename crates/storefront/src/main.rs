//! Sabrosa Storefront - server-rendered bakery storefront.
//!
//! This binary serves the public storefront on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - Fixed catalog and site content loaded from a JSON file at startup
//! - Cart, customization draft and notices held in the visitor's session
//!   (in-memory store - there is no database and no server-side order record)
//!
//! Order submission hands the cart off as a prefilled WhatsApp message;
//! payment is arranged out-of-band.

#![cfg_attr(not(test), forbid(unsafe_code))]

use sabrosa_storefront::config::StorefrontConfig;
use sabrosa_storefront::content::StoreContent;
use sabrosa_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sabrosa_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the fixed catalog and site content
    let content =
        StoreContent::load(&config.content_path).expect("Failed to load store content");
    tracing::info!(
        products = content.catalog.products().len(),
        add_ons = content.catalog.add_ons().len(),
        "Store content loaded"
    );

    // Build application state and router
    let addr = config.socket_addr();
    let state = AppState::new(config, content);
    let app = sabrosa_storefront::app(state);

    // Start server
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
