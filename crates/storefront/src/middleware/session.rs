//! Session layer construction.
//!
//! Shopper state is held in an in-memory session store - the storefront has
//! no database and keeps no record beyond the running session.

use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Create the session management layer backed by an in-memory store.
#[must_use]
pub fn create_session_layer() -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();
    SessionManagerLayer::new(store)
        .with_name("sabrosa.sid")
        .with_secure(false)
}
