//! Session-held shopper state.
//!
//! The session *is* the store: the cart, the in-progress customization draft
//! and the added-to-cart notice are serialized whole into the visitor's
//! session. Each request loads, mutates and saves back, so every cart
//! operation is atomic with respect to the session's own request sequence.

use tower_sessions::Session;

use sabrosa_core::cart::Cart;
use sabrosa_core::draft::Draft;
use sabrosa_core::notice::Notice;

use crate::error::Result;

/// Session keys for shopper state.
pub mod keys {
    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for the in-progress customization draft.
    pub const DRAFT: &str = "draft";

    /// Key for the transient added-to-cart notice.
    pub const NOTICE: &str = "notice";
}

/// Load the session's cart, or an empty one for a fresh session.
pub async fn cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Persist the cart back into the session.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Load the in-progress customization draft, if any.
pub async fn draft(session: &Session) -> Result<Option<Draft>> {
    Ok(session.get::<Draft>(keys::DRAFT).await?)
}

/// Persist the customization draft.
pub async fn save_draft(session: &Session, draft: &Draft) -> Result<()> {
    session.insert(keys::DRAFT, draft).await?;
    Ok(())
}

/// Discard the customization draft (dialog closed or confirmed).
pub async fn clear_draft(session: &Session) -> Result<()> {
    session.remove::<Draft>(keys::DRAFT).await?;
    Ok(())
}

/// Load the current notice, if one has been shown.
pub async fn notice(session: &Session) -> Result<Option<Notice>> {
    Ok(session.get::<Notice>(keys::NOTICE).await?)
}

/// Show a notice. A newer notice simply replaces the previous one
/// (last wins).
pub async fn show_notice(session: &Session, notice: &Notice) -> Result<()> {
    session.insert(keys::NOTICE, notice).await?;
    Ok(())
}
