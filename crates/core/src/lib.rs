//! Sabrosa Core - Catalog, cart and pricing engine.
//!
//! This crate holds everything the storefront needs to price and assemble an
//! order:
//!
//! - [`catalog`] - The fixed product and add-on catalog supplied at startup
//! - [`cart`] - Cart lines, the configuration merge key, and price rules
//! - [`draft`] - The in-progress customization dialog state
//! - [`notice`] - The transient added-to-cart confirmation
//! - [`order`] - Rendering the cart as a WhatsApp order message
//! - [`types`] - Newtype wrappers for IDs and prices
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O, no
//! HTTP, no clock access (callers inject timestamps). This keeps every cart
//! operation deterministic and unit-testable, and lets the storefront own all
//! presentation and transport concerns.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod draft;
pub mod notice;
pub mod order;
pub mod types;

pub use types::*;
