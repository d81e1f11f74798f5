//! Storefront Actions - custom action handlers for a conversational agent
//!
//! Every handler turns one recognized intent into exactly one backend call and
//! exactly one plain-text reply:
//! - **Action** (`action`) - the handler contract and its shared run template
//! - **Dispatch** (`dispatcher`) - name → handler registry and per-call output collection
//! - **Backend** (`backend`) - the `StorefrontBackend` seam and its HTTP implementation
//! - **Handlers** (`handlers`) - products, cart, checkout and orders intents
//!
//! # Architecture
//!
//! ```text
//! Host framework → ActionDispatcher → Action::run → StorefrontBackend
//!                        ↓                 ↓
//!                  ActionResponse ← CollectingDispatcher
//! ```
//!
//! # Failure Principle
//!
//! A handler never fails past its boundary. Internally failures are an
//! [`ActionError`](storefront_core::ActionError); at the boundary they collapse
//! into the handler's fixed apology.

pub mod action;
pub mod backend;
pub mod dispatcher;
pub mod handlers;
pub mod output;

#[cfg(test)]
pub(crate) mod testing;

pub use action::Action;
pub use backend::{BackendSetupError, HttpBackend, SharedBackend, StorefrontBackend};
pub use dispatcher::{ActionDispatcher, ActionRegistry, ActionResponse, DispatchError};
pub use handlers::storefront_registry;
pub use output::{BotMessage, CollectingDispatcher, OutputChannel};
