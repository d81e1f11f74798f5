//! Storefront core: configuration, conversation state, backend wire shapes
//! and the reply templates shared by every storefront action.

pub mod backend;
pub mod config;
pub mod domain;
pub mod errors;
pub mod replies;

pub use backend::{BackendResponse, ExpectedStatus, HttpMethod, OutboundRequest};
pub use domain::cart::{Cart, Quantity, DEFAULT_QUANTITY};
pub use domain::catalog::{ProductDetail, ProductSummary};
pub use domain::conversation::Tracker;
pub use domain::order::{CheckoutSession, Order};
pub use domain::scalar::DisplayValue;
pub use errors::{ActionError, FallbackReplies};
