//! The ten storefront intents, grouped by backend resource.

mod cart;
mod checkout;
mod orders;
mod products;

pub use cart::{AddToCart, ClearCart, RemoveFromCart, UpdateCartItem, ViewCart};
pub use checkout::Checkout;
pub use orders::{ViewAllOrders, ViewMyOrders};
pub use products::{GetAllProducts, GetProductById};

use storefront_core::{ActionError, Tracker};

use crate::backend::SharedBackend;
use crate::dispatcher::ActionRegistry;

pub fn storefront_registry(backend: SharedBackend) -> ActionRegistry {
    let mut registry = ActionRegistry::default();
    registry.register(GetAllProducts::new(backend.clone()));
    registry.register(GetProductById::new(backend.clone()));
    registry.register(AddToCart::new(backend.clone()));
    registry.register(ViewCart::new(backend.clone()));
    registry.register(RemoveFromCart::new(backend.clone()));
    registry.register(UpdateCartItem::new(backend.clone()));
    registry.register(ClearCart::new(backend.clone()));
    registry.register(Checkout::new(backend.clone()));
    registry.register(ViewMyOrders::new(backend.clone()));
    registry.register(ViewAllOrders::new(backend));
    registry
}

fn required_slot(tracker: &Tracker, name: &'static str) -> Result<String, ActionError> {
    tracker.get_slot(name).ok_or(ActionError::MissingSlot(name))
}
