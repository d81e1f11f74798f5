use async_trait::async_trait;
use serde_json::json;
use storefront_core::{
    replies, ActionError, Cart, ExpectedStatus, FallbackReplies, OutboundRequest, Quantity,
    Tracker,
};

use super::required_slot;
use crate::action::Action;
use crate::backend::SharedBackend;

const CART_UNREACHABLE: &str = "Failed to connect to the cart service.";

pub struct AddToCart {
    backend: SharedBackend,
}

impl AddToCart {
    pub const NAME: &'static str = "action_add_to_cart";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for AddToCart {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::new(
            "Could not add the item to your cart.",
            "Error connecting to the cart service.",
        )
    }

    async fn reply(&self, tracker: &Tracker) -> Result<String, ActionError> {
        let item = required_slot(tracker, "item")?;
        let quantity = Quantity::from_slot(tracker.get_slot("quantity").as_deref());

        let request = OutboundRequest::post("/api/cart")
            .json(json!({ "productId": item, "quantity": quantity }));
        self.backend.send(request).await?.expect_status(ExpectedStatus::Exactly(201))?;

        Ok(replies::item_added(&item, quantity))
    }
}

pub struct ViewCart {
    backend: SharedBackend,
}

impl ViewCart {
    pub const NAME: &'static str = "action_view_cart";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for ViewCart {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::uniform("Could not fetch your cart.")
    }

    async fn reply(&self, _tracker: &Tracker) -> Result<String, ActionError> {
        let response = self
            .backend
            .send(OutboundRequest::get("/api/cart"))
            .await?
            .expect_status(ExpectedStatus::AnySuccess)?;
        let cart = response.decode::<Option<Cart>>()?.unwrap_or_default();
        Ok(replies::cart_contents(&cart))
    }
}

pub struct RemoveFromCart {
    backend: SharedBackend,
}

impl RemoveFromCart {
    pub const NAME: &'static str = "action_remove_from_cart";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for RemoveFromCart {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::new("Could not remove the item from your cart.", CART_UNREACHABLE)
    }

    async fn reply(&self, tracker: &Tracker) -> Result<String, ActionError> {
        let item_id = required_slot(tracker, "item_id")?;
        self.backend
            .send(OutboundRequest::delete("/api/cart").segment(item_id))
            .await?
            .expect_status(ExpectedStatus::Exactly(200))?;
        Ok(replies::ITEM_REMOVED.to_owned())
    }
}

pub struct UpdateCartItem {
    backend: SharedBackend,
}

impl UpdateCartItem {
    pub const NAME: &'static str = "action_update_cart_item";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for UpdateCartItem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::new(
            "Could not update the cart item.",
            "Could not update your cart at this time.",
        )
    }

    async fn reply(&self, tracker: &Tracker) -> Result<String, ActionError> {
        let item_id = required_slot(tracker, "item_id")?;
        let quantity = Quantity::from_slot(tracker.get_slot("quantity").as_deref());

        let request = OutboundRequest::put("/api/cart")
            .segment(item_id.as_str())
            .json(json!({ "quantity": quantity }));
        self.backend.send(request).await?.expect_status(ExpectedStatus::Exactly(200))?;

        Ok(replies::item_quantity_updated(&item_id, quantity))
    }
}

pub struct ClearCart {
    backend: SharedBackend,
}

impl ClearCart {
    pub const NAME: &'static str = "action_clear_cart";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for ClearCart {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::new("Could not clear your cart.", CART_UNREACHABLE)
    }

    async fn reply(&self, _tracker: &Tracker) -> Result<String, ActionError> {
        self.backend
            .send(OutboundRequest::delete("/api/cart/clear"))
            .await?
            .expect_status(ExpectedStatus::Exactly(200))?;
        Ok(replies::CART_CLEARED.to_owned())
    }
}
