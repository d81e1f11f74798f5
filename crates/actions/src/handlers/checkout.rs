use async_trait::async_trait;
use storefront_core::{
    replies, ActionError, CheckoutSession, ExpectedStatus, FallbackReplies, OutboundRequest,
    Tracker,
};

use crate::action::Action;
use crate::backend::SharedBackend;

/// Starts payment for the current cart. The backend owns the cart, so the request has no body.
pub struct Checkout {
    backend: SharedBackend,
}

impl Checkout {
    pub const NAME: &'static str = "action_checkout";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for Checkout {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::uniform("Checkout failed. Please try again later.")
    }

    async fn reply(&self, _tracker: &Tracker) -> Result<String, ActionError> {
        let response = self
            .backend
            .send(OutboundRequest::post("/api/checkout"))
            .await?
            .expect_status(ExpectedStatus::AnySuccess)?;
        let session = response.decode::<Option<CheckoutSession>>()?.unwrap_or_default();
        Ok(replies::checkout_link(&session))
    }
}
