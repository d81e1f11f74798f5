use async_trait::async_trait;
use storefront_core::{
    replies, ActionError, ExpectedStatus, FallbackReplies, OutboundRequest, Order, Tracker,
};

use crate::action::Action;
use crate::backend::SharedBackend;

pub struct ViewMyOrders {
    backend: SharedBackend,
}

impl ViewMyOrders {
    pub const NAME: &'static str = "action_view_my_orders";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for ViewMyOrders {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::uniform("Could not fetch your orders.")
    }

    async fn reply(&self, _tracker: &Tracker) -> Result<String, ActionError> {
        let orders = fetch_orders(&self.backend, "/api/orders").await?;
        Ok(replies::my_orders(&orders))
    }
}

/// Lists every customer's orders. Access control is the backend's call.
pub struct ViewAllOrders {
    backend: SharedBackend,
}

impl ViewAllOrders {
    pub const NAME: &'static str = "action_view_all_orders";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for ViewAllOrders {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::uniform("Could not fetch admin orders.")
    }

    async fn reply(&self, _tracker: &Tracker) -> Result<String, ActionError> {
        let orders = fetch_orders(&self.backend, "/api/admin/orders").await?;
        Ok(replies::admin_orders(&orders))
    }
}

async fn fetch_orders(backend: &SharedBackend, path: &str) -> Result<Vec<Order>, ActionError> {
    let response =
        backend.send(OutboundRequest::get(path)).await?.expect_status(ExpectedStatus::AnySuccess)?;
    Ok(response.decode::<Option<Vec<Order>>>()?.unwrap_or_default())
}
