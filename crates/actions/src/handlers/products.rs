use async_trait::async_trait;
use storefront_core::{
    replies, ActionError, ExpectedStatus, FallbackReplies, OutboundRequest, ProductDetail,
    ProductSummary, Tracker,
};

use super::required_slot;
use crate::action::Action;
use crate::backend::SharedBackend;

pub struct GetAllProducts {
    backend: SharedBackend,
}

impl GetAllProducts {
    pub const NAME: &'static str = "action_get_all_products";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for GetAllProducts {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::uniform("Failed to fetch products. Please try again later.")
    }

    async fn reply(&self, _tracker: &Tracker) -> Result<String, ActionError> {
        let response = self
            .backend
            .send(OutboundRequest::get("/api/products"))
            .await?
            .expect_status(ExpectedStatus::AnySuccess)?;
        let products = response.decode::<Option<Vec<ProductSummary>>>()?;
        Ok(replies::product_list(products.as_deref().unwrap_or_default()))
    }
}

pub struct GetProductById {
    backend: SharedBackend,
}

impl GetProductById {
    pub const NAME: &'static str = "action_get_product_by_id";

    pub fn new(backend: SharedBackend) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl Action for GetProductById {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn fallback(&self) -> FallbackReplies {
        FallbackReplies::uniform("Could not fetch product details.")
            .with_not_found("Product not found.")
    }

    async fn reply(&self, tracker: &Tracker) -> Result<String, ActionError> {
        let product_id = required_slot(tracker, "product_id")?;
        let response = self
            .backend
            .send(OutboundRequest::get("/api/products").segment(product_id))
            .await?
            .expect_status(ExpectedStatus::AnySuccess)?;
        Ok(replies::product_detail(&response.decode::<ProductDetail>()?))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use storefront_core::{ActionError, BackendResponse, HttpMethod, Tracker};

    use super::{GetAllProducts, GetProductById};
    use crate::action::Action;
    use crate::testing::{connection_refused, single_reply, ScriptedBackend};

    #[tokio::test]
    async fn lists_products_with_prices() {
        let backend = Arc::new(ScriptedBackend::new().replying(BackendResponse::from_json(
            200,
            &json!([
                {"_id": "p1", "name": "Shoes", "price": 999, "countInStock": 4},
                {"_id": "p2", "name": "Socks", "price": 49.5}
            ]),
        )));
        let action = GetAllProducts::new(backend.clone());

        let reply = single_reply(&action, &Tracker::new("u1")).await;

        assert_eq!(reply, "Here are some products:\n- Shoes (₹999)\n- Socks (₹49.5)");
        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].path(), "/api/products");
    }

    #[tokio::test]
    async fn empty_or_null_listing_reports_no_products() {
        for body in [json!([]), json!(null)] {
            let backend =
                Arc::new(ScriptedBackend::new().replying(BackendResponse::from_json(200, &body)));
            let reply = single_reply(&GetAllProducts::new(backend), &Tracker::default()).await;
            assert_eq!(reply, "No products found.");
        }
    }

    #[tokio::test]
    async fn listing_failures_degrade_to_one_apology() {
        let cases = [
            ScriptedBackend::new().failing(connection_refused()),
            ScriptedBackend::new().replying(BackendResponse::new(500, "boom")),
            ScriptedBackend::new().replying(BackendResponse::new(200, "<html></html>")),
            ScriptedBackend::new().replying(BackendResponse::from_json(200, &json!([{"id": 1}]))),
        ];

        for backend in cases {
            let action = GetAllProducts::new(Arc::new(backend));
            let reply = single_reply(&action, &Tracker::default()).await;
            assert_eq!(reply, "Failed to fetch products. Please try again later.");
        }
    }

    #[tokio::test]
    async fn shows_product_details() {
        let backend = Arc::new(ScriptedBackend::new().replying(BackendResponse::from_json(
            200,
            &json!({
                "name": "Shoes",
                "description": "Trail runners",
                "price": 999,
                "countInStock": 7
            }),
        )));
        let action = GetProductById::new(backend.clone());

        let reply = single_reply(&action, &Tracker::new("u1").with_slot("product_id", "p-9")).await;

        assert_eq!(reply, "Shoes: Trail runners\nPrice: ₹999\nStock: 7");
        assert_eq!(backend.requests()[0].path(), "/api/products/p-9");
    }

    #[tokio::test]
    async fn fractional_stock_count_is_shown_as_sent() {
        let backend = Arc::new(ScriptedBackend::new().replying(BackendResponse::from_json(
            200,
            &json!({"name": "A", "description": "d", "price": 5, "countInStock": 3.0}),
        )));

        let tracker = Tracker::new("u1").with_slot("product_id", "p-1");
        let reply = single_reply(&GetProductById::new(backend), &tracker).await;

        assert_eq!(reply, "A: d\nPrice: ₹5\nStock: 3.0");
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let backend = Arc::new(ScriptedBackend::new().replying(BackendResponse::from_json(
            404,
            &json!({"message": "Product not found"}),
        )));

        let tracker = Tracker::new("u1").with_slot("product_id", "nope");
        let reply = single_reply(&GetProductById::new(backend), &tracker).await;

        assert_eq!(reply, "Product not found.");
    }

    #[tokio::test]
    async fn product_detail_failures_share_generic_text() {
        let tracker = Tracker::new("u1").with_slot("product_id", "p-1");
        for backend in [
            ScriptedBackend::new().failing(connection_refused()),
            ScriptedBackend::new().replying(BackendResponse::new(500, "")),
            ScriptedBackend::new().replying(BackendResponse::from_json(200, &json!({"name": "x"}))),
        ] {
            let reply = single_reply(&GetProductById::new(Arc::new(backend)), &tracker).await;
            assert_eq!(reply, "Could not fetch product details.");
        }
    }

    #[tokio::test]
    async fn missing_product_id_skips_the_backend() {
        let backend = Arc::new(ScriptedBackend::new());
        let action = GetProductById::new(backend.clone());

        assert_eq!(
            action.reply(&Tracker::new("u1")).await,
            Err(ActionError::MissingSlot("product_id"))
        );
        assert_eq!(
            single_reply(&action, &Tracker::new("u1")).await,
            "Could not fetch product details."
        );
        assert!(backend.requests().is_empty());
    }
}
