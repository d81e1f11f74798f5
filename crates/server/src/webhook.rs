use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use storefront_actions::{ActionDispatcher, ActionResponse, DispatchError};
use storefront_core::Tracker;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

#[derive(Clone)]
pub struct WebhookState {
    dispatcher: ActionDispatcher,
}

/// Action call as sent by the dialogue engine. Other fields (`domain`, `version`) are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct WebhookRequest {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownActionBody {
    pub error: String,
    pub action_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub name: String,
}

pub fn router(dispatcher: ActionDispatcher) -> Router {
    Router::new()
        .route("/webhook", post(webhook))
        .route("/actions", get(list_actions))
        .with_state(WebhookState { dispatcher })
}

pub async fn webhook(
    State(state): State<WebhookState>,
    Json(request): Json<WebhookRequest>,
) -> Result<Json<ActionResponse>, (StatusCode, Json<UnknownActionBody>)> {
    let correlation_id = Uuid::new_v4().to_string();
    let WebhookRequest { next_action, sender_id, mut tracker } = request;
    if tracker.sender_id.is_none() {
        tracker.sender_id = sender_id;
    }

    let span = tracing::info_span!(
        "webhook",
        correlation_id = %correlation_id,
        action = %next_action
    );
    let outcome = state.dispatcher.dispatch(&next_action, &tracker).instrument(span).await;

    match outcome {
        Ok(response) => {
            info!(
                event_name = "webhook.action_dispatched",
                correlation_id = %correlation_id,
                action = %next_action,
                responses = response.responses.len(),
                "webhook action dispatched"
            );
            Ok(Json(response))
        }
        Err(error @ DispatchError::UnknownAction(_)) => {
            warn!(
                event_name = "webhook.unknown_action",
                correlation_id = %correlation_id,
                action = %next_action,
                "webhook named an unregistered action"
            );
            Err((
                StatusCode::NOT_FOUND,
                Json(UnknownActionBody { error: error.to_string(), action_name: next_action }),
            ))
        }
    }
}

pub async fn list_actions(State(state): State<WebhookState>) -> Json<Vec<ActionDescriptor>> {
    Json(
        state
            .dispatcher
            .action_names()
            .into_iter()
            .map(|name| ActionDescriptor { name })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use storefront_actions::{storefront_registry, ActionDispatcher, HttpBackend};
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    use super::router;

    async fn unreachable_backend_router() -> Router {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("reserve port");
        let address = listener.local_addr().expect("reserved address");
        drop(listener);

        let backend = HttpBackend::new(&format!("http://{address}"), Duration::from_secs(2))
            .expect("backend client");
        router(ActionDispatcher::new(storefront_registry(Arc::new(backend))))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("router should respond");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body bytes");
        let payload = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, payload)
    }

    fn post_webhook(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/webhook")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn unknown_action_answers_not_found_with_name() {
        let app = unreachable_backend_router().await;

        let (status, payload) = send(
            app,
            post_webhook(json!({"next_action": "action_order_pizza", "tracker": {"slots": {}}})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            payload,
            json!({
                "error": "No registered action found for name 'action_order_pizza'.",
                "action_name": "action_order_pizza"
            })
        );
    }

    #[tokio::test]
    async fn unreachable_backend_still_yields_one_apology() {
        let app = unreachable_backend_router().await;

        let (status, payload) = send(
            app,
            post_webhook(json!({
                "next_action": "action_view_cart",
                "sender_id": "user-1",
                "tracker": {"sender_id": "user-1", "slots": {}},
                "domain": {"intents": []},
                "version": "3.6.0"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload,
            json!({"events": [], "responses": [{"text": "Could not fetch your cart."}]})
        );
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let app = unreachable_backend_router().await;

        let (status, _) = send(app, post_webhook(json!({"tracker": {}}))).await;

        assert!(status.is_client_error(), "got {status}");
    }

    #[tokio::test]
    async fn lists_registered_actions_sorted() {
        let app = unreachable_backend_router().await;

        let (status, payload) = send(
            app,
            Request::builder().uri("/actions").body(Body::empty()).expect("request"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let names = payload
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|entry| entry["name"].as_str())
            .collect::<Vec<_>>();
        assert_eq!(names.len(), 10);
        assert_eq!(names.first(), Some(&"action_add_to_cart"));
        assert_eq!(names.last(), Some(&"action_view_my_orders"));
    }
}
