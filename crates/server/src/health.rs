use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use storefront_actions::HttpBackend;

#[derive(Clone)]
pub struct HealthState {
    backend: HttpBackend,
}

impl HealthState {
    pub fn new(backend: HttpBackend) -> Self {
        Self { backend }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub backend: HealthCheck,
    pub checked_at: String,
}

pub fn router(backend: HttpBackend) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState::new(backend))
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let backend = backend_check(&state.backend).await;
    let ready = backend.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "storefront action server initialized".to_string(),
        },
        backend,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

async fn backend_check(backend: &HttpBackend) -> HealthCheck {
    match backend.probe().await {
        Ok(status) => HealthCheck {
            status: "ready",
            detail: format!("backend {} answered with status {status}", backend.base_url()),
        },
        Err(error) => HealthCheck {
            status: "degraded",
            detail: format!("backend {} unreachable: {error}", backend.base_url()),
        },
    }
}
