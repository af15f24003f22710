use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::infrastructure::config::StoreBackend;
use crate::presentation::http::dto::HealthResponseDto;

pub const SERVICE_NAME: &str = "fmro-backend";

pub fn health_routes(store: StoreBackend) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(store)
}

async fn health_handler(State(store): State<StoreBackend>) -> impl IntoResponse {
    let health_response = HealthResponseDto {
        ok: true,
        service: SERVICE_NAME.to_string(),
        store: store.as_str().to_string(),
    };

    (StatusCode::OK, Json(health_response))
}
