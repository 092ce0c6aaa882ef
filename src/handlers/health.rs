use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "message": "Journal App AI Backend is running",
        "service": "journal-ai-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
