pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

/// Static service metadata: name, version, and the routes worth knowing about.
pub async fn home() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "message": "API de Produtos - CI/CD Demo",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": ["/produtos", "/produtos/{id}", "/health"],
        })),
    )
}

/// Liveness probe. Always 200 while the process is up.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
