use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    models::{CreateProduct, Product},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let catalog = state.catalog.read().await;
    info!(count = catalog.len(), "Listed products");
    Json(catalog.list().to_vec())
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> AppResult<Json<Product>> {
    let catalog = state.catalog.read().await;
    match catalog.get(id) {
        Some(product) => {
            info!(id, "Fetched product");
            Ok(Json(product.clone()))
        }
        None => {
            warn!(id, "Product not found");
            Err(AppError::product_not_found())
        }
    }
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProduct>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    // Malformed bodies (including a non-numeric `preco`) get the same 400 as
    // missing fields instead of surfacing as a 5xx.
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejected malformed product payload");
        AppError::invalid_data()
    })?;

    let name = match payload.name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(AppError::invalid_data()),
    };
    let price = payload.price.ok_or_else(AppError::invalid_data)?;
    if price < 0.0 {
        return Err(AppError::invalid_data());
    }
    let stock = payload.stock.unwrap_or(0);

    let product = state.catalog.write().await.create(name, price, stock);
    info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}
