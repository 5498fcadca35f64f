//! 产品处理器

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use super::{
    model::{ProductRequest, ProductView},
    service::ProductService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// POST /api/product
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductView>), CoreError> {
    let product = state.product_service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(ProductView::from(product))))
}

/// GET /api/product
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, CoreError> {
    let products = state.product_service.list_products().await?;
    Ok(Json(products.into_iter().map(ProductView::from).collect()))
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, CoreError> {
    state.product_service.check_health().await?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
