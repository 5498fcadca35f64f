//! 应用层

pub mod product;

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use product::handler::{create_product, health_check, list_products, AppState};

/// 创建应用路由
pub fn create_routes(state: AppState, timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/product", get(list_products).post(create_product))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
