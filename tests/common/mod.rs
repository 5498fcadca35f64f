use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use product_service::app::{
    create_routes,
    product::{handler::AppState, repository::ProductRepository, service::ProductService},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt; // for oneshot()

pub fn router_with(repository: Arc<dyn ProductRepository>) -> Router {
    let state = AppState {
        product_service: ProductService::new(repository),
    };
    create_routes(state, Duration::from_secs(5))
}

pub fn iphone_payload() -> Value {
    serde_json::json!({
        "name": "IPhone 13",
        "description": "IPhone 13",
        "price": 50000
    })
}

pub async fn post_json(app: &Router, body: String) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/product")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}
