mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use product_service::{
    app::product::{
        model::{NewProduct, Product},
        repository::{InMemoryProductRepository, ProductRepository},
    },
    core::error::CoreError,
};
use serde_json::{json, Value};
use std::sync::Arc;

use common::{get, iphone_payload, post_json, router_with};

struct UnreachableRepository;

#[async_trait]
impl ProductRepository for UnreachableRepository {
    async fn insert(&self, _product: NewProduct) -> Result<Product, CoreError> {
        Err(CoreError::Database("connection refused".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        Err(CoreError::Database("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), CoreError> {
        Err(CoreError::Unavailable("connection refused".to_string()))
    }
}

#[tokio::test]
async fn should_create_product() {
    let repository = Arc::new(InMemoryProductRepository::new());
    let app = router_with(repository.clone());

    let (status, body) = post_json(&app, iphone_payload().to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let created: Value = serde_json::from_slice(&body).unwrap();
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(created["name"], "IPhone 13");

    assert_eq!(repository.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_get_all_products() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));

    let (status, _) = post_json(&app, iphone_payload().to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/product").await;
    assert_eq!(status, StatusCode::OK);

    let products: Value = serde_json::from_slice(&body).unwrap();
    assert!(products.is_array());
    assert_eq!(products.as_array().unwrap().len(), 1);
    assert!(products[0]["id"].is_string());
    assert_eq!(products[0]["name"], "IPhone 13");
    assert_eq!(products[0]["description"], "IPhone 13");
    assert_eq!(products[0]["price"], json!(50000));
}

#[tokio::test]
async fn empty_store_lists_empty_array() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));

    let (status, body) = get(&app, "/api/product").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn duplicate_posts_create_two_products() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));

    post_json(&app, iphone_payload().to_string()).await;
    post_json(&app, iphone_payload().to_string()).await;

    let (_, body) = get(&app, "/api/product").await;
    let products: Value = serde_json::from_slice(&body).unwrap();
    let products = products.as_array().unwrap();

    assert_eq!(products.len(), 2);
    assert_ne!(products[0]["id"], products[1]["id"]);
}

#[tokio::test]
async fn fractional_price_is_returned_unchanged() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));

    let payload = json!({ "name": "Case", "description": "Leather", "price": 19.99 });
    post_json(&app, payload.to_string()).await;

    let (_, body) = get(&app, "/api/product").await;
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("\"price\":19.99"), "unexpected body: {}", text);
}

#[tokio::test]
async fn long_prices_keep_every_digit() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));

    for price in [
        "0.1234567890123456789012345678901",
        "123456789012345678901234567890",
    ] {
        let body = format!(r#"{{"name":"Bond","description":"Bond","price":{}}}"#, price);
        let (status, _) = post_json(&app, body).await;
        assert_eq!(status, StatusCode::CREATED, "price {} was rejected", price);
    }

    let (_, body) = get(&app, "/api/product").await;
    let text = String::from_utf8(body).unwrap();
    assert!(
        text.contains(r#""price":0.1234567890123456789012345678901"#),
        "unexpected body: {}",
        text
    );
    assert!(
        text.contains(r#""price":123456789012345678901234567890"#),
        "unexpected body: {}",
        text
    );
}

#[tokio::test]
async fn malformed_json_is_client_error() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));

    let (status, _) = post_json(&app, "{\"name\": ".to_string()).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn missing_field_is_client_error() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));

    let payload = json!({ "name": "IPhone 13", "description": "IPhone 13" });
    let (status, _) = post_json(&app, payload.to_string()).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn store_failure_is_server_error() {
    let app = router_with(Arc::new(UnreachableRepository));

    let (status, body) = post_json(&app, iphone_payload().to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "DATABASE_ERROR");
    assert_eq!(error["code"], 500);

    let (status, _) = get(&app, "/api/product").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_backend_state() {
    let app = router_with(Arc::new(InMemoryProductRepository::new()));
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap()["status"], "healthy");

    let app = router_with(Arc::new(UnreachableRepository));
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!String::from_utf8(body).unwrap().contains("connection refused"));
}
