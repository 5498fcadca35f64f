//! 产品业务服务

use std::sync::Arc;
use tracing::info;

use super::model::{NewProduct, Product, ProductRequest};
use super::repository::ProductRepository;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_product(&self, request: ProductRequest) -> Result<Product, CoreError> {
        let product = self.repository.insert(NewProduct::from(request)).await?;
        info!("product {} saved", product.id);
        Ok(product)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, CoreError> {
        self.repository.find_all().await
    }

    pub async fn check_health(&self) -> Result<(), CoreError> {
        self.repository.ping().await
    }
}
