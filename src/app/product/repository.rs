//! 产品存储访问
//!
//! `ProductRepository` 只要求插入与全量查询两个操作，
//! 具体存储可以是 MongoDB 或内存实现。

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{NewProduct, Product};
use crate::core::error::CoreError;
use crate::infrastructure::database;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入一个产品，返回带有存储分配 `id` 的产品
    async fn insert(&self, product: NewProduct) -> Result<Product, CoreError>;

    /// 返回全部产品，不保证顺序
    async fn find_all(&self) -> Result<Vec<Product>, CoreError>;

    /// 检查后端是否可用
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// MongoDB 中的产品文档
#[derive(Debug, Serialize, Deserialize)]
struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    description: String,
    // BigDecimal 的 serde 实现写成十进制字符串
    price: BigDecimal,
}

impl From<NewProduct> for ProductDocument {
    fn from(product: NewProduct) -> Self {
        Self {
            id: None,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

impl ProductDocument {
    fn into_product(self) -> Result<Product, CoreError> {
        let id = self
            .id
            .ok_or_else(|| CoreError::Database("product document without _id".to_string()))?;

        Ok(Product {
            id: id.to_hex(),
            name: self.name,
            description: self.description,
            price: self.price,
        })
    }
}

/// 基于 MongoDB 集合的产品存储
#[derive(Clone)]
pub struct MongoProductRepository {
    database: Database,
    collection: Collection<ProductDocument>,
}

impl MongoProductRepository {
    pub fn new(database: Database, collection: &str) -> Self {
        let collection = database.collection(collection);
        Self {
            database,
            collection,
        }
    }

    /// 清空集合，供集成测试使用
    pub async fn clear(&self) -> Result<(), CoreError> {
        self.collection.delete_many(doc! {}, None).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product, CoreError> {
        let document = ProductDocument::from(product.clone());
        let result = self.collection.insert_one(&document, None).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| CoreError::Database("inserted _id is not an ObjectId".to_string()))?;

        Ok(product.with_id(id.to_hex()))
    }

    async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        let cursor = self.collection.find(None, None).await?;
        let documents: Vec<ProductDocument> = cursor.try_collect().await?;

        documents
            .into_iter()
            .map(ProductDocument::into_product)
            .collect()
    }

    async fn ping(&self) -> Result<(), CoreError> {
        database::ping(&self.database)
            .await
            .map_err(|e| CoreError::Unavailable(e.to_string()))
    }
}

/// 内存产品存储，按插入顺序返回
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> Result<Product, CoreError> {
        let product = product.with_id(Uuid::new_v4().to_string());
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.products.read().await.clone())
    }
}
