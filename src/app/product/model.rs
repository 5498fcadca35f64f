//! 产品数据模型

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 已持久化的产品，`id` 由存储层分配
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

/// 尚未保存的产品
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
}

/// 创建产品请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    #[serde(with = "json_number")]
    pub price: BigDecimal,
}

/// 返回给客户端的产品表示
///
/// `price` 以 JSON 数字输出并保留原始精度。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "json_number")]
    pub price: BigDecimal,
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

impl NewProduct {
    pub fn with_id(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

/// 以 JSON 数字读写十进制价格，保留全部有效数字
mod json_number {
    use bigdecimal::BigDecimal;
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Number;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number = Number::from_str(&value.to_string()).map_err(ser::Error::custom)?;
        number.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        let number = Number::deserialize(deserializer)?;
        BigDecimal::from_str(&number.to_string()).map_err(de::Error::custom)
    }
}
