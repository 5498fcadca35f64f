//! # Product Service
//!
//! 产品微服务：通过 HTTP 创建和查询产品，数据保存在 MongoDB 中。
//!
//! - `app`：产品处理器、业务服务与存储访问
//! - `core`：统一错误处理与中间件
//! - `infrastructure`：数据库连接与日志
//! - `config`：TOML 配置与环境变量覆盖

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
