//! 产品应用：创建与查询产品

pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
