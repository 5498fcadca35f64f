//! 数据库基础设施

use mongodb::{
    bson::doc,
    error::Error,
    options::ClientOptions,
    Client, Database,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    database: Database,
}

impl DatabaseManager {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some("product-service".to_string());
        options.max_pool_size = Some(20);
        options.min_pool_size = Some(5);
        options.connect_timeout = Some(Duration::from_secs(8));
        options.server_selection_timeout = Some(Duration::from_secs(8));

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);

        info!("MongoDB client ready, database: {}", config.name);

        Ok(Self { database })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

/// 检查数据库是否可达
pub async fn ping(database: &Database) -> Result<(), Error> {
    database.run_command(doc! { "ping": 1 }, None).await?;
    Ok(())
}
