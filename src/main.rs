use anyhow::Context;
use product_service::{
    app::{
        create_routes,
        product::{
            handler::AppState,
            repository::{InMemoryProductRepository, MongoProductRepository, ProductRepository},
            service::ProductService,
        },
    },
    config::{self, Backend},
    infrastructure::{database::DatabaseManager, logger::Logger},
};
use std::{sync::Arc, time::Duration};
use tokio::{net::TcpListener, signal};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load_config().context("加载配置失败")?;
    Logger::init(&config.logging.level);

    match config::find_config_file() {
        Some(path) => info!("从配置文件加载: {}", path),
        None => info!("未找到配置文件，使用默认配置"),
    }

    let repository: Arc<dyn ProductRepository> = match config.database.backend {
        Backend::Mongo => {
            let manager = DatabaseManager::new(&config.database).await.map_err(|e| {
                error!("Failed to initialize database: {}", e);
                e
            })?;
            Arc::new(MongoProductRepository::new(
                manager.database().clone(),
                &config.database.collection,
            ))
        }
        Backend::Memory => {
            warn!("使用内存存储，数据不会持久化");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    let state = AppState {
        product_service: ProductService::new(repository),
    };
    let app = create_routes(state, Duration::from_secs(config.http.timeout_seconds));

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Product service running on http://{}", listener.local_addr()?);
    info!("   POST   /api/product  - Create product");
    info!("   GET    /api/product  - List products");
    info!("   GET    /health       - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("监听 Ctrl-C 失败: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到停止信号，正在关闭...");
}
