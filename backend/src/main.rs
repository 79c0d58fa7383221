use std::sync::Arc;

use backend::routes;
use backend::service::TaskService;
use backend::store::RedisStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let store = RedisStore::new(&redis_url).expect("failed to open redis client");
    let service = TaskService::new(Arc::new(store));
    let app = routes::router(service);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind");
    tracing::info!(%bind_addr, %redis_url, "server listening");
    axum::serve(listener, app).await.expect("server error");
}
