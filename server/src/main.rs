use std::sync::Arc;

use todo_core::TodoStore;
use todo_server::config::Config;
use todo_server::Db;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_server=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env();
    let db: Db = Arc::new(RwLock::new(TodoStore::seeded(config.id_mode)));

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, id_mode = ?config.id_mode, "todo API listening");
    todo_server::run(listener, db).await
}
