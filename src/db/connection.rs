use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;

/// Opens the shared pool. Tables are expected to exist already.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(cfg.connect_timeout())
        .acquire_timeout(cfg.connect_timeout())
        .sqlx_logging(cfg.sqlx_logging);

    let db = Database::connect(options).await?;
    db.ping().await?;
    info!(
        max_connections = cfg.max_connections,
        min_idle = cfg.min_idle,
        "connected to PostgreSQL"
    );
    Ok(db)
}
