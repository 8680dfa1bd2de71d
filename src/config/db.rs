// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup and manage PostgreSQL connection pool

use crate::config::Config;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Creates connection pool with TLS mode from config
/// Called once during application startup in main.rs
pub async fn init_db_pool(config: &Config) -> anyhow::Result<PgPool> {
    let ssl_mode = config.ssl_mode().map_err(anyhow::Error::msg)?;
    log::info!("Initializing database pool (ssl mode: {})", config.db_ssl_mode);

    let options = PgConnectOptions::from_str(&config.database_url)?.ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(options)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}
