// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, storage, and start HTTP server

mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use config::{Config, StoreBackend};
use db::{AdminPhotoRepository, AdminPhotoStore, MemoryStore, PhotoRepository, PhotoStore};
use dotenv::dotenv;
use handlers::upload::UploadConfig;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Configuration error")?;

    log::info!("Starting photo-service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize storage
    let (photos, admin_photos) = init_stores(&config).await?;

    let upload_config = UploadConfig::with_max_file_size(config.max_upload_bytes);
    log::info!("Upload limit: {} bytes", upload_config.max_file_size);

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            // Application state (stores and upload limits)
            .app_data(web::Data::from(photos.clone()))
            .app_data(web::Data::from(admin_photos.clone()))
            .app_data(web::Data::new(upload_config.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::photos_config)
            .configure(handlers::admin_photos_config)
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run()
    .await?;

    Ok(())
}

/// Build the store pair selected by STORE_BACKEND
async fn init_stores(
    config: &Config,
) -> anyhow::Result<(Arc<dyn PhotoStore>, Arc<dyn AdminPhotoStore>)> {
    let backend = config.backend().map_err(anyhow::Error::msg)?;

    match backend {
        StoreBackend::Memory => {
            log::info!("Using in-memory store");
            let store = Arc::new(MemoryStore::new());
            let photos: Arc<dyn PhotoStore> = store.clone();
            let admin_photos: Arc<dyn AdminPhotoStore> = store;
            Ok((photos, admin_photos))
        }
        StoreBackend::Postgres => {
            let pool = config::init_db_pool(config)
                .await
                .context("Failed to connect to database")?;

            if config.db_sync_schema {
                db::ensure_schema(&pool)
                    .await
                    .context("Failed to create tables")?;
            }

            let photos: Arc<dyn PhotoStore> = Arc::new(PhotoRepository::new(pool.clone()));
            let admin_photos: Arc<dyn AdminPhotoStore> = Arc::new(AdminPhotoRepository::new(pool));
            Ok((photos, admin_photos))
        }
    }
}
