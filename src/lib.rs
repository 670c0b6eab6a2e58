pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod service;
pub mod validation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::db::SqlitePatientStore;
use crate::service::PatientService;

/// Errors that stop the process before or while serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wire store → service → router, serve until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let db_path = config::database_path()?;
    let addr = config::bind_addr()?;

    let store = SqlitePatientStore::open(&db_path)?;
    tracing::info!(path = %db_path.display(), "Patient store opened");

    let patients = PatientService::new(Arc::new(store));
    let mut server = api::start_api_server(patients, addr).await?;

    tokio::signal::ctrl_c().await?;
    server.shutdown();
    server.stopped().await;
    Ok(())
}
