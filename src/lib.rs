pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::dashboard::{DashboardRepository, PgDashboardRepository};

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: config::AppConfig,
    pub dashboard: Arc<dyn DashboardRepository>,
}

impl AppState {
    /// State backed by PostgreSQL for every query.
    pub fn new(db: PgPool, config: config::AppConfig) -> Self {
        Self {
            dashboard: Arc::new(PgDashboardRepository::new(db.clone())),
            db,
            config,
        }
    }
}
