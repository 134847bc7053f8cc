//! Route definitions for the admin dashboard.

pub mod admin;
pub mod health;

use axum::{http::Uri, routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin", get(admin::index))
        .route("/admin/stats", get(admin::stats))
        .route("/admin/services", get(admin::services))
        .route("/admin/reservations", get(admin::reservations));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .merge(admin_routes)
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
