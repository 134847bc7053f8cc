//! Admin dashboard pages and the chart data behind them.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::chart::ChartSeries;
use crate::services::dashboard::{self, DashboardStats, StatsFilter};
use crate::AppState;

#[derive(Template)]
#[template(path = "admin_dashboard/index.html")]
struct DashboardTemplate {
    year: Option<i32>,
    games: ChartSeries,
    reservations: ChartSeries,
    services: ChartSeries,
    games_json: String,
    reservations_json: String,
    services_json: String,
}

impl DashboardTemplate {
    fn new(stats: DashboardStats, year: Option<i32>) -> Result<Self, AppError> {
        Ok(Self {
            year,
            games_json: stats.games.to_script_json()?,
            reservations_json: stats.reservations.to_script_json()?,
            services_json: stats.services.to_script_json()?,
            games: stats.games,
            reservations: stats.reservations,
            services: stats.services,
        })
    }
}

#[derive(Template)]
#[template(path = "admin_dashboard/services/index.html")]
struct ServicesTemplate;

#[derive(Template)]
#[template(path = "admin_dashboard/reservations/index.html")]
struct ReservationsTemplate;

/// GET /admin — dashboard with games, reservations and services charts.
pub async fn index(
    State(state): State<AppState>,
    Query(filter): Query<StatsFilter>,
) -> Result<Html<String>, AppError> {
    let stats =
        dashboard::get_stats(state.dashboard.as_ref(), state.config.month_bucketing, filter)
            .await?;
    let page = DashboardTemplate::new(stats, filter.year)?;
    Ok(Html(page.render()?))
}

/// GET /admin/stats — the dashboard chart series as JSON.
pub async fn stats(
    State(state): State<AppState>,
    Query(filter): Query<StatsFilter>,
) -> Result<Json<ApiResponse<DashboardStats>>, AppError> {
    let stats =
        dashboard::get_stats(state.dashboard.as_ref(), state.config.month_bucketing, filter)
            .await?;
    Ok(ApiResponse::success(stats))
}

/// GET /admin/services — services list page.
pub async fn services() -> Result<Html<String>, AppError> {
    Ok(Html(ServicesTemplate.render()?))
}

/// GET /admin/reservations — reservations list page.
pub async fn reservations() -> Result<Html<String>, AppError> {
    Ok(Html(ReservationsTemplate.render()?))
}
