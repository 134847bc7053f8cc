//! Admin dashboard statistics: the aggregate query port and its orchestration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::config::MonthBucketing;
use crate::errors::AppError;
use crate::models::chart::ChartSeries;
use crate::models::game::CategoryCount;
use crate::models::reservation::DateCount;
use crate::models::service::ServiceCount;
use crate::services::summary;

/// The three chart series shown on the admin overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub games: ChartSeries,
    pub reservations: ChartSeries,
    pub services: ChartSeries,
}

/// Optional narrowing of the dashboard data.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StatsFilter {
    /// Only count reservations dated in this calendar year.
    pub year: Option<i32>,
}

impl StatsFilter {
    pub fn validate(&self) -> Result<(), AppError> {
        match self.year {
            Some(year) if !(1..=9999).contains(&year) => Err(AppError::Validation(format!(
                "year must be between 1 and 9999, got {year}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Grouped aggregate queries backing the dashboard.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Game count per category, one row per distinct category.
    async fn count_games_by_category(&self) -> Result<Vec<CategoryCount>, AppError>;

    /// Reservation count per exact date, optionally limited to one year.
    async fn count_reservations_by_date(&self, year: Option<i32>)
        -> Result<Vec<DateCount>, AppError>;

    /// Reservation count per service, including services with none.
    async fn count_reservations_by_service(&self) -> Result<Vec<ServiceCount>, AppError>;
}

/// PostgreSQL-backed dashboard queries.
#[derive(Debug, Clone)]
pub struct PgDashboardRepository {
    pool: PgPool,
}

impl PgDashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for PgDashboardRepository {
    async fn count_games_by_category(&self) -> Result<Vec<CategoryCount>, AppError> {
        let rows = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT category, COUNT(id) AS count
            FROM games
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_reservations_by_date(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<DateCount>, AppError> {
        let rows = sqlx::query_as::<_, DateCount>(
            r#"
            SELECT COUNT(id) AS count, reservation_date
            FROM reservations
            WHERE $1::int IS NULL OR EXTRACT(YEAR FROM reservation_date)::int = $1
            GROUP BY reservation_date
            ORDER BY reservation_date
            "#,
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_reservations_by_service(&self) -> Result<Vec<ServiceCount>, AppError> {
        let rows = sqlx::query_as::<_, ServiceCount>(
            r#"
            SELECT s.name, COUNT(r.id) AS count
            FROM services s
            LEFT JOIN reservations r ON r.service_id = s.id
            GROUP BY s.id, s.name
            ORDER BY s.name, s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Run the three aggregate queries and shape them into chart series.
///
/// The queries are independent and run concurrently; the first failure
/// fails the whole dashboard.
pub async fn get_stats(
    repo: &dyn DashboardRepository,
    bucketing: MonthBucketing,
    filter: StatsFilter,
) -> Result<DashboardStats, AppError> {
    filter.validate()?;

    let (games, reservations, services) = tokio::try_join!(
        repo.count_games_by_category(),
        repo.count_reservations_by_date(filter.year),
        repo.count_reservations_by_service(),
    )?;

    tracing::debug!(
        categories = games.len(),
        reservation_dates = reservations.len(),
        services = services.len(),
        ?bucketing,
        year = ?filter.year,
        "Dashboard aggregates fetched"
    );

    Ok(DashboardStats {
        games: summary::summarize_by_category(&games),
        reservations: summary::summarize_by_month(&reservations, bucketing),
        services: summary::summarize_by_service(&services),
    })
}
