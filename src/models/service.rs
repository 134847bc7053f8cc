//! Bookable lounge services (tables, rooms, game-master sessions).

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Reservation count for a single service. Services without reservations
/// are reported with a zero count.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ServiceCount {
    pub name: String,
    pub count: i64,
}
