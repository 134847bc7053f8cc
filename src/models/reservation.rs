//! Reservation model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub reservation_date: NaiveDate,
    pub service_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Number of reservations booked on one exact date.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DateCount {
    pub count: i64,
    pub reservation_date: NaiveDate,
}
