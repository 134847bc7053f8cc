//! Game catalog model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Game {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Number of games sharing one category. `None` is the uncategorized bucket.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CategoryCount {
    pub category: Option<String>,
    pub count: i64,
}
