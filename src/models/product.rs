use chrono::{DateTime, Utc};
use serde::Serialize;

// A time-limited purchase intent; time_limit is the column all
// time-window queries operate over.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub stock: bool,
    pub price: i64,
    pub review: f64,
    pub url: String,
    pub image: String,
    pub code: String,
    pub provider: String,
    pub time_limit: DateTime<Utc>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}
