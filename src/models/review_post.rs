use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReviewPost {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub image: String,
    pub review: f64,
    pub category: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
