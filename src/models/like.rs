use chrono::{DateTime, Utc};
use serde::Serialize;

// One row per (post_id, user_id); post_user_id is the liked post's author,
// carried so a like can be removed by (liker, author) without fetching its id.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Like {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub post_user_id: i32,
    pub created_at: DateTime<Utc>,
}
