use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

// Requester identity resolved by the transport layer (x-user-id header).
// Only the id travels with the request; rows are looked up on demand.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: i32,
}
