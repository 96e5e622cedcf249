//! Duplicate-like guard: at most one like per (post, user) pair.

use crate::db::{self, StoreError};
use crate::views;
use sqlx::PgPool;

/// The lookup gives the fast, friendly rejection; the unique index on
/// likes(post_id, user_id) closes the race between two identical
/// concurrent requests, surfacing as Duplicate either way.
pub async fn create_like(
    pool: &PgPool,
    post_id: i32,
    user_id: i32,
    post_user_id: i32,
) -> Result<views::LikeResponse, StoreError> {
    if db::like::fetch_by_post_and_user(pool, post_id, user_id)
        .await?
        .is_some()
    {
        return Err(StoreError::Duplicate);
    }

    let like = db::like::insert(pool, post_id, user_id, post_user_id).await?;
    Ok(like.into())
}

pub async fn delete_like(pool: &PgPool, user_id: i32, post_user_id: i32) -> Result<(), StoreError> {
    db::like::delete_by_author(pool, user_id, post_user_id).await
}

pub async fn my_like_count(pool: &PgPool, user_id: i32) -> Result<i64, StoreError> {
    db::like::count_by_user(pool, user_id).await
}
