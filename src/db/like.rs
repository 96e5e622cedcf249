use crate::db::{PageParams, Paginated, StoreError};
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

// The unique index on (post_id, user_id) is the backstop for two identical
// concurrent inserts; the resulting 23505 classifies as Duplicate.
pub async fn insert(
    pool: &PgPool,
    post_id: i32,
    user_id: i32,
    post_user_id: i32,
) -> Result<models::Like, StoreError> {
    let query_span = tracing::info_span!("Saving new like into the database");
    sqlx::query_as::<_, models::Like>(
        r#"
        INSERT INTO likes (post_id, user_id, post_user_id)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(post_user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert like, error: {:?}", err);
        err.into()
    })
}

// Keyed by (liker, post author) rather than post id; the delete route
// exposes exactly this pair.
pub async fn delete_by_author(
    pool: &PgPool,
    user_id: i32,
    post_user_id: i32,
) -> Result<(), StoreError> {
    let query_span = tracing::info_span!("Deleting like.");
    let result = sqlx::query("DELETE FROM likes WHERE user_id=$1 AND post_user_id=$2")
        .bind(user_id)
        .bind(post_user_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete like, error: {:?}", err);
            StoreError::from(err)
        })?;

    if result.rows_affected() < 1 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub async fn fetch_by_post_and_user(
    pool: &PgPool,
    post_id: i32,
    user_id: i32,
) -> Result<Option<models::Like>, StoreError> {
    let query_span = tracing::info_span!("Search for existing like.");
    sqlx::query_as::<_, models::Like>(
        "SELECT * FROM likes WHERE post_id=$1 AND user_id=$2 LIMIT 1",
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch like, error: {:?}", err);
        err.into()
    })
}

pub async fn count_by_post(pool: &PgPool, post_id: i32) -> Result<i64, StoreError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id=$1")
        .bind(post_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count likes, error: {:?}", err);
            err.into()
        })
}

pub async fn count_by_user(pool: &PgPool, user_id: i32) -> Result<i64, StoreError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE user_id=$1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count likes by user, error: {:?}", err);
            err.into()
        })
}

/// Page of the requester's own likes, most recent first. Feeds the
/// liked-posts listing.
pub async fn fetch_page_by_user(
    pool: &PgPool,
    user_id: i32,
    page: PageParams,
) -> Result<Paginated<models::Like>, StoreError> {
    let query_span = tracing::info_span!("Fetch likes by user id.");

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE user_id=$1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count likes by user, error: {:?}", err);
            StoreError::from(err)
        })?;

    let rows = sqlx::query_as::<_, models::Like>(
        r#"
        SELECT * FROM likes
        WHERE user_id=$1
        ORDER BY created_at DESC
        OFFSET $2 LIMIT $3
        "#,
    )
    .bind(user_id)
    .bind(page.offset())
    .bind(page.limit())
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch likes, error: {:?}", err);
        StoreError::from(err)
    })?;

    Ok(Paginated { rows, total })
}
