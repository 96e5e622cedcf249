use crate::db::{PageParams, Paginated, StoreError};
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(
    pool: &PgPool,
    post_id: i32,
    user_id: i32,
    text: &str,
) -> Result<models::Comment, StoreError> {
    let query_span = tracing::info_span!("Saving new comment into the database");
    sqlx::query_as::<_, models::Comment>(
        r#"
        INSERT INTO comments (post_id, user_id, text)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(text)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert comment, error: {:?}", err);
        err.into()
    })
}

pub async fn delete(pool: &PgPool, user_id: i32, id: i32) -> Result<(), StoreError> {
    let query_span = tracing::info_span!("Deleting comment.");
    let result = sqlx::query("DELETE FROM comments WHERE id=$1 AND user_id=$2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete comment {}, error: {:?}", id, err);
            StoreError::from(err)
        })?;

    if result.rows_affected() < 1 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub async fn count_by_post(pool: &PgPool, post_id: i32) -> Result<i64, StoreError> {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id=$1")
        .bind(post_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count comments, error: {:?}", err);
            err.into()
        })
}

pub async fn fetch_page_by_post(
    pool: &PgPool,
    post_id: i32,
    page: PageParams,
) -> Result<Paginated<models::Comment>, StoreError> {
    let query_span = tracing::info_span!("Fetch comments by post id.");

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id=$1")
        .bind(post_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count comments, error: {:?}", err);
            StoreError::from(err)
        })?;

    let rows = sqlx::query_as::<_, models::Comment>(
        r#"
        SELECT * FROM comments
        WHERE post_id=$1
        ORDER BY created_at DESC
        OFFSET $2 LIMIT $3
        "#,
    )
    .bind(post_id)
    .bind(page.offset())
    .bind(page.limit())
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch comments, error: {:?}", err);
        StoreError::from(err)
    })?;

    Ok(Paginated { rows, total })
}
