use crate::db::{PageParams, Paginated, StoreError};
use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(
    pool: &PgPool,
    form: &forms::ReviewPostForm,
    user_id: i32,
) -> Result<models::ReviewPost, StoreError> {
    let query_span = tracing::info_span!("Saving new review post into the database");
    sqlx::query_as::<_, models::ReviewPost>(
        r#"
        INSERT INTO review_posts (title, text, image, review, category, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&form.title)
    .bind(&form.text)
    .bind(&form.image)
    .bind(form.review)
    .bind(&form.category)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert review post, error: {:?}", err);
        err.into()
    })
}

// Owner check and update are one statement; zero returned rows proves the
// post does not exist or is not owned by user_id.
pub async fn update(
    pool: &PgPool,
    post_id: i32,
    user_id: i32,
    form: &forms::ReviewPostForm,
) -> Result<models::ReviewPost, StoreError> {
    let query_span = tracing::info_span!("Updating review post.");
    sqlx::query_as::<_, models::ReviewPost>(
        r#"
        UPDATE review_posts
        SET title=$1, text=$2, image=$3, review=$4, category=$5, updated_at=NOW()
        WHERE id=$6 AND user_id=$7
        RETURNING *
        "#,
    )
    .bind(&form.title)
    .bind(&form.text)
    .bind(&form.image)
    .bind(form.review)
    .bind(&form.category)
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        if !matches!(err, sqlx::Error::RowNotFound) {
            tracing::error!("Failed to update review post {}, error: {:?}", post_id, err);
        }
        err.into()
    })
}

pub async fn delete(pool: &PgPool, user_id: i32, post_id: i32) -> Result<(), StoreError> {
    let query_span = tracing::info_span!("Deleting review post.");
    let result = sqlx::query("DELETE FROM review_posts WHERE id=$1 AND user_id=$2")
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete review post {}, error: {:?}", post_id, err);
            StoreError::from(err)
        })?;

    if result.rows_affected() < 1 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub async fn fetch(pool: &PgPool, post_id: i32) -> Result<models::ReviewPost, StoreError> {
    let query_span = tracing::info_span!("Fetch review post by id.");
    sqlx::query_as::<_, models::ReviewPost>("SELECT * FROM review_posts WHERE id=$1 LIMIT 1")
        .bind(post_id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            if !matches!(err, sqlx::Error::RowNotFound) {
                tracing::error!("Failed to fetch review post {}, error: {:?}", post_id, err);
            }
            err.into()
        })
}

/// Page of the public feed, most recent first. `category` of None means no
/// filter; Some is a case-sensitive substring match. Count and fetch share
/// the predicate so `total` stays consistent with the window.
pub async fn fetch_page(
    pool: &PgPool,
    category: Option<&str>,
    page: PageParams,
) -> Result<Paginated<models::ReviewPost>, StoreError> {
    let query_span = tracing::info_span!("Fetch review post page.");
    let pattern = category.map(|c| format!("%{}%", c));

    let total: i64 = match &pattern {
        Some(pattern) => {
            sqlx::query_scalar("SELECT COUNT(*) FROM review_posts WHERE category LIKE $1")
                .bind(pattern)
                .fetch_one(pool)
                .await
        }
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM review_posts")
                .fetch_one(pool)
                .await
        }
    }
    .map_err(|err| {
        tracing::error!("Failed to count review posts, error: {:?}", err);
        StoreError::from(err)
    })?;

    let rows = match &pattern {
        Some(pattern) => {
            sqlx::query_as::<_, models::ReviewPost>(
                r#"
                SELECT * FROM review_posts
                WHERE category LIKE $1
                ORDER BY created_at DESC
                OFFSET $2 LIMIT $3
                "#,
            )
            .bind(pattern)
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(pool)
            .instrument(query_span)
            .await
        }
        None => {
            sqlx::query_as::<_, models::ReviewPost>(
                r#"
                SELECT * FROM review_posts
                ORDER BY created_at DESC
                OFFSET $1 LIMIT $2
                "#,
            )
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(pool)
            .instrument(query_span)
            .await
        }
    }
    .map_err(|err| {
        tracing::error!("Failed to fetch review posts, error: {:?}", err);
        StoreError::from(err)
    })?;

    Ok(Paginated { rows, total })
}

pub async fn fetch_page_by_user(
    pool: &PgPool,
    user_id: i32,
    page: PageParams,
) -> Result<Paginated<models::ReviewPost>, StoreError> {
    let query_span = tracing::info_span!("Fetch review posts by user id.");

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM review_posts WHERE user_id=$1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count review posts, error: {:?}", err);
            StoreError::from(err)
        })?;

    let rows = sqlx::query_as::<_, models::ReviewPost>(
        r#"
        SELECT * FROM review_posts
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
        tracing::error!("Failed to fetch review posts, error: {:?}", err);
        StoreError::from(err)
    })?;

    Ok(Paginated { rows, total })
}
