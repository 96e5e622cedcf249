use crate::db::StoreError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: i32) -> Result<models::User, StoreError> {
    let query_span = tracing::info_span!("Fetch user by id.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE id=$1 LIMIT 1")
        .bind(id)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            if !matches!(err, sqlx::Error::RowNotFound) {
                tracing::error!("Failed to fetch user {}, error: {:?}", id, err);
            }
            err.into()
        })
}

pub async fn insert(pool: &PgPool, name: &str, image: &str) -> Result<models::User, StoreError> {
    let query_span = tracing::info_span!("Saving new user into the database");
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (name, image)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(image)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert user, error: {:?}", err);
        err.into()
    })
}
