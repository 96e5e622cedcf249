use crate::db::{PageParams, Paginated, StoreError};
use crate::forms;
use crate::models;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;

// Lower bound standing in for "no filter" on time_limit; predates any
// stored row by construction.
const TIME_LIMIT_FLOOR: &str = "1990-01-01 00:00:00+00";

/// Half-open UTC window `[month start, next month start)` for a year-month.
/// None for an invalid month number.
pub fn month_window(year: i32, month: u32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((
        start.and_time(NaiveTime::MIN).and_utc(),
        end.and_time(NaiveTime::MIN).and_utc(),
    ))
}

/// Half-open UTC window covering one calendar day.
pub fn day_window(date: NaiveDate) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let next = date.checked_add_days(Days::new(1))?;
    Some((
        date.and_time(NaiveTime::MIN).and_utc(),
        next.and_time(NaiveTime::MIN).and_utc(),
    ))
}

pub async fn insert(
    pool: &PgPool,
    form: &forms::ProductForm,
    user_id: i32,
) -> Result<models::Product, StoreError> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO products
            (name, description, stock, price, review, url, image, code, provider, time_limit, user_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(&form.name)
    .bind(&form.description)
    .bind(form.stock)
    .bind(form.price)
    .bind(form.review)
    .bind(&form.url)
    .bind(&form.image)
    .bind(&form.code)
    .bind(&form.provider)
    .bind(form.time_limit)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert product, error: {:?}", err);
        err.into()
    })
}

// Pushes the deadline out by one day, on the stored value, owner-scoped.
pub async fn extend_time_limit(
    pool: &PgPool,
    product_id: i32,
    user_id: i32,
) -> Result<models::Product, StoreError> {
    let query_span = tracing::info_span!("Extending product time limit.");
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE products
        SET time_limit = time_limit + interval '1 day'
        WHERE id=$1 AND user_id=$2
        RETURNING *
        "#,
    )
    .bind(product_id)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        if !matches!(err, sqlx::Error::RowNotFound) {
            tracing::error!("Failed to extend product {}, error: {:?}", product_id, err);
        }
        err.into()
    })
}

pub async fn delete(pool: &PgPool, user_id: i32, product_id: i32) -> Result<(), StoreError> {
    let query_span = tracing::info_span!("Deleting product.");
    let result = sqlx::query("DELETE FROM products WHERE id=$1 AND user_id=$2")
        .bind(product_id)
        .bind(user_id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete product {}, error: {:?}", product_id, err);
            StoreError::from(err)
        })?;

    if result.rows_affected() < 1 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub async fn fetch_page_by_user(
    pool: &PgPool,
    user_id: i32,
    page: PageParams,
) -> Result<Paginated<models::Product>, StoreError> {
    let query_span = tracing::info_span!("Fetch products by user id.");

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE user_id=$1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products, error: {:?}", err);
            StoreError::from(err)
        })?;

    let rows = sqlx::query_as::<_, models::Product>(
        r#"
        SELECT * FROM products
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
        tracing::error!("Failed to fetch products, error: {:?}", err);
        StoreError::from(err)
    })?;

    Ok(Paginated { rows, total })
}

/// All of the user's products above the fixed epoch floor, ordered by
/// time_limit in the requested direction.
pub async fn fetch_page_time_limit_all(
    pool: &PgPool,
    user_id: i32,
    page: PageParams,
    ascending: bool,
) -> Result<Paginated<models::Product>, StoreError> {
    let query_span = tracing::info_span!("Fetch products ordered by time limit.");

    let count_sql = format!(
        "SELECT COUNT(*) FROM products WHERE user_id=$1 AND time_limit >= TIMESTAMPTZ '{}'",
        TIME_LIMIT_FLOOR
    );
    let total: i64 = sqlx::query_scalar(&count_sql)
        .bind(user_id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count products, error: {:?}", err);
            StoreError::from(err)
        })?;

    let order = if ascending { "ASC" } else { "DESC" };
    let select_sql = format!(
        r#"
        SELECT * FROM products
        WHERE user_id=$1 AND time_limit >= TIMESTAMPTZ '{}'
        ORDER BY time_limit {}
        OFFSET $2 LIMIT $3
        "#,
        TIME_LIMIT_FLOOR, order
    );
    let rows = sqlx::query_as::<_, models::Product>(&select_sql)
        .bind(user_id)
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch products, error: {:?}", err);
            StoreError::from(err)
        })?;

    Ok(Paginated { rows, total })
}

/// At most one product per calendar day of the month, the most recently
/// created one for days that have several. Bounded by the number of days,
/// so no pagination.
pub async fn fetch_time_limit_year_month(
    pool: &PgPool,
    user_id: i32,
    month_start: DateTime<Utc>,
    month_end: DateTime<Utc>,
) -> Result<Vec<models::Product>, StoreError> {
    let query_span = tracing::info_span!("Fetch products bucketed by day of month.");
    sqlx::query_as::<_, models::Product>(
        r#"
        SELECT DISTINCT ON (DATE_TRUNC('day', time_limit)) *
        FROM products
        WHERE user_id=$1 AND time_limit >= $2 AND time_limit < $3
        ORDER BY DATE_TRUNC('day', time_limit), created_at DESC
        "#,
    )
    .bind(user_id)
    .bind(month_start)
    .bind(month_end)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch month products, error: {:?}", err);
        err.into()
    })
}

pub async fn fetch_page_time_limit_date(
    pool: &PgPool,
    user_id: i32,
    page: PageParams,
    date: NaiveDate,
) -> Result<Paginated<models::Product>, StoreError> {
    let query_span = tracing::info_span!("Fetch products by time limit date.");
    let (day_start, day_end) = day_window(date)
        .ok_or_else(|| StoreError::Validation(format!("date out of range: {}", date)))?;

    let total: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM products WHERE user_id=$1 AND time_limit >= $2 AND time_limit < $3",
    )
    .bind(user_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        tracing::error!("Failed to count products, error: {:?}", err);
        StoreError::from(err)
    })?;

    let rows = sqlx::query_as::<_, models::Product>(
        r#"
        SELECT * FROM products
        WHERE user_id=$1 AND time_limit >= $2 AND time_limit < $3
        ORDER BY created_at DESC
        OFFSET $4 LIMIT $5
        "#,
    )
    .bind(user_id)
    .bind(day_start)
    .bind(day_end)
    .bind(page.offset())
    .bind(page.limit())
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch products, error: {:?}", err);
        StoreError::from(err)
    })?;

    Ok(Paginated { rows, total })
}
