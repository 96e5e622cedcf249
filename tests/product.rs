mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use common::{seed_user, spawn_app};
use sqlx::PgPool;

async fn seed_product(
    pool: &PgPool,
    user_id: i32,
    name: &str,
    time_limit: DateTime<Utc>,
    created_at: DateTime<Utc>,
) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO products
            (name, description, stock, price, review, url, image, code, provider,
             time_limit, user_id, created_at)
        VALUES ($1, '', TRUE, 100, 4.0, '', '', '', '', $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(time_limit)
    .bind(user_id)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("failed to seed product")
}

#[tokio::test]
async fn time_limit_listing_toggles_sort_order() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let user = seed_user(&app.db_pool, "yan").await;
    let now = Utc::now();
    for (name, days) in [("late", 30), ("early", 1), ("middle", 10)] {
        seed_product(&app.db_pool, user, name, now + Duration::days(days), now).await;
    }

    let response = client
        .get(format!("{}/products/time_limit?sort=asc", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"].as_i64(), Some(3));
    let names: Vec<&str> = body["list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["early", "middle", "late"]);

    let response = client
        .get(format!("{}/products/time_limit?sort=desc", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let names: Vec<&str> = body["list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["late", "middle", "early"]);

    let response = client
        .get(format!("{}/products/time_limit?sort=sideways", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn month_listing_buckets_days_and_prefers_latest_created() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let user = seed_user(&app.db_pool, "zara").await;
    let created_early = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    let created_late = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();

    // two products on June 5th, created at different times
    let morning = Utc.with_ymd_and_hms(2024, 6, 5, 10, 0, 0).unwrap();
    let afternoon = Utc.with_ymd_and_hms(2024, 6, 5, 15, 0, 0).unwrap();
    seed_product(&app.db_pool, user, "older", morning, created_early).await;
    seed_product(&app.db_pool, user, "newer", afternoon, created_late).await;

    // one on June 20th, one outside the month
    let other_day = Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap();
    let outside = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
    seed_product(&app.db_pool, user, "solo", other_day, created_early).await;
    seed_product(&app.db_pool, user, "next-month", outside, created_early).await;

    let response = client
        .get(format!("{}/products/time_limit/month?month=2024-06", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 2);

    // the June 5th slot carries the later-created product's time_limit
    let times: Vec<DateTime<Utc>> = list
        .iter()
        .map(|p| p["time_limit"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(times.contains(&afternoon));
    assert!(times.contains(&other_day));
    assert!(!times.contains(&morning));

    let response = client
        .get(format!("{}/products/time_limit/month?month=garbage", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn date_listing_matches_calendar_day() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let user = seed_user(&app.db_pool, "amos").await;
    let now = Utc::now();
    let on_day = Utc.with_ymd_and_hms(2024, 6, 5, 23, 30, 0).unwrap();
    let next_day = Utc.with_ymd_and_hms(2024, 6, 6, 0, 30, 0).unwrap();
    seed_product(&app.db_pool, user, "hit", on_day, now).await;
    seed_product(&app.db_pool, user, "miss", next_day, now).await;

    let response = client
        .get(format!("{}/products/time_limit/date?date=2024-06-05", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"].as_i64(), Some(1));
    assert_eq!(body["list"][0]["name"].as_str(), Some("hit"));
}

#[tokio::test]
async fn extend_time_limit_adds_one_day_owner_scoped() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let owner = seed_user(&app.db_pool, "bella").await;
    let intruder = seed_user(&app.db_pool, "mallory").await;
    let deadline = Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap();
    let product_id = seed_product(&app.db_pool, owner, "thing", deadline, Utc::now()).await;

    let response = client
        .put(format!("{}/products/{}/time_limit", app.address, product_id))
        .header("x-user-id", intruder.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .put(format!("{}/products/{}/time_limit", app.address, product_id))
        .header("x-user-id", owner.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let updated: DateTime<Utc> = body["item"]["time_limit"].as_str().unwrap().parse().unwrap();
    assert_eq!(updated, deadline + Duration::days(1));
}

#[tokio::test]
async fn my_products_paginate_newest_first() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let user = seed_user(&app.db_pool, "dora").await;
    let deadline = Utc::now() + Duration::days(7);
    for n in 0..3 {
        let created = Utc::now() - Duration::hours(3 - n);
        seed_product(&app.db_pool, user, &format!("p{}", n), deadline, created).await;
    }

    let response = client
        .get(format!("{}/products/my?page=1&page_size=2", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"].as_i64(), Some(3));
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"].as_str(), Some("p2"));
    assert_eq!(list[1]["name"].as_str(), Some("p1"));
}
