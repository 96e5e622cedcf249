mod common;

use common::{seed_user, spawn_app};

#[tokio::test]
async fn like_of_missing_post_is_validation_failure() {
    let Some(app) = spawn_app().await else { return };

    let user = seed_user(&app.db_pool, "peggy").await;
    let response = reqwest::Client::new()
        .post(format!("{}/likes", app.address))
        .header("x-user-id", user.to_string())
        .json(&serde_json::json!({ "post_id": 424242, "post_user_id": user }))
        .send()
        .await
        .unwrap();
    // foreign key rejection classifies as a 400, not a 500
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn deleting_absent_like_is_not_found() {
    let Some(app) = spawn_app().await else { return };

    let user = seed_user(&app.db_pool, "rupert").await;
    let response = reqwest::Client::new()
        .delete(format!("{}/likes/424242", app.address))
        .header("x-user-id", user.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn like_count_tracks_given_likes() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let author = seed_user(&app.db_pool, "sybil").await;
    let liker = seed_user(&app.db_pool, "trent").await;
    let first = app.create_post(author, "one", "Misc").await;
    let second = app.create_post(author, "two", "Misc").await;

    for post_id in [first, second] {
        let response = client
            .post(format!("{}/likes", app.address))
            .header("x-user-id", liker.to_string())
            .json(&serde_json::json!({ "post_id": post_id, "post_user_id": author }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    let response = client
        .get(format!("{}/likes/count", app.address))
        .header("x-user-id", liker.to_string())
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"].as_i64(), Some(2));
}
