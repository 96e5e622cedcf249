mod common;

use common::{seed_user, spawn_app};

#[tokio::test]
async fn comments_list_newest_first_with_total() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let author = seed_user(&app.db_pool, "uma").await;
    let commenter = seed_user(&app.db_pool, "victor").await;
    let post_id = app.create_post(author, "post", "Misc").await;

    for text in ["first", "second", "third"] {
        let response = client
            .post(format!("{}/comments", app.address))
            .header("x-user-id", commenter.to_string())
            .json(&serde_json::json!({ "post_id": post_id, "text": text }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    let response = client
        .get(format!(
            "{}/comments/post/{}?page=1&page_size=2",
            app.address, post_id
        ))
        .header("x-user-id", commenter.to_string())
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total"].as_i64(), Some(3));
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["text"].as_str(), Some("third"));
    assert_eq!(list[1]["text"].as_str(), Some("second"));
}

#[tokio::test]
async fn comment_delete_is_owner_scoped() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let author = seed_user(&app.db_pool, "walter").await;
    let commenter = seed_user(&app.db_pool, "xena").await;
    let post_id = app.create_post(author, "post", "Misc").await;

    let response = client
        .post(format!("{}/comments", app.address))
        .header("x-user-id", commenter.to_string())
        .json(&serde_json::json!({ "post_id": post_id, "text": "hello" }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let comment_id = body["id"].as_i64().unwrap();

    // the post author does not own the comment
    let response = client
        .delete(format!("{}/comments/{}", app.address, comment_id))
        .header("x-user-id", author.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .delete(format!("{}/comments/{}", app.address, comment_id))
        .header("x-user-id", commenter.to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE id=$1")
        .bind(comment_id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
