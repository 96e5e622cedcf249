use reviewlist::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> Option<TestApp> {
    let configuration = get_configuration().expect("Failed to get configuration");
    spawn_app_with_configuration(configuration).await
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = reviewlist::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

pub async fn seed_user(pool: &PgPool, name: &str) -> i32 {
    reviewlist::db::user::insert(pool, name, "")
        .await
        .expect("failed to seed user")
        .id
}

impl TestApp {
    /// POST a review post as `user_id` and return the created post id.
    pub async fn create_post(&self, user_id: i32, title: &str, category: &str) -> i32 {
        let response = reqwest::Client::new()
            .post(format!("{}/review_posts", self.address))
            .header("x-user-id", user_id.to_string())
            .json(&serde_json::json!({
                "title": title,
                "text": "some text",
                "review": 4.0,
                "category": category,
            }))
            .send()
            .await
            .expect("failed to create post");
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.expect("invalid json");
        body["id"].as_i64().expect("missing post id") as i32
    }
}
