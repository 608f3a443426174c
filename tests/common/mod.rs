#![allow(dead_code)]

use sea_orm::DatabaseConnection;
use sea_social::{DatabaseConfig, Mutation, notification, post, schema, user};
use tracing_subscriber::EnvFilter;

pub struct TestContext {
    pub test_name: String,
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new(test_name: &str) -> Self {
        init_tracing();
        let db = DatabaseConfig::new("sqlite::memory:")
            .connect()
            .await
            .unwrap();
        schema::registry().create_all(&db).await.unwrap();
        tracing::debug!(test_name, "schema ready");

        Self {
            test_name: test_name.to_owned(),
            db,
        }
    }

    pub async fn delete(&self) {
        schema::registry().drop_all(&self.db).await.unwrap();
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn create_user(db: &DatabaseConnection, email: &str, nickname: &str) -> user::Model {
    Mutation::create_user(
        db,
        user::Model {
            id: 0,
            email: email.to_owned(),
            password: format!("{nickname}-secret"),
            nickname: nickname.to_owned(),
        },
    )
    .await
    .unwrap()
}

pub async fn create_post(db: &DatabaseConnection, user_id: i32, description: &str) -> post::Model {
    Mutation::create_post(
        db,
        post::Model {
            id: 0,
            description: description.to_owned(),
            post_url: format!("https://img.example/{user_id}/{description}.png"),
            user_id,
        },
    )
    .await
    .unwrap()
}

pub fn new_notification(
    kind: &str,
    emisor_id: i32,
    receptor_id: i32,
    post_id: Option<i32>,
) -> notification::Model {
    notification::Model {
        id: 0,
        emisor_id,
        receptor_id,
        kind: kind.to_owned(),
        post_id,
        message: None,
        is_read: true,
    }
}
