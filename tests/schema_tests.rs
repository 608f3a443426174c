pub mod common;

pub use common::{TestContext, create_user};
use pretty_assertions::assert_eq;
use sea_orm::{ConnectionTrait, DbBackend, Statement};
use sea_social::{Query, schema};

async fn sqlite_tables(db: &sea_orm::DatabaseConnection) -> Vec<String> {
    db.query_all(Statement::from_string(
        DbBackend::Sqlite,
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    ))
    .await
    .unwrap()
    .into_iter()
    .map(|row| row.try_get::<String>("", "name").unwrap())
    .collect()
}

#[tokio::test]
async fn create_all_is_idempotent() {
    let ctx = TestContext::new("create_all_is_idempotent").await;
    let db = &ctx.db;

    let alice = create_user(db, "alice@x.com", "alice").await;
    // a second run leaves existing tables and rows alone
    schema::registry().create_all(db).await.unwrap();
    assert_eq!(Query::find_all_users(db).await.unwrap(), vec![alice]);

    assert_eq!(
        sqlite_tables(db).await,
        vec!["comment", "follower", "like", "notification", "post", "user"]
    );

    ctx.delete().await;
}

#[tokio::test]
async fn drop_all_removes_every_table() {
    let ctx = TestContext::new("drop_all_removes_every_table").await;
    let db = &ctx.db;

    create_user(db, "alice@x.com", "alice").await;
    schema::registry().drop_all(db).await.unwrap();
    assert!(sqlite_tables(db).await.is_empty());

    // and it can be rebuilt from scratch
    schema::registry().create_all(db).await.unwrap();
    assert!(Query::find_all_users(db).await.unwrap().is_empty());

    ctx.delete().await;
}
