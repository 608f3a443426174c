#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Sea Social
//!
//! The persistent schema of a small social network, declared as SeaORM entities:
//! users, posts, likes, comments, follower edges and notifications.
//!
//! The crate only declares shapes, constraints and relationships. Constraint
//! enforcement, cascades and transactions are the database's job; this crate
//! surfaces their failures through [`Error`].
//!
//! ```no_run
//! use sea_social::{DatabaseConfig, Mutation, schema, user};
//!
//! # async fn run() -> Result<(), sea_social::Error> {
//! let db = DatabaseConfig::new("sqlite::memory:").connect().await?;
//! schema::registry().create_all(&db).await?;
//!
//! let alice = Mutation::create_user(
//!     &db,
//!     user::Model {
//!         id: 0,
//!         email: "alice@example.com".to_owned(),
//!         password: "hashed elsewhere".to_owned(),
//!         nickname: "alice".to_owned(),
//!     },
//! )
//! .await?;
//!
//! // password never leaves the crate
//! assert!(!alice.serialize().contains_key("password"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod schema;
mod serialize;
pub mod service;

pub use config::*;
pub use entity::*;
pub use error::*;
pub use serialize::Record;
pub use service::*;

pub use sea_orm;
