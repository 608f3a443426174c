//! The six entities of the social schema.
//!
//! | Entity | Table | Owned by (cascade) |
//! |---|---|---|
//! | [`user`] | `user` | |
//! | [`post`] | `post` | user |
//! | [`like`] | `like` | user, post |
//! | [`comment`] | `comment` | user, post |
//! | [`follower`] | `follower` | |
//! | [`notification`] | `notification` | |
//!
//! `follower` and `notification` point at `user` twice, once per role, so their
//! relations are reached through the `*Link` types instead of `Related`.

pub mod comment;
pub mod follower;
pub mod like;
pub mod notification;
pub mod post;
pub mod prelude;
pub mod user;
