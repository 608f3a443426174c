pub use super::comment::Entity as Comment;
pub use super::follower::Entity as Follower;
pub use super::like::Entity as Like;
pub use super::notification::Entity as Notification;
pub use super::post::Entity as Post;
pub use super::user::Entity as User;
