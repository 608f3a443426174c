use crate::serialize::{Record, to_record};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))", unique)]
    pub email: String,
    /// Stored as given; hashing happens before it reaches this crate
    #[serde(skip_serializing)]
    pub password: String,
    #[sea_orm(column_type = "String(StringLen::N(25))")]
    pub nickname: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

/// Follow edges this user initiated
#[derive(Debug)]
pub struct FollowingLink;

impl Linked for FollowingLink {
    type FromEntity = Entity;

    type ToEntity = super::follower::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::follower::Relation::Follower.def().rev()]
    }
}

/// Follow edges pointing at this user
#[derive(Debug)]
pub struct FollowersLink;

impl Linked for FollowersLink {
    type FromEntity = Entity;

    type ToEntity = super::follower::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::follower::Relation::Followed.def().rev()]
    }
}

/// Users this user follows
#[derive(Debug)]
pub struct FollowedUsersLink;

impl Linked for FollowedUsersLink {
    type FromEntity = Entity;

    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::follower::Relation::Follower.def().rev(),
            super::follower::Relation::Followed.def(),
        ]
    }
}

/// Users following this user
#[derive(Debug)]
pub struct FollowerUsersLink;

impl Linked for FollowerUsersLink {
    type FromEntity = Entity;

    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::follower::Relation::Followed.def().rev(),
            super::follower::Relation::Follower.def(),
        ]
    }
}

/// Notifications this user sent
#[derive(Debug)]
pub struct SentNotificationsLink;

impl Linked for SentNotificationsLink {
    type FromEntity = Entity;

    type ToEntity = super::notification::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::notification::emisor().rev()]
    }
}

/// Notifications addressed to this user
#[derive(Debug)]
pub struct ReceivedNotificationsLink;

impl Linked for ReceivedNotificationsLink {
    type FromEntity = Entity;

    type ToEntity = super::notification::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::notification::receptor().rev()]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Flat external view of this row
    pub fn serialize(&self) -> Record {
        to_record(self)
    }
}
