use crate::serialize::{Record, to_record};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub description: String,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub post_url: String,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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

/// The user who published the post
#[derive(Debug)]
pub struct AuthorLink;

impl Linked for AuthorLink {
    type FromEntity = Entity;

    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::User.def()]
    }
}

/// Notifications that mention the post
#[derive(Debug)]
pub struct NotificationsLink;

impl Linked for NotificationsLink {
    type FromEntity = Entity;

    type ToEntity = super::notification::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![super::notification::post().rev()]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Flat external view of this row
    pub fn serialize(&self) -> Record {
        to_record(self)
    }
}
