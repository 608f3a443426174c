use crate::serialize::{Record, to_record};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A notification from `emisor_id` to `receptor_id`, optionally about a post.
///
/// The references to `user` and `post` are not foreign key constraints: a
/// notification outlives the users and post it names, keeping their old ids.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub emisor_id: i32,
    pub receptor_id: i32,
    /// Free-form tag such as `"like"`, `"comment"` or `"follow"`
    #[sea_orm(
        column_name = "type",
        enum_name = "Type",
        column_type = "String(StringLen::N(50))"
    )]
    #[serde(rename = "type")]
    pub kind: String,
    pub post_id: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(250))", nullable)]
    pub message: Option<String>,
    #[sea_orm(default_value = false)]
    pub is_read: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The sending side, `notification.emisor_id -> user.id`
pub fn emisor() -> RelationDef {
    Entity::belongs_to(super::user::Entity)
        .from(Column::EmisorId)
        .to(super::user::Column::Id)
        .into()
}

/// The receiving side, `notification.receptor_id -> user.id`
pub fn receptor() -> RelationDef {
    Entity::belongs_to(super::user::Entity)
        .from(Column::ReceptorId)
        .to(super::user::Column::Id)
        .into()
}

/// The post the notification is about, `notification.post_id -> post.id`
pub fn post() -> RelationDef {
    Entity::belongs_to(super::post::Entity)
        .from(Column::PostId)
        .to(super::post::Column::Id)
        .into()
}

#[derive(Debug)]
pub struct EmisorLink;

impl Linked for EmisorLink {
    type FromEntity = Entity;

    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![emisor()]
    }
}

#[derive(Debug)]
pub struct ReceptorLink;

impl Linked for ReceptorLink {
    type FromEntity = Entity;

    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![receptor()]
    }
}

#[derive(Debug)]
pub struct PostLink;

impl Linked for PostLink {
    type FromEntity = Entity;

    type ToEntity = super::post::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![post()]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Flat external view of this row
    pub fn serialize(&self) -> Record {
        to_record(self)
    }
}
