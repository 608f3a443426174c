use crate::serialize::{Record, to_record};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A directed follow edge: `follower_id` follows `followed_id`.
///
/// Both ends are nullable; removing a user clears its side of the edge.
/// The pair is not unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "follower")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub follower_id: Option<i32>,
    pub followed_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowerId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::FollowedId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Followed,
}

/// The user who follows
#[derive(Debug)]
pub struct FollowerLink;

impl Linked for FollowerLink {
    type FromEntity = Entity;

    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Follower.def()]
    }
}

/// The user being followed
#[derive(Debug)]
pub struct FollowedLink;

impl Linked for FollowedLink {
    type FromEntity = Entity;

    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![Relation::Followed.def()]
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Flat external view of this row
    pub fn serialize(&self) -> Record {
        to_record(self)
    }
}
