use crate::{Error, comment, follower, like, notification, post, user};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

#[derive(Debug)]
pub struct Query;

impl Query {
    pub async fn find_user_by_id<C>(db: &C, id: i32) -> Result<Option<user::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_user_by_email<C>(db: &C, email: &str) -> Result<Option<user::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?)
    }

    pub async fn find_all_users<C>(db: &C) -> Result<Vec<user::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_post_by_id<C>(db: &C, id: i32) -> Result<Option<post::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(post::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_posts_by_user<C>(db: &C, user_id: i32) -> Result<Vec<post::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(post::Entity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_post_author<C>(db: &C, post_id: i32) -> Result<Option<user::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .inner_join(post::Entity)
            .filter(post::Column::Id.eq(post_id))
            .one(db)
            .await?)
    }

    pub async fn find_comments_by_post<C>(
        db: &C,
        post_id: i32,
    ) -> Result<Vec<comment::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(comment::Entity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_comments_by_user<C>(
        db: &C,
        user_id: i32,
    ) -> Result<Vec<comment::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(comment::Entity::find()
            .filter(comment::Column::UserId.eq(user_id))
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_likes_by_post<C>(db: &C, post_id: i32) -> Result<Vec<like::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(like::Entity::find()
            .filter(like::Column::PostId.eq(post_id))
            .order_by_asc(like::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_likes_by_user<C>(db: &C, user_id: i32) -> Result<Vec<like::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(like::Entity::find()
            .filter(like::Column::UserId.eq(user_id))
            .order_by_asc(like::Column::Id)
            .all(db)
            .await?)
    }

    /// Counts like rows, duplicates included
    pub async fn count_likes_by_post<C>(db: &C, post_id: i32) -> Result<u64, Error>
    where
        C: ConnectionTrait,
    {
        Ok(like::Entity::find()
            .filter(like::Column::PostId.eq(post_id))
            .count(db)
            .await?)
    }

    /// Users that `user_id` follows
    pub async fn find_following<C>(db: &C, user_id: i32) -> Result<Vec<user::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .join(
                JoinType::InnerJoin,
                follower::Relation::Followed.def().rev(),
            )
            .filter(follower::Column::FollowerId.eq(user_id))
            .distinct()
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?)
    }

    /// Users following `user_id`
    pub async fn find_followers<C>(db: &C, user_id: i32) -> Result<Vec<user::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .join(
                JoinType::InnerJoin,
                follower::Relation::Follower.def().rev(),
            )
            .filter(follower::Column::FollowedId.eq(user_id))
            .distinct()
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_notifications_sent<C>(
        db: &C,
        emisor_id: i32,
    ) -> Result<Vec<notification::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(notification::Entity::find()
            .filter(notification::Column::EmisorId.eq(emisor_id))
            .order_by_asc(notification::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_notifications_received<C>(
        db: &C,
        receptor_id: i32,
    ) -> Result<Vec<notification::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(notification::Entity::find()
            .filter(notification::Column::ReceptorId.eq(receptor_id))
            .order_by_asc(notification::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find_unread_notifications<C>(
        db: &C,
        receptor_id: i32,
    ) -> Result<Vec<notification::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(notification::Entity::find()
            .filter(notification::Column::ReceptorId.eq(receptor_id))
            .filter(notification::Column::IsRead.eq(false))
            .order_by_asc(notification::Column::Id)
            .all(db)
            .await?)
    }

    /// Notifications about `post_id`, including ones whose post is already gone
    pub async fn find_notifications_by_post<C>(
        db: &C,
        post_id: i32,
    ) -> Result<Vec<notification::Model>, Error>
    where
        C: ConnectionTrait,
    {
        Ok(notification::Entity::find()
            .filter(notification::Column::PostId.eq(post_id))
            .order_by_asc(notification::Column::Id)
            .all(db)
            .await?)
    }
}
