use crate::{Error, comment, follower, like, notification, post, user};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use tracing::instrument;

#[derive(Debug)]
pub struct Mutation;

impl Mutation {
    #[instrument(level = "trace", skip(db, form_data), fields(email = %form_data.email))]
    pub async fn create_user<C>(db: &C, form_data: user::Model) -> Result<user::Model, Error>
    where
        C: ConnectionTrait,
    {
        let user = user::ActiveModel {
            email: Set(form_data.email),
            password: Set(form_data.password),
            nickname: Set(form_data.nickname),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(user)
    }

    #[instrument(level = "trace", skip(db, form_data))]
    pub async fn update_user_by_id<C>(
        db: &C,
        id: i32,
        form_data: user::Model,
    ) -> Result<user::Model, Error>
    where
        C: ConnectionTrait,
    {
        let user: user::ActiveModel = user::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound { entity: "user", id })?
            .into();

        let user = user::ActiveModel {
            id: user.id,
            email: Set(form_data.email),
            password: Set(form_data.password),
            nickname: Set(form_data.nickname),
        }
        .update(db)
        .await?;
        Ok(user)
    }

    /// Deletes the user. Their posts, comments and likes go with them; follow
    /// edges lose this side; notifications keep the old id.
    #[instrument(level = "trace", skip(db))]
    pub async fn delete_user<C>(db: &C, id: i32) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let res = user::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(Error::NotFound { entity: "user", id });
        }
        Ok(())
    }

    #[instrument(level = "trace", skip(db, form_data), fields(user_id = form_data.user_id))]
    pub async fn create_post<C>(db: &C, form_data: post::Model) -> Result<post::Model, Error>
    where
        C: ConnectionTrait,
    {
        let post = post::ActiveModel {
            description: Set(form_data.description),
            post_url: Set(form_data.post_url),
            user_id: Set(form_data.user_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(post)
    }

    /// Updates the description and url. Ownership of a post never changes.
    #[instrument(level = "trace", skip(db, form_data))]
    pub async fn update_post_by_id<C>(
        db: &C,
        id: i32,
        form_data: post::Model,
    ) -> Result<post::Model, Error>
    where
        C: ConnectionTrait,
    {
        let post: post::ActiveModel = post::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound { entity: "post", id })?
            .into();

        let post = post::ActiveModel {
            id: post.id,
            description: Set(form_data.description),
            post_url: Set(form_data.post_url),
            user_id: post.user_id,
        }
        .update(db)
        .await?;
        Ok(post)
    }

    /// Deletes the post with its comments and likes. Notifications about it
    /// keep the old `post_id`.
    #[instrument(level = "trace", skip(db))]
    pub async fn delete_post<C>(db: &C, id: i32) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let res = post::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(Error::NotFound { entity: "post", id });
        }
        Ok(())
    }

    /// Records a like. Liking the same post twice stores two rows.
    #[instrument(level = "trace", skip(db))]
    pub async fn like_post<C>(db: &C, user_id: i32, post_id: i32) -> Result<like::Model, Error>
    where
        C: ConnectionTrait,
    {
        let like = like::ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(like)
    }

    #[instrument(level = "trace", skip(db))]
    pub async fn delete_like<C>(db: &C, id: i32) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let res = like::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(Error::NotFound { entity: "like", id });
        }
        Ok(())
    }

    #[instrument(level = "trace", skip(db, content))]
    pub async fn create_comment<C>(
        db: &C,
        user_id: i32,
        post_id: i32,
        content: &str,
    ) -> Result<comment::Model, Error>
    where
        C: ConnectionTrait,
    {
        let comment = comment::ActiveModel {
            user_id: Set(user_id),
            post_id: Set(post_id),
            content: Set(content.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(comment)
    }

    #[instrument(level = "trace", skip(db, content))]
    pub async fn update_comment_by_id<C>(
        db: &C,
        id: i32,
        content: &str,
    ) -> Result<comment::Model, Error>
    where
        C: ConnectionTrait,
    {
        let mut comment: comment::ActiveModel = comment::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                entity: "comment",
                id,
            })?
            .into();
        comment.content = Set(content.to_owned());
        Ok(comment.update(db).await?)
    }

    #[instrument(level = "trace", skip(db))]
    pub async fn delete_comment<C>(db: &C, id: i32) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let res = comment::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "comment",
                id,
            });
        }
        Ok(())
    }

    /// Adds the edge `follower_id -> followed_id`. Existing edges are not checked.
    #[instrument(level = "trace", skip(db))]
    pub async fn follow<C>(
        db: &C,
        follower_id: i32,
        followed_id: i32,
    ) -> Result<follower::Model, Error>
    where
        C: ConnectionTrait,
    {
        let edge = follower::ActiveModel {
            follower_id: Set(Some(follower_id)),
            followed_id: Set(Some(followed_id)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(edge)
    }

    /// Removes every `follower_id -> followed_id` edge, returning how many there were.
    #[instrument(level = "trace", skip(db))]
    pub async fn unfollow<C>(db: &C, follower_id: i32, followed_id: i32) -> Result<u64, Error>
    where
        C: ConnectionTrait,
    {
        let res = follower::Entity::delete_many()
            .filter(follower::Column::FollowerId.eq(follower_id))
            .filter(follower::Column::FollowedId.eq(followed_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Stores a notification, unread.
    ///
    /// The notification table holds no foreign keys, so the referenced users and
    /// post are looked up here; a missing one is reported as a foreign key violation.
    /// The lookups and the insert are separate statements: run this inside a
    /// transaction when users or posts may be deleted concurrently.
    #[instrument(level = "trace", skip(db, form_data), fields(kind = %form_data.kind))]
    pub async fn create_notification<C>(
        db: &C,
        form_data: notification::Model,
    ) -> Result<notification::Model, Error>
    where
        C: ConnectionTrait,
    {
        for (role, id) in [
            ("emisor_id", form_data.emisor_id),
            ("receptor_id", form_data.receptor_id),
        ] {
            if user::Entity::find_by_id(id).one(db).await?.is_none() {
                return Err(Error::foreign_key(format!(
                    "notification.{role} references missing user {id}"
                )));
            }
        }
        if let Some(post_id) = form_data.post_id {
            if post::Entity::find_by_id(post_id).one(db).await?.is_none() {
                return Err(Error::foreign_key(format!(
                    "notification.post_id references missing post {post_id}"
                )));
            }
        }

        let notification = notification::ActiveModel {
            emisor_id: Set(form_data.emisor_id),
            receptor_id: Set(form_data.receptor_id),
            kind: Set(form_data.kind),
            post_id: Set(form_data.post_id),
            message: Set(form_data.message),
            is_read: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await?;
        Ok(notification)
    }

    #[instrument(level = "trace", skip(db))]
    pub async fn mark_notification_read<C>(db: &C, id: i32) -> Result<notification::Model, Error>
    where
        C: ConnectionTrait,
    {
        let mut notification: notification::ActiveModel = notification::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(Error::NotFound {
                entity: "notification",
                id,
            })?
            .into();
        notification.is_read = Set(true);
        Ok(notification.update(db).await?)
    }

    /// Marks every unread notification of `receptor_id` as read, returning how many changed.
    #[instrument(level = "trace", skip(db))]
    pub async fn mark_all_notifications_read<C>(db: &C, receptor_id: i32) -> Result<u64, Error>
    where
        C: ConnectionTrait,
    {
        let res = notification::Entity::update_many()
            .col_expr(notification::Column::IsRead, Expr::value(true))
            .filter(notification::Column::ReceptorId.eq(receptor_id))
            .filter(notification::Column::IsRead.eq(false))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    #[instrument(level = "trace", skip(db))]
    pub async fn delete_notification<C>(db: &C, id: i32) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let res = notification::Entity::delete_by_id(id).exec(db).await?;
        if res.rows_affected == 0 {
            return Err(Error::NotFound {
                entity: "notification",
                id,
            });
        }
        Ok(())
    }
}
