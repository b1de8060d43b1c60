//! Comment data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParam};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            announcement_id: ActiveValue::Set(param.announcement_id),
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Gets comments newest first, optionally limited to one announcement.
    pub async fn get_all(&self, announcement_id: Option<i32>) -> Result<Vec<Comment>, DbErr> {
        let mut query = entity::prelude::Comment::find();

        if let Some(announcement_id) = announcement_id {
            query = query.filter(entity::comment::Column::AnnouncementId.eq(announcement_id));
        }

        let entities = query
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Deletes a comment, returning whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
