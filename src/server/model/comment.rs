//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub announcement_id: i32,
    pub user_id: i32,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            announcement_id: entity.announcement_id,
            user_id: entity.user_id,
            name: entity.name,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            announcement_id: self.announcement_id,
            user_id: self.user_id,
            name: self.name,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Parameters for posting a comment; `user_id` comes from the bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParam {
    pub announcement_id: i32,
    pub user_id: i32,
    pub name: String,
    pub content: String,
}
