use sea_orm::DatabaseConnection;

use crate::server::{
    data::{announcement::AnnouncementRepository, comment::CommentRepository},
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParam},
        user::User,
    },
    util::validate::require_text,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists comments newest first, optionally for a single announcement.
    pub async fn list(&self, announcement_id: Option<i32>) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_all(announcement_id)
            .await?)
    }

    /// Posts a comment as `author`.
    ///
    /// The display name falls back to the author's account name when not given.
    ///
    /// # Arguments
    /// - `author` - Authenticated public user
    /// - `announcement_id` - Announcement being commented on
    /// - `name` - Optional display name
    /// - `content` - Comment text
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::ValidationErr)` - Blank name or content
    /// - `Err(AppError::NotFound)` - Announcement does not exist
    pub async fn create(
        &self,
        author: &User,
        announcement_id: i32,
        name: Option<String>,
        content: String,
    ) -> Result<Comment, AppError> {
        let name = name
            .unwrap_or_else(|| author.name.clone())
            .trim()
            .to_string();
        let content = content.trim().to_string();
        require_text("name", &name)?;
        require_text("content", &content)?;

        if !AnnouncementRepository::new(self.db)
            .exists(announcement_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Announcement {} not found",
                announcement_id
            )));
        }

        let comment = CommentRepository::new(self.db)
            .create(CreateCommentParam {
                announcement_id,
                user_id: author.id,
                name,
                content,
            })
            .await?;

        Ok(comment)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Comment {} not found", id)));
        }

        tracing::info!("Deleted comment {}", id);

        Ok(())
    }
}
