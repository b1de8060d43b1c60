//! Comment factory for creating test comment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment by `user_id` on `announcement_id` with the given content.
pub async fn create_comment(
    db: &DatabaseConnection,
    announcement_id: i32,
    user_id: i32,
    content: &str,
) -> Result<entity::comment::Model, DbErr> {
    entity::comment::ActiveModel {
        announcement_id: ActiveValue::Set(announcement_id),
        user_id: ActiveValue::Set(user_id),
        name: ActiveValue::Set(format!("User {}", user_id)),
        content: ActiveValue::Set(content.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
