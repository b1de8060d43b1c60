//! Photo factory for creating test gallery entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a photo for `event_id` with a unique URL and the given tags.
pub async fn create_photo(
    db: &DatabaseConnection,
    event_id: i32,
    tags: &[&str],
) -> Result<entity::photo::Model, DbErr> {
    let id = next_id();
    let photo = entity::photo::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        url: ActiveValue::Set(format!("https://media.example.com/photo-{}.jpg", id)),
        caption: ActiveValue::Set(None),
        is_cover: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for tag in tags {
        entity::photo_tag::ActiveModel {
            photo_id: ActiveValue::Set(photo.id),
            tag: ActiveValue::Set(tag.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(photo)
}
