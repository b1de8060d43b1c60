//! Announcement factory for creating test announcement entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test announcements with customizable fields.
pub struct AnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    body: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> AnnouncementFactory<'a> {
    /// Creates a new AnnouncementFactory.
    ///
    /// Defaults:
    /// - title: `"Announcement {id}"`
    /// - body: `"Schedule update"`
    /// - image: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Announcement {}", id),
            body: "Schedule update".to_string(),
            image: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Sets the creation timestamp, used to test newest-first ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::announcement::Model, DbErr> {
        entity::announcement::ActiveModel {
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an announcement with default values.
pub async fn create_announcement(
    db: &DatabaseConnection,
) -> Result<entity::announcement::Model, DbErr> {
    AnnouncementFactory::new(db).build().await
}
