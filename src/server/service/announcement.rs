use sea_orm::DatabaseConnection;

use crate::server::{
    data::announcement::AnnouncementRepository,
    error::AppError,
    model::announcement::{Announcement, AnnouncementParam},
};

pub struct AnnouncementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists announcements, newest first.
    pub async fn list(&self) -> Result<Vec<Announcement>, AppError> {
        Ok(AnnouncementRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Announcement, AppError> {
        AnnouncementRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, param: AnnouncementParam) -> Result<Announcement, AppError> {
        param.validate()?;

        let announcement = AnnouncementRepository::new(self.db).create(param).await?;

        tracing::info!("Posted announcement {}", announcement.id);

        Ok(announcement)
    }

    pub async fn update(
        &self,
        id: i32,
        param: AnnouncementParam,
    ) -> Result<Announcement, AppError> {
        param.validate()?;

        AnnouncementRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an announcement together with its comments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !AnnouncementRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted announcement {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Announcement {} not found", id))
}
