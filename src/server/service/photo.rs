use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, photo::PhotoRepository},
    error::AppError,
    model::photo::{Photo, PhotoParam},
};

pub struct PhotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists photos newest first, optionally for a single event.
    pub async fn list(&self, event_id: Option<i32>) -> Result<Vec<Photo>, AppError> {
        Ok(PhotoRepository::new(self.db).get_all(event_id).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Photo, AppError> {
        PhotoRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, param: PhotoParam) -> Result<Photo, AppError> {
        self.check(&param).await?;

        Ok(PhotoRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, param: PhotoParam) -> Result<Photo, AppError> {
        self.check(&param).await?;

        PhotoRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PhotoRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Validates fields and requires the referenced event to exist.
    async fn check(&self, param: &PhotoParam) -> Result<(), AppError> {
        param.validate()?;

        if !EventRepository::new(self.db).exists(param.event_id).await? {
            return Err(AppError::NotFound(format!(
                "Event {} not found",
                param.event_id
            )));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Photo {} not found", id))
}
