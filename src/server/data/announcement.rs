//! Announcement data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::announcement::{Announcement, AnnouncementParam};

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: AnnouncementParam) -> Result<Announcement, DbErr> {
        let now = Utc::now();
        let entity = entity::announcement::ActiveModel {
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            image: ActiveValue::Set(param.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Announcement::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Announcement>, DbErr> {
        let entity = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Announcement::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Announcement::find()
            .filter(entity::announcement::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all announcements, newest first.
    pub async fn get_all(&self) -> Result<Vec<Announcement>, DbErr> {
        let entities = entity::prelude::Announcement::find()
            .order_by_desc(entity::announcement::Column::CreatedAt)
            .order_by_desc(entity::announcement::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Announcement::from_entity).collect())
    }

    /// Replaces an announcement's fields.
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - Updated announcement
    /// - `Ok(None)` - No announcement with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: AnnouncementParam,
    ) -> Result<Option<Announcement>, DbErr> {
        let Some(existing) = entity::prelude::Announcement::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::announcement::ActiveModel = existing.into();
        active.title = ActiveValue::Set(param.title);
        active.body = ActiveValue::Set(param.body);
        active.image = ActiveValue::Set(param.image);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Announcement::from_entity(entity)))
    }

    /// Deletes an announcement and its comments.
    ///
    /// # Returns
    /// - `Ok(true)` - Announcement deleted
    /// - `Ok(false)` - No announcement with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Comment::delete_many()
            .filter(entity::comment::Column::AnnouncementId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Announcement::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
