//! Photo gallery data repository.
//!
//! Photos are stored with their tags in a child table; tag lists are replaced wholesale
//! on update.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::photo::{Photo, PhotoParam};

pub struct PhotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: PhotoParam) -> Result<Photo, DbErr> {
        let txn = self.db.begin().await?;

        let photo = entity::photo::ActiveModel {
            event_id: ActiveValue::Set(param.event_id),
            url: ActiveValue::Set(param.url),
            caption: ActiveValue::Set(param.caption),
            is_cover: ActiveValue::Set(param.is_cover),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        let tags = insert_tags(&txn, photo.id, param.tags).await?;

        txn.commit().await?;

        Ok(Photo::from_entity(photo, tags))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Photo>, DbErr> {
        let Some(photo) = entity::prelude::Photo::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(attach_tags(self.db, vec![photo]).await?.pop())
    }

    /// Gets photos newest first, optionally limited to one event.
    pub async fn get_all(&self, event_id: Option<i32>) -> Result<Vec<Photo>, DbErr> {
        let mut query = entity::prelude::Photo::find();

        if let Some(event_id) = event_id {
            query = query.filter(entity::photo::Column::EventId.eq(event_id));
        }

        let photos = query
            .order_by_desc(entity::photo::Column::CreatedAt)
            .order_by_desc(entity::photo::Column::Id)
            .all(self.db)
            .await?;

        attach_tags(self.db, photos).await
    }

    /// Replaces a photo's fields and tags.
    ///
    /// # Returns
    /// - `Ok(Some(Photo))` - Updated photo
    /// - `Ok(None)` - No photo with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: PhotoParam) -> Result<Option<Photo>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Photo::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::photo::ActiveModel = existing.into();
        active.event_id = ActiveValue::Set(param.event_id);
        active.url = ActiveValue::Set(param.url);
        active.caption = ActiveValue::Set(param.caption);
        active.is_cover = ActiveValue::Set(param.is_cover);
        let photo = active.update(&txn).await?;

        entity::prelude::PhotoTag::delete_many()
            .filter(entity::photo_tag::Column::PhotoId.eq(id))
            .exec(&txn)
            .await?;
        let tags = insert_tags(&txn, id, param.tags).await?;

        txn.commit().await?;

        Ok(Some(Photo::from_entity(photo, tags)))
    }

    /// Deletes a photo and its tags, returning whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PhotoTag::delete_many()
            .filter(entity::photo_tag::Column::PhotoId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Photo::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert_tags<C: ConnectionTrait>(
    conn: &C,
    photo_id: i32,
    tags: Vec<String>,
) -> Result<Vec<entity::photo_tag::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(tags.len());

    for tag in tags {
        let model = entity::photo_tag::ActiveModel {
            photo_id: ActiveValue::Set(photo_id),
            tag: ActiveValue::Set(tag),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        inserted.push(model);
    }

    Ok(inserted)
}

async fn attach_tags<C: ConnectionTrait>(
    conn: &C,
    photos: Vec<entity::photo::Model>,
) -> Result<Vec<Photo>, DbErr> {
    if photos.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = photos.iter().map(|p| p.id).collect();

    let mut tags_by_photo: HashMap<i32, Vec<entity::photo_tag::Model>> = HashMap::new();
    for tag in entity::prelude::PhotoTag::find()
        .filter(entity::photo_tag::Column::PhotoId.is_in(ids))
        .all(conn)
        .await?
    {
        tags_by_photo.entry(tag.photo_id).or_default().push(tag);
    }

    Ok(photos
        .into_iter()
        .map(|photo| {
            let tags = tags_by_photo.remove(&photo.id).unwrap_or_default();
            Photo::from_entity(photo, tags)
        })
        .collect())
}
