use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::photo::PhotoRepository, model::photo::PhotoParam};

fn param(event_id: i32, tags: &[&str]) -> PhotoParam {
    PhotoParam {
        event_id,
        url: "https://media.example.com/final.jpg".to_string(),
        caption: Some("Trophy lift".to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_cover: true,
    }
}

/// Tests creating a photo with tags.
///
/// Expected: tags returned in order and readable by ID
#[tokio::test]
async fn create_stores_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let repo = PhotoRepository::new(db);

    let created = repo.create(param(event.id, &["final", "cse"])).await?;
    assert_eq!(created.tags, vec!["final", "cse"]);

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.tags, created.tags);
    assert_eq!(stored.caption.as_deref(), Some("Trophy lift"));

    Ok(())
}

/// Tests listing photos by event.
///
/// Expected: only the photos of the requested event
#[tokio::test]
async fn get_all_filters_by_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_event(db).await?;
    let second = factory::create_event(db).await?;
    factory::create_photo(db, first.id, &["a"]).await?;
    factory::create_photo(db, second.id, &[]).await?;

    let repo = PhotoRepository::new(db);
    assert_eq!(repo.get_all(None).await?.len(), 2);

    let filtered = repo.get_all(Some(first.id)).await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].tags, vec!["a"]);

    Ok(())
}

/// Tests replacing and deleting a photo.
///
/// Expected: tags replaced on update; photo and tags gone after delete
#[tokio::test]
async fn update_and_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let photo = factory::create_photo(db, event.id, &["old"]).await?;
    let repo = PhotoRepository::new(db);

    let updated = repo
        .update(photo.id, param(event.id, &["new"]))
        .await?
        .unwrap();
    assert_eq!(updated.tags, vec!["new"]);
    assert!(updated.is_cover);

    assert!(repo.delete(photo.id).await?);
    assert!(repo.get_by_id(photo.id).await?.is_none());
    assert!(entity::prelude::PhotoTag::find().all(db).await?.is_empty());
    assert!(!repo.delete(photo.id).await?);

    Ok(())
}
