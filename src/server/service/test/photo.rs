use super::*;
use crate::server::{model::photo::PhotoParam, service::photo::PhotoService};

fn param(event_id: i32, url: &str) -> PhotoParam {
    PhotoParam {
        event_id,
        url: url.to_string(),
        caption: None,
        tags: vec!["final".to_string()],
        is_cover: false,
    }
}

/// Tests adding a photo to an existing event.
///
/// Expected: Ok(Photo) listed under the event
#[tokio::test]
async fn creates_photo_for_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let service = PhotoService::new(db);

    let photo = service
        .create(param(event.id, "https://media.example.com/a.jpg"))
        .await?;

    let listed = service.list(Some(event.id)).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, photo.id);

    Ok(())
}

/// Tests adding a photo to an event that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PhotoService::new(db)
        .create(param(42, "https://media.example.com/a.jpg"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests adding a photo with a non-http URL.
///
/// Expected: ValidationError on `url`
#[tokio::test]
async fn rejects_invalid_url() -> Result<(), AppError> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    let result = PhotoService::new(db).create(param(event.id, "not a url")).await;

    assert_eq!(validation_field(result), "url");

    Ok(())
}
