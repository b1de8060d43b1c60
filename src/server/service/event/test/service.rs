use super::*;

/// Tests creating an event.
///
/// Verifies that a new event starts Upcoming with no winners and keeps its tags in order.
///
/// Expected: Ok(Event) Upcoming with tags ["ME", "EE"]
#[tokio::test]
async fn creates_upcoming_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = EventService::new(db).create(fields("Volleyball Girls")).await?;

    assert_eq!(event.status, EventStatus::Upcoming);
    assert!(event.winners.is_empty());
    assert_eq!(event.branch_tags, vec!["ME".to_string(), "EE".to_string()]);

    Ok(())
}

/// Tests creating an event with a blank name.
///
/// Expected: Err(ValidationError) on field `name`, nothing stored
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EventService::new(db);
    let result = service.create(fields("   ")).await;

    match result {
        Err(AppError::ValidationErr(err)) => assert_eq!(err.field, "name"),
        other => panic!("Expected validation error, got: {:?}", other),
    }
    assert!(service.list(Default::default()).await?.is_empty());

    Ok(())
}

/// Tests updating descriptive fields.
///
/// Verifies that status and winners survive an update of a concluded event.
///
/// Expected: new name and tags, still Concluded with one winner
#[tokio::test]
async fn update_keeps_status_and_winners() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored =
        factory::create_concluded_event(db, &[(DbWinnerPosition::First, "CSE", Some(5.0))])
            .await?;

    let updated = EventService::new(db)
        .update(stored.id, fields("Renamed"))
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.branch_tags, vec!["ME".to_string(), "EE".to_string()]);
    assert_eq!(updated.status, EventStatus::Concluded);
    assert_eq!(updated.winners.len(), 1);

    Ok(())
}

/// Tests reading an event that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_missing_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventService::new(db).get(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the status endpoint path through the service.
///
/// Expected: Upcoming → Active succeeds; Active → Upcoming fails and leaves Active
#[tokio::test]
async fn set_status_only_moves_forward() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_event(db).await?;
    let service = EventService::new(db);

    let active = service.set_status(stored.id, EventStatus::Active).await?;
    assert_eq!(active.status, EventStatus::Active);

    let result = service.set_status(stored.id, EventStatus::Upcoming).await;
    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::InvalidTransition {
            from: EventStatus::Active,
            to: EventStatus::Upcoming
        }))
    ));
    assert_eq!(service.get(stored.id).await?.status, EventStatus::Active);

    Ok(())
}

/// Tests requesting Concluded through the status endpoint.
///
/// Expected: Err(EventError::InvalidTransition), event still Upcoming
#[tokio::test]
async fn set_status_cannot_conclude() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_event(db).await?;
    let service = EventService::new(db);

    let result = service.set_status(stored.id, EventStatus::Concluded).await;

    assert!(matches!(result, Err(AppError::EventErr(_))));
    assert_eq!(service.get(stored.id).await?.status, EventStatus::Upcoming);

    Ok(())
}

/// Tests concluding an event with winners.
///
/// Expected: Ok(Event) Concluded with stored winners and result
#[tokio::test]
async fn conclude_stores_winners() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_event(db).await?;

    let concluded = EventService::new(db)
        .conclude(
            stored.id,
            ConcludeEventParam {
                winners: vec![
                    WinnerInput::new(WinnerPosition::First, "CSE", Some(5.0)),
                    WinnerInput::new(WinnerPosition::Second, "ECE", Some(3.0)),
                ],
                result: Some("CSE beat ECE".to_string()),
            },
        )
        .await?;

    assert_eq!(concluded.status, EventStatus::Concluded);
    assert_eq!(concluded.winners.len(), 2);
    assert_eq!(concluded.winners[0].position, WinnerPosition::First);
    assert_eq!(concluded.result.as_deref(), Some("CSE beat ECE"));

    Ok(())
}

/// Tests that a rejected conclusion leaves the stored event untouched.
///
/// Expected: Err(ValidationError), event still Active with no winners
#[tokio::test]
async fn failed_conclude_leaves_event_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::event::EventFactory::new(db)
        .status(DbEventStatus::Active)
        .build()
        .await?;
    let service = EventService::new(db);

    let result = service
        .conclude(
            stored.id,
            conclude_param(vec![WinnerInput::new(WinnerPosition::First, " ", Some(5.0))]),
        )
        .await;

    assert!(matches!(result, Err(AppError::ValidationErr(_))));
    let event = service.get(stored.id).await?;
    assert_eq!(event.status, EventStatus::Active);
    assert!(event.winners.is_empty());

    Ok(())
}

/// Tests concluding the same event twice.
///
/// Expected: second call fails with InvalidTransition and the first winners remain
#[tokio::test]
async fn second_conclude_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_event(db).await?;
    let service = EventService::new(db);

    service
        .conclude(
            stored.id,
            conclude_param(vec![WinnerInput::new(WinnerPosition::First, "CSE", Some(5.0))]),
        )
        .await?;

    let result = service
        .conclude(
            stored.id,
            conclude_param(vec![WinnerInput::new(WinnerPosition::First, "ME", Some(5.0))]),
        )
        .await;

    assert!(matches!(result, Err(AppError::EventErr(_))));
    let event = service.get(stored.id).await?;
    assert_eq!(event.winners.len(), 1);
    assert_eq!(event.winners[0].branch, "CSE");

    Ok(())
}

/// Tests deleting an event.
///
/// Expected: Ok(()) then NotFound on a second delete
#[tokio::test]
async fn delete_removes_event() -> Result<(), AppError> {
    let test = TestBuilder::new().with_photo_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_event(db).await?;
    factory::create_photo(db, stored.id, &["final"]).await?;
    let service = EventService::new(db);

    service.delete(stored.id).await?;

    assert!(matches!(
        service.delete(stored.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
