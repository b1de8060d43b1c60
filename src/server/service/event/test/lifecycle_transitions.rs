use super::*;

/// Tests starting an upcoming event.
///
/// Expected: Ok(Event) with status Active
#[test]
fn upcoming_moves_to_active() {
    let event = event_in(DbEventStatus::Upcoming);

    let updated = lifecycle::set_status(event, EventStatus::Active).unwrap();

    assert_eq!(updated.status, EventStatus::Active);
}

/// Tests status changes the status endpoint refuses.
///
/// Verifies that moving backwards, repeating a status and jumping straight to
/// Concluded are all rejected with the current and requested status.
///
/// Expected: Err(EventError::InvalidTransition) for every pair
#[test]
fn rejects_other_transitions() {
    let cases = [
        (DbEventStatus::Upcoming, EventStatus::Upcoming),
        (DbEventStatus::Upcoming, EventStatus::Concluded),
        (DbEventStatus::Active, EventStatus::Active),
        (DbEventStatus::Active, EventStatus::Upcoming),
        (DbEventStatus::Active, EventStatus::Concluded),
        (DbEventStatus::Concluded, EventStatus::Active),
        (DbEventStatus::Concluded, EventStatus::Upcoming),
    ];

    for (stored, requested) in cases {
        let event = event_in(stored);
        let from = event.status;

        let result = lifecycle::set_status(event, requested);

        assert_eq!(
            result,
            Err(EventError::InvalidTransition {
                from,
                to: requested
            })
        );
    }
}

/// Tests concluding an active event.
///
/// Verifies that blank-branch entries are dropped, branches trimmed, and the
/// result text stored.
///
/// Expected: Ok(Event) Concluded with two winners
#[test]
fn concludes_with_filtered_winners() {
    let event = event_in(DbEventStatus::Active);
    let param = ConcludeEventParam {
        winners: vec![
            WinnerInput::new(WinnerPosition::First, " CSE ", Some(5.0)),
            WinnerInput::new(WinnerPosition::Second, "", Some(3.0)),
            WinnerInput {
                position: WinnerPosition::Third,
                branch: None,
                points: Some(1.0),
                player_of_the_match: None,
            },
            WinnerInput::new(WinnerPosition::Third, "ME", None),
        ],
        result: Some("CSE won by 20 runs".to_string()),
    };

    let concluded = lifecycle::conclude_with_winners(event, param).unwrap();

    assert_eq!(concluded.status, EventStatus::Concluded);
    assert_eq!(concluded.winners.len(), 2);
    assert_eq!(concluded.winners[0].branch, "CSE");
    assert_eq!(concluded.winners[1].branch, "ME");
    assert_eq!(concluded.winners[1].points, None);
    assert_eq!(concluded.result.as_deref(), Some("CSE won by 20 runs"));
}

/// Tests concluding an upcoming event directly.
///
/// Expected: Ok(Event) Concluded
#[test]
fn concludes_upcoming_event() {
    let event = event_in(DbEventStatus::Upcoming);

    let concluded = lifecycle::conclude_with_winners(
        event,
        conclude_param(vec![WinnerInput::new(WinnerPosition::Team, "ECE", Some(7.0))]),
    )
    .unwrap();

    assert_eq!(concluded.status, EventStatus::Concluded);
}

/// Tests concluding with only blank winner entries.
///
/// Expected: Err(ValidationError) on field `winners`
#[test]
fn rejects_when_no_winner_survives() {
    let event = event_in(DbEventStatus::Active);

    let result = lifecycle::conclude_with_winners(
        event,
        conclude_param(vec![
            WinnerInput::new(WinnerPosition::First, "   ", Some(5.0)),
            WinnerInput::new(WinnerPosition::Second, "", None),
        ]),
    );

    match result {
        Err(AppError::ValidationErr(err)) => assert_eq!(err.field, "winners"),
        other => panic!("Expected validation error, got: {:?}", other),
    }
}

/// Tests concluding with negative points.
///
/// Expected: Err(ValidationError) on field `winners.points`
#[test]
fn rejects_negative_points() {
    let event = event_in(DbEventStatus::Active);

    let result = lifecycle::conclude_with_winners(
        event,
        conclude_param(vec![WinnerInput::new(WinnerPosition::First, "CSE", Some(-1.0))]),
    );

    match result {
        Err(AppError::ValidationErr(err)) => assert_eq!(err.field, "winners.points"),
        other => panic!("Expected validation error, got: {:?}", other),
    }
}

/// Tests concluding with points sent as `-0.0`.
///
/// Expected: Ok(Event) with the winner's points stored as positive zero
#[test]
fn folds_negative_zero_points() {
    let event = event_in(DbEventStatus::Active);

    let concluded = lifecycle::conclude_with_winners(
        event,
        conclude_param(vec![WinnerInput::new(WinnerPosition::First, "CSE", Some(-0.0))]),
    )
    .unwrap();

    let points = concluded.winners[0].points.unwrap();
    assert!(points.is_sign_positive());
}

/// Tests concluding an event that is already concluded.
///
/// Expected: Err(EventError::InvalidTransition)
#[test]
fn rejects_second_conclusion() {
    let event = event_in(DbEventStatus::Concluded);

    let result = lifecycle::conclude_with_winners(
        event,
        conclude_param(vec![WinnerInput::new(WinnerPosition::First, "CSE", Some(5.0))]),
    );

    assert!(matches!(
        result,
        Err(AppError::EventErr(EventError::InvalidTransition { .. }))
    ));
}
