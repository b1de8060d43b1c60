use super::*;

/// Tests ranking across two concluded events.
///
/// Verifies that a Team win worth 7 ranks above a First win worth 5, that Team
/// counts as a first-place medal, and that the remaining roster branches appear
/// with zero values.
///
/// Expected: ECE (7, 1 first) then CSE (5, 1 first) then five zeroed branches
#[test]
fn ranks_branches_by_points() {
    let events = vec![
        concluded(1, &[(WinnerPosition::First, "CSE", Some(5.0))]),
        concluded(2, &[(WinnerPosition::Team, "ECE", Some(7.0))]),
    ];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &[]);

    assert_eq!(standings.len(), BRANCH_ROSTER.len());
    assert_eq!(standings[0].branch, "ECE");
    assert_eq!(standings[0].points, 7.0);
    assert_eq!(standings[0].first_count, 1);
    assert_eq!(standings[1].branch, "CSE");
    assert_eq!(standings[1].points, 5.0);
    assert_eq!(standings[1].first_count, 1);
    for standing in &standings[2..] {
        assert_eq!(standing.points, 0.0);
        assert_eq!(standing.first_count, 0);
        assert_eq!(standing.second_count, 0);
        assert_eq!(standing.third_count, 0);
    }
}

/// Tests the leaderboard with no events at all.
///
/// Verifies that every roster branch is listed in roster order.
///
/// Expected: seven zeroed entries in roster order
#[test]
fn lists_full_roster_without_results() {
    let standings = compute_standings(&[], &BRANCH_ROSTER, &[]);

    let branches: Vec<&str> = standings.iter().map(|s| s.branch.as_str()).collect();
    assert_eq!(branches, BRANCH_ROSTER.to_vec());
    assert!(standings.iter().all(|s| s.points == 0.0));
}

/// Tests that winners of events which are not concluded are ignored.
///
/// Expected: all branches at zero
#[test]
fn ignores_events_not_concluded() {
    let events = vec![
        event_with(
            1,
            DbEventStatus::Active,
            &[(WinnerPosition::First, "ME", Some(10.0))],
        ),
        event_with(
            2,
            DbEventStatus::Upcoming,
            &[(WinnerPosition::Second, "EE", Some(3.0))],
        ),
    ];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &[]);

    assert!(standings.iter().all(|s| s.points == 0.0 && s.first_count == 0));
    assert!(standings.iter().all(|s| s.second_count == 0));
}

/// Tests a winner entry without points.
///
/// Verifies that the medal is still counted while no points are added.
///
/// Expected: ME with 0 points and one second-place medal
#[test]
fn counts_medal_without_points() {
    let events = vec![concluded(1, &[(WinnerPosition::Second, "ME", None)])];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &[]);

    let me = standings.iter().find(|s| s.branch == "ME").unwrap();
    assert_eq!(me.points, 0.0);
    assert_eq!(me.second_count, 1);
    assert_eq!(standings[0].branch, "ME");
}

/// Tests accumulation of several placings for one branch.
///
/// Expected: CE with 9 points and one medal of each kind
#[test]
fn sums_points_and_medals_across_events() {
    let events = vec![
        concluded(
            1,
            &[
                (WinnerPosition::First, "CE", Some(5.0)),
                (WinnerPosition::Second, "EE", Some(3.0)),
            ],
        ),
        concluded(2, &[(WinnerPosition::Second, "CE", Some(3.0))]),
        concluded(3, &[(WinnerPosition::Third, "CE", Some(1.0))]),
    ];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &[]);

    assert_eq!(standings[0].branch, "CE");
    assert_eq!(standings[0].points, 9.0);
    assert_eq!(standings[0].first_count, 1);
    assert_eq!(standings[0].second_count, 1);
    assert_eq!(standings[0].third_count, 1);
    assert_eq!(standings[1].branch, "EE");
}

/// Tests tie-breaking on equal points.
///
/// Verifies that first-place medals break a points tie, and that full ties keep
/// roster order.
///
/// Expected: EE (1 first) before ME (2 seconds); CE before EE on a full tie
#[test]
fn breaks_ties_by_medals_then_roster_order() {
    let events = vec![
        concluded(1, &[(WinnerPosition::First, "EE", Some(6.0))]),
        concluded(
            2,
            &[
                (WinnerPosition::Second, "ME", Some(3.0)),
                (WinnerPosition::Second, "ME", Some(3.0)),
            ],
        ),
    ];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &[]);
    assert_eq!(standings[0].branch, "EE");
    assert_eq!(standings[1].branch, "ME");

    let tied = vec![
        concluded(3, &[(WinnerPosition::First, "EE", Some(5.0))]),
        concluded(4, &[(WinnerPosition::First, "CE", Some(5.0))]),
    ];

    let standings = compute_standings(&tied, &BRANCH_ROSTER, &[]);
    assert_eq!(standings[0].branch, "CE");
    assert_eq!(standings[1].branch, "EE");
}

/// Tests a manual override for a branch.
///
/// Verifies that the override replaces the computed values rather than adding to them.
///
/// Expected: CSE first with exactly the override values
#[test]
fn override_replaces_computed_values() {
    let events = vec![
        concluded(1, &[(WinnerPosition::First, "CSE", Some(5.0))]),
        concluded(2, &[(WinnerPosition::Team, "ECE", Some(7.0))]),
    ];
    let overrides = vec![manual("CSE", 100.0, (4, 0, 2))];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &overrides);

    assert_eq!(standings[0].branch, "CSE");
    assert_eq!(standings[0].points, 100.0);
    assert_eq!(standings[0].first_count, 4);
    assert_eq!(standings[0].second_count, 0);
    assert_eq!(standings[0].third_count, 2);
    assert_eq!(standings[1].branch, "ECE");
}

/// Tests a validated override whose points were sent as `-0.0`.
///
/// Verifies that the stored points equal `0.0` and that first-place medals still
/// break the tie against branches with no results.
///
/// Expected: CSE first with 0 points and five first places
#[test]
fn negative_zero_override_ties_on_points() {
    let param = UpsertOverrideParam::try_from_dto(ManualOverrideDto {
        branch: "CSE".to_string(),
        points: -0.0,
        first_count: 5,
        second_count: 0,
        third_count: 0,
    })
    .unwrap();
    assert!(param.points.is_sign_positive());

    let standings = compute_standings(&[], &BRANCH_ROSTER, &[manual("CSE", -0.0, (5, 0, 0))]);

    assert_eq!(standings[0].branch, "CSE");
    assert_eq!(standings[0].first_count, 5);
    assert_eq!(standings[1].branch, "ECE");
}

/// Tests a manual override that lowers a branch.
///
/// Expected: ECE drops to zero and below CSE
#[test]
fn override_can_lower_a_branch() {
    let events = vec![
        concluded(1, &[(WinnerPosition::First, "CSE", Some(5.0))]),
        concluded(2, &[(WinnerPosition::Team, "ECE", Some(7.0))]),
    ];
    let overrides = vec![manual("ECE", 0.0, (0, 0, 0))];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &overrides);

    assert_eq!(standings[0].branch, "CSE");
    let ece = standings.iter().find(|s| s.branch == "ECE").unwrap();
    assert_eq!(ece.points, 0.0);
    assert_eq!(ece.first_count, 0);
}

/// Tests winners and overrides for branches outside the roster.
///
/// Verifies that unknown branches get their own entry after the roster.
///
/// Expected: eight entries, with the unknown branch ranked by its points
#[test]
fn appends_branches_outside_roster() {
    let events = vec![concluded(
        1,
        &[(WinnerPosition::First, "Architecture", Some(5.0))],
    )];
    let overrides = vec![manual("Alumni", 0.0, (0, 0, 0))];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &overrides);

    assert_eq!(standings.len(), BRANCH_ROSTER.len() + 2);
    assert_eq!(standings[0].branch, "Architecture");
    assert_eq!(standings.last().unwrap().branch, "Alumni");
}

/// Tests that blank branch names are skipped and whitespace is trimmed.
///
/// Expected: only CSE is credited
#[test]
fn skips_blank_branches() {
    let events = vec![concluded(
        1,
        &[
            (WinnerPosition::First, "  ", Some(5.0)),
            (WinnerPosition::Second, " CSE ", Some(3.0)),
        ],
    )];

    let standings = compute_standings(&events, &BRANCH_ROSTER, &[]);

    assert_eq!(standings.len(), BRANCH_ROSTER.len());
    assert_eq!(standings[0].branch, "CSE");
    assert_eq!(standings[0].points, 3.0);
    assert_eq!(standings[0].first_count, 0);
}
