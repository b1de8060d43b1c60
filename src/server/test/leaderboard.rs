use super::*;

async fn conclude(app: &TestApp, token: &str, id: i64, position: &str, branch: &str, points: f64) {
    let (status, _) = app
        .send(
            Method::PATCH,
            &format!("/api/events/{}/winners", id),
            Some(token),
            Some(json!({
                "winners": [{ "position": position, "branch": branch, "points": points }]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

/// Tests the leaderboard after two concluded events and a manual override.
///
/// Expected: ECE 7 above CSE 5; after overriding CSE to 100, CSE first
#[tokio::test]
async fn leaderboard_ranks_and_applies_overrides() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let first = app.create_event(&admin, "Cricket").await;
    let second = app.create_event(&admin, "Football").await;
    conclude(&app, &admin, first, "First", "CSE", 5.0).await;
    conclude(&app, &admin, second, "Team", "ECE", 7.0).await;

    let (status, body) = app.send(Method::GET, "/api/leaderboard", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["branch"], "ECE");
    assert_eq!(rows[0]["points"], 7.0);
    assert_eq!(rows[0]["firstCount"], 1);
    assert_eq!(rows[1]["branch"], "CSE");
    assert!(rows[2..].iter().all(|r| r["points"] == 0.0));

    let (status, _) = app
        .send(
            Method::PATCH,
            "/api/leaderboard/manual",
            Some(&admin),
            Some(json!({
                "branch": "CSE",
                "points": 100,
                "firstCount": 0,
                "secondCount": 0,
                "thirdCount": 0
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.send(Method::GET, "/api/leaderboard", None, None).await;
    assert_eq!(body[0]["branch"], "CSE");
    assert_eq!(body[0]["points"], 100.0);
}

/// Tests override validation.
///
/// Expected: 400 naming `thirdCount`
#[tokio::test]
async fn rejects_negative_override_counts() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/leaderboard/manual",
            Some(&admin),
            Some(json!({
                "branch": "ME",
                "points": 3,
                "firstCount": 0,
                "secondCount": 0,
                "thirdCount": -1
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "thirdCount");
}

/// Tests clearing the leaderboard over HTTP.
///
/// Expected: 403 for a public user; 200 for an admin, then all zeros
#[tokio::test]
async fn clear_requires_admin_and_zeroes() {
    let app = TestApp::new().await;
    let admin = app.admin_token().await;
    let public = app.public_token().await;
    let id = app.create_event(&admin, "Tennis").await;
    conclude(&app, &admin, id, "First", "EE", 7.0).await;

    let (status, _) = app
        .send(Method::POST, "/api/leaderboard/clear", Some(&public), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .send(Method::POST, "/api/leaderboard/clear", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.send(Method::GET, "/api/leaderboard", None, None).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["points"] == 0.0 && r["firstCount"] == 0));

    let (_, event) = app
        .send(Method::GET, &format!("/api/events/{}", id), None, None)
        .await;
    assert_eq!(event["status"], "Concluded");
}

/// Tests the static points table.
///
/// Expected: 200 with boys and girls sections
#[tokio::test]
async fn serves_points_system() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(Method::GET, "/api/leaderboard/points-system", None, None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["boys"].as_array().unwrap().is_empty());
    assert!(!body["girls"].as_array().unwrap().is_empty());
}
