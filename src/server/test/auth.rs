use super::*;

/// Tests the liveness endpoint.
///
/// Expected: 200 with status "ok"
#[tokio::test]
async fn health_is_public() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 listing the event routes and the bearer scheme
#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/api/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/events"].is_object());
    assert!(body["paths"]["/api/leaderboard"].is_object());
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());
}

/// Tests first-admin registration over HTTP.
///
/// Verifies that the returned token authenticates `/api/auth/me`.
///
/// Expected: 201 then 200 with role "admin"
#[tokio::test]
async fn registers_first_admin() {
    let app = TestApp::new().await;
    let code = app.state.admin_code_service.generate().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/admin/register",
            None,
            Some(json!({
                "code": code,
                "email": "chair@college.edu",
                "password": "organizer",
                "name": "Chair"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, me) = app.send(Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["role"], "admin");
    assert_eq!(me["email"], "chair@college.edu");
}

/// Tests registration with a wrong code.
///
/// Expected: 400
#[tokio::test]
async fn rejects_wrong_admin_code() {
    let app = TestApp::new().await;
    app.state.admin_code_service.generate().await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/auth/admin/register",
            None,
            Some(json!({
                "code": "nope",
                "email": "chair@college.edu",
                "password": "organizer",
                "name": "Chair"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests public login followed by a wrong password.
///
/// Expected: 200 with a token, then 401
#[tokio::test]
async fn public_login_round_trip() {
    let app = TestApp::new().await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/public/login",
            None,
            Some(json!({ "email": "fan@college.edu", "password": "secret1", "name": "Fan" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "public");
    assert!(body["token"].as_str().is_some());

    let (status, body) = app
        .send(
            Method::POST,
            "/api/auth/public/login",
            None,
            Some(json!({ "email": "fan@college.edu", "password": "wrong-pass" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

/// Tests `/api/auth/me` without and with a malformed token.
///
/// Expected: 401 both times
#[tokio::test]
async fn me_requires_valid_token() {
    let app = TestApp::new().await;

    let (status, _) = app.send(Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(Method::GET, "/api/auth/me", Some("not-a-jwt"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
