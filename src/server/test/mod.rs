use axum::{
    body::{to_bytes, Body},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use chrono::Duration;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    middleware::token::TokenService, router::router, service::admin::code::AdminCodeService,
    state::AppState,
};

mod auth;
mod leaderboard;

/// Router wired to an in-memory database holding every table.
struct TestApp {
    _test: TestContext,
    state: AppState,
    router: Router,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_photo_tables()
            .with_announcement_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();
        let state = AppState::new(
            db,
            TokenService::new("router-test-secret", Duration::hours(1)),
            AdminCodeService::new(),
        );
        let router = router().with_state(state.clone());

        Self {
            _test: test,
            state,
            router,
        }
    }

    async fn admin_token(&self) -> String {
        let admin = factory::create_admin(&self.state.db).await.unwrap();
        self.state.tokens.issue(admin.id).unwrap()
    }

    async fn public_token(&self) -> String {
        let user = factory::create_user(&self.state.db).await.unwrap();
        self.state.tokens.issue(user.id).unwrap()
    }

    /// Sends a request and returns the status and the JSON body (`Null` when empty).
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    /// Creates an event through the API and returns its ID.
    async fn create_event(&self, token: &str, name: &str) -> i64 {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/events",
                Some(token),
                Some(event_body(name)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }
}

fn event_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Knockout",
        "day": "2026-03-14",
        "time": "10:00 AM",
        "venue": "Main Ground",
        "branchTags": ["CSE", "ECE"],
        "gameType": "Football",
        "category": "Boys",
        "eventType": "Team",
        "points": { "first": 7, "second": 4, "third": 2 }
    })
}
