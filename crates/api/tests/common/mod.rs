#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use learnpath_ai::{AiError, TextGenerator};
use learnpath_api::auth::jwt::JwtConfig;
use learnpath_api::config::ServerConfig;
use learnpath_api::router::build_app_router;
use learnpath_api::state::AppState;
use learnpath_events::{EventBus, ViewRevisions};
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

// ---------------------------------------------------------------------------
// Stub text generator
// ---------------------------------------------------------------------------

/// Records every prompt and answers with a canned reply, or fails.
#[derive(Default)]
pub struct StubGenerator {
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl StubGenerator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(AiError::ApiError {
                status: 503,
                body: "upstream overloaded".into(),
            });
        }
        Ok("## Summary\nGenerated text.".to_string())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Full application router over `pool`, with a stub generator.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Arc::new(StubGenerator::default()))
}

/// Same as [`build_test_app`] but with a caller-supplied generator.
pub fn build_test_app_with(pool: PgPool, generator: Arc<StubGenerator>) -> Router {
    let config = test_config();
    let event_bus = Arc::new(EventBus::default());
    let revisions = Arc::new(ViewRevisions::new());

    {
        let revisions = Arc::clone(&revisions);
        let rx = event_bus.subscribe();
        tokio::spawn(async move { revisions.run(rx).await });
    }

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus,
        revisions,
        generator,
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register `email` through the API and return a bearer token for it.
pub async fn register_and_login(app: &Router, email: &str) -> String {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        serde_json::json!({
            "name": "Test User",
            "email": email,
            "password": TEST_PASSWORD,
            "confirm_password": TEST_PASSWORD,
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "registration should succeed");

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": email, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), 200, "login should succeed");
    body_json(response).await["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a goal and return its id.
pub async fn create_goal(app: &Router, token: &str, title: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/goals",
        serde_json::json!({ "title": title }),
        token,
    )
    .await;
    assert_eq!(response.status(), 201, "goal creation should succeed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a resource under `goal_id` and return its id.
pub async fn create_resource(app: &Router, token: &str, goal_id: i64, resource_type: &str) -> i64 {
    let response = post_json_auth(
        app.clone(),
        "/api/v1/resources",
        serde_json::json!({
            "title": "Tour of the language",
            "type": resource_type,
            "url": "https://example.com/tour",
            "goal_id": goal_id,
        }),
        token,
    )
    .await;
    assert_eq!(response.status(), 201, "resource creation should succeed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
