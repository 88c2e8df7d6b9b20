//! HTTP-level tests for summary and study plan generation against a stub
//! generator.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, post_json, post_json_auth, register_and_login, StubGenerator};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_short_summary_content_never_reaches_generator(pool: PgPool) {
    let generator = Arc::new(StubGenerator::default());
    let app = common::build_test_app_with(pool, Arc::clone(&generator));
    let token = register_and_login(&app, "short@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/ai/summary",
        serde_json::json!({ "content": "0123456789" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["content"].is_array());
    assert_eq!(generator.calls(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_summary_returns_generated_text(pool: PgPool) {
    let generator = Arc::new(StubGenerator::default());
    let app = common::build_test_app_with(pool, Arc::clone(&generator));
    let token = register_and_login(&app, "summary@example.com").await;
    let content = "Ownership is Rust's most unique feature and enables memory safety.";

    let response = post_json_auth(
        app,
        "/api/v1/ai/summary",
        serde_json::json!({ "content": content }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"]["summary"],
        "## Summary\nGenerated text."
    );
    assert_eq!(generator.calls(), 1);
    assert!(generator.last_prompt().unwrap().contains(content));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_generator_failure_is_generic_502(pool: PgPool) {
    let generator = Arc::new(StubGenerator::failing());
    let app = common::build_test_app_with(pool, Arc::clone(&generator));
    let token = register_and_login(&app, "fail@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/ai/summary",
        serde_json::json!({ "content": "a".repeat(60) }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "GENERATION_FAILED");
    assert!(!json["error"].as_str().unwrap().contains("overloaded"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_study_plan_requires_future_date(pool: PgPool) {
    let generator = Arc::new(StubGenerator::default());
    let app = common::build_test_app_with(pool, Arc::clone(&generator));
    let token = register_and_login(&app, "past@example.com").await;
    let today = Utc::now().date_naive();

    let response = post_json_auth(
        app,
        "/api/v1/ai/study-plan",
        serde_json::json!({ "goal_title": "Learn Rust", "target_date": today.to_string() }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["target_date"].is_array());
    assert_eq!(generator.calls(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_study_plan_prompt_uses_long_date(pool: PgPool) {
    let generator = Arc::new(StubGenerator::default());
    let app = common::build_test_app_with(pool, Arc::clone(&generator));
    let token = register_and_login(&app, "plan@example.com").await;
    let target = Utc::now().date_naive() + Duration::days(30);
    let long_date = target.format("%B %-d, %Y").to_string();

    let response = post_json_auth(
        app,
        "/api/v1/ai/study-plan",
        serde_json::json!({
            "goal_title": "Learn Rust",
            "description": "Ownership and async",
            "target_date": target.to_string(),
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["target_date"], long_date.as_str());
    assert!(json["data"]["plan"].is_string());

    let prompt = generator.last_prompt().unwrap();
    assert!(prompt.contains("Learn Rust"));
    assert!(prompt.contains("Ownership and async"));
    assert!(prompt.contains(&long_date));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ai_routes_require_auth(pool: PgPool) {
    let generator = Arc::new(StubGenerator::default());
    let app = common::build_test_app_with(pool, Arc::clone(&generator));

    let response = post_json(
        app,
        "/api/v1/ai/summary",
        serde_json::json!({ "content": "a".repeat(60) }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(generator.calls(), 0);
}
