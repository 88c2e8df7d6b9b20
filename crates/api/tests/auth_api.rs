//! HTTP-level tests for registration, login and the auth extractor.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, register_and_login, TEST_PASSWORD};
use learnpath_api::auth::password::verify_password;
use learnpath_db::repositories::UserRepo;
use sqlx::PgPool;

fn registration(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Ada Lovelace",
        "email": email,
        "password": TEST_PASSWORD,
        "confirm_password": TEST_PASSWORD,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_stores_lowercased_email_and_hash(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/auth/register", registration("Ada@Example.COM")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "ada@example.com");
    assert_eq!(json["data"]["name"], "Ada Lovelace");
    assert!(json["data"].get("password_hash").is_none());

    let user = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert!(verify_password(TEST_PASSWORD, &user.password_hash).unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_is_conflict_regardless_of_case(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/v1/auth/register", registration("dup@example.com")).await;

    let response = post_json(app, "/api/v1/auth/register", registration("DUP@example.com")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An account with this email already exists");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_validation_errors_are_per_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "A",
        "email": "nope",
        "password": "short",
        "confirm_password": "different",
    });

    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    for field in ["name", "email", "password", "confirm_password"] {
        assert!(json["fields"][field].is_array(), "missing error for {field}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_is_case_insensitive_and_returns_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/v1/auth/register", registration("login@example.com")).await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "LOGIN@example.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert_eq!(json["data"]["token_type"], "Bearer");
    assert_eq!(json["data"]["expires_in"], 15 * 60);
    assert_eq!(json["data"]["user"]["email"], "login@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_password_and_unknown_email_look_the_same(pool: PgPool) {
    let app = common::build_test_app(pool);
    post_json(app.clone(), "/api/v1/auth/register", registration("who@example.com")).await;

    let wrong = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": "who@example.com", "password": "not-the-password" }),
    )
    .await;
    let unknown = post_json(
        app,
        "/api/v1/auth/login",
        serde_json::json!({ "email": "ghost@example.com", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await, body_json(unknown).await);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_me_returns_current_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = register_and_login(&app, "me@example.com").await;

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["email"], "me@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_routes_require_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in ["/api/v1/goals", "/api/v1/dashboard", "/api/v1/auth/me"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
    }

    let response = get_auth(app, "/api/v1/goals", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
