pub mod ai;
pub mod auth;
pub mod dashboard;
pub mod goals;
pub mod health;
pub mod notes;
pub mod resources;
pub mod views;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/me                       current user
///
/// /dashboard                     stats + goal list
///
/// /goals                         list, create
/// /goals/{id}                    get, update, delete
///
/// /resources                     create
/// /resources/{id}                update, delete
/// /resources/{id}/toggle         flip completion (PATCH)
///
/// /notes                         create
/// /notes/{id}                    update, delete
///
/// /ai/summary                    summarize content (POST)
/// /ai/study-plan                 weekly study plan (POST)
///
/// /views/revision?path=          current revision of a view
/// ```
///
/// Everything except register and login requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/goals", goals::router())
        .nest("/resources", resources::router())
        .nest("/notes", notes::router())
        .nest("/ai", ai::router())
        .nest("/views", views::router())
}
