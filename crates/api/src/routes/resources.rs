//! Route definitions for the `/resources` resource.

use axum::routing::{patch, post, put};
use axum::Router;

use crate::handlers::resources;
use crate::state::AppState;

/// Routes mounted at `/resources`.
///
/// ```text
/// POST   /            -> create
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// PATCH  /{id}/toggle -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(resources::create))
        .route("/{id}", put(resources::update).delete(resources::delete))
        .route("/{id}/toggle", patch(resources::toggle))
}
