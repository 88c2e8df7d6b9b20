//! Route definitions for the `/goals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::goals;
use crate::state::AppState;

/// Routes mounted at `/goals`.
///
/// ```text
/// GET    /     -> list
/// POST   /     -> create
/// GET    /{id} -> get_by_id
/// PUT    /{id} -> update
/// DELETE /{id} -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goals::list).post(goals::create))
        .route(
            "/{id}",
            get(goals::get_by_id)
                .put(goals::update)
                .delete(goals::delete),
        )
}
