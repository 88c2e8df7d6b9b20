use axum::routing::get;
use axum::Router;

use crate::handlers::views;
use crate::state::AppState;

/// Routes mounted at `/views`.
///
/// ```text
/// GET /revision?path= -> revision
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/revision", get(views::revision))
}
