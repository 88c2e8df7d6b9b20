use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST /summary    -> summary
/// POST /study-plan -> study_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", post(ai::summary))
        .route("/study-plan", post(ai::study_plan))
}
