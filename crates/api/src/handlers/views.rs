//! View revision lookups for client-side cache invalidation.

use axum::extract::{Query, State};
use axum::Json;
use learnpath_core::ownership::OwnedEntity;
use learnpath_events::goal_view_id;
use serde::Serialize;

use crate::authz::authorize;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ViewPathParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ViewRevision {
    pub path: String,
    pub revision: u64,
}

/// GET /api/v1/views/revision?path=/dashboard
///
/// Revisions are the caller's own. A `/goals/{id}` path must name a goal the
/// caller owns, otherwise 404 as for the goal itself.
pub async fn revision(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ViewPathParams>,
) -> AppResult<Json<DataResponse<ViewRevision>>> {
    if !params.path.starts_with('/') {
        return Err(AppError::BadRequest(
            "View path must start with '/'".into(),
        ));
    }

    if let Some(goal_id) = goal_view_id(&params.path) {
        authorize(&state.pool, auth.user_id, OwnedEntity::Goal(goal_id)).await?;
    }

    let revision = state.revisions.revision(auth.user_id, &params.path).await;
    Ok(Json(DataResponse {
        data: ViewRevision {
            path: params.path,
            revision,
        },
    }))
}
