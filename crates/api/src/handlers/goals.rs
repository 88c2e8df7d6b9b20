//! Handlers for the `/goals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use learnpath_core::goals::{GoalInput, GoalStatus};
use learnpath_core::ownership::OwnedEntity;
use learnpath_core::types::DbId;
use learnpath_db::models::goal::{Goal, GoalDetail, GoalWithProgress};
use learnpath_db::repositories::{GoalRepo, NoteRepo, ResourceRepo};
use learnpath_events::{goal_view, DomainEvent, DASHBOARD_VIEW};

use crate::authz::authorize;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// All of the caller's goals with progress, newest first.
pub(crate) async fn list_for_user(
    state: &AppState,
    user_id: DbId,
) -> AppResult<Vec<GoalWithProgress>> {
    let rows = GoalRepo::list_with_counts(&state.pool, user_id).await?;
    Ok(rows.into_iter().map(GoalWithProgress::from).collect())
}

fn goal_event(event_type: &str, user_id: DbId, goal_id: DbId) -> DomainEvent {
    DomainEvent::new(event_type)
        .with_source("goal", goal_id)
        .with_actor(user_id)
        .refresh(DASHBOARD_VIEW)
        .refresh(goal_view(goal_id))
}

/// GET /api/v1/goals
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<GoalWithProgress>>>> {
    let goals = list_for_user(&state, auth.user_id).await?;
    Ok(Json(DataResponse { data: goals }))
}

/// POST /api/v1/goals
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<GoalInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Goal>>)> {
    let draft = input.into_draft(GoalStatus::default())?;
    let goal = GoalRepo::create(&state.pool, auth.user_id, &draft).await?;

    tracing::info!(user_id = auth.user_id, goal_id = goal.id, "Goal created");
    state
        .event_bus
        .publish(goal_event("goal.created", auth.user_id, goal.id));

    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

/// GET /api/v1/goals/{id}
///
/// The goal with its resources, its notes, its resources' notes, and
/// progress.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GoalDetail>>> {
    authorize(&state.pool, auth.user_id, OwnedEntity::Goal(id)).await?;

    let goal = GoalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(OwnedEntity::Goal(id).not_found())?;
    let resources = ResourceRepo::list_by_goal(&state.pool, id).await?;
    let notes = NoteRepo::list_by_goal(&state.pool, id).await?;
    let resource_notes = NoteRepo::list_by_goal_resources(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: GoalDetail::new(goal, resources, notes, resource_notes),
    }))
}

/// PUT /api/v1/goals/{id}
///
/// An omitted `status` keeps the current one.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GoalInput>,
) -> AppResult<Json<DataResponse<Goal>>> {
    authorize(&state.pool, auth.user_id, OwnedEntity::Goal(id)).await?;

    let current = GoalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(OwnedEntity::Goal(id).not_found())?;
    let draft = input.into_draft(current.status())?;

    let goal = GoalRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or(OwnedEntity::Goal(id).not_found())?;

    tracing::info!(user_id = auth.user_id, goal_id = id, status = %draft.status, "Goal updated");
    state
        .event_bus
        .publish(goal_event("goal.updated", auth.user_id, id));

    Ok(Json(DataResponse { data: goal }))
}

/// DELETE /api/v1/goals/{id}
///
/// Removes the goal, its resources and all their notes.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    authorize(&state.pool, auth.user_id, OwnedEntity::Goal(id)).await?;

    if !GoalRepo::delete(&state.pool, id).await? {
        return Err(OwnedEntity::Goal(id).not_found().into());
    }

    tracing::info!(user_id = auth.user_id, goal_id = id, "Goal deleted");
    state
        .event_bus
        .publish(goal_event("goal.deleted", auth.user_id, id));

    Ok(StatusCode::NO_CONTENT)
}
