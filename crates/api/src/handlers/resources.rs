//! Handlers for the `/resources` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use learnpath_core::ownership::OwnedEntity;
use learnpath_core::resources::{toggle_message, ResourceInput};
use learnpath_core::types::DbId;
use learnpath_db::models::resource::Resource;
use learnpath_db::repositories::ResourceRepo;
use learnpath_events::{goal_view, DomainEvent, DASHBOARD_VIEW};

use crate::authz::authorize;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

fn resource_event(event_type: &str, user_id: DbId, resource_id: DbId, goal_id: DbId) -> DomainEvent {
    DomainEvent::new(event_type)
        .with_source("resource", resource_id)
        .with_actor(user_id)
        .refresh(DASHBOARD_VIEW)
        .refresh(goal_view(goal_id))
}

/// POST /api/v1/resources
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ResourceInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Resource>>)> {
    let (goal_id, draft) = input.into_new()?;
    authorize(&state.pool, auth.user_id, OwnedEntity::Goal(goal_id)).await?;

    let resource = ResourceRepo::create(&state.pool, goal_id, &draft).await?;

    tracing::info!(
        user_id = auth.user_id,
        goal_id,
        resource_id = resource.id,
        resource_type = %draft.resource_type,
        "Resource created"
    );
    state.event_bus.publish(resource_event(
        "resource.created",
        auth.user_id,
        resource.id,
        goal_id,
    ));

    Ok((StatusCode::CREATED, Json(DataResponse { data: resource })))
}

/// PUT /api/v1/resources/{id}
///
/// An omitted `completed` keeps the current value. `goal_id` is ignored.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ResourceInput>,
) -> AppResult<Json<DataResponse<Resource>>> {
    let goal_id = authorize(&state.pool, auth.user_id, OwnedEntity::Resource(id)).await?;

    let current = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(OwnedEntity::Resource(id).not_found())?;
    let draft = input.into_update(current.completed)?;

    let resource = ResourceRepo::update(&state.pool, id, &draft)
        .await?
        .ok_or(OwnedEntity::Resource(id).not_found())?;

    tracing::info!(user_id = auth.user_id, resource_id = id, "Resource updated");
    state
        .event_bus
        .publish(resource_event("resource.updated", auth.user_id, id, goal_id));

    Ok(Json(DataResponse { data: resource }))
}

/// PATCH /api/v1/resources/{id}/toggle
pub async fn toggle(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse<Resource>>> {
    let goal_id = authorize(&state.pool, auth.user_id, OwnedEntity::Resource(id)).await?;

    let resource = ResourceRepo::toggle_completed(&state.pool, id)
        .await?
        .ok_or(OwnedEntity::Resource(id).not_found())?;

    tracing::info!(
        user_id = auth.user_id,
        resource_id = id,
        completed = resource.completed,
        "Resource toggled"
    );
    state
        .event_bus
        .publish(resource_event("resource.toggled", auth.user_id, id, goal_id));

    Ok(Json(MessageResponse {
        message: toggle_message(resource.completed),
        data: resource,
    }))
}

/// DELETE /api/v1/resources/{id}
///
/// Notes attached to the resource go with it.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let goal_id = authorize(&state.pool, auth.user_id, OwnedEntity::Resource(id)).await?;

    if !ResourceRepo::delete(&state.pool, id).await? {
        return Err(OwnedEntity::Resource(id).not_found().into());
    }

    tracing::info!(user_id = auth.user_id, resource_id = id, "Resource deleted");
    state
        .event_bus
        .publish(resource_event("resource.deleted", auth.user_id, id, goal_id));

    Ok(StatusCode::NO_CONTENT)
}
