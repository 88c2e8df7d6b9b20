//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use learnpath_core::notes::{validate_note_content, NoteContentInput, NoteInput};
use learnpath_core::ownership::OwnedEntity;
use learnpath_core::types::DbId;
use learnpath_db::models::note::Note;
use learnpath_db::repositories::NoteRepo;
use learnpath_events::{goal_view, DomainEvent, DASHBOARD_VIEW};

use crate::authz::authorize;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn note_event(event_type: &str, user_id: DbId, note_id: DbId, goal_id: DbId) -> DomainEvent {
    DomainEvent::new(event_type)
        .with_source("note", note_id)
        .with_actor(user_id)
        .refresh(DASHBOARD_VIEW)
        .refresh(goal_view(goal_id))
}

/// POST /api/v1/notes
///
/// Exactly one of `goal_id` / `resource_id` must be given; the parent must
/// belong to the caller.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NoteInput>,
) -> AppResult<(StatusCode, Json<DataResponse<Note>>)> {
    let draft = input.into_draft()?;
    let goal_id = authorize(&state.pool, auth.user_id, draft.parent.into()).await?;

    let note = NoteRepo::create(&state.pool, draft.parent, &draft.content).await?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, goal_id, "Note created");
    state
        .event_bus
        .publish(note_event("note.created", auth.user_id, note.id, goal_id));

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// PUT /api/v1/notes/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<NoteContentInput>,
) -> AppResult<Json<DataResponse<Note>>> {
    let goal_id = authorize(&state.pool, auth.user_id, OwnedEntity::Note(id)).await?;
    let content = validate_note_content(&input.content)?;

    let note = NoteRepo::update_content(&state.pool, id, &content)
        .await?
        .ok_or(OwnedEntity::Note(id).not_found())?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note updated");
    state
        .event_bus
        .publish(note_event("note.updated", auth.user_id, id, goal_id));

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let goal_id = authorize(&state.pool, auth.user_id, OwnedEntity::Note(id)).await?;

    if !NoteRepo::delete(&state.pool, id).await? {
        return Err(OwnedEntity::Note(id).not_found().into());
    }

    tracing::info!(user_id = auth.user_id, note_id = id, "Note deleted");
    state
        .event_bus
        .publish(note_event("note.deleted", auth.user_id, id, goal_id));

    Ok(StatusCode::NO_CONTENT)
}
