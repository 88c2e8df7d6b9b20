//! The one authorization check every goal, resource and note operation
//! goes through.

use learnpath_core::ownership::{ensure_owned, OwnedEntity};
use learnpath_core::types::DbId;
use learnpath_db::repositories::OwnershipRepo;
use learnpath_db::DbPool;

use crate::error::AppResult;

/// Resolve `entity` up to its goal and require that `user_id` owns it.
///
/// Returns the goal id. Missing and foreign entities both fail with
/// `CoreError::NotFound`.
pub async fn authorize(pool: &DbPool, user_id: DbId, entity: OwnedEntity) -> AppResult<DbId> {
    let resolved = OwnershipRepo::resolve(pool, entity).await?;
    let goal_id = ensure_owned(entity, user_id, resolved).inspect_err(|_| {
        tracing::debug!(
            user_id,
            entity = entity.kind(),
            id = entity.id(),
            "Access denied or entity missing"
        );
    })?;
    Ok(goal_id)
}
