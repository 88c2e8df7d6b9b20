//! Resolves any owned entity to its goal and owning user.
//!
//! This is the read half of the authorization predicate; the decision is
//! made by [`learnpath_core::ownership::ensure_owned`].

use learnpath_core::ownership::{OwnedEntity, Ownership};
use sqlx::PgPool;

pub struct OwnershipRepo;

impl OwnershipRepo {
    /// Walk up the chain to `(user_id, goal_id)`. `None` if the entity (or
    /// anything above it) does not exist.
    pub async fn resolve(
        pool: &PgPool,
        entity: OwnedEntity,
    ) -> Result<Option<Ownership>, sqlx::Error> {
        let query = match entity {
            OwnedEntity::Goal(_) => "SELECT g.user_id, g.id AS goal_id FROM goals g WHERE g.id = $1",
            OwnedEntity::Resource(_) => {
                "SELECT g.user_id, g.id AS goal_id
                 FROM resources r
                 JOIN goals g ON g.id = r.goal_id
                 WHERE r.id = $1"
            }
            OwnedEntity::Note(_) => {
                "SELECT g.user_id, g.id AS goal_id
                 FROM notes n
                 LEFT JOIN resources r ON r.id = n.resource_id
                 JOIN goals g ON g.id = COALESCE(n.goal_id, r.goal_id)
                 WHERE n.id = $1"
            }
        };

        let row: Option<(i64, i64)> = sqlx::query_as(query)
            .bind(entity.id())
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|(user_id, goal_id)| Ownership { user_id, goal_id }))
    }
}
