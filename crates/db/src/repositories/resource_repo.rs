//! Repository for the `resources` table.

use learnpath_core::resources::ResourceDraft;
use learnpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::Resource;

const COLUMNS: &str = "id, goal_id, title, resource_type, url, completed, created_at, updated_at";

pub struct ResourceRepo;

impl ResourceRepo {
    pub async fn create(
        pool: &PgPool,
        goal_id: DbId,
        draft: &ResourceDraft,
    ) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources (goal_id, title, resource_type, url, completed)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(goal_id)
            .bind(&draft.title)
            .bind(draft.resource_type.as_str())
            .bind(&draft.url)
            .bind(draft.completed)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resources of a goal, newest first.
    pub async fn list_by_goal(pool: &PgPool, goal_id: DbId) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM resources
             WHERE goal_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &ResourceDraft,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET
                title = $2,
                resource_type = $3,
                url = $4,
                completed = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(draft.resource_type.as_str())
            .bind(&draft.url)
            .bind(draft.completed)
            .fetch_optional(pool)
            .await
    }

    /// Flip `completed` in a single statement so concurrent toggles never
    /// read a stale value.
    pub async fn toggle_completed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!(
            "UPDATE resources SET completed = NOT completed
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a resource. Its notes cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
