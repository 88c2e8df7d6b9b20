//! Repository for the `goals` table.

use learnpath_core::goals::GoalDraft;
use learnpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::{Goal, GoalCountsRow};

const COLUMNS: &str = "id, user_id, title, description, status, target_date, created_at, updated_at";

/// Same columns qualified with the `g` alias for joined queries.
const G_COLUMNS: &str = "g.id, g.user_id, g.title, g.description, g.status, g.target_date, \
                         g.created_at, g.updated_at";

pub struct GoalRepo;

impl GoalRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        draft: &GoalDraft,
    ) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (user_id, title, description, status, target_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.status.as_str())
            .bind(draft.target_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All of a user's goals with resource and note counts, newest first.
    ///
    /// `note_count` covers notes linked to the goal itself.
    pub async fn list_with_counts(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<GoalCountsRow>, sqlx::Error> {
        let query = format!(
            "SELECT {G_COLUMNS},
                    (SELECT COUNT(*) FROM resources r WHERE r.goal_id = g.id) AS total_resources,
                    (SELECT COUNT(*) FROM resources r
                      WHERE r.goal_id = g.id AND r.completed) AS completed_resources,
                    (SELECT COUNT(*) FROM notes n WHERE n.goal_id = g.id) AS note_count
             FROM goals g
             WHERE g.user_id = $1
             ORDER BY g.created_at DESC, g.id DESC"
        );
        sqlx::query_as::<_, GoalCountsRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Replace all editable fields. Returns `None` if the row is gone.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        draft: &GoalDraft,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET
                title = $2,
                description = $3,
                status = $4,
                target_date = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.description)
            .bind(draft.status.as_str())
            .bind(draft.target_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal. Its resources and all their notes cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
