//! Repository for the `notes` table.

use learnpath_core::notes::NoteParent;
use learnpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::Note;

const COLUMNS: &str = "id, content, goal_id, resource_id, created_at, updated_at";

const N_COLUMNS: &str = "n.id, n.content, n.goal_id, n.resource_id, n.created_at, n.updated_at";

pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note under exactly one parent.
    pub async fn create(
        pool: &PgPool,
        parent: NoteParent,
        content: &str,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (content, goal_id, resource_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(content)
            .bind(parent.goal_id())
            .bind(parent.resource_id())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Notes linked to the goal itself, newest first.
    pub async fn list_by_goal(pool: &PgPool, goal_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE goal_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }

    /// Notes linked to any of the goal's resources, newest first.
    pub async fn list_by_goal_resources(
        pool: &PgPool,
        goal_id: DbId,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {N_COLUMNS}
             FROM notes n
             JOIN resources r ON r.id = n.resource_id
             WHERE r.goal_id = $1
             ORDER BY n.created_at DESC, n.id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the content. Parent links are immutable.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET content = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
