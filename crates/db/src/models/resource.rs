//! Resource model.

use learnpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `resources` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Resource {
    pub id: DbId,
    pub goal_id: DbId,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
