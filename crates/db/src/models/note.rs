//! Note model.

use learnpath_core::notes::NoteParent;
use learnpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notes` table. Exactly one of `goal_id` / `resource_id`
/// is set (CHECK constraint `ck_notes_single_parent`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub content: String,
    pub goal_id: Option<DbId>,
    pub resource_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Note {
    pub fn parent(&self) -> Option<NoteParent> {
        NoteParent::from_links(self.goal_id, self.resource_id).ok()
    }
}
