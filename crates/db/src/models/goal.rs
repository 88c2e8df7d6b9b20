//! Goal model plus the progress-annotated read shapes.

use chrono::NaiveDate;
use learnpath_core::goals::GoalStatus;
use learnpath_core::progress::Progress;
use learnpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::note::Note;
use crate::models::resource::Resource;

/// A row from the `goals` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Goal {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub target_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Goal {
    /// Typed status. The column is CHECK-constrained to valid values.
    pub fn status(&self) -> GoalStatus {
        self.status.parse().unwrap_or_default()
    }
}

/// A goal joined with its resource and note counts.
#[derive(Debug, Clone, FromRow)]
pub struct GoalCountsRow {
    #[sqlx(flatten)]
    pub goal: Goal,
    pub total_resources: i64,
    pub completed_resources: i64,
    pub note_count: i64,
}

/// Dashboard list entry: goal fields plus derived progress.
#[derive(Debug, Clone, Serialize)]
pub struct GoalWithProgress {
    #[serde(flatten)]
    pub goal: Goal,
    pub note_count: i64,
    #[serde(flatten)]
    pub progress: Progress,
}

impl From<GoalCountsRow> for GoalWithProgress {
    fn from(row: GoalCountsRow) -> Self {
        Self {
            progress: Progress::from_counts(row.completed_resources, row.total_resources),
            goal: row.goal,
            note_count: row.note_count,
        }
    }
}

/// Goal detail page: the goal, its progress, and all children newest-first.
///
/// `notes` are the goal's own; notes on its resources are kept apart in
/// `resource_notes`.
#[derive(Debug, Clone, Serialize)]
pub struct GoalDetail {
    #[serde(flatten)]
    pub goal: Goal,
    #[serde(flatten)]
    pub progress: Progress,
    pub resources: Vec<Resource>,
    pub notes: Vec<Note>,
    pub resource_notes: Vec<Note>,
}

impl GoalDetail {
    pub fn new(
        goal: Goal,
        resources: Vec<Resource>,
        notes: Vec<Note>,
        resource_notes: Vec<Note>,
    ) -> Self {
        let completed = resources.iter().filter(|r| r.completed).count() as i64;
        let progress = Progress::from_counts(completed, resources.len() as i64);
        Self {
            goal,
            progress,
            resources,
            notes,
            resource_notes,
        }
    }
}
