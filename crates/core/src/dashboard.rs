//! Aggregate stats shown above the goal list.

use serde::Serialize;

use crate::goals::GoalStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_goals: i64,
    pub in_progress_goals: i64,
    pub completed_goals: i64,
    /// Mean goal progress, rounded to a whole percentage.
    pub average_progress: i64,
}

impl DashboardStats {
    /// Fold `(status, progress)` pairs for every goal a user owns.
    pub fn collect(goals: impl IntoIterator<Item = (GoalStatus, f64)>) -> Self {
        let mut stats = DashboardStats::default();
        let mut progress_sum = 0.0;
        for (status, progress) in goals {
            stats.total_goals += 1;
            progress_sum += progress;
            match status {
                GoalStatus::InProgress => stats.in_progress_goals += 1,
                GoalStatus::Completed => stats.completed_goals += 1,
                GoalStatus::NotStarted => {}
            }
        }
        if stats.total_goals > 0 {
            stats.average_progress = (progress_sum / stats.total_goals as f64).round() as i64;
        }
        stats
    }
}
