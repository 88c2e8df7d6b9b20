//! Goal progress derived from resource completion counts.
//!
//! Progress is never stored; it is recomputed from the counts every time a
//! goal is read.

use serde::Serialize;

/// Resource completion counts for a goal plus the derived percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub total_resources: i64,
    pub completed_resources: i64,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
}

impl Progress {
    /// Build from raw counts. Out-of-range counts are clamped.
    pub fn from_counts(completed: i64, total: i64) -> Self {
        let total = total.max(0);
        let completed = completed.clamp(0, total);
        Self {
            total_resources: total,
            completed_resources: completed,
            progress: percent(completed, total),
        }
    }
}

/// `completed / total * 100`, defined as `0.0` when `total` is zero.
pub fn percent(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let ratio = completed.clamp(0, total) as f64 / total as f64;
    ratio * 100.0
}
