//! Goal status values and create/update input validation.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{blank_to_none, derived_errors, parse_date, FieldErrors};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a learning goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl GoalStatus {
    pub const ALL: [GoalStatus; 3] = [
        GoalStatus::NotStarted,
        GoalStatus::InProgress,
        GoalStatus::Completed,
    ];

    /// Stored / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            GoalStatus::NotStarted => "NOT_STARTED",
            GoalStatus::InProgress => "IN_PROGRESS",
            GoalStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Invalid status '{s}'. Must be one of: NOT_STARTED, IN_PROGRESS, COMPLETED"
                )
            })
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Raw goal fields as submitted by a client, shared by create and update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GoalInput {
    #[serde(default)]
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: String,
    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: Option<String>,
    pub status: Option<String>,
    pub target_date: Option<String>,
}

/// A validated goal ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: GoalStatus,
    pub target_date: Option<NaiveDate>,
}

impl GoalInput {
    /// Validate and normalise the input.
    ///
    /// `fallback_status` is used when the client omits `status`: the default
    /// status on create, the goal's current status on update.
    pub fn into_draft(self, fallback_status: GoalStatus) -> Result<GoalDraft, FieldErrors> {
        let mut errors = derived_errors(&self);

        let status = match blank_to_none(self.status) {
            None => fallback_status,
            Some(raw) => match raw.parse::<GoalStatus>() {
                Ok(status) => status,
                Err(message) => {
                    errors.add("status", message);
                    fallback_status
                }
            },
        };

        let target_date = match blank_to_none(self.target_date) {
            None => None,
            Some(raw) => {
                let parsed = parse_date(&raw);
                if parsed.is_none() {
                    errors.add("target_date", "Target date must be a valid date");
                }
                parsed
            }
        };

        let title = self.title;
        let description = blank_to_none(self.description);
        errors.finish(|| GoalDraft {
            title,
            description,
            status,
            target_date,
        })
    }
}
