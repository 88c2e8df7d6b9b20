//! Learning resource types and input validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;
use crate::validation::{derived_errors, FieldErrors};

/// Message returned when a resource is flipped to complete.
pub const MARKED_COMPLETE: &str = "Resource marked as complete";
/// Message returned when a resource is flipped back to incomplete.
pub const MARKED_INCOMPLETE: &str = "Resource marked as incomplete";

/// Kind of learning material a resource points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Video,
    Article,
    Course,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [ResourceType::Video, ResourceType::Article, ResourceType::Course];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Video => "VIDEO",
            ResourceType::Article => "ARTICLE",
            ResourceType::Course => "COURSE",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Invalid type '{s}'. Must be one of: VIDEO, ARTICLE, COURSE"))
    }
}

/// Message describing the state a toggle just moved the resource into.
pub fn toggle_message(now_completed: bool) -> &'static str {
    if now_completed {
        MARKED_COMPLETE
    } else {
        MARKED_INCOMPLETE
    }
}

/// Raw resource fields as submitted by a client.
///
/// `goal_id` is only read on create; a resource never moves between goals.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ResourceInput {
    #[serde(default)]
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: String,
    #[serde(default, rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    #[validate(url(message = "Please enter a valid URL"))]
    pub url: String,
    pub completed: Option<bool>,
    pub goal_id: Option<DbId>,
}

/// A validated resource ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    pub title: String,
    pub resource_type: ResourceType,
    pub url: String,
    pub completed: bool,
}

impl ResourceInput {
    /// Validate for creation. Returns the target goal id with the draft.
    pub fn into_new(self) -> Result<(DbId, ResourceDraft), FieldErrors> {
        let goal_id = self.goal_id;
        let mut errors = FieldErrors::new();
        if goal_id.is_none() {
            errors.add("goal_id", "Goal ID is required");
        }
        match self.into_draft(false) {
            Ok(draft) => errors.finish(|| (goal_id.unwrap_or_default(), draft)),
            Err(mut draft_errors) => {
                draft_errors.merge(errors);
                Err(draft_errors)
            }
        }
    }

    /// Validate for update. An omitted `completed` keeps `current_completed`.
    pub fn into_update(self, current_completed: bool) -> Result<ResourceDraft, FieldErrors> {
        self.into_draft(current_completed)
    }

    fn into_draft(self, completed_fallback: bool) -> Result<ResourceDraft, FieldErrors> {
        let mut errors = derived_errors(&self);

        let resource_type = match self.resource_type.trim().parse::<ResourceType>() {
            Ok(t) => Some(t),
            Err(message) => {
                errors.add("type", message);
                None
            }
        };

        match resource_type {
            Some(resource_type) if errors.is_empty() => Ok(ResourceDraft {
                title: self.title,
                resource_type,
                url: self.url.trim().to_string(),
                completed: self.completed.unwrap_or(completed_fallback),
            }),
            _ => Err(errors),
        }
    }
}
