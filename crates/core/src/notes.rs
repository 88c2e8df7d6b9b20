//! Note parent links and content validation.

use serde::Deserialize;

use crate::ownership::OwnedEntity;
use crate::types::DbId;
use crate::validation::FieldErrors;

/// Maximum note length in characters, measured after trimming.
pub const MAX_NOTE_CONTENT_LENGTH: usize = 5_000;

/// What a note hangs off. Exactly one parent per note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteParent {
    Goal(DbId),
    Resource(DbId),
}

impl NoteParent {
    /// Build from the two optional link columns / request fields.
    pub fn from_links(goal_id: Option<DbId>, resource_id: Option<DbId>) -> Result<Self, String> {
        match (goal_id, resource_id) {
            (Some(goal_id), None) => Ok(NoteParent::Goal(goal_id)),
            (None, Some(resource_id)) => Ok(NoteParent::Resource(resource_id)),
            (None, None) => Err("Note must be linked to either a goal or a resource".to_string()),
            (Some(_), Some(_)) => {
                Err("Note must be linked to a goal or a resource, not both".to_string())
            }
        }
    }

    pub fn goal_id(self) -> Option<DbId> {
        match self {
            NoteParent::Goal(id) => Some(id),
            NoteParent::Resource(_) => None,
        }
    }

    pub fn resource_id(self) -> Option<DbId> {
        match self {
            NoteParent::Goal(_) => None,
            NoteParent::Resource(id) => Some(id),
        }
    }
}

impl From<NoteParent> for OwnedEntity {
    fn from(parent: NoteParent) -> Self {
        match parent {
            NoteParent::Goal(id) => OwnedEntity::Goal(id),
            NoteParent::Resource(id) => OwnedEntity::Resource(id),
        }
    }
}

/// Trim note content and check it is within `1..=5000` characters.
pub fn validate_note_content(content: &str) -> Result<String, FieldErrors> {
    let trimmed = content.trim();
    let mut errors = FieldErrors::new();
    if trimmed.is_empty() {
        errors.add("content", "Note content is required");
    } else if trimmed.chars().count() > MAX_NOTE_CONTENT_LENGTH {
        errors.add(
            "content",
            format!("Note must be less than {MAX_NOTE_CONTENT_LENGTH} characters"),
        );
    }
    errors.finish(|| trimmed.to_string())
}

/// Body for creating a note.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub content: String,
    pub goal_id: Option<DbId>,
    pub resource_id: Option<DbId>,
}

/// Body for editing a note. Only the content is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteContentInput {
    #[serde(default)]
    pub content: String,
}

/// A validated note ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub content: String,
    pub parent: NoteParent,
}

impl NoteInput {
    pub fn into_draft(self) -> Result<NoteDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let content = match validate_note_content(&self.content) {
            Ok(content) => Some(content),
            Err(content_errors) => {
                errors.merge(content_errors);
                None
            }
        };

        let parent = match NoteParent::from_links(self.goal_id, self.resource_id) {
            Ok(parent) => Some(parent),
            Err(message) => {
                errors.add("parent", message);
                None
            }
        };

        match (content, parent) {
            (Some(content), Some(parent)) => Ok(NoteDraft { content, parent }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn note_without_parent_is_rejected() {
        let input = NoteInput {
            content: "remember this".into(),
            ..Default::default()
        };
        let errors = input.into_draft().unwrap_err();
        let messages = errors.get("parent").unwrap();
        assert!(messages[0].contains("must be linked to either a goal or a resource"));
    }

    #[test]
    fn note_with_both_parents_is_rejected() {
        assert!(NoteParent::from_links(Some(1), Some(2)).is_err());
    }

    #[test]
    fn parent_is_tagged_by_link() {
        assert_eq!(NoteParent::from_links(Some(3), None), Ok(NoteParent::Goal(3)));
        assert_eq!(NoteParent::from_links(None, Some(4)), Ok(NoteParent::Resource(4)));
        assert_eq!(NoteParent::Resource(4).goal_id(), None);
        assert_eq!(NoteParent::Resource(4).resource_id(), Some(4));
    }

    #[test]
    fn parent_maps_to_owned_entity() {
        assert_eq!(OwnedEntity::from(NoteParent::Goal(9)), OwnedEntity::Goal(9));
        assert_eq!(OwnedEntity::from(NoteParent::Resource(9)), OwnedEntity::Resource(9));
    }

    #[test]
    fn content_is_trimmed() {
        let draft = NoteInput {
            content: "  key idea  ".into(),
            goal_id: Some(1),
            resource_id: None,
        }
        .into_draft()
        .unwrap();
        assert_eq!(draft.content, "key idea");
        assert_eq!(draft.parent, NoteParent::Goal(1));
    }

    #[test]
    fn whitespace_only_content_is_rejected() {
        assert_matches!(validate_note_content("   \n "), Err(e) if e.contains("content"));
    }

    #[test]
    fn content_length_limit_is_inclusive() {
        assert!(validate_note_content(&"a".repeat(5_000)).is_ok());
        assert!(validate_note_content(&"a".repeat(5_001)).is_err());
    }

    #[test]
    fn content_and_parent_errors_are_reported_together() {
        let errors = NoteInput::default().into_draft().unwrap_err();
        assert!(errors.contains("content"));
        assert!(errors.contains("parent"));
    }
}
