//! The ownership chain: User -> Goal -> {Resource, Note}, Resource -> Note.
//!
//! Every entity resolves to exactly one goal and, through it, one owning
//! user. [`ensure_owned`] is the single check all stores go through; a
//! missing row and a row owned by someone else produce the same
//! [`CoreError::NotFound`], so callers cannot probe for other users' ids.

use crate::error::CoreError;
use crate::types::DbId;

/// An entity whose access is decided by walking up to its goal's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedEntity {
    Goal(DbId),
    Resource(DbId),
    Note(DbId),
}

impl OwnedEntity {
    /// Entity name used in not-found errors.
    pub fn kind(self) -> &'static str {
        match self {
            OwnedEntity::Goal(_) => "Goal",
            OwnedEntity::Resource(_) => "Resource",
            OwnedEntity::Note(_) => "Note",
        }
    }

    pub fn id(self) -> DbId {
        match self {
            OwnedEntity::Goal(id) | OwnedEntity::Resource(id) | OwnedEntity::Note(id) => id,
        }
    }

    pub fn not_found(self) -> CoreError {
        CoreError::NotFound {
            entity: self.kind(),
            id: self.id(),
        }
    }
}

/// Where an entity sits in the chain: its owning user and the goal it
/// belongs to (the goal itself, for goals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    pub user_id: DbId,
    pub goal_id: DbId,
}

/// Allow access only when `resolved` exists and belongs to `caller`.
///
/// Returns the goal id the entity belongs to so callers can name the views
/// that need refreshing.
pub fn ensure_owned(
    entity: OwnedEntity,
    caller: DbId,
    resolved: Option<Ownership>,
) -> Result<DbId, CoreError> {
    match resolved {
        Some(ownership) if ownership.user_id == caller => Ok(ownership.goal_id),
        _ => Err(entity.not_found()),
    }
}
