//! Row structs and read-side aggregates.
//!
//! Each submodule holds a `FromRow` + `Serialize` struct matching its table.
//! Write-side inputs are the validated drafts from `learnpath_core`.

pub mod goal;
pub mod note;
pub mod resource;
pub mod user;
