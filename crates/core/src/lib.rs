//! Domain layer for the learnpath goal tracker.
//!
//! Pure logic only: no database, HTTP, or provider I/O lives here.

pub mod dashboard;
pub mod error;
pub mod goals;
pub mod notes;
pub mod ownership;
pub mod progress;
pub mod resources;
pub mod study;
pub mod types;
pub mod users;
pub mod validation;
