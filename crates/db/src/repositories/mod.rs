//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take a
//! `&PgPool`. Callers are responsible for authorization; these methods only
//! touch the rows they are told to.

pub mod goal_repo;
pub mod note_repo;
pub mod ownership_repo;
pub mod resource_repo;
pub mod user_repo;

pub use goal_repo::GoalRepo;
pub use note_repo::NoteRepo;
pub use ownership_repo::OwnershipRepo;
pub use resource_repo::ResourceRepo;
pub use user_repo::UserRepo;
