//! Refresh signalling for learnpath.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`]: what changed, who changed it, and which views are now
//!   stale.
//! - [`ViewRevisions`]: background subscriber that keeps a revision counter
//!   per user and view path so clients can tell when to refetch.

pub mod bus;
pub mod revision;

pub use bus::{DomainEvent, EventBus};
pub use revision::{goal_view, goal_view_id, ViewRevisions, DASHBOARD_VIEW};
