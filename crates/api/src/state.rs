use std::sync::Arc;

use learnpath_ai::TextGenerator;
use learnpath_events::{EventBus, ViewRevisions};

use crate::config::ServerConfig;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: everything is a pool handle or behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: learnpath_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Every successful mutation publishes here.
    pub event_bus: Arc<EventBus>,
    pub revisions: Arc<ViewRevisions>,
    /// Summary and study plan generation.
    pub generator: Arc<dyn TextGenerator>,
}
