//! Per-user view revision counters driven by the event bus.
//!
//! A view's revision starts at 0 and increases by one every time an event
//! from that user names it in `refresh`. Clients poll the revision of the
//! page they show and refetch when it moves. Counters are scoped to the
//! acting user, so one user's changes never move another user's views.

use std::collections::HashMap;

use learnpath_core::types::DbId;
use tokio::sync::{broadcast, RwLock};

use crate::bus::DomainEvent;

/// The goal list and stats page.
pub const DASHBOARD_VIEW: &str = "/dashboard";

const GOAL_VIEW_PREFIX: &str = "/goals/";

/// A goal's detail page.
pub fn goal_view(goal_id: DbId) -> String {
    format!("{GOAL_VIEW_PREFIX}{goal_id}")
}

/// The goal id named by a `/goals/{id}` path, if it is one.
pub fn goal_view_id(path: &str) -> Option<DbId> {
    path.strip_prefix(GOAL_VIEW_PREFIX)?.parse().ok()
}

#[derive(Debug, Default)]
pub struct ViewRevisions {
    revisions: RwLock<HashMap<DbId, HashMap<String, u64>>>,
}

impl ViewRevisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current revision of `path` for `user_id`; 0 if it has never been
    /// invalidated.
    pub async fn revision(&self, user_id: DbId, path: &str) -> u64 {
        self.revisions
            .read()
            .await
            .get(&user_id)
            .and_then(|views| views.get(path))
            .copied()
            .unwrap_or(0)
    }

    /// Bump every path the event names for its actor.
    ///
    /// A deleted goal's view is dropped so the map only holds live pages.
    pub async fn apply(&self, event: &DomainEvent) {
        let Some(user_id) = event.actor_user_id else {
            if !event.refresh.is_empty() {
                tracing::warn!(event_type = %event.event_type, "Event has no actor, views not invalidated");
            }
            return;
        };

        let mut revisions = self.revisions.write().await;
        let views = revisions.entry(user_id).or_default();
        for path in &event.refresh {
            *views.entry(path.clone()).or_insert(0) += 1;
        }

        if event.event_type == "goal.deleted" {
            if let Some(goal_id) = event.source_entity_id {
                views.remove(&goal_view(goal_id));
            }
        }
    }

    /// Consume events until the bus is dropped.
    pub async fn run(&self, mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    tracing::debug!(
                        event_type = %event.event_type,
                        actor = ?event.actor_user_id,
                        views = ?event.refresh,
                        "Invalidating views"
                    );
                    self.apply(&event).await;
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    // Missed events may have named any view, so everything
                    // known is stale.
                    tracing::warn!(skipped = n, "View revisions lagged, bumping all views");
                    for views in self.revisions.write().await.values_mut() {
                        for revision in views.values_mut() {
                            *revision += 1;
                        }
                    }
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, view revisions shutting down");
                    break;
                }
            }
        }
    }
}
