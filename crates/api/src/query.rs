//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?path=/goals/3` for view revision lookups.
#[derive(Debug, Deserialize)]
pub struct ViewPathParams {
    pub path: String,
}
