//! Handler for the dashboard: goal list plus aggregate stats.

use axum::extract::State;
use axum::Json;
use learnpath_core::dashboard::DashboardStats;
use learnpath_db::models::goal::GoalWithProgress;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::goals::list_for_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub goals: Vec<GoalWithProgress>,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardResponse>>> {
    let goals = list_for_user(&state, auth.user_id).await?;
    let stats = DashboardStats::collect(
        goals
            .iter()
            .map(|g| (g.goal.status(), g.progress.progress)),
    );

    Ok(Json(DataResponse {
        data: DashboardResponse { stats, goals },
    }))
}
