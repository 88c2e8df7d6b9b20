//! Handlers for AI-assisted summaries and study plans.
//!
//! Input is validated before the generator is called; a rejected request
//! never reaches the provider.

use axum::extract::State;
use axum::Json;
use learnpath_ai::prompts::{study_plan_prompt, summary_prompt};
use learnpath_core::study::{StudyPlanInput, SummaryInput};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Markdown with `## Summary` and `## Key Takeaways` sections.
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct StudyPlanResponse {
    /// Markdown week-by-week plan.
    pub plan: String,
    /// Target date as shown to the model, e.g. `March 5, 2027`.
    pub target_date: String,
}

/// POST /api/v1/ai/summary
pub async fn summary(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SummaryInput>,
) -> AppResult<Json<DataResponse<SummaryResponse>>> {
    let content = input.into_content()?;

    let summary = state.generator.generate(&summary_prompt(&content)).await?;

    tracing::info!(
        user_id = auth.user_id,
        input_chars = content.chars().count(),
        output_chars = summary.chars().count(),
        "Summary generated"
    );

    Ok(Json(DataResponse {
        data: SummaryResponse { summary },
    }))
}

/// POST /api/v1/ai/study-plan
///
/// `target_date` must be strictly after today (UTC).
pub async fn study_plan(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<StudyPlanInput>,
) -> AppResult<Json<DataResponse<StudyPlanResponse>>> {
    let today = chrono::Utc::now().date_naive();
    let request = input.into_request(today)?;

    let plan = state
        .generator
        .generate(&study_plan_prompt(&request, today))
        .await?;

    tracing::info!(
        user_id = auth.user_id,
        target_date = %request.target_date,
        "Study plan generated"
    );

    Ok(Json(DataResponse {
        data: StudyPlanResponse {
            plan,
            target_date: request.formatted_target_date(),
        },
    }))
}
