//! Prompt templates. Both ask the model for Markdown with fixed headings so
//! the client can render the result directly.

use chrono::NaiveDate;
use learnpath_core::study::StudyPlanRequest;

/// Prompt asking for a short summary and a list of key takeaways.
pub fn summary_prompt(content: &str) -> String {
    format!(
        "You help people learn. Read the material below and reply in Markdown only.\n\
         \n\
         Use exactly these two sections:\n\
         \n\
         ## Summary\n\
         Three or four sentences covering the main ideas.\n\
         \n\
         ## Key Takeaways\n\
         Five to seven bullet points (`- `), one idea each. Put the central \
         terms in **bold**.\n\
         \n\
         Material:\n\
         \n\
         {content}\n"
    )
}

/// Whole weeks from `today` until the target date, at least one.
pub fn weeks_until(today: NaiveDate, target: NaiveDate) -> i64 {
    let days = (target - today).num_days();
    ((days + 6) / 7).max(1)
}

/// Prompt asking for a week-by-week plan that ends on the target date.
pub fn study_plan_prompt(request: &StudyPlanRequest, today: NaiveDate) -> String {
    let weeks = weeks_until(today, request.target_date);
    let description = request
        .description
        .as_deref()
        .map(|d| format!("Details: {d}\n"))
        .unwrap_or_default();

    format!(
        "You are a study coach. Build a realistic weekly plan for the goal below \
         and reply in Markdown only.\n\
         \n\
         Goal: {title}\n\
         {description}\
         Finish by: {target} ({weeks} week(s) from today)\n\
         \n\
         Use exactly this layout:\n\
         \n\
         ## Study Plan Overview\n\
         Two or three sentences on the overall approach.\n\
         \n\
         ## Weekly Breakdown\n\
         One `### Week N: <focus>` heading per week, from Week 1 to Week {weeks}. \
         Under each, two to four `- ` bullets naming a concrete task in **bold** \
         followed by a short explanation, then a final bullet with the suggested \
         hours in *italics*.\n\
         \n\
         ## Tips for Success\n\
         Three `- ` bullets with practical advice.\n\
         \n\
         Spread the work evenly and keep every week achievable.\n",
        title = request.goal_title,
        target = request.formatted_target_date(),
    )
}
