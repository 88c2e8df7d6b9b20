//! Input rules for AI-assisted summaries and study plans.
//!
//! These run before any provider call so that rejected input never leaves
//! the process.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::validation::{blank_to_none, derived_errors, parse_date, FieldErrors};

/// Text to summarise.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SummaryInput {
    #[serde(default)]
    #[validate(length(min = 50, max = 10000, message = "Content must be between 50 and 10,000 characters"))]
    pub content: String,
}

impl SummaryInput {
    pub fn into_content(self) -> Result<String, FieldErrors> {
        let errors = derived_errors(&self);
        let content = self.content;
        errors.finish(|| content)
    }
}

/// Study plan request as submitted.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StudyPlanInput {
    #[serde(default)]
    #[validate(length(min = 3, max = 100, message = "Goal title must be between 3 and 100 characters"))]
    pub goal_title: String,
    #[validate(length(max = 500, message = "Description must be less than 500 characters"))]
    pub description: Option<String>,
    #[serde(default)]
    pub target_date: String,
}

/// A validated study plan request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyPlanRequest {
    pub goal_title: String,
    pub description: Option<String>,
    pub target_date: NaiveDate,
}

impl StudyPlanRequest {
    /// Target date rendered for the prompt, e.g. `March 5, 2027`.
    pub fn formatted_target_date(&self) -> String {
        format_long_date(self.target_date)
    }
}

impl StudyPlanInput {
    /// Validate against `today`; the target date must be strictly later.
    pub fn into_request(self, today: NaiveDate) -> Result<StudyPlanRequest, FieldErrors> {
        let mut errors = derived_errors(&self);

        let target_date = if self.target_date.trim().is_empty() {
            errors.add("target_date", "Target date is required");
            None
        } else {
            match parse_date(&self.target_date) {
                Some(date) if date > today => Some(date),
                Some(_) => {
                    errors.add("target_date", "Target date must be in the future");
                    None
                }
                None => {
                    errors.add("target_date", "Target date must be a valid date");
                    None
                }
            }
        };

        match target_date {
            Some(target_date) if errors.is_empty() => Ok(StudyPlanRequest {
                goal_title: self.goal_title,
                description: blank_to_none(self.description),
                target_date,
            }),
            _ => Err(errors),
        }
    }
}

/// `March 5, 2027` style rendering.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn plan(date: &str) -> StudyPlanInput {
        StudyPlanInput {
            goal_title: "Learn Rust".into(),
            description: Some("".into()),
            target_date: date.into(),
        }
    }

    #[test]
    fn ten_character_summary_content_is_rejected() {
        let errors = SummaryInput {
            content: "0123456789".into(),
        }
        .into_content()
        .unwrap_err();
        assert!(errors.contains("content"));
    }

    #[test]
    fn summary_content_within_limits_passes() {
        let content = "a".repeat(50);
        assert_eq!(
            SummaryInput {
                content: content.clone()
            }
            .into_content(),
            Ok(content)
        );
        assert!(SummaryInput {
            content: "a".repeat(10_001)
        }
        .into_content()
        .is_err());
    }

    #[test]
    fn future_date_is_accepted_and_formatted() {
        let request = plan("2027-03-05").into_request(today()).unwrap();
        assert_eq!(request.description, None);
        assert_eq!(request.formatted_target_date(), "March 5, 2027");
    }

    #[test]
    fn today_and_past_dates_are_rejected() {
        assert!(plan("2026-10-18").into_request(today()).unwrap_err().contains("target_date"));
        assert!(plan("2020-01-01").into_request(today()).unwrap_err().contains("target_date"));
    }

    #[test]
    fn missing_or_garbage_date_is_rejected() {
        let errors = plan("").into_request(today()).unwrap_err();
        assert_eq!(errors.get("target_date").unwrap(), ["Target date is required"]);
        assert!(plan("someday").into_request(today()).is_err());
    }

    #[test]
    fn short_goal_title_is_rejected() {
        let mut input = plan("2027-03-05");
        input.goal_title = "Go".into();
        assert!(input.into_request(today()).unwrap_err().contains("goal_title"));
    }
}
