//! Weekly meal plan generation: onboarding answers → profile summary →
//! executive-chef prompt → flash-tier Gemini call with the JSON directive.

use serde::Deserialize;

use crate::errors::AppError;
use crate::gemini::{GeminiClient, FLASH_MODEL};
use crate::generation::prompts::WEEKLY_PLAN_PROMPT_TEMPLATE;

/// One onboarding answer. `answer` is free-form text; this layer never
/// interprets it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub answer: String,
}

/// Renders answers as a `Q{id}: {answer}` line per entry, in input order.
pub fn build_profile_summary(answers: &[Answer]) -> String {
    let mut summary = String::new();
    for answer in answers {
        summary.push_str(&format!("Q{}: {}\n", answer.question_id, answer.answer));
    }
    summary
}

pub fn build_weekly_plan_prompt(answers: &[Answer]) -> String {
    WEEKLY_PLAN_PROMPT_TEMPLATE.replace("{user_profile_summary}", &build_profile_summary(answers))
}

/// Returns the raw Gemini response body; callers are responsible for
/// validating the plan JSON against the documented structure.
pub async fn generate_weekly_plan(
    gemini: &GeminiClient,
    answers: &[Answer],
) -> Result<String, AppError> {
    let prompt = build_weekly_plan_prompt(answers);
    Ok(gemini.generate_content(FLASH_MODEL, &prompt, true).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_answers() -> Vec<Answer> {
        vec![
            Answer {
                question_id: 1,
                answer: "vegetarian".to_string(),
            },
            Answer {
                question_id: 2,
                answer: "no nuts".to_string(),
            },
        ]
    }

    #[test]
    fn test_profile_summary_is_one_line_per_answer_in_order() {
        let summary = build_profile_summary(&make_answers());
        assert_eq!(summary, "Q1: vegetarian\nQ2: no nuts\n");
    }

    #[test]
    fn test_profile_summary_of_no_answers_is_empty() {
        assert_eq!(build_profile_summary(&[]), "");
    }

    #[test]
    fn test_prompt_substitutes_summary_exactly_once() {
        let prompt = build_weekly_plan_prompt(&make_answers());
        assert_eq!(prompt.matches("Q1: vegetarian\nQ2: no nuts\n").count(), 1);
        assert!(!prompt.contains("{user_profile_summary}"));
    }

    #[test]
    fn test_prompt_keeps_output_format_section() {
        let prompt = build_weekly_plan_prompt(&make_answers());
        for key in [
            "weekTitle",
            "theme",
            "dailyPlans",
            "groceryList",
            "sundayPrep",
            "sustainabilityTip",
        ] {
            assert!(prompt.contains(key), "missing output key {key}");
        }
    }

    #[test]
    fn test_answer_deserializes_from_camel_case_wire_format() {
        let answer: Answer =
            serde_json::from_str(r#"{"questionId": 3, "answer": "30 minutes max"}"#).unwrap();
        assert_eq!(answer.question_id, 3);
        assert_eq!(answer.answer, "30 minutes max");
    }
}
