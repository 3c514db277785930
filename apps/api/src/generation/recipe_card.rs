//! Recipe card generation: converts a chat transcript into a single
//! structured recipe card via the pro model with the JSON directive.

use crate::errors::AppError;
use crate::gemini::{GeminiClient, PRO_MODEL};
use crate::generation::prompts::RECIPE_CARD_PROMPT_TEMPLATE;

pub fn build_recipe_card_prompt(chat_context: &str) -> String {
    RECIPE_CARD_PROMPT_TEMPLATE.replace("{chat_context}", chat_context)
}

pub async fn generate_recipe_card(
    gemini: &GeminiClient,
    chat_context: &str,
) -> Result<String, AppError> {
    let prompt = build_recipe_card_prompt(chat_context);
    Ok(gemini.generate_content(PRO_MODEL, &prompt, true).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_substitutes_chat_context_exactly_once() {
        let prompt = build_recipe_card_prompt("user: how do I make dal?\nchef: ...");
        assert_eq!(prompt.matches("user: how do I make dal?").count(), 1);
        assert!(!prompt.contains("{chat_context}"));
    }

    #[test]
    fn test_prompt_documents_recipe_card_keys() {
        let prompt = build_recipe_card_prompt("ctx");
        for key in ["name", "timing", "ingredients", "instructions", "chefTip", "whyItWorks"] {
            assert!(prompt.contains(key), "missing recipe key {key}");
        }
    }
}
