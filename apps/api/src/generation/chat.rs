//! Chef AI chat: persona + caller context + message, routed to the pro or
//! flash model by mode. The response body passes through untouched.

use crate::errors::AppError;
use crate::gemini::{GeminiClient, FLASH_MODEL, PRO_MODEL};
use crate::generation::prompts::CHEF_PERSONA;

/// Mode selecting the pro-tier model.
pub const CHEF_BRAIN_MODE: &str = "chef_brain";
/// Mode applied when the caller omits one.
pub const DEFAULT_MODE: &str = "web_search";

/// `chef_brain` routes to the pro model; every other value routes to flash.
pub fn model_for_mode(mode: &str) -> &'static str {
    if mode == CHEF_BRAIN_MODE {
        PRO_MODEL
    } else {
        FLASH_MODEL
    }
}

pub fn build_chat_prompt(context: &str, message: &str) -> String {
    format!("{CHEF_PERSONA}User Context: {context}\nUser Message: {message}")
}

pub async fn chat_with_chef(
    gemini: &GeminiClient,
    message: &str,
    context: &str,
    mode: &str,
) -> Result<String, AppError> {
    let prompt = build_chat_prompt(context, message);
    Ok(gemini
        .generate_content(model_for_mode(mode), &prompt, false)
        .await?)
}
