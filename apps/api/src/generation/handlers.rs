//! Axum route handlers for the Generation Proxy.
//!
//! Each handler returns the raw Gemini response body as the HTTP response
//! body; no schema validation happens on this side.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::chat::{self, chat_with_chef};
use crate::generation::recipe_card::generate_recipe_card;
use crate::generation::weekly_plan::{generate_weekly_plan, Answer};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WeeklyPlanRequest {
    pub answers: Vec<Answer>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    chat::DEFAULT_MODE.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCardRequest {
    pub chat_context: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /gemini/weekly-plan
pub async fn handle_weekly_plan(
    State(state): State<AppState>,
    Json(request): Json<WeeklyPlanRequest>,
) -> Result<String, AppError> {
    generate_weekly_plan(&state.gemini, &request.answers).await
}

/// POST /gemini/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<String, AppError> {
    chat_with_chef(&state.gemini, &request.message, &request.context, &request.mode).await
}

/// POST /gemini/recipe-card
pub async fn handle_recipe_card(
    State(state): State<AppState>,
    Json(request): Json<RecipeCardRequest>,
) -> Result<String, AppError> {
    generate_recipe_card(&state.gemini, &request.chat_context).await
}
