pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::profiles::handlers as profiles;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile Store
        .route(
            "/profiles",
            get(profiles::handle_list_profiles)
                .post(profiles::handle_create_profile)
                .delete(profiles::handle_delete_all_profiles),
        )
        .route(
            "/profiles/:id",
            get(profiles::handle_get_profile)
                .put(profiles::handle_update_profile)
                .delete(profiles::handle_delete_profile),
        )
        // Generation Proxy
        .route("/gemini/weekly-plan", post(generation::handle_weekly_plan))
        .route("/gemini/chat", post(generation::handle_chat))
        .route("/gemini/recipe-card", post(generation::handle_recipe_card))
        .with_state(state)
}
