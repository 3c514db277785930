use std::sync::Arc;

use crate::gemini::GeminiClient;
use crate::profiles::repository::ProfileRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable profile storage. Default: PgProfileRepository; the test suite
    /// swaps in MemoryProfileRepository.
    pub profiles: Arc<dyn ProfileRepository>,
    pub gemini: GeminiClient,
}
