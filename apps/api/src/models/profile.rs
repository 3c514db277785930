use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored user profile. The `answers`, `weekly_plan` and `saved_recipes`
/// blobs are opaque to this layer: the frontend defines their structure and
/// this service never parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub answers: Option<String>,
    pub weekly_plan: Option<String>,
    pub saved_recipes: String,
}

/// Input for profile creation. `id` and `created_at` are server-assigned;
/// `saved_recipes` defaults to the empty-array literal when unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    #[serde(default)]
    pub answers: Option<String>,
    #[serde(default)]
    pub weekly_plan: Option<String>,
    #[serde(default)]
    pub saved_recipes: Option<String>,
}

/// Partial update: each field is an explicit `Option`, where `None` (absent or
/// JSON null) means "leave the stored value unchanged". There is no way to
/// clear a field to null through this contract.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub answers: Option<String>,
    #[serde(default)]
    pub weekly_plan: Option<String>,
    #[serde(default)]
    pub saved_recipes: Option<String>,
}
