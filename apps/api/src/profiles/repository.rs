//! Profile storage — pluggable, trait-based persistence for profile rows.
//!
//! Default: `PgProfileRepository` (sqlx/PostgreSQL).
//! `MemoryProfileRepository` satisfies the same trait and backs the test suite.
//!
//! `AppState` holds an `Arc<dyn ProfileRepository>`, chosen at startup.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;

/// The persistence capability. Implement this to swap storage backends
/// without touching the store, handlers, or router.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<ProfileRow>, AppError>;

    /// Absence is a normal outcome, signaled as `None` rather than an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileRow>, AppError>;

    /// Insert-or-overwrite keyed by id. `created_at` is never changed for an
    /// existing row. Returns the stored row.
    async fn save(&self, profile: &ProfileRow) -> Result<ProfileRow, AppError>;

    /// Removing a missing id is not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError>;

    async fn delete_all(&self) -> Result<(), AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PgProfileRepository — default PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_all(&self) -> Result<Vec<ProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn save(&self, profile: &ProfileRow) -> Result<ProfileRow, AppError> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (id, name, created_at, answers, weekly_plan, saved_recipes)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                answers = EXCLUDED.answers,
                weekly_plan = EXCLUDED.weekly_plan,
                saved_recipes = EXCLUDED.saved_recipes
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(profile.created_at)
        .bind(&profile.answers)
        .bind(&profile.weekly_plan)
        .bind(&profile.saved_recipes)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM profiles").execute(&self.pool).await?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryProfileRepository — in-memory backend for tests
// ────────────────────────────────────────────────────────────────────────────

/// HashMap-backed repository. Used by the test suite; conforms to the same
/// trait as the Postgres backend.
#[derive(Default)]
pub struct MemoryProfileRepository {
    rows: Mutex<HashMap<Uuid, ProfileRow>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn find_all(&self) -> Result<Vec<ProfileRow>, AppError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, profile: &ProfileRow) -> Result<ProfileRow, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let mut stored = profile.clone();
        if let Some(existing) = rows.get(&profile.id) {
            stored.created_at = existing.created_at;
        }
        rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), AppError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), AppError> {
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_row(name: &str) -> ProfileRow {
        ProfileRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: Utc::now(),
            answers: None,
            weekly_plan: None,
            saved_recipes: "[]".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_overwrites_by_id_but_keeps_created_at() {
        let repo = MemoryProfileRepository::new();
        let original = repo.save(&make_row("Dana")).await.unwrap();

        let mut changed = original.clone();
        changed.name = "Dana Updated".to_string();
        changed.created_at = Utc::now();
        let stored = repo.save(&changed).await.unwrap();

        assert_eq!(stored.name, "Dana Updated");
        assert_eq!(stored.created_at, original.created_at);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let repo = MemoryProfileRepository::new();
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
