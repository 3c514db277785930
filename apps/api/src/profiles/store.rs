//! CRUD semantics over the profile repository: server-assigned fields on
//! create, field-level partial updates, idempotent deletes.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{NewProfile, ProfileRow, ProfileUpdate};
use crate::profiles::repository::ProfileRepository;

/// Returns every stored profile. Ordering is backend-defined.
pub async fn list_profiles(repo: &dyn ProfileRepository) -> Result<Vec<ProfileRow>, AppError> {
    repo.find_all().await
}

pub async fn get_profile(
    repo: &dyn ProfileRepository,
    id: Uuid,
) -> Result<Option<ProfileRow>, AppError> {
    repo.find_by_id(id).await
}

/// Creates a profile: fresh id, creation timestamp, `saved_recipes` defaulted
/// to the empty-array literal. Returns the stored row including the
/// server-assigned fields.
pub async fn create_profile(
    repo: &dyn ProfileRepository,
    input: NewProfile,
) -> Result<ProfileRow, AppError> {
    let profile = ProfileRow {
        id: Uuid::new_v4(),
        name: input.name,
        created_at: Utc::now(),
        answers: input.answers,
        weekly_plan: input.weekly_plan,
        saved_recipes: input.saved_recipes.unwrap_or_else(|| "[]".to_string()),
    };

    let stored = repo.save(&profile).await?;
    info!("Created profile {}", stored.id);
    Ok(stored)
}

/// Applies a partial update: only `Some` fields overwrite stored values.
/// Fails with NotFound when the id does not exist.
pub async fn update_profile(
    repo: &dyn ProfileRepository,
    id: Uuid,
    patch: ProfileUpdate,
) -> Result<ProfileRow, AppError> {
    let mut profile = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;

    if let Some(name) = patch.name {
        profile.name = name;
    }
    if let Some(answers) = patch.answers {
        profile.answers = Some(answers);
    }
    if let Some(weekly_plan) = patch.weekly_plan {
        profile.weekly_plan = Some(weekly_plan);
    }
    if let Some(saved_recipes) = patch.saved_recipes {
        profile.saved_recipes = saved_recipes;
    }

    repo.save(&profile).await
}

/// Idempotent: deleting a missing id succeeds.
pub async fn delete_profile(repo: &dyn ProfileRepository, id: Uuid) -> Result<(), AppError> {
    repo.delete_by_id(id).await
}

pub async fn delete_all_profiles(repo: &dyn ProfileRepository) -> Result<(), AppError> {
    repo.delete_all().await?;
    info!("Deleted all profiles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::repository::MemoryProfileRepository;

    fn make_input(name: &str) -> NewProfile {
        NewProfile {
            name: name.to_string(),
            answers: Some(r#"[{"questionId":1,"answer":"vegetarian"}]"#.to_string()),
            weekly_plan: None,
            saved_recipes: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_timestamp() {
        let repo = MemoryProfileRepository::new();
        let start = Utc::now();

        let first = create_profile(&repo, make_input("Amari")).await.unwrap();
        let second = create_profile(&repo, make_input("Noor")).await.unwrap();

        assert!(!first.id.is_nil());
        assert_ne!(first.id, second.id);
        assert!(first.created_at >= start);
    }

    #[tokio::test]
    async fn test_create_defaults_saved_recipes_to_empty_array_literal() {
        let repo = MemoryProfileRepository::new();
        let created = create_profile(&repo, make_input("Amari")).await.unwrap();
        assert_eq!(created.saved_recipes, "[]");
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_saved_recipes() {
        let repo = MemoryProfileRepository::new();
        let mut input = make_input("Amari");
        input.saved_recipes = Some(r#"[{"name":"Shakshuka"}]"#.to_string());

        let created = create_profile(&repo, input).await.unwrap();
        assert_eq!(created.saved_recipes, r#"[{"name":"Shakshuka"}]"#);
    }

    #[tokio::test]
    async fn test_round_trip_create_then_get() {
        let repo = MemoryProfileRepository::new();
        let created = create_profile(&repo, make_input("Amari")).await.unwrap();

        let fetched = get_profile(&repo, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_update_with_all_fields_none_is_noop() {
        let repo = MemoryProfileRepository::new();
        let created = create_profile(&repo, make_input("Amari")).await.unwrap();

        let updated = update_profile(&repo, created.id, ProfileUpdate::default())
            .await
            .unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_name_only_leaves_other_fields_untouched() {
        let repo = MemoryProfileRepository::new();
        let created = create_profile(&repo, make_input("Amari")).await.unwrap();

        let patch = ProfileUpdate {
            name: Some("Amari Rivera".to_string()),
            ..ProfileUpdate::default()
        };
        let updated = update_profile(&repo, created.id, patch).await.unwrap();

        assert_eq!(updated.name, "Amari Rivera");
        assert_eq!(updated.answers, created.answers);
        assert_eq!(updated.weekly_plan, created.weekly_plan);
        assert_eq!(updated.saved_recipes, created.saved_recipes);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = MemoryProfileRepository::new();
        let err = update_profile(&repo, Uuid::new_v4(), ProfileUpdate::default())
            .await
            .expect_err("expected NotFound");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_idempotent() {
        let repo = MemoryProfileRepository::new();
        delete_profile(&repo, Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_all_then_list_is_empty() {
        let repo = MemoryProfileRepository::new();
        create_profile(&repo, make_input("Amari")).await.unwrap();
        create_profile(&repo, make_input("Noor")).await.unwrap();

        delete_all_profiles(&repo).await.unwrap();
        assert!(list_profiles(&repo).await.unwrap().is_empty());
    }
}
