use async_trait::async_trait;
use chrono::Utc;
use pricebook_catalog::{PricingProfile, ProfileDraft, ProfilePatch};
use pricebook_core::repository::ProfileRepository;
use pricebook_core::CoreResult;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Pricing profiles kept in process memory, in insertion order
pub struct InMemoryProfileRepository {
    profiles: RwLock<Vec<PricingProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new(profiles: Vec<PricingProfile>) -> Self {
        Self {
            profiles: RwLock::new(profiles),
        }
    }

    /// Start with only the global wholesale profile
    pub fn seeded(global_profile_id: &str) -> Self {
        Self::new(vec![PricingProfile::global(global_profile_id, Utc::now())])
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list_profiles(&self) -> CoreResult<Vec<PricingProfile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn get_profile(&self, id: &str) -> CoreResult<Option<PricingProfile>> {
        Ok(self.profiles.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create_profile(&self, draft: ProfileDraft) -> CoreResult<PricingProfile> {
        let profile = draft.into_profile(Uuid::new_v4().to_string(), Utc::now())?;
        self.profiles.write().await.push(profile.clone());

        tracing::info!(profile_id = %profile.id, name = %profile.name, "Pricing profile created");
        Ok(profile)
    }

    async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> CoreResult<Option<PricingProfile>> {
        let mut profiles = self.profiles.write().await;
        let Some(profile) = profiles.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply_to(profile, Utc::now());
        tracing::info!(profile_id = %id, "Pricing profile updated");
        Ok(Some(profile.clone()))
    }

    async fn delete_profile(&self, id: &str) -> CoreResult<bool> {
        let mut profiles = self.profiles.write().await;
        let before = profiles.len();
        profiles.retain(|p| p.id != id);

        let removed = profiles.len() < before;
        if removed {
            tracing::info!(profile_id = %id, "Pricing profile deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricebook_catalog::ProfileStatus;
    use pricebook_core::CoreError;

    fn draft(name: &str) -> ProfileDraft {
        ProfileDraft {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_seeded_with_global_profile() {
        let repo = InMemoryProfileRepository::seeded("1");
        let profiles = repo.list_profiles().await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].is_global());
        assert_eq!(profiles[0].id, "1");
    }

    #[tokio::test]
    async fn test_profile_lifecycle() {
        let repo = InMemoryProfileRepository::seeded("1");

        // Create
        let created = repo.create_profile(draft("Trade")).await.unwrap();
        assert_eq!(created.status, Some(ProfileStatus::Draft));
        assert_eq!(repo.list_profiles().await.unwrap().len(), 2);

        // Update
        let patch = ProfilePatch {
            status: Some(ProfileStatus::Published),
            ..Default::default()
        };
        let updated = repo.update_profile(&created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.status, Some(ProfileStatus::Published));
        assert!(updated.updated_at.is_some());

        // Delete
        assert!(repo.delete_profile(&created.id).await.unwrap());
        assert!(!repo.delete_profile(&created.id).await.unwrap());
        assert!(repo.get_profile(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_stay_unique_after_delete() {
        let repo = InMemoryProfileRepository::seeded("1");
        let a = repo.create_profile(draft("A")).await.unwrap();
        repo.delete_profile(&a.id).await.unwrap();
        let b = repo.create_profile(draft("B")).await.unwrap();
        let c = repo.create_profile(draft("C")).await.unwrap();
        assert_ne!(b.id, c.id);
    }

    #[tokio::test]
    async fn test_create_without_name_fails() {
        let repo = InMemoryProfileRepository::seeded("1");
        let err = repo.create_profile(ProfileDraft::default()).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert_eq!(repo.list_profiles().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_profile() {
        let repo = InMemoryProfileRepository::seeded("1");
        let result = repo.update_profile("42", ProfilePatch::default()).await.unwrap();
        assert!(result.is_none());
    }
}
