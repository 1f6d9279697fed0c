use async_trait::async_trait;
use pricebook_catalog::{PricingProfile, Product, ProductFilter, ProfileDraft, ProfilePatch};

use crate::CoreResult;

/// Read access to the product catalog
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_products(&self, filter: &ProductFilter) -> CoreResult<Vec<Product>>;

    /// Products with the given ids, in the order requested. Unknown ids are skipped.
    async fn get_products(&self, ids: &[String]) -> CoreResult<Vec<Product>>;
}

/// Storage for pricing profiles.
///
/// `list_profiles` hands out a snapshot; the pricing engine works on that
/// copy and never sees the live collection.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn list_profiles(&self) -> CoreResult<Vec<PricingProfile>>;

    async fn get_profile(&self, id: &str) -> CoreResult<Option<PricingProfile>>;

    async fn create_profile(&self, draft: ProfileDraft) -> CoreResult<PricingProfile>;

    /// Returns `None` when no profile has this id
    async fn update_profile(
        &self,
        id: &str,
        patch: ProfilePatch,
    ) -> CoreResult<Option<PricingProfile>>;

    /// Returns `false` when no profile has this id
    async fn delete_profile(&self, id: &str) -> CoreResult<bool>;
}
