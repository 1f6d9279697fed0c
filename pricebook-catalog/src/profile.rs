use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wire value written for a global-price base
pub const GLOBAL_WHOLESALE_PRICE: &str = "globalWholesalePrice";

/// Profile tag carried by the seeded list-price profile
pub const GLOBAL_PROFILE_TYPE: &str = "global";

/// Where a profile takes its starting price from.
///
/// Absent, empty, `"globalWholesalePrice"` and `"global"` all mean the
/// product's own wholesale price; anything else names another profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum BasedOn {
    #[default]
    GlobalWholesalePrice,
    Profile(String),
}

impl BasedOn {
    pub fn profile_id(&self) -> Option<&str> {
        match self {
            BasedOn::GlobalWholesalePrice => None,
            BasedOn::Profile(id) => Some(id),
        }
    }
}

impl From<Option<String>> for BasedOn {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("") | Some(GLOBAL_WHOLESALE_PRICE) | Some(GLOBAL_PROFILE_TYPE) => {
                BasedOn::GlobalWholesalePrice
            }
            Some(id) => BasedOn::Profile(id.to_string()),
        }
    }
}

impl From<&str> for BasedOn {
    fn from(value: &str) -> Self {
        BasedOn::from(Some(value.to_string()))
    }
}

impl From<BasedOn> for String {
    fn from(value: BasedOn) -> Self {
        match value {
            BasedOn::GlobalWholesalePrice => GLOBAL_WHOLESALE_PRICE.to_string(),
            BasedOn::Profile(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentMode {
    /// Absolute currency amount
    Fixed,
    /// Percentage of the resolved base
    Dynamic,
    /// Unrecognised mode; leaves the price unchanged
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncrementMode {
    Increase,
    #[serde(other)]
    Decrease,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    #[serde(default)]
    pub based_on: BasedOn,
    pub mode: AdjustmentMode,
    pub increment_mode: IncrementMode,
    #[serde(default)]
    pub adjustment_value: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Draft,
    Published,
}

/// How many products a profile was set up for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileScope {
    One,
    Multiple,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingProfile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<ProfileScope>,
    #[serde(default)]
    pub selected_products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_adjustment: Option<PriceAdjustment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProfileStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PricingProfile {
    /// The built-in list-price profile every catalog starts with
    pub fn global(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: "Global Wholesale Price".to_string(),
            kind: Some(GLOBAL_PROFILE_TYPE.to_string()),
            profile_type: None,
            selected_products: Vec::new(),
            price_adjustment: None,
            status: None,
            created_at: Some(created_at),
            updated_at: None,
        }
    }

    pub fn is_global(&self) -> bool {
        self.kind.as_deref() == Some(GLOBAL_PROFILE_TYPE)
    }

    pub fn is_draft(&self) -> bool {
        self.status == Some(ProfileStatus::Draft)
    }
}

/// Profiles a new adjustment may be based on.
///
/// The global profile is already covered by the wholesale sentinel and
/// drafts are not offered. The resolver itself never filters on status.
pub fn base_profile_options(profiles: &[PricingProfile]) -> Vec<&PricingProfile> {
    profiles
        .iter()
        .filter(|p| !p.is_global() && !p.is_draft())
        .collect()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Profile name is required")]
    MissingName,
}

/// Payload for creating a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub profile_type: Option<ProfileScope>,
    #[serde(default)]
    pub selected_products: Vec<String>,
    pub price_adjustment: Option<PriceAdjustment>,
}

impl ProfileDraft {
    /// Build a new profile. New profiles always start as drafts.
    pub fn into_profile(
        self,
        id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<PricingProfile, CatalogError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(CatalogError::MissingName),
        };

        Ok(PricingProfile {
            id: id.into(),
            name,
            kind: None,
            profile_type: self.profile_type,
            selected_products: self.selected_products,
            price_adjustment: self.price_adjustment,
            status: Some(ProfileStatus::Draft),
            created_at: Some(now),
            updated_at: None,
        })
    }
}

/// Partial update; absent fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub profile_type: Option<ProfileScope>,
    pub selected_products: Option<Vec<String>>,
    pub price_adjustment: Option<PriceAdjustment>,
    pub status: Option<ProfileStatus>,
}

impl ProfilePatch {
    pub fn apply_to(self, profile: &mut PricingProfile, now: DateTime<Utc>) {
        if let Some(name) = self.name.filter(|n| !n.is_empty()) {
            profile.name = name;
        }
        if let Some(scope) = self.profile_type {
            profile.profile_type = Some(scope);
        }
        if let Some(selected) = self.selected_products {
            profile.selected_products = selected;
        }
        if let Some(adjustment) = self.price_adjustment {
            profile.price_adjustment = Some(adjustment);
        }
        if let Some(status) = self.status {
            profile.status = Some(status);
        }
        profile.updated_at = Some(now);
    }
}
