pub mod product;
pub mod profile;
pub mod pricing;

pub use product::{Product, ProductFilter};
pub use profile::{
    base_profile_options, AdjustmentMode, BasedOn, CatalogError, IncrementMode, PriceAdjustment,
    PricingProfile, ProfileDraft, ProfilePatch, ProfileScope, ProfileStatus,
};
pub use pricing::{
    apply_adjustment, calculate_adjusted_price, calculate_prices_for_products,
    resolve_base_price, PricedProduct,
};
