use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::profile::{AdjustmentMode, BasedOn, IncrementMode, PriceAdjustment, PricingProfile};

/// Product enriched with its resolved prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub adjusted_price: Decimal,
    pub base_price: Decimal,
}

/// Apply one adjustment to a base price.
///
/// A non-positive base yields zero, and the result never goes below zero.
/// Arithmetic saturates at `Decimal::MAX` instead of overflowing.
pub fn apply_adjustment(
    base_price: Decimal,
    mode: AdjustmentMode,
    adjustment_value: Decimal,
    increment_mode: IncrementMode,
) -> Decimal {
    if base_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let delta = match mode {
        AdjustmentMode::Fixed => adjustment_value,
        AdjustmentMode::Dynamic => (adjustment_value / Decimal::ONE_HUNDRED).saturating_mul(base_price),
        AdjustmentMode::Unknown => Decimal::ZERO,
    };

    let new_price = match increment_mode {
        IncrementMode::Increase => base_price.saturating_add(delta),
        IncrementMode::Decrease => base_price.saturating_sub(delta),
    };

    new_price.max(Decimal::ZERO)
}

fn apply(base_price: Decimal, adjustment: &PriceAdjustment) -> Decimal {
    apply_adjustment(
        base_price,
        adjustment.mode,
        adjustment.adjustment_value,
        adjustment.increment_mode,
    )
}

/// Resolve the price an adjustment based on `based_on` starts from.
///
/// Referenced profiles are followed depth-first; `visited` holds the ids
/// already on the chain and is moved down the recursion, so every top-level
/// call owns its own set. Dangling references, cycles and profiles without
/// an adjustment all fall back to the product's wholesale price.
pub fn resolve_base_price<'a>(
    product: &Product,
    based_on: &BasedOn,
    all_profiles: &'a [PricingProfile],
    mut visited: HashSet<&'a str>,
) -> Decimal {
    let Some(profile_id) = based_on.profile_id() else {
        return product.wholesale_price();
    };

    let Some(base_profile) = all_profiles.iter().find(|p| p.id == profile_id) else {
        return product.wholesale_price();
    };

    if !visited.insert(base_profile.id.as_str()) {
        tracing::warn!(
            profile_id = %profile_id,
            product_id = %product.id,
            "Circular profile reference, using global wholesale price"
        );
        return product.wholesale_price();
    }

    let Some(adjustment) = &base_profile.price_adjustment else {
        return product.wholesale_price();
    };

    let base_price = resolve_base_price(product, &adjustment.based_on, all_profiles, visited);
    apply(base_price, adjustment)
}

/// Final price of `product` under `profile`.
///
/// A missing profile, or one without an adjustment, passes the wholesale
/// price through unchanged.
pub fn calculate_adjusted_price(
    product: &Product,
    profile: Option<&PricingProfile>,
    all_profiles: &[PricingProfile],
) -> Decimal {
    let Some(adjustment) = profile.and_then(|p| p.price_adjustment.as_ref()) else {
        return product.wholesale_price();
    };

    let base_price = resolve_base_price(product, &adjustment.based_on, all_profiles, HashSet::new());
    apply(base_price, adjustment)
}

/// Price a batch of products under one profile, preserving input order.
pub fn calculate_prices_for_products(
    products: &[Product],
    profile: Option<&PricingProfile>,
    all_profiles: &[PricingProfile],
) -> Vec<PricedProduct> {
    let global = BasedOn::GlobalWholesalePrice;
    let based_on = profile
        .and_then(|p| p.price_adjustment.as_ref())
        .map(|a| &a.based_on)
        .unwrap_or(&global);

    products
        .iter()
        .map(|product| PricedProduct {
            product: product.clone(),
            adjusted_price: calculate_adjusted_price(product, profile, all_profiles),
            base_price: resolve_base_price(product, based_on, all_profiles, HashSet::new()),
        })
        .collect()
}
