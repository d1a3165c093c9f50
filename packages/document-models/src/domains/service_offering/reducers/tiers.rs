//! Tiers and the collections each tier owns: pricing options, service
//! levels and usage limits.
//!
//! Every sub-collection operation requires its tier to exist. Pricing options
//! keep at most one default: a new default clears the others, and removing
//! the default promotes the first remaining option.

use super::super::actions::{
    AddServiceLevelInput, AddTierInput, AddTierPricingOptionInput, AddUsageLimitInput,
    DeleteTierInput, RemoveServiceLevelInput, RemoveTierPricingOptionInput,
    RemoveUsageLimitInput, UpdateServiceLevelInput, UpdateTierInput,
    UpdateTierPricingInput, UpdateTierPricingOptionInput, UpdateUsageLimitInput,
};
use super::super::errors::{Result, ServiceOfferingError};
use super::super::models::{
    ServiceLevelBinding, ServiceOfferingState, ServiceSubscriptionTier, ServiceUsageLimit,
    TierId, TierPricing, TierPricingOption,
};
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::{clear_defaults, promote_first, EntityVec};

fn tier_mut<'a>(
    state: &'a mut ServiceOfferingState,
    tier_id: &TierId,
    not_found: impl FnOnce(TierId) -> ServiceOfferingError,
) -> Result<&'a mut ServiceSubscriptionTier> {
    state
        .tiers
        .find_by_id_mut(tier_id)
        .ok_or_else(|| not_found(tier_id.clone()))
}

// ============================================================================
// Tiers
// ============================================================================

pub fn add_tier(state: &mut ServiceOfferingState, input: &AddTierInput) -> Result<()> {
    if state.tiers.contains_id(&input.id) {
        return Err(ServiceOfferingError::DuplicateTierId {
            id: input.id.clone(),
        });
    }
    state.tiers.push(ServiceSubscriptionTier {
        id: input.id.clone(),
        name: input.name.clone(),
        description: input.description.clone(),
        is_custom_pricing: input.is_custom_pricing,
        pricing: TierPricing {
            amount: input.amount,
            currency: input.currency.clone(),
        },
        pricing_options: Vec::new(),
        service_levels: Vec::new(),
        usage_limits: Vec::new(),
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_tier(state: &mut ServiceOfferingState, input: &UpdateTierInput) -> Result<()> {
    let tier = tier_mut(state, &input.id, |id| ServiceOfferingError::UpdateTierNotFound { id })?;
    set_non_empty(&mut tier.name, &input.name);
    set_nullable(&mut tier.description, &input.description);
    set_if_present(&mut tier.is_custom_pricing, &input.is_custom_pricing);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_tier_pricing(
    state: &mut ServiceOfferingState,
    input: &UpdateTierPricingInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |id| ServiceOfferingError::TierNotFound { id })?;
    set_nullable(&mut tier.pricing.amount, &input.amount);
    set_non_empty(&mut tier.pricing.currency, &input.currency);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn delete_tier(state: &mut ServiceOfferingState, input: &DeleteTierInput) -> Result<()> {
    if state.tiers.remove_by_id(&input.id).is_some() {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}

// ============================================================================
// Pricing options
// ============================================================================

pub fn add_tier_pricing_option(
    state: &mut ServiceOfferingState,
    input: &AddTierPricingOptionInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::AddPricingOptionTierNotFound { tier_id }
    })?;
    if tier.pricing_options.contains_id(&input.pricing_option_id) {
        return Err(ServiceOfferingError::DuplicatePricingOptionId {
            tier_id: input.tier_id.clone(),
            id: input.pricing_option_id.clone(),
        });
    }

    let is_default = input.is_default || tier.pricing_options.is_empty();
    if is_default {
        clear_defaults(&mut tier.pricing_options);
    }
    tier.pricing_options.push(TierPricingOption {
        id: input.pricing_option_id.clone(),
        billing_cycle: input.billing_cycle,
        amount: input.amount,
        currency: input.currency.clone(),
        is_default,
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_tier_pricing_option(
    state: &mut ServiceOfferingState,
    input: &UpdateTierPricingOptionInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::UpdatePricingOptionTierNotFound { tier_id }
    })?;
    let Some(position) = tier.pricing_options.position_of(&input.pricing_option_id) else {
        return Err(ServiceOfferingError::UpdatePricingOptionNotFound {
            tier_id: input.tier_id.clone(),
            id: input.pricing_option_id.clone(),
        });
    };

    if input.is_default == Some(true) {
        clear_defaults(&mut tier.pricing_options);
    }
    let option = &mut tier.pricing_options[position];
    set_if_present(&mut option.billing_cycle, &input.billing_cycle);
    set_if_present(&mut option.amount, &input.amount);
    set_non_empty(&mut option.currency, &input.currency);
    set_if_present(&mut option.is_default, &input.is_default);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_tier_pricing_option(
    state: &mut ServiceOfferingState,
    input: &RemoveTierPricingOptionInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::RemovePricingOptionTierNotFound { tier_id }
    })?;
    let Some(removed) = tier.pricing_options.remove_by_id(&input.pricing_option_id) else {
        return Ok(());
    };
    if removed.is_default {
        promote_first(&mut tier.pricing_options);
    }
    state.last_modified = Some(input.last_modified);
    Ok(())
}

// ============================================================================
// Service levels
// ============================================================================

pub fn add_service_level(
    state: &mut ServiceOfferingState,
    input: &AddServiceLevelInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::AddServiceLevelTierNotFound { tier_id }
    })?;
    if tier.service_levels.contains_id(&input.service_level_id) {
        return Err(ServiceOfferingError::DuplicateServiceLevelId {
            tier_id: input.tier_id.clone(),
            id: input.service_level_id.clone(),
        });
    }
    tier.service_levels.push(ServiceLevelBinding {
        id: input.service_level_id.clone(),
        service_id: input.service_id.clone(),
        level: input.level,
        custom_value: input.custom_value.clone(),
        option_group_id: input.option_group_id.clone(),
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_service_level(
    state: &mut ServiceOfferingState,
    input: &UpdateServiceLevelInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::UpdateServiceLevelTierNotFound { tier_id }
    })?;
    let level = tier
        .service_levels
        .find_by_id_mut(&input.service_level_id)
        .ok_or_else(|| ServiceOfferingError::UpdateServiceLevelNotFound {
            tier_id: input.tier_id.clone(),
            id: input.service_level_id.clone(),
        })?;
    set_if_present(&mut level.level, &input.level);
    set_nullable(&mut level.custom_value, &input.custom_value);
    set_nullable(&mut level.option_group_id, &input.option_group_id);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_service_level(
    state: &mut ServiceOfferingState,
    input: &RemoveServiceLevelInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::RemoveServiceLevelTierNotFound { tier_id }
    })?;
    if tier.service_levels.remove_by_id(&input.service_level_id).is_some() {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}

// ============================================================================
// Usage limits
// ============================================================================

pub fn add_usage_limit(state: &mut ServiceOfferingState, input: &AddUsageLimitInput) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::AddUsageLimitTierNotFound { tier_id }
    })?;
    if tier.usage_limits.contains_id(&input.limit_id) {
        return Err(ServiceOfferingError::DuplicateUsageLimitId {
            tier_id: input.tier_id.clone(),
            id: input.limit_id.clone(),
        });
    }
    tier.usage_limits.push(ServiceUsageLimit {
        id: input.limit_id.clone(),
        service_id: input.service_id.clone(),
        metric: input.metric.clone(),
        limit: input.limit,
        reset_period: input.reset_period,
        notes: input.notes.clone(),
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_usage_limit(
    state: &mut ServiceOfferingState,
    input: &UpdateUsageLimitInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::UpdateUsageLimitTierNotFound { tier_id }
    })?;
    let limit = tier
        .usage_limits
        .find_by_id_mut(&input.limit_id)
        .ok_or_else(|| ServiceOfferingError::UpdateUsageLimitNotFound {
            tier_id: input.tier_id.clone(),
            id: input.limit_id.clone(),
        })?;
    set_non_empty(&mut limit.metric, &input.metric);
    set_nullable(&mut limit.limit, &input.limit);
    set_nullable(&mut limit.reset_period, &input.reset_period);
    set_nullable(&mut limit.notes, &input.notes);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_usage_limit(
    state: &mut ServiceOfferingState,
    input: &RemoveUsageLimitInput,
) -> Result<()> {
    let tier = tier_mut(state, &input.tier_id, |tier_id| {
        ServiceOfferingError::RemoveUsageLimitTierNotFound { tier_id }
    })?;
    if tier.usage_limits.remove_by_id(&input.limit_id).is_some() {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}
