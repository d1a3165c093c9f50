//! ServiceOffering reducers, one function per operation.

mod facet_targets;
mod offering;
mod option_groups;
mod service_groups;
mod services;
mod tiers;

use super::actions::ServiceOfferingAction;
use super::errors::Result;
use super::models::ServiceOfferingState;

/// Apply one action to the global state draft.
pub(super) fn reduce(state: &mut ServiceOfferingState, action: &ServiceOfferingAction) -> Result<()> {
    use ServiceOfferingAction::*;
    match action {
        UpdateOfferingInfo(input) => offering::update_offering_info(state, input),
        UpdateOfferingStatus(input) => offering::update_offering_status(state, input),
        SetOperator(input) => offering::set_operator(state, input),
        SetOfferingId(input) => offering::set_offering_id(state, input),
        SetAvailableBillingCycles(input) => offering::set_available_billing_cycles(state, input),
        SelectResourceTemplate(input) => offering::select_resource_template(state, input),
        ChangeResourceTemplate(input) => offering::change_resource_template(state, input),

        AddService(input) => services::add_service(state, input),
        UpdateService(input) => services::update_service(state, input),
        DeleteService(input) => services::delete_service(state, input),
        AddFacetBinding(input) => services::add_facet_binding(state, input),
        RemoveFacetBinding(input) => services::remove_facet_binding(state, input),

        AddServiceGroup(input) => service_groups::add_service_group(state, input),
        UpdateServiceGroup(input) => service_groups::update_service_group(state, input),
        DeleteServiceGroup(input) => service_groups::delete_service_group(state, input),
        ReorderServiceGroups(input) => service_groups::reorder_service_groups(state, input),

        AddOptionGroup(input) => option_groups::add_option_group(state, input),
        UpdateOptionGroup(input) => option_groups::update_option_group(state, input),
        DeleteOptionGroup(input) => option_groups::delete_option_group(state, input),

        AddTier(input) => tiers::add_tier(state, input),
        UpdateTier(input) => tiers::update_tier(state, input),
        UpdateTierPricing(input) => tiers::update_tier_pricing(state, input),
        DeleteTier(input) => tiers::delete_tier(state, input),
        AddTierPricingOption(input) => tiers::add_tier_pricing_option(state, input),
        UpdateTierPricingOption(input) => tiers::update_tier_pricing_option(state, input),
        RemoveTierPricingOption(input) => tiers::remove_tier_pricing_option(state, input),
        AddServiceLevel(input) => tiers::add_service_level(state, input),
        UpdateServiceLevel(input) => tiers::update_service_level(state, input),
        RemoveServiceLevel(input) => tiers::remove_service_level(state, input),
        AddUsageLimit(input) => tiers::add_usage_limit(state, input),
        UpdateUsageLimit(input) => tiers::update_usage_limit(state, input),
        RemoveUsageLimit(input) => tiers::remove_usage_limit(state, input),

        SetFacetTarget(input) => facet_targets::set_facet_target(state, input),
        RemoveFacetTarget(input) => facet_targets::remove_facet_target(state, input),
        AddFacetOption(input) => facet_targets::add_facet_option(state, input),
        RemoveFacetOption(input) => facet_targets::remove_facet_option(state, input),
    }
}
