//! ServiceOffering operations and their inputs.
//!
//! Every input carries the caller's `lastModified` timestamp, written to the
//! state whenever the operation changes something.

use document_runtime::document_actions;
use serde::{Deserialize, Serialize};
use url::Url;

use super::models::{
    FacetBindingId, OfferingStatus, PricingOptionId, ServiceGroupId, ServiceId, ServiceLevel,
    ServiceLevelId, TierId, UsageLimitId,
};
use crate::common::facet_target::{
    AddFacetOptionInput, RemoveFacetOptionInput, RemoveFacetTargetInput, SetFacetTargetInput,
};
use crate::common::option_group::{
    AddOptionGroupInput, DeleteOptionGroupInput, UpdateOptionGroupInput,
};
use crate::common::{
    nullable, Amount, BillingCycle, Currency, OptionGroupId, Phid, ResetPeriod, Timestamp,
};

// ============================================================================
// Offering
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferingInfoInput {
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<Option<Url>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub info_link: Option<Option<Url>>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferingStatusInput {
    pub status: OfferingStatus,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOperatorInput {
    pub operator_id: Phid,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOfferingIdInput {
    pub id: Phid,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAvailableBillingCyclesInput {
    pub billing_cycles: Vec<BillingCycle>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectResourceTemplateInput {
    pub resource_template_id: Phid,
    pub last_modified: Timestamp,
}

/// Switch templates. `previousTemplateId` must be the currently selected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeResourceTemplateInput {
    pub previous_template_id: Phid,
    pub new_template_id: Phid,
    pub last_modified: Timestamp,
}

// ============================================================================
// Services
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceInput {
    pub id: ServiceId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub service_group_id: Option<ServiceGroupId>,
    #[serde(default)]
    pub is_setup_formation: bool,
    #[serde(default)]
    pub option_group_id: Option<OptionGroupId>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceInput {
    pub id: ServiceId,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub display_order: Option<Option<u32>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub service_group_id: Option<Option<ServiceGroupId>>,
    pub is_setup_formation: Option<bool>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub option_group_id: Option<Option<OptionGroupId>>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceInput {
    pub id: ServiceId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFacetBindingInput {
    pub service_id: ServiceId,
    pub binding_id: FacetBindingId,
    pub facet_name: String,
    pub facet_type: Phid,
    #[serde(default)]
    pub supported_options: Vec<String>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFacetBindingInput {
    pub service_id: ServiceId,
    pub binding_id: FacetBindingId,
    pub last_modified: Timestamp,
}

// ============================================================================
// Service groups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceGroupInput {
    pub id: ServiceGroupId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub billing_cycle: BillingCycle,
    /// Defaults to the end of the list.
    #[serde(default)]
    pub display_order: Option<u32>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceGroupInput {
    pub id: ServiceGroupId,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub billing_cycle: Option<BillingCycle>,
    pub display_order: Option<u32>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteServiceGroupInput {
    pub id: ServiceGroupId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderServiceGroupsInput {
    pub order: Vec<ServiceGroupId>,
    pub last_modified: Timestamp,
}

// ============================================================================
// Tiers
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTierInput {
    pub id: TierId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_custom_pricing: bool,
    #[serde(default)]
    pub amount: Option<Amount>,
    pub currency: Currency,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTierInput {
    pub id: TierId,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub is_custom_pricing: Option<bool>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTierPricingInput {
    pub tier_id: TierId,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub amount: Option<Option<Amount>>,
    pub currency: Option<Currency>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTierInput {
    pub id: TierId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTierPricingOptionInput {
    pub tier_id: TierId,
    pub pricing_option_id: PricingOptionId,
    pub billing_cycle: BillingCycle,
    pub amount: Amount,
    pub currency: Currency,
    #[serde(default)]
    pub is_default: bool,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTierPricingOptionInput {
    pub tier_id: TierId,
    pub pricing_option_id: PricingOptionId,
    pub billing_cycle: Option<BillingCycle>,
    pub amount: Option<Amount>,
    pub currency: Option<Currency>,
    pub is_default: Option<bool>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTierPricingOptionInput {
    pub tier_id: TierId,
    pub pricing_option_id: PricingOptionId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceLevelInput {
    pub tier_id: TierId,
    pub service_level_id: ServiceLevelId,
    pub service_id: ServiceId,
    pub level: ServiceLevel,
    #[serde(default)]
    pub custom_value: Option<String>,
    #[serde(default)]
    pub option_group_id: Option<OptionGroupId>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceLevelInput {
    pub tier_id: TierId,
    pub service_level_id: ServiceLevelId,
    pub level: Option<ServiceLevel>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub custom_value: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub option_group_id: Option<Option<OptionGroupId>>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveServiceLevelInput {
    pub tier_id: TierId,
    pub service_level_id: ServiceLevelId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUsageLimitInput {
    pub tier_id: TierId,
    pub limit_id: UsageLimitId,
    pub service_id: ServiceId,
    pub metric: String,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub reset_period: Option<ResetPeriod>,
    #[serde(default)]
    pub notes: Option<String>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsageLimitInput {
    pub tier_id: TierId,
    pub limit_id: UsageLimitId,
    pub metric: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub limit: Option<Option<u64>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub reset_period: Option<Option<ResetPeriod>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveUsageLimitInput {
    pub tier_id: TierId,
    pub limit_id: UsageLimitId,
    pub last_modified: Timestamp,
}

// ============================================================================
// Action enum
// ============================================================================

document_actions! {
    /// Every operation a service offering accepts.
    pub enum ServiceOfferingAction {
        global "UPDATE_OFFERING_INFO" => UpdateOfferingInfo(UpdateOfferingInfoInput) as update_offering_info,
        global "UPDATE_OFFERING_STATUS" => UpdateOfferingStatus(UpdateOfferingStatusInput) as update_offering_status,
        global "SET_OPERATOR" => SetOperator(SetOperatorInput) as set_operator,
        global "SET_OFFERING_ID" => SetOfferingId(SetOfferingIdInput) as set_offering_id,
        global "SET_AVAILABLE_BILLING_CYCLES" => SetAvailableBillingCycles(SetAvailableBillingCyclesInput) as set_available_billing_cycles,
        global "SELECT_RESOURCE_TEMPLATE" => SelectResourceTemplate(SelectResourceTemplateInput) as select_resource_template,
        global "CHANGE_RESOURCE_TEMPLATE" => ChangeResourceTemplate(ChangeResourceTemplateInput) as change_resource_template,

        global "ADD_SERVICE" => AddService(AddServiceInput) as add_service,
        global "UPDATE_SERVICE" => UpdateService(UpdateServiceInput) as update_service,
        global "DELETE_SERVICE" => DeleteService(DeleteServiceInput) as delete_service,
        global "ADD_FACET_BINDING" => AddFacetBinding(AddFacetBindingInput) as add_facet_binding,
        global "REMOVE_FACET_BINDING" => RemoveFacetBinding(RemoveFacetBindingInput) as remove_facet_binding,

        global "ADD_SERVICE_GROUP" => AddServiceGroup(AddServiceGroupInput) as add_service_group,
        global "UPDATE_SERVICE_GROUP" => UpdateServiceGroup(UpdateServiceGroupInput) as update_service_group,
        global "DELETE_SERVICE_GROUP" => DeleteServiceGroup(DeleteServiceGroupInput) as delete_service_group,
        global "REORDER_SERVICE_GROUPS" => ReorderServiceGroups(ReorderServiceGroupsInput) as reorder_service_groups,

        global "ADD_OPTION_GROUP" => AddOptionGroup(AddOptionGroupInput) as add_option_group,
        global "UPDATE_OPTION_GROUP" => UpdateOptionGroup(UpdateOptionGroupInput) as update_option_group,
        global "DELETE_OPTION_GROUP" => DeleteOptionGroup(DeleteOptionGroupInput) as delete_option_group,

        global "ADD_TIER" => AddTier(AddTierInput) as add_tier,
        global "UPDATE_TIER" => UpdateTier(UpdateTierInput) as update_tier,
        global "UPDATE_TIER_PRICING" => UpdateTierPricing(UpdateTierPricingInput) as update_tier_pricing,
        global "DELETE_TIER" => DeleteTier(DeleteTierInput) as delete_tier,
        global "ADD_TIER_PRICING_OPTION" => AddTierPricingOption(AddTierPricingOptionInput) as add_tier_pricing_option,
        global "UPDATE_TIER_PRICING_OPTION" => UpdateTierPricingOption(UpdateTierPricingOptionInput) as update_tier_pricing_option,
        global "REMOVE_TIER_PRICING_OPTION" => RemoveTierPricingOption(RemoveTierPricingOptionInput) as remove_tier_pricing_option,
        global "ADD_SERVICE_LEVEL" => AddServiceLevel(AddServiceLevelInput) as add_service_level,
        global "UPDATE_SERVICE_LEVEL" => UpdateServiceLevel(UpdateServiceLevelInput) as update_service_level,
        global "REMOVE_SERVICE_LEVEL" => RemoveServiceLevel(RemoveServiceLevelInput) as remove_service_level,
        global "ADD_USAGE_LIMIT" => AddUsageLimit(AddUsageLimitInput) as add_usage_limit,
        global "UPDATE_USAGE_LIMIT" => UpdateUsageLimit(UpdateUsageLimitInput) as update_usage_limit,
        global "REMOVE_USAGE_LIMIT" => RemoveUsageLimit(RemoveUsageLimitInput) as remove_usage_limit,

        global "SET_FACET_TARGET" => SetFacetTarget(SetFacetTargetInput) as set_facet_target,
        global "REMOVE_FACET_TARGET" => RemoveFacetTarget(RemoveFacetTargetInput) as remove_facet_target,
        global "ADD_FACET_OPTION" => AddFacetOption(AddFacetOptionInput) as add_facet_option,
        global "REMOVE_FACET_OPTION" => RemoveFacetOption(RemoveFacetOptionInput) as remove_facet_option,
    }
}
