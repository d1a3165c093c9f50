use document_runtime::{ErrorCategory, OperationError};
use thiserror::Error;

use super::models::{
    FacetBindingId, PricingOptionId, ServiceGroupId, ServiceId, ServiceLevelId, TierId,
    UsageLimitId,
};
use crate::common::{FacetTargetId, OptionGroupId, Phid};

/// Errors from ServiceOffering operations, one variant per operation and failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceOfferingError {
    #[error("resource template {current} is already selected; use CHANGE_RESOURCE_TEMPLATE")]
    TemplateAlreadySelected { current: Phid },

    #[error("expected current resource template {expected}, found {current:?}")]
    TemplateMismatch {
        expected: Phid,
        current: Option<Phid>,
    },

    #[error("service {id} already exists")]
    DuplicateServiceId { id: ServiceId },

    #[error("cannot add facet binding: service {service_id} not found")]
    AddFacetBindingServiceNotFound { service_id: ServiceId },

    #[error("facet binding {id} already exists on service {service_id}")]
    DuplicateFacetBindingId {
        service_id: ServiceId,
        id: FacetBindingId,
    },

    #[error("service group {id} already exists")]
    DuplicateServiceGroupId { id: ServiceGroupId },

    #[error("cannot update service group: {id} not found")]
    UpdateServiceGroupNotFound { id: ServiceGroupId },

    #[error("cannot delete service group: {id} not found")]
    DeleteServiceGroupNotFound { id: ServiceGroupId },

    #[error("cannot reorder service groups: {id} is not a service group")]
    ReorderServiceGroupsUnknownId { id: ServiceGroupId },

    #[error("cannot reorder service groups: {id} is listed more than once")]
    ReorderServiceGroupsDuplicateId { id: ServiceGroupId },

    #[error("option group {id} already exists")]
    DuplicateOptionGroupId { id: OptionGroupId },

    #[error("tier {id} already exists")]
    DuplicateTierId { id: TierId },

    #[error("cannot update tier: {id} not found")]
    UpdateTierNotFound { id: TierId },

    #[error("tier {id} not found")]
    TierNotFound { id: TierId },

    #[error("cannot add pricing option: tier {tier_id} not found")]
    AddPricingOptionTierNotFound { tier_id: TierId },

    #[error("pricing option {id} already exists on tier {tier_id}")]
    DuplicatePricingOptionId { tier_id: TierId, id: PricingOptionId },

    #[error("cannot update pricing option: tier {tier_id} not found")]
    UpdatePricingOptionTierNotFound { tier_id: TierId },

    #[error("cannot update pricing option: {id} not found on tier {tier_id}")]
    UpdatePricingOptionNotFound { tier_id: TierId, id: PricingOptionId },

    #[error("cannot remove pricing option: tier {tier_id} not found")]
    RemovePricingOptionTierNotFound { tier_id: TierId },

    #[error("cannot add service level: tier {tier_id} not found")]
    AddServiceLevelTierNotFound { tier_id: TierId },

    #[error("service level {id} already exists on tier {tier_id}")]
    DuplicateServiceLevelId { tier_id: TierId, id: ServiceLevelId },

    #[error("cannot update service level: tier {tier_id} not found")]
    UpdateServiceLevelTierNotFound { tier_id: TierId },

    #[error("cannot update service level: {id} not found on tier {tier_id}")]
    UpdateServiceLevelNotFound { tier_id: TierId, id: ServiceLevelId },

    #[error("cannot remove service level: tier {tier_id} not found")]
    RemoveServiceLevelTierNotFound { tier_id: TierId },

    #[error("cannot add usage limit: tier {tier_id} not found")]
    AddUsageLimitTierNotFound { tier_id: TierId },

    #[error("usage limit {id} already exists on tier {tier_id}")]
    DuplicateUsageLimitId { tier_id: TierId, id: UsageLimitId },

    #[error("cannot update usage limit: tier {tier_id} not found")]
    UpdateUsageLimitTierNotFound { tier_id: TierId },

    #[error("cannot update usage limit: {id} not found on tier {tier_id}")]
    UpdateUsageLimitNotFound { tier_id: TierId, id: UsageLimitId },

    #[error("cannot remove usage limit: tier {tier_id} not found")]
    RemoveUsageLimitTierNotFound { tier_id: TierId },

    #[error("facet target {id} already exists")]
    DuplicateFacetTargetId { id: FacetTargetId },

    #[error("cannot add facet option: no facet target for category {category_key}")]
    AddFacetOptionTargetNotFound { category_key: String },
}

pub type Result<T> = std::result::Result<T, ServiceOfferingError>;

impl OperationError for ServiceOfferingError {
    fn code(&self) -> &'static str {
        use ServiceOfferingError::*;
        match self {
            TemplateAlreadySelected { .. } => "TEMPLATE_ALREADY_SELECTED",
            TemplateMismatch { .. } => "TEMPLATE_MISMATCH",
            DuplicateServiceId { .. } => "DUPLICATE_SERVICE_ID",
            AddFacetBindingServiceNotFound { .. } => "ADD_FACET_BINDING_SERVICE_NOT_FOUND",
            DuplicateFacetBindingId { .. } => "DUPLICATE_FACET_BINDING_ID",
            DuplicateServiceGroupId { .. } => "DUPLICATE_SERVICE_GROUP_ID",
            UpdateServiceGroupNotFound { .. } => "UPDATE_SERVICE_GROUP_NOT_FOUND",
            DeleteServiceGroupNotFound { .. } => "DELETE_SERVICE_GROUP_NOT_FOUND",
            ReorderServiceGroupsUnknownId { .. } => "REORDER_SERVICE_GROUPS_UNKNOWN_ID",
            ReorderServiceGroupsDuplicateId { .. } => "REORDER_SERVICE_GROUPS_DUPLICATE_ID",
            DuplicateOptionGroupId { .. } => "DUPLICATE_OPTION_GROUP_ID",
            DuplicateTierId { .. } => "DUPLICATE_TIER_ID",
            UpdateTierNotFound { .. } => "UPDATE_TIER_NOT_FOUND",
            TierNotFound { .. } => "TIER_NOT_FOUND",
            AddPricingOptionTierNotFound { .. } => "ADD_PRICING_OPTION_TIER_NOT_FOUND",
            DuplicatePricingOptionId { .. } => "DUPLICATE_PRICING_OPTION_ID",
            UpdatePricingOptionTierNotFound { .. } => "UPDATE_PRICING_OPTION_TIER_NOT_FOUND",
            UpdatePricingOptionNotFound { .. } => "UPDATE_PRICING_OPTION_NOT_FOUND",
            RemovePricingOptionTierNotFound { .. } => "REMOVE_PRICING_OPTION_TIER_NOT_FOUND",
            AddServiceLevelTierNotFound { .. } => "ADD_SERVICE_LEVEL_TIER_NOT_FOUND",
            DuplicateServiceLevelId { .. } => "DUPLICATE_SERVICE_LEVEL_ID",
            UpdateServiceLevelTierNotFound { .. } => "UPDATE_SERVICE_LEVEL_TIER_NOT_FOUND",
            UpdateServiceLevelNotFound { .. } => "UPDATE_SERVICE_LEVEL_NOT_FOUND",
            RemoveServiceLevelTierNotFound { .. } => "REMOVE_SERVICE_LEVEL_TIER_NOT_FOUND",
            AddUsageLimitTierNotFound { .. } => "ADD_USAGE_LIMIT_TIER_NOT_FOUND",
            DuplicateUsageLimitId { .. } => "DUPLICATE_USAGE_LIMIT_ID",
            UpdateUsageLimitTierNotFound { .. } => "UPDATE_USAGE_LIMIT_TIER_NOT_FOUND",
            UpdateUsageLimitNotFound { .. } => "UPDATE_USAGE_LIMIT_NOT_FOUND",
            RemoveUsageLimitTierNotFound { .. } => "REMOVE_USAGE_LIMIT_TIER_NOT_FOUND",
            DuplicateFacetTargetId { .. } => "DUPLICATE_FACET_TARGET_ID",
            AddFacetOptionTargetNotFound { .. } => "ADD_FACET_OPTION_TARGET_NOT_FOUND",
        }
    }

    fn category(&self) -> ErrorCategory {
        use ServiceOfferingError::*;
        match self {
            TemplateAlreadySelected { .. } => ErrorCategory::InvalidState,
            TemplateMismatch { .. } => ErrorCategory::Conflict,
            DuplicateServiceId { .. }
            | DuplicateFacetBindingId { .. }
            | DuplicateServiceGroupId { .. }
            | DuplicateOptionGroupId { .. }
            | DuplicateTierId { .. }
            | DuplicatePricingOptionId { .. }
            | DuplicateServiceLevelId { .. }
            | DuplicateUsageLimitId { .. }
            | DuplicateFacetTargetId { .. } => ErrorCategory::Duplicate,
            ReorderServiceGroupsDuplicateId { .. } => ErrorCategory::Validation,
            AddFacetBindingServiceNotFound { .. }
            | UpdateServiceGroupNotFound { .. }
            | DeleteServiceGroupNotFound { .. }
            | ReorderServiceGroupsUnknownId { .. }
            | UpdateTierNotFound { .. }
            | TierNotFound { .. }
            | AddPricingOptionTierNotFound { .. }
            | UpdatePricingOptionTierNotFound { .. }
            | UpdatePricingOptionNotFound { .. }
            | RemovePricingOptionTierNotFound { .. }
            | AddServiceLevelTierNotFound { .. }
            | UpdateServiceLevelTierNotFound { .. }
            | UpdateServiceLevelNotFound { .. }
            | RemoveServiceLevelTierNotFound { .. }
            | AddUsageLimitTierNotFound { .. }
            | UpdateUsageLimitTierNotFound { .. }
            | UpdateUsageLimitNotFound { .. }
            | RemoveUsageLimitTierNotFound { .. }
            | AddFacetOptionTargetNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
