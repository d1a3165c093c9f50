//! ServiceOffering state: what an operator sells and at which tiers.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::common::{
    Amount, BillingCycle, Currency, Defaultable, FacetTarget, Oid, OptionGroup, OptionGroupId,
    Ordered, Phid, PublicationStatus, ResetPeriod, Timestamp,
};

pub type OfferingStatus = PublicationStatus;

pub type ServiceId = Oid<Service>;
pub type FacetBindingId = Oid<FacetBinding>;
pub type ServiceGroupId = Oid<ServiceGroup>;
pub type TierId = Oid<ServiceSubscriptionTier>;
pub type PricingOptionId = Oid<TierPricingOption>;
pub type ServiceLevelId = Oid<ServiceLevelBinding>;
pub type UsageLimitId = Oid<ServiceUsageLimit>;

/// Global state of a service offering document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferingState {
    pub id: Phid,
    pub operator_id: Phid,
    pub resource_template_id: Option<Phid>,
    pub title: String,
    pub summary: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<Url>,
    pub info_link: Option<Url>,
    pub status: OfferingStatus,
    pub last_modified: Option<Timestamp>,
    pub available_billing_cycles: Vec<BillingCycle>,
    pub facet_targets: Vec<FacetTarget>,
    pub service_groups: Vec<ServiceGroup>,
    pub services: Vec<Service>,
    pub tiers: Vec<ServiceSubscriptionTier>,
    pub option_groups: Vec<OptionGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: Option<String>,
    pub display_order: Option<u32>,
    pub service_group_id: Option<ServiceGroupId>,
    pub is_setup_formation: bool,
    pub option_group_id: Option<OptionGroupId>,
    pub facet_bindings: Vec<FacetBinding>,
}

/// Binds a service to the facet options it supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetBinding {
    pub id: FacetBindingId,
    pub facet_name: String,
    /// Id of the facet document.
    pub facet_type: Phid,
    pub supported_options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceGroup {
    pub id: ServiceGroupId,
    pub name: String,
    pub description: Option<String>,
    pub billing_cycle: BillingCycle,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSubscriptionTier {
    pub id: TierId,
    pub name: String,
    pub description: Option<String>,
    pub is_custom_pricing: bool,
    pub pricing: TierPricing,
    pub pricing_options: Vec<TierPricingOption>,
    pub service_levels: Vec<ServiceLevelBinding>,
    pub usage_limits: Vec<ServiceUsageLimit>,
}

/// Headline price of a tier. `amount` is absent for custom pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPricing {
    pub amount: Option<Amount>,
    pub currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPricingOption {
    pub id: PricingOptionId,
    pub billing_cycle: BillingCycle,
    pub amount: Amount,
    pub currency: Currency,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLevelBinding {
    pub id: ServiceLevelId,
    pub service_id: ServiceId,
    pub level: ServiceLevel,
    pub custom_value: Option<String>,
    pub option_group_id: Option<OptionGroupId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageLimit {
    pub id: UsageLimitId,
    pub service_id: ServiceId,
    pub metric: String,
    pub limit: Option<u64>,
    pub reset_period: Option<ResetPeriod>,
    pub notes: Option<String>,
}

/// How a service is provided within a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceLevel {
    Included,
    NotIncluded,
    Optional,
    Custom,
    Variable,
    NotApplicable,
}

crate::impl_entity!(
    Service,
    FacetBinding,
    ServiceGroup,
    ServiceSubscriptionTier,
    TierPricingOption,
    ServiceLevelBinding,
    ServiceUsageLimit,
);

impl Ordered for ServiceGroup {
    fn set_display_order(&mut self, display_order: u32) {
        self.display_order = display_order;
    }
}

impl Defaultable for TierPricingOption {
    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}
