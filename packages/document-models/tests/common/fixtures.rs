//! Action builders shared by the integration tests.
//!
//! Every builder stamps `lastModified` with `day(n)` so assertions on
//! timestamps stay deterministic.

use document_models::common::BillingCycle;
use document_models::domains::service_offering::{
    AddServiceGroupInput, AddServiceInput, AddTierInput, AddTierPricingOptionInput,
    DeleteServiceInput, RemoveTierPricingOptionInput, ReorderServiceGroupsInput,
    ServiceOfferingAction, UpdateTierPricingOptionInput,
};
use document_models::domains::subscription_instance::{
    ActivateSubscriptionInput, CancelSubscriptionInput, InitializeSubscriptionInput,
    PauseSubscriptionInput, RenewExpiringSubscriptionInput, ResumeSubscriptionInput,
    SetExpiringInput, SubscriptionInstanceAction,
};
use document_runtime::testing::day;
use rust_decimal::Decimal;

// =============================================================================
// ServiceOffering
// =============================================================================

pub fn add_service(id: &str, title: &str, at: u32) -> ServiceOfferingAction {
    ServiceOfferingAction::add_service(AddServiceInput {
        id: id.into(),
        title: title.into(),
        description: None,
        display_order: None,
        service_group_id: None,
        is_setup_formation: false,
        option_group_id: None,
        last_modified: day(at),
    })
}

pub fn add_service_in_group(id: &str, group: &str) -> ServiceOfferingAction {
    ServiceOfferingAction::add_service(AddServiceInput {
        id: id.into(),
        title: id.to_uppercase(),
        description: None,
        display_order: None,
        service_group_id: Some(group.into()),
        is_setup_formation: false,
        option_group_id: None,
        last_modified: day(1),
    })
}

pub fn delete_service(id: &str, at: u32) -> ServiceOfferingAction {
    ServiceOfferingAction::delete_service(DeleteServiceInput {
        id: id.into(),
        last_modified: day(at),
    })
}

pub fn add_group(id: &str) -> ServiceOfferingAction {
    ServiceOfferingAction::add_service_group(AddServiceGroupInput {
        id: id.into(),
        name: format!("Group {id}"),
        description: None,
        billing_cycle: BillingCycle::Monthly,
        display_order: None,
        last_modified: day(1),
    })
}

pub fn reorder_groups(order: &[&str]) -> ServiceOfferingAction {
    ServiceOfferingAction::reorder_service_groups(ReorderServiceGroupsInput {
        order: order.iter().map(|id| (*id).into()).collect(),
        last_modified: day(3),
    })
}

pub fn add_tier(id: &str) -> ServiceOfferingAction {
    ServiceOfferingAction::add_tier(AddTierInput {
        id: id.into(),
        name: id.to_uppercase(),
        description: None,
        is_custom_pricing: false,
        amount: Some(Decimal::new(4900, 2)),
        currency: "USD".into(),
        last_modified: day(1),
    })
}

pub fn add_pricing_option(tier: &str, id: &str, is_default: bool) -> ServiceOfferingAction {
    ServiceOfferingAction::add_tier_pricing_option(AddTierPricingOptionInput {
        tier_id: tier.into(),
        pricing_option_id: id.into(),
        billing_cycle: BillingCycle::Monthly,
        amount: Decimal::new(4900, 2),
        currency: "USD".into(),
        is_default,
        last_modified: day(2),
    })
}

pub fn make_default(tier: &str, id: &str) -> ServiceOfferingAction {
    ServiceOfferingAction::update_tier_pricing_option(UpdateTierPricingOptionInput {
        tier_id: tier.into(),
        pricing_option_id: id.into(),
        billing_cycle: None,
        amount: None,
        currency: None,
        is_default: Some(true),
        last_modified: day(2),
    })
}

pub fn remove_pricing_option(tier: &str, id: &str) -> ServiceOfferingAction {
    ServiceOfferingAction::remove_tier_pricing_option(RemoveTierPricingOptionInput {
        tier_id: tier.into(),
        pricing_option_id: id.into(),
        last_modified: day(2),
    })
}

// =============================================================================
// SubscriptionInstance
// =============================================================================

pub fn initialize() -> SubscriptionInstanceAction {
    SubscriptionInstanceAction::initialize_subscription(InitializeSubscriptionInput {
        customer_id: "customer-1".into(),
        customer_name: Some("Ada Lovelace".into()),
        customer_email: Some("ada@example.com".into()),
        service_offering_id: "offering-1".into(),
        resource_template_id: None,
        tier_name: Some("Pro".into()),
        tier_pricing_option_id: None,
        created_at: day(1),
        billing_cycle: Some(BillingCycle::Monthly),
        projected_bill_amount: None,
        currency: Some("USD".into()),
        services: Vec::new(),
    })
}

pub fn activate(at: u32) -> SubscriptionInstanceAction {
    SubscriptionInstanceAction::activate_subscription(ActivateSubscriptionInput {
        activated_since: day(at),
    })
}

pub fn pause(at: u32) -> SubscriptionInstanceAction {
    SubscriptionInstanceAction::pause_subscription(PauseSubscriptionInput {
        paused_since: day(at),
    })
}

pub fn set_expiring(at: u32) -> SubscriptionInstanceAction {
    SubscriptionInstanceAction::set_expiring(SetExpiringInput {
        expiring_since: day(at),
    })
}

pub fn cancel(at: u32) -> SubscriptionInstanceAction {
    SubscriptionInstanceAction::cancel_subscription(CancelSubscriptionInput {
        cancelled_since: day(at),
        cancellation_reason: Some("Switched provider".into()),
    })
}

pub fn resume() -> SubscriptionInstanceAction {
    SubscriptionInstanceAction::resume_subscription(ResumeSubscriptionInput {})
}

pub fn renew(renewal: Option<u32>) -> SubscriptionInstanceAction {
    SubscriptionInstanceAction::renew_expiring_subscription(RenewExpiringSubscriptionInput {
        renewal_date: renewal.map(day),
    })
}
