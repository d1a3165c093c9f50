use std::collections::HashSet;

use super::super::actions::{
    InitializeSubscriptionInput, SetRenewalDateInput, UpdateBillingProjectionInput,
    UpdateCustomerInfoInput,
};
use super::super::errors::{Result, SubscriptionInstanceError};
use super::super::models::SubscriptionInstanceState;
use crate::common::update::set_nullable;

/// Copy the offering snapshot into a fresh subscription. Status stays PENDING.
pub fn initialize_subscription(
    state: &mut SubscriptionInstanceState,
    input: &InitializeSubscriptionInput,
) -> Result<()> {
    if state.is_initialized() {
        return Err(SubscriptionInstanceError::AlreadyInitialized);
    }

    let mut service_ids = HashSet::new();
    for service in &input.services {
        if !service_ids.insert(service.id.as_str()) {
            return Err(SubscriptionInstanceError::DuplicateServiceId {
                id: service.id.clone(),
            });
        }
        let mut metric_ids = HashSet::new();
        for metric in &service.metrics {
            if !metric_ids.insert(metric.id.as_str()) {
                return Err(SubscriptionInstanceError::DuplicateMetricId {
                    service_id: service.id.clone(),
                    id: metric.id.clone(),
                });
            }
        }
    }

    state.customer_id = Some(input.customer_id.clone());
    state.customer_name.clone_from(&input.customer_name);
    state.customer_email.clone_from(&input.customer_email);
    state.service_offering_id = Some(input.service_offering_id.clone());
    state.resource_template_id.clone_from(&input.resource_template_id);
    state.tier_name.clone_from(&input.tier_name);
    state.tier_pricing_option_id.clone_from(&input.tier_pricing_option_id);
    state.created_at = Some(input.created_at);
    state.billing_cycle = input.billing_cycle;
    state.projected_bill_amount = input.projected_bill_amount;
    state.currency.clone_from(&input.currency);
    state.services.clone_from(&input.services);
    Ok(())
}

pub fn update_customer_info(
    state: &mut SubscriptionInstanceState,
    input: &UpdateCustomerInfoInput,
) -> Result<()> {
    set_nullable(&mut state.customer_name, &input.customer_name);
    set_nullable(&mut state.customer_email, &input.customer_email);
    Ok(())
}

pub fn update_billing_projection(
    state: &mut SubscriptionInstanceState,
    input: &UpdateBillingProjectionInput,
) -> Result<()> {
    set_nullable(&mut state.projected_bill_amount, &input.projected_bill_amount);
    set_nullable(&mut state.currency, &input.currency);
    Ok(())
}

pub fn set_renewal_date(
    state: &mut SubscriptionInstanceState,
    input: &SetRenewalDateInput,
) -> Result<()> {
    state.renewal_date = input.renewal_date;
    Ok(())
}
