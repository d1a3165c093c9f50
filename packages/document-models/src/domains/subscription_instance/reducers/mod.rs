mod lifecycle;
mod services;
mod subscription;

use super::actions::SubscriptionInstanceAction;
use super::errors::Result;
use super::models::SubscriptionInstanceState;

pub(super) fn reduce(
    state: &mut SubscriptionInstanceState,
    action: &SubscriptionInstanceAction,
) -> Result<()> {
    use SubscriptionInstanceAction::*;
    match action {
        InitializeSubscription(input) => subscription::initialize_subscription(state, input),
        UpdateCustomerInfo(input) => subscription::update_customer_info(state, input),
        UpdateBillingProjection(input) => subscription::update_billing_projection(state, input),
        SetRenewalDate(input) => subscription::set_renewal_date(state, input),

        ActivateSubscription(input) => lifecycle::activate_subscription(state, input),
        PauseSubscription(input) => lifecycle::pause_subscription(state, input),
        SetExpiring(input) => lifecycle::set_expiring(state, input),
        CancelSubscription(input) => lifecycle::cancel_subscription(state, input),
        ResumeSubscription(input) => lifecycle::resume_subscription(state, input),
        RenewExpiringSubscription(input) => lifecycle::renew_expiring_subscription(state, input),

        AddService(input) => services::add_service(state, input),
        UpdateServiceInfo(input) => services::update_service_info(state, input),
        RemoveService(input) => services::remove_service(state, input),
        AddServiceMetric(input) => services::add_service_metric(state, input),
        UpdateMetric(input) => services::update_metric(state, input),
        RemoveServiceMetric(input) => services::remove_service_metric(state, input),
        IncrementMetricUsage(input) => services::increment_metric_usage(state, input),
        DecrementMetricUsage(input) => services::decrement_metric_usage(state, input),
        ResetMetricUsage(input) => services::reset_metric_usage(state, input),
    }
}
