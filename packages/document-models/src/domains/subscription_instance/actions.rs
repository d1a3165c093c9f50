use document_runtime::document_actions;
use serde::{Deserialize, Serialize};

use super::models::{MetricId, SubscriptionService, SubscriptionServiceId};
use crate::common::{
    nullable, Amount, BillingCycle, Currency, EmailAddress, Phid, ResetPeriod, Timestamp,
};

// ============================================================================
// Subscription
// ============================================================================

/// Snapshot of the offering, tier and customer at subscription time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeSubscriptionInput {
    pub customer_id: Phid,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<EmailAddress>,
    pub service_offering_id: Phid,
    #[serde(default)]
    pub resource_template_id: Option<Phid>,
    #[serde(default)]
    pub tier_name: Option<String>,
    #[serde(default)]
    pub tier_pricing_option_id: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub billing_cycle: Option<BillingCycle>,
    #[serde(default)]
    pub projected_bill_amount: Option<Amount>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub services: Vec<SubscriptionService>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerInfoInput {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<Option<EmailAddress>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateSubscriptionInput {
    pub activated_since: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseSubscriptionInput {
    pub paused_since: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetExpiringInput {
    pub expiring_since: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelSubscriptionInput {
    pub cancelled_since: Timestamp,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSubscriptionInput {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewExpiringSubscriptionInput {
    #[serde(default)]
    pub renewal_date: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillingProjectionInput {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub projected_bill_amount: Option<Option<Amount>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub currency: Option<Option<Currency>>,
}

/// `null` clears the renewal date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRenewalDateInput {
    pub renewal_date: Option<Timestamp>,
}

// ============================================================================
// Services and metrics
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceInput {
    pub id: SubscriptionServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_value: Option<String>,
    #[serde(default)]
    pub setup_cost: Option<Amount>,
    #[serde(default)]
    pub recurring_cost: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceInfoInput {
    pub service_id: SubscriptionServiceId,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub custom_value: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub setup_cost: Option<Option<Amount>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub recurring_cost: Option<Option<Amount>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveServiceInput {
    pub service_id: SubscriptionServiceId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddServiceMetricInput {
    pub service_id: SubscriptionServiceId,
    pub metric_id: MetricId,
    pub name: String,
    pub unit_name: String,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub current_usage: u64,
    #[serde(default)]
    pub usage_reset_period: Option<ResetPeriod>,
    #[serde(default)]
    pub next_usage_reset: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetricInput {
    pub service_id: SubscriptionServiceId,
    pub metric_id: MetricId,
    pub name: Option<String>,
    pub unit_name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub limit: Option<Option<u64>>,
    pub current_usage: Option<u64>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub usage_reset_period: Option<Option<ResetPeriod>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub next_usage_reset: Option<Option<Timestamp>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveServiceMetricInput {
    pub service_id: SubscriptionServiceId,
    pub metric_id: MetricId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementMetricUsageInput {
    pub service_id: SubscriptionServiceId,
    pub metric_id: MetricId,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecrementMetricUsageInput {
    pub service_id: SubscriptionServiceId,
    pub metric_id: MetricId,
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetMetricUsageInput {
    pub service_id: SubscriptionServiceId,
    pub metric_id: MetricId,
    #[serde(default)]
    pub next_usage_reset: Option<Timestamp>,
}

document_actions! {
    pub enum SubscriptionInstanceAction {
        global "INITIALIZE_SUBSCRIPTION" => InitializeSubscription(InitializeSubscriptionInput) as initialize_subscription,
        global "UPDATE_CUSTOMER_INFO" => UpdateCustomerInfo(UpdateCustomerInfoInput) as update_customer_info,
        global "ACTIVATE_SUBSCRIPTION" => ActivateSubscription(ActivateSubscriptionInput) as activate_subscription,
        global "PAUSE_SUBSCRIPTION" => PauseSubscription(PauseSubscriptionInput) as pause_subscription,
        global "SET_EXPIRING" => SetExpiring(SetExpiringInput) as set_expiring,
        global "CANCEL_SUBSCRIPTION" => CancelSubscription(CancelSubscriptionInput) as cancel_subscription,
        global "RESUME_SUBSCRIPTION" => ResumeSubscription(ResumeSubscriptionInput) as resume_subscription,
        global "RENEW_EXPIRING_SUBSCRIPTION" => RenewExpiringSubscription(RenewExpiringSubscriptionInput) as renew_expiring_subscription,
        global "UPDATE_BILLING_PROJECTION" => UpdateBillingProjection(UpdateBillingProjectionInput) as update_billing_projection,
        global "SET_RENEWAL_DATE" => SetRenewalDate(SetRenewalDateInput) as set_renewal_date,

        global "ADD_SERVICE" => AddService(AddServiceInput) as add_service,
        global "UPDATE_SERVICE_INFO" => UpdateServiceInfo(UpdateServiceInfoInput) as update_service_info,
        global "REMOVE_SERVICE" => RemoveService(RemoveServiceInput) as remove_service,
        global "ADD_SERVICE_METRIC" => AddServiceMetric(AddServiceMetricInput) as add_service_metric,
        global "UPDATE_METRIC" => UpdateMetric(UpdateMetricInput) as update_metric,
        global "REMOVE_SERVICE_METRIC" => RemoveServiceMetric(RemoveServiceMetricInput) as remove_service_metric,
        global "INCREMENT_METRIC_USAGE" => IncrementMetricUsage(IncrementMetricUsageInput) as increment_metric_usage,
        global "DECREMENT_METRIC_USAGE" => DecrementMetricUsage(DecrementMetricUsageInput) as decrement_metric_usage,
        global "RESET_METRIC_USAGE" => ResetMetricUsage(ResetMetricUsageInput) as reset_metric_usage,
    }
}
