//! SubscriptionInstance domain - a customer's live subscription: lifecycle
//! status, billing projection, subscribed services and metered usage.

pub mod actions;
pub mod errors;
pub mod models;
mod reducers;

pub use actions::*;
pub use errors::SubscriptionInstanceError;
pub use models::*;

use document_runtime::{DocumentModel, DocumentState, EmptyState};

/// The `powerhouse/subscription-instance` document type.
pub struct SubscriptionInstance;

impl DocumentModel for SubscriptionInstance {
    const DOCUMENT_TYPE: &'static str = "powerhouse/subscription-instance";
    type Global = SubscriptionInstanceState;
    type Local = EmptyState;
    type Action = SubscriptionInstanceAction;
    type Error = SubscriptionInstanceError;

    fn initial_state() -> DocumentState<SubscriptionInstanceState, EmptyState> {
        DocumentState::default()
    }

    fn reduce(
        state: &mut DocumentState<SubscriptionInstanceState, EmptyState>,
        action: &SubscriptionInstanceAction,
    ) -> Result<(), SubscriptionInstanceError> {
        reducers::reduce(&mut state.global, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_runtime::testing::{day, DocumentTest};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn service(id: &str, metrics: &[&str]) -> SubscriptionService {
        SubscriptionService {
            id: id.into(),
            name: id.to_uppercase(),
            description: None,
            custom_value: None,
            setup_cost: None,
            recurring_cost: Some(Decimal::new(25, 0)),
            metrics: metrics
                .iter()
                .map(|m| ServiceMetric {
                    id: (*m).into(),
                    name: m.to_string(),
                    unit_name: "calls".into(),
                    limit: Some(100),
                    current_usage: 0,
                    usage_reset_period: None,
                    next_usage_reset: None,
                })
                .collect(),
        }
    }

    fn initialize(services: Vec<SubscriptionService>) -> SubscriptionInstanceAction {
        SubscriptionInstanceAction::initialize_subscription(InitializeSubscriptionInput {
            customer_id: "customer-1".into(),
            customer_name: Some("Ada".into()),
            customer_email: None,
            service_offering_id: "offering-1".into(),
            resource_template_id: Some("template-1".into()),
            tier_name: Some("Basic".into()),
            tier_pricing_option_id: Some("monthly".into()),
            created_at: day(1),
            billing_cycle: None,
            projected_bill_amount: Some(Decimal::new(25, 0)),
            currency: Some("USD".into()),
            services,
        })
    }

    fn increment(service: &str, metric: &str, amount: u64) -> SubscriptionInstanceAction {
        SubscriptionInstanceAction::increment_metric_usage(IncrementMetricUsageInput {
            service_id: service.into(),
            metric_id: metric.into(),
            amount,
        })
    }

    fn decrement(service: &str, metric: &str, amount: u64) -> SubscriptionInstanceAction {
        SubscriptionInstanceAction::decrement_metric_usage(DecrementMetricUsageInput {
            service_id: service.into(),
            metric_id: metric.into(),
            amount,
        })
    }

    fn usage(state: &SubscriptionInstanceState) -> u64 {
        state.services[0].metrics[0].current_usage
    }

    #[test]
    fn initial_state_is_pending_and_empty() {
        let value = serde_json::to_value(SubscriptionInstance::initial_state().global).unwrap();
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["services"], json!([]));
        assert_eq!(value["customerId"], json!(null));
        assert_eq!(value["renewalDate"], json!(null));
    }

    #[test]
    fn initialize_copies_snapshot_once() {
        DocumentTest::<SubscriptionInstance>::new()
            .given(initialize(vec![service("hosting", &["requests"])]))
            .expect_ok()
            .assert_state(|s| {
                s.status == SubscriptionStatus::Pending
                    && s.service_offering_id.as_deref() == Some("offering-1")
                    && s.created_at == Some(day(1))
                    && s.services.len() == 1
            })
            .then(initialize(Vec::new()))
            .expect_code("ALREADY_INITIALIZED")
            .expect_unchanged();
    }

    #[test]
    fn initialize_rejects_duplicate_services() {
        DocumentTest::<SubscriptionInstance>::new()
            .given(initialize(vec![service("a", &[]), service("a", &[])]))
            .expect_code("DUPLICATE_SERVICE_ID")
            .expect_unchanged()
            .assert_state(|s| !s.is_initialized());
    }

    #[test]
    fn usage_saturates_and_floors_at_zero() {
        DocumentTest::<SubscriptionInstance>::new()
            .given(initialize(vec![service("hosting", &["requests"])]))
            .then(increment("hosting", "requests", 40))
            .then(decrement("hosting", "requests", 15))
            .expect_ok()
            .assert_state(|s| usage(s) == 25)
            .then(decrement("hosting", "requests", 100))
            .assert_state(|s| usage(s) == 0)
            .then(increment("hosting", "requests", u64::MAX))
            .then(increment("hosting", "requests", 10))
            .expect_ok()
            .assert_state(|s| usage(s) == u64::MAX);
    }

    #[test]
    fn increment_requires_service_and_metric() {
        DocumentTest::<SubscriptionInstance>::new()
            .given(initialize(vec![service("hosting", &["requests"])]))
            .then(increment("mail", "requests", 1))
            .expect_code("INCREMENT_USAGE_SERVICE_NOT_FOUND")
            .then(increment("hosting", "storage", 1))
            .expect_code("INCREMENT_USAGE_METRIC_NOT_FOUND")
            .expect_unchanged()
            .then(decrement("hosting", "storage", 1))
            .expect_ok()
            .expect_unchanged();
    }

    #[test]
    fn reset_usage_sets_next_reset() {
        DocumentTest::<SubscriptionInstance>::new()
            .given(initialize(vec![service("hosting", &["requests"])]))
            .then(increment("hosting", "requests", 7))
            .then(SubscriptionInstanceAction::reset_metric_usage(ResetMetricUsageInput {
                service_id: "hosting".into(),
                metric_id: "requests".into(),
                next_usage_reset: Some(day(31)),
            }))
            .expect_ok()
            .assert_state(|s| {
                usage(s) == 0 && s.services[0].metrics[0].next_usage_reset == Some(day(31))
            });
    }

    #[test]
    fn remove_service_throws_on_miss() {
        DocumentTest::<SubscriptionInstance>::new()
            .given(SubscriptionInstanceAction::remove_service(RemoveServiceInput {
                service_id: "ghost".into(),
            }))
            .expect_err(|e| {
                matches!(e, SubscriptionInstanceError::RemoveServiceNotFound { id } if id == "ghost")
            });
    }

    #[test]
    fn update_metric_throws_on_miss() {
        let update = |service: &str, metric: &str| {
            SubscriptionInstanceAction::update_metric(UpdateMetricInput {
                service_id: service.into(),
                metric_id: metric.into(),
                name: None,
                unit_name: Some("requests".into()),
                limit: Some(None),
                current_usage: None,
                usage_reset_period: None,
                next_usage_reset: None,
            })
        };

        DocumentTest::<SubscriptionInstance>::new()
            .given(initialize(vec![service("hosting", &["requests"])]))
            .then(update("mail", "requests"))
            .expect_code("UPDATE_METRIC_SERVICE_NOT_FOUND")
            .then(update("hosting", "storage"))
            .expect_code("UPDATE_METRIC_NOT_FOUND")
            .then(update("hosting", "requests"))
            .expect_ok()
            .assert_state(|s| {
                let metric = &s.services[0].metrics[0];
                metric.limit.is_none() && metric.unit_name == "requests"
            });
    }

    #[test]
    fn customer_info_is_tri_state() {
        let input: UpdateCustomerInfoInput =
            serde_json::from_value(json!({ "customerName": null, "customerEmail": "ada@example.com" }))
                .unwrap();

        DocumentTest::<SubscriptionInstance>::new()
            .given(initialize(Vec::new()))
            .then(SubscriptionInstanceAction::update_customer_info(input))
            .expect_ok()
            .assert_state(|s| {
                s.customer_name.is_none() && s.customer_email.as_deref() == Some("ada@example.com")
            });
    }
}
