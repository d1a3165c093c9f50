//! SubscriptionInstance state: one customer's subscription to an offering.
//!
//! Offering data is copied in at initialization and never resynchronized.

use serde::{Deserialize, Serialize};

use crate::common::{
    Amount, BillingCycle, Currency, EmailAddress, Oid, Phid, ResetPeriod, Timestamp,
};

pub type SubscriptionServiceId = Oid<SubscriptionService>;
pub type MetricId = Oid<ServiceMetric>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInstanceState {
    pub customer_id: Option<Phid>,
    pub customer_name: Option<String>,
    pub customer_email: Option<EmailAddress>,
    pub service_offering_id: Option<Phid>,
    pub resource_template_id: Option<Phid>,
    pub tier_name: Option<String>,
    pub tier_pricing_option_id: Option<String>,
    pub status: SubscriptionStatus,
    pub created_at: Option<Timestamp>,
    pub activated_since: Option<Timestamp>,
    pub paused_since: Option<Timestamp>,
    pub expiring_since: Option<Timestamp>,
    pub cancelled_since: Option<Timestamp>,
    pub cancellation_reason: Option<String>,
    pub renewal_date: Option<Timestamp>,
    pub billing_cycle: Option<BillingCycle>,
    pub projected_bill_amount: Option<Amount>,
    pub currency: Option<Currency>,
    pub services: Vec<SubscriptionService>,
}

impl SubscriptionInstanceState {
    /// Initialization stamps `createdAt`; nothing else does.
    pub fn is_initialized(&self) -> bool {
        self.created_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionService {
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
    #[serde(default)]
    pub metrics: Vec<ServiceMetric>,
}

/// A metered quantity of a subscribed service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetric {
    pub id: MetricId,
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

crate::impl_entity!(SubscriptionService, ServiceMetric);

/// Subscription lifecycle.
///
/// ```text
/// PENDING ──activate──► ACTIVE ──pause──► PAUSED
///                         ▲  │              │
///                         │  └─set_expiring─┼──► EXPIRING
///                         │                 │       │
///                         └──── resume ─────┘       │
///                         └──────── renew ──────────┘
///
/// any state except CANCELLED ──cancel──► CANCELLED (terminal)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    #[default]
    Pending,
    Active,
    Paused,
    Expiring,
    Cancelled,
}
