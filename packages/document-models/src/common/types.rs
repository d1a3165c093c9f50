//! Scalar aliases and enums shared by several document types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cross-document reference: the id of another document.
pub type Phid = String;

/// ISO 4217 currency code, e.g. `"USD"`.
pub type Currency = String;

pub type EmailAddress = String;

/// Money amount. Serialized as a decimal string.
pub type Amount = Decimal;

/// ISO-8601 timestamp.
pub type Timestamp = DateTime<Utc>;

/// Publication lifecycle of offerings and templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicationStatus {
    #[default]
    Draft,
    ComingSoon,
    Active,
    Deprecated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
    OneTime,
}

/// How often a usage counter starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResetPeriod {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

/// Remove duplicates, keeping the first occurrence of each value.
pub fn dedupe<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}
