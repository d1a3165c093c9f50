use document_runtime::{ErrorCategory, OperationError};
use thiserror::Error;

use super::models::{MetricId, SubscriptionServiceId, SubscriptionStatus};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubscriptionInstanceError {
    #[error("subscription is already initialized")]
    AlreadyInitialized,

    #[error("service {id} already exists")]
    DuplicateServiceId { id: SubscriptionServiceId },

    #[error("metric {id} already exists on service {service_id}")]
    DuplicateMetricId {
        service_id: SubscriptionServiceId,
        id: MetricId,
    },

    #[error("cannot activate: subscription is {status:?}, expected PENDING")]
    ActivateNotPending { status: SubscriptionStatus },

    #[error("cannot pause: subscription is {status:?}, expected ACTIVE")]
    PauseNotActive { status: SubscriptionStatus },

    #[error("cannot set expiring: subscription is {status:?}, expected ACTIVE")]
    SetExpiringNotActive { status: SubscriptionStatus },

    #[error("subscription is already cancelled")]
    CancelAlreadyCancelled,

    #[error("cannot resume: subscription is {status:?}, expected PAUSED")]
    ResumeNotPaused { status: SubscriptionStatus },

    #[error("cannot renew: subscription is {status:?}, expected EXPIRING")]
    RenewNotExpiring { status: SubscriptionStatus },

    #[error("cannot remove service: {id} not found")]
    RemoveServiceNotFound { id: SubscriptionServiceId },

    #[error("cannot add metric: service {service_id} not found")]
    AddMetricServiceNotFound { service_id: SubscriptionServiceId },

    #[error("cannot update metric: service {service_id} not found")]
    UpdateMetricServiceNotFound { service_id: SubscriptionServiceId },

    #[error("cannot update metric: {id} not found on service {service_id}")]
    UpdateMetricNotFound {
        service_id: SubscriptionServiceId,
        id: MetricId,
    },

    #[error("cannot remove metric: service {service_id} not found")]
    RemoveMetricServiceNotFound { service_id: SubscriptionServiceId },

    #[error("cannot increment usage: service {service_id} not found")]
    IncrementUsageServiceNotFound { service_id: SubscriptionServiceId },

    #[error("cannot increment usage: metric {id} not found on service {service_id}")]
    IncrementUsageMetricNotFound {
        service_id: SubscriptionServiceId,
        id: MetricId,
    },
}

pub type Result<T> = std::result::Result<T, SubscriptionInstanceError>;

impl OperationError for SubscriptionInstanceError {
    fn code(&self) -> &'static str {
        use SubscriptionInstanceError::*;
        match self {
            AlreadyInitialized => "ALREADY_INITIALIZED",
            DuplicateServiceId { .. } => "DUPLICATE_SERVICE_ID",
            DuplicateMetricId { .. } => "DUPLICATE_METRIC_ID",
            ActivateNotPending { .. } => "ACTIVATE_NOT_PENDING",
            PauseNotActive { .. } => "PAUSE_NOT_ACTIVE",
            SetExpiringNotActive { .. } => "SET_EXPIRING_NOT_ACTIVE",
            CancelAlreadyCancelled => "CANCEL_ALREADY_CANCELLED",
            ResumeNotPaused { .. } => "RESUME_NOT_PAUSED",
            RenewNotExpiring { .. } => "RENEW_NOT_EXPIRING",
            RemoveServiceNotFound { .. } => "REMOVE_SERVICE_NOT_FOUND",
            AddMetricServiceNotFound { .. } => "ADD_METRIC_SERVICE_NOT_FOUND",
            UpdateMetricServiceNotFound { .. } => "UPDATE_METRIC_SERVICE_NOT_FOUND",
            UpdateMetricNotFound { .. } => "UPDATE_METRIC_NOT_FOUND",
            RemoveMetricServiceNotFound { .. } => "REMOVE_METRIC_SERVICE_NOT_FOUND",
            IncrementUsageServiceNotFound { .. } => "INCREMENT_USAGE_SERVICE_NOT_FOUND",
            IncrementUsageMetricNotFound { .. } => "INCREMENT_USAGE_METRIC_NOT_FOUND",
        }
    }

    fn category(&self) -> ErrorCategory {
        use SubscriptionInstanceError::*;
        match self {
            DuplicateServiceId { .. } | DuplicateMetricId { .. } => ErrorCategory::Duplicate,
            AlreadyInitialized
            | ActivateNotPending { .. }
            | PauseNotActive { .. }
            | SetExpiringNotActive { .. }
            | CancelAlreadyCancelled
            | ResumeNotPaused { .. }
            | RenewNotExpiring { .. } => ErrorCategory::InvalidState,
            RemoveServiceNotFound { .. }
            | AddMetricServiceNotFound { .. }
            | UpdateMetricServiceNotFound { .. }
            | UpdateMetricNotFound { .. }
            | RemoveMetricServiceNotFound { .. }
            | IncrementUsageServiceNotFound { .. }
            | IncrementUsageMetricNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
