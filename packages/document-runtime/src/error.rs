//! Structured error types for operation application.
//!
//! Two layers:
//! - Each document type declares its own error enum, one variant per
//!   (operation, failure condition). These implement [`OperationError`] so
//!   callers can match on the exact kind or on its [`ErrorCategory`].
//! - [`DocumentError`] wraps them with the failures the runtime itself can
//!   detect (broken logs, hash mismatches, wrong document type).
//!
//! [`Rejection`] is the flattened, serializable form handed to UI layers.
//!
//! # Example
//!
//! ```ignore
//! match runtime.dispatch(&mut doc, action) {
//!     Ok(record) => tracing::info!(index = record.index, "applied"),
//!     Err(DocumentError::Rejected { source, .. }) => match source {
//!         ServiceOfferingError::DuplicateServiceId { id } => { /* ask for a new id */ }
//!         other => tracing::warn!(code = other.code(), "rejected"),
//!     },
//!     Err(other) => return Err(other.into()),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Scope;

/// Coarse classification of an operation failure.
///
/// Lets callers decide between "fix the input", "refresh and retry" and
/// "give up" without knowing every error kind of every document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// A referenced parent or target entity does not exist.
    NotFound,
    /// An entity with the supplied id (or unique key) already exists.
    Duplicate,
    /// The document is not in the state the operation requires.
    InvalidState,
    /// A compare-and-swap guard failed: the caller acted on a stale read.
    Conflict,
    /// The input is well-formed but violates a business rule.
    Validation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::NotFound => write!(f, "not_found"),
            ErrorCategory::Duplicate => write!(f, "duplicate"),
            ErrorCategory::InvalidState => write!(f, "invalid_state"),
            ErrorCategory::Conflict => write!(f, "conflict"),
            ErrorCategory::Validation => write!(f, "validation_error"),
        }
    }
}

/// Trait for the per-document error enums produced by reducers.
///
/// `Display` is the human description; `code` is the stable machine name.
///
/// ```ignore
/// impl OperationError for FacetError {
///     fn code(&self) -> &'static str {
///         match self {
///             FacetError::DuplicateOptionId { .. } => "DUPLICATE_OPTION_ID",
///         }
///     }
///
///     fn category(&self) -> ErrorCategory {
///         match self {
///             FacetError::DuplicateOptionId { .. } => ErrorCategory::Duplicate,
///         }
///     }
/// }
/// ```
pub trait OperationError: std::error::Error + Send + Sync + 'static {
    /// Stable SCREAMING_SNAKE_CASE code, e.g. `ADD_PRICING_OPTION_TIER_NOT_FOUND`.
    fn code(&self) -> &'static str;

    /// Category of the failure.
    fn category(&self) -> ErrorCategory;
}

/// Errors from the document runtime.
#[derive(Debug, Error)]
pub enum DocumentError<E: OperationError> {
    /// The reducer refused the operation. Nothing was applied.
    #[error("operation {action_type} rejected: {source}")]
    Rejected {
        action_type: &'static str,
        #[source]
        source: E,
    },

    /// A replayed log does not start at 0 or skips an index.
    #[error("operation log for scope {scope} expected index {expected}, found {found}")]
    IndexGap { scope: Scope, expected: u64, found: u64 },

    /// A replayed operation produced a different state than the one recorded.
    #[error("state hash mismatch in scope {scope} at index {index}: recorded {recorded}, computed {computed}")]
    HashMismatch {
        scope: Scope,
        index: u64,
        recorded: String,
        computed: String,
    },

    /// The header names a different document type than the model.
    #[error("document type mismatch: expected {expected}, found {found}")]
    DocumentTypeMismatch { expected: &'static str, found: String },

    /// State could not be serialized for hashing.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl<E: OperationError> DocumentError<E> {
    /// The reducer error, if the operation was rejected.
    pub fn rejection(&self) -> Option<&E> {
        match self {
            DocumentError::Rejected { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Stable code of the reducer error, if any.
    pub fn code(&self) -> Option<&'static str> {
        self.rejection().map(OperationError::code)
    }
}

/// A rejected operation, flattened for display and transport.
///
/// Carries everything a caller needs to render a specific message and to
/// tell error kinds apart programmatically, without the concrete error type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub document_type: String,
    pub action_type: String,
    pub code: String,
    pub category: ErrorCategory,
    pub message: String,
}

impl Rejection {
    /// Build a rejection from a reducer error.
    pub fn new<E: OperationError>(
        document_type: &'static str,
        action_type: &'static str,
        error: &E,
    ) -> Self {
        Self {
            document_type: document_type.to_string(),
            action_type: action_type.to_string(),
            code: error.code().to_string(),
            category: error.category(),
            message: error.to_string(),
        }
    }

    /// Build a rejection from a runtime error, if it is one.
    pub fn from_error<E: OperationError>(
        document_type: &'static str,
        error: &DocumentError<E>,
    ) -> Option<Self> {
        match error {
            DocumentError::Rejected {
                action_type,
                source,
            } => Some(Self::new(document_type, *action_type, source)),
            _ => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} rejected ({}): {}",
            self.document_type, self.action_type, self.code, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    enum GaugeError {
        #[error("gauge {0} not found")]
        NotFound(String),
    }

    impl OperationError for GaugeError {
        fn code(&self) -> &'static str {
            "GAUGE_NOT_FOUND"
        }

        fn category(&self) -> ErrorCategory {
            ErrorCategory::NotFound
        }
    }

    #[test]
    fn rejected_error_exposes_code_and_source() {
        let err: DocumentError<GaugeError> = DocumentError::Rejected {
            action_type: "TOUCH_GAUGE",
            source: GaugeError::NotFound("p-1".into()),
        };

        assert_eq!(err.code(), Some("GAUGE_NOT_FOUND"));
        assert_eq!(
            err.to_string(),
            "operation TOUCH_GAUGE rejected: gauge p-1 not found"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn runtime_errors_have_no_code() {
        let err: DocumentError<GaugeError> = DocumentError::IndexGap {
            scope: Scope::Global,
            expected: 2,
            found: 4,
        };
        assert_eq!(err.code(), None);
        assert!(err.rejection().is_none());
    }

    #[test]
    fn rejection_flattens_reducer_error() {
        let err: DocumentError<GaugeError> = DocumentError::Rejected {
            action_type: "TOUCH_GAUGE",
            source: GaugeError::NotFound("p-1".into()),
        };

        let rejection = Rejection::from_error("example/gauge", &err).unwrap();
        assert_eq!(rejection.code, "GAUGE_NOT_FOUND");
        assert_eq!(rejection.category, ErrorCategory::NotFound);
        assert_eq!(rejection.message, "gauge p-1 not found");

        let json = serde_json::to_value(&rejection).unwrap();
        assert_eq!(json["actionType"], "TOUCH_GAUGE");
        assert_eq!(json["category"], "NOT_FOUND");
    }
}
