//! Testing utilities for document models.
//!
//! # Feature Flag
//!
//! This module is only available with the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! document-runtime = { path = "../document-runtime", features = ["testing"] }
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use document_runtime::testing::DocumentTest;
//!
//! DocumentTest::<ServiceOffering>::new()
//!     .given(ServiceOfferingAction::add_service(add_hosting()))
//!     .expect_ok()
//!     .then(ServiceOfferingAction::add_service(add_hosting()))
//!     .expect_code("DUPLICATE_SERVICE_ID")
//!     .expect_unchanged()
//!     .assert_state(|s| s.services.len() == 1);
//! ```

use chrono::{DateTime, TimeZone, Utc};

use crate::core::{Document, DocumentState};
use crate::error::{DocumentError, OperationError};
use crate::model::DocumentModel;
use crate::runtime::DocumentRuntime;

/// Asserts a sequence of actions against a document.
///
/// Each line pairs an action with `ok` or the expected error code.
///
/// ```ignore
/// assert_operations!(
///     doc,
///     SubscriptionInstanceAction::pause_subscription(pause()) => "PAUSE_NOT_ACTIVE",
///     SubscriptionInstanceAction::activate_subscription(activate()) => ok,
/// );
/// ```
#[macro_export]
macro_rules! assert_operations {
    (@expect $doc:expr, $action:expr, ok) => {{
        let result = $crate::DocumentRuntime::default().dispatch(&mut $doc, $action);
        assert!(result.is_ok(), "expected operation to apply, got {:?}", result.err());
    }};
    (@expect $doc:expr, $action:expr, $code:literal) => {{
        let result = $crate::DocumentRuntime::default().dispatch(&mut $doc, $action);
        match result {
            Ok(record) => panic!(
                "expected {} but operation applied at index {}",
                $code, record.index
            ),
            Err(err) => assert_eq!(err.code(), Some($code), "unexpected error: {}", err),
        }
    }};
    ($doc:expr, $($action:expr => $expected:tt),+ $(,)?) => {
        $(
            $crate::assert_operations!(@expect $doc, $action, $expected);
        )+
    };
}

pub use crate::assert_operations;

/// Fixed timestamp for deterministic tests: `2024-01-01T00:00:00Z` plus `day - 1` days.
pub fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
        + chrono::Duration::days(i64::from(day.saturating_sub(1)))
}

/// Fluent test builder for document operations.
///
/// Keeps the state before the last dispatch so tests can assert that a
/// rejected operation left the document untouched.
pub struct DocumentTest<M: DocumentModel> {
    runtime: DocumentRuntime,
    document: Document<M>,
    before: DocumentState<M::Global, M::Local>,
    last: Option<Result<(), DocumentError<M::Error>>>,
}

impl<M: DocumentModel> Default for DocumentTest<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: DocumentModel> DocumentTest<M> {
    /// Start from the model's initial value.
    pub fn new() -> Self {
        let runtime = DocumentRuntime::default();
        Self::from_document(runtime, runtime.create_document())
    }

    /// Start from an existing document.
    pub fn from_document(runtime: DocumentRuntime, document: Document<M>) -> Self {
        Self {
            runtime,
            before: document.state.clone(),
            document,
            last: None,
        }
    }

    /// Dispatch the first action.
    pub fn given(self, action: M::Action) -> Self {
        self.then(action)
    }

    /// Dispatch a subsequent action.
    pub fn then(mut self, action: M::Action) -> Self {
        self.before = self.document.state.clone();
        let result = self
            .runtime
            .dispatch(&mut self.document, action)
            .map(|_| ());
        self.last = Some(result);
        self
    }

    /// Assert the last action applied.
    pub fn expect_ok(self) -> Self {
        match &self.last {
            Some(Ok(())) => {}
            Some(Err(err)) => panic!("Expected operation to apply, got error: {}", err),
            None => panic!("No action dispatched"),
        }
        self
    }

    /// Assert the last action was rejected with an error matching `predicate`.
    pub fn expect_err<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&M::Error) -> bool,
    {
        match &self.last {
            Some(Err(DocumentError::Rejected { source, .. })) => {
                assert!(predicate(source), "Error predicate failed for {:?}", source)
            }
            Some(Err(other)) => panic!("Expected rejection, got runtime error: {}", other),
            Some(Ok(())) => panic!("Expected rejection, operation applied"),
            None => panic!("No action dispatched"),
        }
        self
    }

    /// Assert the last action was rejected with `code`.
    pub fn expect_code(self, code: &str) -> Self {
        self.expect_err(|err| {
            assert_eq!(err.code(), code, "Unexpected error: {}", err);
            true
        })
    }

    /// Assert the last action left the state deep-equal to before.
    pub fn expect_unchanged(self) -> Self {
        assert_eq!(
            self.document.state, self.before,
            "State changed by last action"
        );
        self
    }

    /// Assert the global state matches a predicate.
    pub fn assert_state<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&M::Global) -> bool,
    {
        assert!(
            predicate(&self.document.state.global),
            "State predicate failed for {:#?}",
            self.document.state.global
        );
        self
    }

    /// Assert the local state matches a predicate.
    pub fn assert_local<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&M::Local) -> bool,
    {
        assert!(
            predicate(&self.document.state.local),
            "Local state predicate failed for {:#?}",
            self.document.state.local
        );
        self
    }

    /// Borrow the document under test.
    pub fn document(&self) -> &Document<M> {
        &self.document
    }

    /// Finish and return the document.
    pub fn into_document(self) -> Document<M> {
        self.document
    }
}
