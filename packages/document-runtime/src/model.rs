//! The document model trait.
//!
//! A document model ties together everything one document type declares:
//! its state shape, its closed set of actions, its error taxonomy, its
//! initial value and the reducer that applies one action to a state draft.
//!
//! # Key Properties
//!
//! - **Reducers are pure**: no IO, no clock, no id generation
//! - **Checks before writes**: every existence/precondition check runs before
//!   the first mutation, so an `Err` never leaves a half-applied draft
//! - **Closed action set**: `reduce` matches exhaustively on the action enum
//! - **One call per dispatch**: no retries, no re-entrancy

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{Action, DocumentState};
use crate::error::OperationError;

/// Bounds shared by every scope state.
pub trait ScopeState:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> ScopeState for T where
    T: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// A document type: state, operations and the reducer that connects them.
///
/// Implementors are usually unit structs used only at the type level:
///
/// ```ignore
/// pub struct Counter;
///
/// impl DocumentModel for Counter {
///     const DOCUMENT_TYPE: &'static str = "example/counter";
///     type Global = CounterState;
///     type Local = EmptyState;
///     type Action = CounterAction;
///     type Error = CounterError;
///
///     fn initial_state() -> DocumentState<CounterState, EmptyState> {
///         DocumentState::default()
///     }
///
///     fn reduce(
///         state: &mut DocumentState<CounterState, EmptyState>,
///         action: &CounterAction,
///     ) -> Result<(), CounterError> {
///         match action {
///             CounterAction::Increment(input) => {
///                 state.global.value += input.by;
///                 Ok(())
///             }
///         }
///     }
/// }
/// ```
pub trait DocumentModel: Sized + Send + Sync + 'static {
    /// Stable document type identifier, e.g. `"powerhouse/service-offering"`.
    const DOCUMENT_TYPE: &'static str;

    /// State shared between participants.
    type Global: ScopeState;

    /// Installation-local state.
    type Local: ScopeState;

    /// The closed set of operations.
    type Action: Action;

    /// Errors any operation of this document type may produce.
    type Error: OperationError;

    /// The fixed initial value of a new document.
    fn initial_state() -> DocumentState<Self::Global, Self::Local>;

    /// Apply one action to a state draft.
    ///
    /// Called synchronously, exactly once per dispatched action. On `Err`
    /// the runtime discards the draft, so the operation is all-or-nothing.
    fn reduce(
        state: &mut DocumentState<Self::Global, Self::Local>,
        action: &Self::Action,
    ) -> Result<(), Self::Error>;
}
