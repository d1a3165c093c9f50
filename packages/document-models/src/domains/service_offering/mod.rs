//! ServiceOffering domain - an operator's sellable offering: services,
//! service groups, option groups, subscription tiers and facet targeting.
//!
//! # Architecture
//!
//! ```text
//! ServiceOfferingAction (36 operations)
//!     │
//!     ▼
//! reducers::reduce ──► offering | services | service_groups
//!                      option_groups | tiers | facet_targets
//! ```
//!
//! Every operation lives in the global scope. The local scope is empty.

pub mod actions;
pub mod errors;
pub mod models;
mod reducers;

pub use actions::*;
pub use errors::ServiceOfferingError;
pub use models::*;

use document_runtime::{DocumentModel, DocumentState, EmptyState};

/// The `powerhouse/service-offering` document type.
pub struct ServiceOffering;

impl DocumentModel for ServiceOffering {
    const DOCUMENT_TYPE: &'static str = "powerhouse/service-offering";
    type Global = ServiceOfferingState;
    type Local = EmptyState;
    type Action = ServiceOfferingAction;
    type Error = ServiceOfferingError;

    fn initial_state() -> DocumentState<ServiceOfferingState, EmptyState> {
        DocumentState::default()
    }

    fn reduce(
        state: &mut DocumentState<ServiceOfferingState, EmptyState>,
        action: &ServiceOfferingAction,
    ) -> Result<(), ServiceOfferingError> {
        reducers::reduce(&mut state.global, action)
    }
}
