//! Facet domain - a named category with ordered options, referenced by
//! offerings and templates for targeting.

pub mod actions;
pub mod errors;
pub mod models;
mod reducers;

pub use actions::*;
pub use errors::FacetError;
pub use models::*;

use document_runtime::{DocumentModel, DocumentState, EmptyState};

/// The `powerhouse/facet` document type.
pub struct Facet;

impl DocumentModel for Facet {
    const DOCUMENT_TYPE: &'static str = "powerhouse/facet";
    type Global = FacetState;
    type Local = EmptyState;
    type Action = FacetAction;
    type Error = FacetError;

    fn initial_state() -> DocumentState<FacetState, EmptyState> {
        DocumentState::default()
    }

    fn reduce(
        state: &mut DocumentState<FacetState, EmptyState>,
        action: &FacetAction,
    ) -> Result<(), FacetError> {
        reducers::reduce(&mut state.global, action)
    }
}
