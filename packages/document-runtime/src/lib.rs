//! # Document Runtime
//!
//! The substrate document models are written against: typed actions,
//! per-scope operation logs, and all-or-nothing reducer application.
//!
//! ## Core Concepts
//!
//! - [`DocumentModel`] = one document type (state shape, actions, errors, reducer)
//! - [`Action`] = a named, typed request to mutate state (`{type, input}`)
//! - [`Document`] = header + state + append-only operation log
//! - [`DocumentRuntime`] = the only thing that ever changes a document
//!
//! ## Flow
//!
//! ```text
//! caller
//!     │ builds typed input, calls action creator
//!     ▼
//! Action ──► DocumentRuntime::dispatch(doc, action)
//!                 │
//!                 ├─► clone state draft
//!                 ├─► M::reduce(&mut draft, &action)
//!                 │        │
//!                 │        ├─ Err(e) ──► DocumentError::Rejected, doc untouched
//!                 │        │
//!                 │        └─ Ok ──► swap draft in
//!                 │
//!                 └─► append {action, index, timestamp, hash} to operations[scope]
//! ```
//!
//! ## Key Invariants
//!
//! 1. **Indices are scope-local and contiguous** - 0, 1, 2, ... per scope
//! 2. **Logs are append-only** - only `undo` removes, and only the tail
//! 3. **Reducers never see a half-applied state** - rejections are discarded
//! 4. **Reducers never generate ids** - inputs carry caller-supplied ids
//!
//! ## Example
//!
//! ```ignore
//! use document_runtime::{create_document, reducer};
//!
//! let doc = create_document::<ServiceOffering>();
//! let doc = reducer(&doc, ServiceOfferingAction::add_service(input))?;
//! assert_eq!(doc.state.global.services.len(), 1);
//! ```

// Core modules
mod actions;
mod core;
mod error;
mod hash;
mod model;
mod runtime;

pub mod config;
pub mod telemetry;

// Testing utilities (feature-gated)
#[cfg(feature = "testing")]
pub mod testing;

// Re-export core types
pub use crate::core::{
    Action, Document, DocumentHeader, DocumentState, EmptyState, OperationLog, OperationRecord,
    Revision, Scope,
};

// Re-export error types
pub use crate::error::{DocumentError, ErrorCategory, OperationError, Rejection};

// Re-export model types
pub use crate::model::{DocumentModel, ScopeState};

// Re-export runtime types
pub use crate::runtime::{create_document, reducer, DocumentRuntime};

pub use crate::config::RuntimeConfig;
pub use crate::hash::state_hash;
