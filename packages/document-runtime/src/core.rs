//! Core types for the document runtime.
//!
//! # Overview
//!
//! A document is a versioned state container split into two **scopes**:
//! - `global` = shared state every participant sees
//! - `local` = per-installation state that never leaves the machine
//!
//! Each scope has its own append-only operation log. The runtime is the only
//! writer of that log: reducers mutate state, the runtime assigns indices.
//!
//! # Indexing
//!
//! Operation indices are scope-local, start at 0 and increase by exactly one
//! per applied operation. A rejected operation never consumes an index.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::DocumentModel;

/// Partition of a document's state and operation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Shared state, synchronized between participants.
    Global,
    /// Installation-local state.
    Local,
}

impl Scope {
    /// Both scopes, in replay order.
    pub const ALL: [Scope; 2] = [Scope::Global, Scope::Local];

    /// Wire name of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Local => "local",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed request to mutate a document.
///
/// Actions form a closed set per document type. They are plain data: building
/// one performs no validation, all business rules live in the reducer.
///
/// Most implementations are generated by [`document_actions!`](crate::document_actions),
/// which serializes actions as `{ "type": "ADD_SERVICE", "input": { ... } }`.
pub trait Action:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The operation name, e.g. `"ADD_SERVICE"`. Unique within a document type.
    fn action_type(&self) -> &'static str;

    /// The scope this action applies to.
    fn scope(&self) -> Scope;
}

/// State of a document, split by scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentState<G, L> {
    pub global: G,
    pub local: L,
}

impl<G, L> DocumentState<G, L> {
    pub fn new(global: G, local: L) -> Self {
        Self { global, local }
    }
}

/// Local state for document types that keep nothing locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {}

/// One applied operation as recorded in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord<A> {
    pub action: A,
    /// Scope-local position, starting at 0.
    pub index: u64,
    pub timestamp: DateTime<Utc>,
    /// SHA-256 of the scope state after this operation, when hashing is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Append-only operation history, one sequence per scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationLog<A> {
    pub global: Vec<OperationRecord<A>>,
    pub local: Vec<OperationRecord<A>>,
}

impl<A> Default for OperationLog<A> {
    fn default() -> Self {
        Self {
            global: Vec::new(),
            local: Vec::new(),
        }
    }
}

impl<A> OperationLog<A> {
    /// Operations recorded for `scope`, in index order.
    pub fn scope(&self, scope: Scope) -> &[OperationRecord<A>] {
        match scope {
            Scope::Global => &self.global,
            Scope::Local => &self.local,
        }
    }

    pub(crate) fn scope_mut(&mut self, scope: Scope) -> &mut Vec<OperationRecord<A>> {
        match scope {
            Scope::Global => &mut self.global,
            Scope::Local => &mut self.local,
        }
    }

    /// Total number of operations across both scopes.
    pub fn len(&self) -> usize {
        self.global.len() + self.local.len()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.local.is_empty()
    }
}

/// Number of operations applied per scope.
///
/// A fresh document is at revision 0 in both scopes. The revision of a scope
/// is always the index the next operation in that scope will receive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Revision {
    pub global: u64,
    pub local: u64,
}

impl Revision {
    /// Revision of a document that has never been modified.
    pub const NONE: Revision = Revision { global: 0, local: 0 };

    pub fn get(&self, scope: Scope) -> u64 {
        match scope {
            Scope::Global => self.global,
            Scope::Local => self.local,
        }
    }

    pub(crate) fn set(&mut self, scope: Scope, value: u64) {
        match scope {
            Scope::Global => self.global = value,
            Scope::Local => self.local = value,
        }
    }

    /// Check if no operation has been applied in any scope.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "global:r{} local:r{}", self.global, self.local)
    }
}

/// Document metadata, maintained by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub id: String,
    pub document_type: String,
    pub name: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub revision: Revision,
}

/// A document: header, current state, initial state and operation history.
///
/// Only the runtime changes a document. Reducers see a draft of the state for
/// the duration of one operation and nothing else.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Document<M: DocumentModel> {
    pub header: DocumentHeader,
    pub state: DocumentState<M::Global, M::Local>,
    /// State the operation log is replayed from.
    pub initial_state: DocumentState<M::Global, M::Local>,
    pub operations: OperationLog<M::Action>,
}

impl<M: DocumentModel> Document<M> {
    /// Operations recorded for `scope`.
    pub fn operations_for(&self, scope: Scope) -> &[OperationRecord<M::Action>] {
        self.operations.scope(scope)
    }

    /// Number of operations applied in `scope`.
    pub fn revision(&self, scope: Scope) -> u64 {
        self.header.revision.get(scope)
    }

    /// Current global state.
    pub fn global(&self) -> &M::Global {
        &self.state.global
    }

    /// Current local state.
    pub fn local(&self) -> &M::Local {
        &self.state.local
    }
}

impl<M: DocumentModel> Clone for Document<M> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            state: self.state.clone(),
            initial_state: self.initial_state.clone(),
            operations: self.operations.clone(),
        }
    }
}

impl<M: DocumentModel> fmt::Debug for Document<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("header", &self.header)
            .field("state", &self.state)
            .field("operations", &self.operations.len())
            .finish()
    }
}
