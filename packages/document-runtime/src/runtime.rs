//! The document runtime: creates documents and applies operations.
//!
//! # The Contract
//!
//! 1. **Copy before reduce.** The reducer runs against a clone of the state.
//!    The clone replaces the document state only if the reducer returns `Ok`.
//!
//! 2. **Append after success.** A successful operation is appended to its
//!    scope's log with index = current revision of that scope, then the
//!    revision advances by one.
//!
//! 3. **Rejections leave no trace.** A rejected operation changes neither
//!    state, header nor log, and consumes no index.
//!
//! # What This Does NOT Do
//!
//! - No persistence. Serialize the [`Document`] if you need it to survive.
//! - No concurrency control. A document is owned by one dispatcher at a time.
//! - No id generation for entities. Inputs carry caller-supplied ids.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::RuntimeConfig;
use crate::core::{
    Action, Document, DocumentHeader, DocumentState, OperationLog, OperationRecord, Revision,
    Scope,
};
use crate::error::{DocumentError, OperationError};
use crate::hash::state_hash;
use crate::model::DocumentModel;

/// Applies operations to documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRuntime {
    config: RuntimeConfig,
}

impl DocumentRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Create a document with the model's initial value.
    pub fn create_document<M: DocumentModel>(&self) -> Document<M> {
        self.create_document_with_state(M::initial_state())
    }

    /// Create a document starting from `state` instead of the initial value.
    pub fn create_document_with_state<M: DocumentModel>(
        &self,
        state: DocumentState<M::Global, M::Local>,
    ) -> Document<M> {
        let now = Utc::now();
        Document {
            header: DocumentHeader {
                id: Uuid::new_v4().to_string(),
                document_type: M::DOCUMENT_TYPE.to_string(),
                name: String::new(),
                created: now,
                last_modified: now,
                revision: Revision::NONE,
            },
            initial_state: state.clone(),
            state,
            operations: OperationLog::default(),
        }
    }

    /// Apply `action` to `document` in place, timestamped now.
    pub fn dispatch<'d, M: DocumentModel>(
        &self,
        document: &'d mut Document<M>,
        action: M::Action,
    ) -> Result<&'d OperationRecord<M::Action>, DocumentError<M::Error>> {
        self.dispatch_at(document, action, Utc::now())
    }

    /// Apply `action` to `document` in place with an explicit timestamp.
    ///
    /// On success returns the appended record. On failure the document is
    /// exactly as it was before the call.
    pub fn dispatch_at<'d, M: DocumentModel>(
        &self,
        document: &'d mut Document<M>,
        action: M::Action,
        timestamp: DateTime<Utc>,
    ) -> Result<&'d OperationRecord<M::Action>, DocumentError<M::Error>> {
        let scope = action.scope();
        let action_type = action.action_type();

        let mut draft = document.state.clone();
        if let Err(source) = M::reduce(&mut draft, &action) {
            warn!(
                document_type = M::DOCUMENT_TYPE,
                document_id = %document.header.id,
                action = action_type,
                code = source.code(),
                error = %source,
                "operation rejected"
            );
            return Err(DocumentError::Rejected {
                action_type,
                source,
            });
        }

        let hash = if self.config.hash_state {
            Some(scope_hash::<M>(&draft, scope)?)
        } else {
            None
        };

        let index = document.header.revision.get(scope);
        document.state = draft;
        document.header.revision.set(scope, index + 1);
        document.header.last_modified = timestamp;

        debug!(
            document_type = M::DOCUMENT_TYPE,
            document_id = %document.header.id,
            action = action_type,
            scope = %scope,
            index,
            "operation applied"
        );

        let log = document.operations.scope_mut(scope);
        log.push(OperationRecord {
            action,
            index,
            timestamp,
            hash,
        });
        Ok(&log[log.len() - 1])
    }

    /// Pure form of [`dispatch`](Self::dispatch): returns the next document.
    pub fn reduce<M: DocumentModel>(
        &self,
        document: &Document<M>,
        action: M::Action,
    ) -> Result<Document<M>, DocumentError<M::Error>> {
        let mut next = document.clone();
        self.dispatch(&mut next, action)?;
        Ok(next)
    }

    /// Rebuild a document from its header, initial state and operation log.
    ///
    /// Both scope logs must be contiguous from index 0. When hash
    /// verification is enabled, every recorded hash must match the
    /// recomputed one.
    pub fn replay<M: DocumentModel>(
        &self,
        header: DocumentHeader,
        initial_state: DocumentState<M::Global, M::Local>,
        operations: OperationLog<M::Action>,
    ) -> Result<Document<M>, DocumentError<M::Error>> {
        if header.document_type != M::DOCUMENT_TYPE {
            return Err(DocumentError::DocumentTypeMismatch {
                expected: M::DOCUMENT_TYPE,
                found: header.document_type,
            });
        }

        let mut state = initial_state.clone();
        let mut revision = Revision::NONE;
        for scope in Scope::ALL {
            let applied = self.replay_scope::<M>(&mut state, scope, operations.scope(scope))?;
            revision.set(scope, applied);
        }

        info!(
            document_type = M::DOCUMENT_TYPE,
            document_id = %header.id,
            operations = operations.len(),
            "document replayed"
        );

        Ok(Document {
            header: DocumentHeader { revision, ..header },
            state,
            initial_state,
            operations,
        })
    }

    /// Remove the last operation of `scope` and rebuild that scope's state.
    ///
    /// `lastModified` falls back to the newest remaining operation in either
    /// scope, or to `created` when none remain. Returns the removed record, or
    /// `None` if the scope has no operations.
    pub fn undo<M: DocumentModel>(
        &self,
        document: &mut Document<M>,
        scope: Scope,
    ) -> Result<Option<OperationRecord<M::Action>>, DocumentError<M::Error>> {
        let log = document.operations.scope(scope);
        let Some(last) = log.last() else {
            return Ok(None);
        };
        let remaining = &log[..log.len() - 1];

        // Rebuild into a scratch state so a failing replay leaves the document intact.
        let mut rebuilt = document.initial_state.clone();
        self.replay_scope::<M>(&mut rebuilt, scope, remaining)?;
        let undone_type = last.action.action_type();

        match scope {
            Scope::Global => document.state.global = rebuilt.global,
            Scope::Local => document.state.local = rebuilt.local,
        }
        let removed = document.operations.scope_mut(scope).pop();
        let revision = document.operations.scope(scope).len() as u64;
        document.header.revision.set(scope, revision);
        document.header.last_modified = latest_timestamp(&document.operations)
            .unwrap_or(document.header.created);

        info!(
            document_type = M::DOCUMENT_TYPE,
            document_id = %document.header.id,
            scope = %scope,
            action = undone_type,
            revision,
            "operation undone"
        );
        Ok(removed)
    }

    /// Hash of the current state of `scope`.
    pub fn state_hash<M: DocumentModel>(
        &self,
        document: &Document<M>,
        scope: Scope,
    ) -> Result<String, DocumentError<M::Error>> {
        scope_hash::<M>(&document.state, scope)
    }

    fn replay_scope<M: DocumentModel>(
        &self,
        state: &mut DocumentState<M::Global, M::Local>,
        scope: Scope,
        records: &[OperationRecord<M::Action>],
    ) -> Result<u64, DocumentError<M::Error>> {
        let mut expected = 0u64;
        for record in records {
            if record.index != expected {
                return Err(DocumentError::IndexGap {
                    scope,
                    expected,
                    found: record.index,
                });
            }

            M::reduce(state, &record.action).map_err(|source| DocumentError::Rejected {
                action_type: record.action.action_type(),
                source,
            })?;

            if self.config.verify_hashes_on_replay {
                if let Some(recorded) = &record.hash {
                    let computed = scope_hash::<M>(state, scope)?;
                    if &computed != recorded {
                        return Err(DocumentError::HashMismatch {
                            scope,
                            index: record.index,
                            recorded: recorded.clone(),
                            computed,
                        });
                    }
                }
            }
            expected += 1;
        }
        Ok(expected)
    }
}

fn scope_hash<M: DocumentModel>(
    state: &DocumentState<M::Global, M::Local>,
    scope: Scope,
) -> Result<String, DocumentError<M::Error>> {
    let hash = match scope {
        Scope::Global => state_hash(&state.global)?,
        Scope::Local => state_hash(&state.local)?,
    };
    Ok(hash)
}

fn latest_timestamp<A>(operations: &OperationLog<A>) -> Option<DateTime<Utc>> {
    Scope::ALL
        .iter()
        .filter_map(|scope| operations.scope(*scope).last())
        .map(|record| record.timestamp)
        .max()
}

/// Create a document with the default runtime.
pub fn create_document<M: DocumentModel>() -> Document<M> {
    DocumentRuntime::default().create_document()
}

/// Apply `action` to `document` with the default runtime, returning the next document.
pub fn reducer<M: DocumentModel>(
    document: &Document<M>,
    action: M::Action,
) -> Result<Document<M>, DocumentError<M::Error>> {
    DocumentRuntime::default().reduce(document, action)
}
