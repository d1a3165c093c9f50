use document_runtime::{ErrorCategory, OperationError};
use thiserror::Error;

use super::models::WorkItemId;

pub type Result<T> = std::result::Result<T, WorkBreakdownError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkBreakdownError {
    #[error("work item {id} already exists")]
    DuplicateWorkItemId { id: WorkItemId },

    #[error("cannot add work item: parent {parent_id} not found")]
    AddWorkItemParentNotFound { parent_id: WorkItemId },

    #[error("cannot update work item: {id} not found")]
    UpdateWorkItemNotFound { id: WorkItemId },

    #[error("cannot set status: work item {id} not found")]
    SetStatusWorkItemNotFound { id: WorkItemId },

    #[error("work item {id} cannot be done while {blocked_by} is unfinished")]
    DependenciesIncomplete {
        id: WorkItemId,
        blocked_by: WorkItemId,
    },

    #[error("cannot move work item: {id} not found")]
    MoveWorkItemNotFound { id: WorkItemId },

    #[error("cannot move work item: parent {parent_id} not found")]
    MoveWorkItemParentNotFound { parent_id: WorkItemId },

    #[error("cannot move {id} under {parent_id}: it would become its own ancestor")]
    MoveWorkItemCycle {
        id: WorkItemId,
        parent_id: WorkItemId,
    },

    #[error("cannot add dependency: work item {id} not found")]
    AddDependencyItemNotFound { id: WorkItemId },

    #[error("cannot add dependency: target {id} not found")]
    AddDependencyTargetNotFound { id: WorkItemId },

    #[error("{id} cannot depend on {depends_on_id}: it already depends on {id}")]
    AddDependencyCycle {
        id: WorkItemId,
        depends_on_id: WorkItemId,
    },

    #[error("work item {id} cannot depend on itself")]
    SelfDependency { id: WorkItemId },
}

impl OperationError for WorkBreakdownError {
    fn code(&self) -> &'static str {
        use WorkBreakdownError::*;
        match self {
            DuplicateWorkItemId { .. } => "DUPLICATE_WORK_ITEM_ID",
            AddWorkItemParentNotFound { .. } => "ADD_WORK_ITEM_PARENT_NOT_FOUND",
            UpdateWorkItemNotFound { .. } => "UPDATE_WORK_ITEM_NOT_FOUND",
            SetStatusWorkItemNotFound { .. } => "SET_STATUS_WORK_ITEM_NOT_FOUND",
            DependenciesIncomplete { .. } => "DEPENDENCIES_INCOMPLETE",
            MoveWorkItemNotFound { .. } => "MOVE_WORK_ITEM_NOT_FOUND",
            MoveWorkItemParentNotFound { .. } => "MOVE_WORK_ITEM_PARENT_NOT_FOUND",
            MoveWorkItemCycle { .. } => "MOVE_WORK_ITEM_CYCLE",
            AddDependencyItemNotFound { .. } => "ADD_DEPENDENCY_ITEM_NOT_FOUND",
            AddDependencyTargetNotFound { .. } => "ADD_DEPENDENCY_TARGET_NOT_FOUND",
            AddDependencyCycle { .. } => "ADD_DEPENDENCY_CYCLE",
            SelfDependency { .. } => "SELF_DEPENDENCY",
        }
    }

    fn category(&self) -> ErrorCategory {
        use WorkBreakdownError::*;
        match self {
            DuplicateWorkItemId { .. } => ErrorCategory::Duplicate,
            AddWorkItemParentNotFound { .. }
            | UpdateWorkItemNotFound { .. }
            | SetStatusWorkItemNotFound { .. }
            | MoveWorkItemNotFound { .. }
            | MoveWorkItemParentNotFound { .. }
            | AddDependencyItemNotFound { .. }
            | AddDependencyTargetNotFound { .. } => ErrorCategory::NotFound,
            DependenciesIncomplete { .. } => ErrorCategory::InvalidState,
            MoveWorkItemCycle { .. } | AddDependencyCycle { .. } => ErrorCategory::Conflict,
            SelfDependency { .. } => ErrorCategory::Validation,
        }
    }
}
