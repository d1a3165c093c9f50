use document_runtime::{ErrorCategory, OperationError};
use thiserror::Error;

use super::models::{FaqFieldId, TargetAudienceId, TemplateServiceId};
use crate::common::{FacetTargetId, OptionGroupId};

pub type Result<T> = std::result::Result<T, ResourceTemplateError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResourceTemplateError {
    #[error("target audience {id} already exists")]
    DuplicateTargetAudienceId { id: TargetAudienceId },

    #[error("facet target {id} already exists")]
    DuplicateFacetTargetId { id: FacetTargetId },

    #[error("cannot add facet option: no target for category {category_key}")]
    AddFacetOptionTargetNotFound { category_key: String },

    #[error("service {id} already exists")]
    DuplicateServiceId { id: TemplateServiceId },

    #[error("cannot add service: parent {parent_id} not found")]
    AddServiceParentNotFound { parent_id: TemplateServiceId },

    #[error("cannot update service: parent {parent_id} not found")]
    UpdateServiceParentNotFound { parent_id: TemplateServiceId },

    #[error("cannot move service {id} under {parent_id}: it would become its own ancestor")]
    UpdateServiceParentCycle {
        id: TemplateServiceId,
        parent_id: TemplateServiceId,
    },

    #[error("option group {id} already exists")]
    DuplicateOptionGroupId { id: OptionGroupId },

    #[error("FAQ {id} already exists")]
    DuplicateFaqId { id: FaqFieldId },

    #[error("cannot update FAQ: {id} not found")]
    UpdateFaqNotFound { id: FaqFieldId },
}

impl OperationError for ResourceTemplateError {
    fn code(&self) -> &'static str {
        use ResourceTemplateError::*;
        match self {
            DuplicateTargetAudienceId { .. } => "DUPLICATE_TARGET_AUDIENCE_ID",
            DuplicateFacetTargetId { .. } => "DUPLICATE_FACET_TARGET_ID",
            AddFacetOptionTargetNotFound { .. } => "ADD_FACET_OPTION_TARGET_NOT_FOUND",
            DuplicateServiceId { .. } => "DUPLICATE_SERVICE_ID",
            AddServiceParentNotFound { .. } => "ADD_SERVICE_PARENT_NOT_FOUND",
            UpdateServiceParentNotFound { .. } => "UPDATE_SERVICE_PARENT_NOT_FOUND",
            UpdateServiceParentCycle { .. } => "UPDATE_SERVICE_PARENT_CYCLE",
            DuplicateOptionGroupId { .. } => "DUPLICATE_OPTION_GROUP_ID",
            DuplicateFaqId { .. } => "DUPLICATE_FAQ_ID",
            UpdateFaqNotFound { .. } => "UPDATE_FAQ_NOT_FOUND",
        }
    }

    fn category(&self) -> ErrorCategory {
        use ResourceTemplateError::*;
        match self {
            DuplicateTargetAudienceId { .. }
            | DuplicateServiceId { .. }
            | DuplicateOptionGroupId { .. }
            | DuplicateFaqId { .. }
            | DuplicateFacetTargetId { .. } => ErrorCategory::Duplicate,
            AddFacetOptionTargetNotFound { .. }
            | AddServiceParentNotFound { .. }
            | UpdateServiceParentNotFound { .. }
            | UpdateFaqNotFound { .. } => ErrorCategory::NotFound,
            UpdateServiceParentCycle { .. } => ErrorCategory::Conflict,
        }
    }
}
