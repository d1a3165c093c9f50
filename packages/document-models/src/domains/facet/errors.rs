use document_runtime::{ErrorCategory, OperationError};
use thiserror::Error;

use super::models::FacetOptionId;

pub type Result<T> = std::result::Result<T, FacetError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FacetError {
    #[error("option {id} already exists")]
    DuplicateOptionId { id: FacetOptionId },

    #[error("cannot reorder options: {id} is not an option of this facet")]
    ReorderOptionsUnknownId { id: FacetOptionId },

    #[error("cannot reorder options: {id} is listed more than once")]
    ReorderOptionsDuplicateId { id: FacetOptionId },
}

impl OperationError for FacetError {
    fn code(&self) -> &'static str {
        match self {
            FacetError::DuplicateOptionId { .. } => "DUPLICATE_OPTION_ID",
            FacetError::ReorderOptionsUnknownId { .. } => "REORDER_OPTIONS_UNKNOWN_ID",
            FacetError::ReorderOptionsDuplicateId { .. } => "REORDER_OPTIONS_DUPLICATE_ID",
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            FacetError::DuplicateOptionId { .. } => ErrorCategory::Duplicate,
            FacetError::ReorderOptionsUnknownId { .. } => ErrorCategory::NotFound,
            FacetError::ReorderOptionsDuplicateId { .. } => ErrorCategory::Validation,
        }
    }
}
