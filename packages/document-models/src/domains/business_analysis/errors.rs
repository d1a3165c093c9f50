use document_runtime::{ErrorCategory, OperationError};
use thiserror::Error;

use super::models::{RequirementId, RiskId, StakeholderId};

pub type Result<T> = std::result::Result<T, BusinessAnalysisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BusinessAnalysisError {
    #[error("stakeholder {id} already exists")]
    DuplicateStakeholderId { id: StakeholderId },

    #[error("requirement {id} already exists")]
    DuplicateRequirementId { id: RequirementId },

    #[error("requirement code {code} is already used")]
    DuplicateRequirementCode { code: String },

    #[error("requirement owner {owner_id} is not a stakeholder")]
    RequirementOwnerNotFound { owner_id: StakeholderId },

    #[error("cannot update requirement: {id} not found")]
    UpdateRequirementNotFound { id: RequirementId },

    #[error("cannot set requirement status: {id} not found")]
    SetRequirementStatusNotFound { id: RequirementId },

    #[error("risk {id} already exists")]
    DuplicateRiskId { id: RiskId },

    #[error("risk owner {owner_id} is not a stakeholder")]
    RiskOwnerNotFound { owner_id: StakeholderId },
}

impl OperationError for BusinessAnalysisError {
    fn code(&self) -> &'static str {
        use BusinessAnalysisError::*;
        match self {
            DuplicateStakeholderId { .. } => "DUPLICATE_STAKEHOLDER_ID",
            DuplicateRequirementId { .. } => "DUPLICATE_REQUIREMENT_ID",
            DuplicateRequirementCode { .. } => "DUPLICATE_REQUIREMENT_CODE",
            RequirementOwnerNotFound { .. } => "REQUIREMENT_OWNER_NOT_FOUND",
            UpdateRequirementNotFound { .. } => "UPDATE_REQUIREMENT_NOT_FOUND",
            SetRequirementStatusNotFound { .. } => "SET_REQUIREMENT_STATUS_NOT_FOUND",
            DuplicateRiskId { .. } => "DUPLICATE_RISK_ID",
            RiskOwnerNotFound { .. } => "RISK_OWNER_NOT_FOUND",
        }
    }

    fn category(&self) -> ErrorCategory {
        use BusinessAnalysisError::*;
        match self {
            DuplicateStakeholderId { .. }
            | DuplicateRequirementId { .. }
            | DuplicateRequirementCode { .. }
            | DuplicateRiskId { .. } => ErrorCategory::Duplicate,
            RequirementOwnerNotFound { .. }
            | UpdateRequirementNotFound { .. }
            | SetRequirementStatusNotFound { .. }
            | RiskOwnerNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}
