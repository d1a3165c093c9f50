use super::super::actions::{
    AddRequirementInput, RemoveRequirementInput, SetRequirementStatusInput,
    UpdateRequirementInput,
};
use super::super::errors::{BusinessAnalysisError, Result};
use super::super::models::{BusinessAnalysisState, Requirement, RequirementId, RequirementStatus};
use super::check_owner;
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::EntityVec;

pub fn add_requirement(state: &mut BusinessAnalysisState, input: &AddRequirementInput) -> Result<()> {
    if state.requirements.contains_id(&input.id) {
        return Err(BusinessAnalysisError::DuplicateRequirementId {
            id: input.id.clone(),
        });
    }
    if !input.code.is_empty() {
        check_code(state, &input.code, None)?;
    }
    check_owner(state, input.owner_id.as_ref(), |owner_id| {
        BusinessAnalysisError::RequirementOwnerNotFound { owner_id }
    })?;

    state.requirements.push(Requirement {
        id: input.id.clone(),
        code: input.code.clone(),
        title: input.title.clone(),
        description: input.description.clone(),
        priority: input.priority,
        status: RequirementStatus::Proposed,
        owner_id: input.owner_id.clone(),
    });
    Ok(())
}

pub fn update_requirement(
    state: &mut BusinessAnalysisState,
    input: &UpdateRequirementInput,
) -> Result<()> {
    if !state.requirements.contains_id(&input.id) {
        return Err(BusinessAnalysisError::UpdateRequirementNotFound {
            id: input.id.clone(),
        });
    }
    if let Some(code) = input.code.as_deref().filter(|code| !code.is_empty()) {
        check_code(state, code, Some(&input.id))?;
    }
    if let Some(owner_id) = &input.owner_id {
        check_owner(state, owner_id.as_ref(), |owner_id| {
            BusinessAnalysisError::RequirementOwnerNotFound { owner_id }
        })?;
    }

    if let Some(requirement) = state.requirements.find_by_id_mut(&input.id) {
        set_non_empty(&mut requirement.code, &input.code);
        set_non_empty(&mut requirement.title, &input.title);
        set_nullable(&mut requirement.description, &input.description);
        set_if_present(&mut requirement.priority, &input.priority);
        set_nullable(&mut requirement.owner_id, &input.owner_id);
    }
    Ok(())
}

pub fn set_requirement_status(
    state: &mut BusinessAnalysisState,
    input: &SetRequirementStatusInput,
) -> Result<()> {
    let requirement = state
        .requirements
        .find_by_id_mut(&input.id)
        .ok_or_else(|| BusinessAnalysisError::SetRequirementStatusNotFound {
            id: input.id.clone(),
        })?;
    requirement.status = input.status;
    Ok(())
}

pub fn remove_requirement(
    state: &mut BusinessAnalysisState,
    input: &RemoveRequirementInput,
) -> Result<()> {
    state.requirements.remove_by_id(&input.id);
    Ok(())
}

/// Codes are unique across requirements; `except` is the requirement being updated.
fn check_code(state: &BusinessAnalysisState, code: &str, except: Option<&RequirementId>) -> Result<()> {
    let taken = state
        .requirements
        .iter()
        .any(|r| r.code == code && Some(&r.id) != except);
    if taken {
        return Err(BusinessAnalysisError::DuplicateRequirementCode {
            code: code.to_string(),
        });
    }
    Ok(())
}
