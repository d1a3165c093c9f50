use tracing::debug;

use super::super::actions::{AddStakeholderInput, RemoveStakeholderInput, UpdateStakeholderInput};
use super::super::errors::{BusinessAnalysisError, Result};
use super::super::models::{BusinessAnalysisState, Stakeholder, StakeholderId};
use crate::common::update::{set_non_empty, set_nullable};
use crate::common::EntityVec;

pub fn add_stakeholder(state: &mut BusinessAnalysisState, input: &AddStakeholderInput) -> Result<()> {
    if state.stakeholders.contains_id(&input.id) {
        return Err(BusinessAnalysisError::DuplicateStakeholderId {
            id: input.id.clone(),
        });
    }
    state.stakeholders.push(Stakeholder {
        id: input.id.clone(),
        name: input.name.clone(),
        role: input.role.clone(),
        email: input.email.clone(),
    });
    Ok(())
}

pub fn update_stakeholder(
    state: &mut BusinessAnalysisState,
    input: &UpdateStakeholderInput,
) -> Result<()> {
    if let Some(stakeholder) = state.stakeholders.find_by_id_mut(&input.id) {
        set_non_empty(&mut stakeholder.name, &input.name);
        set_nullable(&mut stakeholder.role, &input.role);
        set_nullable(&mut stakeholder.email, &input.email);
    }
    Ok(())
}

/// Removes the stakeholder and clears it as owner of requirements and risks.
pub fn remove_stakeholder(
    state: &mut BusinessAnalysisState,
    input: &RemoveStakeholderInput,
) -> Result<()> {
    if state.stakeholders.remove_by_id(&input.id).is_none() {
        return Ok(());
    }

    let owned_by_removed = |owner: &Option<StakeholderId>| owner.as_ref() == Some(&input.id);
    let mut released = 0usize;
    for requirement in &mut state.requirements {
        if owned_by_removed(&requirement.owner_id) {
            requirement.owner_id = None;
            released += 1;
        }
    }
    for risk in &mut state.risks {
        if owned_by_removed(&risk.owner_id) {
            risk.owner_id = None;
            released += 1;
        }
    }
    debug!(stakeholder_id = %input.id, released, "removed stakeholder");
    Ok(())
}
