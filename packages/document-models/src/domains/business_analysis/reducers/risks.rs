use super::super::actions::{AddRiskInput, RemoveRiskInput, UpdateRiskInput};
use super::super::errors::{BusinessAnalysisError, Result};
use super::super::models::{BusinessAnalysisState, Risk};
use super::check_owner;
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::EntityVec;

pub fn add_risk(state: &mut BusinessAnalysisState, input: &AddRiskInput) -> Result<()> {
    if state.risks.contains_id(&input.id) {
        return Err(BusinessAnalysisError::DuplicateRiskId {
            id: input.id.clone(),
        });
    }
    check_owner(state, input.owner_id.as_ref(), |owner_id| {
        BusinessAnalysisError::RiskOwnerNotFound { owner_id }
    })?;

    state.risks.push(Risk {
        id: input.id.clone(),
        title: input.title.clone(),
        description: input.description.clone(),
        likelihood: input.likelihood,
        impact: input.impact,
        mitigation: input.mitigation.clone(),
        owner_id: input.owner_id.clone(),
    });
    Ok(())
}

/// A missing risk is ignored, but a new owner must still exist.
pub fn update_risk(state: &mut BusinessAnalysisState, input: &UpdateRiskInput) -> Result<()> {
    if !state.risks.contains_id(&input.id) {
        return Ok(());
    }
    if let Some(owner_id) = &input.owner_id {
        check_owner(state, owner_id.as_ref(), |owner_id| {
            BusinessAnalysisError::RiskOwnerNotFound { owner_id }
        })?;
    }

    if let Some(risk) = state.risks.find_by_id_mut(&input.id) {
        set_non_empty(&mut risk.title, &input.title);
        set_nullable(&mut risk.description, &input.description);
        set_if_present(&mut risk.likelihood, &input.likelihood);
        set_if_present(&mut risk.impact, &input.impact);
        set_nullable(&mut risk.mitigation, &input.mitigation);
        set_nullable(&mut risk.owner_id, &input.owner_id);
    }
    Ok(())
}

pub fn remove_risk(state: &mut BusinessAnalysisState, input: &RemoveRiskInput) -> Result<()> {
    state.risks.remove_by_id(&input.id);
    Ok(())
}
