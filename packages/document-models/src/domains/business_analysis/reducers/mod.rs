mod requirements;
mod risks;
mod stakeholders;

use super::actions::BusinessAnalysisAction;
use super::errors::{BusinessAnalysisError, Result};
use super::models::{BusinessAnalysisState, StakeholderId};
use crate::common::EntityVec;

pub(super) fn reduce(state: &mut BusinessAnalysisState, action: &BusinessAnalysisAction) -> Result<()> {
    use BusinessAnalysisAction::*;
    match action {
        SetAnalysisTitle(input) => {
            state.title = input.title.clone();
            Ok(())
        }
        SetAnalysisSummary(input) => {
            state.summary = input.summary.clone();
            Ok(())
        }

        AddStakeholder(input) => stakeholders::add_stakeholder(state, input),
        UpdateStakeholder(input) => stakeholders::update_stakeholder(state, input),
        RemoveStakeholder(input) => stakeholders::remove_stakeholder(state, input),

        AddRequirement(input) => requirements::add_requirement(state, input),
        UpdateRequirement(input) => requirements::update_requirement(state, input),
        SetRequirementStatus(input) => requirements::set_requirement_status(state, input),
        RemoveRequirement(input) => requirements::remove_requirement(state, input),

        AddRisk(input) => risks::add_risk(state, input),
        UpdateRisk(input) => risks::update_risk(state, input),
        RemoveRisk(input) => risks::remove_risk(state, input),
    }
}

/// Check that an owner reference, when present, names a stakeholder.
fn check_owner(
    state: &BusinessAnalysisState,
    owner_id: Option<&StakeholderId>,
    not_found: fn(StakeholderId) -> BusinessAnalysisError,
) -> Result<()> {
    match owner_id {
        Some(owner_id) if !state.stakeholders.contains_id(owner_id) => {
            Err(not_found(owner_id.clone()))
        }
        _ => Ok(()),
    }
}
