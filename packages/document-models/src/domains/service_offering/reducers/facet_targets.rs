use super::super::errors::{Result, ServiceOfferingError};
use super::super::models::ServiceOfferingState;
use crate::common::facet_target::{
    self, AddFacetOptionInput, RemoveFacetOptionInput, RemoveFacetTargetInput,
    SetFacetTargetInput,
};

pub fn set_facet_target(state: &mut ServiceOfferingState, input: &SetFacetTargetInput) -> Result<()> {
    facet_target::set_facet_target(&mut state.facet_targets, input)
        .map_err(|err| ServiceOfferingError::DuplicateFacetTargetId { id: err.id })?;
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_facet_target(
    state: &mut ServiceOfferingState,
    input: &RemoveFacetTargetInput,
) -> Result<()> {
    if facet_target::remove_facet_target(&mut state.facet_targets, &input.category_key) {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}

pub fn add_facet_option(state: &mut ServiceOfferingState, input: &AddFacetOptionInput) -> Result<()> {
    facet_target::add_facet_option(&mut state.facet_targets, input).map_err(|err| {
        ServiceOfferingError::AddFacetOptionTargetNotFound {
            category_key: err.category_key,
        }
    })?;
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_facet_option(
    state: &mut ServiceOfferingState,
    input: &RemoveFacetOptionInput,
) -> Result<()> {
    if facet_target::remove_facet_option(&mut state.facet_targets, input) {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}
