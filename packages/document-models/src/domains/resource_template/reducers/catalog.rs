//! Facet targeting and the setup/recurring service name lists.

use super::super::actions::{SetRecurringServicesInput, SetSetupServicesInput};
use super::super::errors::{ResourceTemplateError, Result};
use super::super::models::ResourceTemplateState;
use crate::common::dedupe;
use crate::common::facet_target::{
    self, AddFacetOptionInput, RemoveFacetOptionInput, RemoveFacetTargetInput,
    SetFacetTargetInput,
};

pub fn set_facet_target(state: &mut ResourceTemplateState, input: &SetFacetTargetInput) -> Result<()> {
    facet_target::set_facet_target(&mut state.facet_targets, input)
        .map_err(|err| ResourceTemplateError::DuplicateFacetTargetId { id: err.id })?;
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_facet_target(
    state: &mut ResourceTemplateState,
    input: &RemoveFacetTargetInput,
) -> Result<()> {
    if facet_target::remove_facet_target(&mut state.facet_targets, &input.category_key) {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}

pub fn add_facet_option(state: &mut ResourceTemplateState, input: &AddFacetOptionInput) -> Result<()> {
    facet_target::add_facet_option(&mut state.facet_targets, input).map_err(|err| {
        ResourceTemplateError::AddFacetOptionTargetNotFound {
            category_key: err.category_key,
        }
    })?;
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_facet_option(
    state: &mut ResourceTemplateState,
    input: &RemoveFacetOptionInput,
) -> Result<()> {
    if facet_target::remove_facet_option(&mut state.facet_targets, input) {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}

pub fn set_setup_services(
    state: &mut ResourceTemplateState,
    input: &SetSetupServicesInput,
) -> Result<()> {
    state.setup_services = dedupe(&input.services);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn set_recurring_services(
    state: &mut ResourceTemplateState,
    input: &SetRecurringServicesInput,
) -> Result<()> {
    state.recurring_services = dedupe(&input.services);
    state.last_modified = Some(input.last_modified);
    Ok(())
}
