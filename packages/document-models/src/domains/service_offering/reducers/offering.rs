//! Offering-level scalars and the resource template link.

use super::super::actions::{
    ChangeResourceTemplateInput, SelectResourceTemplateInput, SetAvailableBillingCyclesInput,
    SetOfferingIdInput, SetOperatorInput, UpdateOfferingInfoInput, UpdateOfferingStatusInput,
};
use super::super::errors::{Result, ServiceOfferingError};
use super::super::models::ServiceOfferingState;
use crate::common::dedupe;
use crate::common::update::{set_non_empty, set_nullable};

pub fn update_offering_info(
    state: &mut ServiceOfferingState,
    input: &UpdateOfferingInfoInput,
) -> Result<()> {
    set_non_empty(&mut state.title, &input.title);
    set_non_empty(&mut state.summary, &input.summary);
    set_nullable(&mut state.description, &input.description);
    set_nullable(&mut state.thumbnail_url, &input.thumbnail_url);
    set_nullable(&mut state.info_link, &input.info_link);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_offering_status(
    state: &mut ServiceOfferingState,
    input: &UpdateOfferingStatusInput,
) -> Result<()> {
    state.status = input.status;
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn set_operator(state: &mut ServiceOfferingState, input: &SetOperatorInput) -> Result<()> {
    state.operator_id.clone_from(&input.operator_id);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn set_offering_id(state: &mut ServiceOfferingState, input: &SetOfferingIdInput) -> Result<()> {
    state.id.clone_from(&input.id);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn set_available_billing_cycles(
    state: &mut ServiceOfferingState,
    input: &SetAvailableBillingCyclesInput,
) -> Result<()> {
    state.available_billing_cycles = dedupe(&input.billing_cycles);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// First-time template selection. Switching later goes through
/// [`change_resource_template`].
pub fn select_resource_template(
    state: &mut ServiceOfferingState,
    input: &SelectResourceTemplateInput,
) -> Result<()> {
    if let Some(current) = &state.resource_template_id {
        return Err(ServiceOfferingError::TemplateAlreadySelected {
            current: current.clone(),
        });
    }
    state.resource_template_id = Some(input.resource_template_id.clone());
    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// Compare-and-swap on the selected template: the caller must name the
/// template it believes is current.
pub fn change_resource_template(
    state: &mut ServiceOfferingState,
    input: &ChangeResourceTemplateInput,
) -> Result<()> {
    if state.resource_template_id.as_deref() != Some(input.previous_template_id.as_str()) {
        return Err(ServiceOfferingError::TemplateMismatch {
            expected: input.previous_template_id.clone(),
            current: state.resource_template_id.clone(),
        });
    }
    state.resource_template_id = Some(input.new_template_id.clone());
    state.last_modified = Some(input.last_modified);
    Ok(())
}
