use super::actions::{
    AddOptionInput, FacetAction, RemoveOptionInput, ReorderOptionsInput, SetFacetDescriptionInput,
    SetFacetNameInput, UpdateOptionInput,
};
use super::errors::{FacetError, Result};
use super::models::{FacetOption, FacetState};
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::{clear_defaults, reorder, EntityVec, ReorderError};

pub(super) fn reduce(state: &mut FacetState, action: &FacetAction) -> Result<()> {
    use FacetAction::*;
    match action {
        SetFacetName(input) => set_facet_name(state, input),
        SetFacetDescription(input) => set_facet_description(state, input),
        AddOption(input) => add_option(state, input),
        UpdateOption(input) => update_option(state, input),
        RemoveOption(input) => remove_option(state, input),
        ReorderOptions(input) => reorder_options(state, input),
    }
}

fn set_facet_name(state: &mut FacetState, input: &SetFacetNameInput) -> Result<()> {
    state.name = input.name.clone();
    state.last_modified = Some(input.last_modified);
    Ok(())
}

fn set_facet_description(state: &mut FacetState, input: &SetFacetDescriptionInput) -> Result<()> {
    state.description = input.description.clone();
    state.last_modified = Some(input.last_modified);
    Ok(())
}

fn add_option(state: &mut FacetState, input: &AddOptionInput) -> Result<()> {
    if state.options.contains_id(&input.id) {
        return Err(FacetError::DuplicateOptionId {
            id: input.id.clone(),
        });
    }
    if input.is_default {
        clear_defaults(&mut state.options);
    }
    let display_order = input.display_order.unwrap_or(state.options.len() as u32);
    state.options.push(FacetOption {
        id: input.id.clone(),
        label: input.label.clone(),
        description: input.description.clone(),
        display_order,
        is_default: input.is_default,
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

fn update_option(state: &mut FacetState, input: &UpdateOptionInput) -> Result<()> {
    let Some(index) = state.options.position_of(&input.id) else {
        return Ok(());
    };
    if input.is_default == Some(true) {
        clear_defaults(&mut state.options);
    }

    let option = &mut state.options[index];
    set_non_empty(&mut option.label, &input.label);
    set_nullable(&mut option.description, &input.description);
    set_if_present(&mut option.display_order, &input.display_order);
    set_if_present(&mut option.is_default, &input.is_default);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// Removing the default option leaves the facet without one.
fn remove_option(state: &mut FacetState, input: &RemoveOptionInput) -> Result<()> {
    if state.options.remove_by_id(&input.id).is_none() {
        return Ok(());
    }
    state.last_modified = Some(input.last_modified);
    Ok(())
}

fn reorder_options(state: &mut FacetState, input: &ReorderOptionsInput) -> Result<()> {
    reorder(&mut state.options, &input.order).map_err(|err| match err {
        ReorderError::UnknownId(id) => FacetError::ReorderOptionsUnknownId { id },
        ReorderError::DuplicateId(id) => FacetError::ReorderOptionsDuplicateId { id },
    })?;
    state.last_modified = Some(input.last_modified);
    Ok(())
}
