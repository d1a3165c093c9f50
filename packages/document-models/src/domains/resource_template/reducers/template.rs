use super::super::actions::{
    AddTargetAudienceInput, RemoveTargetAudienceInput, SetTemplateIdInput,
    SetTemplateOperatorInput, UpdateTemplateInfoInput, UpdateTemplateStatusInput,
};
use super::super::errors::{ResourceTemplateError, Result};
use super::super::models::{ResourceTemplateState, TargetAudience};
use crate::common::update::{set_non_empty, set_nullable};
use crate::common::EntityVec;

pub fn update_template_info(
    state: &mut ResourceTemplateState,
    input: &UpdateTemplateInfoInput,
) -> Result<()> {
    set_non_empty(&mut state.title, &input.title);
    set_non_empty(&mut state.summary, &input.summary);
    set_nullable(&mut state.description, &input.description);
    set_nullable(&mut state.thumbnail_url, &input.thumbnail_url);
    set_nullable(&mut state.info_link, &input.info_link);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_template_status(
    state: &mut ResourceTemplateState,
    input: &UpdateTemplateStatusInput,
) -> Result<()> {
    state.status = input.status;
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn set_operator(state: &mut ResourceTemplateState, input: &SetTemplateOperatorInput) -> Result<()> {
    state.operator_id.clone_from(&input.operator_id);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn set_template_id(state: &mut ResourceTemplateState, input: &SetTemplateIdInput) -> Result<()> {
    state.id.clone_from(&input.id);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn add_target_audience(
    state: &mut ResourceTemplateState,
    input: &AddTargetAudienceInput,
) -> Result<()> {
    if state.target_audiences.contains_id(&input.id) {
        return Err(ResourceTemplateError::DuplicateTargetAudienceId {
            id: input.id.clone(),
        });
    }
    state.target_audiences.push(TargetAudience {
        id: input.id.clone(),
        label: input.label.clone(),
        color: input.color.clone(),
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_target_audience(
    state: &mut ResourceTemplateState,
    input: &RemoveTargetAudienceInput,
) -> Result<()> {
    if state.target_audiences.remove_by_id(&input.id).is_some() {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}
