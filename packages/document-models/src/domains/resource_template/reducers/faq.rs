use super::super::actions::{AddFaqInput, DeleteFaqInput, UpdateFaqInput};
use super::super::errors::{ResourceTemplateError, Result};
use super::super::models::{FaqField, ResourceTemplateState};
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::EntityVec;

pub fn add_faq(state: &mut ResourceTemplateState, input: &AddFaqInput) -> Result<()> {
    if state.faq_fields.contains_id(&input.id) {
        return Err(ResourceTemplateError::DuplicateFaqId {
            id: input.id.clone(),
        });
    }
    let display_order = input.display_order.unwrap_or(state.faq_fields.len() as u32);
    state.faq_fields.push(FaqField {
        id: input.id.clone(),
        question: input.question.clone(),
        answer: input.answer.clone(),
        display_order,
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_faq(state: &mut ResourceTemplateState, input: &UpdateFaqInput) -> Result<()> {
    let faq = state.faq_fields.find_by_id_mut(&input.id).ok_or_else(|| {
        ResourceTemplateError::UpdateFaqNotFound {
            id: input.id.clone(),
        }
    })?;
    set_non_empty(&mut faq.question, &input.question);
    set_nullable(&mut faq.answer, &input.answer);
    set_if_present(&mut faq.display_order, &input.display_order);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn delete_faq(state: &mut ResourceTemplateState, input: &DeleteFaqInput) -> Result<()> {
    if state.faq_fields.remove_by_id(&input.id).is_some() {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}
