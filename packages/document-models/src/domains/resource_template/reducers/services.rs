use tracing::debug;

use super::super::actions::{
    AddTemplateServiceInput, DeleteTemplateServiceInput, UpdateTemplateServiceInput,
};
use super::super::errors::{ResourceTemplateError, Result};
use super::super::models::{ResourceTemplateState, TemplateService, TemplateServiceId};
use crate::common::option_group::{
    AddOptionGroupInput, DeleteOptionGroupInput, UpdateOptionGroupInput,
};
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::{EntityVec, OptionGroup};

pub fn add_service(state: &mut ResourceTemplateState, input: &AddTemplateServiceInput) -> Result<()> {
    if state.services.contains_id(&input.id) {
        return Err(ResourceTemplateError::DuplicateServiceId {
            id: input.id.clone(),
        });
    }
    if let Some(parent_id) = &input.parent_service_id {
        if !state.services.contains_id(parent_id) {
            return Err(ResourceTemplateError::AddServiceParentNotFound {
                parent_id: parent_id.clone(),
            });
        }
    }

    state.services.push(TemplateService {
        id: input.id.clone(),
        title: input.title.clone(),
        description: input.description.clone(),
        parent_service_id: input.parent_service_id.clone(),
        display_order: input.display_order,
        is_setup_formation: input.is_setup_formation,
        option_group_id: input.option_group_id.clone(),
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_service(
    state: &mut ResourceTemplateState,
    input: &UpdateTemplateServiceInput,
) -> Result<()> {
    if !state.services.contains_id(&input.id) {
        return Ok(());
    }
    if let Some(Some(parent_id)) = &input.parent_service_id {
        if !state.services.contains_id(parent_id) {
            return Err(ResourceTemplateError::UpdateServiceParentNotFound {
                parent_id: parent_id.clone(),
            });
        }
        if is_ancestor_or_self(&state.services, &input.id, parent_id) {
            return Err(ResourceTemplateError::UpdateServiceParentCycle {
                id: input.id.clone(),
                parent_id: parent_id.clone(),
            });
        }
    }

    let Some(service) = state.services.find_by_id_mut(&input.id) else {
        return Ok(());
    };
    set_non_empty(&mut service.title, &input.title);
    set_nullable(&mut service.description, &input.description);
    set_nullable(&mut service.parent_service_id, &input.parent_service_id);
    set_nullable(&mut service.display_order, &input.display_order);
    set_if_present(&mut service.is_setup_formation, &input.is_setup_formation);
    set_nullable(&mut service.option_group_id, &input.option_group_id);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// Removes the service; its direct children move to the top level.
pub fn delete_service(
    state: &mut ResourceTemplateState,
    input: &DeleteTemplateServiceInput,
) -> Result<()> {
    if state.services.remove_by_id(&input.id).is_none() {
        return Ok(());
    }

    let mut orphaned = 0usize;
    for service in &mut state.services {
        if service.parent_service_id.as_ref() == Some(&input.id) {
            service.parent_service_id = None;
            orphaned += 1;
        }
    }
    debug!(service_id = %input.id, orphaned, "deleted template service");

    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// Walks the parent chain from `node` and reports whether `candidate` is on it.
///
/// Bounded by the service count so a corrupt chain cannot spin.
fn is_ancestor_or_self(
    services: &[TemplateService],
    candidate: &TemplateServiceId,
    node: &TemplateServiceId,
) -> bool {
    let mut current = Some(node);
    for _ in 0..=services.len() {
        let Some(id) = current else {
            return false;
        };
        if id == candidate {
            return true;
        }
        current = services
            .iter()
            .find(|service| &service.id == id)
            .and_then(|service| service.parent_service_id.as_ref());
    }
    false
}

pub fn add_option_group(state: &mut ResourceTemplateState, input: &AddOptionGroupInput) -> Result<()> {
    if state.option_groups.contains_id(&input.id) {
        return Err(ResourceTemplateError::DuplicateOptionGroupId {
            id: input.id.clone(),
        });
    }
    state.option_groups.push(OptionGroup::from(input));
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_option_group(
    state: &mut ResourceTemplateState,
    input: &UpdateOptionGroupInput,
) -> Result<()> {
    if let Some(group) = state.option_groups.find_by_id_mut(&input.id) {
        group.apply(input);
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}

pub fn delete_option_group(
    state: &mut ResourceTemplateState,
    input: &DeleteOptionGroupInput,
) -> Result<()> {
    if state.option_groups.remove_by_id(&input.id).is_none() {
        return Ok(());
    }
    for service in &mut state.services {
        if service.option_group_id.as_ref() == Some(&input.id) {
            service.option_group_id = None;
        }
    }
    state.last_modified = Some(input.last_modified);
    Ok(())
}
