use tracing::debug;

use super::super::actions::{
    AddServiceGroupInput, DeleteServiceGroupInput, ReorderServiceGroupsInput,
    UpdateServiceGroupInput,
};
use super::super::errors::{Result, ServiceOfferingError};
use super::super::models::{ServiceGroup, ServiceOfferingState};
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::{reorder, EntityVec, ReorderError};

pub fn add_service_group(
    state: &mut ServiceOfferingState,
    input: &AddServiceGroupInput,
) -> Result<()> {
    if state.service_groups.contains_id(&input.id) {
        return Err(ServiceOfferingError::DuplicateServiceGroupId {
            id: input.id.clone(),
        });
    }
    let display_order = input
        .display_order
        .unwrap_or(state.service_groups.len() as u32);
    state.service_groups.push(ServiceGroup {
        id: input.id.clone(),
        name: input.name.clone(),
        description: input.description.clone(),
        billing_cycle: input.billing_cycle,
        display_order,
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_service_group(
    state: &mut ServiceOfferingState,
    input: &UpdateServiceGroupInput,
) -> Result<()> {
    let group = state
        .service_groups
        .find_by_id_mut(&input.id)
        .ok_or_else(|| ServiceOfferingError::UpdateServiceGroupNotFound {
            id: input.id.clone(),
        })?;
    set_non_empty(&mut group.name, &input.name);
    set_nullable(&mut group.description, &input.description);
    set_if_present(&mut group.billing_cycle, &input.billing_cycle);
    set_if_present(&mut group.display_order, &input.display_order);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// Removes the group and detaches every service that was in it.
pub fn delete_service_group(
    state: &mut ServiceOfferingState,
    input: &DeleteServiceGroupInput,
) -> Result<()> {
    if state.service_groups.remove_by_id(&input.id).is_none() {
        return Err(ServiceOfferingError::DeleteServiceGroupNotFound {
            id: input.id.clone(),
        });
    }

    let mut detached = 0usize;
    for service in &mut state.services {
        if service.service_group_id.as_ref() == Some(&input.id) {
            service.service_group_id = None;
            detached += 1;
        }
    }
    debug!(service_group_id = %input.id, detached, "deleted service group");

    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn reorder_service_groups(
    state: &mut ServiceOfferingState,
    input: &ReorderServiceGroupsInput,
) -> Result<()> {
    reorder(&mut state.service_groups, &input.order).map_err(|err| match err {
        ReorderError::UnknownId(id) => ServiceOfferingError::ReorderServiceGroupsUnknownId { id },
        ReorderError::DuplicateId(id) => {
            ServiceOfferingError::ReorderServiceGroupsDuplicateId { id }
        }
    })?;
    state.last_modified = Some(input.last_modified);
    Ok(())
}
