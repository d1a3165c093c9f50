use tracing::debug;

use super::super::errors::{Result, ServiceOfferingError};
use super::super::models::ServiceOfferingState;
use crate::common::option_group::{
    AddOptionGroupInput, DeleteOptionGroupInput, UpdateOptionGroupInput,
};
use crate::common::{EntityVec, OptionGroup};

pub fn add_option_group(
    state: &mut ServiceOfferingState,
    input: &AddOptionGroupInput,
) -> Result<()> {
    if state.option_groups.contains_id(&input.id) {
        return Err(ServiceOfferingError::DuplicateOptionGroupId {
            id: input.id.clone(),
        });
    }
    state.option_groups.push(OptionGroup::from(input));
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_option_group(
    state: &mut ServiceOfferingState,
    input: &UpdateOptionGroupInput,
) -> Result<()> {
    let Some(group) = state.option_groups.find_by_id_mut(&input.id) else {
        return Ok(());
    };
    group.apply(input);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// Removes the group and clears it from services and from every tier's
/// service levels.
pub fn delete_option_group(
    state: &mut ServiceOfferingState,
    input: &DeleteOptionGroupInput,
) -> Result<()> {
    if state.option_groups.remove_by_id(&input.id).is_none() {
        return Ok(());
    }

    let mut cleared = 0usize;
    for service in &mut state.services {
        if service.option_group_id.as_ref() == Some(&input.id) {
            service.option_group_id = None;
            cleared += 1;
        }
    }
    for level in state
        .tiers
        .iter_mut()
        .flat_map(|tier| tier.service_levels.iter_mut())
    {
        if level.option_group_id.as_ref() == Some(&input.id) {
            level.option_group_id = None;
            cleared += 1;
        }
    }
    debug!(option_group_id = %input.id, cleared, "deleted option group");

    state.last_modified = Some(input.last_modified);
    Ok(())
}
