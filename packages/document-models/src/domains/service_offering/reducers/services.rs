use tracing::debug;

use super::super::actions::{
    AddFacetBindingInput, AddServiceInput, DeleteServiceInput, RemoveFacetBindingInput,
    UpdateServiceInput,
};
use super::super::errors::{Result, ServiceOfferingError};
use super::super::models::{FacetBinding, Service, ServiceOfferingState};
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::{dedupe, EntityVec};

pub fn add_service(state: &mut ServiceOfferingState, input: &AddServiceInput) -> Result<()> {
    if state.services.contains_id(&input.id) {
        return Err(ServiceOfferingError::DuplicateServiceId {
            id: input.id.clone(),
        });
    }
    state.services.push(Service {
        id: input.id.clone(),
        title: input.title.clone(),
        description: input.description.clone(),
        display_order: input.display_order,
        service_group_id: input.service_group_id.clone(),
        is_setup_formation: input.is_setup_formation,
        option_group_id: input.option_group_id.clone(),
        facet_bindings: Vec::new(),
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn update_service(state: &mut ServiceOfferingState, input: &UpdateServiceInput) -> Result<()> {
    let Some(service) = state.services.find_by_id_mut(&input.id) else {
        return Ok(());
    };
    set_non_empty(&mut service.title, &input.title);
    set_nullable(&mut service.description, &input.description);
    set_nullable(&mut service.display_order, &input.display_order);
    set_nullable(&mut service.service_group_id, &input.service_group_id);
    set_if_present(&mut service.is_setup_formation, &input.is_setup_formation);
    set_nullable(&mut service.option_group_id, &input.option_group_id);
    state.last_modified = Some(input.last_modified);
    Ok(())
}

/// Removes the service along with every tier's service levels and usage
/// limits that refer to it.
pub fn delete_service(state: &mut ServiceOfferingState, input: &DeleteServiceInput) -> Result<()> {
    if state.services.remove_by_id(&input.id).is_none() {
        return Ok(());
    }

    let mut cascaded = 0usize;
    for tier in &mut state.tiers {
        let before = tier.service_levels.len() + tier.usage_limits.len();
        tier.service_levels.retain(|level| level.service_id != input.id);
        tier.usage_limits.retain(|limit| limit.service_id != input.id);
        cascaded += before - tier.service_levels.len() - tier.usage_limits.len();
    }
    if cascaded > 0 {
        debug!(service_id = %input.id, removed = cascaded, "removed tier entries for deleted service");
    }

    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn add_facet_binding(
    state: &mut ServiceOfferingState,
    input: &AddFacetBindingInput,
) -> Result<()> {
    let service = state
        .services
        .find_by_id_mut(&input.service_id)
        .ok_or_else(|| ServiceOfferingError::AddFacetBindingServiceNotFound {
            service_id: input.service_id.clone(),
        })?;
    if service.facet_bindings.contains_id(&input.binding_id) {
        return Err(ServiceOfferingError::DuplicateFacetBindingId {
            service_id: input.service_id.clone(),
            id: input.binding_id.clone(),
        });
    }
    service.facet_bindings.push(FacetBinding {
        id: input.binding_id.clone(),
        facet_name: input.facet_name.clone(),
        facet_type: input.facet_type.clone(),
        supported_options: dedupe(&input.supported_options),
    });
    state.last_modified = Some(input.last_modified);
    Ok(())
}

pub fn remove_facet_binding(
    state: &mut ServiceOfferingState,
    input: &RemoveFacetBindingInput,
) -> Result<()> {
    let removed = state
        .services
        .find_by_id_mut(&input.service_id)
        .and_then(|service| service.facet_bindings.remove_by_id(&input.binding_id));
    if removed.is_some() {
        state.last_modified = Some(input.last_modified);
    }
    Ok(())
}
