//! Subscribed services and their usage metrics.

use super::super::actions::{
    AddServiceInput, AddServiceMetricInput, DecrementMetricUsageInput, IncrementMetricUsageInput,
    RemoveServiceInput, RemoveServiceMetricInput, ResetMetricUsageInput, UpdateMetricInput,
    UpdateServiceInfoInput,
};
use super::super::errors::{Result, SubscriptionInstanceError};
use super::super::models::{
    MetricId, ServiceMetric, SubscriptionInstanceState, SubscriptionService,
    SubscriptionServiceId,
};
use crate::common::update::{set_if_present, set_non_empty, set_nullable};
use crate::common::EntityVec;

fn metric_mut<'a>(
    state: &'a mut SubscriptionInstanceState,
    service_id: &SubscriptionServiceId,
    metric_id: &MetricId,
) -> Option<&'a mut ServiceMetric> {
    state
        .services
        .find_by_id_mut(service_id)
        .and_then(|service| service.metrics.find_by_id_mut(metric_id))
}

pub fn add_service(state: &mut SubscriptionInstanceState, input: &AddServiceInput) -> Result<()> {
    if state.services.contains_id(&input.id) {
        return Err(SubscriptionInstanceError::DuplicateServiceId {
            id: input.id.clone(),
        });
    }
    state.services.push(SubscriptionService {
        id: input.id.clone(),
        name: input.name.clone(),
        description: input.description.clone(),
        custom_value: input.custom_value.clone(),
        setup_cost: input.setup_cost,
        recurring_cost: input.recurring_cost,
        metrics: Vec::new(),
    });
    Ok(())
}

pub fn update_service_info(
    state: &mut SubscriptionInstanceState,
    input: &UpdateServiceInfoInput,
) -> Result<()> {
    if let Some(service) = state.services.find_by_id_mut(&input.service_id) {
        set_non_empty(&mut service.name, &input.name);
        set_nullable(&mut service.description, &input.description);
        set_nullable(&mut service.custom_value, &input.custom_value);
        set_nullable(&mut service.setup_cost, &input.setup_cost);
        set_nullable(&mut service.recurring_cost, &input.recurring_cost);
    }
    Ok(())
}

pub fn remove_service(state: &mut SubscriptionInstanceState, input: &RemoveServiceInput) -> Result<()> {
    state
        .services
        .remove_by_id(&input.service_id)
        .map(|_| ())
        .ok_or_else(|| SubscriptionInstanceError::RemoveServiceNotFound {
            id: input.service_id.clone(),
        })
}

pub fn add_service_metric(
    state: &mut SubscriptionInstanceState,
    input: &AddServiceMetricInput,
) -> Result<()> {
    let service = state
        .services
        .find_by_id_mut(&input.service_id)
        .ok_or_else(|| SubscriptionInstanceError::AddMetricServiceNotFound {
            service_id: input.service_id.clone(),
        })?;
    if service.metrics.contains_id(&input.metric_id) {
        return Err(SubscriptionInstanceError::DuplicateMetricId {
            service_id: input.service_id.clone(),
            id: input.metric_id.clone(),
        });
    }
    service.metrics.push(ServiceMetric {
        id: input.metric_id.clone(),
        name: input.name.clone(),
        unit_name: input.unit_name.clone(),
        limit: input.limit,
        current_usage: input.current_usage,
        usage_reset_period: input.usage_reset_period,
        next_usage_reset: input.next_usage_reset,
    });
    Ok(())
}

pub fn update_metric(state: &mut SubscriptionInstanceState, input: &UpdateMetricInput) -> Result<()> {
    let service = state
        .services
        .find_by_id_mut(&input.service_id)
        .ok_or_else(|| SubscriptionInstanceError::UpdateMetricServiceNotFound {
            service_id: input.service_id.clone(),
        })?;
    let metric = service
        .metrics
        .find_by_id_mut(&input.metric_id)
        .ok_or_else(|| SubscriptionInstanceError::UpdateMetricNotFound {
            service_id: input.service_id.clone(),
            id: input.metric_id.clone(),
        })?;
    set_non_empty(&mut metric.name, &input.name);
    set_non_empty(&mut metric.unit_name, &input.unit_name);
    set_nullable(&mut metric.limit, &input.limit);
    set_if_present(&mut metric.current_usage, &input.current_usage);
    set_nullable(&mut metric.usage_reset_period, &input.usage_reset_period);
    set_nullable(&mut metric.next_usage_reset, &input.next_usage_reset);
    Ok(())
}

pub fn remove_service_metric(
    state: &mut SubscriptionInstanceState,
    input: &RemoveServiceMetricInput,
) -> Result<()> {
    let service = state
        .services
        .find_by_id_mut(&input.service_id)
        .ok_or_else(|| SubscriptionInstanceError::RemoveMetricServiceNotFound {
            service_id: input.service_id.clone(),
        })?;
    service.metrics.remove_by_id(&input.metric_id);
    Ok(())
}

/// Adds to the usage counter, saturating at `u64::MAX`.
pub fn increment_metric_usage(
    state: &mut SubscriptionInstanceState,
    input: &IncrementMetricUsageInput,
) -> Result<()> {
    if !state.services.contains_id(&input.service_id) {
        return Err(SubscriptionInstanceError::IncrementUsageServiceNotFound {
            service_id: input.service_id.clone(),
        });
    }
    let metric = metric_mut(state, &input.service_id, &input.metric_id).ok_or_else(|| {
        SubscriptionInstanceError::IncrementUsageMetricNotFound {
            service_id: input.service_id.clone(),
            id: input.metric_id.clone(),
        }
    })?;
    metric.current_usage = metric.current_usage.saturating_add(input.amount);
    Ok(())
}

/// Subtracts from the usage counter, never going below zero.
pub fn decrement_metric_usage(
    state: &mut SubscriptionInstanceState,
    input: &DecrementMetricUsageInput,
) -> Result<()> {
    if let Some(metric) = metric_mut(state, &input.service_id, &input.metric_id) {
        metric.current_usage = metric.current_usage.saturating_sub(input.amount);
    }
    Ok(())
}

pub fn reset_metric_usage(
    state: &mut SubscriptionInstanceState,
    input: &ResetMetricUsageInput,
) -> Result<()> {
    if let Some(metric) = metric_mut(state, &input.service_id, &input.metric_id) {
        metric.current_usage = 0;
        if let Some(next) = input.next_usage_reset {
            metric.next_usage_reset = Some(next);
        }
    }
    Ok(())
}
