//! Facet targets: which options of a facet category an offering or template selects.
//!
//! Shared by ServiceOffering and ResourceTemplate. Targets are keyed by
//! `categoryKey`; `selectedOptions` is an ordered set of facet option ids.

use serde::{Deserialize, Serialize};

use super::collections::EntityVec;
use super::id::Oid;
use super::types::{dedupe, Timestamp};

pub type FacetTargetId = Oid<FacetTarget>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetTarget {
    pub id: FacetTargetId,
    pub category_key: String,
    pub category_label: String,
    pub selected_options: Vec<String>,
}

crate::impl_entity!(FacetTarget);

// ============================================================================
// Inputs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacetTargetInput {
    pub id: FacetTargetId,
    pub category_key: String,
    pub category_label: String,
    #[serde(default)]
    pub selected_options: Vec<String>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFacetTargetInput {
    pub category_key: String,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFacetOptionInput {
    pub category_key: String,
    pub option_id: String,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFacetOptionInput {
    pub category_key: String,
    pub option_id: String,
    pub last_modified: Timestamp,
}

// ============================================================================
// Operations
// ============================================================================

/// No facet target exists for the category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNotFound {
    pub category_key: String,
}

fn find_mut<'a>(targets: &'a mut [FacetTarget], category_key: &str) -> Option<&'a mut FacetTarget> {
    targets.iter_mut().find(|t| t.category_key == category_key)
}

/// A new target reuses the id of a target for another category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTargetId {
    pub id: FacetTargetId,
}

/// Insert or replace the target for `categoryKey`. An existing target keeps its id.
///
/// A target for a new key must not reuse an id already present.
pub fn set_facet_target(
    targets: &mut Vec<FacetTarget>,
    input: &SetFacetTargetInput,
) -> Result<(), DuplicateTargetId> {
    let selected_options = dedupe(&input.selected_options);
    if let Some(existing) = find_mut(targets, &input.category_key) {
        existing.category_label.clone_from(&input.category_label);
        existing.selected_options = selected_options;
        return Ok(());
    }

    if targets.contains_id(&input.id) {
        return Err(DuplicateTargetId {
            id: input.id.clone(),
        });
    }
    targets.push(FacetTarget {
        id: input.id.clone(),
        category_key: input.category_key.clone(),
        category_label: input.category_label.clone(),
        selected_options,
    });
    Ok(())
}

/// Remove the target for `categoryKey`. Returns whether one was removed.
pub fn remove_facet_target(targets: &mut Vec<FacetTarget>, category_key: &str) -> bool {
    let before = targets.len();
    targets.retain(|t| t.category_key != category_key);
    targets.len() != before
}

/// Add `optionId` to the target's selection unless already present.
pub fn add_facet_option(
    targets: &mut [FacetTarget],
    input: &AddFacetOptionInput,
) -> Result<(), TargetNotFound> {
    let target = find_mut(targets, &input.category_key).ok_or_else(|| TargetNotFound {
        category_key: input.category_key.clone(),
    })?;
    if !target.selected_options.contains(&input.option_id) {
        target.selected_options.push(input.option_id.clone());
    }
    Ok(())
}

/// Remove `optionId` from the target's selection. Returns whether the target exists.
pub fn remove_facet_option(targets: &mut [FacetTarget], input: &RemoveFacetOptionInput) -> bool {
    match find_mut(targets, &input.category_key) {
        Some(target) => {
            target.selected_options.retain(|o| o != &input.option_id);
            true
        }
        None => false,
    }
}
