use document_runtime::document_actions;
use serde::{Deserialize, Serialize};

use super::models::{WorkItemId, WorkItemStatus};
use crate::common::nullable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWorkBreakdownTitleInput {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWorkBreakdownDescriptionInput {
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWorkItemInput {
    pub id: WorkItemId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_id: Option<WorkItemId>,
    #[serde(default)]
    pub estimate_hours: Option<f64>,
    #[serde(default)]
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkItemInput {
    pub id: WorkItemId,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub estimate_hours: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetWorkItemStatusInput {
    pub id: WorkItemId,
    pub status: WorkItemStatus,
}

/// Move an item under `new_parent_id`, or to the top level when it is null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveWorkItemInput {
    pub id: WorkItemId,
    pub new_parent_id: Option<WorkItemId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveWorkItemInput {
    pub id: WorkItemId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDependencyInput {
    pub item_id: WorkItemId,
    pub depends_on_id: WorkItemId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveDependencyInput {
    pub item_id: WorkItemId,
    pub depends_on_id: WorkItemId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollapseWorkItemInput {
    pub id: WorkItemId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandWorkItemInput {
    pub id: WorkItemId,
}

document_actions! {
    pub enum WorkBreakdownAction {
        global "SET_WORK_BREAKDOWN_TITLE" => SetWorkBreakdownTitle(SetWorkBreakdownTitleInput) as set_work_breakdown_title,
        global "SET_WORK_BREAKDOWN_DESCRIPTION" => SetWorkBreakdownDescription(SetWorkBreakdownDescriptionInput) as set_work_breakdown_description,
        global "ADD_WORK_ITEM" => AddWorkItem(AddWorkItemInput) as add_work_item,
        global "UPDATE_WORK_ITEM" => UpdateWorkItem(UpdateWorkItemInput) as update_work_item,
        global "SET_WORK_ITEM_STATUS" => SetWorkItemStatus(SetWorkItemStatusInput) as set_work_item_status,
        global "MOVE_WORK_ITEM" => MoveWorkItem(MoveWorkItemInput) as move_work_item,
        global "REMOVE_WORK_ITEM" => RemoveWorkItem(RemoveWorkItemInput) as remove_work_item,
        global "ADD_DEPENDENCY" => AddDependency(AddDependencyInput) as add_dependency,
        global "REMOVE_DEPENDENCY" => RemoveDependency(RemoveDependencyInput) as remove_dependency,
        local "COLLAPSE_WORK_ITEM" => CollapseWorkItem(CollapseWorkItemInput) as collapse_work_item,
        local "EXPAND_WORK_ITEM" => ExpandWorkItem(ExpandWorkItemInput) as expand_work_item,
    }
}
