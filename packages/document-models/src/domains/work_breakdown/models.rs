use serde::{Deserialize, Serialize};

use crate::common::Oid;

pub type WorkItemId = Oid<WorkItem>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkBreakdownState {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<WorkItem>,
}

/// A node of the breakdown tree. `parent_id` forms a forest; `dependencies`
/// is a separate "must finish first" relation between items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    pub id: WorkItemId,
    pub title: String,
    pub description: Option<String>,
    pub parent_id: Option<WorkItemId>,
    pub estimate_hours: Option<f64>,
    pub status: WorkItemStatus,
    pub assignee: Option<String>,
    pub dependencies: Vec<WorkItemId>,
}

crate::impl_entity!(WorkItem);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkItemStatus {
    #[default]
    Todo,
    InProgress,
    Blocked,
    Done,
}

/// Per-installation view state: which tree nodes are folded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkBreakdownLocalState {
    pub collapsed_item_ids: Vec<WorkItemId>,
}
