use document_runtime::document_actions;
use serde::{Deserialize, Serialize};

use super::models::FacetOptionId;
use crate::common::{nullable, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacetNameInput {
    pub name: String,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFacetDescriptionInput {
    pub description: Option<String>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOptionInput {
    pub id: FacetOptionId,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to the end of the list.
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub is_default: bool,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionInput {
    pub id: FacetOptionId,
    pub label: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub display_order: Option<u32>,
    pub is_default: Option<bool>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveOptionInput {
    pub id: FacetOptionId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderOptionsInput {
    pub order: Vec<FacetOptionId>,
    pub last_modified: Timestamp,
}

document_actions! {
    pub enum FacetAction {
        global "SET_FACET_NAME" => SetFacetName(SetFacetNameInput) as set_facet_name,
        global "SET_FACET_DESCRIPTION" => SetFacetDescription(SetFacetDescriptionInput) as set_facet_description,
        global "ADD_OPTION" => AddOption(AddOptionInput) as add_option,
        global "UPDATE_OPTION" => UpdateOption(UpdateOptionInput) as update_option,
        global "REMOVE_OPTION" => RemoveOption(RemoveOptionInput) as remove_option,
        global "REORDER_OPTIONS" => ReorderOptions(ReorderOptionsInput) as reorder_options,
    }
}
