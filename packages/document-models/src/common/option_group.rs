//! Option groups: named bundles of optional services or add-ons.
//!
//! Shared by ServiceOffering and ResourceTemplate. Deleting a group is
//! document-specific because each document holds different references to it.

use serde::{Deserialize, Serialize};

use super::id::Oid;
use super::serde_ext::nullable;
use super::types::Timestamp;
use super::update::{set_if_present, set_non_empty, set_nullable};

pub type OptionGroupId = Oid<OptionGroup>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: OptionGroupId,
    pub name: String,
    pub description: Option<String>,
    pub is_add_on: bool,
    pub default_selected: bool,
}

crate::impl_entity!(OptionGroup);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOptionGroupInput {
    pub id: OptionGroupId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_add_on: bool,
    #[serde(default)]
    pub default_selected: bool,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptionGroupInput {
    pub id: OptionGroupId,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub is_add_on: Option<bool>,
    pub default_selected: Option<bool>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptionGroupInput {
    pub id: OptionGroupId,
    pub last_modified: Timestamp,
}

impl From<&AddOptionGroupInput> for OptionGroup {
    fn from(input: &AddOptionGroupInput) -> Self {
        Self {
            id: input.id.clone(),
            name: input.name.clone(),
            description: input.description.clone(),
            is_add_on: input.is_add_on,
            default_selected: input.default_selected,
        }
    }
}

impl OptionGroup {
    /// Apply a partial update.
    pub fn apply(&mut self, input: &UpdateOptionGroupInput) {
        set_non_empty(&mut self.name, &input.name);
        set_nullable(&mut self.description, &input.description);
        set_if_present(&mut self.is_add_on, &input.is_add_on);
        set_if_present(&mut self.default_selected, &input.default_selected);
    }
}
