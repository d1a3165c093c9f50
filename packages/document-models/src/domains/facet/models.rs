use serde::{Deserialize, Serialize};

use crate::common::{Defaultable, Oid, Ordered, Phid, Timestamp};

pub type FacetOptionId = Oid<FacetOption>;

/// A facet: a named category with an ordered list of selectable options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetState {
    pub id: Phid,
    pub name: String,
    pub description: Option<String>,
    pub last_modified: Option<Timestamp>,
    pub options: Vec<FacetOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOption {
    pub id: FacetOptionId,
    pub label: String,
    pub description: Option<String>,
    pub display_order: u32,
    pub is_default: bool,
}

crate::impl_entity!(FacetOption);

impl Ordered for FacetOption {
    fn set_display_order(&mut self, display_order: u32) {
        self.display_order = display_order;
    }
}

impl Defaultable for FacetOption {
    fn is_default(&self) -> bool {
        self.is_default
    }

    fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }
}
