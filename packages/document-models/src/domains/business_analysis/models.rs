use serde::{Deserialize, Serialize};

use crate::common::{EmailAddress, Oid};

pub type StakeholderId = Oid<Stakeholder>;
pub type RequirementId = Oid<Requirement>;
pub type RiskId = Oid<Risk>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAnalysisState {
    pub title: String,
    pub summary: Option<String>,
    pub stakeholders: Vec<Stakeholder>,
    pub requirements: Vec<Requirement>,
    pub risks: Vec<Risk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: StakeholderId,
    pub name: String,
    pub role: Option<String>,
    pub email: Option<EmailAddress>,
}

/// A requirement. `code` (e.g. `REQ-12`) is unique across the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: RequirementId,
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: RequirementStatus,
    pub owner_id: Option<StakeholderId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: RiskId,
    pub title: String,
    pub description: Option<String>,
    pub likelihood: RiskLevel,
    pub impact: RiskLevel,
    pub mitigation: Option<String>,
    pub owner_id: Option<StakeholderId>,
}

crate::impl_entity!(Stakeholder, Requirement, Risk);

/// MoSCoW priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Must,
    Should,
    Could,
    Wont,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementStatus {
    #[default]
    Proposed,
    Approved,
    Rejected,
    Implemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}
