use document_runtime::document_actions;
use serde::{Deserialize, Serialize};

use super::models::{
    Priority, RequirementId, RequirementStatus, RiskId, RiskLevel, StakeholderId,
};
use crate::common::{nullable, EmailAddress};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAnalysisTitleInput {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAnalysisSummaryInput {
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStakeholderInput {
    pub id: StakeholderId,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<EmailAddress>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStakeholderInput {
    pub id: StakeholderId,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub role: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<EmailAddress>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStakeholderInput {
    pub id: StakeholderId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRequirementInput {
    pub id: RequirementId,
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    #[serde(default)]
    pub owner_id: Option<StakeholderId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirementInput {
    pub id: RequirementId,
    pub code: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Option<StakeholderId>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRequirementStatusInput {
    pub id: RequirementId,
    pub status: RequirementStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRequirementInput {
    pub id: RequirementId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRiskInput {
    pub id: RiskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub likelihood: RiskLevel,
    pub impact: RiskLevel,
    #[serde(default)]
    pub mitigation: Option<String>,
    #[serde(default)]
    pub owner_id: Option<StakeholderId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRiskInput {
    pub id: RiskId,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub likelihood: Option<RiskLevel>,
    pub impact: Option<RiskLevel>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub mitigation: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Option<StakeholderId>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRiskInput {
    pub id: RiskId,
}

document_actions! {
    pub enum BusinessAnalysisAction {
        global "SET_ANALYSIS_TITLE" => SetAnalysisTitle(SetAnalysisTitleInput) as set_analysis_title,
        global "SET_ANALYSIS_SUMMARY" => SetAnalysisSummary(SetAnalysisSummaryInput) as set_analysis_summary,
        global "ADD_STAKEHOLDER" => AddStakeholder(AddStakeholderInput) as add_stakeholder,
        global "UPDATE_STAKEHOLDER" => UpdateStakeholder(UpdateStakeholderInput) as update_stakeholder,
        global "REMOVE_STAKEHOLDER" => RemoveStakeholder(RemoveStakeholderInput) as remove_stakeholder,
        global "ADD_REQUIREMENT" => AddRequirement(AddRequirementInput) as add_requirement,
        global "UPDATE_REQUIREMENT" => UpdateRequirement(UpdateRequirementInput) as update_requirement,
        global "SET_REQUIREMENT_STATUS" => SetRequirementStatus(SetRequirementStatusInput) as set_requirement_status,
        global "REMOVE_REQUIREMENT" => RemoveRequirement(RemoveRequirementInput) as remove_requirement,
        global "ADD_RISK" => AddRisk(AddRiskInput) as add_risk,
        global "UPDATE_RISK" => UpdateRisk(UpdateRiskInput) as update_risk,
        global "REMOVE_RISK" => RemoveRisk(RemoveRiskInput) as remove_risk,
    }
}
