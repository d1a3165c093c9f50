//! ResourceTemplate operations. Every input carries `lastModified`.

use document_runtime::document_actions;
use serde::{Deserialize, Serialize};
use url::Url;

use super::models::{FaqFieldId, TargetAudienceId, TemplateServiceId, TemplateStatus};
use crate::common::facet_target::{
    AddFacetOptionInput, RemoveFacetOptionInput, RemoveFacetTargetInput, SetFacetTargetInput,
};
use crate::common::option_group::{
    AddOptionGroupInput, DeleteOptionGroupInput, UpdateOptionGroupInput,
};
use crate::common::{nullable, OptionGroupId, Phid, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateInfoInput {
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<Option<Url>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub info_link: Option<Option<Url>>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateStatusInput {
    pub status: TemplateStatus,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTemplateOperatorInput {
    pub operator_id: Phid,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTemplateIdInput {
    pub id: Phid,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTargetAudienceInput {
    pub id: TargetAudienceId,
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTargetAudienceInput {
    pub id: TargetAudienceId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSetupServicesInput {
    pub services: Vec<String>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecurringServicesInput {
    pub services: Vec<String>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTemplateServiceInput {
    pub id: TemplateServiceId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent_service_id: Option<TemplateServiceId>,
    #[serde(default)]
    pub display_order: Option<u32>,
    #[serde(default)]
    pub is_setup_formation: bool,
    #[serde(default)]
    pub option_group_id: Option<OptionGroupId>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateServiceInput {
    pub id: TemplateServiceId,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub parent_service_id: Option<Option<TemplateServiceId>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub display_order: Option<Option<u32>>,
    pub is_setup_formation: Option<bool>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub option_group_id: Option<Option<OptionGroupId>>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTemplateServiceInput {
    pub id: TemplateServiceId,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFaqInput {
    pub id: FaqFieldId,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    /// Defaults to the end of the list.
    #[serde(default)]
    pub display_order: Option<u32>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFaqInput {
    pub id: FaqFieldId,
    pub question: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub answer: Option<Option<String>>,
    pub display_order: Option<u32>,
    pub last_modified: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFaqInput {
    pub id: FaqFieldId,
    pub last_modified: Timestamp,
}

document_actions! {
    pub enum ResourceTemplateAction {
        global "UPDATE_TEMPLATE_INFO" => UpdateTemplateInfo(UpdateTemplateInfoInput) as update_template_info,
        global "UPDATE_TEMPLATE_STATUS" => UpdateTemplateStatus(UpdateTemplateStatusInput) as update_template_status,
        global "SET_OPERATOR" => SetOperator(SetTemplateOperatorInput) as set_operator,
        global "SET_TEMPLATE_ID" => SetTemplateId(SetTemplateIdInput) as set_template_id,

        global "ADD_TARGET_AUDIENCE" => AddTargetAudience(AddTargetAudienceInput) as add_target_audience,
        global "REMOVE_TARGET_AUDIENCE" => RemoveTargetAudience(RemoveTargetAudienceInput) as remove_target_audience,

        global "SET_FACET_TARGET" => SetFacetTarget(SetFacetTargetInput) as set_facet_target,
        global "REMOVE_FACET_TARGET" => RemoveFacetTarget(RemoveFacetTargetInput) as remove_facet_target,
        global "ADD_FACET_OPTION" => AddFacetOption(AddFacetOptionInput) as add_facet_option,
        global "REMOVE_FACET_OPTION" => RemoveFacetOption(RemoveFacetOptionInput) as remove_facet_option,

        global "SET_SETUP_SERVICES" => SetSetupServices(SetSetupServicesInput) as set_setup_services,
        global "SET_RECURRING_SERVICES" => SetRecurringServices(SetRecurringServicesInput) as set_recurring_services,

        global "ADD_SERVICE" => AddService(AddTemplateServiceInput) as add_service,
        global "UPDATE_SERVICE" => UpdateService(UpdateTemplateServiceInput) as update_service,
        global "DELETE_SERVICE" => DeleteService(DeleteTemplateServiceInput) as delete_service,

        global "ADD_OPTION_GROUP" => AddOptionGroup(AddOptionGroupInput) as add_option_group,
        global "UPDATE_OPTION_GROUP" => UpdateOptionGroup(UpdateOptionGroupInput) as update_option_group,
        global "DELETE_OPTION_GROUP" => DeleteOptionGroup(DeleteOptionGroupInput) as delete_option_group,

        global "ADD_FAQ" => AddFaq(AddFaqInput) as add_faq,
        global "UPDATE_FAQ" => UpdateFaq(UpdateFaqInput) as update_faq,
        global "DELETE_FAQ" => DeleteFaq(DeleteFaqInput) as delete_faq,
    }
}
