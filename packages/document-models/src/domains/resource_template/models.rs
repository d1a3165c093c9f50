use serde::{Deserialize, Serialize};
use url::Url;

use crate::common::{
    FacetTarget, Oid, OptionGroup, OptionGroupId, Phid, PublicationStatus, Timestamp,
};

pub type TemplateStatus = PublicationStatus;

pub type TargetAudienceId = Oid<TargetAudience>;
pub type TemplateServiceId = Oid<TemplateService>;
pub type FaqFieldId = Oid<FaqField>;

/// The operator-facing blueprint that service offerings are built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplateState {
    pub id: Phid,
    pub operator_id: Phid,
    pub title: String,
    pub summary: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<Url>,
    pub info_link: Option<Url>,
    pub status: TemplateStatus,
    pub last_modified: Option<Timestamp>,
    pub target_audiences: Vec<TargetAudience>,
    pub setup_services: Vec<String>,
    pub recurring_services: Vec<String>,
    pub facet_targets: Vec<FacetTarget>,
    pub services: Vec<TemplateService>,
    pub option_groups: Vec<OptionGroup>,
    pub faq_fields: Vec<FaqField>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAudience {
    pub id: TargetAudienceId,
    pub label: String,
    pub color: Option<String>,
}

/// A service in the template. Services nest through `parent_service_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateService {
    pub id: TemplateServiceId,
    pub title: String,
    pub description: Option<String>,
    pub parent_service_id: Option<TemplateServiceId>,
    pub display_order: Option<u32>,
    pub is_setup_formation: bool,
    pub option_group_id: Option<OptionGroupId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqField {
    pub id: FaqFieldId,
    pub question: String,
    pub answer: Option<String>,
    pub display_order: u32,
}

crate::impl_entity!(TargetAudience, TemplateService, FaqField);
