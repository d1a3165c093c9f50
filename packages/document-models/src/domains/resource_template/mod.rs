//! ResourceTemplate domain - the blueprint an operator publishes and
//! service offerings select: nested services, option groups, audiences,
//! facet targeting and FAQs.

pub mod actions;
pub mod errors;
pub mod models;
mod reducers;

pub use actions::*;
pub use errors::ResourceTemplateError;
pub use models::*;

use document_runtime::{DocumentModel, DocumentState, EmptyState};

/// The `powerhouse/resource-template` document type.
pub struct ResourceTemplate;

impl DocumentModel for ResourceTemplate {
    const DOCUMENT_TYPE: &'static str = "powerhouse/resource-template";
    type Global = ResourceTemplateState;
    type Local = EmptyState;
    type Action = ResourceTemplateAction;
    type Error = ResourceTemplateError;

    fn initial_state() -> DocumentState<ResourceTemplateState, EmptyState> {
        DocumentState::default()
    }

    fn reduce(
        state: &mut DocumentState<ResourceTemplateState, EmptyState>,
        action: &ResourceTemplateAction,
    ) -> Result<(), ResourceTemplateError> {
        reducers::reduce(&mut state.global, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::facet_target::{AddFacetOptionInput, SetFacetTargetInput};
    use crate::common::option_group::{AddOptionGroupInput, DeleteOptionGroupInput};
    use document_runtime::testing::{day, DocumentTest};
    use serde_json::json;

    fn add_service(id: &str, parent: Option<&str>) -> ResourceTemplateAction {
        ResourceTemplateAction::add_service(AddTemplateServiceInput {
            id: id.into(),
            title: id.to_uppercase(),
            description: None,
            parent_service_id: parent.map(Into::into),
            display_order: None,
            is_setup_formation: false,
            option_group_id: Some("support".into()),
            last_modified: day(1),
        })
    }

    fn add_faq(id: &str) -> ResourceTemplateAction {
        ResourceTemplateAction::add_faq(AddFaqInput {
            id: id.into(),
            question: "Where is my data stored?".into(),
            answer: None,
            display_order: None,
            last_modified: day(1),
        })
    }

    #[test]
    fn initial_wire_shape() {
        let value = serde_json::to_value(ResourceTemplate::initial_state().global).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "",
                "operatorId": "",
                "title": "",
                "summary": "",
                "description": null,
                "thumbnailUrl": null,
                "infoLink": null,
                "status": "DRAFT",
                "lastModified": null,
                "targetAudiences": [],
                "setupServices": [],
                "recurringServices": [],
                "facetTargets": [],
                "services": [],
                "optionGroups": [],
                "faqFields": []
            })
        );
    }

    #[test]
    fn services_nest_and_orphan_on_delete() {
        DocumentTest::<ResourceTemplate>::new()
            .given(add_service("legal", None))
            .then(add_service("incorporation", Some("legal")))
            .expect_ok()
            .then(add_service("banking", Some("finance")))
            .expect_code("ADD_SERVICE_PARENT_NOT_FOUND")
            .then(add_service("legal", None))
            .expect_code("DUPLICATE_SERVICE_ID")
            .then(ResourceTemplateAction::delete_service(DeleteTemplateServiceInput {
                id: "legal".into(),
                last_modified: day(2),
            }))
            .expect_ok()
            .assert_state(|s| {
                s.services.len() == 1
                    && s.services[0].parent_service_id.is_none()
                    && s.last_modified == Some(day(2))
            });
    }

    fn reparent(id: &str, parent: Option<&str>) -> ResourceTemplateAction {
        ResourceTemplateAction::update_service(UpdateTemplateServiceInput {
            id: id.into(),
            title: None,
            description: None,
            parent_service_id: Some(parent.map(Into::into)),
            display_order: None,
            is_setup_formation: None,
            option_group_id: None,
            last_modified: day(3),
        })
    }

    #[test]
    fn update_service_keeps_parent_references_valid() {
        DocumentTest::<ResourceTemplate>::new()
            .given(add_service("legal", None))
            .then(add_service("incorporation", Some("legal")))
            .then(add_service("filing", Some("incorporation")))
            .then(reparent("legal", Some("ghost")))
            .expect_code("UPDATE_SERVICE_PARENT_NOT_FOUND")
            .expect_unchanged()
            .then(reparent("legal", Some("legal")))
            .expect_code("UPDATE_SERVICE_PARENT_CYCLE")
            .then(reparent("legal", Some("filing")))
            .expect_code("UPDATE_SERVICE_PARENT_CYCLE")
            .expect_unchanged()
            .then(reparent("ghost", Some("nowhere")))
            .expect_ok()
            .expect_unchanged()
            .then(reparent("filing", Some("legal")))
            .expect_ok()
            .assert_state(|s| s.services[2].parent_service_id.as_ref().is_some_and(|p| p == "legal"))
            .then(reparent("incorporation", None))
            .expect_ok()
            .assert_state(|s| {
                s.services[1].parent_service_id.is_none() && s.last_modified == Some(day(3))
            });
    }

    #[test]
    fn facet_target_ids_stay_unique() {
        let target = |id: &str, key: &str| {
            ResourceTemplateAction::set_facet_target(SetFacetTargetInput {
                id: id.into(),
                category_key: key.into(),
                category_label: key.to_uppercase(),
                selected_options: Vec::new(),
                last_modified: day(1),
            })
        };

        DocumentTest::<ResourceTemplate>::new()
            .given(target("t1", "region"))
            .then(target("t1", "language"))
            .expect_code("DUPLICATE_FACET_TARGET_ID")
            .expect_unchanged()
            .then(target("t9", "region"))
            .expect_ok()
            .assert_state(|s| s.facet_targets.len() == 1 && s.facet_targets[0].id == "t1");
    }

    #[test]
    fn deleting_option_group_clears_services() {
        DocumentTest::<ResourceTemplate>::new()
            .given(ResourceTemplateAction::add_option_group(AddOptionGroupInput {
                id: "support".into(),
                name: "Support".into(),
                description: None,
                is_add_on: true,
                default_selected: false,
                last_modified: day(1),
            }))
            .then(add_service("legal", None))
            .then(ResourceTemplateAction::delete_option_group(DeleteOptionGroupInput {
                id: "support".into(),
                last_modified: day(2),
            }))
            .expect_ok()
            .assert_state(|s| s.option_groups.is_empty() && s.services[0].option_group_id.is_none());
    }

    #[test]
    fn faq_display_order_and_update() {
        DocumentTest::<ResourceTemplate>::new()
            .given(add_faq("q1"))
            .then(add_faq("q2"))
            .assert_state(|s| s.faq_fields[1].display_order == 1)
            .then(add_faq("q1"))
            .expect_code("DUPLICATE_FAQ_ID")
            .then(ResourceTemplateAction::update_faq(UpdateFaqInput {
                id: "q3".into(),
                question: None,
                answer: Some(Some("In the EU".into())),
                display_order: None,
                last_modified: day(2),
            }))
            .expect_code("UPDATE_FAQ_NOT_FOUND")
            .expect_unchanged()
            .then(ResourceTemplateAction::update_faq(UpdateFaqInput {
                id: "q1".into(),
                question: Some(String::new()),
                answer: Some(Some("In the EU".into())),
                display_order: None,
                last_modified: day(2),
            }))
            .expect_ok()
            .assert_state(|s| {
                s.faq_fields[0].answer.as_deref() == Some("In the EU")
                    && s.faq_fields[0].question == "Where is my data stored?"
            });
    }

    #[test]
    fn service_lists_are_deduplicated() {
        DocumentTest::<ResourceTemplate>::new()
            .given(ResourceTemplateAction::set_setup_services(SetSetupServicesInput {
                services: vec!["Formation".into(), "Banking".into(), "Formation".into()],
                last_modified: day(1),
            }))
            .expect_ok()
            .assert_state(|s| s.setup_services == vec!["Formation", "Banking"]);
    }

    #[test]
    fn facet_option_needs_a_target() {
        let add_option = || {
            ResourceTemplateAction::add_facet_option(AddFacetOptionInput {
                category_key: "region".into(),
                option_id: "eu".into(),
                last_modified: day(2),
            })
        };

        DocumentTest::<ResourceTemplate>::new()
            .given(add_option())
            .expect_code("ADD_FACET_OPTION_TARGET_NOT_FOUND")
            .then(ResourceTemplateAction::set_facet_target(SetFacetTargetInput {
                id: "target-1".into(),
                category_key: "region".into(),
                category_label: "Region".into(),
                selected_options: Vec::new(),
                last_modified: day(1),
            }))
            .then(add_option())
            .then(add_option())
            .expect_ok()
            .assert_state(|s| s.facet_targets[0].selected_options == vec!["eu"]);
    }

    #[test]
    fn audiences() {
        let audience = |id: &str| {
            ResourceTemplateAction::add_target_audience(AddTargetAudienceInput {
                id: id.into(),
                label: "Founders".into(),
                color: Some("#ff9900".into()),
                last_modified: day(1),
            })
        };

        DocumentTest::<ResourceTemplate>::new()
            .given(audience("founders"))
            .then(audience("founders"))
            .expect_code("DUPLICATE_TARGET_AUDIENCE_ID")
            .then(ResourceTemplateAction::remove_target_audience(RemoveTargetAudienceInput {
                id: "nobody".into(),
                last_modified: day(2),
            }))
            .expect_ok()
            .expect_unchanged();
    }
}
