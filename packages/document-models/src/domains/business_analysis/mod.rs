//! BusinessAnalysis domain - stakeholders, coded requirements and risks.

pub mod actions;
pub mod errors;
pub mod models;
mod reducers;

pub use actions::*;
pub use errors::BusinessAnalysisError;
pub use models::*;

use document_runtime::{DocumentModel, DocumentState, EmptyState};

/// The `powerhouse/business-analysis` document type.
pub struct BusinessAnalysis;

impl DocumentModel for BusinessAnalysis {
    const DOCUMENT_TYPE: &'static str = "powerhouse/business-analysis";
    type Global = BusinessAnalysisState;
    type Local = EmptyState;
    type Action = BusinessAnalysisAction;
    type Error = BusinessAnalysisError;

    fn initial_state() -> DocumentState<BusinessAnalysisState, EmptyState> {
        DocumentState::default()
    }

    fn reduce(
        state: &mut DocumentState<BusinessAnalysisState, EmptyState>,
        action: &BusinessAnalysisAction,
    ) -> Result<(), BusinessAnalysisError> {
        reducers::reduce(&mut state.global, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_runtime::testing::DocumentTest;
    use serde_json::json;

    fn stakeholder(id: &str) -> BusinessAnalysisAction {
        BusinessAnalysisAction::add_stakeholder(AddStakeholderInput {
            id: id.into(),
            name: id.to_uppercase(),
            role: Some("Sponsor".into()),
            email: None,
        })
    }

    fn requirement(id: &str, code: &str, owner: Option<&str>) -> BusinessAnalysisAction {
        BusinessAnalysisAction::add_requirement(AddRequirementInput {
            id: id.into(),
            code: code.into(),
            title: format!("Requirement {code}"),
            description: None,
            priority: Priority::Must,
            owner_id: owner.map(Into::into),
        })
    }

    fn risk(id: &str, owner: Option<&str>) -> BusinessAnalysisAction {
        BusinessAnalysisAction::add_risk(AddRiskInput {
            id: id.into(),
            title: "Vendor lock-in".into(),
            description: None,
            likelihood: RiskLevel::Medium,
            impact: RiskLevel::High,
            mitigation: None,
            owner_id: owner.map(Into::into),
        })
    }

    fn update_code(id: &str, code: &str) -> BusinessAnalysisAction {
        BusinessAnalysisAction::update_requirement(UpdateRequirementInput {
            id: id.into(),
            code: Some(code.into()),
            title: None,
            description: None,
            priority: None,
            owner_id: None,
        })
    }

    #[test]
    fn initial_wire_shape() {
        let value = serde_json::to_value(BusinessAnalysis::initial_state().global).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "",
                "summary": null,
                "stakeholders": [],
                "requirements": [],
                "risks": []
            })
        );
    }

    #[test]
    fn requirement_codes_are_unique() {
        DocumentTest::<BusinessAnalysis>::new()
            .given(requirement("r1", "REQ-1", None))
            .then(requirement("r2", "REQ-2", None))
            .expect_ok()
            .assert_state(|s| s.requirements[1].status == RequirementStatus::Proposed)
            .then(requirement("r3", "REQ-1", None))
            .expect_code("DUPLICATE_REQUIREMENT_CODE")
            .then(update_code("r2", "REQ-1"))
            .expect_code("DUPLICATE_REQUIREMENT_CODE")
            .expect_unchanged()
            .then(update_code("r2", "REQ-2"))
            .expect_ok()
            .then(update_code("r9", "REQ-9"))
            .expect_code("UPDATE_REQUIREMENT_NOT_FOUND");
    }

    #[test]
    fn empty_codes_are_not_duplicates() {
        DocumentTest::<BusinessAnalysis>::new()
            .given(requirement("r1", "", None))
            .then(requirement("r2", "", None))
            .expect_ok()
            .then(requirement("r3", "REQ-3", None))
            .then(requirement("r4", "REQ-3", None))
            .expect_code("DUPLICATE_REQUIREMENT_CODE")
            .expect_unchanged()
            .assert_state(|s| s.requirements.len() == 3 && s.requirements[1].code.is_empty());
    }

    #[test]
    fn owners_must_be_stakeholders() {
        DocumentTest::<BusinessAnalysis>::new()
            .given(requirement("r1", "REQ-1", Some("cfo")))
            .expect_code("REQUIREMENT_OWNER_NOT_FOUND")
            .then(risk("k1", Some("cfo")))
            .expect_code("RISK_OWNER_NOT_FOUND")
            .then(stakeholder("cfo"))
            .then(risk("k1", Some("cfo")))
            .expect_ok()
            .then(risk("k1", None))
            .expect_code("DUPLICATE_RISK_ID");
    }

    #[test]
    fn update_risk_ignores_missing_target_but_checks_owner() {
        let reassign = |id: &str, owner: &str| {
            BusinessAnalysisAction::update_risk(UpdateRiskInput {
                id: id.into(),
                title: None,
                description: None,
                likelihood: None,
                impact: Some(RiskLevel::Low),
                mitigation: None,
                owner_id: Some(Some(owner.into())),
            })
        };

        DocumentTest::<BusinessAnalysis>::new()
            .given(risk("k1", None))
            .then(reassign("k9", "nobody"))
            .expect_ok()
            .expect_unchanged()
            .then(reassign("k1", "nobody"))
            .expect_code("RISK_OWNER_NOT_FOUND")
            .expect_unchanged();
    }

    #[test]
    fn removing_stakeholder_releases_ownership() {
        DocumentTest::<BusinessAnalysis>::new()
            .given(stakeholder("pm"))
            .then(stakeholder("cto"))
            .then(requirement("r1", "REQ-1", Some("pm")))
            .then(risk("k1", Some("pm")))
            .then(risk("k2", Some("cto")))
            .then(BusinessAnalysisAction::remove_stakeholder(RemoveStakeholderInput {
                id: "pm".into(),
            }))
            .expect_ok()
            .assert_state(|s| {
                s.stakeholders.len() == 1
                    && s.requirements[0].owner_id.is_none()
                    && s.risks[0].owner_id.is_none()
                    && s.risks[1].owner_id.as_ref().is_some_and(|o| o == "cto")
            });
    }

    #[test]
    fn requirement_status_and_removal() {
        DocumentTest::<BusinessAnalysis>::new()
            .given(requirement("r1", "REQ-1", None))
            .then(BusinessAnalysisAction::set_requirement_status(SetRequirementStatusInput {
                id: "r1".into(),
                status: RequirementStatus::Approved,
            }))
            .expect_ok()
            .assert_state(|s| s.requirements[0].status == RequirementStatus::Approved)
            .then(BusinessAnalysisAction::set_requirement_status(SetRequirementStatusInput {
                id: "r2".into(),
                status: RequirementStatus::Rejected,
            }))
            .expect_code("SET_REQUIREMENT_STATUS_NOT_FOUND")
            .then(BusinessAnalysisAction::remove_requirement(RemoveRequirementInput {
                id: "r1".into(),
            }))
            .then(BusinessAnalysisAction::remove_requirement(RemoveRequirementInput {
                id: "r1".into(),
            }))
            .expect_ok()
            .assert_state(|s| s.requirements.is_empty());
    }
}
