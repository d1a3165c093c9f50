//! Whole-document behavior across the models: wire-format actions,
//! replay from the log, per-scope undo and persistence round-trips.

use document_models::domains::work_breakdown::*;
use document_models::{
    BusinessAnalysis, BusinessAnalysisAction, Facet, FacetAction, ResourceTemplate,
    ResourceTemplateAction, WorkBreakdown,
};
use document_runtime::testing::day;
use document_runtime::{
    create_document, Action, Document, DocumentModel, DocumentRuntime, Scope,
};
use serde_json::json;

fn add_item(id: &str, parent: Option<&str>) -> WorkBreakdownAction {
    WorkBreakdownAction::add_work_item(AddWorkItemInput {
        id: id.into(),
        title: id.to_uppercase(),
        description: None,
        parent_id: parent.map(Into::into),
        estimate_hours: None,
        assignee: Some("sam".into()),
    })
}

fn collapse(id: &str) -> WorkBreakdownAction {
    WorkBreakdownAction::collapse_work_item(CollapseWorkItemInput { id: id.into() })
}

fn work_breakdown() -> Document<WorkBreakdown> {
    let runtime = DocumentRuntime::default();
    let mut doc = create_document::<WorkBreakdown>();
    for action in [
        add_item("epic", None),
        collapse("epic"),
        add_item("story", Some("epic")),
        collapse("story"),
        add_item("task", Some("story")),
    ] {
        runtime.dispatch(&mut doc, action).unwrap();
    }
    doc
}

#[test]
fn scopes_keep_separate_logs() {
    let doc = work_breakdown();

    let global: Vec<u64> = doc
        .operations_for(Scope::Global)
        .iter()
        .map(|op| op.index)
        .collect();
    let local: Vec<u64> = doc
        .operations_for(Scope::Local)
        .iter()
        .map(|op| op.index)
        .collect();

    assert_eq!(global, vec![0, 1, 2]);
    assert_eq!(local, vec![0, 1]);
    assert_eq!(doc.local().collapsed_item_ids.len(), 2);
}

#[test]
fn replay_rebuilds_both_scopes() {
    let runtime = DocumentRuntime::default();
    let doc = work_breakdown();

    let replayed = runtime
        .replay::<WorkBreakdown>(
            doc.header.clone(),
            WorkBreakdown::initial_state(),
            doc.operations.clone(),
        )
        .unwrap();

    assert_eq!(replayed.state, doc.state);
    assert_eq!(replayed.header.revision, doc.header.revision);
}

#[test]
fn undo_only_touches_the_requested_scope() {
    let runtime = DocumentRuntime::default();
    let mut doc = work_breakdown();
    let global_before = doc.global().clone();

    let undone = runtime.undo(&mut doc, Scope::Local).unwrap().unwrap();

    assert_eq!(undone.action.action_type(), "COLLAPSE_WORK_ITEM");
    assert_eq!(doc.global(), &global_before);
    assert_eq!(doc.local().collapsed_item_ids.len(), 1);
    assert_eq!(doc.operations_for(Scope::Local).len(), 1);
    assert_eq!(doc.operations_for(Scope::Global).len(), 3);
}

#[test]
fn documents_survive_a_json_round_trip() {
    let doc = work_breakdown();

    let stored = serde_json::to_string(&doc).unwrap();
    let loaded: Document<WorkBreakdown> = serde_json::from_str(&stored).unwrap();

    assert_eq!(loaded.state, doc.state);
    assert_eq!(loaded.header, doc.header);
    assert_eq!(
        loaded.operations_for(Scope::Global).len(),
        doc.operations_for(Scope::Global).len()
    );
}

#[test]
fn facet_accepts_wire_actions() {
    let runtime = DocumentRuntime::default();
    let mut doc = create_document::<Facet>();

    let actions: Vec<FacetAction> = serde_json::from_value(json!([
        { "type": "SET_FACET_NAME", "input": { "name": "Region", "lastModified": "2024-01-01T00:00:00Z" } },
        { "type": "ADD_OPTION", "input": { "id": "eu", "label": "Europe", "lastModified": "2024-01-02T00:00:00Z" } },
        { "type": "ADD_OPTION", "input": { "id": "us", "label": "United States", "isDefault": true, "lastModified": "2024-01-03T00:00:00Z" } }
    ]))
    .unwrap();
    for action in actions {
        runtime.dispatch(&mut doc, action).unwrap();
    }

    let state = serde_json::to_value(doc.global()).unwrap();
    assert_eq!(state["name"], "Region");
    assert_eq!(state["options"][1]["isDefault"], true);
    assert_eq!(state["options"][1]["displayOrder"], 1);
    assert_eq!(doc.global().last_modified, Some(day(3)));
}

#[test]
fn business_analysis_accepts_wire_actions() {
    let runtime = DocumentRuntime::default();
    let mut doc = create_document::<BusinessAnalysis>();

    let actions: Vec<BusinessAnalysisAction> = serde_json::from_value(json!([
        { "type": "ADD_STAKEHOLDER", "input": { "id": "pm", "name": "Product" } },
        { "type": "ADD_REQUIREMENT", "input": { "id": "r1", "code": "REQ-1", "title": "Invoices", "priority": "MUST", "ownerId": "pm" } },
        { "type": "ADD_RISK", "input": { "id": "k1", "title": "Churn", "likelihood": "LOW", "impact": "HIGH" } }
    ]))
    .unwrap();
    for action in actions {
        runtime.dispatch(&mut doc, action).unwrap();
    }

    let state = serde_json::to_value(doc.global()).unwrap();
    assert_eq!(state["requirements"][0]["status"], "PROPOSED");
    assert_eq!(state["requirements"][0]["ownerId"], "pm");
    assert_eq!(state["risks"][0]["impact"], "HIGH");
}

#[test]
fn resource_template_rejects_unknown_action_types() {
    let parsed: Result<ResourceTemplateAction, _> = serde_json::from_value(json!({
        "type": "ADD_TIER",
        "input": { "id": "basic" }
    }));
    assert!(parsed.is_err());

    let doc = create_document::<ResourceTemplate>();
    assert_eq!(doc.header.document_type, ResourceTemplate::DOCUMENT_TYPE);
}
