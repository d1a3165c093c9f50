//! ServiceOffering integration tests: dispatch through the runtime and
//! check state, logs and wire shapes end to end.

mod common;

use common::*;
use document_models::common::facet_target::{AddFacetOptionInput, SetFacetTargetInput};
use document_models::common::{default_count, PublicationStatus};
use document_models::domains::service_offering::*;
use document_runtime::testing::{day, DocumentTest};
use document_runtime::{
    assert_operations, create_document, telemetry, Document, DocumentRuntime, Scope,
};
use serde_json::json;

#[test]
fn add_then_delete_service() {
    telemetry::init_tracing();
    let runtime = DocumentRuntime::default();
    let mut doc = create_document::<ServiceOffering>();

    runtime
        .dispatch(&mut doc, add_service("svc-1", "Hosting", 1))
        .unwrap();

    let state = serde_json::to_value(doc.global()).unwrap();
    assert_eq!(state["services"].as_array().unwrap().len(), 1);
    assert_eq!(state["services"][0]["facetBindings"], json!([]));
    assert_eq!(state["lastModified"], "2024-01-01T00:00:00Z");

    runtime.dispatch(&mut doc, delete_service("svc-1", 2)).unwrap();

    assert!(doc.global().services.is_empty());
    assert_eq!(doc.global().last_modified, Some(day(2)));
    assert_eq!(doc.operations_for(Scope::Global).len(), 2);
    assert_eq!(doc.revision(Scope::Global), 2);
}

#[test]
fn silent_miss_update_leaves_state_deep_equal() {
    DocumentTest::<ServiceOffering>::new()
        .given(add_service("svc-1", "Hosting", 1))
        .then(ServiceOfferingAction::update_service(UpdateServiceInput {
            id: "missing".into(),
            title: Some("Renamed".into()),
            description: Some(Some("ignored".into())),
            display_order: Some(Some(3)),
            service_group_id: Some(None),
            is_setup_formation: Some(true),
            option_group_id: None,
            last_modified: day(9),
        }))
        .expect_ok()
        .expect_unchanged()
        .assert_state(|s| s.last_modified == Some(day(1)));
}

#[test]
fn pricing_option_on_missing_tier_is_rejected_without_trace() {
    let runtime = DocumentRuntime::default();
    let mut doc = create_document::<ServiceOffering>();
    runtime.dispatch(&mut doc, add_tier("basic")).unwrap();
    let before = doc.clone();

    let err = runtime
        .dispatch(&mut doc, add_pricing_option("premium", "monthly", false))
        .unwrap_err();

    assert_eq!(err.code(), Some("ADD_PRICING_OPTION_TIER_NOT_FOUND"));
    assert_eq!(doc.state, before.state);
    assert_eq!(doc.header, before.header);
    assert_eq!(doc.operations_for(Scope::Global).len(), 1);
}

#[test]
fn first_pricing_option_becomes_default() {
    DocumentTest::<ServiceOffering>::new()
        .given(add_tier("basic"))
        .then(add_pricing_option("basic", "monthly", false))
        .then(add_pricing_option("basic", "annual", false))
        .expect_ok()
        .assert_state(|s| {
            let options = &s.tiers[0].pricing_options;
            options[0].is_default && !options[1].is_default
        })
        .then(remove_pricing_option("basic", "monthly"))
        .assert_state(|s| s.tiers[0].pricing_options[0].is_default);
}

#[test]
fn random_pricing_sequences_keep_at_most_one_default() {
    let mut rng = fastrand::Rng::with_seed(7);
    let runtime = DocumentRuntime::default();
    let tiers = ["basic", "pro"];
    let options = ["monthly", "quarterly", "annual", "once"];

    let mut doc = create_document::<ServiceOffering>();
    for tier in tiers {
        runtime.dispatch(&mut doc, add_tier(tier)).unwrap();
    }

    for _ in 0..400 {
        let tier = tiers[rng.usize(..tiers.len())];
        let option = options[rng.usize(..options.len())];
        let action = match rng.u8(..3) {
            0 => add_pricing_option(tier, option, rng.bool()),
            1 => make_default(tier, option),
            _ => remove_pricing_option(tier, option),
        };
        // Duplicates and misses are expected; only the invariant matters.
        let _ = runtime.dispatch(&mut doc, action);

        for tier in &doc.global().tiers {
            assert!(default_count(&tier.pricing_options) <= 1);
            if !tier.pricing_options.is_empty() {
                assert_eq!(default_count(&tier.pricing_options), 1);
            }
        }
    }
}

#[test]
fn deleting_group_detaches_every_member() {
    let mut doc = create_document::<ServiceOffering>();
    let runtime = DocumentRuntime::default();
    runtime.dispatch(&mut doc, add_group("ops")).unwrap();
    runtime.dispatch(&mut doc, add_group("dev")).unwrap();
    for i in 0..12 {
        let group = if i % 3 == 0 { "dev" } else { "ops" };
        runtime
            .dispatch(&mut doc, add_service_in_group(&format!("svc-{i}"), group))
            .unwrap();
    }

    assert_operations!(
        doc,
        ServiceOfferingAction::delete_service_group(DeleteServiceGroupInput {
            id: "ops".into(),
            last_modified: day(4),
        }) => ok,
        ServiceOfferingAction::delete_service_group(DeleteServiceGroupInput {
            id: "ops".into(),
            last_modified: day(5),
        }) => "DELETE_SERVICE_GROUP_NOT_FOUND",
    );

    let state = doc.global();
    assert_eq!(state.services.len(), 12);
    assert_eq!(state.service_groups.len(), 1);
    assert!(state
        .services
        .iter()
        .all(|s| s.service_group_id.as_ref().map_or(true, |g| g == "dev")));
    assert_eq!(
        state
            .services
            .iter()
            .filter(|s| s.service_group_id.is_none())
            .count(),
        8
    );
}

#[test]
fn reorder_service_groups() {
    let mut doc = create_document::<ServiceOffering>();
    assert_operations!(
        doc,
        add_group("g1") => ok,
        add_group("g2") => ok,
        add_group("g3") => ok,
        reorder_groups(&["g2", "g1", "g3"]) => ok,
        reorder_groups(&["g2", "g9"]) => "REORDER_SERVICE_GROUPS_UNKNOWN_ID",
        reorder_groups(&["g1", "g1"]) => "REORDER_SERVICE_GROUPS_DUPLICATE_ID",
    );

    let groups: Vec<(&str, u32)> = doc
        .global()
        .service_groups
        .iter()
        .map(|g| (g.id.as_str(), g.display_order))
        .collect();
    assert_eq!(groups, vec![("g2", 0), ("g1", 1), ("g3", 2)]);
}

#[test]
fn add_facet_option_is_idempotent() {
    let add_option = || {
        ServiceOfferingAction::add_facet_option(AddFacetOptionInput {
            category_key: "region".into(),
            option_id: "eu".into(),
            last_modified: day(2),
        })
    };

    DocumentTest::<ServiceOffering>::new()
        .given(add_option())
        .expect_code("ADD_FACET_OPTION_TARGET_NOT_FOUND")
        .then(ServiceOfferingAction::set_facet_target(SetFacetTargetInput {
            id: "target-1".into(),
            category_key: "region".into(),
            category_label: "Region".into(),
            selected_options: vec![],
            last_modified: day(1),
        }))
        .then(add_option())
        .then(add_option())
        .expect_ok()
        .assert_state(|s| s.facet_targets[0].selected_options == vec!["eu"]);
}

#[test]
fn facet_target_for_new_category_needs_a_fresh_id() {
    let target = |id: &str, key: &str| {
        ServiceOfferingAction::set_facet_target(SetFacetTargetInput {
            id: id.into(),
            category_key: key.into(),
            category_label: key.to_uppercase(),
            selected_options: vec!["any".into()],
            last_modified: day(1),
        })
    };

    let mut doc = create_document::<ServiceOffering>();
    assert_operations!(
        doc,
        target("t1", "region") => ok,
        target("t1", "language") => "DUPLICATE_FACET_TARGET_ID",
        target("t2", "language") => ok,
        target("t1", "language") => ok,
    );

    let ids: Vec<(&str, &str)> = doc
        .global()
        .facet_targets
        .iter()
        .map(|t| (t.id.as_str(), t.category_key.as_str()))
        .collect();
    assert_eq!(ids, vec![("t1", "region"), ("t2", "language")]);
}

#[test]
fn update_offering_info_is_tri_state_on_the_wire() {
    let runtime = DocumentRuntime::default();
    let mut doc = create_document::<ServiceOffering>();

    let apply = |doc: &mut Document<ServiceOffering>, input: serde_json::Value| {
        let action: ServiceOfferingAction =
            serde_json::from_value(json!({ "type": "UPDATE_OFFERING_INFO", "input": input }))
                .unwrap();
        runtime.dispatch(doc, action).unwrap();
    };

    apply(
        &mut doc,
        json!({ "title": "Hosting", "description": "x", "lastModified": "2024-01-01T00:00:00Z" }),
    );
    assert_eq!(doc.global().description.as_deref(), Some("x"));

    // Absent: unchanged.
    apply(&mut doc, json!({ "lastModified": "2024-01-02T00:00:00Z" }));
    assert_eq!(doc.global().description.as_deref(), Some("x"));
    assert_eq!(doc.global().title, "Hosting");

    // Explicit null: cleared.
    apply(
        &mut doc,
        json!({ "description": null, "lastModified": "2024-01-03T00:00:00Z" }),
    );
    assert_eq!(doc.global().description, None);
    assert_eq!(doc.global().last_modified, Some(day(3)));
}

#[test]
fn template_selection_is_compare_and_swap() {
    let select = |id: &str| {
        ServiceOfferingAction::select_resource_template(SelectResourceTemplateInput {
            resource_template_id: id.into(),
            last_modified: day(1),
        })
    };
    let change = |from: &str, to: &str| {
        ServiceOfferingAction::change_resource_template(ChangeResourceTemplateInput {
            previous_template_id: from.into(),
            new_template_id: to.into(),
            last_modified: day(2),
        })
    };

    let mut doc = create_document::<ServiceOffering>();
    assert_operations!(
        doc,
        change("tpl-a", "tpl-b") => "TEMPLATE_MISMATCH",
        select("tpl-a") => ok,
        select("tpl-b") => "TEMPLATE_ALREADY_SELECTED",
        change("tpl-x", "tpl-b") => "TEMPLATE_MISMATCH",
        change("tpl-a", "tpl-b") => ok,
    );
    assert_eq!(doc.global().resource_template_id.as_deref(), Some("tpl-b"));
}

#[test]
fn status_changes_are_logged_with_wire_names() {
    let runtime = DocumentRuntime::default();
    let mut doc = create_document::<ServiceOffering>();
    runtime
        .dispatch(
            &mut doc,
            ServiceOfferingAction::update_offering_status(UpdateOfferingStatusInput {
                status: PublicationStatus::ComingSoon,
                last_modified: day(1),
            }),
        )
        .unwrap();

    let logged = serde_json::to_value(&doc.operations_for(Scope::Global)[0].action).unwrap();
    assert_eq!(
        logged,
        json!({
            "type": "UPDATE_OFFERING_STATUS",
            "input": { "status": "COMING_SOON", "lastModified": "2024-01-01T00:00:00Z" }
        })
    );
}
