//! WorkBreakdown domain - a tree of work items with dependencies.
//!
//! This is the one document type with local state: which tree nodes are
//! collapsed is kept per installation and never synchronized.

pub mod actions;
pub mod errors;
pub mod models;
mod reducers;

pub use actions::*;
pub use errors::WorkBreakdownError;
pub use models::*;

use document_runtime::{DocumentModel, DocumentState};

/// The `powerhouse/work-breakdown` document type.
pub struct WorkBreakdown;

impl DocumentModel for WorkBreakdown {
    const DOCUMENT_TYPE: &'static str = "powerhouse/work-breakdown";
    type Global = WorkBreakdownState;
    type Local = WorkBreakdownLocalState;
    type Action = WorkBreakdownAction;
    type Error = WorkBreakdownError;

    fn initial_state() -> DocumentState<WorkBreakdownState, WorkBreakdownLocalState> {
        DocumentState::default()
    }

    fn reduce(
        state: &mut DocumentState<WorkBreakdownState, WorkBreakdownLocalState>,
        action: &WorkBreakdownAction,
    ) -> Result<(), WorkBreakdownError> {
        reducers::reduce(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_runtime::testing::DocumentTest;
    use document_runtime::Scope;
    use serde_json::json;

    fn add(id: &str, parent: Option<&str>) -> WorkBreakdownAction {
        WorkBreakdownAction::add_work_item(AddWorkItemInput {
            id: id.into(),
            title: format!("Task {id}"),
            description: None,
            parent_id: parent.map(Into::into),
            estimate_hours: Some(4.0),
            assignee: None,
        })
    }

    fn status(id: &str, status: WorkItemStatus) -> WorkBreakdownAction {
        WorkBreakdownAction::set_work_item_status(SetWorkItemStatusInput {
            id: id.into(),
            status,
        })
    }

    fn depend(item: &str, on: &str) -> WorkBreakdownAction {
        WorkBreakdownAction::add_dependency(AddDependencyInput {
            item_id: item.into(),
            depends_on_id: on.into(),
        })
    }

    fn move_to(id: &str, parent: Option<&str>) -> WorkBreakdownAction {
        WorkBreakdownAction::move_work_item(MoveWorkItemInput {
            id: id.into(),
            new_parent_id: parent.map(Into::into),
        })
    }

    fn find<'a>(state: &'a WorkBreakdownState, id: &str) -> &'a WorkItem {
        state.items.iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn initial_wire_shape() {
        let state = WorkBreakdown::initial_state();
        assert_eq!(
            serde_json::to_value(&state.global).unwrap(),
            json!({ "title": "", "description": null, "items": [] })
        );
        assert_eq!(
            serde_json::to_value(&state.local).unwrap(),
            json!({ "collapsedItemIds": [] })
        );
    }

    #[test]
    fn add_work_item_checks_id_and_parent() {
        DocumentTest::<WorkBreakdown>::new()
            .given(add("design", None))
            .expect_ok()
            .assert_state(|s| find(s, "design").status == WorkItemStatus::Todo)
            .then(add("design", None))
            .expect_code("DUPLICATE_WORK_ITEM_ID")
            .then(add("mockups", Some("research")))
            .expect_code("ADD_WORK_ITEM_PARENT_NOT_FOUND")
            .expect_unchanged();
    }

    #[test]
    fn done_requires_finished_dependencies() {
        DocumentTest::<WorkBreakdown>::new()
            .given(add("design", None))
            .then(add("build", None))
            .then(depend("build", "design"))
            .then(status("build", WorkItemStatus::Done))
            .expect_err(|e| {
                matches!(e, WorkBreakdownError::DependenciesIncomplete { blocked_by, .. } if blocked_by == "design")
            })
            .expect_unchanged()
            .then(status("build", WorkItemStatus::InProgress))
            .expect_ok()
            .then(status("design", WorkItemStatus::Done))
            .then(status("build", WorkItemStatus::Done))
            .expect_ok()
            .assert_state(|s| find(s, "build").status == WorkItemStatus::Done);
    }

    #[test]
    fn move_rejects_cycles() {
        DocumentTest::<WorkBreakdown>::new()
            .given(add("epic", None))
            .then(add("story", Some("epic")))
            .then(add("task", Some("story")))
            .then(move_to("epic", Some("task")))
            .expect_code("MOVE_WORK_ITEM_CYCLE")
            .expect_unchanged()
            .then(move_to("epic", Some("epic")))
            .expect_code("MOVE_WORK_ITEM_CYCLE")
            .then(move_to("task", Some("ghost")))
            .expect_code("MOVE_WORK_ITEM_PARENT_NOT_FOUND")
            .then(move_to("ghost", None))
            .expect_code("MOVE_WORK_ITEM_NOT_FOUND")
            .then(move_to("task", None))
            .expect_ok()
            .assert_state(|s| find(s, "task").parent_id.is_none());
    }

    #[test]
    fn remove_lifts_children_and_drops_dependencies() {
        DocumentTest::<WorkBreakdown>::new()
            .given(add("epic", None))
            .then(add("story", Some("epic")))
            .then(add("qa", None))
            .then(depend("qa", "epic"))
            .then(WorkBreakdownAction::remove_work_item(RemoveWorkItemInput {
                id: "epic".into(),
            }))
            .expect_ok()
            .assert_state(|s| {
                s.items.len() == 2
                    && find(s, "story").parent_id.is_none()
                    && find(s, "qa").dependencies.is_empty()
            })
            .then(WorkBreakdownAction::remove_work_item(RemoveWorkItemInput {
                id: "epic".into(),
            }))
            .expect_ok()
            .expect_unchanged();
    }

    #[test]
    fn dependencies_are_idempotent_and_checked() {
        DocumentTest::<WorkBreakdown>::new()
            .given(add("a", None))
            .then(add("b", None))
            .then(depend("a", "b"))
            .then(depend("a", "b"))
            .expect_ok()
            .assert_state(|s| find(s, "a").dependencies.len() == 1)
            .then(depend("a", "a"))
            .expect_code("SELF_DEPENDENCY")
            .then(depend("a", "z"))
            .expect_code("ADD_DEPENDENCY_TARGET_NOT_FOUND")
            .then(depend("z", "a"))
            .expect_code("ADD_DEPENDENCY_ITEM_NOT_FOUND")
            .then(WorkBreakdownAction::remove_dependency(RemoveDependencyInput {
                item_id: "a".into(),
                depends_on_id: "b".into(),
            }))
            .expect_ok()
            .assert_state(|s| find(s, "a").dependencies.is_empty());
    }

    #[test]
    fn dependencies_cannot_form_a_cycle() {
        DocumentTest::<WorkBreakdown>::new()
            .given(add("a", None))
            .then(add("b", None))
            .then(add("c", None))
            .then(depend("a", "b"))
            .then(depend("b", "c"))
            .expect_ok()
            .then(depend("b", "a"))
            .expect_code("ADD_DEPENDENCY_CYCLE")
            .expect_unchanged()
            .then(depend("c", "a"))
            .expect_code("ADD_DEPENDENCY_CYCLE")
            .expect_unchanged()
            .then(depend("a", "c"))
            .expect_ok()
            .assert_state(|s| find(s, "a").dependencies.len() == 2);
    }

    #[test]
    fn done_item_cannot_gain_unfinished_dependency() {
        DocumentTest::<WorkBreakdown>::new()
            .given(add("ship", None))
            .then(add("docs", None))
            .then(add("review", None))
            .then(status("ship", WorkItemStatus::Done))
            .then(depend("ship", "docs"))
            .expect_err(|e| {
                matches!(e, WorkBreakdownError::DependenciesIncomplete { id, blocked_by } if id == "ship" && blocked_by == "docs")
            })
            .expect_unchanged()
            .then(status("review", WorkItemStatus::Done))
            .then(depend("ship", "review"))
            .expect_ok()
            .assert_state(|s| find(s, "ship").dependencies == vec!["review"]);
    }

    #[test]
    fn collapse_lives_in_local_scope() {
        let collapse = || {
            WorkBreakdownAction::collapse_work_item(CollapseWorkItemInput { id: "epic".into() })
        };

        let test = DocumentTest::<WorkBreakdown>::new()
            .given(add("epic", None))
            .then(collapse())
            .then(collapse())
            .expect_ok()
            .assert_local(|l| l.collapsed_item_ids.len() == 1)
            .then(WorkBreakdownAction::expand_work_item(ExpandWorkItemInput {
                id: "epic".into(),
            }))
            .assert_local(|l| l.collapsed_item_ids.is_empty());

        let document = test.document();
        assert_eq!(document.operations_for(Scope::Global).len(), 1);
        assert_eq!(document.operations_for(Scope::Local).len(), 3);
    }
}
