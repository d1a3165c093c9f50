use tracing::debug;

use super::super::actions::{
    AddWorkItemInput, MoveWorkItemInput, RemoveWorkItemInput, SetWorkBreakdownDescriptionInput,
    SetWorkBreakdownTitleInput, SetWorkItemStatusInput, UpdateWorkItemInput,
};
use super::super::errors::{Result, WorkBreakdownError};
use super::super::models::{WorkBreakdownState, WorkItem, WorkItemId, WorkItemStatus};
use crate::common::update::{set_non_empty, set_nullable};
use crate::common::EntityVec;

pub fn set_title(state: &mut WorkBreakdownState, input: &SetWorkBreakdownTitleInput) -> Result<()> {
    state.title = input.title.clone();
    Ok(())
}

pub fn set_description(
    state: &mut WorkBreakdownState,
    input: &SetWorkBreakdownDescriptionInput,
) -> Result<()> {
    state.description = input.description.clone();
    Ok(())
}

pub fn add_work_item(state: &mut WorkBreakdownState, input: &AddWorkItemInput) -> Result<()> {
    if state.items.contains_id(&input.id) {
        return Err(WorkBreakdownError::DuplicateWorkItemId {
            id: input.id.clone(),
        });
    }
    if let Some(parent_id) = &input.parent_id {
        if !state.items.contains_id(parent_id) {
            return Err(WorkBreakdownError::AddWorkItemParentNotFound {
                parent_id: parent_id.clone(),
            });
        }
    }

    state.items.push(WorkItem {
        id: input.id.clone(),
        title: input.title.clone(),
        description: input.description.clone(),
        parent_id: input.parent_id.clone(),
        estimate_hours: input.estimate_hours,
        status: WorkItemStatus::Todo,
        assignee: input.assignee.clone(),
        dependencies: Vec::new(),
    });
    Ok(())
}

pub fn update_work_item(state: &mut WorkBreakdownState, input: &UpdateWorkItemInput) -> Result<()> {
    let item = state.items.find_by_id_mut(&input.id).ok_or_else(|| {
        WorkBreakdownError::UpdateWorkItemNotFound {
            id: input.id.clone(),
        }
    })?;
    set_non_empty(&mut item.title, &input.title);
    set_nullable(&mut item.description, &input.description);
    set_nullable(&mut item.estimate_hours, &input.estimate_hours);
    set_nullable(&mut item.assignee, &input.assignee);
    Ok(())
}

/// Marking an item DONE requires every dependency to be DONE already.
pub fn set_work_item_status(
    state: &mut WorkBreakdownState,
    input: &SetWorkItemStatusInput,
) -> Result<()> {
    let item = state.items.find_by_id(&input.id).ok_or_else(|| {
        WorkBreakdownError::SetStatusWorkItemNotFound {
            id: input.id.clone(),
        }
    })?;

    if input.status == WorkItemStatus::Done {
        let unfinished = item.dependencies.iter().find(|dependency| {
            state
                .items
                .find_by_id(dependency)
                .is_some_and(|d| d.status != WorkItemStatus::Done)
        });
        if let Some(blocked_by) = unfinished {
            return Err(WorkBreakdownError::DependenciesIncomplete {
                id: input.id.clone(),
                blocked_by: blocked_by.clone(),
            });
        }
    }

    if let Some(item) = state.items.find_by_id_mut(&input.id) {
        item.status = input.status;
    }
    Ok(())
}

pub fn move_work_item(state: &mut WorkBreakdownState, input: &MoveWorkItemInput) -> Result<()> {
    if !state.items.contains_id(&input.id) {
        return Err(WorkBreakdownError::MoveWorkItemNotFound {
            id: input.id.clone(),
        });
    }
    if let Some(parent_id) = &input.new_parent_id {
        if !state.items.contains_id(parent_id) {
            return Err(WorkBreakdownError::MoveWorkItemParentNotFound {
                parent_id: parent_id.clone(),
            });
        }
        if is_ancestor_or_self(&state.items, &input.id, parent_id) {
            return Err(WorkBreakdownError::MoveWorkItemCycle {
                id: input.id.clone(),
                parent_id: parent_id.clone(),
            });
        }
    }

    if let Some(item) = state.items.find_by_id_mut(&input.id) {
        item.parent_id = input.new_parent_id.clone();
    }
    Ok(())
}

/// Removes the item, lifts its children to the top level and drops it from
/// every dependency list.
pub fn remove_work_item(state: &mut WorkBreakdownState, input: &RemoveWorkItemInput) -> Result<()> {
    if state.items.remove_by_id(&input.id).is_none() {
        return Ok(());
    }

    let mut orphaned = 0usize;
    for item in &mut state.items {
        if item.parent_id.as_ref() == Some(&input.id) {
            item.parent_id = None;
            orphaned += 1;
        }
        item.dependencies.retain(|dependency| dependency != &input.id);
    }
    debug!(work_item_id = %input.id, orphaned, "removed work item");
    Ok(())
}

/// Walks the parent chain from `node` and reports whether `candidate` is on it.
///
/// The walk is bounded by the item count so a corrupt chain cannot spin.
fn is_ancestor_or_self(items: &[WorkItem], candidate: &WorkItemId, node: &WorkItemId) -> bool {
    let mut current = Some(node);
    for _ in 0..=items.len() {
        let Some(id) = current else {
            return false;
        };
        if id == candidate {
            return true;
        }
        current = items
            .iter()
            .find(|item| &item.id == id)
            .and_then(|item| item.parent_id.as_ref());
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, parent: Option<&str>) -> WorkItem {
        WorkItem {
            id: id.into(),
            title: id.into(),
            description: None,
            parent_id: parent.map(Into::into),
            estimate_hours: None,
            status: WorkItemStatus::Todo,
            assignee: None,
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn ancestor_walk() {
        let items = vec![item("root", None), item("mid", Some("root")), item("leaf", Some("mid"))];

        assert!(is_ancestor_or_self(&items, &"root".into(), &"leaf".into()));
        assert!(is_ancestor_or_self(&items, &"leaf".into(), &"leaf".into()));
        assert!(!is_ancestor_or_self(&items, &"leaf".into(), &"root".into()));
    }

    #[test]
    fn ancestor_walk_terminates_on_corrupt_chain() {
        let items = vec![item("a", Some("b")), item("b", Some("a"))];
        assert!(!is_ancestor_or_self(&items, &"z".into(), &"a".into()));
    }
}
