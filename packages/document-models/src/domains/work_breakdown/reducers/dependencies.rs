use super::super::actions::{AddDependencyInput, RemoveDependencyInput};
use super::super::errors::{Result, WorkBreakdownError};
use super::super::models::{WorkBreakdownState, WorkItem, WorkItemId, WorkItemStatus};
use crate::common::EntityVec;

pub fn add_dependency(state: &mut WorkBreakdownState, input: &AddDependencyInput) -> Result<()> {
    if input.item_id == input.depends_on_id {
        return Err(WorkBreakdownError::SelfDependency {
            id: input.item_id.clone(),
        });
    }
    if !state.items.contains_id(&input.depends_on_id) {
        return Err(WorkBreakdownError::AddDependencyTargetNotFound {
            id: input.depends_on_id.clone(),
        });
    }
    let item = state.items.find_by_id(&input.item_id).ok_or_else(|| {
        WorkBreakdownError::AddDependencyItemNotFound {
            id: input.item_id.clone(),
        }
    })?;
    if item.dependencies.contains(&input.depends_on_id) {
        return Ok(());
    }
    if depends_on(&state.items, &input.depends_on_id, &input.item_id) {
        return Err(WorkBreakdownError::AddDependencyCycle {
            id: input.item_id.clone(),
            depends_on_id: input.depends_on_id.clone(),
        });
    }

    // A DONE item must not gain an unfinished dependency.
    if item.status == WorkItemStatus::Done {
        let target_done = state
            .items
            .find_by_id(&input.depends_on_id)
            .is_some_and(|target| target.status == WorkItemStatus::Done);
        if !target_done {
            return Err(WorkBreakdownError::DependenciesIncomplete {
                id: input.item_id.clone(),
                blocked_by: input.depends_on_id.clone(),
            });
        }
    }

    if let Some(item) = state.items.find_by_id_mut(&input.item_id) {
        item.dependencies.push(input.depends_on_id.clone());
    }
    Ok(())
}

pub fn remove_dependency(state: &mut WorkBreakdownState, input: &RemoveDependencyInput) -> Result<()> {
    if let Some(item) = state.items.find_by_id_mut(&input.item_id) {
        item.dependencies
            .retain(|dependency| dependency != &input.depends_on_id);
    }
    Ok(())
}

/// Whether `from` reaches `target` by following dependency edges.
fn depends_on(items: &[WorkItem], from: &WorkItemId, target: &WorkItemId) -> bool {
    let mut visited: Vec<&WorkItemId> = Vec::new();
    let mut pending = vec![from];
    while let Some(id) = pending.pop() {
        if id == target {
            return true;
        }
        if visited.contains(&id) {
            continue;
        }
        visited.push(id);
        if let Some(item) = items.iter().find(|item| &item.id == id) {
            pending.extend(item.dependencies.iter());
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, dependencies: &[&str]) -> WorkItem {
        WorkItem {
            id: id.into(),
            title: id.into(),
            description: None,
            parent_id: None,
            estimate_hours: None,
            status: WorkItemStatus::Todo,
            assignee: None,
            dependencies: dependencies.iter().map(|d| (*d).into()).collect(),
        }
    }

    #[test]
    fn follows_transitive_edges() {
        let items = vec![item("a", &["b"]), item("b", &["c"]), item("c", &[])];
        assert!(depends_on(&items, &"a".into(), &"c".into()));
        assert!(!depends_on(&items, &"c".into(), &"a".into()));
    }

    #[test]
    fn terminates_on_existing_cycle() {
        let items = vec![item("a", &["b"]), item("b", &["a"])];
        assert!(!depends_on(&items, &"a".into(), &"z".into()));
    }
}
