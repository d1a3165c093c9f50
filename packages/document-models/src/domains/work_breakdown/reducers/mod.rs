mod dependencies;
mod items;
mod view;

use document_runtime::DocumentState;

use super::actions::WorkBreakdownAction;
use super::errors::Result;
use super::models::{WorkBreakdownLocalState, WorkBreakdownState};

pub(super) fn reduce(
    state: &mut DocumentState<WorkBreakdownState, WorkBreakdownLocalState>,
    action: &WorkBreakdownAction,
) -> Result<()> {
    use WorkBreakdownAction::*;
    let global = &mut state.global;
    match action {
        SetWorkBreakdownTitle(input) => items::set_title(global, input),
        SetWorkBreakdownDescription(input) => items::set_description(global, input),
        AddWorkItem(input) => items::add_work_item(global, input),
        UpdateWorkItem(input) => items::update_work_item(global, input),
        SetWorkItemStatus(input) => items::set_work_item_status(global, input),
        MoveWorkItem(input) => items::move_work_item(global, input),
        RemoveWorkItem(input) => items::remove_work_item(global, input),

        AddDependency(input) => dependencies::add_dependency(global, input),
        RemoveDependency(input) => dependencies::remove_dependency(global, input),

        CollapseWorkItem(input) => view::collapse_work_item(&mut state.local, input),
        ExpandWorkItem(input) => view::expand_work_item(&mut state.local, input),
    }
}
