//! Local-scope reducers. Ids are not checked against the global items.

use super::super::actions::{CollapseWorkItemInput, ExpandWorkItemInput};
use super::super::errors::Result;
use super::super::models::WorkBreakdownLocalState;

pub fn collapse_work_item(
    local: &mut WorkBreakdownLocalState,
    input: &CollapseWorkItemInput,
) -> Result<()> {
    if !local.collapsed_item_ids.contains(&input.id) {
        local.collapsed_item_ids.push(input.id.clone());
    }
    Ok(())
}

pub fn expand_work_item(local: &mut WorkBreakdownLocalState, input: &ExpandWorkItemInput) -> Result<()> {
    local.collapsed_item_ids.retain(|id| id != &input.id);
    Ok(())
}
