mod catalog;
mod faq;
mod services;
mod template;

use super::actions::ResourceTemplateAction;
use super::errors::Result;
use super::models::ResourceTemplateState;

pub(super) fn reduce(state: &mut ResourceTemplateState, action: &ResourceTemplateAction) -> Result<()> {
    use ResourceTemplateAction::*;
    match action {
        UpdateTemplateInfo(input) => template::update_template_info(state, input),
        UpdateTemplateStatus(input) => template::update_template_status(state, input),
        SetOperator(input) => template::set_operator(state, input),
        SetTemplateId(input) => template::set_template_id(state, input),
        AddTargetAudience(input) => template::add_target_audience(state, input),
        RemoveTargetAudience(input) => template::remove_target_audience(state, input),

        SetFacetTarget(input) => catalog::set_facet_target(state, input),
        RemoveFacetTarget(input) => catalog::remove_facet_target(state, input),
        AddFacetOption(input) => catalog::add_facet_option(state, input),
        RemoveFacetOption(input) => catalog::remove_facet_option(state, input),
        SetSetupServices(input) => catalog::set_setup_services(state, input),
        SetRecurringServices(input) => catalog::set_recurring_services(state, input),

        AddService(input) => services::add_service(state, input),
        UpdateService(input) => services::update_service(state, input),
        DeleteService(input) => services::delete_service(state, input),
        AddOptionGroup(input) => services::add_option_group(state, input),
        UpdateOptionGroup(input) => services::update_option_group(state, input),
        DeleteOptionGroup(input) => services::delete_option_group(state, input),

        AddFaq(input) => faq::add_faq(state, input),
        UpdateFaq(input) => faq::update_faq(state, input),
        DeleteFaq(input) => faq::delete_faq(state, input),
    }
}
