// Document Models - operation reducers for the service-catalog documents.
//
// Each domain declares a state shape, a closed action enum, an error enum
// with stable codes, and pure reducers. Documents are driven through
// document_runtime::DocumentRuntime; nothing in this crate does IO.
//
// Domains live in domains/*/ as models.rs, actions.rs, errors.rs and reducers/.

pub mod common;
pub mod domains;

pub use domains::business_analysis::{BusinessAnalysis, BusinessAnalysisAction, BusinessAnalysisError};
pub use domains::facet::{Facet, FacetAction, FacetError};
pub use domains::resource_template::{
    ResourceTemplate, ResourceTemplateAction, ResourceTemplateError,
};
pub use domains::service_offering::{
    ServiceOffering, ServiceOfferingAction, ServiceOfferingError,
};
pub use domains::subscription_instance::{
    SubscriptionInstance, SubscriptionInstanceAction, SubscriptionInstanceError,
};
pub use domains::work_breakdown::{WorkBreakdown, WorkBreakdownAction, WorkBreakdownError};
