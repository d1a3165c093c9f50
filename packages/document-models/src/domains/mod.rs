pub mod business_analysis;
pub mod facet;
pub mod resource_template;
pub mod service_offering;
pub mod subscription_instance;
pub mod work_breakdown;
