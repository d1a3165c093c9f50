pub mod collections;
pub mod defaults;
pub mod facet_target;
pub mod id;
pub mod option_group;
pub mod reorder;
pub mod serde_ext;
pub mod types;
pub mod update;

pub use collections::{Entity, EntityVec};
pub use defaults::{clear_defaults, default_count, promote_first, Defaultable};
pub use facet_target::{FacetTarget, FacetTargetId};
pub use id::Oid;
pub use option_group::{OptionGroup, OptionGroupId};
pub use reorder::{reorder, Ordered, ReorderError};
pub use serde_ext::nullable;
pub use types::*;
