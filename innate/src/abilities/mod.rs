mod ability;
mod builder;
mod catalog;
mod registry;

pub use ability::{
    AbilityDefinition,
    AttributeSpec,
};
pub use builder::AbilityBuilder;
pub use catalog::{
    standard_definitions,
    standard_registry,
};
pub use registry::AbilityRegistry;
