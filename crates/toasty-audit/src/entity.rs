//! Per-entity audit configuration.

mod configuration;
pub use configuration::{EntitiesConfigurations, EntityConfiguration};

mod id_mapping;
pub use id_mapping::IdMappingData;

mod property_data;
pub use property_data::PropertyData;

mod relation;
pub use relation::{RelationDescription, RelationType};
