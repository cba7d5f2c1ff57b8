//! Audit metadata generation for to-one relations.

mod context;
pub use context::AuditContext;

mod to_one;
pub use to_one::ToOneRelationMetadataGenerator;

mod tools;
pub use tools::{ignore_not_found, to_one_relation_prefix};

use crate::{
    entity::{EntityConfiguration, IdMappingData},
    reader::PropertyAuditingData,
    Config, Result,
};

/// The metadata build pass the relation generator works within.
///
/// It owns the audit configuration of every entity and knows how each
/// entity's identifier is mapped.
pub trait MainGenerator {
    fn config(&self) -> &Config;

    /// Identifier mapping of `referenced_entity_name`, as referenced from the
    /// property `property` of `entity_name`.
    ///
    /// Fails with a not-audited error when the referenced entity is not
    /// audited, unless `allow_not_audited_target` is set, the entity is
    /// registered as not audited and the property declares its target as not
    /// audited.
    fn referenced_id_mapping(
        &self,
        entity_name: &str,
        referenced_entity_name: &str,
        property: &PropertyAuditingData,
        allow_not_audited_target: bool,
    ) -> Result<IdMappingData>;

    /// Audit configuration of an audited entity.
    fn entity_configuration(&self, entity_name: &str) -> Option<&EntityConfiguration>;

    fn entity_configuration_mut(&mut self, entity_name: &str) -> Option<&mut EntityConfiguration>;
}
