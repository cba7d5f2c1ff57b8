use super::MainGenerator;
use crate::{
    entity::{EntitiesConfigurations, EntityConfiguration, IdMappingData},
    reader::PropertyAuditingData,
    Config, Error, Result,
};

/// State of one metadata build pass.
///
/// Each pass owns its registries, so several independent models can be
/// built in the same process.
#[derive(Debug, Default)]
pub struct AuditContext {
    pub config: Config,

    /// Audited entities
    pub entities: EntitiesConfigurations,

    /// Entities that are not audited but may still be referenced by relations
    /// declaring `RelationTargetAuditMode::NotAudited`
    pub not_audited_entities: EntitiesConfigurations,
}

impl AuditContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers an audited entity with its identifier mapping.
    pub fn audit_entity(&mut self, entity_name: &str, id_mapping: IdMappingData) -> &mut Self {
        self.entities
            .insert(entity_name, EntityConfiguration::new(id_mapping));
        self
    }

    /// Registers an entity that is mapped but not audited.
    pub fn not_audited_entity(&mut self, entity_name: &str, id_mapping: IdMappingData) -> &mut Self {
        self.not_audited_entities
            .insert(entity_name, EntityConfiguration::new(id_mapping));
        self
    }
}

impl MainGenerator for AuditContext {
    fn config(&self) -> &Config {
        &self.config
    }

    fn referenced_id_mapping(
        &self,
        entity_name: &str,
        referenced_entity_name: &str,
        property: &PropertyAuditingData,
        allow_not_audited_target: bool,
    ) -> Result<IdMappingData> {
        let configuration = match self.entities.get(referenced_entity_name) {
            Some(configuration) => configuration,
            None => self
                .not_audited_entities
                .get(referenced_entity_name)
                .filter(|_| {
                    allow_not_audited_target && !property.is_relation_target_audited()
                })
                .ok_or_else(|| {
                    Error::not_audited_relation(
                        entity_name,
                        &property.name,
                        referenced_entity_name,
                        allow_not_audited_target,
                    )
                })?,
        };

        configuration
            .id_mapping_data()
            .cloned()
            .ok_or_else(|| {
                Error::not_audited_relation(
                    entity_name,
                    &property.name,
                    referenced_entity_name,
                    false,
                )
            })
    }

    fn entity_configuration(&self, entity_name: &str) -> Option<&EntityConfiguration> {
        self.entities.get(entity_name)
    }

    fn entity_configuration_mut(&mut self, entity_name: &str) -> Option<&mut EntityConfiguration> {
        self.entities.get_mut(entity_name)
    }
}
