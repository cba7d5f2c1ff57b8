use super::{IdMappingData, RelationDescription, RelationType};
use crate::{id::IdMapper, Error, Result};
use indexmap::IndexMap;

/// Audit configuration of one entity, accumulated while its properties are
/// processed.
#[derive(Debug, Clone, Default)]
pub struct EntityConfiguration {
    /// Identifier mapping; absent until the entity's identifier is mapped
    pub id_mapping_data: Option<IdMappingData>,

    /// Relations keyed by property name, in registration order
    relations: IndexMap<String, RelationDescription>,
}

/// Entity configurations keyed by entity name.
#[derive(Debug, Clone, Default)]
pub struct EntitiesConfigurations {
    entities: IndexMap<String, EntityConfiguration>,
}

impl EntityConfiguration {
    pub fn new(id_mapping_data: IdMappingData) -> Self {
        Self {
            id_mapping_data: Some(id_mapping_data),
            relations: IndexMap::new(),
        }
    }

    pub fn id_mapping_data(&self) -> Option<&IdMappingData> {
        self.id_mapping_data.as_ref()
    }

    /// Fails if a relation is already registered under `property`.
    pub fn check_relation_free(&self, property: &str) -> Result<()> {
        if self.relations.contains_key(property) {
            return Err(Error::invalid_mapping(format!(
                "relation `{property}` is already registered"
            )));
        }
        Ok(())
    }

    pub fn add_to_one_relation(
        &mut self,
        from_property_name: &str,
        to_entity_name: &str,
        id_mapper: IdMapper,
        insertable: bool,
        ignore_not_found: bool,
    ) -> Result<()> {
        self.add_relation(RelationDescription {
            from_property_name: from_property_name.to_string(),
            relation_type: RelationType::ToOne,
            to_entity_name: to_entity_name.to_string(),
            mapped_by_property_name: None,
            id_mapper,
            insertable,
            ignore_not_found,
        })
    }

    pub fn add_to_one_not_owning_relation(
        &mut self,
        from_property_name: &str,
        mapped_by_property_name: &str,
        to_entity_name: &str,
        id_mapper: IdMapper,
        ignore_not_found: bool,
    ) -> Result<()> {
        self.add_relation(RelationDescription {
            from_property_name: from_property_name.to_string(),
            relation_type: RelationType::ToOneNotOwning,
            to_entity_name: to_entity_name.to_string(),
            mapped_by_property_name: Some(mapped_by_property_name.to_string()),
            id_mapper,
            insertable: true,
            ignore_not_found,
        })
    }

    fn add_relation(&mut self, relation: RelationDescription) -> Result<()> {
        self.check_relation_free(&relation.from_property_name)?;
        self.relations
            .insert(relation.from_property_name.clone(), relation);
        Ok(())
    }

    pub fn relation(&self, property: &str) -> Option<&RelationDescription> {
        self.relations.get(property)
    }

    pub fn relations(&self) -> impl Iterator<Item = &RelationDescription> {
        self.relations.values()
    }

    pub fn is_relation(&self, property: &str) -> bool {
        self.relations.contains_key(property)
    }
}

impl EntitiesConfigurations {
    pub fn insert(&mut self, entity_name: impl Into<String>, configuration: EntityConfiguration) {
        self.entities.insert(entity_name.into(), configuration);
    }

    pub fn get(&self, entity_name: &str) -> Option<&EntityConfiguration> {
        self.entities.get(entity_name)
    }

    pub fn get_mut(&mut self, entity_name: &str) -> Option<&mut EntityConfiguration> {
        self.entities.get_mut(entity_name)
    }
}
