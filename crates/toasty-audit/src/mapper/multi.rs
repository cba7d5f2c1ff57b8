use super::{CompositeMapperBuilder, PropertyMapper, Restored, SinglePropertyMapper};
use crate::{entity::PropertyData, Record, Value};
use indexmap::IndexMap;

/// The mappers of all audited properties of one entity, keyed by property
/// name.
#[derive(Debug, Clone, Default)]
pub struct MultiPropertyMapper {
    properties: IndexMap<String, PropertyMapper>,
}

impl MultiPropertyMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property_name: &str) -> Option<&PropertyMapper> {
        self.properties.get(property_name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Writes audit data for every property. `new` and `old` are entity
    /// records. Returns `true` if any property changed.
    pub fn map_to_map_from_entity(&self, data: &mut Record, new: &Value, old: &Value) -> bool {
        let mut changed = false;

        for mapper in self.properties.values() {
            let bean_name = &mapper.property().bean_name;
            changed |= mapper.map_to_map_from_entity(data, new.field(bean_name), old.field(bean_name));
        }

        changed
    }

    pub fn map_modified_flags_to_map_from_entity(&self, data: &mut Record, new: &Value, old: &Value) {
        for mapper in self.properties.values() {
            let bean_name = &mapper.property().bean_name;
            mapper.map_modified_flags_to_map_from_entity(data, new.field(bean_name), old.field(bean_name));
        }
    }

    pub fn map_modified_flags_to_map_for_collection_change(
        &self,
        collection_property_name: &str,
        data: &mut Record,
    ) {
        for mapper in self.properties.values() {
            mapper.map_modified_flags_to_map_for_collection_change(collection_property_name, data);
        }
    }

    /// Describes every property of the entity with `primary_key`, keyed by
    /// bean name.
    pub fn map_to_entity_from_map(&self, data: &Record, primary_key: &Value) -> IndexMap<String, Restored> {
        self.properties
            .values()
            .map(|mapper| {
                (
                    mapper.property().bean_name.clone(),
                    mapper.map_to_entity_from_map(data, primary_key),
                )
            })
            .collect()
    }
}

impl CompositeMapperBuilder for MultiPropertyMapper {
    fn add(&mut self, property: PropertyData) {
        let name = property.name.clone();
        self.properties
            .insert(name, SinglePropertyMapper::new(property).into());
    }

    fn add_composite(&mut self, property: PropertyData, mapper: PropertyMapper) {
        self.properties.insert(property.name, mapper);
    }

    fn contains(&self, property_name: &str) -> bool {
        self.properties.contains_key(property_name)
    }
}
