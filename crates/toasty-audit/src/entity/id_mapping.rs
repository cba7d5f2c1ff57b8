use crate::{
    entity::PropertyData,
    fragment::Element,
    id::{IdMapper, MultipleIdMapper, SingleIdMapper},
};
use std::sync::Arc;

/// Identifier mapping of an audited entity.
///
/// The relation fragment is a template shared by every relation that
/// references the entity. It is never modified in place; use
/// [`instantiate_relation_mapping`](Self::instantiate_relation_mapping) to get
/// a copy to rewrite.
#[derive(Debug, Clone)]
pub struct IdMappingData {
    pub id_mapper: IdMapper,

    /// Identifier properties as stored by relations pointing at the entity
    relation_mapping: Arc<Element>,
}

impl IdMappingData {
    pub fn new(id_mapper: IdMapper, relation_mapping: Element) -> Self {
        Self {
            id_mapper,
            relation_mapping: Arc::new(relation_mapping),
        }
    }

    /// Builds the mapping of a single-column identifier.
    pub fn single(property: &str, ty: &str, column: &str) -> Self {
        Self::from_properties(&[(property, ty, column)])
    }

    /// Builds the mapping of an identifier made of `(property, type, column)`
    /// triples. One property gives a single-id mapper, more give a composite
    /// one.
    pub fn from_properties(properties: &[(&str, &str, &str)]) -> Self {
        let mut relation_mapping = Element::new("properties");

        for (property, ty, column) in properties {
            relation_mapping.add_child(
                Element::new("property")
                    .with_attr("name", *property)
                    .with_attr("type", *ty)
                    .with_child(Element::new("column").with_attr("name", *column)),
            );
        }

        let id_mapper = match properties {
            [(property, _, _)] => SingleIdMapper::new(PropertyData::new(*property)).into(),
            _ => MultipleIdMapper::new(
                properties
                    .iter()
                    .map(|(property, _, _)| PropertyData::new(*property))
                    .collect(),
            )
            .into(),
        };

        Self::new(id_mapper, relation_mapping)
    }

    /// The shared relation template. Read-only.
    pub fn relation_mapping(&self) -> &Element {
        &self.relation_mapping
    }

    /// Deep copy of the relation template, free to be renamed and re-parented.
    pub fn instantiate_relation_mapping(&self) -> Element {
        Element::clone(&self.relation_mapping)
    }
}
