use super::{ReferenceLookup, Restored};
use crate::{entity::PropertyData, Value};

/// Mapper for a one-to-one relation that shares the owner's primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct OneToOnePrimaryKeyJoinColumnMapper {
    pub entity_name: String,
    pub referenced_entity_name: String,
    pub property: PropertyData,
}

impl OneToOnePrimaryKeyJoinColumnMapper {
    pub fn new(
        entity_name: impl Into<String>,
        referenced_entity_name: impl Into<String>,
        property: PropertyData,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            referenced_entity_name: referenced_entity_name.into(),
            property,
        }
    }

    pub(super) fn map_to_entity_from_map(&self, primary_key: &Value) -> Restored {
        Restored::Reference(ReferenceLookup::BySharedPrimaryKey {
            entity_name: self.referenced_entity_name.clone(),
            id: primary_key.clone(),
        })
    }
}
