use super::{ReferenceLookup, Restored};
use crate::{entity::PropertyData, Value};

/// Mapper for the inverse side of a one-to-one relation. Nothing is stored;
/// the reference is found through the owning property of the other entity.
#[derive(Debug, Clone, PartialEq)]
pub struct OneToOneNotOwningMapper {
    pub entity_name: String,
    pub referenced_entity_name: String,
    pub owning_reference_property_name: String,
    pub property: PropertyData,
}

impl OneToOneNotOwningMapper {
    pub fn new(
        entity_name: impl Into<String>,
        referenced_entity_name: impl Into<String>,
        owning_reference_property_name: impl Into<String>,
        property: PropertyData,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            referenced_entity_name: referenced_entity_name.into(),
            owning_reference_property_name: owning_reference_property_name.into(),
            property,
        }
    }

    pub(super) fn map_to_entity_from_map(&self, primary_key: &Value) -> Restored {
        Restored::Reference(ReferenceLookup::ByOwningProperty {
            entity_name: self.referenced_entity_name.clone(),
            owning_property: self.owning_reference_property_name.clone(),
            owner_id: primary_key.clone(),
        })
    }
}
