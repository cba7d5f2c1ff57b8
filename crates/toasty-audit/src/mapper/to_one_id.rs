use super::{ReferenceLookup, Restored};
use crate::{entity::PropertyData, id::IdMapper, Record, Value};

/// Stores the identifier of the referenced entity of an owning to-one
/// relation.
#[derive(Debug, Clone, PartialEq)]
pub struct ToOneIdMapper {
    /// Identifier mapper of the referenced entity, prefixed for this relation
    pub delegate: IdMapper,

    pub property: PropertyData,

    pub referenced_entity_name: String,

    /// The live column is not insertable and is only stored for auditing.
    /// Changes to it are recorded by the owning collection, so this mapper
    /// always writes the previous value and never reports a change.
    pub non_insertable_fake: bool,
}

impl ToOneIdMapper {
    pub fn new(
        delegate: IdMapper,
        property: PropertyData,
        referenced_entity_name: impl Into<String>,
        non_insertable_fake: bool,
    ) -> Self {
        Self {
            delegate,
            property,
            referenced_entity_name: referenced_entity_name.into(),
            non_insertable_fake,
        }
    }

    pub(super) fn map_to_map_from_entity(&self, data: &mut Record, new: &Value, old: &Value) -> bool {
        let entity = if self.non_insertable_fake { old } else { new };

        let mut id_data = Record::new();
        self.delegate.map_to_map_from_entity(&mut id_data, entity);
        data.extend(id_data);

        self.check_modified(new, old)
    }

    pub(super) fn check_modified(&self, new: &Value, old: &Value) -> bool {
        if self.non_insertable_fake {
            return false;
        }

        self.delegate.map_to_id_from_entity(new) != self.delegate.map_to_id_from_entity(old)
    }

    pub(super) fn map_to_entity_from_map(&self, data: &Record) -> Restored {
        match self.delegate.map_to_id_from_map(data) {
            Some(id) => Restored::Reference(ReferenceLookup::ById {
                entity_name: self.referenced_entity_name.clone(),
                id,
            }),
            None => Restored::Null,
        }
    }
}
