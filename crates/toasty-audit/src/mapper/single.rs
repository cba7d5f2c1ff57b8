use super::Restored;
use crate::{entity::PropertyData, Record, Value};

/// Stores a plain property value under its name.
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePropertyMapper {
    pub property: PropertyData,
}

impl SinglePropertyMapper {
    pub fn new(property: PropertyData) -> Self {
        Self { property }
    }

    pub(super) fn map_to_map_from_entity(&self, data: &mut Record, new: &Value, old: &Value) -> bool {
        data.insert(&self.property.name, new.clone());
        self.check_modified(new, old)
    }

    pub(super) fn check_modified(&self, new: &Value, old: &Value) -> bool {
        new != old
    }

    pub(super) fn map_to_entity_from_map(&self, data: &Record) -> Restored {
        match data.get(&self.property.name) {
            None | Some(Value::Null) => Restored::Null,
            Some(value) => Restored::Value(value.clone()),
        }
    }
}
