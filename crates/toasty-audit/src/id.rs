//! Identifier mappers.
//!
//! An identifier mapper copies an entity's identifier between the entity,
//! the bare identifier value and the flat column data of an audit record.

mod multiple;
pub use multiple::MultipleIdMapper;

mod single;
pub use single::SingleIdMapper;

use crate::{entity::PropertyData, Record, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum IdMapper {
    /// Identifier made of one property
    Single(SingleIdMapper),

    /// Composite identifier. The bare identifier value is a record keyed by
    /// bean name.
    Multiple(MultipleIdMapper),
}

impl IdMapper {
    /// Returns a copy whose mapped property names are namespaced under
    /// `prefix`. Bean names are kept, so entities are still read through their
    /// own field names.
    pub fn prefix_mapped_properties(&self, prefix: &str) -> IdMapper {
        match self {
            Self::Single(single) => Self::Single(single.prefix_mapped_properties(prefix)),
            Self::Multiple(multiple) => Self::Multiple(multiple.prefix_mapped_properties(prefix)),
        }
    }

    /// Mapped identifier properties, in column order.
    pub fn properties(&self) -> &[PropertyData] {
        match self {
            Self::Single(single) => std::slice::from_ref(&single.property),
            Self::Multiple(multiple) => &multiple.properties,
        }
    }

    /// Writes the columns for a bare identifier value. A null identifier
    /// nulls every column.
    pub fn map_to_map_from_id(&self, data: &mut Record, id: &Value) {
        match self {
            Self::Single(single) => single.map_to_map_from_id(data, id),
            Self::Multiple(multiple) => multiple.map_to_map_from_id(data, id),
        }
    }

    /// Writes the columns for the identifier of `entity`. A null entity nulls
    /// every column.
    pub fn map_to_map_from_entity(&self, data: &mut Record, entity: &Value) {
        let id = self.map_to_id_from_entity(entity);
        self.map_to_map_from_id(data, &id);
    }

    /// Reads a bare identifier value back out of audit data. Returns `None`
    /// when any identifier column is missing or null.
    pub fn map_to_id_from_map(&self, data: &Record) -> Option<Value> {
        match self {
            Self::Single(single) => single.map_to_id_from_map(data),
            Self::Multiple(multiple) => multiple.map_to_id_from_map(data),
        }
    }

    /// Extracts the bare identifier value of `entity`.
    pub fn map_to_id_from_entity(&self, entity: &Value) -> Value {
        if entity.is_null() {
            return Value::Null;
        }

        match self {
            Self::Single(single) => single.map_to_id_from_entity(entity),
            Self::Multiple(multiple) => multiple.map_to_id_from_entity(entity),
        }
    }
}

impl From<SingleIdMapper> for IdMapper {
    fn from(value: SingleIdMapper) -> Self {
        Self::Single(value)
    }
}

impl From<MultipleIdMapper> for IdMapper {
    fn from(value: MultipleIdMapper) -> Self {
        Self::Multiple(value)
    }
}
