//! Value mappers.
//!
//! A value mapper moves one property between entity state and the flat data
//! of an audit record, and describes how to rebuild the property when a
//! historical record is read back.

mod lookup;
pub use lookup::{ReferenceLookup, Restored};

mod multi;
pub use multi::MultiPropertyMapper;

mod one_to_one_not_owning;
pub use one_to_one_not_owning::OneToOneNotOwningMapper;

mod one_to_one_primary_key_join_column;
pub use one_to_one_primary_key_join_column::OneToOnePrimaryKeyJoinColumnMapper;

mod single;
pub use single::SinglePropertyMapper;

mod to_one_id;
pub use to_one_id::ToOneIdMapper;

use crate::{entity::PropertyData, Record, Value};

/// Collects the mappers of an entity's audited properties.
pub trait CompositeMapperBuilder {
    /// Adds a plain (non-relation) property.
    fn add(&mut self, property: PropertyData);

    /// Adds `mapper` under the key `property`.
    fn add_composite(&mut self, property: PropertyData, mapper: PropertyMapper);

    /// Returns `true` if a mapper is already registered under `property_name`.
    fn contains(&self, property_name: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyMapper {
    Single(SinglePropertyMapper),
    ToOneId(ToOneIdMapper),
    OneToOneNotOwning(OneToOneNotOwningMapper),
    OneToOnePrimaryKeyJoinColumn(OneToOnePrimaryKeyJoinColumnMapper),
}

impl PropertyMapper {
    pub fn property(&self) -> &PropertyData {
        match self {
            Self::Single(mapper) => &mapper.property,
            Self::ToOneId(mapper) => &mapper.property,
            Self::OneToOneNotOwning(mapper) => &mapper.property,
            Self::OneToOnePrimaryKeyJoinColumn(mapper) => &mapper.property,
        }
    }

    pub fn is_relation(&self) -> bool {
        !matches!(self, Self::Single(..))
    }

    /// Writes the property's audit columns for the `new` value into `data`.
    /// Returns `true` if the property changed between `old` and `new`.
    pub fn map_to_map_from_entity(&self, data: &mut Record, new: &Value, old: &Value) -> bool {
        match self {
            Self::Single(mapper) => mapper.map_to_map_from_entity(data, new, old),
            Self::ToOneId(mapper) => mapper.map_to_map_from_entity(data, new, old),
            // The inverse and shared-key sides store no columns of their own.
            Self::OneToOneNotOwning(_) | Self::OneToOnePrimaryKeyJoinColumn(_) => false,
        }
    }

    /// Writes the modified flag of the property, if it tracks one.
    pub fn map_modified_flags_to_map_from_entity(&self, data: &mut Record, new: &Value, old: &Value) {
        let Some(flag) = &self.property().modified_flag_name else {
            return;
        };

        let modified = match self {
            Self::Single(mapper) => mapper.check_modified(new, old),
            Self::ToOneId(mapper) => mapper.check_modified(new, old),
            Self::OneToOneNotOwning(_) | Self::OneToOnePrimaryKeyJoinColumn(_) => return,
        };

        data.insert(flag, modified);
    }

    /// Writes the modified flag of a relation property after a change made
    /// through the collection `collection_property_name`.
    pub fn map_modified_flags_to_map_for_collection_change(
        &self,
        collection_property_name: &str,
        data: &mut Record,
    ) {
        if !self.is_relation() {
            return;
        }

        let property = self.property();
        if let Some(flag) = &property.modified_flag_name {
            data.insert(flag, property.name == collection_property_name);
        }
    }

    /// Describes how to rebuild the property of the entity whose primary key
    /// is `primary_key` from the audit `data`.
    pub fn map_to_entity_from_map(&self, data: &Record, primary_key: &Value) -> Restored {
        match self {
            Self::Single(mapper) => mapper.map_to_entity_from_map(data),
            Self::ToOneId(mapper) => mapper.map_to_entity_from_map(data),
            Self::OneToOneNotOwning(mapper) => mapper.map_to_entity_from_map(primary_key),
            Self::OneToOnePrimaryKeyJoinColumn(mapper) => mapper.map_to_entity_from_map(primary_key),
        }
    }
}

impl From<SinglePropertyMapper> for PropertyMapper {
    fn from(value: SinglePropertyMapper) -> Self {
        Self::Single(value)
    }
}

impl From<ToOneIdMapper> for PropertyMapper {
    fn from(value: ToOneIdMapper) -> Self {
        Self::ToOneId(value)
    }
}

impl From<OneToOneNotOwningMapper> for PropertyMapper {
    fn from(value: OneToOneNotOwningMapper) -> Self {
        Self::OneToOneNotOwning(value)
    }
}

impl From<OneToOnePrimaryKeyJoinColumnMapper> for PropertyMapper {
    fn from(value: OneToOnePrimaryKeyJoinColumnMapper) -> Self {
        Self::OneToOnePrimaryKeyJoinColumn(value)
    }
}
