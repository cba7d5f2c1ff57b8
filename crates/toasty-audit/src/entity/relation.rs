use crate::id::IdMapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationType {
    /// The audit row stores the referenced identifier
    ToOne,

    /// The audit row stores nothing; the reference is found through the owning
    /// property on the other entity
    ToOneNotOwning,
}

/// A relation registered on an entity's audit configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationDescription {
    pub from_property_name: String,
    pub relation_type: RelationType,
    pub to_entity_name: String,

    /// Owning-side property on `to_entity_name`, for not-owning relations
    pub mapped_by_property_name: Option<String>,

    /// Identifier mapper, prefixed for this relation's columns
    pub id_mapper: IdMapper,

    pub insertable: bool,
    pub ignore_not_found: bool,
}
