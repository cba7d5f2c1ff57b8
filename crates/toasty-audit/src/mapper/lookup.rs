use crate::Value;

/// The historical value of a property, as far as audit data can describe it.
#[derive(Debug, Clone, PartialEq)]
pub enum Restored {
    /// The property was null
    Null,

    /// A plain value stored in the audit record
    Value(Value),

    /// A reference the audit reader must resolve at the record's revision
    Reference(ReferenceLookup),
}

/// How to find the referenced entity of a restored to-one property.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceLookup {
    /// Load `entity_name` by the identifier stored in the audit record.
    ById { entity_name: String, id: Value },

    /// Query `entity_name` for the row whose `owning_property` references
    /// `owner_id`.
    ByOwningProperty {
        entity_name: String,
        owning_property: String,
        owner_id: Value,
    },

    /// Load `entity_name` by the primary key shared with the owner.
    BySharedPrimaryKey { entity_name: String, id: Value },
}

impl ReferenceLookup {
    pub fn entity_name(&self) -> &str {
        match self {
            Self::ById { entity_name, .. }
            | Self::ByOwningProperty { entity_name, .. }
            | Self::BySharedPrimaryKey { entity_name, .. } => entity_name,
        }
    }
}
