use super::Selectable;

/// A one-to-one reference without its own foreign key column.
///
/// Either the inverse side of a relation owned by a property on the other
/// entity (`referenced_property_name` is set), or a reference that shares the
/// owner's primary key.
#[derive(Debug, Clone)]
pub struct OneToOne {
    /// Entity the reference points at
    pub referenced_entity_name: String,

    /// Property on the referenced entity that owns the relation
    pub referenced_property_name: Option<String>,

    /// Columns the reference is joined on. For a shared primary key these are
    /// the owner's own primary key columns.
    pub columns: Vec<Selectable>,
}

impl OneToOne {
    pub fn new(referenced_entity_name: impl Into<String>) -> Self {
        Self {
            referenced_entity_name: referenced_entity_name.into(),
            referenced_property_name: None,
            columns: vec![],
        }
    }

    /// Marks this as the inverse side of `property` on the referenced entity.
    pub fn mapped_by(mut self, property: impl Into<String>) -> Self {
        self.referenced_property_name = Some(property.into());
        self
    }

    pub fn column(mut self, column: impl Into<Selectable>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn is_inverse(&self) -> bool {
        self.referenced_property_name.is_some()
    }
}
