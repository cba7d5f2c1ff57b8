use super::Selectable;

/// Owning side of a reference: the row holds the foreign key columns.
///
/// One-to-one associations with a join column are also mapped as a
/// `ManyToOne` with a unique constraint.
#[derive(Debug, Clone)]
pub struct ManyToOne {
    /// Entity the foreign key points at
    pub referenced_entity_name: String,

    /// Foreign key columns, in the order of the referenced identifier
    pub columns: Vec<Selectable>,

    /// What to do when the referenced row does not exist
    pub not_found: NotFoundAction,
}

/// Behavior when a foreign key points at a missing row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundAction {
    /// Loading the reference fails.
    #[default]
    Exception,

    /// The reference is treated as null.
    Ignore,
}

impl ManyToOne {
    pub fn new(referenced_entity_name: impl Into<String>) -> Self {
        Self {
            referenced_entity_name: referenced_entity_name.into(),
            columns: vec![],
            not_found: NotFoundAction::default(),
        }
    }

    pub fn column(mut self, column: impl Into<Selectable>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn not_found(mut self, action: NotFoundAction) -> Self {
        self.not_found = action;
        self
    }

    pub fn is_ignore_not_found(&self) -> bool {
        self.not_found == NotFoundAction::Ignore
    }
}
