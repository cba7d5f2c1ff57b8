//! Live mapping description of to-one properties.
//!
//! These types describe the relation as the live (non-historical) schema
//! declares it. The generator only reads them.

mod column;
pub use column::{Column, Selectable};

mod many_to_one;
pub use many_to_one::{ManyToOne, NotFoundAction};

mod one_to_one;
pub use one_to_one::OneToOne;

/// The live value of a single-valued reference.
#[derive(Debug, Clone)]
pub enum ToOne {
    ManyToOne(ManyToOne),
    OneToOne(OneToOne),
}

impl ToOne {
    /// Name of the entity the reference points at.
    pub fn referenced_entity_name(&self) -> &str {
        match self {
            Self::ManyToOne(many_to_one) => &many_to_one.referenced_entity_name,
            Self::OneToOne(one_to_one) => &one_to_one.referenced_entity_name,
        }
    }

    /// Physical columns (or formulas) backing the reference, in identifier
    /// order.
    pub fn columns(&self) -> &[Selectable] {
        match self {
            Self::ManyToOne(many_to_one) => &many_to_one.columns,
            Self::OneToOne(one_to_one) => &one_to_one.columns,
        }
    }

    pub fn as_one_to_one(&self) -> Option<&OneToOne> {
        match self {
            Self::OneToOne(one_to_one) => Some(one_to_one),
            _ => None,
        }
    }
}

impl From<ManyToOne> for ToOne {
    fn from(value: ManyToOne) -> Self {
        Self::ManyToOne(value)
    }
}

impl From<OneToOne> for ToOne {
    fn from(value: OneToOne) -> Self {
        Self::OneToOne(value)
    }
}
