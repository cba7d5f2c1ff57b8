use crate::mapping::ToOne;

/// Prefix for the identifier columns of the to-one relation stored under
/// `property_name`.
///
/// Both sides of a one-to-one derive the prefix independently from the
/// owning property name, so this must stay a pure function of its input.
pub fn to_one_relation_prefix(property_name: &str) -> String {
    format!("{property_name}_")
}

/// Whether a dangling reference should be read as null instead of failing.
pub fn ignore_not_found(value: &ToOne) -> bool {
    match value {
        ToOne::ManyToOne(many_to_one) => many_to_one.is_ignore_not_found(),
        ToOne::OneToOne(_) => false,
    }
}
