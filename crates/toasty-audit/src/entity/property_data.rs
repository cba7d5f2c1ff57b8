use crate::reader::AccessType;

/// Identifies a mapped property.
///
/// `name` is the name in audit data; `bean_name` is the field read from the
/// entity. They differ once a mapper has been prefixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyData {
    pub name: String,
    pub bean_name: String,
    pub access_type: AccessType,

    /// Name of the modified flag column, if the property tracks one
    pub modified_flag_name: Option<String>,
}

impl PropertyData {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            bean_name: name.clone(),
            name,
            access_type: AccessType::default(),
            modified_flag_name: None,
        }
    }

    /// Copy renamed to `prefix + name`.
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self {
            name: format!("{prefix}{}", self.name),
            ..self.clone()
        }
    }

    pub fn is_using_modified_flag(&self) -> bool {
        self.modified_flag_name.is_some()
    }
}
