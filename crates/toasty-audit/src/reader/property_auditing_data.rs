use crate::{entity::PropertyData, Config};

/// Audit settings of a single property.
#[derive(Debug, Clone)]
pub struct PropertyAuditingData {
    /// Property name in the audit model
    pub name: String,

    /// Field name on the entity, if it differs from `name`
    pub bean_name: Option<String>,

    /// How the property value is read from the entity
    pub access_type: AccessType,

    /// Store the relation even when its column is not insertable. Set for the
    /// "many" side of a bidirectional relation owned by a collection.
    pub force_insertable: bool,

    /// Whether the relation target must itself be audited
    pub relation_target_audit_mode: RelationTargetAuditMode,

    /// Track whether the property changed in each revision
    pub using_modified_flag: bool,

    /// Explicit modified flag name, overriding the configured suffix
    pub modified_flag_name: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    #[default]
    Field,
    Property,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RelationTargetAuditMode {
    /// The target entity is audited; its history is joined at read time.
    #[default]
    Audited,

    /// The target entity is not audited; its current state is used.
    NotAudited,
}

impl PropertyAuditingData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bean_name: None,
            access_type: AccessType::default(),
            force_insertable: false,
            relation_target_audit_mode: RelationTargetAuditMode::default(),
            using_modified_flag: false,
            modified_flag_name: None,
        }
    }

    pub fn bean_name(mut self, bean_name: impl Into<String>) -> Self {
        self.bean_name = Some(bean_name.into());
        self
    }

    pub fn access_type(mut self, access_type: AccessType) -> Self {
        self.access_type = access_type;
        self
    }

    pub fn force_insertable(mut self, force_insertable: bool) -> Self {
        self.force_insertable = force_insertable;
        self
    }

    pub fn relation_target_audit_mode(mut self, mode: RelationTargetAuditMode) -> Self {
        self.relation_target_audit_mode = mode;
        self
    }

    pub fn modified_flag(mut self, name: Option<&str>) -> Self {
        self.using_modified_flag = true;
        self.modified_flag_name = name.map(String::from);
        self
    }

    pub fn is_relation_target_audited(&self) -> bool {
        self.relation_target_audit_mode == RelationTargetAuditMode::Audited
    }

    /// Builds the descriptor the property's mapper is registered under.
    pub fn property_data(&self, config: &Config) -> PropertyData {
        let using_modified_flag = self.using_modified_flag || config.global_with_modified_flag;
        let modified_flag_name = using_modified_flag.then(|| {
            self.modified_flag_name
                .clone()
                .unwrap_or_else(|| config.modified_flag_name(&self.name))
        });

        PropertyData {
            name: self.name.clone(),
            bean_name: self.bean_name.clone().unwrap_or_else(|| self.name.clone()),
            access_type: self.access_type,
            modified_flag_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_data_without_modified_flag() {
        let data = PropertyAuditingData::new("customer").property_data(&Config::new());

        assert_eq!(data.name, "customer");
        assert_eq!(data.bean_name, "customer");
        assert!(!data.is_using_modified_flag());
    }

    #[test]
    fn property_data_global_modified_flag() {
        let config = Config::new().global_with_modified_flag(true);
        let data = PropertyAuditingData::new("customer").property_data(&config);

        assert_eq!(data.modified_flag_name.as_deref(), Some("customer_MOD"));
    }

    #[test]
    fn property_data_explicit_modified_flag() {
        let data = PropertyAuditingData::new("customer")
            .bean_name("cust")
            .modified_flag(Some("customer_changed"))
            .property_data(&Config::new());

        assert_eq!(data.bean_name, "cust");
        assert_eq!(data.modified_flag_name.as_deref(), Some("customer_changed"));
    }

    #[test]
    fn property_data_keeps_access_type() {
        let data = PropertyAuditingData::new("customer")
            .access_type(AccessType::Property)
            .property_data(&Config::new());

        assert_eq!(data.access_type, AccessType::Property);
        assert_eq!(PropertyData::new("customer").access_type, AccessType::Field);
    }
}
