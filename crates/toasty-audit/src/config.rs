use serde::Deserialize;

/// Global audit configuration consulted while generating relation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Track a "modified" flag for every audited property, whether or not the
    /// property asks for one.
    pub global_with_modified_flag: bool,

    /// Suffix appended to a property name to form its modified flag name.
    pub modified_flag_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global_with_modified_flag: false,
            modified_flag_suffix: "_MOD".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable modified flags for all properties
    pub fn global_with_modified_flag(mut self, enabled: bool) -> Self {
        self.global_with_modified_flag = enabled;
        self
    }

    /// Set the modified flag suffix
    pub fn modified_flag_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.modified_flag_suffix = suffix.into();
        self
    }

    /// Name of the modified flag column for `property_name`.
    pub fn modified_flag_name(&self, property_name: &str) -> String {
        format!("{property_name}{}", self.modified_flag_suffix)
    }
}
