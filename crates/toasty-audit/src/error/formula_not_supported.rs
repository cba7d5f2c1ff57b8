use super::Error;

/// Error when a relation is mapped through a formula instead of a physical
/// column. Historical tables can only store real columns.
#[derive(Debug, Clone)]
pub(super) struct FormulaNotSupportedError {
    entity: Box<str>,
    property: Box<str>,
    formula: Box<str>,
}

impl std::error::Error for FormulaNotSupportedError {}

impl core::fmt::Display for FormulaNotSupportedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "formula `{}` is not supported as a column of audited relation `{}.{}`",
            self.formula, self.entity, self.property
        )
    }
}

impl Error {
    /// Creates a formula-not-supported error.
    pub fn formula_not_supported(
        entity: impl Into<String>,
        property: impl Into<String>,
        formula: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::FormulaNotSupported(
            FormulaNotSupportedError {
                entity: entity.into().into(),
                property: property.into().into(),
                formula: formula.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a formula-not-supported error.
    pub fn is_formula_not_supported(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::FormulaNotSupported(_)))
    }
}
