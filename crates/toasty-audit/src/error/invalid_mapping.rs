use super::Error;

/// Error when the mapping handed to the generator cannot be processed.
///
/// This occurs when:
/// - A relation is registered twice under the same property name
/// - A mapper is attached twice under the same property key
/// - A live value has the wrong shape for the requested operation
#[derive(Debug, Clone)]
pub(super) struct InvalidMappingError {
    message: Box<str>,
}

impl std::error::Error for InvalidMappingError {}

impl core::fmt::Display for InvalidMappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid mapping: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid mapping error.
    pub fn invalid_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMapping(InvalidMappingError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid mapping error.
    pub fn is_invalid_mapping(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidMapping(_)))
    }
}
