use super::Error;

/// Error when an audited relation points at an entity that carries no audit
/// configuration.
///
/// This is raised while building metadata, either because the referenced
/// entity of an owning relation is not audited, or because the entity on the
/// inverse side of a one-to-one has no audit configuration (or no identifier
/// mapping) of its own.
#[derive(Debug, Clone)]
pub(super) struct NotAuditedError {
    /// The non-audited entity.
    entity: Box<str>,

    /// `(entity, property)` the relation originates from, when known.
    source: Option<(Box<str>, Box<str>)>,

    /// True if the relation could be allowed by declaring the target as not
    /// audited.
    allowable: bool,
}

impl std::error::Error for NotAuditedError {}

impl core::fmt::Display for NotAuditedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.source {
            Some((entity, property)) => write!(
                f,
                "audited relation from `{entity}.{property}` targets non-audited entity `{}`",
                self.entity
            )?,
            None => write!(
                f,
                "audited relation targets non-audited entity `{}`",
                self.entity
            )?,
        }

        if self.allowable {
            f.write_str(
                "; such a mapping is possible but must be declared with \
                 `RelationTargetAuditMode::NotAudited`",
            )?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates a not-audited error naming only the offending entity.
    pub fn not_audited(entity: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotAudited(NotAuditedError {
            entity: entity.into().into(),
            source: None,
            allowable: false,
        }))
    }

    /// Creates a not-audited error for the relation `entity.property` that
    /// references `target`.
    pub fn not_audited_relation(
        entity: impl Into<String>,
        property: impl Into<String>,
        target: impl Into<String>,
        allowable: bool,
    ) -> Error {
        Error::from(super::ErrorKind::NotAudited(NotAuditedError {
            entity: target.into().into(),
            source: Some((entity.into().into(), property.into().into())),
            allowable,
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a not-audited
    /// error.
    pub fn is_not_audited(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NotAudited(_)))
    }
}
