mod adhoc;
mod formula_not_supported;
mod invalid_mapping;
mod not_audited;

use adhoc::AdhocError;
use formula_not_supported::FormulaNotSupportedError;
use invalid_mapping::InvalidMappingError;
use not_audited::NotAuditedError;
use std::sync::Arc;

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while generating audit metadata.
///
/// Every error is a build-time failure: the metadata pass that produced it
/// must be abandoned.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug, Clone)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => {
                let inner = Arc::unwrap_or_clone(inner);
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.kind
            }
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if any error in the chain matches `f`.
    fn any_kind(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => {
                let err: &anyhow::Error = err;
                Some(err.as_ref())
            }
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug, Clone)]
enum ErrorKind {
    Anyhow(Arc<anyhow::Error>),
    Adhoc(AdhocError),
    NotAudited(NotAuditedError),
    FormulaNotSupported(FormulaNotSupportedError),
    InvalidMapping(InvalidMappingError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            NotAudited(err) => core::fmt::Display::fmt(err, f),
            FormulaNotSupported(err) => core::fmt::Display::fmt(err, f),
            InvalidMapping(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown audit metadata error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(Arc::new(err)))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(core::mem::size_of::<usize>(), core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("bad relation: {}", "customer"));
        assert_eq!(err.to_string(), "bad relation: customer");
    }

    #[test]
    fn not_audited_from_property() {
        let err = Error::not_audited_relation("Order", "customer", "Customer", true);
        assert_eq!(
            err.to_string(),
            "audited relation from `Order.customer` targets non-audited entity `Customer`; \
             such a mapping is possible but must be declared with \
             `RelationTargetAuditMode::NotAudited`"
        );
        assert!(err.is_not_audited());
        assert!(!err.is_invalid_mapping());
    }

    #[test]
    fn not_audited_entity_only() {
        let err = Error::not_audited("Customer");
        assert_eq!(
            err.to_string(),
            "audited relation targets non-audited entity `Customer`"
        );
    }

    #[test]
    fn context_chain_keeps_kind() {
        let err = Error::not_audited("Customer")
            .context(err!("processing `Customer.order`"))
            .context(err!("building audit metadata"));

        assert_eq!(
            err.to_string(),
            "building audit metadata: processing `Customer.order`: \
             audited relation targets non-audited entity `Customer`"
        );
        assert!(err.is_not_audited());
    }

    #[test]
    fn shared_consequent_keeps_kind() {
        let consequent = Error::not_audited("Customer");
        let shared = consequent.clone();

        let err = err!("loading `Customer` id mapping").context(consequent);

        assert!(err.is_not_audited());
        assert_eq!(
            err.to_string(),
            "audited relation targets non-audited entity `Customer`: \
             loading `Customer` id mapping"
        );
        assert!(shared.is_not_audited());
        assert_eq!(
            shared.to_string(),
            "audited relation targets non-audited entity `Customer`"
        );
    }

    #[test]
    #[should_panic(expected = "consequent error must not already have a cause")]
    fn consequent_with_cause_is_rejected() {
        let consequent = err!("processing `Order.customer`").context(err!("building"));
        let _ = err!("loading").context(consequent);
    }

    #[test]
    fn formula_not_supported() {
        let err = Error::formula_not_supported("Order", "customer", "upper(cust_code)");
        assert_eq!(
            err.to_string(),
            "formula `upper(cust_code)` is not supported as a column of audited relation `Order.customer`"
        );
        assert!(err.is_formula_not_supported());
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("template missing").into();
        assert_eq!(err.to_string(), "template missing");
    }
}
