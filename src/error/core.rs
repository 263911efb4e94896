//! Main error type for the carrier entitlement SDK.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The primary error type for SDK operations.
///
/// `Error` provides context for debugging and error handling:
/// - [`kind()`](Error::kind): Categorization for `match` statements
/// - [`value()`](Error::value): The offending entitlement value, if any
/// - [`source()`](StdError::source): The underlying cause, if any
///
/// ## Error Hierarchy
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (category for matching)
/// ├── message: String          (human-readable description)
/// ├── value: Option            (offending entitlement value)
/// └── source: Option           (underlying cause)
/// ```
///
/// ## Example
///
/// ```rust
/// use carrier_entitlement::{Error, ErrorKind};
///
/// fn handle_error(err: Error) {
///     match err.kind() {
///         ErrorKind::EntitlementMissing => {
///             println!("entitlement not granted to this process");
///         }
///         ErrorKind::ValueIncorrect => {
///             if let Some(value) = err.value() {
///                 println!("unexpected entitlement value: {}", value);
///             }
///         }
///         _ => {
///             println!("check failed: {}", err);
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// The malformed entitlement value, for `ValueIncorrect`.
    value: Option<String>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use carrier_entitlement::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::CheckFailed, "telephony subsystem unavailable");
    /// assert_eq!(err.kind(), ErrorKind::CheckFailed);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            value: None,
            source: None,
        }
    }

    /// Creates an error from a kind with a default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::EntitlementMissing => {
                "carrier entitlement is missing; the host process does not carry it"
            }
            ErrorKind::CheckFailed => "failed to query the telephony subsystem",
            ErrorKind::ValueIncorrect => "carrier entitlement carries an unexpected value",
            ErrorKind::Unknown => "an unknown error occurred",
        };
        Self::new(kind, message)
    }

    /// Returns the error kind for categorization.
    ///
    /// Use this for `match` expressions to handle different error types:
    ///
    /// ```rust
    /// use carrier_entitlement::{Error, ErrorKind};
    ///
    /// fn is_terminal(err: &Error) -> bool {
    ///     !err.kind().is_expected()
    /// }
    /// ```
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message, without the kind prefix.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending entitlement value, if this is a
    /// [`ErrorKind::ValueIncorrect`] error.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Sets the offending entitlement value for this error.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for the closed kind set

    /// Creates a missing-entitlement error.
    pub fn entitlement_missing() -> Self {
        Self::from_kind(ErrorKind::EntitlementMissing)
    }

    /// Creates a check-failed error wrapping the underlying platform failure.
    pub fn check_failed<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::new(
            ErrorKind::CheckFailed,
            format!("failed to query the telephony subsystem: {}", source),
        )
        .with_source(source)
    }

    /// Creates an incorrect-value error carrying the offending value.
    pub fn value_incorrect(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(
            ErrorKind::ValueIncorrect,
            format!("carrier entitlement value '{}' is incorrect", value),
        )
        .with_value(value)
    }

    /// Creates an unknown error wrapping an unclassified failure.
    pub fn unknown<E>(source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::new(
            ErrorKind::Unknown,
            format!("an unknown error occurred: {}", source),
        )
        .with_source(source)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}
