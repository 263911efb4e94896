//! Error kind enumeration for categorizing SDK errors.

/// Categorization of SDK errors.
///
/// This enum provides a stable interface for matching on error types. The set
/// is closed: every failure the SDK can report falls into one of these
/// categories.
///
/// ## Expected vs Exceptional
///
/// | ErrorKind            | Exceptional | Meaning                              |
/// |----------------------|-------------|--------------------------------------|
/// | `EntitlementMissing` | No          | Check succeeded, entitlement absent  |
/// | `CheckFailed`        | Yes         | The platform query itself failed     |
/// | `ValueIncorrect`     | Yes         | Entitlement present, value malformed |
/// | `Unknown`            | Yes         | Unclassified failure                 |
///
/// Note that the capability itself never produces `EntitlementMissing`: an
/// absent carrier token is reported as `Ok(false)`, and only the presentation
/// layer maps that to this kind when rendering a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The entitlement check succeeded but the entitlement is absent.
    ///
    /// This is the expected outcome for host processes that do not carry the
    /// carrier entitlement. **Not exceptional** - produced by the presentation
    /// layer, never by the capability.
    #[error("entitlement missing")]
    EntitlementMissing,

    /// The underlying platform query failed.
    ///
    /// The telephony subsystem was consulted but the query itself raised an
    /// error. The underlying cause is attached as the error source.
    #[error("entitlement check failed")]
    CheckFailed,

    /// The entitlement is present but carries a malformed or unexpected value.
    ///
    /// Declared for completeness; the current presence-only check never
    /// produces it. The offending value is carried on [`Error`].
    ///
    /// [`Error`]: crate::Error
    #[error("entitlement value incorrect")]
    ValueIncorrect,

    /// Unknown or unexpected error.
    ///
    /// Catch-all wrapping any unclassified failure.
    #[error("unknown error")]
    Unknown,
}

impl ErrorKind {
    /// Returns `true` if this kind represents an expected, non-exceptional
    /// outcome rather than a failed query.
    ///
    /// # Example
    ///
    /// ```rust
    /// use carrier_entitlement::ErrorKind;
    ///
    /// assert!(ErrorKind::EntitlementMissing.is_expected());
    /// assert!(!ErrorKind::CheckFailed.is_expected());
    /// ```
    #[inline]
    pub fn is_expected(&self) -> bool {
        matches!(self, ErrorKind::EntitlementMissing)
    }
}
