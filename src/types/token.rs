//! Opaque carrier/subscriber token.

use std::fmt;

/// An opaque platform-provided carrier/subscriber token.
///
/// The mere presence or absence of this token is the entitlement signal; the
/// SDK never interprets its contents. `Debug` output is redacted so token
/// material cannot leak into logs.
///
/// ## Example
///
/// ```rust
/// use carrier_entitlement::CarrierToken;
///
/// let token = CarrierToken::new("platform-opaque-bytes");
/// assert_eq!(format!("{:?}", token), "CarrierToken(..)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CarrierToken(String);

impl CarrierToken {
    /// Wraps a platform-provided token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` if the platform handed over an empty token.
    ///
    /// An empty token still counts as present; the capability treats any
    /// non-null token as the entitlement signal.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for CarrierToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Token contents are carrier-private; never echo them.
        f.write_str("CarrierToken(..)")
    }
}

impl From<String> for CarrierToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CarrierToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
