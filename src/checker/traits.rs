//! Capability trait definitions.
//!
//! This module defines the two seams of the SDK: the entitlement check
//! capability itself, and the lower-level carrier token oracle it consumes.

use crate::{types::CarrierToken, Result};

// ============================================================================
// Entitlement Check Capability
// ============================================================================

/// Object-safe capability exposing the single entitlement-check operation.
///
/// Implementations read ambient platform state and report whether the host
/// process carries the carrier entitlement. The operation is synchronous, has
/// no side effects, and is safe to call repeatedly: two calls over unchanged
/// platform state yield identical results.
///
/// ## Contract
///
/// - `Ok(true)` - the telephony subsystem reports a non-null carrier token.
/// - `Ok(false)` - no token is present. Absence is a normal outcome, not an
///   error; it means the entitlement is missing, not that the check failed.
/// - `Err(_)` - the underlying platform query itself failed (e.g. subsystem
///   raised an error). Never produced for a merely absent token.
///
/// ## Object Safety
///
/// The trait is object-safe, so consumers can hold
/// `Arc<dyn EntitlementChecker>` and substitute a test double without touching
/// the use case (see [`testing::StubChecker`](crate::testing::StubChecker)).
pub trait EntitlementChecker: Send + Sync {
    /// Checks whether the host process carries the carrier entitlement.
    fn check_entitlement(&self) -> Result<bool>;
}

// ============================================================================
// Carrier Token Oracle
// ============================================================================

/// Read-only oracle for the platform carrier/subscriber token.
///
/// This is the one platform-provided signal the SDK consumes. The token is
/// treated as opaque; only its presence or absence matters. On environments
/// without a telephony subsystem, implementations must deterministically
/// report `Ok(None)` rather than fail - capability absence means "not
/// granted", never an error.
pub trait CarrierTokenSource: Send + Sync {
    /// Reads the current carrier token, if the platform reports one.
    fn carrier_token(&self) -> Result<Option<CarrierToken>>;
}

/// Token source backed by a host-supplied closure.
///
/// Mobile host processes bridge the real platform signal in through this
/// adapter (on iOS, for example, the closure reads `CTSubscriber`'s carrier
/// token across the FFI boundary). Tests use it the same way.
///
/// ## Example
///
/// ```rust
/// use carrier_entitlement::checker::{CarrierTokenSource, FnTokenSource};
/// use carrier_entitlement::CarrierToken;
///
/// let source = FnTokenSource::new(|| Ok(Some(CarrierToken::new("tok"))));
/// assert!(source.carrier_token().unwrap().is_some());
/// ```
pub struct FnTokenSource<F> {
    read: F,
}

impl<F> FnTokenSource<F>
where
    F: Fn() -> Result<Option<CarrierToken>> + Send + Sync,
{
    /// Wraps a closure as a token source.
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F> CarrierTokenSource for FnTokenSource<F>
where
    F: Fn() -> Result<Option<CarrierToken>> + Send + Sync,
{
    fn carrier_token(&self) -> Result<Option<CarrierToken>> {
        (self.read)()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    struct AlwaysGranted;

    impl EntitlementChecker for AlwaysGranted {
        fn check_entitlement(&self) -> Result<bool> {
            Ok(true)
        }
    }

    #[test]
    fn test_trait_object() {
        let checker: Box<dyn EntitlementChecker> = Box::new(AlwaysGranted);
        assert!(checker.check_entitlement().unwrap());
    }

    #[test]
    fn test_fn_token_source_present() {
        let source = FnTokenSource::new(|| Ok(Some(CarrierToken::new("tok"))));
        assert!(source.carrier_token().unwrap().is_some());
    }

    #[test]
    fn test_fn_token_source_absent() {
        let source = FnTokenSource::new(|| Ok(None));
        assert!(source.carrier_token().unwrap().is_none());
    }

    #[test]
    fn test_fn_token_source_failure() {
        let source = FnTokenSource::new(|| {
            Err(Error::check_failed(std::io::Error::other("query raised")))
        });
        assert!(source.carrier_token().is_err());
    }
}
