//! The entitlement verification use case.

use std::sync::Arc;

use tracing::debug;

use crate::{checker::EntitlementChecker, Result};

/// Use case that performs a single entitlement verification.
///
/// `CheckEntitlement` wraps exactly one [`EntitlementChecker`] (constructor
/// injection) and forwards its result unmodified: no transformation, no
/// retry, no timeout. It exists to decouple the presentation layer from the
/// concrete capability, so tests can substitute a double without touching
/// callers (see [`testing::StubChecker`](crate::testing::StubChecker)).
///
/// ## Example
///
/// ```rust
/// use carrier_entitlement::Sdk;
///
/// let sdk = Sdk::builder().build();
/// let check = sdk.check_entitlement();
/// // Host processes without a telephony subsystem are never granted.
/// assert!(!check.execute().unwrap());
/// ```
#[derive(Clone)]
pub struct CheckEntitlement {
    checker: Arc<dyn EntitlementChecker>,
}

impl CheckEntitlement {
    /// Creates the use case over the given capability.
    pub fn new(checker: Arc<dyn EntitlementChecker>) -> Self {
        Self { checker }
    }

    /// Executes the check, forwarding the capability's result unchanged.
    pub fn execute(&self) -> Result<bool> {
        debug!("executing entitlement verification");
        self.checker.check_entitlement()
    }
}

impl std::fmt::Debug for CheckEntitlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckEntitlement").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{testing::StubChecker, Error, ErrorKind};

    #[test]
    fn test_forwards_granted() {
        let stub = Arc::new(StubChecker::granted(true));
        let check = CheckEntitlement::new(stub);
        assert!(check.execute().unwrap());
    }

    #[test]
    fn test_forwards_not_granted_without_error() {
        let stub = Arc::new(StubChecker::granted(false));
        let check = CheckEntitlement::new(stub);
        // Absence is Ok(false), never an error, at this layer.
        assert!(!check.execute().unwrap());
    }

    #[test]
    fn test_forwards_failure_unchanged() {
        let stub = Arc::new(StubChecker::failing(Error::check_failed(
            std::io::Error::other("subsystem unavailable"),
        )));
        let check = CheckEntitlement::new(stub.clone());
        let err = check.execute().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CheckFailed);
        assert!(err.to_string().contains("subsystem unavailable"));
    }

    #[test]
    fn test_repeated_execution_is_stable() {
        let stub = Arc::new(StubChecker::granted(true));
        let check = CheckEntitlement::new(stub.clone());
        assert_eq!(check.execute().unwrap(), check.execute().unwrap());
        assert_eq!(stub.call_count(), 2);
    }
}
