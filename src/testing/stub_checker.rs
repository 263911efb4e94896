//! StubChecker for testing with a scripted outcome.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{checker::EntitlementChecker, Error, ErrorKind, Result};

/// A stub entitlement checker for testing.
///
/// `StubChecker` reports one scripted outcome on every call and records how
/// many times it was consulted, so tests can assert both the forwarded result
/// and the exactly-once behavior of the flow.
///
/// ## Example
///
/// ```rust
/// use carrier_entitlement::testing::StubChecker;
/// use carrier_entitlement::checker::EntitlementChecker;
///
/// let stub = StubChecker::granted(true);
/// assert!(stub.check_entitlement().unwrap());
/// assert_eq!(stub.call_count(), 1);
/// ```
#[derive(Clone)]
pub struct StubChecker {
    outcome: Arc<Outcome>,
    calls: Arc<Mutex<usize>>,
}

enum Outcome {
    Granted(bool),
    Failing { kind: ErrorKind, message: String },
}

impl StubChecker {
    /// Creates a stub that reports the given grant verdict.
    pub fn granted(granted: bool) -> Self {
        Self {
            outcome: Arc::new(Outcome::Granted(granted)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates a stub that fails with the given error on every call.
    ///
    /// The stub reproduces the error's kind and message on each call, so a
    /// forwarded failure can be compared against the configured one.
    pub fn failing(error: Error) -> Self {
        Self {
            outcome: Arc::new(Outcome::Failing {
                kind: error.kind(),
                message: error.message().to_string(),
            }),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns the number of check calls made so far.
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

impl EntitlementChecker for StubChecker {
    fn check_entitlement(&self) -> Result<bool> {
        *self.calls.lock() += 1;
        match &*self.outcome {
            Outcome::Granted(granted) => Ok(*granted),
            Outcome::Failing { kind, message } => Err(Error::new(*kind, message.clone())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_granted() {
        let stub = StubChecker::granted(true);
        assert!(stub.check_entitlement().unwrap());
    }

    #[test]
    fn test_stub_not_granted() {
        let stub = StubChecker::granted(false);
        assert!(!stub.check_entitlement().unwrap());
    }

    #[test]
    fn test_stub_failing() {
        let stub = StubChecker::failing(Error::value_incorrect("bogus"));
        let err = stub.check_entitlement().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueIncorrect);
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_stub_call_count() {
        let stub = StubChecker::granted(true);
        assert_eq!(stub.call_count(), 0);

        let _ = stub.check_entitlement();
        assert_eq!(stub.call_count(), 1);

        let _ = stub.check_entitlement();
        assert_eq!(stub.call_count(), 2);
    }

    #[test]
    fn test_stub_clone_shares_counter() {
        let stub = StubChecker::granted(false);
        let other = stub.clone();
        let _ = other.check_entitlement();
        assert_eq!(stub.call_count(), 1);
    }
}
