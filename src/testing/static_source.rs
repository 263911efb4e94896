//! Fixed-token oracle for exercising the real checker.

use crate::{
    checker::CarrierTokenSource,
    types::CarrierToken,
    Result,
};

/// A token source that always reports the same fixed token state.
///
/// Unlike [`StubChecker`](crate::testing::StubChecker), which replaces the
/// whole capability, `StaticTokenSource` slots in below the real
/// [`SystemEntitlementChecker`](crate::checker::SystemEntitlementChecker) so
/// tests can exercise the production token-to-verdict mapping.
///
/// ## Example
///
/// ```rust
/// use std::sync::Arc;
/// use carrier_entitlement::checker::{EntitlementChecker, SystemEntitlementChecker};
/// use carrier_entitlement::testing::StaticTokenSource;
///
/// let checker = SystemEntitlementChecker::new(Arc::new(StaticTokenSource::present("tok")));
/// assert!(checker.check_entitlement().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: Option<CarrierToken>,
}

impl StaticTokenSource {
    /// Creates a source that always reports the given token as present.
    pub fn present(token: impl Into<CarrierToken>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Creates a source that always reports an absent token.
    pub fn absent() -> Self {
        Self { token: None }
    }
}

impl CarrierTokenSource for StaticTokenSource {
    fn carrier_token(&self) -> Result<Option<CarrierToken>> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        let source = StaticTokenSource::present("tok");
        assert!(source.carrier_token().unwrap().is_some());
    }

    #[test]
    fn test_absent() {
        let source = StaticTokenSource::absent();
        assert!(source.carrier_token().unwrap().is_none());
    }

    #[test]
    fn test_stable_across_reads() {
        let source = StaticTokenSource::present("tok");
        assert_eq!(
            source.carrier_token().unwrap(),
            source.carrier_token().unwrap()
        );
    }
}
