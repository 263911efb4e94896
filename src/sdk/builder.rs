//! Builder for the SDK composition root.

use std::sync::Arc;
use std::time::Duration;

use crate::{
    checker::{CarrierTokenSource, EntitlementChecker, SystemEntitlementChecker},
    sdk::Sdk,
};

/// Default cosmetic delay before the check fires (loading-spinner pacing).
pub const DEFAULT_CHECK_DELAY: Duration = Duration::from_millis(500);

/// Builder for [`Sdk`].
///
/// Every setting has a default, so `Sdk::builder().build()` yields a working
/// SDK: the platform-backed checker over the system token source, and the
/// default 500ms pre-check delay.
///
/// ## Substitution points
///
/// - [`token_source`](SdkBuilder::token_source): bridge the real platform
///   oracle in (the usual path for mobile hosts).
/// - [`checker`](SdkBuilder::checker): replace the entire capability, e.g.
///   with a [`StubChecker`](crate::testing::StubChecker) in tests. Takes
///   precedence over `token_source`.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use carrier_entitlement::Sdk;
///
/// let sdk = Sdk::builder()
///     .check_delay(Duration::from_millis(250))
///     .build();
/// ```
#[derive(Default)]
pub struct SdkBuilder {
    token_source: Option<Arc<dyn CarrierTokenSource>>,
    checker: Option<Arc<dyn EntitlementChecker>>,
    check_delay: Option<Duration>,
}

impl SdkBuilder {
    /// Creates a builder with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the platform token oracle consumed by the default checker.
    ///
    /// Ignored when a full [`checker`](SdkBuilder::checker) is supplied.
    #[must_use]
    pub fn token_source(mut self, source: Arc<dyn CarrierTokenSource>) -> Self {
        self.token_source = Some(source);
        self
    }

    /// Replaces the entire entitlement check capability.
    #[must_use]
    pub fn checker(mut self, checker: Arc<dyn EntitlementChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Sets the cosmetic delay before the verification flow fires its check.
    ///
    /// The delay is pure loading-spinner pacing, not a functional contract;
    /// the flow guarantees only "fires after at least this delay, exactly
    /// once". Defaults to [`DEFAULT_CHECK_DELAY`].
    #[must_use]
    pub fn check_delay(mut self, delay: Duration) -> Self {
        self.check_delay = Some(delay);
        self
    }

    /// Builds the SDK.
    pub fn build(self) -> Sdk {
        let checker = match self.checker {
            Some(checker) => checker,
            None => {
                let source = self
                    .token_source
                    .unwrap_or_else(|| Arc::new(crate::checker::SystemTokenSource::new()));
                Arc::new(SystemEntitlementChecker::new(source))
            }
        };
        Sdk {
            checker,
            check_delay: self.check_delay.unwrap_or(DEFAULT_CHECK_DELAY),
        }
    }
}

impl std::fmt::Debug for SdkBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkBuilder")
            .field("has_token_source", &self.token_source.is_some())
            .field("has_checker", &self.checker.is_some())
            .field("check_delay", &self.check_delay)
            .finish()
    }
}
