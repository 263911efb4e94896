//! Platform-backed entitlement checker.

use std::sync::Arc;

use tracing::debug;

use crate::{
    checker::{CarrierTokenSource, EntitlementChecker},
    error::{Error, ErrorKind},
    types::CarrierToken,
    Result,
};

/// Default token source: no telephony subsystem.
///
/// This crate runs inside host processes on many targets, most of which have
/// no carrier subsystem at all. The default source therefore reports an absent
/// token deterministically, which the checker maps to "not granted" - never to
/// an error. Hosts that do have the subsystem (an iOS or Android app embedding
/// the SDK) bridge the real signal in via
/// [`SdkBuilder::token_source`](crate::SdkBuilder::token_source), typically
/// with an [`FnTokenSource`](crate::checker::FnTokenSource) reading the
/// platform API across the FFI boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTokenSource;

impl SystemTokenSource {
    /// Creates the default system token source.
    pub fn new() -> Self {
        Self
    }
}

impl CarrierTokenSource for SystemTokenSource {
    fn carrier_token(&self) -> Result<Option<CarrierToken>> {
        // No subsystem to consult on this target; absence is the answer.
        Ok(None)
    }
}

/// Platform-backed implementation of [`EntitlementChecker`].
///
/// Wraps a [`CarrierTokenSource`] and maps token presence to the entitlement
/// verdict: any non-null token means granted, an absent token means not
/// granted, and only a failed oracle read becomes an error
/// ([`ErrorKind::CheckFailed`] with the underlying cause attached).
///
/// The check reads ambient platform state and nothing else; calling it twice
/// over unchanged state yields identical results.
pub struct SystemEntitlementChecker {
    source: Arc<dyn CarrierTokenSource>,
}

impl SystemEntitlementChecker {
    /// Creates a checker over the given token source.
    pub fn new(source: Arc<dyn CarrierTokenSource>) -> Self {
        Self { source }
    }
}

impl Default for SystemEntitlementChecker {
    fn default() -> Self {
        Self::new(Arc::new(SystemTokenSource::new()))
    }
}

impl EntitlementChecker for SystemEntitlementChecker {
    fn check_entitlement(&self) -> Result<bool> {
        match self.source.carrier_token() {
            Ok(token) => {
                let granted = token.is_some();
                debug!(granted, "carrier entitlement check completed");
                Ok(granted)
            }
            Err(err) => {
                debug!(error = %err, "carrier token query failed");
                // Preserve an already-classified failure; wrap anything else.
                if err.kind() == ErrorKind::CheckFailed {
                    Err(err)
                } else {
                    Err(Error::check_failed(err))
                }
            }
        }
    }
}
