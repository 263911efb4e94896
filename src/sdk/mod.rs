//! The SDK composition root.
//!
//! [`Sdk`] is an explicit, passed-in composition root: it is constructed once
//! at startup (via [`Sdk::builder()`]) and threaded through constructors.
//! There is no process-wide singleton and no hidden mutable state; hosts that
//! need different wiring (a bridged platform oracle, a test double) build a
//! different `Sdk`.

mod builder;

pub use builder::{SdkBuilder, DEFAULT_CHECK_DELAY};

use std::sync::Arc;
use std::time::Duration;

use crate::{
    checker::EntitlementChecker,
    screen::{VerificationOptions, VerificationScreen},
    verify::CheckEntitlement,
};

/// The carrier entitlement SDK.
///
/// This is the main entry point. Build one with [`Sdk::builder()`], then hand
/// out use cases with [`check_entitlement()`](Sdk::check_entitlement) or drive
/// the caller-facing flow with [`verification()`](Sdk::verification).
///
/// ## Thread Safety
///
/// `Sdk` is `Clone` and thread-safe; the capability behind it is shared.
///
/// ## Example
///
/// ```rust
/// use carrier_entitlement::Sdk;
///
/// let sdk = Sdk::builder().build();
/// let granted = sdk.check_entitlement().execute()?;
/// assert!(!granted); // no telephony subsystem on this target
/// # Ok::<(), carrier_entitlement::Error>(())
/// ```
#[derive(Clone)]
pub struct Sdk {
    pub(crate) checker: Arc<dyn EntitlementChecker>,
    pub(crate) check_delay: Duration,
}

impl Sdk {
    /// Creates a new SDK builder.
    pub fn builder() -> SdkBuilder {
        SdkBuilder::new()
    }

    /// Returns the verification use case wired to this SDK's capability.
    pub fn check_entitlement(&self) -> CheckEntitlement {
        CheckEntitlement::new(self.checker.clone())
    }

    /// Constructs the caller-facing verification flow.
    ///
    /// The flow starts in the loading state; call
    /// [`run()`](VerificationScreen::run) to fire the one-shot check.
    pub fn verification(&self, options: VerificationOptions) -> VerificationScreen {
        VerificationScreen::new(self.check_entitlement(), self.check_delay, options)
    }

    /// Returns the configured pre-check delay.
    pub fn check_delay(&self) -> Duration {
        self.check_delay
    }
}

impl std::fmt::Debug for Sdk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdk")
            .field("check_delay", &self.check_delay)
            .finish_non_exhaustive()
    }
}
