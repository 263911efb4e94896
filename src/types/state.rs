//! Verification flow state.

use crate::Error;

/// State of a single verification flow invocation.
///
/// The flow is a three-state machine: it starts in [`Loading`] and performs
/// exactly one transition per invocation, to either [`Ready`] or [`Failed`].
/// Both outcomes are terminal for that invocation; there is no retry, and the
/// caller must start a new flow to check again.
///
/// ```text
/// Loading ──► Ready { granted }
///        └──► Failed(error)
/// ```
///
/// [`Loading`]: VerificationState::Loading
/// [`Ready`]: VerificationState::Ready
/// [`Failed`]: VerificationState::Failed
#[derive(Debug)]
pub enum VerificationState {
    /// The check has not fired yet (initial state).
    Loading,
    /// The check completed and the entitlement is granted.
    Ready {
        /// Whether the carrier entitlement is granted.
        granted: bool,
    },
    /// The check completed with a failure, or the entitlement is absent.
    ///
    /// An absent entitlement surfaces here as
    /// [`ErrorKind::EntitlementMissing`](crate::ErrorKind::EntitlementMissing);
    /// the capability itself reported it as a plain `Ok(false)`.
    Failed(Error),
}

impl VerificationState {
    /// Returns `true` while the check has not fired.
    pub fn is_loading(&self) -> bool {
        matches!(self, VerificationState::Loading)
    }

    /// Returns `true` if the check completed with the entitlement granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, VerificationState::Ready { granted: true })
    }

    /// Returns the failure, if the flow ended in one.
    pub fn error(&self) -> Option<&Error> {
        match self {
            VerificationState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
