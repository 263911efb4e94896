//! The entitlement check capability.
//!
//! This module defines the capability boundary of the SDK:
//!
//! - [`EntitlementChecker`]: the single-operation capability trait
//! - [`CarrierTokenSource`]: the opaque platform token oracle it consumes
//! - [`SystemEntitlementChecker`]: the platform-backed implementation
//! - [`SystemTokenSource`] / [`FnTokenSource`]: default and host-bridged
//!   oracles
//!
//! The capability is deliberately tiny: one synchronous, side-effect-free
//! read of ambient platform state per call.

mod system;
mod traits;

pub use system::{SystemEntitlementChecker, SystemTokenSource};
pub use traits::{CarrierTokenSource, EntitlementChecker, FnTokenSource};
