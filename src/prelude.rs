//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use carrier_entitlement::prelude::*;
//! ```
//!
//! This provides access to:
//! - The SDK composition root and builder
//! - The capability and use case types
//! - Error types
//! - The verification flow

pub use crate::{
    checker::{
        CarrierTokenSource, EntitlementChecker, FnTokenSource, SystemEntitlementChecker,
        SystemTokenSource,
    },
    error::{Error, ErrorKind, Result},
    screen::{VerificationOptions, VerificationScreen},
    sdk::{Sdk, SdkBuilder},
    testing::{StaticTokenSource, StubChecker},
    types::{CarrierToken, HeaderImage, VerificationState},
    verify::CheckEntitlement,
};
