//! Error types for the carrier entitlement SDK.
//!
//! The SDK provides a single error type, [`Error`], categorized by
//! [`ErrorKind`], a closed set of four failure reasons.
//!
//! ## Key Invariant
//!
//! `check_entitlement()` returns `Ok(false)` for an absent entitlement, not
//! `Err`. Absence is a normal outcome; only a failed platform query is an
//! error. The presentation layer alone maps `Ok(false)` to
//! [`ErrorKind::EntitlementMissing`] when rendering a message.
//!
//! ```rust,ignore
//! // capability - absence is Ok(false)
//! let granted = checker.check_entitlement()?;
//!
//! // presentation - absence renders as EntitlementMissing
//! let state = screen.state();
//! ```

mod core;
mod kind;

pub use self::core::Error;
pub use self::kind::ErrorKind;

/// A specialized `Result` type for entitlement operations.
pub type Result<T> = std::result::Result<T, Error>;
