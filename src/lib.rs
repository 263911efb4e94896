//! # Carrier Entitlement SDK
//!
//! SDK for verifying whether the host process carries a carrier-level
//! telephony entitlement, and for driving the three-state verification flow
//! that presents the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use carrier_entitlement::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Compose the SDK once at startup
//!     let sdk = Sdk::builder().build();
//!
//!     // Drive the verification flow
//!     let mut screen = sdk.verification(
//!         VerificationOptions::new().header_text("My App"),
//!     );
//!     screen.run().await;
//!
//!     match screen.state() {
//!         VerificationState::Ready { granted } => println!("granted: {}", granted),
//!         VerificationState::Failed(err) => println!("failed: {}", err),
//!         VerificationState::Loading => unreachable!("run() always transitions"),
//!     }
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Capability**: [`EntitlementChecker`] - one synchronous operation
//!   reading ambient platform state.
//! - **Absence ≠ Error**: `check_entitlement()` returns `Ok(false)` for a
//!   missing entitlement, not `Err`. Only a failed platform query is an error.
//! - **Composition root**: [`Sdk`] is built once and threaded through
//!   constructors; there is no global singleton.
//! - **One-shot flow**: the verification screen fires its check exactly once
//!   after a cosmetic delay, then stays in its terminal state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod checker;
pub mod error;
pub mod screen;
pub mod sdk;
pub mod types;
pub mod verify;

// Testing utilities
pub mod testing;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use checker::{CarrierTokenSource, EntitlementChecker};
pub use error::{Error, ErrorKind, Result};
pub use screen::{VerificationOptions, VerificationScreen};
pub use sdk::{Sdk, SdkBuilder};
pub use types::{CarrierToken, HeaderImage, VerificationState};
pub use verify::CheckEntitlement;
