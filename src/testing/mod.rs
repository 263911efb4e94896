//! Testing utilities for the carrier entitlement SDK.
//!
//! This module provides tools for testing applications that use the SDK:
//!
//! - [`StubChecker`]: a capability double with a scripted outcome and a call
//!   counter
//! - [`StaticTokenSource`]: a fixed-token oracle for exercising the real
//!   platform checker
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use carrier_entitlement::{Sdk, testing::StubChecker};
//!
//! let stub = StubChecker::granted(true);
//! let sdk = Sdk::builder().checker(Arc::new(stub.clone())).build();
//!
//! assert!(sdk.check_entitlement().execute().unwrap());
//! assert_eq!(stub.call_count(), 1);
//! ```
//!
//! ## StubChecker vs StaticTokenSource
//!
//! | Feature                       | StubChecker | StaticTokenSource |
//! |-------------------------------|-------------|-------------------|
//! | Replaces the whole capability | ✓           | ✗                 |
//! | Exercises token mapping       | ✗           | ✓                 |
//! | Scripted failures             | ✓           | ✗                 |
//! | Best for                      | Use case / flow tests | Checker tests |

mod static_source;
mod stub_checker;

pub use static_source::StaticTokenSource;
pub use stub_checker::StubChecker;
