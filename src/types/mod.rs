//! Core data types for the carrier entitlement SDK.
//!
//! - [`CarrierToken`]: opaque platform token whose presence is the signal
//! - [`VerificationState`]: three-state flow machine value
//! - [`HeaderImage`]: opaque caller-supplied image payload

mod image;
mod state;
mod token;

pub use image::HeaderImage;
pub use state::VerificationState;
pub use token::CarrierToken;
