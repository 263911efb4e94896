//! Opaque header image payload.

use std::fmt;

/// Caller-supplied image shown in the verification flow header.
///
/// The SDK treats image data as opaque bytes and hands them back to whatever
/// renders the flow; it never decodes or validates them.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderImage {
    data: Vec<u8>,
}

impl HeaderImage {
    /// Wraps raw image bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Returns the raw image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for HeaderImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderImage")
            .field("len", &self.data.len())
            .finish()
    }
}

impl From<Vec<u8>> for HeaderImage {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
