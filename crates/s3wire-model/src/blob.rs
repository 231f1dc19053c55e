//! Opaque object payloads.

use std::fmt;

/// A wrapper around `bytes::Bytes` for object body data.
///
/// Equality and hashing compare the bytes; the diagnostic rendering shows
/// only the length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StreamingBlob {
    /// The underlying bytes data.
    pub data: bytes::Bytes,
}

impl StreamingBlob {
    /// Create a new `StreamingBlob` from bytes.
    #[must_use]
    pub fn new(data: impl Into<bytes::Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns true if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl fmt::Display for StreamingBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} bytes]", self.data.len())
    }
}

impl crate::shape::RenderValue for StreamingBlob {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<bytes::Bytes> for StreamingBlob {
    fn from(data: bytes::Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for StreamingBlob {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&'static [u8]> for StreamingBlob {
    fn from(data: &'static [u8]) -> Self {
        Self {
            data: bytes::Bytes::from_static(data),
        }
    }
}

impl From<&'static str> for StreamingBlob {
    fn from(data: &'static str) -> Self {
        Self {
            data: bytes::Bytes::from_static(data.as_bytes()),
        }
    }
}
