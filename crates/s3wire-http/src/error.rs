//! Codec error type.

use s3wire_model::S3Error;
use s3wire_xml::XmlError;

/// Errors raised while encoding a request or decoding a response.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// A member that forms part of the URI path was unset.
    #[error("missing required URI label: {0}")]
    MissingLabel(&'static str),

    /// A header value could not be encoded or parsed (strict mode only).
    #[error("invalid value for header {name}: {value:?}")]
    InvalidHeaderValue {
        /// The header name.
        name: String,
        /// The offending value, lossily decoded.
        value: String,
    },

    /// The response body was not valid XML for the expected shape.
    #[error("malformed XML body: {0}")]
    Xml(#[from] XmlError),

    /// The request could not be assembled.
    #[error("failed to build request: {0}")]
    Http(#[from] http::Error),

    /// The service answered with an error response.
    #[error(transparent)]
    Service(#[from] S3Error),
}

impl CodecError {
    pub(crate) fn invalid_header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHeaderValue {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The service error carried by this failure, if any.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&S3Error> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}
