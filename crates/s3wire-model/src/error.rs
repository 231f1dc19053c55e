//! Error vocabulary and error types.
//!
//! [`ModelError`] is the only failure the model layer raises on its own.
//! [`S3ErrorCode`] and [`S3Error`] describe what the service reports back; the
//! shapes never validate against them.

use std::fmt;

/// Local failures of the model layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Incremental insertion into a mapping member hit an existing key.
    #[error("duplicated key ({key}) provided for {member}")]
    DuplicateKey {
        /// Wire name of the mapping member.
        member: &'static str,
        /// The rejected key.
        key: String,
    },
}

/// Which side of the exchange is responsible for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The request was wrong; retrying it unchanged will fail again.
    Client,
    /// The service failed to process a valid request.
    Server,
}

macro_rules! error_codes {
    ($($code:ident => ($status:ident, $message:literal),)+) => {
        /// Well-known S3 error codes.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum S3ErrorCode {
            $(
                #[doc = concat!("`", stringify!($code), "`: ", $message, ".")]
                $code,
            )+
            /// A code outside the well-known set, kept verbatim.
            Unknown(String),
        }

        impl S3ErrorCode {
            /// Returns the error code as a string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$code => stringify!($code),)+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Returns the HTTP status the service documents for this code.
            ///
            /// Unknown codes map to `500 Internal Server Error`.
            #[must_use]
            pub fn default_status_code(&self) -> http::StatusCode {
                match self {
                    $(Self::$code => http::StatusCode::$status,)+
                    Self::Unknown(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
                }
            }

            /// Returns the documented message for this code.
            #[must_use]
            pub fn default_message(&self) -> &str {
                match self {
                    $(Self::$code => $message,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }
        }

        impl From<&str> for S3ErrorCode {
            fn from(s: &str) -> Self {
                match s {
                    $(stringify!($code) => Self::$code,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }
    };
}

error_codes! {
    AccessDenied => (FORBIDDEN, "Access Denied"),
    AccountProblem => (FORBIDDEN, "There is a problem with the account"),
    BadDigest => (BAD_REQUEST, "The Content-MD5 you specified did not match what we received"),
    BucketAlreadyExists => (CONFLICT, "The requested bucket name is not available"),
    BucketAlreadyOwnedByYou => (CONFLICT, "The bucket is already owned by you"),
    BucketNotEmpty => (CONFLICT, "The bucket you tried to delete is not empty"),
    EntityTooLarge => (BAD_REQUEST, "Your proposed upload exceeds the maximum allowed size"),
    EntityTooSmall => (BAD_REQUEST, "Your proposed upload is smaller than the minimum allowed size"),
    ExpiredToken => (BAD_REQUEST, "The provided token has expired"),
    IncompleteBody => (BAD_REQUEST, "You did not provide the number of bytes specified by the Content-Length HTTP header"),
    InternalError => (INTERNAL_SERVER_ERROR, "We encountered an internal error. Please try again"),
    InvalidAccessKeyId => (FORBIDDEN, "The AWS access key ID you provided does not exist in our records"),
    InvalidArgument => (BAD_REQUEST, "Invalid Argument"),
    InvalidBucketName => (BAD_REQUEST, "The specified bucket is not valid"),
    InvalidBucketState => (CONFLICT, "The request is not valid with the current state of the bucket"),
    InvalidDigest => (BAD_REQUEST, "The Content-MD5 you specified is not valid"),
    InvalidObjectState => (FORBIDDEN, "The operation is not valid for the current state of the object"),
    InvalidPart => (BAD_REQUEST, "One or more of the specified parts could not be found"),
    InvalidPartOrder => (BAD_REQUEST, "The list of parts was not in ascending order"),
    InvalidRange => (RANGE_NOT_SATISFIABLE, "The requested range cannot be satisfied"),
    InvalidRequest => (BAD_REQUEST, "Invalid Request"),
    InvalidStorageClass => (BAD_REQUEST, "The storage class you specified is not valid"),
    KeyTooLongError => (BAD_REQUEST, "Your key is too long"),
    MalformedXML => (BAD_REQUEST, "The XML you provided was not well-formed"),
    MetadataTooLarge => (BAD_REQUEST, "Your metadata headers exceed the maximum allowed metadata size"),
    MethodNotAllowed => (METHOD_NOT_ALLOWED, "The specified method is not allowed against this resource"),
    MissingContentLength => (LENGTH_REQUIRED, "You must provide the Content-Length HTTP header"),
    NoSuchBucket => (NOT_FOUND, "The specified bucket does not exist"),
    NoSuchKey => (NOT_FOUND, "The specified key does not exist"),
    NoSuchUpload => (NOT_FOUND, "The specified multipart upload does not exist"),
    NoSuchVersion => (NOT_FOUND, "The specified version does not exist"),
    NotImplemented => (NOT_IMPLEMENTED, "A header you provided implies functionality that is not implemented"),
    NotModified => (NOT_MODIFIED, "Not Modified"),
    ObjectNotInActiveTierError => (FORBIDDEN, "The source object of the COPY operation is not in the active tier"),
    PreconditionFailed => (PRECONDITION_FAILED, "At least one of the preconditions you specified did not hold"),
    RequestTimeTooSkewed => (FORBIDDEN, "The difference between the request time and the server's time is too large"),
    RequestTimeout => (BAD_REQUEST, "Your socket connection to the server was not read from or written to within the timeout period"),
    ServiceUnavailable => (SERVICE_UNAVAILABLE, "Reduce your request rate"),
    SignatureDoesNotMatch => (FORBIDDEN, "The request signature we calculated does not match the signature you provided"),
    SlowDown => (SERVICE_UNAVAILABLE, "Reduce your request rate"),
    XAmzContentSHA256Mismatch => (BAD_REQUEST, "The provided x-amz-content-sha256 header does not match what was computed"),
}

impl S3ErrorCode {
    /// Returns which side is at fault, derived from the documented status.
    #[must_use]
    pub fn fault(&self) -> Fault {
        if self.default_status_code().is_server_error() {
            Fault::Server
        } else {
            Fault::Client
        }
    }
}

impl From<String> for S3ErrorCode {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::str::FromStr for S3ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error reported by the service, as decoded from an error response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("S3Error({code}): {message}")]
pub struct S3Error {
    /// The error code.
    pub code: S3ErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The resource that caused the error.
    pub resource: Option<String>,
    /// The request ID (`x-amz-request-id`).
    pub request_id: Option<String>,
    /// The extended request ID (`x-amz-id-2`).
    pub host_id: Option<String>,
    /// The HTTP status code of the response.
    pub status_code: http::StatusCode,
}

impl S3Error {
    /// Create a new S3Error from an error code with its documented message and status.
    #[must_use]
    pub fn new(code: S3ErrorCode) -> Self {
        let status_code = code.default_status_code();
        let message = code.default_message().to_owned();
        Self {
            code,
            message,
            resource: None,
            request_id: None,
            host_id: None,
            status_code,
        }
    }

    /// Create a new S3Error with a custom message.
    #[must_use]
    pub fn with_message(code: S3ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            resource: None,
            request_id: None,
            host_id: None,
        }
    }

    /// Set the resource that caused this error.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the request ID.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Set the extended request ID.
    #[must_use]
    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = Some(host_id.into());
        self
    }

    /// Override the HTTP status, e.g. with the one actually received.
    #[must_use]
    pub fn with_status_code(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Which side is at fault, judged by the received status.
    #[must_use]
    pub fn fault(&self) -> Fault {
        if self.status_code.is_server_error() {
            Fault::Server
        } else {
            Fault::Client
        }
    }
}

/// Create an S3Error from an error code.
///
/// # Examples
///
/// ```
/// use s3wire_model::s3_error;
/// use s3wire_model::error::S3ErrorCode;
///
/// let err = s3_error!(NoSuchBucket);
/// assert_eq!(err.code, S3ErrorCode::NoSuchBucket);
///
/// let err = s3_error!(NoSuchKey, "The key does not exist");
/// assert_eq!(err.message, "The key does not exist");
/// ```
#[macro_export]
macro_rules! s3_error {
    ($code:ident) => {
        $crate::error::S3Error::new($crate::error::S3ErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::S3Error::with_message($crate::error::S3ErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_known_code() {
        assert_eq!(S3ErrorCode::from("NoSuchKey"), S3ErrorCode::NoSuchKey);
        assert_eq!(
            S3ErrorCode::NoSuchKey.default_status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(S3ErrorCode::NoSuchKey.fault(), Fault::Client);
    }

    #[test]
    fn test_should_keep_unknown_code_verbatim() {
        let code: S3ErrorCode = "FancyNewError".parse().expect("infallible");
        assert_eq!(code, S3ErrorCode::Unknown("FancyNewError".to_owned()));
        assert_eq!(code.as_str(), "FancyNewError");
        assert_eq!(code.fault(), Fault::Server);
    }

    #[test]
    fn test_should_classify_server_faults() {
        assert_eq!(S3ErrorCode::InternalError.fault(), Fault::Server);
        assert_eq!(S3ErrorCode::SlowDown.fault(), Fault::Server);
        assert_eq!(S3ErrorCode::AccessDenied.fault(), Fault::Client);
    }

    #[test]
    fn test_should_render_s3_error() {
        let err = S3Error::new(S3ErrorCode::NoSuchKey)
            .with_resource("photos/img.png")
            .with_request_id("req-1");
        assert_eq!(err.to_string(), "S3Error(NoSuchKey): The specified key does not exist");
        assert_eq!(err.resource.as_deref(), Some("photos/img.png"));
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_should_judge_fault_by_received_status() {
        let err = s3_error!(AccessDenied).with_status_code(http::StatusCode::BAD_GATEWAY);
        assert_eq!(err.fault(), Fault::Server);
    }

    #[test]
    fn test_should_format_duplicate_key_error() {
        let err = ModelError::DuplicateKey {
            member: "Metadata",
            key: "a".to_owned(),
        };
        assert_eq!(err.to_string(), "duplicated key (a) provided for Metadata");
    }
}
