//! Operations covered by the model.

/// The S3 operations whose shapes this crate defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3Operation {
    /// The CreateMultipartUpload operation.
    CreateMultipartUpload,
    /// The PutObject operation.
    PutObject,
    /// The CopyObject operation.
    CopyObject,
    /// The GetObject operation.
    GetObject,
    /// The HeadObject operation.
    HeadObject,
    /// The DeleteObjects operation.
    DeleteObjects,
}

impl S3Operation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateMultipartUpload,
        Self::PutObject,
        Self::CopyObject,
        Self::GetObject,
        Self::HeadObject,
        Self::DeleteObjects,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateMultipartUpload => "CreateMultipartUpload",
            Self::PutObject => "PutObject",
            Self::CopyObject => "CopyObject",
            Self::GetObject => "GetObject",
            Self::HeadObject => "HeadObject",
            Self::DeleteObjects => "DeleteObjects",
        }
    }

    /// Parse an operation name string into an S3Operation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// The HTTP method the operation is sent with.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self {
            Self::CreateMultipartUpload | Self::DeleteObjects => http::Method::POST,
            Self::PutObject | Self::CopyObject => http::Method::PUT,
            Self::GetObject => http::Method::GET,
            Self::HeadObject => http::Method::HEAD,
        }
    }
}

impl std::fmt::Display for S3Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_every_operation_name() {
        for op in S3Operation::ALL {
            assert_eq!(S3Operation::from_name(op.as_str()), Some(*op));
        }
        assert_eq!(S3Operation::from_name("ListBuckets"), None);
    }

    #[test]
    fn test_should_map_operations_to_methods() {
        assert_eq!(S3Operation::CreateMultipartUpload.method(), http::Method::POST);
        assert_eq!(S3Operation::CopyObject.method(), http::Method::PUT);
        assert_eq!(S3Operation::HeadObject.method(), http::Method::HEAD);
    }
}
