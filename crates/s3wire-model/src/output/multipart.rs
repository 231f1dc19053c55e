//! Multipart upload response shapes.

use chrono::{DateTime, Utc};

use crate::types::{RequestCharged, ServerSideEncryption};

s3_shape! {
    /// S3 CreateMultipartUploadResult.
    ///
    /// Serialized as the `InitiateMultipartUploadResult` XML document; the
    /// remaining members travel as response headers.
    pub struct CreateMultipartUploadResult {
        /// HTTP header: `x-amz-abort-date`.
        abort_date: DateTime<Utc> => "AbortDate",
        /// HTTP header: `x-amz-abort-rule-id`.
        abort_rule_id: String => "AbortRuleId",
        /// XML element: `Bucket`.
        bucket: String => "Bucket",
        /// XML element: `Key`.
        key: String => "Key",
        /// XML element: `UploadId`.
        upload_id: String => "UploadId",
        /// HTTP header: `x-amz-server-side-encryption`.
        server_side_encryption: ServerSideEncryption => "ServerSideEncryption",
        /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
        sse_customer_algorithm: String => "SSECustomerAlgorithm",
        /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
        sse_customer_key_md5: String => "SSECustomerKeyMD5",
        /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
        ssekms_key_id: String => "SSEKMSKeyId",
        /// HTTP header: `x-amz-server-side-encryption-context`.
        ssekms_encryption_context: String => "SSEKMSEncryptionContext",
        /// HTTP header: `x-amz-request-charged`.
        request_charged: RequestCharged => "RequestCharged",
    }
}
