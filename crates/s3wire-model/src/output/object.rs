//! Object response shapes.

use chrono::{DateTime, Utc};

use crate::blob::StreamingBlob;
use crate::types::{
    DeletedObject, Error, Metadata, ObjectLockLegalHoldStatus, ObjectLockMode, ReplicationStatus,
    RequestCharged, ServerSideEncryption, StorageClass,
};

s3_shape! {
    /// S3 GetObjectResult.
    pub struct GetObjectResult {
        /// HTTP payload.
        body: StreamingBlob => "Body",
        /// HTTP header: `x-amz-delete-marker`.
        delete_marker: bool => "DeleteMarker",
        /// HTTP header: `accept-ranges`.
        accept_ranges: String => "AcceptRanges",
        /// HTTP header: `x-amz-expiration`.
        expiration: String => "Expiration",
        /// HTTP header: `x-amz-restore`.
        restore: String => "Restore",
        /// HTTP header: `Last-Modified`.
        last_modified: DateTime<Utc> => "LastModified",
        /// HTTP header: `Content-Length`.
        content_length: i64 => "ContentLength",
        /// HTTP header: `ETag`.
        e_tag: String => "ETag",
        /// HTTP header: `x-amz-missing-meta`.
        missing_meta: i32 => "MissingMeta",
        /// HTTP header: `x-amz-version-id`.
        version_id: String => "VersionId",
        /// HTTP header: `Cache-Control`.
        cache_control: String => "CacheControl",
        /// HTTP header: `Content-Disposition`.
        content_disposition: String => "ContentDisposition",
        /// HTTP header: `Content-Encoding`.
        content_encoding: String => "ContentEncoding",
        /// HTTP header: `Content-Language`.
        content_language: String => "ContentLanguage",
        /// HTTP header: `Content-Range`.
        content_range: String => "ContentRange",
        /// HTTP header: `Content-Type`.
        content_type: String => "ContentType",
        /// HTTP header: `Expires`.
        expires: DateTime<Utc> => "Expires",
        /// HTTP header: `x-amz-website-redirect-location`.
        website_redirect_location: String => "WebsiteRedirectLocation",
        /// HTTP header: `x-amz-server-side-encryption`.
        server_side_encryption: ServerSideEncryption => "ServerSideEncryption",
        /// HTTP prefix headers: `x-amz-meta-`.
        metadata: Metadata => "Metadata",
        /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
        sse_customer_algorithm: String => "SSECustomerAlgorithm",
        /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
        sse_customer_key_md5: String => "SSECustomerKeyMD5",
        /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
        ssekms_key_id: String => "SSEKMSKeyId",
        /// HTTP header: `x-amz-storage-class`.
        storage_class: StorageClass => "StorageClass",
        /// HTTP header: `x-amz-request-charged`.
        request_charged: RequestCharged => "RequestCharged",
        /// HTTP header: `x-amz-replication-status`.
        replication_status: ReplicationStatus => "ReplicationStatus",
        /// HTTP header: `x-amz-mp-parts-count`.
        parts_count: i32 => "PartsCount",
        /// HTTP header: `x-amz-tagging-count`.
        tag_count: i32 => "TagCount",
        /// HTTP header: `x-amz-object-lock-mode`.
        object_lock_mode: ObjectLockMode => "ObjectLockMode",
        /// HTTP header: `x-amz-object-lock-retain-until-date`.
        object_lock_retain_until_date: DateTime<Utc> => "ObjectLockRetainUntilDate",
        /// HTTP header: `x-amz-object-lock-legal-hold`.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
    }
}

s3_shape! {
    /// S3 HeadObjectResult.
    pub struct HeadObjectResult {
        /// HTTP header: `x-amz-delete-marker`.
        delete_marker: bool => "DeleteMarker",
        /// HTTP header: `accept-ranges`.
        accept_ranges: String => "AcceptRanges",
        /// HTTP header: `x-amz-expiration`.
        expiration: String => "Expiration",
        /// HTTP header: `x-amz-restore`.
        restore: String => "Restore",
        /// HTTP header: `Last-Modified`.
        last_modified: DateTime<Utc> => "LastModified",
        /// HTTP header: `Content-Length`.
        content_length: i64 => "ContentLength",
        /// HTTP header: `ETag`.
        e_tag: String => "ETag",
        /// HTTP header: `x-amz-missing-meta`.
        missing_meta: i32 => "MissingMeta",
        /// HTTP header: `x-amz-version-id`.
        version_id: String => "VersionId",
        /// HTTP header: `Cache-Control`.
        cache_control: String => "CacheControl",
        /// HTTP header: `Content-Disposition`.
        content_disposition: String => "ContentDisposition",
        /// HTTP header: `Content-Encoding`.
        content_encoding: String => "ContentEncoding",
        /// HTTP header: `Content-Language`.
        content_language: String => "ContentLanguage",
        /// HTTP header: `Content-Type`.
        content_type: String => "ContentType",
        /// HTTP header: `Expires`.
        expires: DateTime<Utc> => "Expires",
        /// HTTP header: `x-amz-website-redirect-location`.
        website_redirect_location: String => "WebsiteRedirectLocation",
        /// HTTP header: `x-amz-server-side-encryption`.
        server_side_encryption: ServerSideEncryption => "ServerSideEncryption",
        /// HTTP prefix headers: `x-amz-meta-`.
        metadata: Metadata => "Metadata",
        /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
        sse_customer_algorithm: String => "SSECustomerAlgorithm",
        /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
        sse_customer_key_md5: String => "SSECustomerKeyMD5",
        /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
        ssekms_key_id: String => "SSEKMSKeyId",
        /// HTTP header: `x-amz-storage-class`.
        storage_class: StorageClass => "StorageClass",
        /// HTTP header: `x-amz-request-charged`.
        request_charged: RequestCharged => "RequestCharged",
        /// HTTP header: `x-amz-replication-status`.
        replication_status: ReplicationStatus => "ReplicationStatus",
        /// HTTP header: `x-amz-mp-parts-count`.
        parts_count: i32 => "PartsCount",
        /// HTTP header: `x-amz-object-lock-mode`.
        object_lock_mode: ObjectLockMode => "ObjectLockMode",
        /// HTTP header: `x-amz-object-lock-retain-until-date`.
        object_lock_retain_until_date: DateTime<Utc> => "ObjectLockRetainUntilDate",
        /// HTTP header: `x-amz-object-lock-legal-hold`.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
    }
}

s3_shape! {
    /// S3 DeleteObjectsResult.
    ///
    /// Serialized as the `DeleteResult` XML document.
    pub struct DeleteObjectsResult {
        /// Keys that were removed.
        deleted: Vec<DeletedObject> => "Deleted",
        /// HTTP header: `x-amz-request-charged`.
        request_charged: RequestCharged => "RequestCharged",
        /// Keys that could not be removed.
        errors: Vec<Error> => "Errors",
    }
}

impl_metadata_entries!(GetObjectResult, HeadObjectResult);

impl DeleteObjectsResult {
    /// Returns `true` when at least one key failed to delete.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }
}
