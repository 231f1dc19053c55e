//! Object request shapes.

use chrono::{DateTime, Utc};

use crate::blob::StreamingBlob;
use crate::types::{
    Metadata, MetadataDirective, ObjectCannedACL, ObjectLockLegalHoldStatus, ObjectLockMode,
    RequestPayer, ServerSideEncryption, StorageClass, TaggingDirective,
};

s3_shape! {
    /// S3 PutObjectRequest.
    pub struct PutObjectRequest {
        /// HTTP header: `x-amz-acl`.
        acl: ObjectCannedACL => "ACL",
        /// HTTP payload.
        body: StreamingBlob => "Body",
        /// HTTP label (URI path).
        bucket: String => "Bucket",
        /// HTTP header: `Cache-Control`.
        cache_control: String => "CacheControl",
        /// HTTP header: `Content-Disposition`.
        content_disposition: String => "ContentDisposition",
        /// HTTP header: `Content-Encoding`.
        content_encoding: String => "ContentEncoding",
        /// HTTP header: `Content-Language`.
        content_language: String => "ContentLanguage",
        /// HTTP header: `Content-Length`.
        content_length: i64 => "ContentLength",
        /// HTTP header: `Content-MD5`.
        content_md5: String => "ContentMD5",
        /// HTTP header: `Content-Type`.
        content_type: String => "ContentType",
        /// HTTP header: `Expires`.
        expires: DateTime<Utc> => "Expires",
        /// HTTP header: `x-amz-grant-full-control`.
        grant_full_control: String => "GrantFullControl",
        /// HTTP header: `x-amz-grant-read`.
        grant_read: String => "GrantRead",
        /// HTTP header: `x-amz-grant-read-acp`.
        grant_read_acp: String => "GrantReadACP",
        /// HTTP header: `x-amz-grant-write-acp`.
        grant_write_acp: String => "GrantWriteACP",
        /// HTTP label (URI path).
        key: String => "Key",
        /// HTTP prefix headers: `x-amz-meta-`.
        metadata: Metadata => "Metadata",
        /// HTTP header: `x-amz-server-side-encryption`.
        server_side_encryption: ServerSideEncryption => "ServerSideEncryption",
        /// HTTP header: `x-amz-storage-class`.
        storage_class: StorageClass => "StorageClass",
        /// HTTP header: `x-amz-website-redirect-location`.
        website_redirect_location: String => "WebsiteRedirectLocation",
        /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
        sse_customer_algorithm: String => "SSECustomerAlgorithm",
        /// HTTP header: `x-amz-server-side-encryption-customer-key`.
        sse_customer_key: String => "SSECustomerKey",
        /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
        sse_customer_key_md5: String => "SSECustomerKeyMD5",
        /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
        ssekms_key_id: String => "SSEKMSKeyId",
        /// HTTP header: `x-amz-server-side-encryption-context`.
        ssekms_encryption_context: String => "SSEKMSEncryptionContext",
        /// HTTP header: `x-amz-request-payer`.
        request_payer: RequestPayer => "RequestPayer",
        /// HTTP header: `x-amz-tagging`.
        tagging: String => "Tagging",
        /// HTTP header: `x-amz-object-lock-mode`.
        object_lock_mode: ObjectLockMode => "ObjectLockMode",
        /// HTTP header: `x-amz-object-lock-retain-until-date`.
        object_lock_retain_until_date: DateTime<Utc> => "ObjectLockRetainUntilDate",
        /// HTTP header: `x-amz-object-lock-legal-hold`.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
    }
}

s3_shape! {
    /// S3 CopyObjectRequest.
    pub struct CopyObjectRequest {
        /// HTTP header: `x-amz-acl`.
        acl: ObjectCannedACL => "ACL",
        /// HTTP label (URI path).
        bucket: String => "Bucket",
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
        /// HTTP header: `x-amz-copy-source`.
        copy_source: String => "CopySource",
        /// HTTP header: `x-amz-copy-source-if-match`.
        copy_source_if_match: String => "CopySourceIfMatch",
        /// HTTP header: `x-amz-copy-source-if-modified-since`.
        copy_source_if_modified_since: DateTime<Utc> => "CopySourceIfModifiedSince",
        /// HTTP header: `x-amz-copy-source-if-none-match`.
        copy_source_if_none_match: String => "CopySourceIfNoneMatch",
        /// HTTP header: `x-amz-copy-source-if-unmodified-since`.
        copy_source_if_unmodified_since: DateTime<Utc> => "CopySourceIfUnmodifiedSince",
        /// HTTP header: `Expires`.
        expires: DateTime<Utc> => "Expires",
        /// HTTP header: `x-amz-grant-full-control`.
        grant_full_control: String => "GrantFullControl",
        /// HTTP header: `x-amz-grant-read`.
        grant_read: String => "GrantRead",
        /// HTTP header: `x-amz-grant-read-acp`.
        grant_read_acp: String => "GrantReadACP",
        /// HTTP header: `x-amz-grant-write-acp`.
        grant_write_acp: String => "GrantWriteACP",
        /// HTTP label (URI path).
        key: String => "Key",
        /// HTTP prefix headers: `x-amz-meta-`.
        metadata: Metadata => "Metadata",
        /// HTTP header: `x-amz-metadata-directive`.
        metadata_directive: MetadataDirective => "MetadataDirective",
        /// HTTP header: `x-amz-tagging-directive`.
        tagging_directive: TaggingDirective => "TaggingDirective",
        /// HTTP header: `x-amz-server-side-encryption`.
        server_side_encryption: ServerSideEncryption => "ServerSideEncryption",
        /// HTTP header: `x-amz-storage-class`.
        storage_class: StorageClass => "StorageClass",
        /// HTTP header: `x-amz-website-redirect-location`.
        website_redirect_location: String => "WebsiteRedirectLocation",
        /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
        sse_customer_algorithm: String => "SSECustomerAlgorithm",
        /// HTTP header: `x-amz-server-side-encryption-customer-key`.
        sse_customer_key: String => "SSECustomerKey",
        /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
        sse_customer_key_md5: String => "SSECustomerKeyMD5",
        /// HTTP header: `x-amz-server-side-encryption-aws-kms-key-id`.
        ssekms_key_id: String => "SSEKMSKeyId",
        /// HTTP header: `x-amz-server-side-encryption-context`.
        ssekms_encryption_context: String => "SSEKMSEncryptionContext",
        /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-algorithm`.
        copy_source_sse_customer_algorithm: String => "CopySourceSSECustomerAlgorithm",
        /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-key`.
        copy_source_sse_customer_key: String => "CopySourceSSECustomerKey",
        /// HTTP header: `x-amz-copy-source-server-side-encryption-customer-key-MD5`.
        copy_source_sse_customer_key_md5: String => "CopySourceSSECustomerKeyMD5",
        /// HTTP header: `x-amz-request-payer`.
        request_payer: RequestPayer => "RequestPayer",
        /// HTTP header: `x-amz-tagging`.
        tagging: String => "Tagging",
        /// HTTP header: `x-amz-object-lock-mode`.
        object_lock_mode: ObjectLockMode => "ObjectLockMode",
        /// HTTP header: `x-amz-object-lock-retain-until-date`.
        object_lock_retain_until_date: DateTime<Utc> => "ObjectLockRetainUntilDate",
        /// HTTP header: `x-amz-object-lock-legal-hold`.
        object_lock_legal_hold_status: ObjectLockLegalHoldStatus => "ObjectLockLegalHoldStatus",
    }
}

s3_shape! {
    /// S3 GetObjectRequest.
    pub struct GetObjectRequest {
        /// HTTP label (URI path).
        bucket: String => "Bucket",
        /// HTTP header: `If-Match`.
        if_match: String => "IfMatch",
        /// HTTP header: `If-Modified-Since`.
        if_modified_since: DateTime<Utc> => "IfModifiedSince",
        /// HTTP header: `If-None-Match`.
        if_none_match: String => "IfNoneMatch",
        /// HTTP header: `If-Unmodified-Since`.
        if_unmodified_since: DateTime<Utc> => "IfUnmodifiedSince",
        /// HTTP label (URI path).
        key: String => "Key",
        /// HTTP header: `Range`.
        range: String => "Range",
        /// HTTP query: `response-cache-control`.
        response_cache_control: String => "ResponseCacheControl",
        /// HTTP query: `response-content-disposition`.
        response_content_disposition: String => "ResponseContentDisposition",
        /// HTTP query: `response-content-encoding`.
        response_content_encoding: String => "ResponseContentEncoding",
        /// HTTP query: `response-content-language`.
        response_content_language: String => "ResponseContentLanguage",
        /// HTTP query: `response-content-type`.
        response_content_type: String => "ResponseContentType",
        /// HTTP query: `response-expires`.
        response_expires: DateTime<Utc> => "ResponseExpires",
        /// HTTP query: `versionId`.
        version_id: String => "VersionId",
        /// HTTP header: `x-amz-server-side-encryption-customer-algorithm`.
        sse_customer_algorithm: String => "SSECustomerAlgorithm",
        /// HTTP header: `x-amz-server-side-encryption-customer-key`.
        sse_customer_key: String => "SSECustomerKey",
        /// HTTP header: `x-amz-server-side-encryption-customer-key-MD5`.
        sse_customer_key_md5: String => "SSECustomerKeyMD5",
        /// HTTP header: `x-amz-request-payer`.
        request_payer: RequestPayer => "RequestPayer",
        /// HTTP query: `partNumber`.
        part_number: i32 => "PartNumber",
    }
}

impl_metadata_entries!(PutObjectRequest, CopyObjectRequest);
