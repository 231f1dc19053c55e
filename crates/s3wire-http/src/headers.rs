//! Header and query parameter names used on the wire.
//!
//! Names are lowercase so they can be turned into `HeaderName`s without
//! normalization.
#![allow(missing_docs)]

pub const ACCEPT_RANGES: &str = "accept-ranges";
pub const CACHE_CONTROL: &str = "cache-control";
pub const CONTENT_DISPOSITION: &str = "content-disposition";
pub const CONTENT_ENCODING: &str = "content-encoding";
pub const CONTENT_LANGUAGE: &str = "content-language";
pub const CONTENT_LENGTH: &str = "content-length";
pub const CONTENT_MD5: &str = "content-md5";
pub const CONTENT_RANGE: &str = "content-range";
pub const CONTENT_TYPE: &str = "content-type";
pub const ETAG: &str = "etag";
pub const EXPIRES: &str = "expires";
pub const IF_MATCH: &str = "if-match";
pub const IF_MODIFIED_SINCE: &str = "if-modified-since";
pub const IF_NONE_MATCH: &str = "if-none-match";
pub const IF_UNMODIFIED_SINCE: &str = "if-unmodified-since";
pub const LAST_MODIFIED: &str = "last-modified";
pub const RANGE: &str = "range";

pub const X_AMZ_ABORT_DATE: &str = "x-amz-abort-date";
pub const X_AMZ_ABORT_RULE_ID: &str = "x-amz-abort-rule-id";
pub const X_AMZ_ACL: &str = "x-amz-acl";
pub const X_AMZ_COPY_SOURCE: &str = "x-amz-copy-source";
pub const X_AMZ_COPY_SOURCE_IF_MATCH: &str = "x-amz-copy-source-if-match";
pub const X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE: &str = "x-amz-copy-source-if-modified-since";
pub const X_AMZ_COPY_SOURCE_IF_NONE_MATCH: &str = "x-amz-copy-source-if-none-match";
pub const X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE: &str = "x-amz-copy-source-if-unmodified-since";
pub const X_AMZ_COPY_SOURCE_SSE_CUSTOMER_ALGORITHM: &str =
    "x-amz-copy-source-server-side-encryption-customer-algorithm";
pub const X_AMZ_COPY_SOURCE_SSE_CUSTOMER_KEY: &str =
    "x-amz-copy-source-server-side-encryption-customer-key";
pub const X_AMZ_COPY_SOURCE_SSE_CUSTOMER_KEY_MD5: &str =
    "x-amz-copy-source-server-side-encryption-customer-key-md5";
pub const X_AMZ_DELETE_MARKER: &str = "x-amz-delete-marker";
pub const X_AMZ_EXPIRATION: &str = "x-amz-expiration";
pub const X_AMZ_GRANT_FULL_CONTROL: &str = "x-amz-grant-full-control";
pub const X_AMZ_GRANT_READ: &str = "x-amz-grant-read";
pub const X_AMZ_GRANT_READ_ACP: &str = "x-amz-grant-read-acp";
pub const X_AMZ_GRANT_WRITE_ACP: &str = "x-amz-grant-write-acp";
pub const X_AMZ_ID_2: &str = "x-amz-id-2";
pub const X_AMZ_METADATA_DIRECTIVE: &str = "x-amz-metadata-directive";
pub const X_AMZ_MISSING_META: &str = "x-amz-missing-meta";
pub const X_AMZ_MP_PARTS_COUNT: &str = "x-amz-mp-parts-count";
pub const X_AMZ_OBJECT_LOCK_LEGAL_HOLD: &str = "x-amz-object-lock-legal-hold";
pub const X_AMZ_OBJECT_LOCK_MODE: &str = "x-amz-object-lock-mode";
pub const X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE: &str = "x-amz-object-lock-retain-until-date";
pub const X_AMZ_REPLICATION_STATUS: &str = "x-amz-replication-status";
pub const X_AMZ_REQUEST_CHARGED: &str = "x-amz-request-charged";
pub const X_AMZ_REQUEST_ID: &str = "x-amz-request-id";
pub const X_AMZ_REQUEST_PAYER: &str = "x-amz-request-payer";
pub const X_AMZ_RESTORE: &str = "x-amz-restore";
pub const X_AMZ_SERVER_SIDE_ENCRYPTION: &str = "x-amz-server-side-encryption";
pub const X_AMZ_SSE_CONTEXT: &str = "x-amz-server-side-encryption-context";
pub const X_AMZ_SSE_CUSTOMER_ALGORITHM: &str = "x-amz-server-side-encryption-customer-algorithm";
pub const X_AMZ_SSE_CUSTOMER_KEY: &str = "x-amz-server-side-encryption-customer-key";
pub const X_AMZ_SSE_CUSTOMER_KEY_MD5: &str = "x-amz-server-side-encryption-customer-key-md5";
pub const X_AMZ_SSE_KMS_KEY_ID: &str = "x-amz-server-side-encryption-aws-kms-key-id";
pub const X_AMZ_STORAGE_CLASS: &str = "x-amz-storage-class";
pub const X_AMZ_TAGGING: &str = "x-amz-tagging";
pub const X_AMZ_TAGGING_COUNT: &str = "x-amz-tagging-count";
pub const X_AMZ_TAGGING_DIRECTIVE: &str = "x-amz-tagging-directive";
pub const X_AMZ_VERSION_ID: &str = "x-amz-version-id";
pub const X_AMZ_WEBSITE_REDIRECT_LOCATION: &str = "x-amz-website-redirect-location";

pub const QUERY_PART_NUMBER: &str = "partNumber";
pub const QUERY_RESPONSE_CACHE_CONTROL: &str = "response-cache-control";
pub const QUERY_RESPONSE_CONTENT_DISPOSITION: &str = "response-content-disposition";
pub const QUERY_RESPONSE_CONTENT_ENCODING: &str = "response-content-encoding";
pub const QUERY_RESPONSE_CONTENT_LANGUAGE: &str = "response-content-language";
pub const QUERY_RESPONSE_CONTENT_TYPE: &str = "response-content-type";
pub const QUERY_RESPONSE_EXPIRES: &str = "response-expires";
pub const QUERY_UPLOADS: &str = "uploads";
pub const QUERY_VERSION_ID: &str = "versionId";
