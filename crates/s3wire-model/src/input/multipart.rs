//! Multipart upload request shapes.

use chrono::{DateTime, Utc};

use crate::types::{
    Metadata, ObjectCannedACL, ObjectLockLegalHoldStatus, ObjectLockMode, RequestPayer,
    ServerSideEncryption, StorageClass,
};

s3_shape! {
    /// S3 CreateMultipartUploadRequest.
    ///
    /// Initiates a multipart upload and returns an upload ID. Every member is
    /// optional at this layer; a missing `Bucket` or `Key` only surfaces when
    /// the request is encoded for the wire.
    pub struct CreateMultipartUploadRequest {
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

impl_metadata_entries!(CreateMultipartUploadRequest);

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use chrono::TimeZone;

    use super::*;
    use crate::error::ModelError;
    use crate::shape::S3Shape;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn base_request() -> CreateMultipartUploadRequest {
        CreateMultipartUploadRequest::new().bucket("b1").key("k1")
    }

    #[test]
    fn test_should_reject_duplicate_metadata_key() {
        let mut req = base_request();
        req.add_metadata_entry("a", "1").expect("first entry");

        let err = req
            .add_metadata_entry("a", "2")
            .expect_err("duplicate entry should fail");
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                member: "Metadata",
                key: "a".to_owned()
            }
        );
        assert_eq!(err.to_string(), "duplicated key (a) provided for Metadata");

        let metadata = req.metadata.as_ref().expect("metadata should be set");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_should_accept_entry_again_after_clear() {
        let mut req = base_request();
        req.add_metadata_entry("a", "1").expect("first entry");
        req.clear_metadata_entries();
        assert!(req.metadata.is_none());
        assert_eq!(req, base_request());

        req.add_metadata_entry("a", "2").expect("entry after clear");
        assert_eq!(
            req.metadata.as_ref().and_then(|m| m.get("a")).map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn test_should_chain_metadata_entries() {
        let mut req = base_request();
        req.add_metadata_entry("color", "blue")
            .and_then(|r| r.add_metadata_entry("shape", "round"))
            .expect("distinct keys");
        assert_eq!(req.metadata.map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_should_replace_metadata_wholesale() {
        let mut replacement = Metadata::new();
        replacement.insert("x".to_owned(), "9".to_owned());

        let mut req = base_request();
        req.add_metadata_entry("a", "1").expect("first entry");
        let req = req.metadata(replacement.clone());
        assert_eq!(req.metadata, Some(replacement));
    }

    #[test]
    fn test_should_render_members_in_declaration_order() {
        let mut req = base_request()
            .acl(ObjectCannedACL::Private)
            .content_type("text/plain")
            .storage_class("STANDARD_IA");
        req.add_metadata_entry("a", "1").expect("entry");

        assert_eq!(
            req.to_string(),
            "{ACL: private,Bucket: b1,ContentType: text/plain,Key: k1,Metadata: {a=1},StorageClass: STANDARD_IA}"
        );
    }

    #[test]
    fn test_should_render_timestamps_in_utc() {
        let when = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).single().expect("valid date");
        let req = CreateMultipartUploadRequest::new()
            .object_lock_mode(ObjectLockMode::Governance)
            .object_lock_retain_until_date(when);
        assert_eq!(
            req.to_string(),
            "{ObjectLockMode: GOVERNANCE,ObjectLockRetainUntilDate: 2030-01-02T03:04:05.000Z}"
        );
    }

    #[test]
    fn test_should_not_depend_on_metadata_insertion_order() {
        let mut first = base_request();
        first.add_metadata_entry("a", "1").expect("entry");
        first.add_metadata_entry("b", "2").expect("entry");

        let mut second = base_request();
        second.add_metadata_entry("b", "2").expect("entry");
        second.add_metadata_entry("a", "1").expect("entry");

        assert_eq!(first, second);
        assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn test_should_treat_enum_and_string_setters_as_equal() {
        let typed = base_request()
            .server_side_encryption(ServerSideEncryption::AwsKms)
            .request_payer(RequestPayer::Requester)
            .object_lock_legal_hold_status(ObjectLockLegalHoldStatus::On);
        let stringly = base_request()
            .server_side_encryption("aws:kms")
            .request_payer("requester")
            .object_lock_legal_hold_status("ON");
        assert_eq!(typed, stringly);
        assert_eq!(hash_of(&typed), hash_of(&stringly));
        assert_eq!(typed.to_string(), stringly.to_string());
    }

    #[test]
    fn test_should_distinguish_set_and_unset_members() {
        assert_ne!(base_request(), base_request().tagging(""));
        assert_ne!(base_request(), CreateMultipartUploadRequest::new().bucket("b1"));
        assert!(!base_request().shape_eq(None));
        assert!(base_request().shape_eq(Some(&base_request())));
    }

    #[test]
    fn test_should_expose_all_member_names() {
        assert_eq!(CreateMultipartUploadRequest::MEMBER_NAMES.len(), 27);
        assert_eq!(CreateMultipartUploadRequest::MEMBER_NAMES[0], "ACL");
        assert_eq!(
            CreateMultipartUploadRequest::MEMBER_NAMES[26],
            "ObjectLockLegalHoldStatus"
        );
    }

    #[test]
    fn test_should_copy_every_member_into_equal_request() {
        let when = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).single().expect("valid date");
        let mut source = base_request()
            .acl(ObjectCannedACL::Private)
            .cache_control("no-cache")
            .content_disposition("attachment")
            .content_encoding("gzip")
            .content_language("en")
            .content_type("text/plain")
            .expires(when)
            .grant_full_control("id=full")
            .grant_read("id=read")
            .grant_read_acp("id=read-acp")
            .grant_write_acp("id=write-acp")
            .server_side_encryption(ServerSideEncryption::AwsKms)
            .storage_class(StorageClass::Glacier)
            .website_redirect_location("/elsewhere")
            .sse_customer_algorithm("AES256")
            .sse_customer_key("a2V5")
            .sse_customer_key_md5("bWQ1")
            .ssekms_key_id("kms-1")
            .ssekms_encryption_context("e30=")
            .request_payer(RequestPayer::Requester)
            .tagging("team=storage")
            .object_lock_mode(ObjectLockMode::Compliance)
            .object_lock_retain_until_date(when)
            .object_lock_legal_hold_status(ObjectLockLegalHoldStatus::On);
        source
            .add_metadata_entry("a", "1")
            .and_then(|r| r.add_metadata_entry("b", "2"))
            .expect("distinct keys");

        let mut copy = CreateMultipartUploadRequest::default();
        copy.acl = source.acl.clone();
        copy.bucket = source.bucket.clone();
        copy.cache_control = source.cache_control.clone();
        copy.content_disposition = source.content_disposition.clone();
        copy.content_encoding = source.content_encoding.clone();
        copy.content_language = source.content_language.clone();
        copy.content_type = source.content_type.clone();
        copy.expires = source.expires;
        copy.grant_full_control = source.grant_full_control.clone();
        copy.grant_read = source.grant_read.clone();
        copy.grant_read_acp = source.grant_read_acp.clone();
        copy.grant_write_acp = source.grant_write_acp.clone();
        copy.key = source.key.clone();
        copy.metadata = source.metadata.clone();
        copy.server_side_encryption = source.server_side_encryption.clone();
        copy.storage_class = source.storage_class.clone();
        copy.website_redirect_location = source.website_redirect_location.clone();
        copy.sse_customer_algorithm = source.sse_customer_algorithm.clone();
        copy.sse_customer_key = source.sse_customer_key.clone();
        copy.sse_customer_key_md5 = source.sse_customer_key_md5.clone();
        copy.ssekms_key_id = source.ssekms_key_id.clone();
        copy.ssekms_encryption_context = source.ssekms_encryption_context.clone();
        copy.request_payer = source.request_payer.clone();
        copy.tagging = source.tagging.clone();
        copy.object_lock_mode = source.object_lock_mode.clone();
        copy.object_lock_retain_until_date = source.object_lock_retain_until_date;
        copy.object_lock_legal_hold_status = source.object_lock_legal_hold_status.clone();

        assert_eq!(source, copy);
        assert_eq!(hash_of(&source), hash_of(&copy));
        assert_eq!(source.to_string(), copy.to_string());

        let rendered = source.to_string();
        for name in CreateMultipartUploadRequest::MEMBER_NAMES {
            assert!(rendered.contains(&format!("{name}: ")), "{name} missing from {rendered}");
        }

        copy.expires = None;
        assert_ne!(source, copy);
    }
}
