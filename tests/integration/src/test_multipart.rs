//! Multipart upload initiation tests.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use s3wire_http::{S3RequestEncode, decode_response};
    use s3wire_model::input::CreateMultipartUploadRequest;
    use s3wire_model::output::CreateMultipartUploadResult;
    use s3wire_model::types::{ObjectCannedACL, ServerSideEncryption, StorageClass};
    use s3wire_model::{ModelError, S3Operation, S3Shape};

    use crate::{canned_response, codec_config, endpoint_url};

    const INITIATE_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<InitiateMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Bucket>photos</Bucket>
  <Key>2024/beach.jpg</Key>
  <UploadId>VXBsb2FkIElEIGZvciA2aWWpbmcncyBteS1tb3ZpZS5tMnRzIHVwbG9hZA</UploadId>
</InitiateMultipartUploadResult>"#;

    #[test]
    fn test_should_initiate_multipart_upload_end_to_end() -> anyhow::Result<()> {
        let config = codec_config();
        let mut input = CreateMultipartUploadRequest::new()
            .bucket("photos")
            .key("2024/beach.jpg")
            .acl(ObjectCannedACL::Private)
            .content_type("image/jpeg")
            .server_side_encryption("aws:kms")
            .ssekms_key_id("key-1");
        input.add_metadata_entry("camera", "x100")?;

        let request = input.encode(&config)?;
        assert_eq!(
            <CreateMultipartUploadRequest as S3RequestEncode>::OPERATION,
            S3Operation::CreateMultipartUpload
        );
        assert_eq!(request.method(), S3Operation::CreateMultipartUpload.method());
        assert_eq!(
            request.uri().to_string(),
            format!("{}/photos/2024/beach.jpg?uploads", endpoint_url())
        );
        assert_eq!(request.headers()["x-amz-meta-camera"], "x100");
        assert_eq!(request.headers()["x-amz-server-side-encryption"], "aws:kms");

        let response = canned_response(
            200,
            &[
                ("x-amz-server-side-encryption", "aws:kms"),
                ("x-amz-server-side-encryption-aws-kms-key-id", "key-1"),
                ("x-amz-abort-date", "Wed, 02 Jan 2030 00:00:00 GMT"),
                ("x-amz-abort-rule-id", "abort-after-7-days"),
            ],
            INITIATE_BODY,
        )?;
        let result: CreateMultipartUploadResult = decode_response(response, &config)?;

        assert_eq!(result.bucket.as_deref(), Some("photos"));
        assert_eq!(result.key.as_deref(), Some("2024/beach.jpg"));
        assert!(result.upload_id.is_some());
        assert_eq!(result.server_side_encryption, Some(ServerSideEncryption::AwsKms));
        assert_eq!(result.ssekms_key_id.as_deref(), Some("key-1"));
        assert_eq!(result.abort_date, Utc.with_ymd_and_hms(2030, 1, 2, 0, 0, 0).single());
        assert_eq!(result.abort_rule_id.as_deref(), Some("abort-after-7-days"));
        Ok(())
    }

    #[test]
    fn test_should_keep_request_unchanged_after_duplicate_metadata_key() -> anyhow::Result<()> {
        let config = codec_config();
        let mut input = CreateMultipartUploadRequest::new().bucket("b1").key("k1");
        input.add_metadata_entry("owner", "alice")?;
        let before = input.clone();

        let err = input
            .add_metadata_entry("owner", "bob")
            .expect_err("duplicate key should fail");
        assert!(matches!(err, ModelError::DuplicateKey { .. }));
        assert_eq!(err.to_string(), "duplicated key (owner) provided for Metadata");
        assert_eq!(input, before);

        let request = input.encode(&config)?;
        assert_eq!(request.headers()["x-amz-meta-owner"], "alice");
        Ok(())
    }

    #[test]
    fn test_should_drop_metadata_headers_after_clear() -> anyhow::Result<()> {
        let config = codec_config();
        let mut input = CreateMultipartUploadRequest::new().bucket("b1").key("k1");
        input
            .add_metadata_entry("a", "1")?
            .add_metadata_entry("b", "2")?
            .clear_metadata_entries();
        assert!(input.metadata.is_none());

        let request = input.encode(&config)?;
        assert!(
            request
                .headers()
                .keys()
                .all(|name| !name.as_str().starts_with("x-amz-meta-"))
        );
        Ok(())
    }

    #[test]
    fn test_should_treat_enum_and_string_setters_alike() -> anyhow::Result<()> {
        let config = codec_config();
        let typed = CreateMultipartUploadRequest::new()
            .bucket("b1")
            .key("k1")
            .storage_class(StorageClass::StandardIa)
            .acl(ObjectCannedACL::BucketOwnerRead);
        let textual = CreateMultipartUploadRequest::new()
            .bucket("b1")
            .key("k1")
            .storage_class("STANDARD_IA")
            .acl("bucket-owner-read");

        assert_eq!(typed, textual);
        assert_eq!(typed.to_string(), textual.to_string());
        assert_eq!(
            typed.encode(&config)?.headers(),
            textual.encode(&config)?.headers()
        );
        Ok(())
    }

    #[test]
    fn test_should_render_only_populated_members() {
        let when = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).single();
        let mut input = CreateMultipartUploadRequest::new()
            .bucket("b1")
            .key("k1")
            .tagging("team=storage");
        input.expires = when;

        assert_eq!(
            input.to_string(),
            "{Bucket: b1,Expires: 2030-01-02T03:04:05.000Z,Key: k1,Tagging: team=storage}"
        );
        assert_eq!(CreateMultipartUploadRequest::new().to_string(), "{}");
        assert_eq!(CreateMultipartUploadRequest::SHAPE_NAME, "CreateMultipartUploadRequest");
    }

    #[test]
    fn test_should_keep_unknown_storage_class_on_the_wire() -> anyhow::Result<()> {
        let config = codec_config();
        let input = CreateMultipartUploadRequest::new()
            .bucket("b1")
            .key("k1")
            .storage_class("SNOW");
        assert!(input.storage_class.as_ref().is_some_and(StorageClass::is_unknown));

        let request = input.encode(&config)?;
        assert_eq!(request.headers()["x-amz-storage-class"], "SNOW");
        Ok(())
    }
}
