//! Object operation tests.

#[cfg(test)]
mod tests {
    use s3wire_http::{S3RequestEncode, customer_key_md5, decode_response};
    use s3wire_model::input::{CopyObjectRequest, GetObjectRequest, PutObjectRequest};
    use s3wire_model::output::{DeleteObjectsResult, GetObjectResult, HeadObjectResult};
    use s3wire_model::types::{DeletedObject, MetadataDirective, StorageClass};
    use s3wire_model::{S3ErrorCode, StreamingBlob};

    use crate::{canned_response, codec_config, endpoint_url};

    const CUSTOMER_KEY: &str = "MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY=";

    #[test]
    fn test_should_put_object_with_customer_key() -> anyhow::Result<()> {
        let config = codec_config();
        let mut input = PutObjectRequest::new()
            .bucket("vault")
            .key("secret.txt")
            .body(StreamingBlob::from("top secret"))
            .sse_customer_algorithm("AES256")
            .sse_customer_key(CUSTOMER_KEY);
        input.add_metadata_entry("classification", "internal")?;

        let request = input.encode(&config)?;

        assert_eq!(request.method(), http::Method::PUT);
        assert_eq!(
            request.uri().to_string(),
            format!("{}/vault/secret.txt", endpoint_url())
        );
        assert_eq!(request.headers()["content-length"], "10");
        assert_eq!(
            request.headers()["x-amz-server-side-encryption-customer-key-md5"],
            customer_key_md5(CUSTOMER_KEY).as_deref().unwrap_or_default()
        );
        assert_eq!(request.headers()["x-amz-meta-classification"], "internal");
        assert_eq!(&request.body()[..], b"top secret");
        Ok(())
    }

    #[test]
    fn test_should_copy_object_replacing_metadata() -> anyhow::Result<()> {
        let config = codec_config();
        let mut input = CopyObjectRequest::new()
            .bucket("dst")
            .key("copy.txt")
            .copy_source("src/original.txt")
            .metadata_directive(MetadataDirective::Replace)
            .storage_class(StorageClass::OnezoneIa);
        input.add_metadata_entry("revision", "2")?;

        let request = input.encode(&config)?;

        assert_eq!(request.method(), http::Method::PUT);
        assert_eq!(request.headers()["x-amz-copy-source"], "src/original.txt");
        assert_eq!(request.headers()["x-amz-metadata-directive"], "REPLACE");
        assert_eq!(request.headers()["x-amz-storage-class"], "ONEZONE_IA");
        assert_eq!(request.headers()["x-amz-meta-revision"], "2");
        Ok(())
    }

    #[test]
    fn test_should_get_object_end_to_end() -> anyhow::Result<()> {
        let config = codec_config();
        let request = GetObjectRequest::new()
            .bucket("b1")
            .key("notes/today.md")
            .range("bytes=0-4")
            .encode(&config)?;
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(request.headers()["range"], "bytes=0-4");

        let response = canned_response(
            206,
            &[
                ("content-length", "5"),
                ("content-range", "bytes 0-4/12"),
                ("content-type", "text/markdown"),
                ("etag", "\"d41d8cd98f00b204e9800998ecf8427e\""),
                ("x-amz-meta-author", "sam"),
                ("x-amz-version-id", "v1"),
            ],
            "# Hel",
        )?;
        let result: GetObjectResult = decode_response(response, &config)?;

        assert_eq!(result.body, Some(StreamingBlob::from("# Hel")));
        assert_eq!(result.content_length, Some(5));
        assert_eq!(result.content_range.as_deref(), Some("bytes 0-4/12"));
        assert_eq!(result.version_id.as_deref(), Some("v1"));
        assert_eq!(
            result.metadata.as_ref().and_then(|m| m.get("author")).map(String::as_str),
            Some("sam")
        );
        Ok(())
    }

    #[test]
    fn test_should_report_missing_object_on_head() -> anyhow::Result<()> {
        let config = codec_config();
        let response = canned_response(
            404,
            &[("x-amz-request-id", "4442587FB7D0A2F9"), ("x-amz-id-2", "host-abc")],
            "",
        )?;

        let err = decode_response::<HeadObjectResult>(response, &config)
            .expect_err("404 should fail");
        let service = err.as_service_error().expect("service error");

        assert_eq!(service.status_code, http::StatusCode::NOT_FOUND);
        assert_eq!(service.code, S3ErrorCode::from("NotFound"));
        assert_eq!(service.request_id.as_deref(), Some("4442587FB7D0A2F9"));
        assert_eq!(service.host_id.as_deref(), Some("host-abc"));
        Ok(())
    }

    #[test]
    fn test_should_decode_partial_delete_objects_failure() -> anyhow::Result<()> {
        let config = codec_config();
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<DeleteResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Deleted><Key>old.log</Key></Deleted>
  <Error><Key>locked.log</Key><Code>AccessDenied</Code><Message>Access Denied</Message></Error>
</DeleteResult>"#;
        let response = canned_response(200, &[("x-amz-request-charged", "requester")], body)?;

        let result: DeleteObjectsResult = decode_response(response, &config)?;

        assert!(result.has_errors());
        assert_eq!(
            result.deleted.as_deref(),
            Some(&[DeletedObject::new().key("old.log")][..])
        );
        let errors = result.errors.as_deref().unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_code(), Some(S3ErrorCode::AccessDenied));
        assert_eq!(
            errors[0].to_string(),
            "{Key: locked.log,Code: AccessDenied,Message: Access Denied}"
        );
        Ok(())
    }
}
