//! Error handling tests.

#[cfg(test)]
mod tests {
    use s3wire_http::{CodecError, S3RequestEncode, decode_response, error_from_response};
    use s3wire_model::input::{CreateMultipartUploadRequest, PutObjectRequest};
    use s3wire_model::output::{CreateMultipartUploadResult, HeadObjectResult};
    use s3wire_model::{Fault, S3Error, S3ErrorCode, s3_error};
    use s3wire_xml::error_to_xml;

    use crate::{canned_response, codec_config, strict_codec_config};

    #[test]
    fn test_should_round_trip_service_error_document() -> anyhow::Result<()> {
        let original = S3Error::new(S3ErrorCode::NoSuchUpload)
            .with_resource("upload-1")
            .with_request_id("req-1")
            .with_host_id("host-1");
        let body = error_to_xml(&original);

        let (parts, _) = canned_response(404, &[], "")?.into_parts();
        let decoded = error_from_response(&parts, &body);

        assert_eq!(decoded, original);
        assert_eq!(decoded.fault(), Fault::Client);
        Ok(())
    }

    #[test]
    fn test_should_surface_service_error_from_failed_initiate() -> anyhow::Result<()> {
        let config = codec_config();
        let response = canned_response(
            403,
            &[("x-amz-request-id", "req-header")],
            "<Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>",
        )?;

        let err = decode_response::<CreateMultipartUploadResult>(response, &config)
            .expect_err("403 should fail");

        assert!(matches!(err, CodecError::Service(_)));
        assert_eq!(err.to_string(), "S3Error(AccessDenied): Access Denied");
        let service = err.as_service_error().expect("service error");
        assert_eq!(service.request_id.as_deref(), Some("req-header"));
        Ok(())
    }

    #[test]
    fn test_should_classify_server_faults() -> anyhow::Result<()> {
        let config = codec_config();
        let response = canned_response(500, &[], "")?;

        let err = decode_response::<HeadObjectResult>(response, &config)
            .expect_err("500 should fail");
        let service = err.as_service_error().expect("service error");

        assert_eq!(service.code, S3ErrorCode::from("InternalServerError"));
        assert_eq!(service.fault(), Fault::Server);
        Ok(())
    }

    #[test]
    fn test_should_report_missing_uri_labels() {
        let config = codec_config();

        let err = CreateMultipartUploadRequest::new()
            .key("k1")
            .encode(&config)
            .expect_err("missing bucket should fail");
        assert!(matches!(err, CodecError::MissingLabel("Bucket")));

        let err = PutObjectRequest::new()
            .bucket("b1")
            .encode(&config)
            .expect_err("missing key should fail");
        assert!(matches!(err, CodecError::MissingLabel("Key")));
    }

    #[test]
    fn test_should_honor_strict_header_mode() -> anyhow::Result<()> {
        let input = CreateMultipartUploadRequest::new()
            .bucket("b1")
            .key("k1")
            .content_type("text/plain\n");

        let lenient = input.encode(&codec_config())?;
        assert!(lenient.headers().get("content-type").is_none());

        let err = input
            .encode(&strict_codec_config())
            .expect_err("strict mode should fail");
        assert!(matches!(err, CodecError::InvalidHeaderValue { ref name, .. } if name == "content-type"));
        Ok(())
    }

    #[test]
    fn test_should_build_errors_with_macro() {
        let err = s3_error!(NoSuchKey, "object vanished");
        assert_eq!(err.code, S3ErrorCode::NoSuchKey);
        assert_eq!(err.message, "object vanished");
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
    }
}
