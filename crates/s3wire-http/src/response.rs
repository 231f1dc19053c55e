//! HTTP response to result shape decoding.
//!
//! Response categories:
//! - **Header-only**: `HeadObject` returns all members as headers.
//! - **Streaming body**: `GetObject` passes through the body bytes.
//! - **XML body**: `DeleteObjects` returns a `DeleteResult` document.
//! - **Mixed**: `CreateMultipartUpload` returns an XML body plus encryption headers.
//!
//! Optional headers that cannot be parsed are dropped with a warning, unless
//! [`CodecConfig::strict_headers`] is set.

use std::str::FromStr;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::HeaderMap;
use s3wire_model::blob::StreamingBlob;
use s3wire_model::output::{
    CreateMultipartUploadResult, DeleteObjectsResult, GetObjectResult, HeadObjectResult,
};
use s3wire_model::types::Metadata;
use s3wire_model::{S3Error, S3ErrorCode};
use s3wire_xml::from_xml;

use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::headers::{
    ACCEPT_RANGES, CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_ENCODING, CONTENT_LANGUAGE,
    CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, ETAG, EXPIRES, LAST_MODIFIED, X_AMZ_ABORT_DATE,
    X_AMZ_ABORT_RULE_ID, X_AMZ_DELETE_MARKER, X_AMZ_EXPIRATION, X_AMZ_ID_2, X_AMZ_MISSING_META,
    X_AMZ_MP_PARTS_COUNT, X_AMZ_OBJECT_LOCK_LEGAL_HOLD, X_AMZ_OBJECT_LOCK_MODE,
    X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE, X_AMZ_REPLICATION_STATUS, X_AMZ_REQUEST_CHARGED,
    X_AMZ_REQUEST_ID, X_AMZ_RESTORE, X_AMZ_SERVER_SIDE_ENCRYPTION, X_AMZ_SSE_CONTEXT,
    X_AMZ_SSE_CUSTOMER_ALGORITHM, X_AMZ_SSE_CUSTOMER_KEY_MD5, X_AMZ_SSE_KMS_KEY_ID,
    X_AMZ_STORAGE_CLASS, X_AMZ_TAGGING_COUNT, X_AMZ_VERSION_ID, X_AMZ_WEBSITE_REDIRECT_LOCATION,
};

/// Trait for building a result shape from a successful HTTP response.
pub trait S3ResponseDecode: Sized {
    /// Decode the result from the response head and body.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Xml`] for a malformed XML body, and
    /// [`CodecError::InvalidHeaderValue`] in strict mode for an unparseable header.
    fn decode(
        parts: &http::response::Parts,
        body: Bytes,
        config: &CodecConfig,
    ) -> Result<Self, CodecError>;
}

/// Decode a complete response, turning non-2xx statuses into service errors.
///
/// # Errors
///
/// Returns [`CodecError::Service`] when the status is not a success, otherwise
/// whatever [`S3ResponseDecode::decode`] returns.
pub fn decode_response<T: S3ResponseDecode>(
    response: http::Response<Bytes>,
    config: &CodecConfig,
) -> Result<T, CodecError> {
    let (parts, body) = response.into_parts();
    if !parts.status.is_success() {
        return Err(error_from_response(&parts, &body).into());
    }
    T::decode(&parts, body, config)
}

/// Build a service error from an error response.
///
/// The XML error document is used when present. Otherwise (HEAD responses
/// carry no body) the code is derived from the status line. Request ids
/// missing from the document are taken from `x-amz-request-id` and
/// `x-amz-id-2`.
#[must_use]
pub fn error_from_response(parts: &http::response::Parts, body: &[u8]) -> S3Error {
    let from_body = if body.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        match from_xml::<S3Error>(body) {
            Ok(err) => Some(err),
            Err(e) => {
                tracing::warn!(
                    status = %parts.status,
                    error = %e,
                    "error response body is not an S3 error document"
                );
                None
            }
        }
    };

    let mut err = from_body.unwrap_or_else(|| status_error(parts.status));
    err.status_code = parts.status;
    if err.request_id.is_none() {
        err.request_id = header_text(&parts.headers, X_AMZ_REQUEST_ID);
    }
    if err.host_id.is_none() {
        err.host_id = header_text(&parts.headers, X_AMZ_ID_2);
    }

    tracing::debug!(
        status = %err.status_code,
        code = %err.code,
        request_id = err.request_id.as_deref().unwrap_or("-"),
        "decoded error response"
    );
    err
}

/// A service error for a bodiless response, e.g. `404 Not Found` becomes `NotFound`.
fn status_error(status: http::StatusCode) -> S3Error {
    match status.canonical_reason() {
        Some(reason) => {
            let code: String = reason.split_whitespace().collect();
            S3Error::with_message(S3ErrorCode::from(code), reason)
        }
        None => S3Error::with_message(
            S3ErrorCode::from(status.as_str()),
            format!("HTTP status {status}"),
        ),
    }
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Parse an HTTP date string into a `DateTime<Utc>`.
///
/// Tries multiple date formats commonly used in HTTP and AWS:
/// - ISO 8601 / RFC 3339 (e.g., `2024-01-15T10:30:00Z`)
/// - RFC 2822 (e.g., `Mon, 15 Jan 2024 10:30:00 GMT`)
fn parse_http_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S GMT") {
        return Some(dt.and_utc());
    }
    None
}

// ---------------------------------------------------------------------------
// Header extraction
// ---------------------------------------------------------------------------

/// Typed access to response headers under a [`CodecConfig`].
struct HeaderReader<'a> {
    headers: &'a HeaderMap,
    config: &'a CodecConfig,
}

impl<'a> HeaderReader<'a> {
    fn new(headers: &'a HeaderMap, config: &'a CodecConfig) -> Self {
        Self { headers, config }
    }

    /// Drop an unparseable header value, or fail in strict mode.
    fn reject<T>(&self, name: &str, value: &str) -> Result<Option<T>, CodecError> {
        if self.config.strict_headers {
            return Err(CodecError::invalid_header(name, value));
        }
        tracing::warn!(header = name, value, "dropping header value that cannot be parsed");
        Ok(None)
    }

    fn string(&self, name: &str) -> Result<Option<String>, CodecError> {
        let Some(value) = self.headers.get(name) else {
            return Ok(None);
        };
        match value.to_str() {
            Ok(s) => Ok(Some(s.to_owned())),
            Err(_) => self.reject(name, &String::from_utf8_lossy(value.as_bytes())),
        }
    }

    fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, CodecError> {
        let Some(s) = self.string(name)? else {
            return Ok(None);
        };
        match s.trim().parse() {
            Ok(v) => Ok(Some(v)),
            Err(_) => self.reject(name, &s),
        }
    }

    fn bool(&self, name: &str) -> Result<Option<bool>, CodecError> {
        let Some(s) = self.string(name)? else {
            return Ok(None);
        };
        if s.eq_ignore_ascii_case("true") {
            Ok(Some(true))
        } else if s.eq_ignore_ascii_case("false") {
            Ok(Some(false))
        } else {
            self.reject(name, &s)
        }
    }

    fn timestamp(&self, name: &str) -> Result<Option<DateTime<Utc>>, CodecError> {
        let Some(s) = self.string(name)? else {
            return Ok(None);
        };
        match parse_http_date(s.trim()) {
            Some(dt) => Ok(Some(dt)),
            None => self.reject(name, &s),
        }
    }

    fn enum_value<T: From<String>>(&self, name: &str) -> Result<Option<T>, CodecError> {
        Ok(self.string(name)?.map(T::from))
    }

    /// Collect every header carrying the metadata prefix.
    ///
    /// Repeated headers are joined with `,`. Returns `None` when there are none.
    fn metadata(&self) -> Result<Option<Metadata>, CodecError> {
        let prefix = self.config.metadata_prefix.to_ascii_lowercase();
        let mut metadata = Metadata::new();
        for (name, value) in self.headers {
            let Some(key) = name.as_str().strip_prefix(prefix.as_str()) else {
                continue;
            };
            let Ok(value) = value.to_str() else {
                self.reject::<()>(name.as_str(), &String::from_utf8_lossy(value.as_bytes()))?;
                continue;
            };
            metadata
                .entry(key.to_owned())
                .and_modify(|existing: &mut String| {
                    existing.push(',');
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_owned());
        }
        Ok((!metadata.is_empty()).then_some(metadata))
    }
}

/// Headers shared by `GetObject` and `HeadObject` results.
macro_rules! read_object_headers {
    ($out:ident, $h:ident) => {
        $out.delete_marker = $h.bool(X_AMZ_DELETE_MARKER)?;
        $out.accept_ranges = $h.string(ACCEPT_RANGES)?;
        $out.expiration = $h.string(X_AMZ_EXPIRATION)?;
        $out.restore = $h.string(X_AMZ_RESTORE)?;
        $out.last_modified = $h.timestamp(LAST_MODIFIED)?;
        $out.content_length = $h.parse(CONTENT_LENGTH)?;
        $out.e_tag = $h.string(ETAG)?;
        $out.missing_meta = $h.parse(X_AMZ_MISSING_META)?;
        $out.version_id = $h.string(X_AMZ_VERSION_ID)?;
        $out.cache_control = $h.string(CACHE_CONTROL)?;
        $out.content_disposition = $h.string(CONTENT_DISPOSITION)?;
        $out.content_encoding = $h.string(CONTENT_ENCODING)?;
        $out.content_language = $h.string(CONTENT_LANGUAGE)?;
        $out.content_type = $h.string(CONTENT_TYPE)?;
        $out.expires = $h.timestamp(EXPIRES)?;
        $out.website_redirect_location = $h.string(X_AMZ_WEBSITE_REDIRECT_LOCATION)?;
        $out.server_side_encryption = $h.enum_value(X_AMZ_SERVER_SIDE_ENCRYPTION)?;
        $out.metadata = $h.metadata()?;
        $out.sse_customer_algorithm = $h.string(X_AMZ_SSE_CUSTOMER_ALGORITHM)?;
        $out.sse_customer_key_md5 = $h.string(X_AMZ_SSE_CUSTOMER_KEY_MD5)?;
        $out.ssekms_key_id = $h.string(X_AMZ_SSE_KMS_KEY_ID)?;
        $out.storage_class = $h.enum_value(X_AMZ_STORAGE_CLASS)?;
        $out.request_charged = $h.enum_value(X_AMZ_REQUEST_CHARGED)?;
        $out.replication_status = $h.enum_value(X_AMZ_REPLICATION_STATUS)?;
        $out.parts_count = $h.parse(X_AMZ_MP_PARTS_COUNT)?;
        $out.object_lock_mode = $h.enum_value(X_AMZ_OBJECT_LOCK_MODE)?;
        $out.object_lock_retain_until_date = $h.timestamp(X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE)?;
        $out.object_lock_legal_hold_status = $h.enum_value(X_AMZ_OBJECT_LOCK_LEGAL_HOLD)?;
    };
}

// ---------------------------------------------------------------------------
// S3ResponseDecode implementations
// ---------------------------------------------------------------------------

impl S3ResponseDecode for GetObjectResult {
    fn decode(
        parts: &http::response::Parts,
        body: Bytes,
        config: &CodecConfig,
    ) -> Result<Self, CodecError> {
        let h = HeaderReader::new(&parts.headers, config);
        let mut out = GetObjectResult::new();
        read_object_headers!(out, h);
        out.content_range = h.string(CONTENT_RANGE)?;
        out.tag_count = h.parse(X_AMZ_TAGGING_COUNT)?;

        tracing::debug!(status = %parts.status, body_len = body.len(), "decoded GetObject response");
        out.body = Some(StreamingBlob::new(body));
        Ok(out)
    }
}

impl S3ResponseDecode for HeadObjectResult {
    fn decode(
        parts: &http::response::Parts,
        _body: Bytes,
        config: &CodecConfig,
    ) -> Result<Self, CodecError> {
        let h = HeaderReader::new(&parts.headers, config);
        let mut out = HeadObjectResult::new();
        read_object_headers!(out, h);

        tracing::debug!(status = %parts.status, "decoded HeadObject response");
        Ok(out)
    }
}

impl S3ResponseDecode for CreateMultipartUploadResult {
    fn decode(
        parts: &http::response::Parts,
        body: Bytes,
        config: &CodecConfig,
    ) -> Result<Self, CodecError> {
        let mut out: CreateMultipartUploadResult = from_xml(&body)?;
        let h = HeaderReader::new(&parts.headers, config);
        out.abort_date = h.timestamp(X_AMZ_ABORT_DATE)?;
        out.abort_rule_id = h.string(X_AMZ_ABORT_RULE_ID)?;
        out.server_side_encryption = h.enum_value(X_AMZ_SERVER_SIDE_ENCRYPTION)?;
        out.sse_customer_algorithm = h.string(X_AMZ_SSE_CUSTOMER_ALGORITHM)?;
        out.sse_customer_key_md5 = h.string(X_AMZ_SSE_CUSTOMER_KEY_MD5)?;
        out.ssekms_key_id = h.string(X_AMZ_SSE_KMS_KEY_ID)?;
        out.ssekms_encryption_context = h.string(X_AMZ_SSE_CONTEXT)?;
        out.request_charged = h.enum_value(X_AMZ_REQUEST_CHARGED)?;

        tracing::debug!(
            upload_id = out.upload_id.as_deref().unwrap_or("-"),
            "decoded CreateMultipartUpload response"
        );
        Ok(out)
    }
}

impl S3ResponseDecode for DeleteObjectsResult {
    fn decode(
        parts: &http::response::Parts,
        body: Bytes,
        config: &CodecConfig,
    ) -> Result<Self, CodecError> {
        let mut out: DeleteObjectsResult = from_xml(&body)?;
        let h = HeaderReader::new(&parts.headers, config);
        out.request_charged = h.enum_value(X_AMZ_REQUEST_CHARGED)?;

        tracing::debug!(
            deleted = out.deleted.as_ref().map_or(0, Vec::len),
            errors = out.errors.as_ref().map_or(0, Vec::len),
            "decoded DeleteObjects response"
        );
        Ok(out)
    }
}
