//! Request shape to HTTP request encoding.
//!
//! Each request shape knows which of its members travel as URI labels, headers,
//! query parameters or payload. Member placement follows the doc comments on the
//! shape fields in `s3wire-model`:
//! - `HTTP label (URI path)` - Part of the path-style URI `/{Bucket}/{Key}`
//! - `HTTP header: name` - A request header
//! - `HTTP query: name` - A query parameter
//! - `HTTP prefix headers: x-amz-meta-` - One header per metadata entry
//! - `HTTP payload` - The request body
//!
//! Member values are never validated here. The only hard failure is an unset
//! label, since no URI can be formed without it.

use base64::Engine as _;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::header::{HeaderMap, HeaderName, HeaderValue};
use md5::{Digest, Md5};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use s3wire_model::S3Operation;
use s3wire_model::input::{
    CopyObjectRequest, CreateMultipartUploadRequest, GetObjectRequest, PutObjectRequest,
};
use s3wire_model::types::Metadata;

use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::headers::{
    CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_ENCODING, CONTENT_LANGUAGE, CONTENT_LENGTH,
    CONTENT_MD5, CONTENT_TYPE, EXPIRES, IF_MATCH, IF_MODIFIED_SINCE, IF_NONE_MATCH,
    IF_UNMODIFIED_SINCE, QUERY_PART_NUMBER, QUERY_RESPONSE_CACHE_CONTROL,
    QUERY_RESPONSE_CONTENT_DISPOSITION, QUERY_RESPONSE_CONTENT_ENCODING,
    QUERY_RESPONSE_CONTENT_LANGUAGE, QUERY_RESPONSE_CONTENT_TYPE, QUERY_RESPONSE_EXPIRES,
    QUERY_UPLOADS, QUERY_VERSION_ID, RANGE, X_AMZ_ACL, X_AMZ_COPY_SOURCE,
    X_AMZ_COPY_SOURCE_IF_MATCH, X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE,
    X_AMZ_COPY_SOURCE_IF_NONE_MATCH, X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE,
    X_AMZ_COPY_SOURCE_SSE_CUSTOMER_ALGORITHM, X_AMZ_COPY_SOURCE_SSE_CUSTOMER_KEY,
    X_AMZ_COPY_SOURCE_SSE_CUSTOMER_KEY_MD5, X_AMZ_GRANT_FULL_CONTROL, X_AMZ_GRANT_READ,
    X_AMZ_GRANT_READ_ACP, X_AMZ_GRANT_WRITE_ACP, X_AMZ_METADATA_DIRECTIVE,
    X_AMZ_OBJECT_LOCK_LEGAL_HOLD, X_AMZ_OBJECT_LOCK_MODE, X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE,
    X_AMZ_REQUEST_PAYER, X_AMZ_SERVER_SIDE_ENCRYPTION, X_AMZ_SSE_CONTEXT,
    X_AMZ_SSE_CUSTOMER_ALGORITHM, X_AMZ_SSE_CUSTOMER_KEY, X_AMZ_SSE_CUSTOMER_KEY_MD5,
    X_AMZ_SSE_KMS_KEY_ID, X_AMZ_STORAGE_CLASS, X_AMZ_TAGGING, X_AMZ_TAGGING_DIRECTIVE,
    X_AMZ_WEBSITE_REDIRECT_LOCATION,
};

/// Trait for turning a request shape into an HTTP request.
pub trait S3RequestEncode {
    /// The operation this request shape belongs to.
    const OPERATION: S3Operation;

    /// Encode this request as a complete HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MissingLabel`] if `Bucket` or `Key` is unset, and
    /// [`CodecError::InvalidHeaderValue`] in strict mode when a member cannot be
    /// carried in a header.
    fn encode(&self, config: &CodecConfig) -> Result<http::Request<Bytes>, CodecError>;
}

/// Characters left as-is in a path segment or query value.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Object keys keep their `/` separators.
const KEY_SEGMENT: &AsciiSet = &UNRESERVED.remove(b'/');

/// Format a timestamp as an RFC 1123 HTTP date.
pub(crate) fn format_http_date(dt: &DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Format a timestamp as ISO 8601 with milliseconds and `Z` suffix.
pub(crate) fn format_iso8601(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Base64 MD5 of a base64-encoded SSE customer key, or `None` if the key is
/// not valid base64.
#[must_use]
pub fn customer_key_md5(key_b64: &str) -> Option<String> {
    let key = base64::engine::general_purpose::STANDARD
        .decode(key_b64)
        .ok()?;
    Some(base64::engine::general_purpose::STANDARD.encode(Md5::digest(&key)))
}

// ---------------------------------------------------------------------------
// Request assembly
// ---------------------------------------------------------------------------

/// Accumulates URI, query and headers for one request.
struct RequestWriter<'a> {
    config: &'a CodecConfig,
    operation: S3Operation,
    path: String,
    query: Vec<(&'static str, Option<String>)>,
    headers: HeaderMap,
}

impl<'a> RequestWriter<'a> {
    fn new(
        config: &'a CodecConfig,
        operation: S3Operation,
        bucket: Option<&str>,
        key: Option<&str>,
    ) -> Result<Self, CodecError> {
        let bucket = bucket
            .filter(|b| !b.is_empty())
            .ok_or(CodecError::MissingLabel("Bucket"))?;
        let key = key
            .filter(|k| !k.is_empty())
            .ok_or(CodecError::MissingLabel("Key"))?;
        let path = format!(
            "/{}/{}",
            utf8_percent_encode(bucket, UNRESERVED),
            utf8_percent_encode(key, KEY_SEGMENT)
        );
        Ok(Self {
            config,
            operation,
            path,
            query: Vec::new(),
            headers: HeaderMap::new(),
        })
    }

    /// Drop an unencodable header value, or fail in strict mode.
    fn reject(&self, name: &str, value: &str) -> Result<(), CodecError> {
        if self.config.strict_headers {
            return Err(CodecError::invalid_header(name, value));
        }
        tracing::warn!(
            operation = %self.operation,
            header = name,
            "dropping header value that cannot be encoded"
        );
        Ok(())
    }

    fn header(&mut self, name: &'static str, value: Option<&str>) -> Result<(), CodecError> {
        let Some(value) = value else {
            return Ok(());
        };
        match HeaderValue::from_str(value) {
            Ok(hv) => {
                self.headers.insert(HeaderName::from_static(name), hv);
                Ok(())
            }
            Err(_) => self.reject(name, value),
        }
    }

    fn header_display<T: std::fmt::Display>(
        &mut self,
        name: &'static str,
        value: Option<&T>,
    ) -> Result<(), CodecError> {
        self.header(name, value.map(ToString::to_string).as_deref())
    }

    fn header_http_date(
        &mut self,
        name: &'static str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), CodecError> {
        self.header(name, value.map(format_http_date).as_deref())
    }

    fn header_iso_date(
        &mut self,
        name: &'static str,
        value: Option<&DateTime<Utc>>,
    ) -> Result<(), CodecError> {
        self.header(name, value.map(format_iso8601).as_deref())
    }

    fn metadata(&mut self, metadata: Option<&Metadata>) -> Result<(), CodecError> {
        for (key, value) in metadata.into_iter().flatten() {
            let name = format!("{}{key}", self.config.metadata_prefix);
            let Ok(header_name) = HeaderName::from_bytes(name.as_bytes()) else {
                self.reject(&name, value)?;
                continue;
            };
            // Header names are case-insensitive, metadata keys are not.
            if self.headers.contains_key(&header_name) {
                self.reject(&name, value)?;
                continue;
            }
            match HeaderValue::from_str(value) {
                Ok(hv) => {
                    self.headers.insert(header_name, hv);
                }
                Err(_) => self.reject(&name, value)?,
            }
        }
        Ok(())
    }

    /// Write an SSE customer key and its MD5, deriving the MD5 when unset.
    fn customer_key(
        &mut self,
        key_header: &'static str,
        md5_header: &'static str,
        key: Option<&str>,
        md5: Option<&str>,
    ) -> Result<(), CodecError> {
        self.header(key_header, key)?;
        match (key, md5) {
            (_, Some(md5)) => self.header(md5_header, Some(md5)),
            (Some(key), None) => match customer_key_md5(key) {
                Some(digest) => self.header(md5_header, Some(&digest)),
                None => self.reject(md5_header, "<customer key is not valid base64>"),
            },
            (None, None) => Ok(()),
        }
    }

    fn query(&mut self, name: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.query.push((name, Some(value)));
        }
    }

    fn query_flag(&mut self, name: &'static str) {
        self.query.push((name, None));
    }

    fn finish(self, body: Bytes) -> Result<http::Request<Bytes>, CodecError> {
        let mut uri = format!("{}{}", self.config.endpoint.trim_end_matches('/'), self.path);
        for (i, (name, value)) in self.query.iter().enumerate() {
            uri.push(if i == 0 { '?' } else { '&' });
            uri.push_str(name);
            if let Some(value) = value {
                uri.push('=');
                uri.extend(utf8_percent_encode(value, UNRESERVED));
            }
        }

        tracing::debug!(
            operation = %self.operation,
            uri = %uri,
            headers = self.headers.len(),
            body_len = body.len(),
            "encoded request"
        );

        let mut request = http::Request::builder()
            .method(self.operation.method())
            .uri(uri)
            .body(body)?;
        *request.headers_mut() = self.headers;
        Ok(request)
    }
}

/// Headers shared by every object-writing request.
macro_rules! write_object_headers {
    ($w:ident, $req:ident) => {
        $w.header_display(X_AMZ_ACL, $req.acl.as_ref())?;
        $w.header(CACHE_CONTROL, $req.cache_control.as_deref())?;
        $w.header(
            CONTENT_DISPOSITION,
            $req.content_disposition.as_deref(),
        )?;
        $w.header(CONTENT_ENCODING, $req.content_encoding.as_deref())?;
        $w.header(CONTENT_LANGUAGE, $req.content_language.as_deref())?;
        $w.header(CONTENT_TYPE, $req.content_type.as_deref())?;
        $w.header_http_date(EXPIRES, $req.expires.as_ref())?;
        $w.header(
            X_AMZ_GRANT_FULL_CONTROL,
            $req.grant_full_control.as_deref(),
        )?;
        $w.header(X_AMZ_GRANT_READ, $req.grant_read.as_deref())?;
        $w.header(X_AMZ_GRANT_READ_ACP, $req.grant_read_acp.as_deref())?;
        $w.header(X_AMZ_GRANT_WRITE_ACP, $req.grant_write_acp.as_deref())?;
        $w.metadata($req.metadata.as_ref())?;
        $w.header_display(
            X_AMZ_SERVER_SIDE_ENCRYPTION,
            $req.server_side_encryption.as_ref(),
        )?;
        $w.header_display(X_AMZ_STORAGE_CLASS, $req.storage_class.as_ref())?;
        $w.header(
            X_AMZ_WEBSITE_REDIRECT_LOCATION,
            $req.website_redirect_location.as_deref(),
        )?;
        $w.header(
            X_AMZ_SSE_CUSTOMER_ALGORITHM,
            $req.sse_customer_algorithm.as_deref(),
        )?;
        $w.customer_key(
            X_AMZ_SSE_CUSTOMER_KEY,
            X_AMZ_SSE_CUSTOMER_KEY_MD5,
            $req.sse_customer_key.as_deref(),
            $req.sse_customer_key_md5.as_deref(),
        )?;
        $w.header(X_AMZ_SSE_KMS_KEY_ID, $req.ssekms_key_id.as_deref())?;
        $w.header(
            X_AMZ_SSE_CONTEXT,
            $req.ssekms_encryption_context.as_deref(),
        )?;
        $w.header_display(X_AMZ_REQUEST_PAYER, $req.request_payer.as_ref())?;
        $w.header(X_AMZ_TAGGING, $req.tagging.as_deref())?;
        $w.header_display(
            X_AMZ_OBJECT_LOCK_MODE,
            $req.object_lock_mode.as_ref(),
        )?;
        $w.header_iso_date(
            X_AMZ_OBJECT_LOCK_RETAIN_UNTIL_DATE,
            $req.object_lock_retain_until_date.as_ref(),
        )?;
        $w.header_display(
            X_AMZ_OBJECT_LOCK_LEGAL_HOLD,
            $req.object_lock_legal_hold_status.as_ref(),
        )?;
    };
}

// ---------------------------------------------------------------------------
// S3RequestEncode implementations
// ---------------------------------------------------------------------------

impl S3RequestEncode for CreateMultipartUploadRequest {
    const OPERATION: S3Operation = S3Operation::CreateMultipartUpload;

    fn encode(&self, config: &CodecConfig) -> Result<http::Request<Bytes>, CodecError> {
        let mut w = RequestWriter::new(
            config,
            Self::OPERATION,
            self.bucket.as_deref(),
            self.key.as_deref(),
        )?;
        w.query_flag(QUERY_UPLOADS);
        write_object_headers!(w, self);
        w.finish(Bytes::new())
    }
}

impl S3RequestEncode for PutObjectRequest {
    const OPERATION: S3Operation = S3Operation::PutObject;

    fn encode(&self, config: &CodecConfig) -> Result<http::Request<Bytes>, CodecError> {
        let mut w = RequestWriter::new(
            config,
            Self::OPERATION,
            self.bucket.as_deref(),
            self.key.as_deref(),
        )?;
        write_object_headers!(w, self);
        w.header(CONTENT_MD5, self.content_md5.as_deref())?;

        let body = self
            .body
            .as_ref()
            .map(|blob| blob.data.clone())
            .unwrap_or_default();
        let content_length = self
            .content_length
            .or_else(|| i64::try_from(body.len()).ok());
        w.header_display(CONTENT_LENGTH, content_length.as_ref())?;
        w.finish(body)
    }
}

impl S3RequestEncode for CopyObjectRequest {
    const OPERATION: S3Operation = S3Operation::CopyObject;

    fn encode(&self, config: &CodecConfig) -> Result<http::Request<Bytes>, CodecError> {
        let mut w = RequestWriter::new(
            config,
            Self::OPERATION,
            self.bucket.as_deref(),
            self.key.as_deref(),
        )?;
        write_object_headers!(w, self);
        w.header(X_AMZ_COPY_SOURCE, self.copy_source.as_deref())?;
        w.header(
            X_AMZ_COPY_SOURCE_IF_MATCH,
            self.copy_source_if_match.as_deref(),
        )?;
        w.header_http_date(
            X_AMZ_COPY_SOURCE_IF_MODIFIED_SINCE,
            self.copy_source_if_modified_since.as_ref(),
        )?;
        w.header(
            X_AMZ_COPY_SOURCE_IF_NONE_MATCH,
            self.copy_source_if_none_match.as_deref(),
        )?;
        w.header_http_date(
            X_AMZ_COPY_SOURCE_IF_UNMODIFIED_SINCE,
            self.copy_source_if_unmodified_since.as_ref(),
        )?;
        w.header_display(X_AMZ_METADATA_DIRECTIVE, self.metadata_directive.as_ref())?;
        w.header_display(X_AMZ_TAGGING_DIRECTIVE, self.tagging_directive.as_ref())?;
        w.header(
            X_AMZ_COPY_SOURCE_SSE_CUSTOMER_ALGORITHM,
            self.copy_source_sse_customer_algorithm.as_deref(),
        )?;
        w.customer_key(
            X_AMZ_COPY_SOURCE_SSE_CUSTOMER_KEY,
            X_AMZ_COPY_SOURCE_SSE_CUSTOMER_KEY_MD5,
            self.copy_source_sse_customer_key.as_deref(),
            self.copy_source_sse_customer_key_md5.as_deref(),
        )?;
        w.finish(Bytes::new())
    }
}

impl S3RequestEncode for GetObjectRequest {
    const OPERATION: S3Operation = S3Operation::GetObject;

    fn encode(&self, config: &CodecConfig) -> Result<http::Request<Bytes>, CodecError> {
        let mut w = RequestWriter::new(
            config,
            Self::OPERATION,
            self.bucket.as_deref(),
            self.key.as_deref(),
        )?;
        w.header(IF_MATCH, self.if_match.as_deref())?;
        w.header_http_date(IF_MODIFIED_SINCE, self.if_modified_since.as_ref())?;
        w.header(IF_NONE_MATCH, self.if_none_match.as_deref())?;
        w.header_http_date(IF_UNMODIFIED_SINCE, self.if_unmodified_since.as_ref())?;
        w.header(RANGE, self.range.as_deref())?;
        w.header(
            X_AMZ_SSE_CUSTOMER_ALGORITHM,
            self.sse_customer_algorithm.as_deref(),
        )?;
        w.customer_key(
            X_AMZ_SSE_CUSTOMER_KEY,
            X_AMZ_SSE_CUSTOMER_KEY_MD5,
            self.sse_customer_key.as_deref(),
            self.sse_customer_key_md5.as_deref(),
        )?;
        w.header_display(X_AMZ_REQUEST_PAYER, self.request_payer.as_ref())?;

        w.query(
            QUERY_RESPONSE_CACHE_CONTROL,
            self.response_cache_control.clone(),
        );
        w.query(
            QUERY_RESPONSE_CONTENT_DISPOSITION,
            self.response_content_disposition.clone(),
        );
        w.query(
            QUERY_RESPONSE_CONTENT_ENCODING,
            self.response_content_encoding.clone(),
        );
        w.query(
            QUERY_RESPONSE_CONTENT_LANGUAGE,
            self.response_content_language.clone(),
        );
        w.query(
            QUERY_RESPONSE_CONTENT_TYPE,
            self.response_content_type.clone(),
        );
        w.query(
            QUERY_RESPONSE_EXPIRES,
            self.response_expires.as_ref().map(format_http_date),
        );
        w.query(QUERY_VERSION_ID, self.version_id.clone());
        w.query(
            QUERY_PART_NUMBER,
            self.part_number.map(|n| n.to_string()),
        );
        w.finish(Bytes::new())
    }
}
