//! End-to-end tests for the s3wire layers.
//!
//! Each test builds a request shape, encodes it, replays a canned service
//! response through the decoder, and checks the resulting shape. No server is
//! involved.
//!
//! Run them with:
//! ```text
//! RUST_LOG=s3wire_http=debug cargo test -p s3wire-integration
//! ```

use std::sync::Once;

use bytes::Bytes;
use s3wire_http::CodecConfig;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Endpoint used by every encoded request.
#[must_use]
pub fn endpoint_url() -> String {
    std::env::var("S3WIRE_ENDPOINT").unwrap_or_else(|_| "http://localhost:4566".to_owned())
}

/// A lenient codec configuration pointing at [`endpoint_url`].
#[must_use]
pub fn codec_config() -> CodecConfig {
    init_tracing();
    CodecConfig::builder().endpoint(endpoint_url()).build()
}

/// A strict codec configuration pointing at [`endpoint_url`].
#[must_use]
pub fn strict_codec_config() -> CodecConfig {
    init_tracing();
    CodecConfig::builder()
        .endpoint(endpoint_url())
        .strict_headers(true)
        .build()
}

/// Build a canned service response.
///
/// # Errors
///
/// Returns an error if a header name or value is not valid HTTP.
pub fn canned_response(
    status: u16,
    headers: &[(&str, &str)],
    body: impl Into<Bytes>,
) -> anyhow::Result<http::Response<Bytes>> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = body.into();
    tracing::debug!(status, body_len = body.len(), "built canned response");
    Ok(builder.body(body)?)
}

mod test_error;
mod test_multipart;
mod test_object;
