//! S3 HTTP request encoding and response decoding for s3wire shapes.
//!
//! This crate maps the typed shapes of `s3wire-model` onto the RestXml wire
//! protocol:
//!
//! - **Request encoding** ([`request`]): Turns request shapes into
//!   [`http::Request`]s, placing each member in the URI path, a header, a query
//!   parameter or the body.
//!
//! - **Response decoding** ([`response`]): Builds result shapes from successful
//!   responses and [`S3Error`](s3wire_model::S3Error)s from failed ones.
//!
//! - **Configuration** ([`config`]): Endpoint, metadata header prefix and
//!   strictness toward malformed header values.
//!
//! # Usage
//!
//! ```
//! use s3wire_http::{CodecConfig, S3RequestEncode};
//! use s3wire_model::input::CreateMultipartUploadRequest;
//!
//! let config = CodecConfig::builder().endpoint("http://localhost:4566").build();
//! let request = CreateMultipartUploadRequest::new()
//!     .bucket("b1")
//!     .key("k1")
//!     .content_type("text/plain");
//!
//! let http_request = request.encode(&config).unwrap();
//! assert_eq!(http_request.method(), http::Method::POST);
//! assert_eq!(http_request.uri().to_string(), "http://localhost:4566/b1/k1?uploads");
//! ```

// S3Error travels inside CodecError::Service and is large by nature.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod error;
pub mod headers;
pub mod request;
pub mod response;

// Re-export key types for convenience.
pub use config::CodecConfig;
pub use error::CodecError;
pub use request::{S3RequestEncode, customer_key_md5};
pub use response::{S3ResponseDecode, decode_response, error_from_response};
