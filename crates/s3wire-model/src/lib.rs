//! S3 request/response shapes with structural equality and diagnostic rendering.
//!
//! Every shape is a flat set of optional members. Two shapes are equal when
//! they are the same type and every member is pairwise equal, and the
//! `Display` rendering lists only the populated members:
//!
//! ```
//! use s3wire_model::input::CreateMultipartUploadRequest;
//!
//! let mut req = CreateMultipartUploadRequest::new().bucket("b1").key("k1");
//! req.add_metadata_entry("a", "1").unwrap();
//! assert!(req.add_metadata_entry("a", "2").is_err());
//! assert_eq!(req.to_string(), "{Bucket: b1,Key: k1,Metadata: {a=1}}");
//! ```
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]

#[macro_use]
mod macros;

pub mod blob;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod shape;
pub mod types;

pub use blob::StreamingBlob;
pub use error::{Fault, ModelError, S3Error, S3ErrorCode};
pub use operations::S3Operation;
pub use shape::S3Shape;
