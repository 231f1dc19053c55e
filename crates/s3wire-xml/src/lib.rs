//! S3 XML serialization/deserialization for s3wire.
//!
//! S3 uses the RestXml protocol with `noErrorWrapping: true`, so service errors
//! arrive as a flat `<Error>` document.
//!
//! # Key components
//!
//! - [`S3Serialize`] trait and [`to_xml`] function for writing shapes as XML bodies
//! - [`S3Deserialize`] trait and [`from_xml`] function for reading XML bodies into shapes
//! - [`error_to_xml`] for formatting a service error document
//!
//! # S3 XML conventions
//!
//! - Namespace: `http://s3.amazonaws.com/doc/2006-03-01/`
//! - Booleans: lowercase `true`/`false`
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{S3Deserialize, from_xml};
pub use error::{XmlError, error_to_xml};
pub use serialize::{S3_NAMESPACE, S3Serialize, to_xml};
