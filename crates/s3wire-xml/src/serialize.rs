//! S3 XML serialization: converting shapes to S3-compatible XML.
//!
//! Implementors write their members as child elements; the enclosing element
//! is written by the caller, either [`to_xml`] for a document root or the
//! parent shape for nested members.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use s3wire_model::S3Error;
use s3wire_model::output::{CreateMultipartUploadResult, DeleteObjectsResult};
use s3wire_model::types::{AccessControlTranslation, DeletedObject, Error, OwnerOverride};

use crate::error::XmlError;

/// The S3 XML namespace.
pub const S3_NAMESPACE: &str = "http://s3.amazonaws.com/doc/2006-03-01/";

/// Trait for serializing S3 types to XML.
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait S3Serialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as S3-compatible XML with declaration and namespace.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: S3Serialize>(root_element: &str, value: &T) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element(root_element)
        .with_attribute(("xmlns", S3_NAMESPACE))
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional boolean.
fn write_optional_bool<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<bool>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, if v { "true" } else { "false" })?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an optional enum that has `as_str()`.
fn write_optional_enum<W: Write, E: AsStr>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&E>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v.as_str())?;
    }
    Ok(())
}

/// Write each item of an optional list as a repeated `<tag>` element.
fn write_flattened<W: Write, T: S3Serialize>(
    writer: &mut Writer<W>,
    tag: &str,
    items: Option<&Vec<T>>,
) -> io::Result<()> {
    for item in items.into_iter().flatten() {
        writer
            .create_element(tag)
            .write_inner_content(|w| item.serialize_xml(w))?;
    }
    Ok(())
}

/// Trait for enum types that can convert to their string representation.
trait AsStr {
    fn as_str(&self) -> &str;
}

macro_rules! impl_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AsStr for $ty {
                fn as_str(&self) -> &str {
                    self.as_str()
                }
            }
        )+
    };
}

impl_as_str!(OwnerOverride);

// ---------------------------------------------------------------------------
// S3Serialize implementations
// ---------------------------------------------------------------------------

impl S3Serialize for AccessControlTranslation {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_enum(writer, "Owner", self.owner.as_ref())
    }
}

impl S3Serialize for DeletedObject {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Key", self.key.as_deref())?;
        write_optional_text(writer, "VersionId", self.version_id.as_deref())?;
        write_optional_bool(writer, "DeleteMarker", self.delete_marker)?;
        write_optional_text(
            writer,
            "DeleteMarkerVersionId",
            self.delete_marker_version_id.as_deref(),
        )?;
        Ok(())
    }
}

impl S3Serialize for Error {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Key", self.key.as_deref())?;
        write_optional_text(writer, "VersionId", self.version_id.as_deref())?;
        write_optional_text(writer, "Code", self.code.as_deref())?;
        write_optional_text(writer, "Message", self.message.as_deref())?;
        Ok(())
    }
}

impl S3Serialize for DeleteObjectsResult {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_flattened(writer, "Deleted", self.deleted.as_ref())?;
        write_flattened(writer, "Error", self.errors.as_ref())?;
        Ok(())
    }
}

impl S3Serialize for CreateMultipartUploadResult {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Bucket", self.bucket.as_deref())?;
        write_optional_text(writer, "Key", self.key.as_deref())?;
        write_optional_text(writer, "UploadId", self.upload_id.as_deref())?;
        Ok(())
    }
}

impl S3Serialize for S3Error {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "Code", self.code.as_str())?;
        write_text_element(writer, "Message", &self.message)?;
        write_optional_text(writer, "Resource", self.resource.as_deref())?;
        write_optional_text(writer, "RequestId", self.request_id.as_deref())?;
        write_optional_text(writer, "HostId", self.host_id.as_deref())?;
        Ok(())
    }
}
