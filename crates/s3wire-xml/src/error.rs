//! XML error type and service error documents.

use std::io;

use s3wire_model::S3Error;

use crate::serialize::S3Serialize;

/// Errors that can occur during S3 XML serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

/// Format a service error as XML.
///
/// Errors are a flat `<Error>` element with no namespace and no outer
/// `<ErrorResponse>` wrapper.
///
/// # Example output
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <Error>
///   <Code>NoSuchBucket</Code>
///   <Message>The specified bucket does not exist</Message>
///   <Resource>/mybucket</Resource>
///   <RequestId>tx00000...</RequestId>
/// </Error>
/// ```
#[must_use]
pub fn error_to_xml(err: &S3Error) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);
    if let Err(e) = write_error_xml(&mut buf, err) {
        tracing::error!(error = %e, code = %err.code, "failed to serialize S3 error XML");
        buf.clear();
    }
    buf
}

fn write_error_xml(buf: &mut Vec<u8>, err: &S3Error) -> io::Result<()> {
    let mut writer = quick_xml::Writer::new(buf);
    writer.write_event(quick_xml::events::Event::Decl(
        quick_xml::events::BytesDecl::new("1.0", Some("UTF-8"), None),
    ))?;
    writer
        .create_element("Error")
        .write_inner_content(|w| err.serialize_xml(w))?;
    Ok(())
}
