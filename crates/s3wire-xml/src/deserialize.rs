//! S3 XML deserialization: parsing S3-compatible XML into shapes.
//!
//! Child elements that a shape does not know are skipped, so documents from
//! newer service versions still decode.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use s3wire_model::output::{CreateMultipartUploadResult, DeleteObjectsResult};
use s3wire_model::types::{AccessControlTranslation, DeletedObject, Error};
use s3wire_model::{S3Error, S3ErrorCode};

use crate::error::XmlError;

/// Trait for deserializing S3 types from XML.
///
/// The root element has already been consumed by the caller; the implementation
/// reads child elements until the matching end tag.
pub trait S3Deserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed or required fields are missing.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize S3-compatible XML into a typed value.
///
/// Finds the root element and delegates to the type's `S3Deserialize` implementation.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or deserialization fails.
pub fn from_xml<T: S3Deserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().expand_empty_elements = true;

    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                return T::deserialize_xml(&mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            // Skip declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// The tag name of a start element.
fn element_name(e: &BytesStart<'_>) -> Result<String, XmlError> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_owned)
        .map_err(|err| XmlError::ParseError(err.to_string()))
}

/// Read the text content of the current element and consume its end tag.
///
/// Text is kept verbatim, including leading and trailing whitespace.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::GeneralRef(e) => {
                let name = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let entity = format!("&{name};");
                let unescaped = quick_xml::escape::unescape(&entity)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Parse a boolean from XML text ("true"/"false").
fn parse_bool(s: &str) -> Result<bool, XmlError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(XmlError::ParseError(format!("invalid boolean: {s}"))),
    }
}

/// Drive `on_child` for every child element until the parent's end tag.
fn read_children<F>(
    reader: &mut Reader<&[u8]>,
    context: &str,
    mut on_child: F,
) -> Result<(), XmlError>
where
    F: FnMut(&mut Reader<&[u8]>, &str) -> Result<(), XmlError>,
{
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = element_name(&e)?;
                on_child(reader, &name)?;
            }
            Event::End(_) => return Ok(()),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(format!(
                    "unexpected EOF in {context}"
                )));
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// S3Deserialize implementations
// ---------------------------------------------------------------------------

impl S3Deserialize for AccessControlTranslation {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut act = AccessControlTranslation::new();
        read_children(
            reader,
            "AccessControlTranslation",
            |r, name| {
                match name {
                    "Owner" => act.owner = Some(read_text_content(r)?.into()),
                    _ => skip_element(r)?,
                }
                Ok(())
            },
        )?;
        Ok(act)
    }
}

impl S3Deserialize for DeletedObject {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut obj = DeletedObject::new();
        read_children(
            reader,
            "Deleted",
            |r, name| {
                match name {
                    "Key" => obj.key = Some(read_text_content(r)?),
                    "VersionId" => obj.version_id = Some(read_text_content(r)?),
                    "DeleteMarker" => {
                        obj.delete_marker = Some(parse_bool(&read_text_content(r)?)?);
                    }
                    "DeleteMarkerVersionId" => {
                        obj.delete_marker_version_id = Some(read_text_content(r)?);
                    }
                    _ => skip_element(r)?,
                }
                Ok(())
            },
        )?;
        Ok(obj)
    }
}

impl S3Deserialize for Error {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut entry = Error::new();
        read_children(
            reader,
            "Error",
            |r, name| {
                match name {
                    "Key" => entry.key = Some(read_text_content(r)?),
                    "VersionId" => entry.version_id = Some(read_text_content(r)?),
                    "Code" => entry.code = Some(read_text_content(r)?),
                    "Message" => entry.message = Some(read_text_content(r)?),
                    _ => skip_element(r)?,
                }
                Ok(())
            },
        )?;
        Ok(entry)
    }
}

impl S3Deserialize for DeleteObjectsResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut deleted = Vec::new();
        let mut errors = Vec::new();
        read_children(
            reader,
            "DeleteResult",
            |r, name| {
                match name {
                    "Deleted" => deleted.push(DeletedObject::deserialize_xml(r)?),
                    "Error" => errors.push(Error::deserialize_xml(r)?),
                    _ => skip_element(r)?,
                }
                Ok(())
            },
        )?;

        let mut result = DeleteObjectsResult::new();
        result.deleted = (!deleted.is_empty()).then_some(deleted);
        result.errors = (!errors.is_empty()).then_some(errors);
        Ok(result)
    }
}

impl S3Deserialize for CreateMultipartUploadResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = CreateMultipartUploadResult::new();
        read_children(
            reader,
            "InitiateMultipartUploadResult",
            |r, name| {
                match name {
                    "Bucket" => result.bucket = Some(read_text_content(r)?),
                    "Key" => result.key = Some(read_text_content(r)?),
                    "UploadId" => result.upload_id = Some(read_text_content(r)?),
                    _ => skip_element(r)?,
                }
                Ok(())
            },
        )?;
        Ok(result)
    }
}

impl S3Deserialize for S3Error {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut code = None;
        let mut message = None;
        let mut resource = None;
        let mut request_id = None;
        let mut host_id = None;
        read_children(
            reader,
            "Error",
            |r, name| {
                match name {
                    "Code" => code = Some(read_text_content(r)?),
                    "Message" => message = Some(read_text_content(r)?),
                    "Resource" => resource = Some(read_text_content(r)?),
                    "RequestId" => request_id = Some(read_text_content(r)?),
                    "HostId" => host_id = Some(read_text_content(r)?),
                    _ => skip_element(r)?,
                }
                Ok(())
            },
        )?;

        let code = S3ErrorCode::from(code.ok_or_else(|| XmlError::MissingElement("Code".into()))?);
        let mut err = match message {
            Some(message) => S3Error::with_message(code, message),
            None => S3Error::new(code),
        };
        err.resource = resource;
        err.request_id = request_id;
        err.host_id = host_id;
        Ok(err)
    }
}
