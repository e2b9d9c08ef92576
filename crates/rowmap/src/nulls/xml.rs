//! Decoding of single XML elements into nullable values.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, RowmapError};

/// The parts of an element a nullable value cares about.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct XmlElement {
    /// Element carries an attribute whose local name is `nil`.
    pub nil: bool,

    /// Character data directly inside the element.
    pub text: String,
}

/// Read the first element of `xml`.
///
/// Only character data at the element's own level is collected; nested
/// elements are skipped.
pub(crate) fn decode_element(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    let mut element = XmlElement::default();
    let mut depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if depth == 0 {
                    element.nil = has_nil_attribute(&e)?;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    element.nil = has_nil_attribute(&e)?;
                    return Ok(element);
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(element);
                }
            }
            Event::Text(e) if depth == 1 => {
                element.text.push_str(&e.unescape()?);
            }
            Event::CData(e) if depth == 1 => {
                element.text.push_str(&String::from_utf8_lossy(&e));
            }
            Event::Eof => {
                return Err(RowmapError::Xml(
                    "unexpected end of document before element was closed".to_string(),
                ));
            }
            _ => {}
        }
    }
}

fn has_nil_attribute(start: &BytesStart<'_>) -> Result<bool> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| RowmapError::Xml(format!("attribute error: {}", e)))?;
        if attr.key.local_name().as_ref() == b"nil" {
            return Ok(true);
        }
    }
    Ok(false)
}
