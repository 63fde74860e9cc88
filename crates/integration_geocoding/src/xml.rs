//! Status extraction for XML responses
//!
//! The XML output of the Geocoding API is returned to the caller as-is; only
//! the top-level `<status>` and `<error_message>` elements are read so the
//! response can be classified like a JSON one.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::TransportError;

/// Top-level status fields of an XML geocoding document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlStatus {
    pub status: String,
    pub error_message: Option<String>,
}

/// Read `/GeocodeResponse/status` and `/GeocodeResponse/error_message`
pub fn parse_status(body: &str) -> Result<XmlStatus, TransportError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut current: Option<Vec<u8>> = None;
    let mut status = None;
    let mut error_message = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                // children of the root element
                current = (depth == 2).then(|| e.name().as_ref().to_vec());
            },
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                current = None;
            },
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| TransportError::Parse(e.to_string()))?
                    .into_owned();
                match current.as_deref() {
                    Some(b"status") => status = Some(text),
                    Some(b"error_message") => error_message = Some(text),
                    _ => {},
                }
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => return Err(TransportError::Parse(e.to_string())),
        }
    }

    let status =
        status.ok_or_else(|| TransportError::Parse("missing <status> element".to_string()))?;

    Ok(XmlStatus {
        status,
        error_message,
    })
}
