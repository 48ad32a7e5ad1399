//! Extraction of identifier records from an XML document.
//!
//! Every element whose local name matches the configured tag contributes one
//! identifier, wherever it sits in the tree (the `//bm_prn` selection). Order is
//! document order.

use crate::error::{ExportError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use tracing::debug;

/// Read `path` and return the identifiers held by `element` elements.
///
/// The file is decoded according to its BOM or XML declaration, so Latin-1
/// and other non-UTF-8 exports are read as well.
pub fn read_identifiers(path: impl AsRef<Path>, element: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read(path)?;
    let identifiers = parse_identifier_bytes(&content, element)?;
    debug!(path = %path.display(), count = identifiers.len(), "Read identifier document");
    Ok(identifiers)
}

/// Parse an XML string and return the trimmed text of every `element` element.
///
/// Text of nested children is included. An element with no text is an error,
/// since no graph reference can be built from it.
pub fn parse_identifiers(xml: &str, element: &str) -> Result<Vec<String>> {
    collect_identifiers(Reader::from_str(xml), element)
}

/// Like [`parse_identifiers`], for raw bytes in the encoding the document declares
pub fn parse_identifier_bytes(xml: &[u8], element: &str) -> Result<Vec<String>> {
    collect_identifiers(Reader::from_reader(xml), element)
}

fn collect_identifiers(mut reader: Reader<&[u8]>, element: &str) -> Result<Vec<String>> {
    let target = element.as_bytes();

    let mut identifiers = Vec::new();
    let mut depth = 0usize;
    // Depth of the matching element being captured, with its text so far
    let mut capture: Option<(usize, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                if capture.is_none() && e.local_name().as_ref() == target {
                    capture = Some((depth, String::new()));
                }
            }
            Ok(Event::Empty(ref e)) => {
                if capture.is_none() && e.local_name().as_ref() == target {
                    return Err(empty_identifier(element, identifiers.len() + 1));
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some((_, ref mut text)) = capture {
                    let unescaped = e.unescape()?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some((_, ref mut text)) = capture {
                    let decoded = reader.decoder().decode(e)?;
                    text.push_str(&decoded);
                }
            }
            Ok(Event::End(_)) => {
                if let Some((open_depth, _)) = capture {
                    if open_depth == depth {
                        if let Some((_, text)) = capture.take() {
                            let identifier = text.trim();
                            if identifier.is_empty() {
                                return Err(empty_identifier(element, identifiers.len() + 1));
                            }
                            identifiers.push(identifier.to_string());
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => {
                if depth > 0 {
                    return Err(ExportError::Xml(format!(
                        "unexpected end of document with {} unclosed element(s)",
                        depth
                    )));
                }
                break;
            }
            Ok(_) => {}
            Err(e) => {
                return Err(ExportError::Xml(format!(
                    "error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
    }

    Ok(identifiers)
}

fn empty_identifier(element: &str, position: usize) -> ExportError {
    ExportError::EmptyIdentifier {
        element: element.to_string(),
        position,
    }
}
