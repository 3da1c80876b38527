// SPDX-License-Identifier: MPL-2.0
//! Device-reported altitudes from an embedded XMP packet.
//!
//! Drone cameras (DJI and compatible) write the height above the take-off point
//! into XMP, either as an attribute (`drone-dji:RelativeAltitude="+50.20"`) or
//! as free text (`RelativeAltitude: 50.2`). Reading happens in two stages:
//!
//! 1. A byte scan carves the `<x:xmpmeta>` … `</x:xmpmeta>` packet out of the
//!    raw file, whatever the container.
//! 2. The packet is parsed as namespace-aware XML with `quick_xml`, so an
//!    undeclared prefix makes it malformed; the altitude fields are looked
//!    up in the concatenated text first, then in element attributes.
//!
//! Any problem along the way yields absent fields, never an error.

use crate::domain::altitude::RelativeAltitude;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace, warn};

/// Opening marker of an XMP packet. The tag may carry attributes.
const PACKET_OPEN: &[u8] = b"<x:xmpmeta";
/// Closing marker of an XMP packet.
const PACKET_CLOSE: &[u8] = b"</x:xmpmeta>";

const RELATIVE_FIELD: &str = "RelativeAltitude";
const ABSOLUTE_FIELD: &str = "AbsoluteAltitude";

static RELATIVE_TEXT: LazyLock<Regex> = LazyLock::new(|| text_field_pattern(RELATIVE_FIELD));
static ABSOLUTE_TEXT: LazyLock<Regex> = LazyLock::new(|| text_field_pattern(ABSOLUTE_FIELD));

/// `<name>` followed by `:` or `=` and a signed decimal number.
fn text_field_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"{name}\s*[:=]\s*([-+]?\d+(?:\.\d+)?)"))
        .expect("altitude field regex should compile")
}

// =============================================================================
// PacketAltitudes
// =============================================================================

/// What happened to the embedded packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PacketStatus {
    /// No `<x:xmpmeta>` packet in the file.
    #[default]
    NotFound,
    /// A packet was found but is not well-formed XML.
    Malformed,
    /// The packet parsed; fields may still be absent.
    Parsed,
}

/// Altitudes reported by the device in its XMP packet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PacketAltitudes {
    pub status: PacketStatus,
    /// Height above the take-off point in metres.
    pub relative_alt_m: Option<f64>,
    /// Device altitude in metres; informational only.
    pub absolute_alt_m: Option<f64>,
}

impl PacketAltitudes {
    #[must_use]
    pub fn relative_altitude(&self) -> Option<RelativeAltitude> {
        self.relative_alt_m
            .map(|value_m| RelativeAltitude { value_m })
    }

    fn with_status(status: PacketStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

/// Reads the relative and absolute altitude from an image's XMP packet.
///
/// # Example
///
/// ```
/// use image_agl::media::xmp::{read_packet_altitudes, PacketStatus};
///
/// let image = br#"...<x:xmpmeta xmlns:x="adobe:ns:meta/">
///   <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
///     <rdf:Description xmlns:drone-dji="http://www.dji.com/drone-dji/1.0/"
///         drone-dji:AbsoluteAltitude="+512.34" drone-dji:RelativeAltitude="+50.20"/>
///   </rdf:RDF>
/// </x:xmpmeta>..."#;
///
/// let altitudes = read_packet_altitudes(image);
/// assert_eq!(altitudes.status, PacketStatus::Parsed);
/// assert_eq!(altitudes.relative_alt_m, Some(50.2));
/// assert_eq!(altitudes.absolute_alt_m, Some(512.34));
/// ```
#[must_use]
pub fn read_packet_altitudes(bytes: &[u8]) -> PacketAltitudes {
    let Some(packet) = find_packet(bytes) else {
        debug!("No XMP packet found");
        return PacketAltitudes::with_status(PacketStatus::NotFound);
    };
    trace!(len = packet.len(), "Found XMP packet");

    let content = match parse_packet(packet) {
        Ok(content) => content,
        Err(err) => {
            warn!("Ignoring XMP packet: {err}");
            return PacketAltitudes::with_status(PacketStatus::Malformed);
        }
    };

    let mut relative_alt_m = search_text(&RELATIVE_TEXT, &content.text);
    let mut absolute_alt_m = search_text(&ABSOLUTE_TEXT, &content.text);

    if relative_alt_m.is_none() || absolute_alt_m.is_none() {
        for (key, value) in &content.attributes {
            if relative_alt_m.is_none() && key.contains(RELATIVE_FIELD) {
                relative_alt_m = parse_number(value);
            }
            if absolute_alt_m.is_none() && key.contains(ABSOLUTE_FIELD) {
                absolute_alt_m = parse_number(value);
            }
        }
    }

    PacketAltitudes {
        status: PacketStatus::Parsed,
        relative_alt_m,
        absolute_alt_m,
    }
}

// =============================================================================
// Stage 1: packet boundaries
// =============================================================================

/// Returns the first `<x:xmpmeta ...>` … `</x:xmpmeta>` span, markers included.
#[must_use]
pub fn find_packet(bytes: &[u8]) -> Option<&[u8]> {
    let start = find(bytes, PACKET_OPEN, 0)?;
    let open_end = start + PACKET_OPEN.len();
    let tag_end = open_end + bytes[open_end..].iter().position(|&b| b == b'>')? + 1;
    let close = find(bytes, PACKET_CLOSE, tag_end)?;
    Some(&bytes[start..close + PACKET_CLOSE.len()])
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset)
}

// =============================================================================
// Stage 2: XML parsing
// =============================================================================

#[derive(Debug, thiserror::Error)]
enum PacketError {
    #[error("malformed XML: {0}")]
    Xml(String),
    #[error("unbalanced elements")]
    Unbalanced,
    #[error("undeclared namespace prefix `{0}`")]
    UnboundPrefix(String),
}

/// Text and attributes of a well-formed packet, in document order.
#[derive(Debug, Default)]
struct PacketContent {
    text: String,
    attributes: Vec<(String, String)>,
}

/// Parses the packet with namespace resolution, so element and attribute
/// prefixes must be declared.
fn parse_packet(packet: &[u8]) -> Result<PacketContent, PacketError> {
    let mut reader = NsReader::from_reader(packet);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut texts: Vec<String> = Vec::new();
    let mut attributes = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                check_bound(reader.resolve_element(e.name()).0)?;
                collect_attributes(&reader, e, &mut attributes)?;
            }
            Ok(Event::Empty(ref e)) => {
                check_bound(reader.resolve_element(e.name()).0)?;
                collect_attributes(&reader, e, &mut attributes)?;
            }
            Ok(Event::End(_)) => {
                depth = depth.checked_sub(1).ok_or(PacketError::Unbalanced)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| PacketError::Xml(err.to_string()))?;
                if !text.is_empty() {
                    texts.push(text.into_owned());
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e).trim().to_string();
                if !text.is_empty() {
                    texts.push(text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(PacketError::Xml(err.to_string())),
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(PacketError::Unbalanced);
    }

    Ok(PacketContent {
        text: texts.join(" "),
        attributes,
    })
}

fn check_bound(resolved: ResolveResult<'_>) -> Result<(), PacketError> {
    match resolved {
        ResolveResult::Unknown(prefix) => Err(PacketError::UnboundPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
        _ => Ok(()),
    }
}

fn collect_attributes(
    reader: &NsReader<&[u8]>,
    element: &BytesStart<'_>,
    out: &mut Vec<(String, String)>,
) -> Result<(), PacketError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|err| PacketError::Xml(err.to_string()))?;
        let raw_key = attr.key.as_ref();
        if raw_key == b"xmlns" || raw_key.starts_with(b"xmlns:") {
            continue;
        }
        check_bound(reader.resolve_attribute(attr.key).0)?;

        let key = String::from_utf8_lossy(raw_key).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| PacketError::Xml(err.to_string()))?;
        out.push((key, value.into_owned()));
    }
    Ok(())
}

// =============================================================================
// Field search
// =============================================================================

fn search_text(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|number| parse_number(number.as_str()))
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
