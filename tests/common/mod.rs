// SPDX-License-Identifier: MPL-2.0
//! Synthetic geotagged JPEG and SRTM tile builders shared by integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

const TYPE_BYTE: u16 = 1;
const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

const TAG_GPS_IFD: u16 = 0x8825;
const TAG_LAT_REF: u16 = 0x0001;
const TAG_LAT: u16 = 0x0002;
const TAG_LON_REF: u16 = 0x0003;
const TAG_LON: u16 = 0x0004;
const TAG_ALT_REF: u16 = 0x0005;
const TAG_ALT: u16 = 0x0006;
const TAG_IMG_DIRECTION: u16 = 0x0011;

/// Value offset far past the end of any fixture.
const DANGLING_OFFSET: u32 = 0x00FF_FFFF;

const XMP_NAMESPACE: &[u8] = b"http://ns.adobe.com/xap/1.0/\0";

pub type Rational = (u32, u32);

/// GPS tags to embed. `None` leaves the tag pair out of the GPS IFD.
#[derive(Debug, Clone, Default)]
pub struct GpsTags {
    pub latitude: Option<(char, [Rational; 3])>,
    pub longitude: Option<(char, [Rational; 3])>,
    pub altitude: Option<(u8, Rational)>,
    /// Adds a `GPSImgDirection` entry whose value lies outside the block.
    pub dangling_direction: bool,
}

impl GpsTags {
    /// 34° 15' 30" N, 118° 30' 0" W at `altitude_m` above mean sea level.
    pub fn los_angeles(altitude_m: Rational) -> Self {
        Self {
            latitude: Some(('N', [(34, 1), (15, 1), (30, 1)])),
            longitude: Some(('W', [(118, 1), (30, 1), (0, 1)])),
            altitude: Some((0, altitude_m)),
            dangling_direction: false,
        }
    }
}

struct Entry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
    dangling: bool,
}

fn ascii(tag: u16, letter: char) -> Entry {
    Entry {
        tag,
        kind: TYPE_ASCII,
        count: 2,
        data: vec![letter as u8, 0],
        dangling: false,
    }
}

fn rationals(tag: u16, values: &[Rational]) -> Entry {
    let mut data = Vec::with_capacity(values.len() * 8);
    for (num, denom) in values {
        data.extend_from_slice(&num.to_le_bytes());
        data.extend_from_slice(&denom.to_le_bytes());
    }
    Entry {
        tag,
        kind: TYPE_RATIONAL,
        count: values.len() as u32,
        data,
        dangling: false,
    }
}

fn push_entry(out: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&kind.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&value);
}

/// Little-endian TIFF with an IFD0 that only points at the GPS IFD.
fn tiff(gps: &GpsTags) -> Vec<u8> {
    let mut entries = Vec::new();
    if let Some((hemisphere, dms)) = gps.latitude {
        entries.push(ascii(TAG_LAT_REF, hemisphere));
        entries.push(rationals(TAG_LAT, &dms));
    }
    if let Some((hemisphere, dms)) = gps.longitude {
        entries.push(ascii(TAG_LON_REF, hemisphere));
        entries.push(rationals(TAG_LON, &dms));
    }
    if let Some((reference, altitude)) = gps.altitude {
        entries.push(Entry {
            tag: TAG_ALT_REF,
            kind: TYPE_BYTE,
            count: 1,
            data: vec![reference],
            dangling: false,
        });
        entries.push(rationals(TAG_ALT, &[altitude]));
    }
    if gps.dangling_direction {
        entries.push(Entry {
            dangling: true,
            ..rationals(TAG_IMG_DIRECTION, &[(90, 1)])
        });
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&8u32.to_le_bytes());

    let gps_offset: u32 = 8 + 2 + 12 + 4;
    out.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut out, TAG_GPS_IFD, TYPE_LONG, 1, gps_offset.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    let mut data_offset = gps_offset + 2 + 12 * entries.len() as u32 + 4;
    let mut data = Vec::new();
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in &entries {
        if entry.dangling {
            push_entry(
                &mut out,
                entry.tag,
                entry.kind,
                entry.count,
                DANGLING_OFFSET.to_le_bytes(),
            );
        } else if entry.data.len() <= 4 {
            let mut inline = [0u8; 4];
            inline[..entry.data.len()].copy_from_slice(&entry.data);
            push_entry(&mut out, entry.tag, entry.kind, entry.count, inline);
        } else {
            push_entry(
                &mut out,
                entry.tag,
                entry.kind,
                entry.count,
                data_offset.to_le_bytes(),
            );
            data.extend_from_slice(&entry.data);
            data_offset += entry.data.len() as u32;
        }
    }
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&data);
    out
}

fn segment(out: &mut Vec<u8>, marker: u8, payload: &[u8]) {
    out.extend_from_slice(&[0xFF, marker]);
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(payload);
}

/// Builds a minimal JPEG carrying an EXIF GPS block and/or an XMP packet.
pub fn jpeg(gps: Option<&GpsTags>, xmp: Option<&str>) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];
    if let Some(gps) = gps {
        let mut payload = b"Exif\0\0".to_vec();
        payload.extend_from_slice(&tiff(gps));
        segment(&mut out, 0xE1, &payload);
    }
    if let Some(xmp) = xmp {
        let mut payload = XMP_NAMESPACE.to_vec();
        payload.extend_from_slice(xmp.as_bytes());
        segment(&mut out, 0xE1, &payload);
    }
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

/// XMP packet in the attribute form written by DJI cameras.
pub fn dji_xmp(relative: &str, absolute: &str) -> String {
    format!(
        r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
 <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
  <rdf:Description rdf:about="DJI Meta Data"
    xmlns:drone-dji="http://www.dji.com/drone-dji/1.0/"
    drone-dji:AbsoluteAltitude="{absolute}"
    drone-dji:RelativeAltitude="{relative}"/>
 </rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#
    )
}

pub fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("failed to write image");
    path
}

/// Writes an SRTM3 tile with the same height at every sample.
pub fn write_flat_tile(dir: &Path, name: &str, height_m: i16) {
    let samples = 1201usize;
    let bytes = height_m.to_be_bytes().repeat(samples * samples);
    fs::write(dir.join(format!("{name}.hgt")), bytes).expect("failed to write tile");
}
