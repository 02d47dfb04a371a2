//! `.loc` file reading and parsing

use super::{HEADER_SIZE, LocalizationFile, Message, NLOC_VERSION, RECORD_SIZE};
use crate::error::{Error, Result};
use crate::formats::common::{Endian, FileType, NLOC_MAGIC};
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};
use std::path::Path;

/// Read a .loc file from disk, detecting its endianness
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::InvalidNlocMagic`] or [`Error::InvalidNlocVersion`] if the
/// file does not have a valid NLOC header.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::InvalidNlocMagic`]: crate::Error::InvalidNlocMagic
/// [`Error::InvalidNlocVersion`]: crate::Error::InvalidNlocVersion
pub fn read_nloc<P: AsRef<Path>>(path: P) -> Result<LocalizationFile> {
    let data = std::fs::read(path)?;
    parse_nloc_bytes_auto(&data)
}

/// Parse NLOC data, taking the endianness from the version word
///
/// # Errors
/// Returns an error if the header or text blob is malformed.
pub fn parse_nloc_bytes_auto(data: &[u8]) -> Result<LocalizationFile> {
    let endian = match FileType::detect(data) {
        Some(FileType::NlocBe) => Endian::Big,
        // Let the little-endian parse report what's wrong with the header
        _ => Endian::Little,
    };
    parse_nloc_bytes(data, endian)
}

/// Parse NLOC data with a known endianness
///
/// Messages come back ordered by text offset, which recovers the order they
/// were authored in rather than the ID order of the header.
///
/// # Errors
///
/// Returns [`Error::InvalidNlocMagic`] if the magic is not `NLOC`.
/// Returns [`Error::InvalidNlocVersion`] if the version word isn't 1 when read
/// with `endian`.
/// Returns [`Error::TruncatedHeader`] if the buffer is shorter than the header
/// and offset table.
/// Returns a text error if a message's offset or text is malformed.
///
/// [`Error::InvalidNlocMagic`]: crate::Error::InvalidNlocMagic
/// [`Error::InvalidNlocVersion`]: crate::Error::InvalidNlocVersion
/// [`Error::TruncatedHeader`]: crate::Error::TruncatedHeader
pub fn parse_nloc_bytes(data: &[u8], endian: Endian) -> Result<LocalizationFile> {
    match endian {
        Endian::Little => parse_with::<LittleEndian>(data, endian),
        Endian::Big => parse_with::<BigEndian>(data, endian),
    }
}

fn parse_with<B: ByteOrder>(data: &[u8], endian: Endian) -> Result<LocalizationFile> {
    if data.len() < HEADER_SIZE {
        return Err(Error::TruncatedHeader {
            needed: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let mut cursor = Cursor::new(data);

    let mut magic = [0u8; 4];
    cursor.read_exact(&mut magic)?;
    if magic != NLOC_MAGIC {
        return Err(Error::InvalidNlocMagic(magic));
    }

    let version = cursor.read_u32::<B>()?;
    if version != NLOC_VERSION {
        return Err(Error::InvalidNlocVersion {
            found: version,
            endian: endian.as_str(),
        });
    }

    let lang_id = cursor.read_u32::<B>()?;
    let count = cursor.read_u32::<B>()? as usize;
    let marker = cursor.read_u32::<B>()?;
    let expected_marker = u32::from(endian == Endian::Big);
    if marker != expected_marker {
        tracing::debug!("Unexpected endian marker {marker} in {endian} NLOC");
    }

    let table_end = count
        .checked_mul(RECORD_SIZE)
        .and_then(|size| size.checked_add(HEADER_SIZE))
        .filter(|&end| end <= data.len())
        .ok_or(Error::TruncatedHeader {
            needed: HEADER_SIZE.saturating_add(count.saturating_mul(RECORD_SIZE)),
            actual: data.len(),
        })?;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        let id = cursor.read_u32::<B>()?;
        let text_offset = cursor.read_u32::<B>()?;
        records.push((id, text_offset));
    }

    let units = decode_units::<B>(&data[table_end..])?;

    let mut messages = Vec::with_capacity(count);
    for (id, text_offset) in records {
        let text = text_at(&units, id, text_offset)?;
        messages.push((text_offset, Message { id, text }));
    }

    // Stable, so messages sharing an offset keep their header order
    messages.sort_by_key(|(offset, _)| *offset);

    tracing::debug!("Parsed {} NLOC messages ({endian})", messages.len());

    Ok(LocalizationFile {
        lang_id: Some(lang_id),
        messages: messages.into_iter().map(|(_, m)| m).collect(),
    })
}

/// Split the text blob into UTF-16 code units
fn decode_units<B: ByteOrder>(blob: &[u8]) -> Result<Vec<u16>> {
    if blob.len() % 2 != 0 {
        return Err(Error::OddTextBlob(blob.len()));
    }
    Ok(blob.chunks_exact(2).map(B::read_u16).collect())
}

/// Extract the NUL-terminated string starting at `offset`
fn text_at(units: &[u16], id: u32, offset: u32) -> Result<String> {
    let start = offset as usize;
    let tail = units.get(start..).ok_or(Error::InvalidTextOffset {
        id,
        offset,
        units: units.len(),
    })?;

    let len = tail
        .iter()
        .position(|&u| u == 0)
        .ok_or(Error::UnterminatedText { id, offset })?;

    String::from_utf16(&tail[..len]).map_err(|_| Error::InvalidUtf16 { id })
}
