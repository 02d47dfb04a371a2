//! `.loc` file writing

use super::{HEADER_SIZE, LocalizationFile, NLOC_VERSION, RECORD_SIZE};
use crate::error::Result;
use crate::formats::common::{Endian, NLOC_MAGIC};
use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use std::io::Write;
use std::path::Path;

/// Write a .loc file to disk
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_nloc<P: AsRef<Path>>(path: P, file: &LocalizationFile, endian: Endian) -> Result<()> {
    let data = to_nloc_bytes(file, endian)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Serialize a localization file to NLOC bytes
///
/// Text goes into the blob in message order; the header records are sorted
/// by ID. A missing language ID is written as 0.
///
/// # Errors
/// Returns an error if writing to the in-memory buffer fails.
pub fn to_nloc_bytes(file: &LocalizationFile, endian: Endian) -> Result<Vec<u8>> {
    match endian {
        Endian::Little => write_with::<LittleEndian>(file, endian),
        Endian::Big => write_with::<BigEndian>(file, endian),
    }
}

fn write_with<B: ByteOrder>(file: &LocalizationFile, endian: Endian) -> Result<Vec<u8>> {
    let lang_id = file.lang_id.unwrap_or_else(|| {
        tracing::warn!("Language ID was not set, defaulting to 0");
        0
    });

    // Text blob in message order, remembering where each message starts
    let mut blob = Vec::new();
    let mut offsets = Vec::with_capacity(file.messages.len());
    for message in &file.messages {
        offsets.push((blob.len() / 2) as u32);
        for unit in message.text.encode_utf16() {
            blob.write_u16::<B>(unit)?;
        }
        blob.write_u16::<B>(0)?;
    }

    // Header records in ID order
    let mut records: Vec<(u32, u32)> = file
        .messages
        .iter()
        .zip(offsets)
        .map(|(message, offset)| (message.id, offset))
        .collect();
    records.sort_by_key(|&(id, _)| id);

    let mut data = Vec::with_capacity(HEADER_SIZE + RECORD_SIZE * records.len() + blob.len());
    data.write_all(&NLOC_MAGIC)?;
    data.write_u32::<B>(NLOC_VERSION)?;
    data.write_u32::<B>(lang_id)?;
    data.write_u32::<B>(records.len() as u32)?;
    data.write_u32::<B>(u32::from(endian == Endian::Big))?;

    for (id, offset) in records {
        data.write_u32::<B>(id)?;
        data.write_u32::<B>(offset)?;
    }

    data.extend_from_slice(&blob);

    tracing::debug!(
        "Serialized {} NLOC messages ({endian}, {} bytes)",
        file.messages.len(),
        data.len()
    );

    Ok(data)
}
