//! `.dict`/`.data` container pairs
//!
//! Luigi's Mansion: Dark Moon ships its NLOC files inside archive pairs: a
//! `.dict` file describing the archive and a `.data` file holding the
//! payload. This module only touches the few fields that matter for a
//! single-NLOC archive; the rest of the `.dict` is left as-is.
//!
//! `.data` layout:
//!
//! | Offset | Size | Field                                 |
//! |--------|------|---------------------------------------|
//! | `0x00` | 4    | Magic `0x12027020`                    |
//! | `0x04` | 4    | NLOC length                           |
//! | `0x08` | 8    | Zero                                  |
//! | `0x10` | n    | NLOC data, NUL-padded to an 8 boundary|

use std::fs;
use std::path::{Path, PathBuf};

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::formats::common::Endian;
use crate::formats::nloc::{LocalizationFile, parse_nloc_bytes};

/// Magic at the start of the `.data` file
pub const DATA_MAGIC: u32 = 0x12027020;

/// Size of the `.data` header
pub const DATA_HEADER_SIZE: usize = 0x10;

/// `.dict` offset of the NLOC length, rounded up to 4
pub const DICT_NLOC_SIZE_OFFSET: usize = 0x68;

/// `.dict` offsets that both hold the padded `.data` size
pub const DICT_DATA_SIZE_OFFSETS: [usize; 2] = [0x74, 0x84];

/// Minimum `.dict` size that holds every patched field
const DICT_MIN_SIZE: usize = 0x88;

/// Path of the `.data` file paired with a `.dict` file
#[must_use]
pub fn data_path_for(dict_path: &Path) -> PathBuf {
    dict_path.with_extension("data")
}

/// Read the NLOC file wrapped in a `.dict`/`.data` pair
///
/// `dict_path` is the `.dict` file; the payload is read from the `.data`
/// file next to it.
///
/// # Errors
/// Returns an error if the `.data` file can't be read or holds malformed
/// NLOC data.
pub fn read_dict_pair<P: AsRef<Path>>(dict_path: P) -> Result<LocalizationFile> {
    let data_path = data_path_for(dict_path.as_ref());
    let data = fs::read(&data_path)?;

    let payload = data.get(DATA_HEADER_SIZE..).ok_or(Error::TruncatedHeader {
        needed: DATA_HEADER_SIZE,
        actual: data.len(),
    })?;

    parse_nloc_bytes(payload, Endian::Little)
}

/// Replace the NLOC data inside an existing `.dict`/`.data` pair
///
/// The `.data` file is rewritten first so its final size is known, then
/// the size fields in the `.dict` file are patched in place.
///
/// # Errors
/// Returns [`Error::ContainerFileMissing`] if either file doesn't exist,
/// [`Error::DictTooSmall`] if the `.dict` can't hold the size fields, or an
/// IO error.
pub fn inject_into_dict_pair(nloc_data: &[u8], dict_path: &Path, data_path: &Path) -> Result<()> {
    for path in [dict_path, data_path] {
        if !path.is_file() {
            return Err(Error::ContainerFileMissing(path.to_path_buf()));
        }
    }

    // Check the .dict before touching anything
    let mut dict = fs::read(dict_path)?;
    if dict.len() < DICT_MIN_SIZE {
        return Err(Error::DictTooSmall {
            size: dict.len(),
            needed: DICT_MIN_SIZE,
        });
    }

    let data = build_data_file(nloc_data)?;
    fs::write(data_path, &data)?;

    let nloc_size_aligned = u32::try_from(nloc_data.len().next_multiple_of(4))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let data_size = data.len() as u32;

    LittleEndian::write_u32(
        &mut dict[DICT_NLOC_SIZE_OFFSET..DICT_NLOC_SIZE_OFFSET + 4],
        nloc_size_aligned,
    );
    for offset in DICT_DATA_SIZE_OFFSETS {
        LittleEndian::write_u32(&mut dict[offset..offset + 4], data_size);
    }
    fs::write(dict_path, &dict)?;

    tracing::info!(
        "Injected {} bytes of NLOC data into {} ({} bytes)",
        nloc_data.len(),
        data_path.display(),
        data_size
    );

    Ok(())
}

/// Build the full `.data` contents around an NLOC payload
fn build_data_file(nloc_data: &[u8]) -> Result<Vec<u8>> {
    let nloc_len = u32::try_from(nloc_data.len())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let total = (DATA_HEADER_SIZE + nloc_data.len()).next_multiple_of(8);
    let mut data = Vec::with_capacity(total);
    data.write_u32::<LittleEndian>(DATA_MAGIC)?;
    data.write_u32::<LittleEndian>(nloc_len)?;
    data.write_u32::<LittleEndian>(0)?;
    data.write_u32::<LittleEndian>(0)?;
    data.extend_from_slice(nloc_data);
    data.resize(total, 0);

    Ok(data)
}
