//! File format implementations
//!
//! - NLOC - binary localization files (`.loc`)
//! - NLOCT - text localization files (`.loct`)
//! - DICT/DATA - archive pairs that wrap an NLOC file

pub mod common;
pub mod dict;
pub mod nloc;
pub mod nloct;

use std::path::Path;

use crate::error::{Error, Result};

pub use common::{Endian, FileType};
pub use nloc::{LocalizationFile, MergeStats, Message};

/// Read a localization file of any supported type
///
/// The type is detected from the file's contents. For a `.dict` file, the
/// NLOC data is read from the `.data` file beside it.
///
/// # Errors
/// Returns [`Error::UnknownFileType`] if the type can't be detected, or
/// the error from the matching reader.
pub fn read_localization_file<P: AsRef<Path>>(path: P) -> Result<LocalizationFile> {
    let path = path.as_ref();
    let file_type =
        FileType::detect_file(path)?.ok_or_else(|| Error::UnknownFileType(path.to_path_buf()))?;

    tracing::debug!("Detected {:?} for {}", file_type, path.display());

    match file_type {
        FileType::NlocLe => nloc::parse_nloc_bytes(&std::fs::read(path)?, Endian::Little),
        FileType::NlocBe => nloc::parse_nloc_bytes(&std::fs::read(path)?, Endian::Big),
        FileType::Dict => dict::read_dict_pair(path),
        FileType::Nloct => nloct::read_nloct(path),
    }
}
