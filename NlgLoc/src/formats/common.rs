//! Types shared by the NLOC, NLOCT and dict/data formats

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// "NLOC" magic signature
pub const NLOC_MAGIC: [u8; 4] = *b"NLOC";

/// First four bytes of a little-endian `.dict` file
pub const DICT_MAGIC: [u8; 4] = [0x58, 0x24, 0xF3, 0xA9];

/// How many leading bytes are scanned for NUL when sniffing for NLOCT
pub const TEXT_SNIFF_LEN: usize = 1024;

/// Byte order of an NLOC file
///
/// Luigi's Mansion: Dark Moon only ships little-endian files; big-endian
/// ones show up in other Next Level Games titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Endian {
    #[default]
    Little,
    Big,
}

impl Endian {
    /// Human-readable name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Little => "little-endian",
            Self::Big => "big-endian",
        }
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of localization file, detected from content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Binary NLOC, little-endian
    NlocLe,
    /// Binary NLOC, big-endian
    NlocBe,
    /// NLOCT text
    Nloct,
    /// `.dict`/`.data` pair wrapping a little-endian NLOC
    Dict,
}

impl FileType {
    /// Detect the file type from the first bytes of a file
    ///
    /// NLOCT is UTF-8 text, so anything without a NUL byte in the first
    /// [`TEXT_SNIFF_LEN`] bytes is assumed to be NLOCT.
    #[must_use]
    pub fn detect(head: &[u8]) -> Option<Self> {
        if head.starts_with(&DICT_MAGIC) {
            return Some(Self::Dict);
        }

        if let Some(first_8) = head.get(..8) {
            if first_8 == b"NLOC\x01\0\0\0" {
                return Some(Self::NlocLe);
            }
            if first_8 == b"NLOC\0\0\0\x01" {
                return Some(Self::NlocBe);
            }
        }

        let sniff = &head[..head.len().min(TEXT_SNIFF_LEN)];
        if sniff.contains(&0) {
            None
        } else {
            Some(Self::Nloct)
        }
    }

    /// Detect the file type of a file on disk
    ///
    /// # Errors
    /// Returns an error if the file can't be opened or read.
    pub fn detect_file<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let mut head = Vec::with_capacity(TEXT_SNIFF_LEN);
        File::open(path)?
            .take(TEXT_SNIFF_LEN as u64)
            .read_to_end(&mut head)?;
        Ok(Self::detect(&head))
    }

    /// Endianness of a binary NLOC type
    #[must_use]
    pub fn endian(self) -> Option<Endian> {
        match self {
            Self::NlocLe | Self::Dict => Some(Endian::Little),
            Self::NlocBe => Some(Endian::Big),
            Self::Nloct => None,
        }
    }
}
