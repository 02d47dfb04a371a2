//! .loc (NLOC) localization file format
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Binary format for Next Level Games localization strings. Layout:
//!
//! | Offset            | Size      | Field                                 |
//! |-------------------|-----------|---------------------------------------|
//! | `0x00`            | 4         | Magic `NLOC`                          |
//! | `0x04`            | 4         | Version word, always 1                |
//! | `0x08`            | 4         | Language ID                           |
//! | `0x0C`            | 4         | Message count                         |
//! | `0x10`            | 4         | Endian marker (0 = LE, 1 = BE)        |
//! | `0x14`            | 8 * count | `(id, text_offset)` pairs, ID-sorted  |
//! | `0x14 + 8*count`  | rest      | UTF-16 text blob, NUL-terminated runs |
//!
//! All integers and the text blob use the file's byte order. Text offsets
//! count UTF-16 code units from the start of the blob.

mod editor;
mod reader;
mod writer;

pub use editor::MergeStats;
pub use reader::{parse_nloc_bytes, parse_nloc_bytes_auto, read_nloc};
pub use writer::{to_nloc_bytes, write_nloc};

/// Version word expected at offset 4
pub const NLOC_VERSION: u32 = 1;

/// Size of the fixed header in bytes
pub const HEADER_SIZE: usize = 0x14;

/// Size of each `(id, text_offset)` record
pub const RECORD_SIZE: usize = 8;

/// A single localized message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Hash identifier of the message
    pub id: u32,
    /// The localized text (never contains U+0000)
    pub text: String,
}

impl Message {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A localization file: an optional language ID and an ordered message list
///
/// Messages are kept in a `Vec` rather than a map so their authoring order
/// survives a round trip. The game doesn't care about order, but messages
/// were evidently stored in the order they were written, which keeps
/// related strings together when reading a dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizationFile {
    /// Language ID (a hash value); `None` when not specified
    pub lang_id: Option<u32>,
    pub messages: Vec<Message>,
}

impl LocalizationFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty file for a language
    pub fn with_lang_id(lang_id: u32) -> Self {
        Self {
            lang_id: Some(lang_id),
            messages: Vec::new(),
        }
    }
}
