//! .loct (NLOCT) localization text format
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Human-editable counterpart of NLOC. One message per line:
//!
//! ```text
//! # Comments start with '#'
//! langid: "en"
//! "TitleMessage"    Luigi's Mansion
//! 5D2A01F0          Message with an unknown source string
//! ###
//! Block comments are fenced with ### lines, like CoffeeScript
//! ###
//! ```
//!
//! Identifiers are quoted source strings (hashed when read) or hex. Text
//! runs to the end of the line and is not interpreted further.

mod reader;
mod writer;

pub use reader::{parse_nloct, read_nloct};
pub use writer::{to_nloct_string, write_nloct};

/// Case-insensitive prefix of the language ID line
pub const LANGID_PREFIX: &str = "langid:";

/// Separator between identifier token and text when writing
pub const SEPARATOR: &str = "    ";
