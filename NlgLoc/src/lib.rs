//! # NlgLoc
//!
//! A pure-Rust library for working with the localization files of Next Level
//! Games titles such as Luigi's Mansion: Dark Moon.
//!
//! ## Supported Formats
//!
//! - **NLOC** - Binary localization files, little- or big-endian
//! - **NLOCT** - Human-editable text form of NLOC
//! - **DICT/DATA** - Archive pairs wrapping a single NLOC file
//!
//! ## Quick Start
//!
//! ### Converting Between Formats
//!
//! ```no_run
//! use nlgloc::converter::{ConvertOptions, convert};
//! use nlgloc::hash::PlaintextRegistry;
//!
//! let registry = PlaintextRegistry::from_path("nlg_hash_plaintext_data.txt");
//! convert("message.loc", "message.loct", &ConvertOptions::default(), &registry)?;
//! # Ok::<(), nlgloc::Error>(())
//! ```
//!
//! ### Editing Messages
//!
//! ```no_run
//! use nlgloc::prelude::*;
//!
//! let mut file = read_localization_file("message.loc")?;
//! let id = hash_str("menu_start")?;
//! file.set_text(id, "Begin");
//! write_nloc("message.loc", &file, Endian::Little)?;
//! # Ok::<(), nlgloc::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `nlgloc` command-line binary

pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod hash;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::formats::nloc::{parse_nloc_bytes, read_nloc, to_nloc_bytes, write_nloc};
    pub use crate::formats::nloct::{parse_nloct, read_nloct, to_nloct_string, write_nloct};
    pub use crate::formats::{
        Endian, FileType, LocalizationFile, MergeStats, Message, read_localization_file,
    };
    pub use crate::hash::{HashOptions, PlaintextRegistry, hash, hash_str, hash_with};
    pub use crate::utils::{display_id, render_id};

    pub use crate::converter;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
