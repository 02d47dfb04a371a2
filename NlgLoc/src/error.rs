//! Error types for `NlgLoc`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `NlgLoc` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== NLOC (binary) Errors ====================
    /// The data is not a valid NLOC file (missing NLOC magic).
    #[error("invalid NLOC magic: expected NLOC, found {0:?}")]
    InvalidNlocMagic([u8; 4]),

    /// The version word does not match the requested endianness.
    #[error("invalid NLOC version word {found:#010X} (expected 1 for {endian} data)")]
    InvalidNlocVersion {
        /// The version word as read in the requested endianness.
        found: u32,
        /// The endianness the data was read with.
        endian: &'static str,
    },

    /// The buffer is shorter than the header and offset table it declares.
    #[error("NLOC header truncated: need {needed} bytes, have {actual}")]
    TruncatedHeader {
        /// Bytes required by the header and offset table.
        needed: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// The text blob has an odd number of bytes and cannot be UTF-16.
    #[error("NLOC text blob has odd length {0}")]
    OddTextBlob(usize),

    /// A message's text offset points past the end of the text blob.
    #[error("text offset {offset} for message {id:X} is outside the text blob ({units} code units)")]
    InvalidTextOffset {
        /// The message identifier.
        id: u32,
        /// The offending code-unit offset.
        offset: u32,
        /// Size of the text blob in UTF-16 code units.
        units: usize,
    },

    /// A message's text has no NUL terminator before the end of the blob.
    #[error("text for message {id:X} at offset {offset} is not NUL-terminated")]
    UnterminatedText {
        /// The message identifier.
        id: u32,
        /// The code-unit offset the text starts at.
        offset: u32,
    },

    /// A message's text is not valid UTF-16.
    #[error("text for message {id:X} is not valid UTF-16")]
    InvalidUtf16 {
        /// The message identifier.
        id: u32,
    },

    // ==================== NLOCT (text) Errors ====================
    /// A line's identifier token is neither a quoted literal nor hex.
    #[error("line {line}: invalid identifier literal {token:?}")]
    InvalidIdentifierLiteral {
        /// 1-based line number.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    // ==================== Hashing Errors ====================
    /// A character cannot be represented in Latin-1.
    #[error("character {character:?} at position {position} is not representable in Latin-1")]
    EncodingError {
        /// The offending character.
        character: char,
        /// Character index within the input string.
        position: usize,
    },

    // ==================== Merge Errors ====================
    /// Tried to patch a file with messages for a different language.
    #[error(
        "can't combine messages from localization files for different languages ({base:X}, {patch:X}); \
         for language-independent patching, clear the patch file's language ID first"
    )]
    LanguageMismatch {
        /// Language ID of the file being patched.
        base: u32,
        /// Language ID of the patch.
        patch: u32,
    },

    // ==================== Resource Errors ====================
    /// The plaintext word list could not be found.
    #[error("plaintext word list not found: {path}")]
    MissingResource {
        /// The path that was tried.
        path: PathBuf,
    },

    // ==================== File Type / Container Errors ====================
    /// The file type could not be determined from its contents.
    #[error("couldn't determine the file type of {0}")]
    UnknownFileType(PathBuf),

    /// The output file extension is not one the converter can write.
    #[error("unsupported output file extension: {0:?}")]
    UnsupportedOutputFormat(String),

    /// A `.dict` or `.data` file that must already exist is missing.
    #[error("container file must already exist: {0}")]
    ContainerFileMissing(PathBuf),

    /// The `.dict` file is too short to hold the size fields.
    #[error("dict file too small: {size} bytes (need at least {needed})")]
    DictTooSmall {
        /// The actual file size.
        size: usize,
        /// The minimum size required.
        needed: usize,
    },

    // ==================== Config Errors ====================
    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

/// A specialized Result type for `NlgLoc` operations.
pub type Result<T> = std::result::Result<T, Error>;
