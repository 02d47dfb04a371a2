//! Next Level Games string hashing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Message and language identifiers in NLOC files are 32-bit hashes of
//! source strings. The in-game routines are all variations of one base-33
//! rolling hash, covered here by [`hash_with`] and [`HashOptions`]:
//!
//! | Game routine      | Equivalent                                     |
//! |-------------------|------------------------------------------------|
//! | `hash(data)`      | `HashOptions::default()`                       |
//! | `hash(seed, data)`| `HashOptions::default().with_seed(seed)`       |
//! | `hash(data, len)` | `HashOptions::default().with_max_length(len)`  |
//!
//! The seed doubles as the hash of everything before `data`, so hashes
//! chain: hashing `a` and then `b` seeded with the result equals hashing
//! `a + b`, as long as `a` has no NUL byte.

mod plaintext;

pub use plaintext::{PLAINTEXT_FILE_NAME, PlaintextRegistry};

use crate::error::{Error, Result};

/// Seed used by every in-game hash call that doesn't chain
pub const DEFAULT_SEED: u32 = 0xFFFF_FFFF;

/// Multiplier of the rolling hash
const MULTIPLIER: u32 = 33;

/// Parameters for [`hash_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    /// Initial hash value (or the hash of preceding data)
    pub seed: u32,
    /// Stop after this many bytes
    pub max_length: Option<usize>,
    /// Fold ASCII uppercase letters to lowercase
    pub case_insensitive: bool,
    /// Stop at the first NUL byte
    pub stop_at_null: bool,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_length: None,
            case_insensitive: true,
            stop_at_null: true,
        }
    }
}

impl HashOptions {
    /// Continue hashing from `seed`
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Ignore everything after the first `max_length` bytes
    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Hash bytes as-is instead of folding ASCII case
    #[must_use]
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive = false;
        self
    }

    /// Keep hashing past NUL bytes
    ///
    /// No known game routine does this.
    #[must_use]
    pub fn through_null(mut self) -> Self {
        self.stop_at_null = false;
        self
    }
}

/// Hash `data` with the default parameters
#[must_use]
pub fn hash(data: &[u8]) -> u32 {
    hash_with(data, &HashOptions::default())
}

/// Hash `data` with explicit parameters
///
/// Case folding only sets bit `0x20` on `A`-`Z`; bytes `0x80` and above are
/// hashed unchanged. Leading spaces on ASCII input happen to cancel out
/// against the default seed (`0xFFFFFFFF * 33 + 0x20` wraps back to
/// `0xFFFFFFFF`); that is how the game behaves and is kept.
#[must_use]
pub fn hash_with(data: &[u8], options: &HashOptions) -> u32 {
    let mut h = options.seed;

    for (i, &byte) in data.iter().enumerate() {
        if options.stop_at_null && byte == 0 {
            break;
        }
        if options.max_length.is_some_and(|max| i >= max) {
            break;
        }

        let c = if options.case_insensitive && byte.is_ascii_uppercase() {
            byte | 0x20
        } else {
            byte
        };

        h = h.wrapping_mul(MULTIPLIER).wrapping_add(u32::from(c));
    }

    h
}

/// Hash a string with the default parameters, Latin-1 encoded
///
/// # Errors
/// Returns [`Error::EncodingError`] if `s` has a character above U+00FF.
pub fn hash_str(s: &str) -> Result<u32> {
    Ok(hash(&encode_latin1(s)?))
}

/// Encode a string as Latin-1, one byte per character
///
/// # Errors
/// Returns [`Error::EncodingError`] for the first character above U+00FF.
pub fn encode_latin1(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character)).map_err(|_| Error::EncodingError {
                character,
                position,
            })
        })
        .collect()
}
