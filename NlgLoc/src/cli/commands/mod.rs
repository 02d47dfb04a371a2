//! CLI subcommands

use clap::Subcommand;
use std::path::PathBuf;

use crate::formats::Endian;
use crate::utils::parse_hex;

pub mod convert;
pub mod execute;
pub mod hash;
pub mod loc;

/// Parse a hex identifier argument (`1A2B` or `0x1A2B`)
fn parse_hex_arg(s: &str) -> Result<u32, String> {
    parse_hex(s, 0).map_err(|_| format!("Invalid identifier '{s}'. Expected up to 8 hex digits"))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert between NLOC, NLOCT and dict/data files
    Convert {
        /// Input file (.loc, .loct or .dict)
        input: PathBuf,

        /// Output file; the extension picks the format (.loc, .loct, .dict)
        output: Option<PathBuf>,

        /// Apply a patch file on top of the input (repeatable, applied in order)
        #[arg(short, long = "patch")]
        patches: Vec<PathBuf>,

        /// Byte order for binary output (overrides the config file)
        #[arg(short = 'e', long, value_enum)]
        output_endian: Option<Endian>,

        /// Sort messages by ID before writing
        #[arg(short, long)]
        sort: bool,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the hash ID of a string
    Hash {
        /// String to hash (Latin-1 characters only)
        text: String,

        /// Seed to chain from, in hex
        #[arg(long, value_parser = parse_hex_arg)]
        seed: Option<u32>,

        /// Hash at most this many bytes
        #[arg(long)]
        max_length: Option<usize>,

        /// Don't fold A-Z to lowercase
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Look up the known plaintext of a hash ID
    Lookup {
        /// Hash ID in hex
        #[arg(value_parser = parse_hex_arg)]
        id: u32,
    },

    /// List the messages of a localization file
    List {
        /// Localization file (.loc, .loct or .dict)
        path: PathBuf,

        /// Maximum messages to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print a single message
    Get {
        /// Localization file (.loc, .loct or .dict)
        path: PathBuf,

        /// Message ID as a quoted plaintext ("menu_start") or hex
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_arg() {
        assert_eq!(parse_hex_arg("1A2B"), Ok(0x1A2B));
        assert_eq!(parse_hex_arg("0xffffffff"), Ok(0xFFFF_FFFF));
        assert!(parse_hex_arg("xyz").is_err());
        assert!(parse_hex_arg("100000000").is_err());
    }
}
