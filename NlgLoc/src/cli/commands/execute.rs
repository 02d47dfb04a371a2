//! Command execution implementations

use super::Commands;
use super::{convert, hash, loc};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                input,
                output,
                patches,
                output_endian,
                sort,
                quiet,
            } => convert::execute(
                input,
                output.as_deref(),
                patches,
                *output_endian,
                *sort,
                *quiet,
            ),
            Commands::Hash {
                text,
                seed,
                max_length,
                case_sensitive,
            } => hash::execute(text, *seed, *max_length, *case_sensitive),
            Commands::Lookup { id } => hash::lookup(*id),
            Commands::List { path, limit } => loc::list(path, *limit),
            Commands::Get { path, key } => loc::get(path, key),
        }
    }
}
