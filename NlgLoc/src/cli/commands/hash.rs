//! CLI commands for hash IDs

use crate::config::Config;
use crate::hash::{HashOptions, encode_latin1, hash_with};
use crate::utils::display_id;

/// Print the hash of `text`
pub fn execute(
    text: &str,
    seed: Option<u32>,
    max_length: Option<usize>,
    case_sensitive: bool,
) -> anyhow::Result<()> {
    let bytes = encode_latin1(text)?;

    let mut options = HashOptions::default();
    if let Some(seed) = seed {
        options = options.with_seed(seed);
    }
    if let Some(max_length) = max_length {
        options = options.with_max_length(max_length);
    }
    if case_sensitive {
        options = options.case_sensitive();
    }

    println!("{}", display_id(hash_with(&bytes, &options)));
    Ok(())
}

/// Print the known plaintext of `id`
pub fn lookup(id: u32) -> anyhow::Result<()> {
    let registry = Config::load()?.plaintext_registry();

    match registry.lookup(id) {
        Some(plaintext) => {
            println!("{plaintext}");
            Ok(())
        }
        None => anyhow::bail!("No known plaintext for {}", display_id(id)),
    }
}
