//! CLI commands for reading localization files

use std::path::Path;

use crate::config::Config;
use crate::formats::nloct::{LANGID_PREFIX, SEPARATOR};
use crate::formats::read_localization_file;
use crate::utils::{parse_id_token, render_id};

/// List messages in NLOCT form
pub fn list(path: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let file = read_localization_file(path)?;
    let registry = Config::load()?.plaintext_registry();

    if let Some(lang_id) = file.lang_id {
        println!("{LANGID_PREFIX} {}", render_id(lang_id, &registry));
    }

    let limit = limit.unwrap_or(usize::MAX);
    for message in file.iter().take(limit) {
        println!("{}{SEPARATOR}{}", render_id(message.id, &registry), message.text);
    }

    if file.len() > limit {
        println!("... {} more", file.len() - limit);
    }

    Ok(())
}

/// Print the text of one message
///
/// `key` is a quoted plaintext or a hex ID, as in NLOCT files.
pub fn get(path: &Path, key: &str) -> anyhow::Result<()> {
    let (id, _) = parse_id_token(key.trim(), 1)?;
    let file = read_localization_file(path)?;

    match file.text(id) {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => anyhow::bail!("No message with ID {key} in {}", path.display()),
    }
}
