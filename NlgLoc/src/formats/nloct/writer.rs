//! `.loct` file writing

use super::{LANGID_PREFIX, SEPARATOR};
use crate::error::Result;
use crate::formats::nloc::LocalizationFile;
use crate::hash::PlaintextRegistry;
use crate::utils::id::render_id;
use std::path::Path;

/// Write a .loct file to disk
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_nloct<P: AsRef<Path>>(
    path: P,
    file: &LocalizationFile,
    registry: &PlaintextRegistry,
) -> Result<()> {
    std::fs::write(path, to_nloct_string(file, registry))?;
    Ok(())
}

/// Convert a localization file to NLOCT text
///
/// Identifiers the registry knows are written as quoted plaintext, the rest
/// as hex. Messages keep their file order.
#[must_use]
pub fn to_nloct_string(file: &LocalizationFile, registry: &PlaintextRegistry) -> String {
    let mut output = String::new();

    if let Some(lang_id) = file.lang_id {
        output.push_str(LANGID_PREFIX);
        output.push(' ');
        output.push_str(&render_id(lang_id, registry));
        output.push('\n');
    }

    for message in &file.messages {
        if message.text.contains(['\n', '\r']) {
            tracing::warn!(
                "Message {} contains a line break and won't survive an NLOCT round trip",
                render_id(message.id, registry)
            );
        }
        output.push_str(&render_id(message.id, registry));
        output.push_str(SEPARATOR);
        output.push_str(&message.text);
        output.push('\n');
    }

    output
}
