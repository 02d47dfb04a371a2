//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! NLOC ↔ NLOCT conversion
//!
//! Reads a localization file of any supported type, applies patch files on
//! top of it, and writes the result in the format picked by the destination
//! extension:
//! - `.loc` - binary NLOC
//! - `.loct` - NLOCT text
//! - `.dict` - injected into an existing `.dict`/`.data` pair

mod types;

pub use types::{
    ConvertOptions, ConvertPhase, ConvertProgress, ConvertProgressCallback, OutputFormat,
};

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::formats::{Endian, LocalizationFile, dict, nloc, nloct, read_localization_file};
use crate::hash::PlaintextRegistry;

/// Output path used when none is given
///
/// `.loct` input becomes `.loc`; anything else becomes `.loct`.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let is_text = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("loct"));

    if is_text {
        input.with_extension("loc")
    } else {
        input.with_extension("loct")
    }
}

/// Convert a localization file
///
/// # Errors
/// Returns an error if reading, patching or writing fails.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    options: &ConvertOptions,
    registry: &PlaintextRegistry,
) -> Result<()> {
    convert_with_progress(source, dest, options, registry, &|_| {})
}

/// Convert a localization file with progress callback
///
/// # Errors
/// Returns [`Error::UnsupportedOutputFormat`] if the destination extension
/// isn't `.loc`, `.loct` or `.dict`, [`Error::LanguageMismatch`] if a patch
/// is for another language, or any read/write error.
pub fn convert_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    options: &ConvertOptions,
    registry: &PlaintextRegistry,
    progress: ConvertProgressCallback,
) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    // Fail on a bad destination before doing any work
    let format = output_format(dest)?;

    tracing::info!("Converting {} → {}", source.display(), dest.display());

    let total = 2 + options.patches.len() + usize::from(options.sort_by_id);
    let mut step = 1;

    progress(&ConvertProgress::with_file(
        ConvertPhase::ReadingSource,
        step,
        total,
        file_label(source),
    ));
    let mut file = read_localization_file(source)?;

    for patch_path in &options.patches {
        step += 1;
        progress(&ConvertProgress::with_file(
            ConvertPhase::Patching,
            step,
            total,
            file_label(patch_path),
        ));
        let patch = read_localization_file(patch_path)?;
        let stats = file.update(&patch)?;
        tracing::info!(
            "Applied {}: {} updated, {} added",
            patch_path.display(),
            stats.updated,
            stats.added
        );
    }

    if options.sort_by_id {
        step += 1;
        progress(&ConvertProgress::new(ConvertPhase::Sorting, step, total));
        file.sort_by_id();
    }

    step += 1;
    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        step,
        total,
        file_label(dest),
    ));
    write_localization_file(dest, &file, format, options.output_endian, registry)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, total, total));
    tracing::info!("Conversion complete ({} messages)", file.len());
    Ok(())
}

/// Write a localization file in the given format
///
/// For [`OutputFormat::Dict`], `dest` is the `.dict` file; both it and its
/// `.data` sibling must already exist.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn write_localization_file(
    dest: &Path,
    file: &LocalizationFile,
    format: OutputFormat,
    endian: Endian,
    registry: &PlaintextRegistry,
) -> Result<()> {
    match format {
        OutputFormat::Nloc => nloc::write_nloc(dest, file, endian),
        OutputFormat::Nloct => nloct::write_nloct(dest, file, registry),
        OutputFormat::Dict => {
            let data = nloc::to_nloc_bytes(file, endian)?;
            dict::inject_into_dict_pair(&data, dest, &dict::data_path_for(dest))
        }
    }
}

/// Pick the output format from the destination's extension
fn output_format(dest: &Path) -> Result<OutputFormat> {
    let ext = dest
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    OutputFormat::from_extension(ext).ok_or_else(|| Error::UnsupportedOutputFormat(ext.to_string()))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
