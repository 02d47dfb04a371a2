//! CLI interface for format conversion

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::progress::{print_convert_step, print_done};
use crate::config::Config;
use crate::converter::{self, ConvertOptions};
use crate::formats::Endian;

pub fn execute(
    input: &Path,
    output: Option<&Path>,
    patches: &[PathBuf],
    output_endian: Option<Endian>,
    sort: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let registry = config.plaintext_registry();

    let destination = output.map_or_else(|| converter::default_output_path(input), Path::to_path_buf);
    if destination == input {
        anyhow::bail!(
            "Output would overwrite the input file {}. Pass an explicit output path.",
            input.display()
        );
    }

    let options = ConvertOptions {
        patches: patches.to_vec(),
        output_endian: output_endian.unwrap_or(config.output_endian),
        sort_by_id: sort || config.sort_by_id,
    };

    if quiet {
        converter::convert(input, &destination, &options, &registry)?;
    } else {
        let started = Instant::now();
        converter::convert_with_progress(
            input,
            &destination,
            &options,
            &registry,
            &print_convert_step,
        )?;
        print_done(started.elapsed());
        println!("Wrote {}", destination.display());
    }

    Ok(())
}
