//! CLI progress display utilities
//!
//! Yarnish-style step output: `[2/4] ⚙️  Applying patch fr.loct`.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

use crate::converter::{ConvertPhase, ConvertProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Gear - for processing/conversion operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

// =============================================================================
// Step-Based Progress
// =============================================================================

/// Print a step indicator: `[1/3] 🔍 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji<'_, '_>, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print a conversion progress update as a step
///
/// The final [`ConvertPhase::Complete`] update prints nothing; callers
/// finish with [`print_done`].
pub fn print_convert_step(progress: &ConvertProgress) {
    let emoji = match progress.phase {
        ConvertPhase::ReadingSource => LOOKING_GLASS,
        ConvertPhase::Patching | ConvertPhase::Sorting => GEAR,
        ConvertPhase::WritingOutput => DISK,
        ConvertPhase::Complete => return,
    };

    let msg = match &progress.current_file {
        Some(file) => format!("{} {file}", progress.phase.as_str()),
        None => format!("{}...", progress.phase.as_str()),
    };
    print_step(progress.current, progress.total, emoji, &msg);
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}
