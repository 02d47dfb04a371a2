//! Types for conversion options and progress tracking

use std::path::PathBuf;

use crate::formats::Endian;

// ============================================================================
// Options
// ============================================================================

/// Options for [`convert`](super::convert)
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Files applied on top of the input, in order
    pub patches: Vec<PathBuf>,
    /// Byte order for `.loc` and `.dict` output
    pub output_endian: Endian,
    /// Sort messages by ID before writing
    pub sort_by_id: bool,
}

impl ConvertOptions {
    /// Add a patch file
    #[must_use]
    pub fn with_patch(mut self, patch: impl Into<PathBuf>) -> Self {
        self.patches.push(patch.into());
        self
    }

    /// Set the output byte order
    #[must_use]
    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.output_endian = endian;
        self
    }

    /// Sort messages by ID before writing
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.sort_by_id = true;
        self
    }
}

/// Output format, chosen by destination extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `.loc`
    Nloc,
    /// `.loct`
    Nloct,
    /// `.dict` (with its `.data` sibling)
    Dict,
}

impl OutputFormat {
    /// Pick the output format from a file extension (case-insensitive)
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "loc" => Some(Self::Nloc),
            "loct" => Some(Self::Nloct),
            "dict" => Some(Self::Dict),
            _ => None,
        }
    }
}

// ============================================================================
// Progress Types
// ============================================================================

/// Progress callback type for conversion operations
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);

/// Progress information during a conversion
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current operation phase
    pub phase: ConvertPhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Current file or message (if applicable)
    pub current_file: Option<String>,
}

impl ConvertProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/item name
    #[must_use]
    pub fn with_file(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }

    /// Get the progress percentage (0.0 - 1.0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f32 / self.total as f32
        }
    }
}

/// Phase of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Reading the input file
    ReadingSource,
    /// Applying a patch file
    Patching,
    /// Sorting messages by ID
    Sorting,
    /// Writing the output file
    WritingOutput,
    /// Operation complete
    Complete,
}

impl ConvertPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingSource => "Reading source",
            Self::Patching => "Applying patch",
            Self::Sorting => "Sorting",
            Self::WritingOutput => "Writing output",
            Self::Complete => "Complete",
        }
    }
}
