use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Why a file produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The base name is in the file-name exclusion set.
    ExcludedName,
    /// The extension is in the extension exclusion set.
    ExcludedExtension,
    /// Opening or reading the file failed.
    Unreadable(String),
    /// The content is not valid UTF-8.
    NotUtf8,
    /// The configured binary detection flagged the content.
    Binary,
}

/// Result of evaluating a single candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file is packed with this content.
    Included(String),
    Skipped(SkipReason),
}

/// A file met during the walk.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Path used to open the file.
    pub path: PathBuf,
    /// Root-relative path written in the record header, e.g. `./src/main.rs`.
    pub display: PathBuf,
    pub outcome: FileOutcome,
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackSummary {
    /// Where the records were written.
    pub output: PathBuf,
    /// Number of records written.
    pub included: usize,
    /// Number of candidate files that produced no record.
    pub skipped: usize,
}
