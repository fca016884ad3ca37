//! Exclusion rules applied during the walk.
//!
//! Three independent literal sets decide what gets packed: directory names
//! that prune a whole subtree, file base-names, and file extensions. All
//! matching is exact and case-sensitive.

use crate::types::SkipReason;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Directories never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "__pycache__",
    ".next",
    "coverage",
    "venv",
    ".venv",
    "env",
    ".idea",
    ".vscode",
    "target",
];

/// File base-names skipped wherever they appear.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &[
    "packer.py",
    "pack.js",
    "mapper.js",
    "comments.js",
    "project_structure.json",
    "_PROJETO_COMPLETO.txt",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
];

/// Extensions (dot included) skipped regardless of the file name.
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".svg", ".ico", ".log", ".lock", ".exe", ".dll", ".so", ".pyc",
];

/// The three exclusion sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    pub dirs: BTreeSet<String>,
    pub files: BTreeSet<String>,
    pub extensions: BTreeSet<String>,
}

impl Default for Exclusions {
    fn default() -> Self {
        Self {
            dirs: to_set(DEFAULT_EXCLUDED_DIRS),
            files: to_set(DEFAULT_EXCLUDED_FILES),
            extensions: to_set(DEFAULT_EXCLUDED_EXTENSIONS),
        }
    }
}

impl Exclusions {
    /// An empty rule set that keeps everything.
    pub fn none() -> Self {
        Self {
            dirs: BTreeSet::new(),
            files: BTreeSet::new(),
            extensions: BTreeSet::new(),
        }
    }

    /// Whether a directory with this base name is pruned.
    pub fn prunes_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Checks a file base-name against the name set, then the extension set.
    ///
    /// Returns `None` when the file should be read.
    pub fn check_file(&self, name: &str) -> Option<SkipReason> {
        if self.files.contains(name) {
            return Some(SkipReason::ExcludedName);
        }
        if self.extensions.contains(extension_of(name)) {
            return Some(SkipReason::ExcludedExtension);
        }
        None
    }
}

/// Returns the extension of a base name: the text from the last `.` to the
/// end, dot included.
///
/// Leading dots belong to the name, so `.gitignore` has no extension.
/// Names without a dot yield the empty string.
pub fn extension_of(name: &str) -> &str {
    let start = name.len() - name.trim_start_matches('.').len();
    match name[start..].rfind('.') {
        Some(idx) => &name[start + idx..],
        None => "",
    }
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
