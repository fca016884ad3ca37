use crate::filter::Exclusions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the snapshot file written at the root.
pub const DEFAULT_OUTPUT_FILE: &str = "full_project_code.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// UTF-8 validation only.
    None,
    /// Also reject content with a NUL byte in the first 4 KiB.
    Simple,
    /// Also reject content `content_inspector` classifies as binary.
    Accurate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackOptions {
    pub root: PathBuf,
    /// Output file. Relative paths are resolved against `root`.
    pub output: PathBuf,
    pub exclusions: Exclusions,
    pub binary_detection: BinaryDetection,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            exclusions: Exclusions::default(),
            binary_detection: BinaryDetection::None,
        }
    }
}

impl PackOptions {
    /// The output location with `root` applied.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output)
    }

    /// The configured exclusions plus the output file's own name.
    pub fn effective_exclusions(&self) -> Exclusions {
        let mut exclusions = self.exclusions.clone();
        if let Some(name) = self.output.file_name().and_then(|n| n.to_str()) {
            exclusions.files.insert(name.to_string());
        }
        exclusions
    }
}

#[derive(Debug, Default)]
pub struct PackBuilder {
    options: PackOptions,
}

impl PackBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: PackOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.options.output = path.as_ref().to_path_buf();
        self
    }
    pub fn exclusions(mut self, exclusions: Exclusions) -> Self {
        self.options.exclusions = exclusions;
        self
    }
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.options.exclusions.dirs.insert(name.into());
        self
    }
    pub fn exclude_file(mut self, name: impl Into<String>) -> Self {
        self.options.exclusions.files.insert(name.into());
        self
    }
    pub fn exclude_extension(mut self, ext: impl Into<String>) -> Self {
        self.options.exclusions.extensions.insert(ext.into());
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> PackOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_name_is_always_excluded() {
        let options = PackBuilder::new("/project")
            .exclusions(Exclusions::none())
            .output("snapshot.txt")
            .build();
        let rules = options.effective_exclusions();
        assert!(rules.files.contains("snapshot.txt"));
        assert_eq!(rules.files.len(), 1);
    }

    #[test]
    fn relative_output_is_under_root() {
        let options = PackBuilder::new("/project").build();
        assert_eq!(
            options.output_path(),
            Path::new("/project").join(DEFAULT_OUTPUT_FILE)
        );
    }

    #[test]
    fn absolute_output_is_kept() {
        let options = PackBuilder::new("/project").output("/tmp/out.txt").build();
        assert_eq!(options.output_path(), PathBuf::from("/tmp/out.txt"));
    }
}
