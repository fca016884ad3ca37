use crate::error::PackError;
use crate::filter::Exclusions;
use crate::options::{BinaryDetection, PackOptions};
use crate::output::write_record;
use crate::types::{FileOutcome, PackSummary, ScannedFile, SkipReason};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Bytes inspected by the binary detection strategies.
const SNIFF_LEN: usize = 4096;

/// Observer for per-file decisions during a pack run.
pub trait Progress {
    fn included(&mut self, _file: &ScannedFile) {}
    fn skipped(&mut self, _file: &ScannedFile, _reason: &SkipReason) {}
}

impl Progress for () {}

/// Pruned walk that yields the candidate files under a root.
///
/// Within a directory the files come first, then the subdirectories that
/// survive pruning, each group in the order `read_dir` returned it.
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, exclusions: &Exclusions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(|a, b| a.is_dir().cmp(&b.is_dir()));
        let rules = exclusions.clone();
        builder.filter_entry(move |entry| !is_pruned(entry, &rules));
        Self {
            inner: builder.build(),
        }
    }

    /// Next candidate file. Entries that cannot be read are skipped.
    fn next_file(&mut self) -> Option<DirEntry> {
        loop {
            match self.inner.next()? {
                Ok(entry) if is_candidate(&entry) => return Some(entry),
                Ok(_) => continue,
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping unreadable entry: {}", _err);
                    continue;
                }
            }
        }
    }
}

/// Excluded directories are dropped here, before the walker reads them.
fn is_pruned(entry: &DirEntry, rules: &Exclusions) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    is_dir
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| rules.prunes_dir(name))
}

/// Regular files and symlinks resolving to one.
fn is_candidate(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

fn display_path(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) => Path::new(".").join(relative),
        Err(_) => path.to_path_buf(),
    }
}

fn read_text(path: &Path, binary_detection: BinaryDetection) -> FileOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return FileOutcome::Skipped(SkipReason::Unreadable(e.to_string())),
    };
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let is_binary = match binary_detection {
        BinaryDetection::None => false,
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
    };
    if is_binary {
        return FileOutcome::Skipped(SkipReason::Binary);
    }
    match String::from_utf8(bytes) {
        Ok(text) => FileOutcome::Included(text),
        Err(_) => FileOutcome::Skipped(SkipReason::NotUtf8),
    }
}

/// Depth-first walk over the candidate files under a root.
///
/// A directory's files are visited before any of its subdirectories. Each
/// item carries the decision for that file. Unreadable directories are
/// skipped and the walk continues.
pub struct Scan {
    walker: Walker,
    root: PathBuf,
    exclusions: Exclusions,
    binary_detection: BinaryDetection,
}

impl Scan {
    pub fn new(options: &PackOptions) -> Result<Self, PackError> {
        if !options.root.is_dir() {
            return Err(PackError::InvalidRoot(options.root.clone()));
        }
        let exclusions = options.effective_exclusions();
        let walker = Walker::new(&options.root, &exclusions);
        Ok(Self {
            walker,
            root: options.root.clone(),
            exclusions,
            binary_detection: options.binary_detection,
        })
    }
}

impl Iterator for Scan {
    type Item = ScannedFile;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.walker.next_file()?.into_path();
        let display = display_path(&self.root, &path);
        let outcome = {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            match self.exclusions.check_file(&name) {
                Some(reason) => FileOutcome::Skipped(reason),
                None => read_text(&path, self.binary_detection),
            }
        };
        Some(ScannedFile {
            path,
            display,
            outcome,
        })
    }
}

/// Packs `options.root` into the output file.
pub fn pack(options: &PackOptions) -> Result<PackSummary, PackError> {
    pack_with_progress(options, &mut ())
}

/// Like [`pack`], reporting every decision to `progress`.
///
/// A previous output file is deleted before the walk starts. Failing to
/// delete, create or write the output aborts the run.
pub fn pack_with_progress<P: Progress>(
    options: &PackOptions,
    progress: &mut P,
) -> Result<PackSummary, PackError> {
    let scan = Scan::new(options)?;
    let output = options.output_path();
    remove_stale(&output)?;
    let file = File::create(&output).map_err(|e| PackError::io(&output, e))?;
    let mut writer = BufWriter::new(file);
    let summary = write_records(scan, &mut writer, output, progress)?;
    writer
        .flush()
        .map_err(|e| PackError::io(&summary.output, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Packed {} files ({} skipped) into {}",
        summary.included,
        summary.skipped,
        summary.output.display()
    );
    Ok(summary)
}

/// Writes the records for `options.root` into `writer`.
///
/// The output file is not touched, but its name stays excluded. The
/// returned summary names `options.output_path()`.
pub fn pack_into<W: Write, P: Progress>(
    options: &PackOptions,
    mut writer: W,
    progress: &mut P,
) -> Result<PackSummary, PackError> {
    let scan = Scan::new(options)?;
    let summary = write_records(scan, &mut writer, options.output_path(), progress)?;
    writer
        .flush()
        .map_err(|e| PackError::io(&summary.output, e))?;
    Ok(summary)
}

fn remove_stale(path: &Path) -> Result<(), PackError> {
    match fs::remove_file(path) {
        Ok(()) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Removed previous output {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PackError::io(path, e)),
    }
}

fn write_records<W: Write, P: Progress>(
    scan: Scan,
    writer: &mut W,
    output: PathBuf,
    progress: &mut P,
) -> Result<PackSummary, PackError> {
    let mut included = 0;
    let mut skipped = 0;
    for file in scan {
        match &file.outcome {
            FileOutcome::Included(content) => {
                write_record(writer, &file.display, content)
                    .map_err(|e| PackError::io(&output, e))?;
                included += 1;
                progress.included(&file);
            }
            FileOutcome::Skipped(reason) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipped {}: {:?}", file.display.display(), reason);
                skipped += 1;
                progress.skipped(&file, reason);
            }
        }
    }
    Ok(PackSummary {
        output,
        included,
        skipped,
    })
}
