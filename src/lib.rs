//! # codepack
//!
//! `codepack` walks a project directory and concatenates the contents of its
//! text files into a single snapshot file. Each packed file is preceded by a
//! delimited `File: <path>` header.
//!
//! Three fixed exclusion sets decide what is packed: directory names whose
//! subtrees are pruned before descent, file base-names, and extensions. A
//! file that cannot be read or is not valid UTF-8 is skipped silently.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use codepack::{PackBuilder, pack};
//!
//! let options = PackBuilder::new(".")
//!     .exclude_dir("vendor")
//!     .build();
//!
//! let summary = pack(&options).expect("Failed to pack directory");
//! println!("{} files saved to {}", summary.included, summary.output.display());
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{Progress, Scan, pack, pack_into, pack_with_progress};
pub use error::PackError;
pub use filter::{Exclusions, extension_of};
pub use options::{BinaryDetection, DEFAULT_OUTPUT_FILE, PackBuilder, PackOptions};
pub use types::{FileOutcome, PackSummary, ScannedFile, SkipReason};
