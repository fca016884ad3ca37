//! Command-line entry point for codepack.
//!
//! Packs the current working directory into `full_project_code.txt` using the
//! compiled-in exclusion sets. There are no options besides `--help` and
//! `--version`.

use clap::Parser;
use codepack::{PackOptions, Progress, ScannedFile, pack_with_progress};
use std::process::exit;

/// codepack: pack a project's text files into one snapshot file
#[derive(Parser)]
#[command(name = "codepack", version, about, long_about = None)]
struct Cli {}

/// Prints one line per packed file.
struct StdoutProgress;

impl Progress for StdoutProgress {
    fn included(&mut self, file: &ScannedFile) {
        println!("Added: {}", file.display.display());
    }
}

#[cfg(feature = "logging")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", e);
    }
}

fn main() {
    let _cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_tracing();

    let options = PackOptions::default();
    match pack_with_progress(&options, &mut StdoutProgress) {
        Ok(summary) => {
            println!(
                "\n--- Done! {} files saved to {} ---",
                summary.included,
                options.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
