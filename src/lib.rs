//! `collect-code` is a library and command-line tool that aggregates the
//! textual content of files under one or more directories into a single
//! annotated output file.
//!
//! Each collected file appears as a record with a `[<root>/<relative-path>]`
//! header followed by its content, making the result easy to feed to tools
//! that accept one flat text blob, such as Large Language Models (LLMs) or
//! review systems.
//!
//! The pipeline has two stages per root:
//! 1. **Collect**: walk the directory tree top-down, pruning excluded
//!    directories before descent and applying the layered extension and
//!    file-exclusion rules. Each qualifying file is read; a read failure is
//!    captured as data rather than an error.
//! 2. **Render**: format the collected records, substituting an inline
//!    placeholder for files that could not be read.
//!
//! The orchestrating [`run`] function concatenates the per-root text in the
//! order the roots were supplied and writes it to the output file.
//!
//! # Example: Library Usage
//!
//! ```
//! use collect_code::{collect, collector::{CollectOptions, OsSource}};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a directory with some files.
//! let temp = tempdir().unwrap();
//! fs::write(temp.path().join("main.py"), "print('hi')").unwrap();
//! fs::write(temp.path().join("notes.txt"), "skip me").unwrap();
//!
//! // 2. Configure the filters.
//! let options = CollectOptions {
//!     include_extensions: [".py".to_string()].into_iter().collect(),
//!     ..Default::default()
//! };
//!
//! // 3. Collect one root into its aggregated text.
//! let text = collect(temp.path(), &options, &OsSource);
//! assert!(text.contains("/main.py]\nprint('hi')\n"));
//! assert!(!text.contains("notes.txt"));
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod output;

// Re-export key public types for easier use as a library
pub use collector::{CollectOptions, OsSource, TreeSource};
pub use config::{Config, ConfigBuilder};
pub use core_types::{FileRecord, ReadOutcome};

use anyhow::Result;
use log::{debug, error, info};
use std::fs;
use std::path::Path;

/// Collects one root directory into its aggregated text.
///
/// This composes the two pipeline stages: gather the ordered records via
/// [`collector::collect_records`], then render them with the root's own name
/// as the header prefix. Relative paths are computed against this root only,
/// so the same relative path under two different roots stays distinguishable
/// by its prefix.
///
/// The caller is responsible for validating that `root` is an existing
/// directory. The returned text is empty when nothing qualifies.
pub fn collect(root: &Path, options: &CollectOptions, source: &dyn TreeSource) -> String {
    let records = collector::collect_records(root, options, source);
    let root_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    output::render_records(&root_name, &records)
}

/// Executes a complete run: collect every root, concatenate, write.
///
/// Roots are processed in the order supplied. A root that cannot be resolved
/// to an existing directory is reported and skipped without affecting the
/// others. The only failure that propagates out of this function is the
/// final output write, which is fatal to the run.
pub fn run(config: &Config) -> Result<()> {
    let options = CollectOptions::from(config);
    let source = OsSource;

    info!(
        "Starting code collection from {} directories...",
        config.roots.len()
    );
    debug!("Excluded directories: {:?}", config.exclude_dirs);
    debug!("Excluded files: {:?}", config.exclude_files);
    debug!("Collecting all files: {}", config.all_files);

    let mut aggregated = String::new();
    for folder in &config.roots {
        let root = match fs::canonicalize(folder) {
            Ok(path) if path.is_dir() => path,
            Ok(path) => {
                error!("{} is not a directory, skipping.", path.display());
                continue;
            }
            Err(e) => {
                error!("{} is not a directory ({}), skipping.", folder, e);
                continue;
            }
        };
        info!("Processing directory: {}", root.display());
        aggregated.push_str(&collect(&root, &options, &source));
    }

    output::writer::write_output(&config.output_path, &aggregated)?;
    info!(
        "Successfully created output file: {}",
        config.output_path.display()
    );
    Ok(())
}
