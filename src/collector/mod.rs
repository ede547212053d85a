//! Walks a root directory top-down and captures qualifying files.
//!
//! The collector prunes excluded directories before descending into them,
//! evaluates every remaining file against the layered filter rules, and
//! reads each qualifying file through the injected [`TreeSource`]. A file
//! that cannot be read becomes an [`ReadOutcome::Unreadable`] record instead
//! of an error; nothing a single file does can abort a traversal.

use crate::config::Config;
use crate::core_types::{FileRecord, ReadOutcome};
use log::{debug, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod filter;
pub mod source;

pub use source::{EntryKind, OsSource, TreeEntry, TreeSource};

/// Filter configuration for one traversal.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Fully-resolved file paths excluded regardless of extension rules.
    pub exclude_files: HashSet<PathBuf>,
    /// Bare directory names pruned before descent, at every depth.
    pub exclude_dirs: HashSet<String>,
    /// When `true`, the allow-list is not consulted.
    pub all_files: bool,
    /// Lowercase dot-prefixed extensions accepted outside all-files mode.
    pub include_extensions: HashSet<String>,
    /// Lowercase dot-prefixed extensions rejected unconditionally.
    pub exclude_extensions: HashSet<String>,
}

impl From<&Config> for CollectOptions {
    fn from(config: &Config) -> Self {
        Self {
            exclude_files: config.exclude_files.clone(),
            exclude_dirs: config.exclude_dirs.clone(),
            all_files: config.all_files,
            include_extensions: config.include_extensions.clone(),
            exclude_extensions: config.exclude_extensions.clone(),
        }
    }
}

/// Collects the ordered records for one root directory.
///
/// The caller is responsible for ensuring `root` is an existing directory;
/// an unlistable root simply yields no records (the failure is logged).
/// Within a directory, files are visited before subdirectories, each group
/// in enumeration order.
pub fn collect_records(
    root: &Path,
    options: &CollectOptions,
    source: &dyn TreeSource,
) -> Vec<FileRecord> {
    let mut records = Vec::new();
    walk_dir(root, root, options, source, &mut records);
    records
}

fn walk_dir(
    dir: &Path,
    root: &Path,
    options: &CollectOptions,
    source: &dyn TreeSource,
    records: &mut Vec<FileRecord>,
) {
    let entries = match source.list_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            // A subtree that cannot be listed is skipped, like a file that
            // cannot be read; the rest of the traversal continues.
            warn!("Failed to list directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.iter().filter(|e| e.kind == EntryKind::File) {
        if !filter::passes_extension_filters(&entry.name, options) {
            continue;
        }
        let absolute_path = dir.join(&entry.name);
        if options.exclude_files.contains(&absolute_path) {
            debug!("Skipping excluded file: {}", absolute_path.display());
            continue;
        }
        let relative_path = absolute_path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|err| {
                warn!(
                    "Failed to strip prefix '{}' from '{}': {}. Using full path.",
                    root.display(),
                    absolute_path.display(),
                    err
                );
                absolute_path.clone()
            });
        let content = match source.read_file(&absolute_path) {
            Ok(text) => ReadOutcome::Content(text),
            Err(e) => {
                warn!("Failed to read file {}: {}", absolute_path.display(), e);
                ReadOutcome::Unreadable(e.to_string())
            }
        };
        records.push(FileRecord {
            absolute_path,
            relative_path,
            content,
        });
    }

    for entry in entries.iter().filter(|e| e.kind == EntryKind::Directory) {
        if options.exclude_dirs.contains(entry.name.as_str()) {
            debug!("Pruning excluded directory: {}", dir.join(&entry.name).display());
            continue;
        }
        walk_dir(&dir.join(&entry.name), root, options, source, records);
    }
}
