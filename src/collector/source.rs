//! Abstraction over filesystem enumeration and file reading.
//!
//! The `TreeSource` trait is the collector's only window onto the
//! filesystem: list one directory, read one file. This keeps the walk and
//! filter logic unit-testable against an in-memory tree, with injected
//! failures, and without touching the disk.

use std::fs;
use std::io;
use std::path::Path;

/// Whether a directory entry is a file or a subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// The bare entry name (no path components).
    pub name: String,
    pub kind: EntryKind,
}

/// Filesystem enumeration capability consumed by the collector.
pub trait TreeSource {
    /// Lists the entries of one directory, sorted by name.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<TreeEntry>>;

    /// Reads the entire content of a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSource;

impl TreeSource for OsSource {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    log::warn!("Skipping entry with non-UTF-8 name: {:?}", raw);
                    continue;
                }
            };
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => {
                    log::warn!("Skipping entry '{}': {}", entry.path().display(), e);
                    continue;
                }
            };
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                // Symlinks are classified by their target; dangling ones and
                // special files are skipped.
                match fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_dir() => EntryKind::Directory,
                    Ok(meta) if meta.is_file() => EntryKind::File,
                    _ => continue,
                }
            };
            entries.push(TreeEntry { name, kind });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
