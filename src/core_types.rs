//! Defines core data structures used throughout the application pipeline.
//!
//! These types, `FileRecord` and `ReadOutcome`, are central to how files are
//! collected and rendered into the aggregated output.

use std::path::PathBuf;

/// The result of attempting to read one qualifying file.
///
/// A read failure is data, not an error: the collector captures it here and
/// the rendering stage pattern-matches to choose between emitting the real
/// content and emitting an inline placeholder. This keeps a single unreadable
/// file from ever aborting a traversal.
///
/// # Examples
///
/// ```
/// use collect_code::core_types::ReadOutcome;
///
/// let ok = ReadOutcome::Content("print('hi')".to_string());
/// let bad = ReadOutcome::Unreadable("permission denied".to_string());
/// assert!(matches!(ok, ReadOutcome::Content(_)));
/// assert!(matches!(bad, ReadOutcome::Unreadable(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The file was read successfully as UTF-8 text.
    Content(String),
    /// The file could not be read (permission, decoding, or I/O failure).
    /// Holds the error description for the placeholder.
    Unreadable(String),
}

/// One file that qualified during a traversal, in visitation order.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// The full path to the file on the filesystem, derived from the
    /// traversal root.
    pub absolute_path: PathBuf,
    /// The path relative to the traversal root. This is what appears in the
    /// record header, prefixed by the root's own name.
    pub relative_path: PathBuf,
    /// The file's content, or the captured read failure.
    pub content: ReadOutcome,
}
