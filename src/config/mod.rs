//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and normalized from the
//! CLI, making them available to the rest of the application in a structured
//! and type-safe manner.

use std::collections::HashSet;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod parsing;

/// Validated configuration for one collection run.
///
/// This struct holds all the settings parsed and normalized from the CLI,
/// ready to be used by the core logic (collection and output).
#[derive(Debug, Clone)]
pub struct Config {
    /// The root directories to collect from, in the order supplied. Kept as
    /// the original strings; each is resolved and validated when the run
    /// processes it, so one bad root never aborts the others.
    pub roots: Vec<String>,
    /// Bare directory names pruned at every level of every traversal.
    /// Contains the defaults merged with any user-supplied names.
    pub exclude_dirs: HashSet<String>,
    /// Fully-resolved file paths excluded regardless of extension rules.
    /// Always contains the running executable and the output destination.
    pub exclude_files: HashSet<PathBuf>,
    /// When `true`, every file not otherwise excluded is included regardless
    /// of the allow-list.
    pub all_files: bool,
    /// Lowercase dot-prefixed extensions collected when `all_files` is off.
    pub include_extensions: HashSet<String>,
    /// Lowercase dot-prefixed extensions excluded unconditionally. Takes
    /// precedence over `include_extensions` and `all_files`.
    pub exclude_extensions: HashSet<String>,
    /// Absolute path of the aggregated output file.
    pub output_path: PathBuf,
}
