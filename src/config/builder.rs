use super::{parsing::parse_extension_list, Config};
use crate::cli::Cli;
use crate::constants::{DEFAULT_EXCLUDE_DIRS, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT_FILENAME};
use crate::errors::AppError;
use anyhow::Result;
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Builds a [`Config`] from CLI arguments or programmatically.
///
/// The builder merges the default directory exclusions and the default
/// extension allow-list with whatever the caller supplies, normalizes the
/// extension lists, and resolves the file-exclusion set and the output path
/// to absolute form so they compare by identity against paths produced
/// during traversal.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    folders: Vec<String>,
    exclude_dirs: Vec<String>,
    exclude_files: Vec<PathBuf>,
    all_files: bool,
    langs: Option<String>,
    exclude_langs: Option<String>,
    output: Option<PathBuf>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed CLI arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            folders: cli.folders,
            exclude_dirs: cli.exclude,
            exclude_files: cli.exclude_files.into_iter().map(PathBuf::from).collect(),
            all_files: cli.all_files,
            langs: cli.langs,
            exclude_langs: cli.exclude_langs,
            output: cli.output.map(PathBuf::from),
        }
    }

    /// Adds a root directory to collect from.
    pub fn folder(mut self, path: &str) -> Self {
        self.folders.push(path.to_string());
        self
    }

    /// Adds a directory name to exclude, on top of the defaults.
    pub fn exclude_dir(mut self, name: &str) -> Self {
        self.exclude_dirs.push(name.to_string());
        self
    }

    /// Adds a specific file to exclude from collection.
    pub fn exclude_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.exclude_files.push(path.into());
        self
    }

    /// Enables or disables all-files mode.
    pub fn all_files(mut self, all_files: bool) -> Self {
        self.all_files = all_files;
        self
    }

    /// Overrides the extension allow-list with a comma-separated list.
    pub fn langs(mut self, list: &str) -> Self {
        self.langs = Some(list.to_string());
        self
    }

    /// Sets the extension deny-list from a comma-separated list.
    pub fn exclude_langs(mut self, list: &str) -> Self {
        self.exclude_langs = Some(list.to_string());
        self
    }

    /// Overrides the output destination.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Validates and assembles the final [`Config`].
    pub fn build(self) -> Result<Config> {
        if self.folders.is_empty() {
            return Err(
                AppError::ConfigError("at least one root directory is required".to_string()).into(),
            );
        }

        let mut exclude_dirs: HashSet<String> = DEFAULT_EXCLUDE_DIRS
            .iter()
            .map(|name| name.to_string())
            .collect();
        exclude_dirs.extend(self.exclude_dirs);

        let include_extensions = match &self.langs {
            Some(list) => parse_extension_list(list),
            None => DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        };
        let exclude_extensions = self
            .exclude_langs
            .as_deref()
            .map(parse_extension_list)
            .unwrap_or_default();

        let output_path = absolutize(
            &self
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME)),
        );

        let mut exclude_files: HashSet<PathBuf> = self
            .exclude_files
            .iter()
            .map(|path| resolve_exclusion(path))
            .collect();
        // The tool never collects itself or its own output.
        if let Ok(exe) = env::current_exe() {
            let resolved = exe.canonicalize().unwrap_or(exe);
            exclude_files.insert(resolved);
        }
        exclude_files.insert(output_path.clone());

        Ok(Config {
            roots: self.folders,
            exclude_dirs,
            exclude_files,
            all_files: self.all_files,
            include_extensions,
            exclude_extensions,
            output_path,
        })
    }
}

/// Resolves a file-exclusion entry to the same absolute form the traversal
/// produces. Canonicalization is preferred; a path that does not exist yet is
/// anchored to the current directory instead.
fn resolve_exclusion(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| absolutize(path))
}

/// Makes a path absolute against the current directory and canonicalizes its
/// parent when possible, without requiring the file itself to exist.
fn absolutize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
        if let Ok(resolved_parent) = parent.canonicalize() {
            return resolved_parent.join(name);
        }
    }
    absolute
}
