// src/constants.rs

/// Directory names pruned from every traversal unless overridden.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", ".idea", ".venv", "venv", "__pycache__", ".env"];

/// Extension allow-list applied when all-files mode is off.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".py", ".java", ".c", ".cpp", ".h", ".hpp"];

/// Name of the aggregated output file, created in the current working directory.
pub const DEFAULT_OUTPUT_FILENAME: &str = "collected_code.txt";
