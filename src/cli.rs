// src/cli.rs

use clap::Parser;

/// Collects code from multiple directories into a single annotated text file.
///
/// collect-code walks each given directory top-down, skips excluded
/// directories and files, gathers the content of every file that passes the
/// language filters, and writes everything to one output file with a
/// `[<dir>/<relative-path>]` header above each file. The output is intended
/// to be fed to tools that accept a single flat text blob, such as Large
/// Language Models (LLMs) or review systems.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// One or more directory paths to collect code from (space-separated).
    #[arg(required = true, value_name = "DIR", num_args = 1..)]
    pub folders: Vec<String>,

    // --- Filtering Options ---
    /// Additional directory names to exclude at any depth
    /// (beyond default: .git, .idea, .venv, venv, __pycache__, .env).
    #[arg(long = "exclude", value_name = "NAME", num_args = 1..)]
    pub exclude: Vec<String>,

    /// Exclude these specific files from collection (repeatable).
    #[arg(long = "exclude-file", value_name = "PATH", num_args = 1..)]
    pub exclude_files: Vec<String>,

    /// Include all files (not just those matching the language allow-list).
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub all_files: bool,

    /// Comma-separated extensions to collect when --all-files is off
    /// (default: py,java,c,cpp,h,hpp). Leading dots are optional.
    #[arg(long = "langs", value_name = "LIST")]
    pub langs: Option<String>,

    /// Comma-separated extensions to exclude unconditionally, overriding both
    /// the allow-list and --all-files. Leading dots are optional.
    #[arg(long = "exclude-langs", value_name = "LIST")]
    pub exclude_langs: Option<String>,

    // --- Output Destination ---
    /// Write output to the specified file instead of collected_code.txt.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>, // Using String, convert to PathBuf later
}
