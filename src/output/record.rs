// src/output/record.rs

//! Renders one collected file into its output record.

use crate::core_types::{FileRecord, ReadOutcome};
use std::path::Path;

/// Appends one record to the output buffer: a `[<root>/<relative-path>]`
/// header line, then the file's content or the read-failure placeholder,
/// then a blank-line separator.
pub fn render_record(out: &mut String, root_name: &str, record: &FileRecord) {
    out.push_str(&format!(
        "[{}/{}]\n",
        root_name,
        display_path(&record.relative_path)
    ));
    match &record.content {
        ReadOutcome::Content(text) => out.push_str(text),
        ReadOutcome::Unreadable(description) => {
            out.push_str(&format!("<<Error reading file: {}>>", description));
        }
    }
    out.push_str("\n\n");
}

/// Formats a relative path for the header, using `/` as the separator for
/// consistent display, even on Windows.
fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(relative: &str, content: ReadOutcome) -> FileRecord {
        FileRecord {
            absolute_path: PathBuf::from("/base").join(relative),
            relative_path: PathBuf::from(relative),
            content,
        }
    }

    #[test]
    fn test_content_record_format() {
        let mut out = String::new();
        render_record(
            &mut out,
            "proj",
            &record("src/main.py", ReadOutcome::Content("print('hi')".to_string())),
        );
        assert_eq!(out, "[proj/src/main.py]\nprint('hi')\n\n");
    }

    #[test]
    fn test_unreadable_record_uses_placeholder() {
        let mut out = String::new();
        render_record(
            &mut out,
            "proj",
            &record(
                "locked.py",
                ReadOutcome::Unreadable("permission denied".to_string()),
            ),
        );
        assert_eq!(
            out,
            "[proj/locked.py]\n<<Error reading file: permission denied>>\n\n"
        );
    }

    #[test]
    fn test_empty_content_still_separated() {
        let mut out = String::new();
        render_record(
            &mut out,
            "proj",
            &record("empty.py", ReadOutcome::Content(String::new())),
        );
        assert_eq!(out, "[proj/empty.py]\n\n\n");
    }
}
