// src/output/writer.rs

//! Writes the aggregated output to its destination file.
//!
//! Unlike every other failure in the pipeline, a write failure here is
//! fatal: the whole point of the run is producing this file.

use crate::errors::{output_write_error, AppError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates (or truncates) the destination and writes the aggregated text.
pub fn write_output(path: &Path, content: &str) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| output_write_error(e, path))?;
    let mut writer = BufWriter::new(file); // Use BufWriter for file I/O
    writer
        .write_all(content.as_bytes())
        .map_err(|e| output_write_error(e, path))?;
    writer.flush().map_err(|e| output_write_error(e, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let path = temp.path().join("collected_code.txt");
        write_output(&path, "[proj/a.py]\nx\n\n")?;
        assert_eq!(fs::read_to_string(&path)?, "[proj/a.py]\nx\n\n");
        Ok(())
    }

    #[test]
    fn test_write_overwrites_previous_content() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let path = temp.path().join("collected_code.txt");
        fs::write(&path, "stale content that should disappear")?;
        write_output(&path, "fresh")?;
        assert_eq!(fs::read_to_string(&path)?, "fresh");
        Ok(())
    }

    #[test]
    fn test_write_failure_is_reported_with_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing_dir").join("out.txt");
        let result = write_output(&path, "content");
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Failed to write output file"));
        assert!(message.contains("out.txt"));
    }
}
