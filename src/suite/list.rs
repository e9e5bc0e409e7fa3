//! List-file loaders
//!
//! Two line-oriented formats share the comment rules: a line whose first
//! non-blank character is `#` is skipped, as are blank lines, and anything
//! after an inline `#` is discarded. Order is preserved and duplicate
//! entries re-run.

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// One `TARGET:FILENAME` entry of a suite list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub target: String,
    pub file: String,
}

fn data_portion(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let data = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    if data.trim().is_empty() {
        None
    } else {
        Some(data)
    }
}

/// Load a `TARGET:FILENAME` list
///
/// A data line without the `:` separator aborts the load.
pub fn load_targets(path: &Path) -> Result<Vec<ListEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;

    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let Some(data) = data_portion(line) else {
            continue;
        };
        let (target, file) = data.split_once(':').ok_or_else(|| Error::MalformedLine {
            path: path.display().to_string(),
            line_no: idx + 1,
            line: line.to_string(),
        })?;
        entries.push(ListEntry {
            target: target.trim().to_string(),
            file: file.trim().to_string(),
        });
    }
    Ok(entries)
}

/// Load a plain filename-per-line list
///
/// Relative entries resolve against the list file's own directory.
pub fn load_files(path: &Path) -> Result<Vec<PathBuf>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, e))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut files = Vec::new();
    for line in content.lines() {
        let Some(data) = data_portion(line) else {
            continue;
        };
        let entry = Path::new(data.trim());
        if entry.is_absolute() {
            files.push(entry.to_path_buf());
        } else {
            files.push(base.join(entry));
        }
    }
    Ok(files)
}
