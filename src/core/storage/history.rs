//! Append-only search history log.
//!
//! A plain UTF-8 text file, one query per line, oldest first. The file
//! grows without bound; only the tail is ever read back.

use crate::core::error::{KeylinkError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Search history log backed by a text file
#[derive(Debug, Clone)]
pub struct SearchHistory {
    path: PathBuf,
}

impl SearchHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one query.
    ///
    /// Line breaks inside the query are flattened to spaces so the entry
    /// stays on one line. Any failure surfaces as `HistoryLogUnwritable`.
    pub fn append(&self, query: &str) -> Result<()> {
        let line: String = query
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        self.write_line(&line).map_err(|e| {
            KeylinkError::HistoryLogUnwritable(format!("{}: {e}", self.path.display()))
        })
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        file.sync_data()
    }

    /// The last `limit` queries, oldest first. A missing log is empty.
    pub fn recent(&self, limit: usize) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(limit);
        Ok(lines[start..].iter().map(|l| l.to_string()).collect())
    }
}
