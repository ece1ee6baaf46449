//! Transaction Sources
//!
//! Lists the newline-delimited JSON files of a transactions directory and
//! decodes them one line at a time.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::domain::TransactionEvent;

use super::EventStoreError;

/// Extension of files treated as transaction sources
pub const SOURCE_EXTENSION: &str = "jsonl";

/// A directory of transaction source files
#[derive(Debug, Clone)]
pub struct EventSource {
    dir: PathBuf,
}

impl EventSource {
    /// Create a new EventSource over a directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List the source files, sorted by file name.
    /// Anything that is not a regular `.jsonl` file is skipped.
    pub fn files(&self) -> Result<Vec<PathBuf>, EventStoreError> {
        let list_error = |source| EventStoreError::ListDirectory {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            let path = entry.path();

            if !is_source_file(&path) {
                tracing::debug!(path = %path.display(), "Skipping non-source entry");
                continue;
            }
            // Follows symlinks, so a linked source is read like a plain file
            if !fs::metadata(&path).map_err(list_error)?.is_file() {
                tracing::debug!(path = %path.display(), "Skipping non-file entry");
                continue;
            }
            files.push(path);
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION)
}

/// Line-by-line decoder for one transaction source
pub struct JsonlReader<R> {
    path: PathBuf,
    lines: Lines<R>,
    line: usize,
}

impl JsonlReader<BufReader<File>> {
    /// Open a source file for reading
    pub fn open(path: &Path) -> Result<Self, EventStoreError> {
        let file = File::open(path).map_err(|source| EventStoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlReader<R> {
    /// Wrap an already-open reader; `path` is used for error reporting
    pub fn new(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = Result<TransactionEvent, EventStoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.lines.next()?;
        self.line += 1;

        let result = match text {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|source| EventStoreError::Decode {
                    path: self.path.clone(),
                    line: self.line,
                    source,
                })
            }
            Err(source) => Err(EventStoreError::Read {
                path: self.path.clone(),
                line: self.line,
                source,
            }),
        };
        Some(result)
    }
}
