//! Building a `MovieCollection` from a file on disk.
//!
//! The file is read one line at a time. Lines that fail to parse are
//! skipped and reported in the `LoadReport`; only I/O failures abort the load.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

impl MovieCollection {
    /// Load every movie from the file at `path`.
    ///
    /// Steps:
    /// 1. Open the file (fails with `FileNotFound`)
    /// 2. Read it line by line, skipping blank lines
    /// 3. Parse each line; keep the good ones in file order
    /// 4. Record (and log) every rejected line
    pub fn load_from_file(path: &Path) -> Result<LoadReport> {
        tracing::info!("Loading movies from {}", path.display());

        let file = File::open(path).map_err(|source| DataLoadError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let report = Self::load_from_reader(BufReader::new(file))?;

        tracing::info!(
            "Loaded {} movies ({} lines skipped)",
            report.collection.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Load movies from any buffered reader.
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily rather than
    /// failing the whole load.
    pub fn load_from_reader<R: BufRead>(mut reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }

            match parser::parse_movie_line(&line, line_no) {
                Ok(movie) => report.collection.push(movie),
                Err(err) => {
                    tracing::warn!("Skipping line {}: {}", line_no, err);
                    report.skipped.push(err);
                }
            }
        }

        Ok(report)
    }
}
