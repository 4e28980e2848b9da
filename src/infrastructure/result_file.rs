// SPDX-License-Identifier: MPL-2.0
//! TOML result file adapter.
//!
//! Reads the output of an external search as a list of `[[results]]` tables
//! and implements [`SearchSource`] over it.
//!
//! ```toml
//! [[results]]
//! id = "pexels_7"
//! title = "forest"
//! preview = "https://cdn.example.com/s.jpg"
//! full = "https://cdn.example.com/l.jpg"
//! kind = "external"
//! source = "pexels"
//! photographer = "li"
//! page_url = "https://pexels.com/7"
//! width = 1920
//! height = 1080
//! ```

use crate::application::port::SearchSource;
use crate::domain::results::ResultItem;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ResultFile {
    #[serde(default)]
    results: Vec<ResultItem>,
}

/// Parses result file contents.
///
/// # Errors
///
/// Returns [`Error::ResultFile`] if the contents are not a valid result file.
pub fn parse(contents: &str) -> Result<Vec<ResultItem>> {
    let file: ResultFile =
        toml::from_str(contents).map_err(|err| Error::ResultFile(err.to_string()))?;
    Ok(file.results)
}

/// Serializes results into the result file format.
///
/// # Errors
///
/// Returns [`Error::ResultFile`] if serialization fails.
pub fn render(results: &[ResultItem]) -> Result<String> {
    let file = ResultFile {
        results: results.to_vec(),
    };
    toml::to_string_pretty(&file).map_err(|err| Error::ResultFile(err.to_string()))
}

/// [`SearchSource`] backed by a result file on disk.
#[derive(Debug, Clone)]
pub struct ResultFileSource {
    path: PathBuf,
}

impl ResultFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SearchSource for ResultFileSource {
    fn fetch(&mut self) -> Result<Vec<ResultItem>> {
        let contents = fs::read_to_string(&self.path)?;
        let results = parse(&contents).map_err(|err| match err {
            Error::ResultFile(msg) => {
                Error::ResultFile(format!("{}: {msg}", self.path.display()))
            }
            other => other,
        })?;
        tracing::debug!(path = %self.path.display(), count = results.len(), "result file read");
        Ok(results)
    }
}
