//! Directory tree scanning
//!
//! Walks the source directory with `walkdir`, following symbolic links, and
//! collects every regular file whose path matches the configured extension
//! tokens. The whole result is gathered before any copy starts.
//!
//! # Traversal rules
//!
//! - Entries are visited depth-first, sorted by file name within a directory
//! - Directories whose path contains [`RECYCLE_MARKER`] are not entered
//! - An entry that cannot be read is reported on stderr and skipped; the
//!   walk carries on with its siblings

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::{Configuration, MatchMode};
use crate::constants::{
    ERROR_VISIT_FAILED, ICON_WARNING, MSG_SCANNING, MSG_VISITING_DIRECTORY, RECYCLE_MARKER,
    SPINNER_TEMPLATE,
};
use crate::error::{CollectorError, Result};

/// Decides whether a path is selected by the extension tokens
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
    mode: MatchMode,
}

impl ExtensionFilter {
    /// Create a filter from already normalized tokens
    pub fn new<I>(extensions: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            extensions: extensions.into_iter().collect(),
            mode,
        }
    }

    /// Create the filter described by a configuration
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.extensions.iter().cloned(), config.match_mode)
    }

    /// True when no token is configured, in which case nothing matches
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Check whether `path` is selected
    ///
    /// In [`MatchMode::Substring`] the full path string, directories
    /// included, only has to contain a token. In [`MatchMode::Suffix`] the
    /// lowercased file name has to end with `.<token>`.
    pub fn matches(&self, path: &Path) -> bool {
        match self.mode {
            MatchMode::Substring => {
                let full = path.to_string_lossy();
                self.extensions.iter().any(|ext| full.contains(ext.as_str()))
            }
            MatchMode::Suffix => {
                let Some(name) = path.file_name() else {
                    return false;
                };
                let name = name.to_string_lossy().to_lowercase();
                self.extensions.iter().any(|ext| {
                    let ext = ext.trim_start_matches('.');
                    !ext.is_empty() && name.ends_with(&format!(".{ext}"))
                })
            }
        }
    }
}

/// Scans `source` and returns every matching regular file
///
/// `max_depth` counts directory levels below `source`: `Some(0)` only
/// returns the files placed directly in `source`, `None` is unbounded.
///
/// # Errors
///
/// Returns [`CollectorError::NotADirectory`] when `source` does not resolve
/// to a directory. Failures on individual entries never abort the scan.
pub fn scan(
    source: &Path,
    max_depth: Option<usize>,
    filter: &ExtensionFilter,
) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Err(CollectorError::NotADirectory(source.to_path_buf()));
    }

    if filter.is_empty() {
        log::debug!("No extension tokens configured, nothing can match");
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(source).follow_links(true).sort_by_file_name();
    if let Some(depth) = max_depth {
        // The root itself sits at walker depth 0, its files at depth 1.
        walker = walker.max_depth(depth.saturating_add(1));
    }

    let spinner = scan_spinner();
    let mut matches = Vec::new();

    for entry in walker.into_iter().filter_entry(|entry| !is_recycle_dir(entry)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                spinner.suspend(|| report_walk_error(&err));
                continue;
            }
        };

        if entry.file_type().is_dir() {
            log::debug!("{MSG_VISITING_DIRECTORY} {}", entry.path().display());
            let found = matches.len();
            spinner.set_message(format!("{MSG_SCANNING} {} ({found})", entry.path().display()));
            continue;
        }

        if entry.file_type().is_file() && filter.matches(entry.path()) {
            matches.push(entry.into_path());
        }
    }

    spinner.finish_and_clear();
    log::debug!("Scan of {} matched {} files", source.display(), matches.len());

    Ok(matches)
}

fn is_recycle_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.path().to_string_lossy().contains(RECYCLE_MARKER)
}

fn report_walk_error(err: &walkdir::Error) {
    let warning = ICON_WARNING.yellow();
    match err.path() {
        Some(path) => eprintln!("{warning} {ERROR_VISIT_FAILED} {}: {err}", path.display()),
        None => eprintln!("{warning} {ERROR_VISIT_FAILED}: {err}"),
    }
    log::debug!("Walk error at depth {}: {err:?}", err.depth());
}

/// Spinner on stderr; indicatif hides it when stderr is not a terminal
fn scan_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(MSG_SCANNING);
    pb
}
