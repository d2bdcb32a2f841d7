//! Flattening copy of scanned files
//!
//! Every matched file is copied directly into the destination directory
//! under its own file name. Source subdirectories are not recreated and an
//! existing file with the same name is replaced without asking.
//!
//! # Accounting
//!
//! Each file handed to the copier counts as an attempt. The attempt number
//! and the source length are recorded *before* the copy runs, so
//! [`CopyStats::total_bytes`] is the size of everything attempted, whether
//! or not the copy then succeeded.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

use crate::infrastructure::FileSystem;
use crate::report;

/// Running totals for one copy phase
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    /// Files handed to the copier; also the last progress number printed
    pub files_attempted: u64,
    /// Attempts that ended in an error
    pub files_failed: u64,
    /// Sum of the source lengths of every attempted file
    pub total_bytes: u64,
}

impl CopyStats {
    /// Attempts that completed without error
    pub fn files_succeeded(&self) -> u64 {
        self.files_attempted - self.files_failed
    }
}

/// Destination path for `file`: its file name directly under `dest_dir`
pub fn destination_for(file: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .ok_or_else(|| anyhow!("Path has no file name: {}", file.display()))?;
    Ok(dest_dir.join(name))
}

/// Copies one file into `dest_dir`, updating `stats`
///
/// Prints the `#<n> File <name> was copied` progress line first, then adds
/// the source length to the byte total, then performs the copy.
///
/// # Returns
///
/// * `Ok(u64)` - Bytes written to the destination
/// * `Err(...)` - The copy failed; `stats.files_failed` has been incremented
pub fn copy_file(
    fs: &dyn FileSystem,
    file: &Path,
    dest_dir: &Path,
    stats: &mut CopyStats,
) -> Result<u64> {
    stats.files_attempted += 1;
    report::print_progress(stats.files_attempted, &display_name(file));

    let len = fs.file_len(file).unwrap_or_else(|e| {
        log::debug!("Could not read length of {}: {e}", file.display());
        0
    });
    stats.total_bytes += len;

    let result = copy_into(fs, file, dest_dir);
    if result.is_err() {
        stats.files_failed += 1;
    }
    result
}

fn copy_into(fs: &dyn FileSystem, file: &Path, dest_dir: &Path) -> Result<u64> {
    let dest = destination_for(file, dest_dir)?;

    // Copying a file onto itself would truncate it.
    if is_same_file(fs, file, &dest) {
        return Err(anyhow!(
            "Source and destination are the same file: {}",
            dest.display()
        ));
    }

    let bytes = fs.copy(file, &dest).with_context(|| {
        format!(
            "Failed to copy file from {} to {}",
            file.display(),
            dest.display()
        )
    })?;
    log::debug!("Copied {} ({bytes} bytes)", dest.display());

    Ok(bytes)
}

/// Copies every file in order, reporting failures and carrying on
pub fn copy_all(fs: &dyn FileSystem, files: &[PathBuf], dest_dir: &Path) -> CopyStats {
    let mut stats = CopyStats::default();

    for file in files {
        if let Err(e) = copy_file(fs, file, dest_dir, &mut stats) {
            report::print_copy_error(&display_name(file), &e);
        }
    }

    stats
}

fn display_name(file: &Path) -> String {
    file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}

fn is_same_file(fs: &dyn FileSystem, a: &Path, b: &Path) -> bool {
    match (fs.canonicalize(a), fs.canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
