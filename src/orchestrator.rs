//! Pipeline orchestration
//!
//! Runs scan, destination preparation, copy and summary in that order.
//! Anything that fails before the copy phase stops the run with an error;
//! failures inside the copy phase are reported per file and never stop it.

use anyhow::Result;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::Configuration;
use crate::constants::MSG_NO_MATCHES;
use crate::error::CollectorError;
use crate::file_copy::{self, CopyStats};
use crate::infrastructure::FileSystem;
use crate::report;
use crate::scanner::{self, ExtensionFilter};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Files returned by the scan
    pub matched: usize,
    pub stats: CopyStats,
    /// Wall-clock time from just before the scan to the end of the last copy
    pub elapsed: Duration,
}

/// Executes one collection run and prints its summary
///
/// # Errors
///
/// * [`CollectorError::NotADirectory`] - the source is not a directory
/// * [`CollectorError::CreateDestination`] - the destination is missing and cannot be created
pub fn run(config: &Configuration, fs: &dyn FileSystem) -> Result<RunSummary> {
    let start = Instant::now();

    let filter = ExtensionFilter::from_config(config);
    let files = scanner::scan(&config.source, config.max_depth, &filter)?;
    log::debug!(
        "Found {} files under {} for {:?}",
        files.len(),
        config.source.display(),
        config.extensions
    );

    if files.is_empty() {
        report::print_warning(MSG_NO_MATCHES);
    }

    prepare_destination(fs, &config.destination)?;
    let stats = file_copy::copy_all(fs, &files, &config.destination);
    let elapsed = start.elapsed();

    report::print_summary(elapsed, &stats);

    Ok(RunSummary {
        matched: files.len(),
        stats,
        elapsed,
    })
}

/// Creates the destination directory when it does not exist yet
fn prepare_destination(fs: &dyn FileSystem, destination: &Path) -> Result<()> {
    if fs.is_dir(destination) {
        return Ok(());
    }

    log::debug!("Creating destination directory {}", destination.display());
    fs.create_dir_all(destination)
        .map_err(|cause| CollectorError::CreateDestination {
            path: destination.to_path_buf(),
            cause,
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;
    use crate::infrastructure::filesystem::mock::MockFileSystem;
    use std::path::PathBuf;

    #[test]
    fn test_prepare_destination_creates_missing_directory() -> Result<()> {
        let fs = MockFileSystem::new();
        prepare_destination(&fs, Path::new("/out"))?;
        assert!(fs.is_dir(Path::new("/out")));
        Ok(())
    }

    #[test]
    fn test_prepare_destination_failure_is_fatal() {
        let fs = MockFileSystem::new().with_failure("/out", "Read-only filesystem");
        let err = prepare_destination(&fs, Path::new("/out")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CollectorError>(),
            Some(CollectorError::CreateDestination { .. })
        ));
    }

    #[test]
    fn test_run_rejects_missing_source() {
        let config = Configuration {
            source: PathBuf::from("/definitely/not/here"),
            destination: PathBuf::from("/out"),
            extensions: ["txt".to_string()].into_iter().collect(),
            max_depth: None,
            match_mode: MatchMode::Substring,
        };
        let fs = MockFileSystem::new();

        let err = run(&config, &fs).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CollectorError>(),
            Some(CollectorError::NotADirectory(_))
        ));
        assert!(!fs.exists(Path::new("/out")));
    }
}
