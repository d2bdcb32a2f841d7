//! Progress and summary output
//!
//! Progress lines and the final summary go to stdout; errors go to stderr
//! prefixed with a colored icon. The line formats are built by plain
//! functions so they can be checked without capturing output.

use colored::*;
use std::time::Duration;

use crate::constants::{
    BYTES_PER_MB, ERROR_COPY_FAILED, ICON_ERROR, ICON_WARNING, MSG_FAILED_COPIES,
    MSG_FILE_PREFIX, MSG_PERFORMANCE, MSG_TOTAL_COPIED, MSG_WAS_COPIED, SIZE_UNIT_MB,
    TIME_UNIT_SECONDS,
};
use crate::file_copy::CopyStats;

/// Converts a byte count to decimal megabytes (1 MB = 1,000,000 bytes)
pub fn bytes_to_megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

/// Formats the progress line for the `index`-th attempted file
///
/// # Example
///
/// ```rust
/// use file_collector::report::progress_line;
///
/// assert_eq!(progress_line(1, "a.txt"), "#1 File a.txt was copied");
/// ```
pub fn progress_line(index: u64, name: &str) -> String {
    format!("#{index} {MSG_FILE_PREFIX} {name} {MSG_WAS_COPIED}")
}

/// Formats the summary printed after the copy phase
pub fn summary_lines(elapsed: Duration, stats: &CopyStats) -> Vec<String> {
    let seconds = elapsed.as_secs_f64();
    let megabytes = bytes_to_megabytes(stats.total_bytes);

    let mut lines = vec![
        format!("{MSG_PERFORMANCE} {seconds:.3} {TIME_UNIT_SECONDS}"),
        format!("{MSG_TOTAL_COPIED} {megabytes:.1} {SIZE_UNIT_MB}"),
    ];
    if stats.files_failed > 0 {
        lines.push(format!(
            "{MSG_FAILED_COPIES} {} of {}",
            stats.files_failed, stats.files_attempted
        ));
    }
    lines
}

pub fn print_progress(index: u64, name: &str) {
    println!("{}", progress_line(index, name));
}

pub fn print_summary(elapsed: Duration, stats: &CopyStats) {
    println!();
    for line in summary_lines(elapsed, stats) {
        println!("{line}");
    }
}

/// Reports a failed copy on stderr
pub fn print_copy_error(name: &str, error: &anyhow::Error) {
    let cross = ICON_ERROR.red();
    eprintln!("{cross} {ERROR_COPY_FAILED} {name}: {error:#}");
}

/// Displays a fatal error message on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", ICON_ERROR.red(), message);
}

/// Displays a non-fatal warning on stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", ICON_WARNING.yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_format() {
        assert_eq!(progress_line(1, "a.txt"), "#1 File a.txt was copied");
        assert_eq!(progress_line(12, "c.log"), "#12 File c.log was copied");
    }

    #[test]
    fn test_megabytes_are_decimal() {
        assert_eq!(bytes_to_megabytes(1_000_000), 1.0);
        assert_eq!(bytes_to_megabytes(2_500_000), 2.5);
        assert_eq!(bytes_to_megabytes(0), 0.0);
    }

    #[test]
    fn test_summary_lines() {
        let stats = CopyStats {
            files_attempted: 3,
            files_failed: 0,
            total_bytes: 1_500_000,
        };
        let lines = summary_lines(Duration::from_millis(1250), &stats);

        assert_eq!(lines, vec!["Performance: 1.250 sec", "Total copied: 1.5 MB"]);
    }

    #[test]
    fn test_summary_mentions_failures() {
        let stats = CopyStats {
            files_attempted: 4,
            files_failed: 1,
            total_bytes: 0,
        };
        let lines = summary_lines(Duration::ZERO, &stats);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "Failed copies: 1 of 4");
    }
}
