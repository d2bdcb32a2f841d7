//! Constants used throughout the application
//!
//! This module centralizes the user-facing messages, icons and numeric
//! limits so that the scanner, copier and reporter print consistent text.
//!
//! # Organization
//!
//! - **Messages**: Progress, summary and error text
//! - **Icons**: Prefixes for warnings and errors
//! - **Traversal**: Directory skip rules
//! - **Units**: Size and time conversions
//!
//! # Usage
//!
//! ```rust
//! use file_collector::constants::{ICON_ERROR, ERROR_PATHS_REQUIRED};
//!
//! eprintln!("{} {}", ICON_ERROR, ERROR_PATHS_REQUIRED);
//! ```

// Progress and summary messages
pub const MSG_FILE_PREFIX: &str = "File";
pub const MSG_WAS_COPIED: &str = "was copied";
pub const MSG_PERFORMANCE: &str = "Performance:";
pub const MSG_TOTAL_COPIED: &str = "Total copied:";
pub const MSG_FAILED_COPIES: &str = "Failed copies:";
pub const MSG_SCANNING: &str = "Scanning";
pub const MSG_VISITING_DIRECTORY: &str = "About to visit directory";
pub const MSG_NO_MATCHES: &str = "No matching files found";

// Error messages
pub const ERROR_PATHS_REQUIRED: &str = "Source and destination paths are required.";
pub const ERROR_NOT_A_DIRECTORY: &str = "Path must be a directory";
pub const ERROR_CREATE_DESTINATION: &str = "Failed to create destination directory";
pub const ERROR_VISIT_FAILED: &str = "Visiting failed for";
pub const ERROR_COPY_FAILED: &str = "Error copying file";

// Icons
pub const ICON_ERROR: &str = "✗";
pub const ICON_WARNING: &str = "⚠";

// Traversal
/// Any directory whose path contains this marker is not descended into.
pub const RECYCLE_MARKER: &str = "RECYCLE";

// Units
pub const BYTES_PER_MB: u64 = 1_000_000;
pub const SIZE_UNIT_MB: &str = "MB";
pub const TIME_UNIT_SECONDS: &str = "sec";

// Spinner
pub const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

// Exit codes
pub const EXIT_FAILURE: u8 = 1;
