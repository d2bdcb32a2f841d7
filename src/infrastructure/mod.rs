//! Infrastructure layer module
//!
//! This module contains the filesystem concerns of the collector, kept
//! behind a trait so the copy loop can be exercised without touching disk.

pub mod filesystem;

// Re-export commonly used items
pub use filesystem::{FileSystem, RealFileSystem};
