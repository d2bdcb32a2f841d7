//! File Collector - Gather files by extension into one directory
//!
//! File Collector walks a source directory tree, selects the files whose
//! path matches one of a set of extension tokens and copies them, flattened,
//! into a single destination directory. It prints one progress line per
//! file and a short summary with the elapsed time and the megabytes copied.
//!
//! # Pipeline
//!
//! 1. **Parse** - [`config`] turns the command line into a [`config::Configuration`]
//! 2. **Scan** - [`scanner`] collects every matching file up front
//! 3. **Copy** - [`file_copy`] copies the matches one at a time, overwriting
//! 4. **Report** - [`report`] prints progress and the final summary
//!
//! [`orchestrator`] wires the steps together.
//!
//! # Usage Example
//!
//! ```no_run
//! use file_collector::config::{parse_args, Configuration};
//! use file_collector::infrastructure::RealFileSystem;
//! use file_collector::orchestrator;
//!
//! let args = parse_args(["--source", "photos", "--dest", "backup", "-e", "jpg"])?;
//! let config = Configuration::from_args(args)?;
//! let summary = orchestrator::run(&config, &RealFileSystem::new())?;
//! println!("{} files attempted", summary.stats.files_attempted);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod file_copy;
pub mod infrastructure;
pub mod orchestrator;
pub mod report;
pub mod scanner;
