//! Command-line configuration for the collector
//!
//! This module turns the flat list of command-line tokens into an immutable
//! [`Configuration`]. Parsing is done by clap; the validation that both
//! directories were supplied and the normalization of extension tokens
//! happen in [`Configuration::from_args`].
//!
//! # Recognized options
//!
//! | Flag | Effect |
//! |---|---|
//! | `--source <path>` | directory to scan |
//! | `--dest <path>` | directory receiving the copies |
//! | `--extension <ext>` / `-e <ext>` | adds an extension token, may repeat |
//! | `--depth <n>` | maximum number of directory levels below the source |
//! | `--match <mode>` | `substring` (default) or `suffix` |
//! | `--verbose` / `-v` | enables debug logging |
//!
//! Any other token is ignored. When a single-value flag is repeated, the
//! last occurrence wins.

use clap::{CommandFactory, Parser, ValueEnum};
use std::collections::{BTreeSet, HashMap};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{CollectorError, Result};

/// How extension tokens are tested against a candidate path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchMode {
    /// The full path string contains the token anywhere
    #[default]
    Substring,
    /// The lowercased file name ends with `.<token>`
    Suffix,
}

/// Command-line arguments for the collector
#[derive(Debug, Parser)]
#[command(name = "collector")]
#[command(about = "Collect files by extension into a single directory", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Args {
    /// Directory to scan recursively
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub source: Option<PathBuf>,

    /// Directory the matched files are copied into
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub dest: Option<PathBuf>,

    /// Extension token to select files (repeatable)
    #[arg(short = 'e', long = "extension", value_name = "EXT", allow_hyphen_values = true)]
    pub extensions: Vec<String>,

    /// Maximum number of directory levels below the source (0 = source only)
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// How extension tokens are matched against paths
    #[arg(long = "match", value_enum, default_value_t = MatchMode::Substring)]
    pub match_mode: MatchMode,

    /// Print debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Tokens dropped by [`parse_args`] because they are not recognized options
    #[arg(skip)]
    pub unrecognized: Vec<String>,
}

/// Parses a list of tokens that does not include the program name
///
/// Tokens are walked left to right before clap sees them. A recognized
/// flag that takes a value consumes the token right after it, whatever
/// that token looks like; every other token that is not a recognized flag
/// is dropped and kept in [`Args::unrecognized`]. Unknown letters inside a
/// short cluster such as `-vx` are dropped on their own.
///
/// # Errors
///
/// Returns the clap error when a recognized flag is missing its value or
/// the value cannot be parsed (for example a non-numeric `--depth`).
pub fn parse_args<I, T>(tokens: I) -> std::result::Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let flags = FlagTable::from_command();
    let (recognized, unrecognized) = flags.split(tokens.into_iter().map(Into::into));

    let argv = std::iter::once(OsString::from("collector")).chain(recognized);
    let mut args = Args::try_parse_from(argv)?;
    args.unrecognized = unrecognized;
    Ok(args)
}

/// Shape of one named option, taken from the clap definition
#[derive(Debug, Clone)]
struct FlagInfo {
    long: Option<String>,
    takes_value: bool,
}

/// Every named option the command accepts, keyed by long name and short letter
#[derive(Debug, Default)]
struct FlagTable {
    longs: HashMap<String, FlagInfo>,
    shorts: HashMap<char, FlagInfo>,
}

impl FlagTable {
    fn from_command() -> Self {
        let mut cmd = Args::command();
        // Adds the generated --help and --version arguments.
        cmd.build();

        let mut table = Self::default();
        for arg in cmd.get_arguments().filter(|arg| !arg.is_positional()) {
            let info = FlagInfo {
                long: arg.get_long().map(str::to_string),
                takes_value: arg.get_action().takes_values(),
            };
            if let Some(long) = arg.get_long() {
                table.longs.insert(long.to_string(), info.clone());
            }
            if let Some(short) = arg.get_short() {
                table.shorts.insert(short, info);
            }
        }
        table
    }

    /// Separates the tokens clap should see from the ones to ignore
    ///
    /// Values are re-attached as `--long=value` so clap never mistakes a
    /// value starting with `-` for another flag.
    fn split<I>(&self, tokens: I) -> (Vec<OsString>, Vec<String>)
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut recognized = Vec::new();
        let mut unrecognized = Vec::new();
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            let Some(text) = token.to_str() else {
                unrecognized.push(token.to_string_lossy().into_owned());
                continue;
            };

            if let Some(long) = text.strip_prefix("--") {
                let (name, attached) = match long.split_once('=') {
                    Some((name, _)) => (name, true),
                    None => (long, false),
                };
                match self.longs.get(name) {
                    Some(info) if info.takes_value && !attached => {
                        self.push_with_value(&mut recognized, info, text, tokens.next());
                    }
                    Some(_) => recognized.push(token.clone()),
                    None => unrecognized.push(text.to_string()),
                }
            } else if let Some(cluster) = text.strip_prefix('-').filter(|c| !c.is_empty()) {
                for (index, letter) in cluster.char_indices() {
                    match self.shorts.get(&letter) {
                        Some(info) if info.takes_value => {
                            let rest = &cluster[index + letter.len_utf8()..];
                            let rest = rest.strip_prefix('=').unwrap_or(rest);
                            let value = if rest.is_empty() {
                                tokens.next()
                            } else {
                                Some(OsString::from(rest))
                            };
                            self.push_with_value(&mut recognized, info, &format!("-{letter}"), value);
                            break;
                        }
                        Some(_) => recognized.push(OsString::from(format!("-{letter}"))),
                        None => unrecognized.push(format!("-{letter}")),
                    }
                }
            } else {
                unrecognized.push(text.to_string());
            }
        }

        (recognized, unrecognized)
    }

    fn push_with_value(
        &self,
        recognized: &mut Vec<OsString>,
        info: &FlagInfo,
        flag: &str,
        value: Option<OsString>,
    ) {
        match (&info.long, value) {
            (Some(long), Some(value)) => {
                let mut attached = OsString::from(format!("--{long}="));
                attached.push(value);
                recognized.push(attached);
            }
            (None, Some(value)) => {
                recognized.push(OsString::from(flag));
                recognized.push(value);
            }
            // Left bare so clap reports the missing value.
            (_, None) => recognized.push(OsString::from(flag)),
        }
    }
}

/// Immutable settings for one collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Lowercased extension tokens; an empty set matches nothing
    pub extensions: BTreeSet<String>,
    /// `None` means unbounded
    pub max_depth: Option<usize>,
    pub match_mode: MatchMode,
}

impl Configuration {
    /// Builds a configuration from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::MissingPaths`] when either `--source` or
    /// `--dest` was not given. Paths are not checked for existence here.
    pub fn from_args(args: Args) -> Result<Self> {
        if !args.unrecognized.is_empty() {
            log::debug!("Ignoring unrecognized arguments: {:?}", args.unrecognized);
        }

        let (Some(source), Some(destination)) = (args.source, args.dest) else {
            return Err(CollectorError::MissingPaths);
        };

        // An empty token would be a substring of every path.
        let extensions = args
            .extensions
            .iter()
            .filter(|ext| !ext.is_empty())
            .map(|ext| ext.to_lowercase())
            .collect();

        Ok(Self {
            source,
            destination,
            extensions,
            max_depth: args.depth,
            match_mode: args.match_mode,
        })
    }
}
