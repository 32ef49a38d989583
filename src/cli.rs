//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands, and maps
//! the global flags onto a [`FinderConfig`].

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::FinderConfig;
use crate::glob::GlobMode;
use crate::reconstruct::ParentPolicy;
use crate::store::DEFAULT_CACHE_CAPACITY;

/// Locate files and folders in a node graph snapshot by path or glob.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Snapshot describing the node graph (`.json`, otherwise YAML).
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Folder path to start from instead of the root.
    #[arg(long, value_name = "PATH")]
    pub from: Option<String>,

    /// Enable `?`, `[...]` and `{a,b}` in glob patterns.
    #[arg(short = 'x', long)]
    pub extended: bool,

    /// Memoize up to N store responses during the lookup (default 256).
    ///
    /// The value must be attached as `--cache=N`, so a bare `--cache` may
    /// directly precede the subcommand.
    #[arg(long, value_name = "N", num_args = 0..=1, require_equals = true)]
    pub cache: Option<Option<usize>>,

    /// Enable verbose logging output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Lookup to perform.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the lookup configuration implied by the flags.
    ///
    /// # Errors
    ///
    /// Returns an error when `--cache` is zero.
    pub fn finder_config(&self) -> anyhow::Result<FinderConfig> {
        let mode = if self.extended {
            GlobMode::Extended
        } else {
            GlobMode::Basic
        };
        let policy = match self.command {
            Commands::PathTo { all_paths: true, .. } => ParentPolicy::AllPaths,
            _ => ParentPolicy::FirstFound,
        };
        let config = FinderConfig::new()
            .with_glob_mode(mode)
            .with_parent_policy(policy);
        match self.cache {
            Some(capacity) => {
                config.with_cache_capacity(capacity.unwrap_or(DEFAULT_CACHE_CAPACITY))
            }
            None => Ok(config),
        }
    }
}

/// Available lookups.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Resolve every file at an exact path.
    Files {
        /// Slash-delimited path whose last segment is the file name.
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Resolve a folder at an exact path, taking first matches only.
    Folder {
        /// Slash-delimited folder path.
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Search files by glob.
    FindFiles {
        /// Slash-delimited glob whose last segment matches file names.
        #[arg(value_name = "GLOB")]
        glob: String,
    },

    /// Search folders by glob.
    FindFolders {
        /// Slash-delimited glob matched one level at a time.
        #[arg(value_name = "GLOB")]
        glob: String,
    },

    /// Print the path of a node given its identifier.
    PathTo {
        /// Identifier of the node.
        #[arg(value_name = "NODE_ID")]
        id: String,

        /// Print one path per chain of parents instead of the first only.
        #[arg(long)]
        all_paths: bool,
    },
}
