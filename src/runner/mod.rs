//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! loads the snapshot, wires the optional cache, and prints one line per
//! matched node: its reconstructed path and identifier separated by a tab.

mod error;

pub use error::RunnerError;

use crate::cli::{Cli, Commands};
use crate::finder::Finder;
use crate::node::{Folder, NodeId};
use crate::store::{CachingStore, NodeStore, Snapshot};
use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use itertools::Itertools;
use std::io::{self, Write};
use std::iter;
use tracing::info;

/// Execute the parsed [`Cli`] commands.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, a store query fails,
/// a required folder does not exist, or output cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.finder_config()?;
    let path = Utf8PathBuf::try_from(cli.snapshot.clone())
        .context("snapshot path must be valid UTF-8")?;
    let store = Snapshot::load(&path)
        .and_then(Snapshot::into_store)
        .with_context(|| format!("load snapshot {path}"))?;
    info!(nodes = store.len(), snapshot = %path, "snapshot loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let from = cli.from.as_deref();
    match config.cache_capacity() {
        Some(capacity) => {
            let finder = Finder::with_config(CachingStore::new(store, capacity), config);
            execute(&finder, &cli.command, from, &mut out)
        }
        None => execute(&Finder::with_config(store, config), &cli.command, from, &mut out),
    }
}

/// Run `command` against `finder`, writing matches to `out`.
///
/// `from` is an exact folder path used as the start folder for every
/// lookup except `path-to`, which never resolves it.
///
/// # Errors
///
/// Returns an error if a store query fails, a required folder does not
/// exist, or writing to `out` fails.
pub fn execute<S, W>(
    finder: &Finder<S>,
    command: &Commands,
    from: Option<&str>,
    out: &mut W,
) -> Result<()>
where
    S: NodeStore,
    W: Write,
{
    let start = match command {
        Commands::PathTo { .. } => None,
        _ => resolve_start(finder, from)?,
    };
    let start = start.as_ref();
    match command {
        Commands::Files { path } => {
            let files = finder.resolve_files(path, start)?;
            write_nodes(finder, files.iter().map(|file| file.id()), out)
        }
        Commands::Folder { path } => {
            let folder = finder
                .resolve_folder(path, start)?
                .ok_or_else(|| RunnerError::FolderNotFound { path: path.clone() })?;
            write_nodes(finder, iter::once(folder.id()), out)
        }
        Commands::FindFiles { glob } => {
            let files = finder.search_files(glob, start)?;
            write_nodes(finder, files.iter().map(|file| file.id()), out)
        }
        Commands::FindFolders { glob } => {
            let folders = finder.search_folders(glob, start)?;
            write_nodes(finder, folders.iter().map(Folder::id), out)
        }
        Commands::PathTo { id, .. } => write_paths(finder, &NodeId::new(id.as_str()), out),
    }
}

fn write_paths<S, W>(finder: &Finder<S>, node: &NodeId, out: &mut W) -> Result<()>
where
    S: NodeStore,
    W: Write,
{
    let name = finder.store().name(node)?;
    for ancestors in finder.paths_to(node)? {
        writeln!(out, "{}\t{node}", render_path(&ancestors, &name))?;
    }
    Ok(())
}

fn resolve_start<S: NodeStore>(finder: &Finder<S>, from: Option<&str>) -> Result<Option<Folder>> {
    let Some(path) = from else {
        return Ok(None);
    };
    let folder = finder
        .resolve_folder(path, None)?
        .ok_or_else(|| RunnerError::StartNotFound {
            path: path.to_owned(),
        })?;
    Ok(Some(folder))
}

fn write_nodes<'a, S, W>(
    finder: &Finder<S>,
    ids: impl Iterator<Item = &'a NodeId>,
    out: &mut W,
) -> Result<()>
where
    S: NodeStore,
    W: Write,
{
    let mut count = 0_usize;
    for id in ids {
        let ancestors = finder.path_to(id)?;
        let name = finder.store().name(id)?;
        writeln!(out, "{}\t{id}", render_path(&ancestors, &name))?;
        count += 1;
    }
    info!(count, "lookup finished");
    Ok(())
}

/// Join ancestor names and the node's own name into an absolute path.
#[must_use]
pub fn render_path(ancestors: &[String], name: &str) -> String {
    let joined = ancestors
        .iter()
        .map(String::as_str)
        .chain(iter::once(name))
        .join("/");
    format!("/{joined}")
}
