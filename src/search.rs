//! Glob-driven enumeration of folders and files.
//!
//! Each path level is compiled into its own [`Pattern`] once per search,
//! before any folder is enumerated, and shared by every branch that reaches
//! that level. Every matching folder is explored, so results may contain the
//! same node more than once when it is reachable through several parents.

use tracing::debug;

use crate::glob::{GlobMode, Pattern, compile};
use crate::node::{File, Folder};
use crate::segments::PathSegments;
use crate::store::NodeStore;

/// Find every folder below `start` whose path matches `glob`.
///
/// A match at an intermediate level only continues the descent; only
/// folders matched by the last segment are returned.
///
/// # Errors
///
/// Propagates the first store failure unchanged.
pub fn search_folders<S: NodeStore>(
    store: &S,
    glob: &str,
    start: &Folder,
    mode: GlobMode,
) -> Result<Vec<Folder>, S::Error> {
    let segments = PathSegments::parse(glob);
    let found = folders_matching(store, segments.as_slice(), start, mode)?;
    debug!(glob, ?mode, matches = found.len(), "searched folders by glob");
    Ok(found)
}

/// Find every file below `start` whose path matches `glob`.
///
/// The leading segments select candidate folders as in [`search_folders`];
/// the last segment is matched against the direct files of each candidate.
/// With a single segment the only candidate is `start` itself.
///
/// # Errors
///
/// Propagates the first store failure unchanged.
pub fn search_files<S: NodeStore>(
    store: &S,
    glob: &str,
    start: &Folder,
    mode: GlobMode,
) -> Result<Vec<File>, S::Error> {
    let segments = PathSegments::parse(glob);
    let (folder_globs, file_glob) = segments.split_terminal();
    let candidates = if folder_globs.is_empty() {
        vec![start.clone()]
    } else {
        folders_matching(store, folder_globs, start, mode)?
    };
    let pattern = compile(file_glob, mode);
    let mut found = Vec::new();
    for folder in &candidates {
        collect_files(store, folder, &pattern, &mut found)?;
    }
    debug!(
        glob,
        ?mode,
        candidates = candidates.len(),
        matches = found.len(),
        "searched files by glob"
    );
    Ok(found)
}

fn folders_matching<S: NodeStore>(
    store: &S,
    segments: &[&str],
    start: &Folder,
    mode: GlobMode,
) -> Result<Vec<Folder>, S::Error> {
    let patterns: Vec<Pattern> = segments
        .iter()
        .map(|segment| compile(segment, mode))
        .collect();
    let mut found = Vec::new();
    descend_folders(store, start, &patterns, &mut found)?;
    Ok(found)
}

fn descend_folders<S: NodeStore>(
    store: &S,
    folder: &Folder,
    remaining: &[Pattern],
    found: &mut Vec<Folder>,
) -> Result<(), S::Error> {
    let Some((pattern, rest)) = remaining.split_first() else {
        return Ok(());
    };
    for child in store.all_child_folders(folder)? {
        if !pattern.is_match(&store.name(child.id())?) {
            continue;
        }
        if rest.is_empty() {
            found.push(child);
        } else {
            descend_folders(store, &child, rest, found)?;
        }
    }
    Ok(())
}

fn collect_files<S: NodeStore>(
    store: &S,
    folder: &Folder,
    pattern: &Pattern,
    found: &mut Vec<File>,
) -> Result<(), S::Error> {
    for file in store.all_child_files(folder)? {
        if pattern.is_match(&store.name(file.id())?) {
            found.push(file);
        }
    }
    Ok(())
}
