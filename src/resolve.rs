//! Exact path lookup by literal-name descent.
//!
//! File lookup branches: every same-named folder at a level is explored and
//! matches are collected from all branches. Folder lookup is linear: only the
//! first folder the store reports at each level is followed, and the lookup
//! gives up at the first level without a match.

use tracing::debug;

use crate::node::{File, Folder};
use crate::segments::PathSegments;
use crate::store::NodeStore;

/// Find every file reachable from `start` along `path`.
///
/// The last segment of `path` is the file name; the others name folders.
/// Names are compared literally. The result follows store enumeration order
/// and may be empty.
///
/// # Errors
///
/// Propagates the first store failure unchanged.
///
/// # Examples
///
/// ```
/// use drivepath::{resolve::resolve_files, store::{MemoryStore, NodeStore}};
///
/// let mut builder = MemoryStore::builder("root", "My Drive");
/// let root = builder.root().clone();
/// let docs = builder.folder("docs", "docs", &[&root])?;
/// builder.file("readme", "README.md", &[docs.id()])?;
/// let store = builder.build();
///
/// let files = resolve_files(&store, "/docs/README.md", &store.root_folder()?)?;
/// assert_eq!(files.len(), 1);
/// # Ok::<(), drivepath::store::StoreError>(())
/// ```
pub fn resolve_files<S: NodeStore>(
    store: &S,
    path: &str,
    start: &Folder,
) -> Result<Vec<File>, S::Error> {
    let segments = PathSegments::parse(path);
    let (folders, file_name) = segments.split_terminal();
    let mut found = Vec::new();
    descend_files(store, start, folders, file_name, &mut found)?;
    debug!(path, matches = found.len(), "resolved files by path");
    Ok(found)
}

fn descend_files<S: NodeStore>(
    store: &S,
    folder: &Folder,
    remaining: &[&str],
    file_name: &str,
    found: &mut Vec<File>,
) -> Result<(), S::Error> {
    let Some((&segment, rest)) = remaining.split_first() else {
        found.extend(store.child_files(folder, Some(file_name))?);
        return Ok(());
    };
    for child in store.child_folders(folder, Some(segment))? {
        descend_files(store, &child, rest, file_name, found)?;
    }
    Ok(())
}

/// Follow `path` from `start`, taking the first exact match at each level.
///
/// Returns `None` as soon as a level has no folder with the wanted name,
/// even if another same-named folder at an earlier level would have led to
/// a match.
///
/// # Errors
///
/// Propagates the first store failure unchanged.
pub fn resolve_folder<S: NodeStore>(
    store: &S,
    path: &str,
    start: &Folder,
) -> Result<Option<Folder>, S::Error> {
    let segments = PathSegments::parse(path);
    let mut current = start.clone();
    for &segment in segments.as_slice() {
        let Some(next) = store.child_folders(&current, Some(segment))?.into_iter().next() else {
            debug!(path, segment, "folder path has no match");
            return Ok(None);
        };
        current = next;
    }
    Ok(Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use crate::store::MemoryStore;
    use anyhow::{Context, Result, ensure};

    /// `root/a/b/c/doc.txt` plus a decoy `doc.txt` in `b`.
    fn chain() -> Result<MemoryStore> {
        let mut builder = MemoryStore::builder("root", "My Drive");
        let root = builder.root().clone();
        let a = builder.folder("a", "a", &[&root])?;
        let b = builder.folder("b", "b", &[a.id()])?;
        let c = builder.folder("c", "c", &[b.id()])?;
        builder.file("doc", "doc.txt", &[c.id()])?;
        builder.file("decoy", "doc.txt", &[b.id()])?;
        Ok(builder.build())
    }

    #[test]
    fn resolves_single_file_along_chain() -> Result<()> {
        let store = chain()?;
        let files = resolve_files(&store, "/a/b/c/doc.txt", &store.root_folder()?)?;

        ensure!(files == vec![File::new(NodeId::new("doc"))], "{files:?}");
        Ok(())
    }

    #[test]
    fn leading_slash_is_optional() -> Result<()> {
        let store = chain()?;
        let root = store.root_folder()?;

        let relative = resolve_files(&store, "a/b/c/doc.txt", &root)?;
        let absolute = resolve_files(&store, "/a/b/c/doc.txt", &root)?;
        ensure!(relative == absolute);
        Ok(())
    }

    #[test]
    fn names_are_not_globbed() -> Result<()> {
        let store = chain()?;
        let root = store.root_folder()?;

        ensure!(resolve_files(&store, "/a/*/c/doc.txt", &root)?.is_empty());
        ensure!(resolve_folder(&store, "/a/*", &root)?.is_none());
        Ok(())
    }

    #[test]
    fn missing_file_yields_empty() -> Result<()> {
        let store = chain()?;

        ensure!(resolve_files(&store, "/a/b/c/none.txt", &store.root_folder()?)?.is_empty());
        Ok(())
    }

    #[test]
    fn relative_to_start_folder() -> Result<()> {
        let store = chain()?;
        let b = Folder::new(NodeId::new("b"));

        let files = resolve_files(&store, "c/doc.txt", &b)?;
        ensure!(files.len() == 1);
        let top = resolve_files(&store, "doc.txt", &b)?;
        ensure!(top == vec![File::new(NodeId::new("decoy"))]);
        Ok(())
    }

    #[test]
    fn resolves_folder_linearly() -> Result<()> {
        let store = chain()?;
        let folder = resolve_folder(&store, "/a/b/c", &store.root_folder()?)?
            .context("folder should resolve")?;

        ensure!(folder == Folder::new(NodeId::new("c")));
        Ok(())
    }

    #[test]
    fn double_slash_looks_for_empty_name() -> Result<()> {
        let store = chain()?;

        ensure!(resolve_folder(&store, "/a//b", &store.root_folder()?)?.is_none());
        Ok(())
    }

    #[test]
    fn store_errors_propagate() {
        let store = MemoryStore::builder("root", "My Drive").build();
        let ghost = Folder::new(NodeId::new("ghost"));

        assert!(resolve_files(&store, "x/y.txt", &ghost).is_err());
        assert!(resolve_folder(&store, "x", &ghost).is_err());
    }
}
