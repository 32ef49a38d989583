//! Rebuilding readable paths by ascending parent edges.
//!
//! A node may have several parents, so a single path is only one of
//! potentially many. [`ParentPolicy`] chooses between following the first
//! parent the store reports and enumerating every chain up to the root.
//! Paths exclude the root's own name and the node's own name.

use tracing::debug;

use crate::node::{Folder, NodeId};
use crate::store::NodeStore;

/// How ancestors are chosen when a node has several parents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParentPolicy {
    /// Follow whichever parent the store lists first.
    #[default]
    FirstFound,
    /// Follow every parent, yielding one path per chain of edges.
    AllPaths,
}

/// Ancestor names of `node`, from just below the root to its direct parent.
///
/// Only the first parent reported at each level is followed. The result is
/// empty for the root and for the root's direct children.
///
/// # Errors
///
/// Propagates the first store failure unchanged.
pub fn path_to<S: NodeStore>(store: &S, node: &NodeId) -> Result<Vec<String>, S::Error> {
    let mut names = Vec::new();
    let mut current = first_parent(store, node)?;
    while let Some(parent) = current {
        let above = first_parent(store, parent.id())?;
        if above.is_none() {
            break;
        }
        names.push(store.name(parent.id())?);
        current = above;
    }
    names.reverse();
    debug!(%node, depth = names.len(), "reconstructed path");
    Ok(names)
}

/// Ancestor paths of `node` under `policy`.
///
/// [`ParentPolicy::FirstFound`] always yields exactly one path, identical to
/// [`path_to`]. [`ParentPolicy::AllPaths`] yields one path per distinct chain
/// of parent edges, in store enumeration order.
///
/// # Errors
///
/// Propagates the first store failure unchanged.
pub fn paths_to<S: NodeStore>(
    store: &S,
    node: &NodeId,
    policy: ParentPolicy,
) -> Result<Vec<Vec<String>>, S::Error> {
    match policy {
        ParentPolicy::FirstFound => Ok(vec![path_to(store, node)?]),
        ParentPolicy::AllPaths => {
            let parents = store.parents(node)?;
            if parents.is_empty() {
                return Ok(vec![Vec::new()]);
            }
            let mut paths = Vec::new();
            for parent in &parents {
                paths.extend(named_chains(store, parent)?);
            }
            Ok(paths)
        }
    }
}

fn first_parent<S: NodeStore>(store: &S, node: &NodeId) -> Result<Option<Folder>, S::Error> {
    Ok(store.parents(node)?.into_iter().next())
}

/// Every root-to-`folder` chain, each ending with the folder's own name.
fn named_chains<S: NodeStore>(store: &S, folder: &Folder) -> Result<Vec<Vec<String>>, S::Error> {
    let parents = store.parents(folder.id())?;
    if parents.is_empty() {
        return Ok(vec![Vec::new()]);
    }
    let name = store.name(folder.id())?;
    let mut chains = Vec::new();
    for parent in &parents {
        for mut chain in named_chains(store, parent)? {
            chain.push(name.clone());
            chains.push(chain);
        }
    }
    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use anyhow::{Result, ensure};

    fn id(raw: &str) -> NodeId {
        NodeId::new(raw)
    }

    /// Diamond: `root/{left,right}/joint/leaf.txt`.
    fn diamond() -> Result<MemoryStore> {
        let mut builder = MemoryStore::builder("root", "My Drive");
        let root = builder.root().clone();
        builder.folder("left", "left", &[&root])?;
        builder.folder("right", "right", &[&root])?;
        builder.folder("joint", "joint", &[&id("left"), &id("right")])?;
        builder.file("leaf", "leaf.txt", &[&id("joint")])?;
        Ok(builder.build())
    }

    #[test]
    fn root_and_direct_children_have_empty_paths() -> Result<()> {
        let store = diamond()?;

        ensure!(path_to(&store, &id("root"))?.is_empty());
        ensure!(path_to(&store, &id("left"))?.is_empty());
        Ok(())
    }

    #[test]
    fn first_found_follows_first_parent() -> Result<()> {
        let store = diamond()?;

        ensure!(path_to(&store, &id("joint"))? == vec!["left".to_owned()]);
        ensure!(path_to(&store, &id("leaf"))? == vec!["left".to_owned(), "joint".to_owned()]);
        Ok(())
    }

    #[test]
    fn all_paths_enumerates_each_chain() -> Result<()> {
        let store = diamond()?;
        let paths = paths_to(&store, &id("leaf"), ParentPolicy::AllPaths)?;

        ensure!(
            paths
                == vec![
                    vec!["left".to_owned(), "joint".to_owned()],
                    vec!["right".to_owned(), "joint".to_owned()],
                ],
            "{paths:?}"
        );
        Ok(())
    }

    #[test]
    fn policies_agree_on_single_parent_chains() -> Result<()> {
        let store = diamond()?;

        for node in ["root", "left"] {
            let first = paths_to(&store, &id(node), ParentPolicy::FirstFound)?;
            let all = paths_to(&store, &id(node), ParentPolicy::AllPaths)?;
            ensure!(first == all, "{node}: {first:?} vs {all:?}");
        }
        Ok(())
    }

    #[test]
    fn unknown_node_is_an_error() {
        let store = MemoryStore::builder("root", "My Drive").build();

        assert!(path_to(&store, &id("ghost")).is_err());
        assert!(paths_to(&store, &id("ghost"), ParentPolicy::AllPaths).is_err());
    }
}
