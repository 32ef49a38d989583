//! Arena-backed in-memory [`NodeStore`].
//!
//! Nodes live in an insertion-ordered map keyed by identifier, with explicit
//! parent and child edge lists, so a node may sit under several folders.
//! Parents must exist before a child is attached, and extra edges added with
//! [`MemoryStoreBuilder::link`] are rejected when they would close a cycle.

use std::collections::HashSet;

use indexmap::IndexMap;
use thiserror::Error;

use super::NodeStore;
use crate::node::{File, Folder, Node, NodeId, NodeKind};

/// Errors raised by [`MemoryStore`] and its builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No node is registered under the identifier.
    #[error("unknown node '{id}'")]
    UnknownNode {
        /// Identifier that failed to resolve.
        id: NodeId,
    },
    /// The identifier is already registered.
    #[error("node '{id}' is already registered")]
    DuplicateNode {
        /// Identifier registered twice.
        id: NodeId,
    },
    /// A file was used where a folder is required.
    #[error("node '{id}' is not a folder")]
    NotAFolder {
        /// Identifier of the offending file.
        id: NodeId,
    },
    /// Linking the nodes would make a folder its own ancestor.
    #[error("linking '{child}' under '{parent}' would create a cycle")]
    Cycle {
        /// Node being attached.
        child: NodeId,
        /// Folder it was attached to.
        parent: NodeId,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    kind: NodeKind,
    parents: Vec<NodeId>,
    children: Vec<NodeId>,
}

/// Incrementally assembles a [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryStoreBuilder {
    root: NodeId,
    entries: IndexMap<NodeId, Entry>,
}

impl MemoryStoreBuilder {
    /// Start a graph containing only the root folder.
    #[must_use]
    pub fn new(root_id: impl Into<NodeId>, root_name: impl Into<String>) -> Self {
        let root = root_id.into();
        let mut entries = IndexMap::new();
        entries.insert(
            root.clone(),
            Entry {
                name: root_name.into(),
                kind: NodeKind::Folder,
                parents: Vec::new(),
                children: Vec::new(),
            },
        );
        Self { root, entries }
    }

    /// Identifier of the root folder.
    #[must_use]
    pub const fn root(&self) -> &NodeId {
        &self.root
    }

    /// Register a folder under each of `parents`.
    ///
    /// A parent listed more than once yields a single edge.
    ///
    /// # Errors
    ///
    /// Fails when `id` is taken, or a parent is unknown or not a folder.
    pub fn folder(
        &mut self,
        id: impl Into<NodeId>,
        name: impl Into<String>,
        parents: &[&NodeId],
    ) -> Result<Folder, StoreError> {
        let id = id.into();
        self.insert(id.clone(), name.into(), NodeKind::Folder, parents)?;
        Ok(Folder::new(id))
    }

    /// Register a file under each of `parents`.
    ///
    /// # Errors
    ///
    /// Fails when `id` is taken, or a parent is unknown or not a folder.
    pub fn file(
        &mut self,
        id: impl Into<NodeId>,
        name: impl Into<String>,
        parents: &[&NodeId],
    ) -> Result<File, StoreError> {
        let id = id.into();
        self.insert(id.clone(), name.into(), NodeKind::File, parents)?;
        Ok(File::new(id))
    }

    /// Add an extra parent edge from `parent` to an existing `child`.
    ///
    /// Linking an existing edge again is a no-op.
    ///
    /// # Errors
    ///
    /// Fails when either node is unknown, `parent` is a file, or `parent` is
    /// reachable from `child`.
    pub fn link(&mut self, child: &NodeId, parent: &NodeId) -> Result<(), StoreError> {
        self.require_folder(parent)?;
        if !self.entries.contains_key(child) {
            return Err(StoreError::UnknownNode { id: child.clone() });
        }
        if self.reaches(child, parent) {
            return Err(StoreError::Cycle {
                child: child.clone(),
                parent: parent.clone(),
            });
        }
        self.attach(child, parent);
        Ok(())
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> MemoryStore {
        MemoryStore {
            root: self.root,
            entries: self.entries,
        }
    }

    fn insert(
        &mut self,
        id: NodeId,
        name: String,
        kind: NodeKind,
        parents: &[&NodeId],
    ) -> Result<(), StoreError> {
        if self.entries.contains_key(&id) {
            return Err(StoreError::DuplicateNode { id });
        }
        for parent in parents {
            self.require_folder(parent)?;
        }
        self.entries.insert(
            id.clone(),
            Entry {
                name,
                kind,
                parents: Vec::new(),
                children: Vec::new(),
            },
        );
        for parent in parents {
            self.attach(&id, parent);
        }
        Ok(())
    }

    fn require_folder(&self, id: &NodeId) -> Result<(), StoreError> {
        match self.entries.get(id) {
            None => Err(StoreError::UnknownNode { id: id.clone() }),
            Some(entry) if entry.kind != NodeKind::Folder => {
                Err(StoreError::NotAFolder { id: id.clone() })
            }
            Some(_) => Ok(()),
        }
    }

    fn attach(&mut self, child: &NodeId, parent: &NodeId) {
        let linked = self
            .entries
            .get(child)
            .is_some_and(|entry| entry.parents.contains(parent));
        if linked {
            return;
        }
        if let Some(entry) = self.entries.get_mut(parent) {
            entry.children.push(child.clone());
        }
        if let Some(entry) = self.entries.get_mut(child) {
            entry.parents.push(parent.clone());
        }
    }

    fn reaches(&self, from: &NodeId, target: &NodeId) -> bool {
        let mut stack = vec![from];
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(entry) = self.entries.get(current) {
                stack.extend(entry.children.iter());
            }
        }
        false
    }
}

/// In-memory node graph implementing [`NodeStore`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    root: NodeId,
    entries: IndexMap<NodeId, Entry>,
}

impl MemoryStore {
    /// Start building a store with the given root folder.
    #[must_use]
    pub fn builder(root_id: impl Into<NodeId>, root_name: impl Into<String>) -> MemoryStoreBuilder {
        MemoryStoreBuilder::new(root_id, root_name)
    }

    /// Look up a node handle by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownNode`] when the identifier is absent.
    pub fn node(&self, id: &NodeId) -> Result<Node, StoreError> {
        let entry = self.entry(id)?;
        Ok(match entry.kind {
            NodeKind::File => Node::File(File::new(id.clone())),
            NodeKind::Folder => Node::Folder(Folder::new(id.clone())),
        })
    }

    /// Number of registered nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the root is registered on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: &NodeId) -> Result<&Entry, StoreError> {
        self.entries
            .get(id)
            .ok_or_else(|| StoreError::UnknownNode { id: id.clone() })
    }

    fn children(
        &self,
        folder: &Folder,
        kind: NodeKind,
        name: Option<&str>,
    ) -> Result<Vec<NodeId>, StoreError> {
        let entry = self.entry(folder.id())?;
        if entry.kind != NodeKind::Folder {
            return Err(StoreError::NotAFolder {
                id: folder.id().clone(),
            });
        }
        let mut matches = Vec::new();
        for child_id in &entry.children {
            let child = self.entry(child_id)?;
            if child.kind == kind && name.is_none_or(|wanted| wanted == child.name) {
                matches.push(child_id.clone());
            }
        }
        Ok(matches)
    }
}

impl NodeStore for MemoryStore {
    type Error = StoreError;

    fn root_folder(&self) -> Result<Folder, Self::Error> {
        Ok(Folder::new(self.root.clone()))
    }

    fn name(&self, node: &NodeId) -> Result<String, Self::Error> {
        self.entry(node).map(|entry| entry.name.clone())
    }

    fn child_folders(
        &self,
        folder: &Folder,
        name: Option<&str>,
    ) -> Result<Vec<Folder>, Self::Error> {
        let ids = self.children(folder, NodeKind::Folder, name)?;
        Ok(ids.into_iter().map(Folder::new).collect())
    }

    fn child_files(&self, folder: &Folder, name: Option<&str>) -> Result<Vec<File>, Self::Error> {
        let ids = self.children(folder, NodeKind::File, name)?;
        Ok(ids.into_iter().map(File::new).collect())
    }

    fn parents(&self, node: &NodeId) -> Result<Vec<Folder>, Self::Error> {
        let entry = self.entry(node)?;
        Ok(entry.parents.iter().cloned().map(Folder::new).collect())
    }
}
