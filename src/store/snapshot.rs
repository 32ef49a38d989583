//! Loading of [`MemoryStore`] graphs from JSON or YAML snapshot documents.
//!
//! A snapshot lists the root identifier and every node with its parents.
//! Parents must be declared before the nodes that reference them; document
//! order becomes the store's enumeration order.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::memory::{MemoryStore, StoreError};
use crate::node::{NodeId, NodeKind};

/// Errors raised while reading or assembling a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot '{path}'")]
    Read {
        /// File that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid snapshot JSON.
    #[error("invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// The document is not valid snapshot YAML.
    #[error("invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_saphyr::Error),
    /// The declared root does not appear in the node list.
    #[error("snapshot root '{id}' is not declared")]
    MissingRoot {
        /// Declared root identifier.
        id: NodeId,
    },
    /// The root node is a file or has parents.
    #[error("snapshot root '{id}' must be a folder without parents")]
    InvalidRoot {
        /// Declared root identifier.
        id: NodeId,
    },
    /// A non-root node lists no parents.
    #[error("node '{id}' has no parents")]
    Orphan {
        /// Identifier of the detached node.
        id: NodeId,
    },
    /// The graph could not be assembled.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One node entry of a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    /// Unique identifier.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// File or folder.
    pub kind: NodeKind,
    /// Folders containing this node.
    #[serde(default)]
    pub parents: Vec<NodeId>,
}

/// Serialisable description of a node graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Identifier of the root folder.
    pub root: NodeId,
    /// Every node, root included, parents before children.
    pub nodes: Vec<SnapshotNode>,
}

impl Snapshot {
    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] when the document is malformed.
    pub fn from_json_str(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Yaml`] when the document is malformed.
    pub fn from_yaml_str(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_saphyr::from_str(text)?)
    }

    /// Read a snapshot file, choosing JSON for a `.json` extension and YAML
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, SnapshotError> {
        let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.to_owned(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        debug!(%path, is_json, "loading snapshot");
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Assemble the described graph.
    ///
    /// # Errors
    ///
    /// Fails when the root is missing, malformed or declared twice, an id is
    /// repeated, a node has no parents, or an edge references an undeclared
    /// or non-folder parent. A parent repeated within one node's list yields
    /// a single edge.
    pub fn into_store(self) -> Result<MemoryStore, SnapshotError> {
        let root = self
            .nodes
            .iter()
            .find(|node| node.id == self.root)
            .ok_or_else(|| SnapshotError::MissingRoot {
                id: self.root.clone(),
            })?;
        if root.kind != NodeKind::Folder || !root.parents.is_empty() {
            return Err(SnapshotError::InvalidRoot {
                id: self.root.clone(),
            });
        }
        if self.nodes.iter().filter(|node| node.id == self.root).count() > 1 {
            return Err(StoreError::DuplicateNode {
                id: self.root.clone(),
            }
            .into());
        }
        let mut builder = MemoryStore::builder(self.root.clone(), root.name.clone());
        for node in self.nodes.iter().filter(|node| node.id != self.root) {
            if node.parents.is_empty() {
                return Err(SnapshotError::Orphan {
                    id: node.id.clone(),
                });
            }
            let parents: Vec<&NodeId> = node.parents.iter().collect();
            match node.kind {
                NodeKind::Folder => {
                    builder.folder(node.id.clone(), node.name.clone(), &parents)?;
                }
                NodeKind::File => {
                    builder.file(node.id.clone(), node.name.clone(), &parents)?;
                }
            }
        }
        Ok(builder.build())
    }
}
