//! Identity handles for nodes held by a remote store.
//!
//! Handles carry only the opaque identifier issued by the store. Names and
//! edges are always fetched through [`crate::store::NodeStore`], so a handle
//! never goes stale when the remote side renames or re-parents a node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to a node by the storage service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap a raw identifier string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for NodeId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Capability tag distinguishing files from folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A leaf holding content.
    File,
    /// A container of other nodes.
    Folder,
}

/// Handle to a folder node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Folder(NodeId);

impl Folder {
    /// Build a folder handle from its identifier.
    #[must_use]
    pub const fn new(id: NodeId) -> Self {
        Self(id)
    }

    /// Identifier of the folder.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.0
    }
}

/// Handle to a file node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File(NodeId);

impl File {
    /// Build a file handle from its identifier.
    #[must_use]
    pub const fn new(id: NodeId) -> Self {
        Self(id)
    }

    /// Identifier of the file.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        &self.0
    }
}

/// Either kind of node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A file handle.
    File(File),
    /// A folder handle.
    Folder(Folder),
}

impl Node {
    /// Identifier of the wrapped handle.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        match self {
            Self::File(file) => file.id(),
            Self::Folder(folder) => folder.id(),
        }
    }

    /// Capability tag of the wrapped handle.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::File(_) => NodeKind::File,
            Self::Folder(_) => NodeKind::Folder,
        }
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Self::Folder(folder)
    }
}
