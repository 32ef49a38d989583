//! The storage-service collaborator consumed by lookup and search.
//!
//! A [`NodeStore`] exposes identity-based navigation only: parents, children
//! and names. Every method is one round trip to the service. Implementations
//! report failures through their own error type, which the lookup layer
//! propagates untouched.

mod cache;
mod memory;
mod snapshot;

pub use cache::{CachingStore, DEFAULT_CACHE_CAPACITY};
pub use memory::{MemoryStore, MemoryStoreBuilder, StoreError};
pub use snapshot::{Snapshot, SnapshotError, SnapshotNode};

use crate::node::{File, Folder, NodeId};

/// Read-only navigation over a remote node graph.
///
/// Enumeration order is whatever the service reports and is not required to
/// be stable between calls.
pub trait NodeStore {
    /// Failure raised by the service.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The root folder of the graph.
    ///
    /// # Errors
    ///
    /// Returns the service error when the root cannot be fetched.
    fn root_folder(&self) -> Result<Folder, Self::Error>;

    /// Display name of a node.
    ///
    /// # Errors
    ///
    /// Returns the service error when the node is unknown or unreadable.
    fn name(&self, node: &NodeId) -> Result<String, Self::Error>;

    /// Child folders of `folder`, restricted to an exact name when given.
    ///
    /// # Errors
    ///
    /// Returns the service error when enumeration fails.
    fn child_folders(&self, folder: &Folder, name: Option<&str>)
    -> Result<Vec<Folder>, Self::Error>;

    /// Child files of `folder`, restricted to an exact name when given.
    ///
    /// # Errors
    ///
    /// Returns the service error when enumeration fails.
    fn child_files(&self, folder: &Folder, name: Option<&str>) -> Result<Vec<File>, Self::Error>;

    /// Every child folder of `folder`.
    ///
    /// # Errors
    ///
    /// Returns the service error when enumeration fails.
    fn all_child_folders(&self, folder: &Folder) -> Result<Vec<Folder>, Self::Error> {
        self.child_folders(folder, None)
    }

    /// Every child file of `folder`.
    ///
    /// # Errors
    ///
    /// Returns the service error when enumeration fails.
    fn all_child_files(&self, folder: &Folder) -> Result<Vec<File>, Self::Error> {
        self.child_files(folder, None)
    }

    /// Folders that list `node` as a child. Empty for the root.
    ///
    /// # Errors
    ///
    /// Returns the service error when the node is unknown or unreadable.
    fn parents(&self, node: &NodeId) -> Result<Vec<Folder>, Self::Error>;
}

impl<S: NodeStore + ?Sized> NodeStore for &S {
    type Error = S::Error;

    fn root_folder(&self) -> Result<Folder, Self::Error> {
        (**self).root_folder()
    }

    fn name(&self, node: &NodeId) -> Result<String, Self::Error> {
        (**self).name(node)
    }

    fn child_folders(
        &self,
        folder: &Folder,
        name: Option<&str>,
    ) -> Result<Vec<Folder>, Self::Error> {
        (**self).child_folders(folder, name)
    }

    fn child_files(&self, folder: &Folder, name: Option<&str>) -> Result<Vec<File>, Self::Error> {
        (**self).child_files(folder, name)
    }

    fn all_child_folders(&self, folder: &Folder) -> Result<Vec<Folder>, Self::Error> {
        (**self).all_child_folders(folder)
    }

    fn all_child_files(&self, folder: &Folder) -> Result<Vec<File>, Self::Error> {
        (**self).all_child_files(folder)
    }

    fn parents(&self, node: &NodeId) -> Result<Vec<Folder>, Self::Error> {
        (**self).parents(node)
    }
}
