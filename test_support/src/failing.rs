//! A store wrapper that fails whenever a chosen node is touched.

use drivepath::store::StoreError;
use drivepath::{File, Folder, MemoryStore, NodeId, NodeStore};
use thiserror::Error;

/// Failure reported by [`FailingStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectedError {
    /// The poisoned node was queried.
    #[error("injected failure at '{0}'")]
    Injected(NodeId),
    /// The wrapped store failed on its own.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A [`MemoryStore`] that errors on any query naming `poisoned`.
#[derive(Debug, Clone)]
pub struct FailingStore {
    inner: MemoryStore,
    poisoned: NodeId,
}

impl FailingStore {
    /// Wrap `inner`, failing every call that targets `poisoned`.
    #[must_use]
    pub const fn new(inner: MemoryStore, poisoned: NodeId) -> Self {
        Self { inner, poisoned }
    }

    fn check(&self, node: &NodeId) -> Result<(), InjectedError> {
        if *node == self.poisoned {
            return Err(InjectedError::Injected(node.clone()));
        }
        Ok(())
    }
}

impl NodeStore for FailingStore {
    type Error = InjectedError;

    fn root_folder(&self) -> Result<Folder, Self::Error> {
        let root = self.inner.root_folder()?;
        self.check(root.id())?;
        Ok(root)
    }

    fn name(&self, node: &NodeId) -> Result<String, Self::Error> {
        self.check(node)?;
        Ok(self.inner.name(node)?)
    }

    fn child_folders(
        &self,
        folder: &Folder,
        name: Option<&str>,
    ) -> Result<Vec<Folder>, Self::Error> {
        self.check(folder.id())?;
        Ok(self.inner.child_folders(folder, name)?)
    }

    fn child_files(&self, folder: &Folder, name: Option<&str>) -> Result<Vec<File>, Self::Error> {
        self.check(folder.id())?;
        Ok(self.inner.child_files(folder, name)?)
    }

    fn parents(&self, node: &NodeId) -> Result<Vec<Folder>, Self::Error> {
        self.check(node)?;
        Ok(self.inner.parents(node)?)
    }
}
