//! A store wrapper that counts round trips.

use std::cell::Cell;

use drivepath::{File, Folder, NodeId, NodeStore};

/// Number of calls made per store method.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    /// Calls to `root_folder`.
    pub root: usize,
    /// Calls to `name`.
    pub name: usize,
    /// Calls to `child_folders`, including unfiltered enumeration.
    pub child_folders: usize,
    /// Calls to `child_files`, including unfiltered enumeration.
    pub child_files: usize,
    /// Calls to `parents`.
    pub parents: usize,
}

impl CallCounts {
    /// Sum over every method.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.root + self.name + self.child_folders + self.child_files + self.parents
    }
}

/// Delegates to an inner store while counting calls.
#[derive(Debug)]
pub struct CountingStore<S> {
    inner: S,
    counts: Cell<CallCounts>,
}

impl<S> CountingStore<S> {
    /// Wrap `inner` with zeroed counters.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            counts: Cell::new(CallCounts::default()),
        }
    }

    /// Counters accumulated so far.
    #[must_use]
    pub fn counts(&self) -> CallCounts {
        self.counts.get()
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.counts.set(CallCounts::default());
    }

    fn bump(&self, update: impl FnOnce(&mut CallCounts)) {
        let mut counts = self.counts.get();
        update(&mut counts);
        self.counts.set(counts);
    }
}

impl<S: NodeStore> NodeStore for CountingStore<S> {
    type Error = S::Error;

    fn root_folder(&self) -> Result<Folder, Self::Error> {
        self.bump(|c| c.root += 1);
        self.inner.root_folder()
    }

    fn name(&self, node: &NodeId) -> Result<String, Self::Error> {
        self.bump(|c| c.name += 1);
        self.inner.name(node)
    }

    fn child_folders(
        &self,
        folder: &Folder,
        name: Option<&str>,
    ) -> Result<Vec<Folder>, Self::Error> {
        self.bump(|c| c.child_folders += 1);
        self.inner.child_folders(folder, name)
    }

    fn child_files(&self, folder: &Folder, name: Option<&str>) -> Result<Vec<File>, Self::Error> {
        self.bump(|c| c.child_files += 1);
        self.inner.child_files(folder, name)
    }

    fn parents(&self, node: &NodeId) -> Result<Vec<Folder>, Self::Error> {
        self.bump(|c| c.parents += 1);
        self.inner.parents(node)
    }
}
