//! LRU memoization layer for any [`NodeStore`].
//!
//! Wrapping a store in [`CachingStore`] saves repeated round trips when one
//! logical search visits the same folder or ancestor more than once. Results
//! are identical with or without the cache. Failed calls are not cached.

use std::{
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard},
};

use lru::LruCache;
use tracing::trace;

use super::NodeStore;
use crate::node::{File, Folder, NodeId};

/// Default number of memoized store responses.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum CacheKey {
    Root,
    Name(NodeId),
    Folders {
        folder: NodeId,
        name: Option<String>,
    },
    Files {
        folder: NodeId,
        name: Option<String>,
    },
    Parents(NodeId),
}

#[derive(Clone, Debug)]
enum CacheEntry {
    Root(Folder),
    Name(String),
    Folders(Vec<Folder>),
    Files(Vec<File>),
}

/// A [`NodeStore`] that memoizes the responses of another store.
#[derive(Debug)]
pub struct CachingStore<S> {
    inner: S,
    cache: Mutex<LruCache<CacheKey, CacheEntry>>,
}

impl<S: NodeStore> CachingStore<S> {
    /// Wrap `inner`, keeping at most `capacity` responses.
    #[must_use]
    pub fn new(inner: S, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Borrow the wrapped store.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the store, discarding memoized responses.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Drop every memoized response.
    pub fn clear(&self) {
        self.lock_cache().clear();
    }

    /// Number of memoized responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_cache().len()
    }

    /// Whether nothing is memoized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_cache().is_empty()
    }

    fn cached<T>(
        &self,
        key: CacheKey,
        extract: fn(CacheEntry) -> Option<T>,
        wrap: fn(T) -> CacheEntry,
        fetch: impl FnOnce() -> Result<T, S::Error>,
    ) -> Result<T, S::Error>
    where
        T: Clone,
    {
        if let Some(hit) = self.try_cache(&key).and_then(extract) {
            return Ok(hit);
        }
        trace!(?key, "store cache miss");
        let value = fetch()?;
        self.lock_cache().put(key, wrap(value.clone()));
        Ok(value)
    }

    fn try_cache(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.lock_cache().get(key).cloned()
    }

    fn lock_cache(&self) -> MutexGuard<'_, LruCache<CacheKey, CacheEntry>> {
        match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<S: NodeStore> NodeStore for CachingStore<S> {
    type Error = S::Error;

    fn root_folder(&self) -> Result<Folder, Self::Error> {
        self.cached(
            CacheKey::Root,
            |entry| match entry {
                CacheEntry::Root(folder) => Some(folder),
                _ => None,
            },
            CacheEntry::Root,
            || self.inner.root_folder(),
        )
    }

    fn name(&self, node: &NodeId) -> Result<String, Self::Error> {
        self.cached(
            CacheKey::Name(node.clone()),
            |entry| match entry {
                CacheEntry::Name(name) => Some(name),
                _ => None,
            },
            CacheEntry::Name,
            || self.inner.name(node),
        )
    }

    fn child_folders(
        &self,
        folder: &Folder,
        name: Option<&str>,
    ) -> Result<Vec<Folder>, Self::Error> {
        self.cached(
            CacheKey::Folders {
                folder: folder.id().clone(),
                name: name.map(str::to_owned),
            },
            extract_folders,
            CacheEntry::Folders,
            || self.inner.child_folders(folder, name),
        )
    }

    fn child_files(&self, folder: &Folder, name: Option<&str>) -> Result<Vec<File>, Self::Error> {
        self.cached(
            CacheKey::Files {
                folder: folder.id().clone(),
                name: name.map(str::to_owned),
            },
            |entry| match entry {
                CacheEntry::Files(files) => Some(files),
                _ => None,
            },
            CacheEntry::Files,
            || self.inner.child_files(folder, name),
        )
    }

    fn parents(&self, node: &NodeId) -> Result<Vec<Folder>, Self::Error> {
        self.cached(
            CacheKey::Parents(node.clone()),
            extract_folders,
            CacheEntry::Folders,
            || self.inner.parents(node),
        )
    }
}

fn extract_folders(entry: CacheEntry) -> Option<Vec<Folder>> {
    match entry {
        CacheEntry::Folders(folders) => Some(folders),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use anyhow::{Context, Result, ensure};

    fn capacity(n: usize) -> Result<NonZeroUsize> {
        NonZeroUsize::new(n).context("capacity must be non-zero")
    }

    fn sample() -> Result<MemoryStore> {
        let mut builder = MemoryStore::builder("root", "My Drive");
        let root = builder.root().clone();
        let docs = builder.folder("docs", "docs", &[&root])?;
        builder.file("readme", "README.md", &[docs.id()])?;
        Ok(builder.build())
    }

    #[test]
    fn cached_responses_match_the_inner_store() -> Result<()> {
        let store = sample()?;
        let cached = CachingStore::new(store.clone(), capacity(16)?);
        let root = store.root_folder()?;

        for _ in 0..2 {
            ensure!(cached.root_folder()? == root);
            ensure!(cached.all_child_folders(&root)? == store.all_child_folders(&root)?);
            ensure!(cached.name(&NodeId::new("readme"))? == "README.md");
            ensure!(cached.parents(&NodeId::new("readme"))? == store.parents(&NodeId::new("readme"))?);
        }
        ensure!(cached.len() == 4, "expected four memoized responses");
        Ok(())
    }

    #[test]
    fn name_filters_are_cached_separately() -> Result<()> {
        let cached = CachingStore::new(sample()?, capacity(16)?);
        let root = cached.root_folder()?;

        ensure!(cached.child_folders(&root, Some("docs"))?.len() == 1);
        ensure!(cached.child_folders(&root, Some("nope"))?.is_empty());
        ensure!(cached.all_child_folders(&root)?.len() == 1);
        ensure!(cached.len() == 4);
        Ok(())
    }

    #[test]
    fn errors_are_not_cached() -> Result<()> {
        let cached = CachingStore::new(sample()?, capacity(16)?);

        ensure!(cached.name(&NodeId::new("ghost")).is_err());
        ensure!(cached.is_empty());
        Ok(())
    }

    #[test]
    fn capacity_bounds_memoized_entries() -> Result<()> {
        let cached = CachingStore::new(sample()?, capacity(1)?);

        cached.name(&NodeId::new("docs"))?;
        cached.name(&NodeId::new("readme"))?;
        ensure!(cached.len() == 1);
        cached.clear();
        ensure!(cached.is_empty());
        Ok(())
    }
}
