//! Entry point bundling a store with lookup configuration.
//!
//! [`Finder`] exposes path resolution, glob search and path reconstruction
//! with an optional start folder; `None` starts from the store's root.

use crate::config::FinderConfig;
use crate::node::{File, Folder, NodeId};
use crate::store::NodeStore;
use crate::{reconstruct, resolve, search};

/// Path and glob lookups over one [`NodeStore`].
#[derive(Debug)]
pub struct Finder<S> {
    store: S,
    config: FinderConfig,
}

impl<S: NodeStore> Finder<S> {
    /// Wrap `store` with default configuration.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, FinderConfig::default())
    }

    /// Wrap `store` with `config`.
    ///
    /// The cache capacity in `config` is not applied here; wrap `store` in a
    /// [`crate::store::CachingStore`] to memoize responses.
    #[must_use]
    pub const fn with_config(store: S, config: FinderConfig) -> Self {
        Self { store, config }
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Files along the exact `path`, across all same-named branches.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn resolve_files(&self, path: &str, start: Option<&Folder>) -> Result<Vec<File>, S::Error> {
        let start = self.start(start)?;
        resolve::resolve_files(&self.store, path, &start)
    }

    /// Folder at the exact `path`, following first matches only.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn resolve_folder(
        &self,
        path: &str,
        start: Option<&Folder>,
    ) -> Result<Option<Folder>, S::Error> {
        let start = self.start(start)?;
        resolve::resolve_folder(&self.store, path, &start)
    }

    /// Files matching `glob` under the configured glob mode.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn search_files(&self, glob: &str, start: Option<&Folder>) -> Result<Vec<File>, S::Error> {
        let start = self.start(start)?;
        search::search_files(&self.store, glob, &start, self.config.glob_mode())
    }

    /// Folders matching `glob` under the configured glob mode.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn search_folders(
        &self,
        glob: &str,
        start: Option<&Folder>,
    ) -> Result<Vec<Folder>, S::Error> {
        let start = self.start(start)?;
        search::search_folders(&self.store, glob, &start, self.config.glob_mode())
    }

    /// Ancestor names of `node` along first-reported parents.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn path_to(&self, node: &NodeId) -> Result<Vec<String>, S::Error> {
        reconstruct::path_to(&self.store, node)
    }

    /// Ancestor paths of `node` under the configured parent policy.
    ///
    /// # Errors
    ///
    /// Propagates store failures unchanged.
    pub fn paths_to(&self, node: &NodeId) -> Result<Vec<Vec<String>>, S::Error> {
        reconstruct::paths_to(&self.store, node, self.config.parent_policy())
    }

    fn start(&self, start: Option<&Folder>) -> Result<Folder, S::Error> {
        match start {
            Some(folder) => Ok(folder.clone()),
            None => self.store.root_folder(),
        }
    }
}
