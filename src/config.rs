//! Configuration for [`crate::finder::Finder`].

use std::num::NonZeroUsize;

use crate::glob::GlobMode;
use crate::reconstruct::ParentPolicy;

/// Options controlling glob syntax, ancestor selection and memoization.
///
/// Defaults: [`GlobMode::Basic`], [`ParentPolicy::FirstFound`], no cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinderConfig {
    glob_mode: GlobMode,
    parent_policy: ParentPolicy,
    cache_capacity: Option<NonZeroUsize>,
}

impl FinderConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the glob syntax used by searches.
    #[must_use]
    pub const fn with_glob_mode(mut self, mode: GlobMode) -> Self {
        self.glob_mode = mode;
        self
    }

    /// Override how ancestors are chosen by [`crate::finder::Finder::paths_to`].
    #[must_use]
    pub const fn with_parent_policy(mut self, policy: ParentPolicy) -> Self {
        self.parent_policy = policy;
        self
    }

    /// Memoize up to `capacity` store responses.
    ///
    /// # Errors
    ///
    /// Returns an error when `capacity` is zero.
    pub fn with_cache_capacity(mut self, capacity: usize) -> anyhow::Result<Self> {
        let capacity = NonZeroUsize::new(capacity);
        anyhow::ensure!(capacity.is_some(), "cache capacity must be positive");
        self.cache_capacity = capacity;
        Ok(self)
    }

    /// Disable memoization.
    #[must_use]
    pub const fn without_cache(mut self) -> Self {
        self.cache_capacity = None;
        self
    }

    /// Glob syntax used by searches.
    #[must_use]
    pub const fn glob_mode(&self) -> GlobMode {
        self.glob_mode
    }

    /// Ancestor selection policy.
    #[must_use]
    pub const fn parent_policy(&self) -> ParentPolicy {
        self.parent_policy
    }

    /// Maximum memoized responses, if caching is enabled.
    #[must_use]
    pub const fn cache_capacity(&self) -> Option<NonZeroUsize> {
        self.cache_capacity
    }
}
