//! Drivepath core library.
//!
//! Storage services such as cloud drives address nodes by identifier and
//! expose only parent/child navigation. This library layers unix-style paths
//! and shell-style globs on top of such a service, described by the
//! [`store::NodeStore`] trait: exact path resolution, glob search, and
//! reconstruction of a readable path from any node.

pub mod cli;
pub mod config;
pub mod finder;
pub mod glob;
pub mod node;
pub mod reconstruct;
pub mod resolve;
pub mod runner;
pub mod search;
pub mod segments;
pub mod store;

pub use config::FinderConfig;
pub use finder::Finder;
pub use glob::{GlobMode, Pattern, compile};
pub use node::{File, Folder, Node, NodeId, NodeKind};
pub use reconstruct::ParentPolicy;
pub use store::{MemoryStore, NodeStore};
