//! Small node graphs shared by unit and integration tests.
//!
//! Identifiers are chosen so assertions can name nodes directly; display
//! names repeat deliberately where a test needs ambiguity.

use anyhow::Result;
use drivepath::{MemoryStore, NodeId};

/// Shorthand for building a [`NodeId`].
#[must_use]
pub fn id(raw: &str) -> NodeId {
    NodeId::new(raw)
}

/// `a/b/c/doc.txt` under the root.
pub fn nested_chain() -> Result<MemoryStore> {
    let mut builder = MemoryStore::builder("root", "My Drive");
    let root = builder.root().clone();
    builder.folder("a", "a", &[&root])?;
    builder.folder("b", "b", &[&id("a")])?;
    builder.folder("c", "c", &[&id("b")])?;
    builder.file("doc", "doc.txt", &[&id("c")])?;
    Ok(builder.build())
}

/// `a/b1/c` and `a/b2/c`, each `c` holding a `report.txt`.
pub fn fanout() -> Result<MemoryStore> {
    let mut builder = MemoryStore::builder("root", "My Drive");
    let root = builder.root().clone();
    builder.folder("a", "a", &[&root])?;
    builder.folder("b1", "b1", &[&id("a")])?;
    builder.folder("b2", "b2", &[&id("a")])?;
    builder.folder("c1", "c", &[&id("b1")])?;
    builder.folder("c2", "c", &[&id("b2")])?;
    builder.file("r1", "report.txt", &[&id("c1")])?;
    builder.file("r2", "report.txt", &[&id("c2")])?;
    Ok(builder.build())
}

/// Two sibling folders both named `dup`, each holding `same.txt`.
///
/// Only the second `dup` (`dup2`) contains the folder `sub` with `target.txt`.
pub fn twin_folders() -> Result<MemoryStore> {
    let mut builder = MemoryStore::builder("root", "My Drive");
    let root = builder.root().clone();
    builder.folder("dup1", "dup", &[&root])?;
    builder.folder("dup2", "dup", &[&root])?;
    builder.file("same1", "same.txt", &[&id("dup1")])?;
    builder.file("same2", "same.txt", &[&id("dup2")])?;
    builder.folder("sub", "sub", &[&id("dup2")])?;
    builder.file("target", "target.txt", &[&id("sub")])?;
    Ok(builder.build())
}

/// `docs` holding `?.log`, `a.log`, `bb.log` and `notes.txt`.
pub fn log_folder() -> Result<MemoryStore> {
    let mut builder = MemoryStore::builder("root", "My Drive");
    let root = builder.root().clone();
    builder.folder("docs", "docs", &[&root])?;
    builder.file("qlog", "?.log", &[&id("docs")])?;
    builder.file("alog", "a.log", &[&id("docs")])?;
    builder.file("bblog", "bb.log", &[&id("docs")])?;
    builder.file("notes", "notes.txt", &[&id("docs")])?;
    Ok(builder.build())
}

/// `left/joint` and `right/joint` share one `joint` folder holding
/// `leaf.txt`.
pub fn diamond() -> Result<MemoryStore> {
    let mut builder = MemoryStore::builder("root", "My Drive");
    let root = builder.root().clone();
    builder.folder("left", "left", &[&root])?;
    builder.folder("right", "right", &[&root])?;
    builder.folder("joint", "joint", &[&id("left"), &id("right")])?;
    builder.file("leaf", "leaf.txt", &[&id("joint")])?;
    Ok(builder.build())
}
