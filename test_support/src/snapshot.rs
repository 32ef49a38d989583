//! Snapshot files for CLI tests.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use tempfile::TempDir;

/// YAML snapshot mirroring a small drive:
///
/// ```text
/// My Drive/
///   docs/   ?.log  a.log  bb.log
///   a/b1/c/ report.txt
///   a/b2/c/ report.txt
///   dup/    (twice; only the second holds sub/)
///   shared/ linked under both docs and a
/// ```
pub const SAMPLE_YAML: &str = "\
root: root
nodes:
  - {id: root, name: My Drive, kind: folder}
  - {id: docs, name: docs, kind: folder, parents: [root]}
  - {id: qlog, name: '?.log', kind: file, parents: [docs]}
  - {id: alog, name: a.log, kind: file, parents: [docs]}
  - {id: bblog, name: bb.log, kind: file, parents: [docs]}
  - {id: a, name: a, kind: folder, parents: [root]}
  - {id: b1, name: b1, kind: folder, parents: [a]}
  - {id: b2, name: b2, kind: folder, parents: [a]}
  - {id: c1, name: c, kind: folder, parents: [b1]}
  - {id: c2, name: c, kind: folder, parents: [b2]}
  - {id: r1, name: report.txt, kind: file, parents: [c1]}
  - {id: r2, name: report.txt, kind: file, parents: [c2]}
  - {id: dup1, name: dup, kind: folder, parents: [root]}
  - {id: dup2, name: dup, kind: folder, parents: [root]}
  - {id: sub, name: sub, kind: folder, parents: [dup2]}
  - {id: shared, name: shared, kind: folder, parents: [docs, a]}
";

/// Write `contents` to `file_name` inside a fresh temporary directory.
///
/// Returns the directory guard and the file path.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be created.
pub fn write_snapshot(file_name: &str, contents: &str) -> Result<(TempDir, Utf8PathBuf)> {
    let dir = tempfile::tempdir().context("create snapshot temp dir")?;
    let path = Utf8PathBuf::try_from(dir.path().join(file_name))
        .context("temp dir path must be UTF-8")?;
    std::fs::write(&path, contents).with_context(|| format!("write snapshot {path}"))?;
    Ok((dir, path))
}
