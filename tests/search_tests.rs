//! Glob search behaviour across modes and fan-out.

use anyhow::{Context, Result, ensure};
use drivepath::{Finder, FinderConfig, GlobMode, NodeId};
use rstest::rstest;
use test_support::fixtures;

fn ids<'a>(nodes: impl IntoIterator<Item = &'a NodeId>) -> Vec<&'a str> {
    nodes.into_iter().map(NodeId::as_str).collect()
}

fn finder_in<S: drivepath::NodeStore>(store: S, mode: GlobMode) -> Finder<S> {
    Finder::with_config(store, FinderConfig::new().with_glob_mode(mode))
}

#[rstest]
fn star_level_fans_out_to_every_branch() -> Result<()> {
    let finder = Finder::new(fixtures::fanout()?);
    let folders = finder.search_folders("/a/*/c", None)?;

    let found = ids(folders.iter().map(|folder| folder.id()));
    ensure!(found == ["c1", "c2"], "{found:?}");
    Ok(())
}

#[rstest]
fn file_glob_under_wildcard_levels() -> Result<()> {
    let finder = Finder::new(fixtures::fanout()?);
    let files = finder.search_files("/a/b*/c/*.txt", None)?;

    let found = ids(files.iter().map(|file| file.id()));
    ensure!(found == ["r1", "r2"], "{found:?}");
    Ok(())
}

#[rstest]
fn intermediate_match_is_not_a_result() -> Result<()> {
    let finder = Finder::new(fixtures::fanout()?);
    let folders = finder.search_folders("/a/*", None)?;

    let found = ids(folders.iter().map(|folder| folder.id()));
    ensure!(found == ["b1", "b2"], "{found:?}");
    Ok(())
}

#[rstest]
#[case(GlobMode::Basic, &["qlog"])]
#[case(GlobMode::Extended, &["qlog", "alog"])]
fn question_mark_depends_on_mode(#[case] mode: GlobMode, #[case] expected: &[&str]) -> Result<()> {
    let finder = finder_in(fixtures::log_folder()?, mode);
    let files = finder.search_files("/docs/?.log", None)?;

    let found = ids(files.iter().map(|file| file.id()));
    ensure!(found == expected, "{mode:?}: {found:?}");
    Ok(())
}

#[rstest]
#[case(GlobMode::Basic, "/docs/*.log", &["qlog", "alog", "bblog"])]
#[case(GlobMode::Basic, "/docs/*", &["qlog", "alog", "bblog", "notes"])]
#[case(GlobMode::Basic, "/docs/notes.txt", &["notes"])]
#[case(GlobMode::Basic, "/docs/{a,bb}.log", &[])]
#[case(GlobMode::Extended, "/docs/{a,bb}.log", &["alog", "bblog"])]
#[case(GlobMode::Extended, "/docs/[ab]*.log", &["alog", "bblog"])]
#[case(GlobMode::Extended, "/docs/[!ab]*", &["alog", "bblog"])]
fn file_globs_by_mode(
    #[case] mode: GlobMode,
    #[case] glob: &str,
    #[case] expected: &[&str],
) -> Result<()> {
    let finder = finder_in(fixtures::log_folder()?, mode);
    let files = finder.search_files(glob, None)?;

    let found = ids(files.iter().map(|file| file.id()));
    ensure!(found == expected, "{glob} ({mode:?}): {found:?}");
    Ok(())
}

#[rstest]
fn single_segment_searches_start_folder_only() -> Result<()> {
    let finder = Finder::new(fixtures::log_folder()?);
    let docs = finder.resolve_folder("/docs", None)?.context("docs exists")?;

    ensure!(finder.search_files("*.log", None)?.is_empty());
    ensure!(finder.search_files("*.log", Some(&docs))?.len() == 3);
    Ok(())
}

#[rstest]
fn shared_folder_is_reported_per_route() -> Result<()> {
    let finder = Finder::new(fixtures::diamond()?);
    let files = finder.search_files("/*/joint/leaf.txt", None)?;

    let found = ids(files.iter().map(|file| file.id()));
    ensure!(found == ["leaf", "leaf"], "{found:?}");
    Ok(())
}

#[rstest]
fn malformed_extended_glob_matches_literally() -> Result<()> {
    let finder = finder_in(fixtures::log_folder()?, GlobMode::Extended);

    ensure!(finder.search_files("/docs/[a.log", None)?.is_empty());
    Ok(())
}
