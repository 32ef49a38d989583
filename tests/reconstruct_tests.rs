//! Path reconstruction from node identifiers.

use anyhow::Result;
use drivepath::runner::render_path;
use drivepath::{Finder, FinderConfig, NodeStore, ParentPolicy};
use rstest::rstest;
use test_support::fixtures::{self, id};

#[rstest]
#[case("root", &[])]
#[case("a", &[])]
#[case("b", &["a"])]
#[case("c", &["a", "b"])]
#[case("doc", &["a", "b", "c"])]
fn path_to_excludes_root_and_self(#[case] node: &str, #[case] expected: &[&str]) -> Result<()> {
    let finder = Finder::new(fixtures::nested_chain()?);

    assert_eq!(finder.path_to(&id(node))?, expected);
    Ok(())
}

#[rstest]
fn rendered_path_round_trips_through_resolve() -> Result<()> {
    let finder = Finder::new(fixtures::nested_chain()?);
    let doc = id("doc");
    let rendered = render_path(&finder.path_to(&doc)?, &finder.store().name(&doc)?);

    assert_eq!(rendered, "/a/b/c/doc.txt");
    let files = finder.resolve_files(&rendered, None)?;
    assert_eq!(files.iter().map(|file| file.id()).collect::<Vec<_>>(), [&doc]);
    Ok(())
}

#[rstest]
#[case(ParentPolicy::FirstFound, 1)]
#[case(ParentPolicy::AllPaths, 2)]
fn parent_policy_controls_chain_count(
    #[case] policy: ParentPolicy,
    #[case] expected: usize,
) -> Result<()> {
    let config = FinderConfig::new().with_parent_policy(policy);
    let finder = Finder::with_config(fixtures::diamond()?, config);
    let paths = finder.paths_to(&id("leaf"))?;

    assert_eq!(paths.len(), expected);
    assert_eq!(paths.first().map(Vec::len), Some(2));
    Ok(())
}

#[rstest]
fn twin_names_reconstruct_identically() -> Result<()> {
    let finder = Finder::new(fixtures::twin_folders()?);

    assert_eq!(finder.path_to(&id("same1"))?, finder.path_to(&id("same2"))?);
    Ok(())
}
