//! Argument parsing and configuration mapping for the CLI.

use anyhow::{Context, Result, ensure};
use clap::Parser;
use drivepath::cli::{Cli, Commands};
use drivepath::{GlobMode, ParentPolicy};
use rstest::rstest;

fn parse(args: &[&str]) -> Result<Cli> {
    Cli::try_parse_from(std::iter::once("drivepath").chain(args.iter().copied()))
        .context("arguments should parse")
}

#[rstest]
#[case(&["-s", "d.yml", "files", "/a/b.txt"], Commands::Files { path: "/a/b.txt".to_owned() })]
#[case(&["-s", "d.yml", "folder", "/a"], Commands::Folder { path: "/a".to_owned() })]
#[case(&["-s", "d.yml", "find-files", "*.log"], Commands::FindFiles { glob: "*.log".to_owned() })]
#[case(&["-s", "d.yml", "find-folders", "/a/*"], Commands::FindFolders { glob: "/a/*".to_owned() })]
#[case(
    &["-s", "d.yml", "path-to", "abc", "--all-paths"],
    Commands::PathTo { id: "abc".to_owned(), all_paths: true }
)]
fn subcommands_parse(#[case] args: &[&str], #[case] expected: Commands) -> Result<()> {
    let cli = parse(args)?;

    ensure!(cli.command == expected, "{:?}", cli.command);
    Ok(())
}

#[rstest]
fn defaults_are_basic_uncached_first_found() -> Result<()> {
    let config = parse(&["--snapshot", "d.yml", "files", "x"])?.finder_config()?;

    ensure!(config.glob_mode() == GlobMode::Basic);
    ensure!(config.parent_policy() == ParentPolicy::FirstFound);
    ensure!(config.cache_capacity().is_none());
    Ok(())
}

#[rstest]
fn flags_map_onto_config() -> Result<()> {
    let cli = parse(&[
        "-s", "d.yml", "-x", "--cache=32", "--from", "/docs", "path-to", "n", "--all-paths",
    ])?;
    let config = cli.finder_config()?;

    ensure!(config.glob_mode() == GlobMode::Extended);
    ensure!(config.parent_policy() == ParentPolicy::AllPaths);
    ensure!(config.cache_capacity().map(std::num::NonZeroUsize::get) == Some(32));
    ensure!(cli.from.as_deref() == Some("/docs"));
    Ok(())
}

#[rstest]
#[case(&["-s", "d.yml", "--cache", "files", "x"])]
#[case(&["-s", "d.yml", "--cache", "-v", "files", "x"])]
fn bare_cache_flag_uses_default_capacity(#[case] args: &[&str]) -> Result<()> {
    let cli = parse(args)?;
    let config = cli.finder_config()?;

    ensure!(cli.command == Commands::Files { path: "x".to_owned() });
    ensure!(
        config.cache_capacity().map(std::num::NonZeroUsize::get)
            == Some(drivepath::store::DEFAULT_CACHE_CAPACITY)
    );
    Ok(())
}

#[rstest]
fn detached_cache_value_is_not_consumed() {
    assert!(parse(&["-s", "d.yml", "--cache", "16", "files", "x"]).is_err());
}

#[rstest]
fn zero_cache_is_rejected() -> Result<()> {
    let cli = parse(&["-s", "d.yml", "--cache=0", "files", "x"])?;

    ensure!(cli.finder_config().is_err());
    Ok(())
}

#[rstest]
#[case(&["files", "x"])]
#[case(&["-s", "d.yml"])]
#[case(&["-s", "d.yml", "path-to"])]
fn incomplete_invocations_fail(#[case] args: &[&str]) {
    assert!(parse(args).is_err());
}
