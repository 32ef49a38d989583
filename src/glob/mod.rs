//! Compilation of single-segment glob patterns into anchored matchers.
//!
//! Only `*` is a wildcard in [`GlobMode::Basic`]. [`GlobMode::Extended`] also
//! enables `?`, `[...]` character classes and `{a,b}` alternation. A pattern
//! always matches the whole candidate name and never crosses a `/`, since
//! callers compile one path level at a time.
//!
//! Compilation is total. Text that does not translate into a valid expression
//! falls back to matching the segment literally.

mod translate;

use regex::Regex;
use tracing::debug;

use translate::translate;

/// Which glob syntax a segment is compiled with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GlobMode {
    /// `*` is the only wildcard; every other character is literal.
    #[default]
    Basic,
    /// `?`, `[...]` and `{a,b}` are wildcards in addition to `*`.
    Extended,
}

#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    Literal(String),
}

/// A compiled, fully anchored matcher for one path segment.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    mode: GlobMode,
    matcher: Matcher,
}

impl Pattern {
    /// Test whether `candidate` matches the whole pattern.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(regex) => regex.is_match(candidate),
            Matcher::Literal(text) => text == candidate,
        }
    }

    /// The glob text this pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The mode this pattern was compiled with.
    #[must_use]
    pub const fn mode(&self) -> GlobMode {
        self.mode
    }

    /// The anchored regular expression, or `None` after a literal fallback.
    #[must_use]
    pub fn as_regex(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Regex(regex) => Some(regex.as_str()),
            Matcher::Literal(_) => None,
        }
    }

    /// Whether translation failed and the segment is matched verbatim.
    #[must_use]
    pub const fn is_literal_fallback(&self) -> bool {
        matches!(self.matcher, Matcher::Literal(_))
    }
}

/// Compile one glob segment into a [`Pattern`].
///
/// # Examples
///
/// ```
/// use drivepath::glob::{GlobMode, compile};
///
/// let pattern = compile("file.*", GlobMode::Basic);
/// assert!(pattern.is_match("file.txt"));
/// assert!(!pattern.is_match("file"));
///
/// let literal = compile("a?b", GlobMode::Basic);
/// assert!(literal.is_match("a?b"));
/// assert!(!literal.is_match("axb"));
/// ```
#[must_use]
pub fn compile(segment: &str, mode: GlobMode) -> Pattern {
    let anchored = format!("^(?s:{})$", translate(segment, mode));
    let matcher = match Regex::new(&anchored) {
        Ok(regex) => Matcher::Regex(regex),
        Err(err) => {
            debug!(segment, ?mode, %err, "glob segment falls back to a literal match");
            Matcher::Literal(segment.to_owned())
        }
    };
    Pattern {
        source: segment.to_owned(),
        mode,
        matcher,
    }
}

/// Compile `segment` with the default [`GlobMode::Basic`] syntax.
#[must_use]
pub fn compile_basic(segment: &str) -> Pattern {
    compile(segment, GlobMode::default())
}
