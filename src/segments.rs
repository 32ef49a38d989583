//! Splitting of slash-delimited paths and globs into per-level segments.
//!
//! Only one leading `/` is stripped. Empty tokens produced by doubled or
//! trailing slashes are kept and later compared against names literally.

/// Ordered name tokens of a slash-delimited path or glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> PathSegments<'a> {
    /// Split `path` on `/`, dropping the empty token before a leading `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use drivepath::segments::PathSegments;
    ///
    /// let segments = PathSegments::parse("/a/b/c.txt");
    /// assert_eq!(segments.as_slice(), ["a", "b", "c.txt"]);
    /// ```
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        Self {
            segments: trimmed.split('/').collect(),
        }
    }

    /// All segments in order.
    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: splitting yields at least one token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the leading folder segments and the terminal name.
    #[must_use]
    pub fn split_terminal(&self) -> (&[&'a str], &'a str) {
        match self.segments.split_last() {
            Some((last, prefix)) => (prefix, last),
            None => (&[], ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/a/b/c", &["a", "b", "c"])]
    #[case("a/b/c", &["a", "b", "c"])]
    #[case("/a//b", &["a", "", "b"])]
    #[case("//a", &["", "a"])]
    #[case("/a/", &["a", ""])]
    #[case("", &[""])]
    #[case("/", &[""])]
    fn parse_strips_one_leading_slash(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(PathSegments::parse(raw).as_slice(), expected);
    }

    #[test]
    fn split_terminal_separates_file_name() {
        let segments = PathSegments::parse("/a/b/doc.txt");
        let (folders, name) = segments.split_terminal();

        assert_eq!(folders, ["a", "b"]);
        assert_eq!(name, "doc.txt");
    }

    #[test]
    fn split_terminal_with_single_segment_has_no_folders() {
        let segments = PathSegments::parse("doc.txt");
        let (folders, name) = segments.split_terminal();

        assert!(folders.is_empty());
        assert_eq!(name, "doc.txt");
    }
}
