//! Path segmentation on a single separator character.

/// Split `path` into its ordered segments.
///
/// The empty path yields no segments. Every other input follows exact
/// split-on-separator semantics: a trailing separator produces a trailing
/// empty segment, which is preserved rather than trimmed, and consecutive
/// separators produce empty segments in between. Segments borrow from the
/// input string.
///
/// # Examples
///
/// ```
/// use treeline::segment::split;
///
/// assert_eq!(split("a/b/c", '/'), vec!["a", "b", "c"]);
/// assert_eq!(split("a/b/", '/'), vec!["a", "b", ""]);
/// assert!(split("", '/').is_empty());
/// ```
pub fn split(path: &str, separator: char) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(separator).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_yields_no_segments() {
        assert!(split("", '/').is_empty());
    }

    #[test]
    fn single_segment_without_separator() {
        assert_eq!(split("src", '/'), vec!["src"]);
    }

    #[test]
    fn splits_on_configured_separator() {
        assert_eq!(split("a/b/c", '/'), vec!["a", "b", "c"]);
        assert_eq!(split("a\\b", '\\'), vec!["a", "b"]);
    }

    #[test]
    fn trailing_separator_is_preserved() {
        assert_eq!(split("a/b/", '/'), vec!["a", "b", ""]);
    }

    #[test]
    fn separator_only_path_follows_split_semantics() {
        assert_eq!(split("/", '/'), vec!["", ""]);
    }

    #[test]
    fn consecutive_separators_keep_empty_segments() {
        assert_eq!(split("a//b", '/'), vec!["a", "", "b"]);
    }
}
