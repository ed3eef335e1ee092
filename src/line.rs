//! Line classification for INI-like config text.
//!
//! Both the preset parser and the merge engine need to answer the same
//! question about every line: is it a section header, a key-value pair, or
//! something to pass through untouched? This module makes those three kinds
//! an explicit closed set so the two passes cannot drift apart.
//!
//! Classification looks at the line with surrounding whitespace and the
//! terminator trimmed off, in order:
//!
//! 1. **Header** — starts with `[`, ends with `]`, with at least one
//!    character between the brackets. No nesting, no escaping.
//! 2. **Key-value** — contains `=` and does not start with `#`. The key is
//!    the text before the first `=`, trimmed.
//! 3. **Other** — comments, blank lines, free text. Never parsed further.
//!
//! A header line that happens to contain `=` is still a header; the checks
//! are ordered.

/// The three kinds of line an INI-like file can contain.
///
/// Borrowed slices point into the line passed to [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A section header, e.g. `[git_branch]`. Holds the trimmed header text,
    /// brackets included.
    Header(&'a str),
    /// A key-value pair. Holds the trimmed key (text before the first `=`).
    KeyValue { key: &'a str },
    /// Anything else: comments, blank lines, free text.
    Other,
}

/// Classify a single line. `line` may carry its terminator; it is ignored.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.len() > 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
        return LineKind::Header(trimmed);
    }

    if trimmed.starts_with('#') {
        return LineKind::Other;
    }

    match line.split_once('=') {
        Some((before, _)) => LineKind::KeyValue {
            key: before.trim(),
        },
        None => LineKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line() {
        assert_eq!(classify("[git_branch]"), LineKind::Header("[git_branch]"));
    }

    #[test]
    fn header_line_with_surrounding_whitespace() {
        assert_eq!(classify("  [aws]  \n"), LineKind::Header("[aws]"));
    }

    #[test]
    fn header_containing_equals_is_still_a_header() {
        assert_eq!(classify("[a=b]"), LineKind::Header("[a=b]"));
    }

    #[test]
    fn empty_brackets_are_not_a_header() {
        assert_eq!(classify("[]"), LineKind::Other);
    }

    #[test]
    fn unclosed_bracket_with_equals_is_key_value() {
        assert_eq!(classify("[weird = value"), LineKind::KeyValue { key: "[weird" });
    }

    #[test]
    fn key_value_with_spaces() {
        assert_eq!(classify("symbol = \" \""), LineKind::KeyValue { key: "symbol" });
    }

    #[test]
    fn key_value_without_spaces() {
        assert_eq!(classify("style=bold\n"), LineKind::KeyValue { key: "style" });
    }

    #[test]
    fn key_is_split_on_first_equals_only() {
        assert_eq!(classify("format = a=b=c"), LineKind::KeyValue { key: "format" });
    }

    #[test]
    fn comment_is_other_even_with_equals() {
        assert_eq!(classify("# symbol = hidden"), LineKind::Other);
    }

    #[test]
    fn indented_comment_is_other() {
        assert_eq!(classify("   # note"), LineKind::Other);
    }

    #[test]
    fn blank_line_is_other() {
        assert_eq!(classify(""), LineKind::Other);
        assert_eq!(classify("\n"), LineKind::Other);
    }

    #[test]
    fn free_text_is_other() {
        assert_eq!(classify("no delimiter here"), LineKind::Other);
    }
}
