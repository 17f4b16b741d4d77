//! Usage-block extraction from docstrings.
//!
//! Docstrings may carry one hand-written `**Usage**` section: the literal
//! marker line, an intervening line, then a 4-space-indented call example
//! terminated by a line that is exactly the indent plus a closing
//! parenthesis. Downstream docstrings are authored against this precise
//! contract, so the boundary rules must not be loosened: an example that
//! does not end in a closing-parenthesis line at the base indent never
//! matches and callers fall back to the default output.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static USAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\n\n?\*\*Usage\*\*.+?\n(?P<usage>\s{4}\w.*?\n\s{4}\))").unwrap()
});

/// Find the first Usage block in a docstring.
///
/// Returns the raw matched block, still carrying its 4-space indent;
/// callers use [`dedent`] before reuse. Returns `None` when the marker is
/// absent or the block is malformed.
///
/// # Example
///
/// ```
/// use qref_render::{dedent, find_usage};
///
/// let docstring = "Scatter plot.\n\n**Usage**\n\n    foo(\n        x=1,\n    )";
/// let usage = find_usage(docstring).unwrap();
/// assert_eq!(dedent(usage), "foo(\n    x=1,\n)");
/// ```
#[must_use]
pub fn find_usage(docstring: &str) -> Option<&str> {
    USAGE_PATTERN
        .captures(docstring)
        .and_then(|captures| captures.name("usage"))
        .map(|m| m.as_str())
}

/// Remove Usage sections (marker through closing-parenthesis line) from text.
///
/// Text without a recognizable section is returned unchanged.
#[must_use]
pub fn strip_usage(text: &str) -> Cow<'_, str> {
    USAGE_PATTERN.replace_all(text, "")
}

/// Remove the longest common leading-whitespace prefix from every line.
///
/// The margin is a prefix string, not a character count: lines indented
/// with different whitespace (tabs vs spaces) share no margin and stay
/// unchanged. Whitespace-only lines are normalized to empty lines and do
/// not count towards the margin.
#[must_use]
pub fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }
    let margin = margin.unwrap_or("");

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.trim().is_empty() {
            out.push_str(line.strip_prefix(margin).unwrap_or(line));
        }
    }
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Longest common prefix of two strings, on character boundaries.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .take_while(|&((_, ca), cb)| ca == cb)
        .last()
        .map_or(0, |((i, ca), _)| i + ca.len_utf8());
    &a[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_usage_returns_indented_block() {
        let docstring = "Scatter plot.\n\n**Usage**\n\n    geom_point(\n        mapping=None,\n    )\n\nDetails.";
        assert_eq!(
            find_usage(docstring),
            Some("    geom_point(\n        mapping=None,\n    )")
        );
    }

    #[test]
    fn test_find_usage_dedented_matches_contract() {
        let docstring = "Intro.\n\n**Usage**\n\n    foo(\n        x=1,\n    )";
        let usage = find_usage(docstring).unwrap();
        assert_eq!(dedent(usage), "foo(\n    x=1,\n)");
    }

    #[test]
    fn test_find_usage_absent_marker() {
        assert_eq!(find_usage("Scatter plot with no example."), None);
    }

    #[test]
    fn test_find_usage_requires_closing_paren_line() {
        // A bare expression without the base-indent `)` line never matches.
        let docstring = "Intro.\n\n**Usage**\n\n    geom_point(mapping)\n\nDetails.";
        assert_eq!(find_usage(docstring), None);
    }

    #[test]
    fn test_find_usage_marker_at_start_of_text() {
        // The marker must follow a newline; a docstring opening with it is
        // not recognized.
        let docstring = "**Usage**\n\n    foo(\n    )";
        assert_eq!(find_usage(docstring), None);
    }

    #[test]
    fn test_find_usage_first_occurrence_only() {
        let docstring = "Intro.\n\n**Usage**\n\n    first(\n    )\n\n**Usage**\n\n    second(\n    )";
        assert_eq!(find_usage(docstring), Some("    first(\n    )"));
    }

    #[test]
    fn test_strip_usage_removes_section() {
        let text = "Intro text.\n\n**Usage**\n\n    geom_point(\n        mapping=None,\n    )\n\nDetails.";
        assert_eq!(strip_usage(text), "Intro text.\n\nDetails.");
    }

    #[test]
    fn test_strip_usage_without_section_is_borrowed() {
        let text = "Plain body with no example.";
        assert!(matches!(strip_usage(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_dedent_plain_text_unchanged() {
        assert_eq!(dedent("foo(\nbar\n)"), "foo(\nbar\n)");
    }

    #[test]
    fn test_dedent_blank_lines_do_not_set_margin() {
        assert_eq!(dedent("    a\n\n    b"), "a\n\nb");
    }

    #[test]
    fn test_dedent_preserves_trailing_newline() {
        assert_eq!(dedent("    a\n"), "a\n");
    }

    #[test]
    fn test_dedent_mixed_width_whitespace_does_not_panic() {
        // Docstrings are opaque upstream text; the extractor's whitespace
        // class admits multi-byte characters like no-break spaces, so the
        // margin must stay on character boundaries.
        let docstring = "Intro.\n\n**Usage**\n\n    x(\n \u{a0}\u{a0}q\n    )";
        let usage = find_usage(docstring).unwrap();
        assert_eq!(dedent(usage), "   x(\n\u{a0}\u{a0}q\n   )");
    }

    #[test]
    fn test_dedent_mixed_tabs_and_spaces_share_no_margin() {
        assert_eq!(dedent("\tfoo(\n    x\n\t)"), "\tfoo(\n    x\n\t)");
    }
}
