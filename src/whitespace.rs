//! Whitespace minification.
//!
//! Both rules replace every maximal whitespace run according to the number of
//! newline characters it contains. They differ only for runs holding two or
//! more newlines:
//!
//! | newlines in run | [`minify_text`] (per node) | [`minify_whitespace`] (whole output) |
//! |-----------------|----------------------------|--------------------------------------|
//! | 0               | `" "`                      | `" "`                                |
//! | 1               | `" "`                      | `"\n"`                               |
//! | 2 or more       | `"\n"`                     | `"\n\n"`                             |

use regex::Captures;

use crate::patterns::WHITESPACE_RUN;

fn newline_count(caps: &Captures) -> usize {
    caps[0].matches('\n').count()
}

/// Collapse whitespace inside a single text node.
///
/// Does not trim: leading and trailing runs become a single separator so
/// adjacent inline content stays separated.
#[must_use]
pub fn minify_text(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text, |caps: &Captures| {
            if newline_count(caps) >= 2 {
                "\n"
            } else {
                " "
            }
        })
        .into_owned()
}

/// Collapse whitespace across the assembled output and trim it.
///
/// Paragraph breaks (two or more newlines) survive as one blank line, single
/// newlines survive as a line break, anything else becomes one space.
#[must_use]
pub fn minify_whitespace(text: &str) -> String {
    WHITESPACE_RUN
        .replace_all(text, |caps: &Captures| match newline_count(caps) {
            0 => " ",
            1 => "\n",
            _ => "\n\n",
        })
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_text_spaces_and_tabs() {
        assert_eq!(minify_text("a  \t b"), "a b");
    }

    #[test]
    fn test_minify_text_single_newline_becomes_space() {
        assert_eq!(minify_text("line one\n   line two"), "line one line two");
    }

    #[test]
    fn test_minify_text_paragraph_break_becomes_newline() {
        assert_eq!(minify_text("first\n\n\nsecond"), "first\nsecond");
        assert_eq!(minify_text("first\n \n second"), "first\nsecond");
    }

    #[test]
    fn test_minify_text_keeps_edges() {
        assert_eq!(minify_text("  padded  "), " padded ");
        assert_eq!(minify_text("\n"), " ");
    }

    #[test]
    fn test_minify_whitespace_rules() {
        assert_eq!(minify_whitespace("a   b"), "a b");
        assert_eq!(minify_whitespace("a \n b"), "a\nb");
        assert_eq!(minify_whitespace("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(minify_whitespace("a \n\t\n b"), "a\n\nb");
    }

    #[test]
    fn test_minify_whitespace_trims() {
        assert_eq!(minify_whitespace("\n\n  Hello  world \n"), "Hello world");
        assert_eq!(minify_whitespace("   "), "");
    }

    #[test]
    fn test_minify_whitespace_unicode_space() {
        assert_eq!(minify_whitespace("a\u{00A0}\u{2003}b"), "a b");
    }

    #[test]
    fn test_minify_whitespace_is_idempotent() {
        let once = minify_whitespace("  a \n\n b\tc \n d  ");
        assert_eq!(minify_whitespace(&once), once);
    }
}
