//! Normalization of text returned by a generative rewriter, so it can be
//! diffed against its source like any heuristic rewrite.

use serde::{Deserialize, Serialize};

/// Which kind of rewrite produced the text; selects the preamble list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum CleanupStyle {
    #[default]
    Humanized,
    Formal,
}

static HUMANIZED_PREAMBLES: &[&str] = &[
    "Here is the rewritten text:",
    "Here is a rewritten version:",
    "Here's a rewritten version:",
    "Rewritten Text:",
    "Sure, here is the text:",
    "Here is the text:",
];

static FORMAL_PREAMBLES: &[&str] = &[
    "Here is the formal version:",
    "Here is the rewritten text:",
    "Formal Rewritten Text:",
];

impl CleanupStyle {
    fn preambles(self) -> &'static [&'static str] {
        match self {
            Self::Humanized => HUMANIZED_PREAMBLES,
            Self::Formal => FORMAL_PREAMBLES,
        }
    }
}

fn strip_wrapping_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text)
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.len() >= prefix.len()
        && line.is_char_boundary(prefix.len())
        && line[..prefix.len()].eq_ignore_ascii_case(prefix)
}

/// Strip wrapper quotes, a leading "Here is..." line and, for humanized
/// output, a trailing parenthesized note.
pub fn clean_generated_text(raw: &str, style: CleanupStyle) -> String {
    let body = strip_wrapping_quotes(raw.trim());
    let mut lines: Vec<&str> = body.split('\n').collect();

    if let Some(first) = lines.first() {
        let first = first.trim();
        if style
            .preambles()
            .iter()
            .any(|p| starts_with_ignore_case(first, p))
        {
            lines.remove(0);
        }
    }

    if style == CleanupStyle::Humanized {
        if let Some(last) = lines.last() {
            let last = last.trim();
            if last.starts_with('(') && last.ends_with(')') {
                lines.pop();
            }
        }
    }

    let joined = lines.join("\n");
    strip_wrapping_quotes(joined.trim()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quotes_and_preamble() {
        let raw = "  \"Here is the rewritten text:\nWe shipped it on Friday.\"  ";
        assert_eq!(
            clean_generated_text(raw, CleanupStyle::Humanized),
            "We shipped it on Friday."
        );
    }

    #[test]
    fn preamble_match_ignores_case() {
        let raw = "REWRITTEN TEXT: \nShort and plain.";
        assert_eq!(
            clean_generated_text(raw, CleanupStyle::Humanized),
            "Short and plain."
        );
    }

    #[test]
    fn drops_trailing_note_for_humanized_only() {
        let raw = "Body line.\n(Word count: 3)";
        assert_eq!(clean_generated_text(raw, CleanupStyle::Humanized), "Body line.");
        assert_eq!(clean_generated_text(raw, CleanupStyle::Formal), raw);
    }

    #[test]
    fn quotes_inside_a_preamble_are_stripped_after_removal() {
        let raw = "Here is the formal version:\n\"The meeting is postponed.\"";
        assert_eq!(
            clean_generated_text(raw, CleanupStyle::Formal),
            "The meeting is postponed."
        );
    }

    #[test]
    fn lone_quote_is_left_alone() {
        assert_eq!(clean_generated_text("\"", CleanupStyle::Formal), "\"");
    }

    #[test]
    fn plain_text_passes_through() {
        let raw = "Nothing to clean here.";
        assert_eq!(clean_generated_text(raw, CleanupStyle::Humanized), raw);
    }
}
