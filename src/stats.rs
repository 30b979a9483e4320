use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Character, word, and sentence counts for a passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
}

// Scripts written without spaces between words. Each character is counted as
// one word, which is an approximation and not real segmentation.
static LOGOGRAPHIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Han}\p{Hiragana}\p{Katakana}]").unwrap());

static SENTENCE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?\u{3002}\u{FF01}\u{FF1F}]+").unwrap());

pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        char_count: text.chars().count(),
        word_count: count_words(text),
        sentence_count: count_sentences(text),
    }
}

pub fn count_words(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let logographic = LOGOGRAPHIC_RE.find_iter(trimmed).count();
    if logographic == 0 {
        return trimmed.split_whitespace().count();
    }

    let spaced = LOGOGRAPHIC_RE.replace_all(trimmed, " ");
    logographic + spaced.split_whitespace().count()
}

/// Split on runs of terminal punctuation, dropping blank fragments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    split_sentences(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_has_no_words_or_sentences() {
        for text in ["", "   ", "\n\t "] {
            let stats = text_stats(text);
            assert_eq!(stats.word_count, 0);
            assert_eq!(stats.sentence_count, 0);
        }
    }

    #[test]
    fn counts_whitespace_separated_words() {
        assert_eq!(count_words("  one   two\nthree\tfour "), 4);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(text_stats("héllo").char_count, 5);
    }

    #[test]
    fn sentence_runs_of_punctuation_collapse() {
        let text = "Wait... what?! Really. Yes";
        assert_eq!(split_sentences(text), vec!["Wait", "what", "Really", "Yes"]);
        assert_eq!(count_sentences(text), 4);
    }

    #[test]
    fn full_width_punctuation_splits_sentences() {
        assert_eq!(count_sentences("今天很好。明天呢？太好了！"), 3);
    }

    #[test]
    fn logographic_characters_count_individually() {
        // 4 Han characters plus "hello world"
        assert_eq!(count_words("你好世界 hello world"), 6);
        assert_eq!(count_words("我用Rust写代码"), 6);
    }

    #[test]
    fn punctuation_only_text_has_words_but_no_sentences() {
        let stats = text_stats("...");
        assert_eq!(stats.word_count, 1);
        assert_eq!(stats.sentence_count, 0);
    }
}
