use rand::seq::SliceRandom;
use rand::Rng;

use crate::analyze::{FlaggedPhrase, HP};
use crate::lexicon;

/// What the scorer learned about a passage, as seen by the suggestion ranker.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInputs<'a> {
    pub flagged_phrases: &'a [FlaggedPhrase],
    pub avg_len: f64,
    pub variance: f64,
    pub word_count: usize,
}

/// Ordered, duplicate-free, capped list.
struct SuggestionList {
    items: Vec<String>,
    cap: usize,
}

impl SuggestionList {
    fn new(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    fn push(&mut self, suggestion: &str) {
        if self.is_full() || self.items.iter().any(|s| s == suggestion) {
            return;
        }
        self.items.push(suggestion.to_string());
    }
}

/// Rank improvement hints: trigger-specific advice first, then rhythm and
/// length hints, then generic style advice drawn at random to fill the list.
pub fn build_suggestions<R: Rng + ?Sized>(
    inputs: &SuggestionInputs<'_>,
    rng: &mut R,
) -> Vec<String> {
    let mut list = SuggestionList::new(HP.max_suggestions);

    for flagged in inputs.flagged_phrases {
        if let Some(advice) = lexicon::suggestion_for(&flagged.phrase) {
            list.push(advice);
        }
    }

    if inputs.variance < HP.variance_hint_below {
        list.push(lexicon::VARIANCE_HINT);
    }
    if inputs.avg_len > HP.long_sentence_avg_words {
        list.push(lexicon::LONG_SENTENCE_HINT);
    }
    if inputs.word_count < HP.short_text_hint_words {
        list.push(lexicon::SHORT_TEXT_HINT);
    }

    if !list.is_full() {
        let mut pool = lexicon::STYLE_SUGGESTIONS.to_vec();
        pool.shuffle(rng);
        for suggestion in pool {
            if list.is_full() {
                break;
            }
            list.push(suggestion);
        }
    }

    list.items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn flag(phrase: &str) -> FlaggedPhrase {
        FlaggedPhrase::new(phrase)
    }

    #[test]
    fn trigger_advice_comes_first() {
        let flagged = vec![flag("delve"), flag("utilize")];
        let inputs = SuggestionInputs {
            flagged_phrases: &flagged,
            avg_len: 10.0,
            variance: 30.0,
            word_count: 100,
        };
        let out = build_suggestions(&inputs, &mut StdRng::seed_from_u64(1));
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], lexicon::suggestion_for("delve").unwrap());
        assert_eq!(out[1], lexicon::suggestion_for("utilize").unwrap());
    }

    #[test]
    fn triggers_without_advice_are_skipped() {
        let flagged = vec![flag("robust"), flag("paradigm")];
        let inputs = SuggestionInputs {
            flagged_phrases: &flagged,
            avg_len: 10.0,
            variance: 3.0,
            word_count: 100,
        };
        let out = build_suggestions(&inputs, &mut StdRng::seed_from_u64(2));
        assert_eq!(out[0], lexicon::VARIANCE_HINT);
    }

    #[test]
    fn stat_hints_follow_priority_order() {
        let inputs = SuggestionInputs {
            flagged_phrases: &[],
            avg_len: 30.0,
            variance: 1.0,
            word_count: 10,
        };
        let out = build_suggestions(&inputs, &mut StdRng::seed_from_u64(3));
        assert_eq!(
            &out[..3],
            &[
                lexicon::VARIANCE_HINT,
                lexicon::LONG_SENTENCE_HINT,
                lexicon::SHORT_TEXT_HINT
            ]
        );
    }

    #[test]
    fn never_more_than_five_and_never_duplicated() {
        let flagged: Vec<_> = lexicon::TRIGGER_WORDS.iter().map(|w| flag(w)).collect();
        let inputs = SuggestionInputs {
            flagged_phrases: &flagged,
            avg_len: 40.0,
            variance: 0.0,
            word_count: 5,
        };
        for seed in 0..20 {
            let out = build_suggestions(&inputs, &mut StdRng::seed_from_u64(seed));
            assert_eq!(out.len(), 5);
            let unique: HashSet<_> = out.iter().collect();
            assert_eq!(unique.len(), out.len());
        }
    }

    #[test]
    fn backfill_is_reproducible_with_a_fixed_seed() {
        let inputs = SuggestionInputs {
            flagged_phrases: &[],
            avg_len: 12.0,
            variance: 20.0,
            word_count: 80,
        };
        let a = build_suggestions(&inputs, &mut StdRng::seed_from_u64(42));
        let b = build_suggestions(&inputs, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a
            .iter()
            .all(|s| lexicon::STYLE_SUGGESTIONS.contains(&s.as_str())));
    }
}
