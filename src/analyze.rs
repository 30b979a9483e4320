use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lexicon::TRIGGER_PATTERNS;
use crate::stats;
use crate::suggest::{build_suggestions, SuggestionInputs};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

pub const TRIGGER_REASON: &str = "Commonly overused by AI-generated text.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedPhrase {
    pub phrase: String,
    pub reason: String,
}

impl FlaggedPhrase {
    pub fn new(phrase: &str) -> Self {
        Self {
            phrase: phrase.to_lowercase(),
            reason: TRIGGER_REASON.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ai_score: i32,
    pub readability_score: i32,
    pub word_count: usize,
    pub sentence_count: usize,
    pub suggestions: Vec<String>,
    pub flagged_phrases: Vec<FlaggedPhrase>,
}

impl AnalysisResult {
    fn empty() -> Self {
        Self {
            ai_score: 0,
            readability_score: HP.readability_base as i32,
            word_count: 0,
            sentence_count: 0,
            suggestions: vec![],
            flagged_phrases: vec![],
        }
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    pub trigger_weight: f64,
    pub density_weight: f64,
    pub robotic_variance_below: f64,
    pub robotic_bonus: f64,
    pub uniform_variance_below: f64,
    pub uniform_bonus: f64,
    pub human_variance_above: f64,
    pub human_discount: f64,
    pub humanish_variance_above: f64,
    pub humanish_discount: f64,
    pub short_text_word_count: usize,
    pub score_min: i32,
    pub score_max: i32,
    pub readability_base: f64,
    pub readability_slope: f64,
    pub readability_min: f64,
    pub max_suggestions: usize,
    pub variance_hint_below: f64,
    pub long_sentence_avg_words: f64,
    pub short_text_hint_words: usize,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    trigger_weight: 15.0,
    density_weight: 1000.0,
    robotic_variance_below: 5.0,
    robotic_bonus: 30.0,
    uniform_variance_below: 12.0,
    uniform_bonus: 15.0,
    human_variance_above: 50.0,
    human_discount: -20.0,
    humanish_variance_above: 35.0,
    humanish_discount: -10.0,
    short_text_word_count: 30,
    score_min: 5,
    score_max: 99,
    readability_base: 100.0,
    readability_slope: 2.0,
    readability_min: 10.0,
    max_suggestions: 5,
    variance_hint_below: 15.0,
    long_sentence_avg_words: 25.0,
    short_text_hint_words: 20,
};

// ---------------------------------------------------------------------------
// Signals
// ---------------------------------------------------------------------------

struct TriggerScan {
    count: usize,
    flagged: Vec<FlaggedPhrase>,
}

fn scan_triggers(text: &str) -> TriggerScan {
    let mut count = 0;
    let mut flagged: Vec<FlaggedPhrase> = Vec::new();
    for (word, pattern) in TRIGGER_PATTERNS.iter() {
        let hits = pattern.find_iter(text).count();
        if hits == 0 {
            continue;
        }
        count += hits;
        if !flagged.iter().any(|f| f.phrase == *word) {
            flagged.push(FlaggedPhrase::new(word));
        }
    }
    TriggerScan { count, flagged }
}

/// Mean and population variance of per-sentence word counts. A passage with
/// no sentence fragments averages over one slot and yields zeros.
pub(crate) fn sentence_rhythm(text: &str) -> (f64, f64) {
    let lengths: Vec<f64> = stats::split_sentences(text)
        .into_iter()
        .map(|s| stats::count_words(s) as f64)
        .collect();
    let n = lengths.len().max(1) as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance)
}

fn variance_adjustment(variance: f64) -> f64 {
    if variance < HP.robotic_variance_below {
        HP.robotic_bonus
    } else if variance < HP.uniform_variance_below {
        HP.uniform_bonus
    } else if variance > HP.human_variance_above {
        HP.human_discount
    } else if variance > HP.humanish_variance_above {
        HP.humanish_discount
    } else {
        0.0
    }
}

fn compute_ai_score(trigger_count: usize, word_count: usize, variance: f64) -> i32 {
    if word_count < HP.short_text_word_count && trigger_count == 0 {
        return 0;
    }
    let raw = trigger_count as f64 * HP.trigger_weight
        + (trigger_count as f64 / word_count as f64) * HP.density_weight
        + variance_adjustment(variance);
    (raw.round() as i32).clamp(HP.score_min, HP.score_max)
}

fn compute_readability(avg_len: f64) -> i32 {
    let raw = HP.readability_base - avg_len * HP.readability_slope;
    raw.clamp(HP.readability_min, HP.readability_base).round() as i32
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score how machine-written `text` looks, using the thread-local RNG for the
/// suggestion backfill.
pub fn analyze(text: &str) -> AnalysisResult {
    analyze_with_rng(text, &mut rand::thread_rng())
}

#[tracing::instrument(skip(text, rng), fields(text_len = text.len()))]
pub fn analyze_with_rng<R: Rng + ?Sized>(text: &str, rng: &mut R) -> AnalysisResult {
    let text_stats = stats::text_stats(text);
    if text_stats.word_count == 0 {
        return AnalysisResult::empty();
    }

    let scan = scan_triggers(text);
    let (avg_len, variance) = sentence_rhythm(text);
    let ai_score = compute_ai_score(scan.count, text_stats.word_count, variance);
    tracing::debug!(
        triggers = scan.count,
        avg_len,
        variance,
        ai_score,
        "scored passage"
    );

    let suggestions = build_suggestions(
        &SuggestionInputs {
            flagged_phrases: &scan.flagged,
            avg_len,
            variance,
            word_count: text_stats.word_count,
        },
        rng,
    );

    AnalysisResult {
        ai_score,
        readability_score: compute_readability(avg_len),
        word_count: text_stats.word_count,
        sentence_count: text_stats.sentence_count,
        suggestions,
        flagged_phrases: scan.flagged,
    }
}
