use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::lexicon;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum HumanizationLevel {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl HumanizationLevel {
    /// Chance that any single dictionary hit gets rewritten.
    pub fn replacement_chance(self) -> f64 {
        match self {
            Self::Light => 0.3,
            Self::Medium => 0.6,
            Self::Heavy => 0.9,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum WritingMode {
    #[default]
    General,
    Professional,
}

struct OpenerRule {
    pool: &'static [&'static str],
    chance: f64,
    min_chunk_chars: usize,
}

static GENERAL_OPENERS: OpenerRule = OpenerRule {
    pool: lexicon::FILLERS,
    chance: 0.25,
    min_chunk_chars: 10,
};

static PROFESSIONAL_OPENERS: OpenerRule = OpenerRule {
    pool: lexicon::TRANSITIONS,
    chance: 0.2,
    min_chunk_chars: 15,
};

impl WritingMode {
    fn synonyms(self) -> &'static [(Regex, &'static str)] {
        match self {
            Self::General => lexicon::GENERAL_PATTERNS.as_slice(),
            Self::Professional => lexicon::PROFESSIONAL_PATTERNS.as_slice(),
        }
    }

    fn openers(self) -> &'static OpenerRule {
        match self {
            Self::General => &GENERAL_OPENERS,
            Self::Professional => &PROFESSIONAL_OPENERS,
        }
    }
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

fn substitute_words<R: Rng + ?Sized>(
    text: &str,
    mode: WritingMode,
    chance: f64,
    rng: &mut R,
) -> (String, usize) {
    let mut out = text.to_string();
    let mut swapped = 0usize;
    for (pattern, target) in mode.synonyms() {
        let next = pattern
            .replace_all(&out, |caps: &Captures<'_>| {
                if rng.gen_bool(chance) {
                    swapped += 1;
                    (*target).to_string()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned();
        out = next;
    }
    (out, swapped)
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn insert_openers<R: Rng + ?Sized>(text: &str, mode: WritingMode, rng: &mut R) -> String {
    let rule = mode.openers();
    text.split(". ")
        .map(|chunk| {
            if !rng.gen_bool(rule.chance) || chunk.chars().count() <= rule.min_chunk_chars {
                return chunk.to_string();
            }
            match rule.pool.choose(&mut *rng) {
                Some(opener) => format!("{opener} {}", lowercase_first(chunk)),
                None => chunk.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(". ")
}

fn contract(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, contraction) in lexicon::CONTRACTION_PATTERNS.iter() {
        out = pattern.replace_all(&out, NoExpand(contraction)).into_owned();
    }
    out
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rewrite `text` toward a more natural register using the thread-local RNG.
pub fn humanize(text: &str, level: HumanizationLevel, mode: WritingMode) -> String {
    humanize_with_rng(text, level, mode, &mut rand::thread_rng())
}

/// Rewrite `text` with an explicit randomness source.
///
/// Every dictionary hit is an independent trial at the level's replacement
/// chance. `Heavy` also prepends openers to some sentences, and `General`
/// folds formal phrasing into contractions.
#[tracing::instrument(skip(text, rng), fields(text_len = text.len()))]
pub fn humanize_with_rng<R: Rng + ?Sized>(
    text: &str,
    level: HumanizationLevel,
    mode: WritingMode,
    rng: &mut R,
) -> String {
    let (mut out, swapped) = substitute_words(text, mode, level.replacement_chance(), rng);
    tracing::debug!(swapped, "substituted dictionary words");

    if level == HumanizationLevel::Heavy {
        out = insert_openers(&out, mode, rng);
    }
    if mode == WritingMode::General {
        out = contract(&out);
    }
    out
}
