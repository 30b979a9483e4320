//! Static vocabulary tables driving the scorer, the suggestion generator and
//! the rewriter. Patterns are compiled once on first use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Words that show up disproportionately often in machine-written prose.
pub static TRIGGER_WORDS: &[&str] = &[
    "delve",
    "landscape",
    "tapestry",
    "nuance",
    "leverage",
    "utilize",
    "harness",
    "unleash",
    "paramount",
    "crucial",
    "pivotal",
    "foster",
    "game-changer",
    "transformative",
    "meticulous",
    "comprehensive",
    "realm",
    "underscore",
    "highlight",
    "moreover",
    "furthermore",
    "consequently",
    "seamlessly",
    "robust",
    "paradigm",
];

/// Inflated word -> plain word, applied in `General` mode.
pub static GENERAL_SYNONYMS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("leverage", "use"),
    ("facilitate", "help"),
    ("demonstrate", "show"),
    ("subsequently", "later"),
    ("nevertheless", "but"),
    ("furthermore", "also"),
    ("moreover", "plus"),
    ("commence", "start"),
    ("terminate", "end"),
    ("endeavor", "try"),
    ("approximately", "about"),
    ("purchase", "buy"),
    ("require", "need"),
    ("obtain", "get"),
    ("seamlessly", "smoothly"),
    ("robust", "strong"),
    ("paramount", "key"),
    ("crucial", "vital"),
    ("unleash", "release"),
    ("harness", "control"),
    ("delve", "dig"),
];

/// Casual word -> formal word, applied in `Professional` mode. Not the
/// inverse of [`GENERAL_SYNONYMS`].
pub static PROFESSIONAL_SYNONYMS: &[(&str, &str)] = &[
    ("get", "obtain"),
    ("buy", "purchase"),
    ("bad", "suboptimal"),
    ("good", "beneficial"),
    ("fix", "rectify"),
    ("ask", "inquire"),
    ("need", "require"),
    ("start", "initiate"),
    ("end", "conclude"),
    ("help", "assist"),
    ("try", "attempt"),
    ("use", "leverage"),
    ("maybe", "perhaps"),
    ("really", "significantly"),
    ("very", "highly"),
    ("think", "believe"),
    ("make", "generate"),
    ("give", "provide"),
    ("keep", "maintain"),
    ("show", "demonstrate"),
    ("tell", "inform"),
    ("fast", "expedited"),
    ("slow", "gradual"),
    ("change", "modify"),
    ("idea", "concept"),
    ("problem", "challenge"),
    ("result", "outcome"),
];

/// Formal constructions folded into contractions in `General` mode.
pub static CONTRACTIONS: &[(&str, &str)] = &[
    ("cannot", "can't"),
    ("do not", "don't"),
    ("is not", "isn't"),
    ("we are", "we're"),
    ("they are", "they're"),
    ("it is", "it's"),
];

/// Conversational openers prepended to sentences in `General` mode.
pub static FILLERS: &[&str] = &[
    "Honestly,",
    "Basically,",
    "You know,",
    "Look,",
    "To be fair,",
    "Actually,",
];

/// Connective openers prepended to sentences in `Professional` mode.
pub static TRANSITIONS: &[&str] = &[
    "Furthermore,",
    "Consequently,",
    "In addition,",
    "Moreover,",
    "Therefore,",
    "Notably,",
];

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

static TRIGGER_SUGGESTIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("utilize", "Replace 'utilize' with 'use' for a more natural tone."),
        (
            "leverage",
            "Avoid 'leverage' when 'use' or 'take advantage of' works better.",
        ),
        ("paramount", "Swap 'paramount' for 'key' or 'important'."),
        ("delve", "Instead of 'delve', try 'dig' or 'explore'."),
        (
            "facilitate",
            "Use simpler alternatives for 'facilitate', like 'help'.",
        ),
        ("moreover", "Avoid overusing transition words like 'moreover'."),
        ("furthermore", "Cut 'furthermore' to sound less academic."),
        ("commence", "Replace 'commence' with 'start' to sound less formal."),
        ("purchase", "Use 'buy' instead of 'purchase' in casual contexts."),
        ("demonstrate", "Change 'demonstrate' to 'show' for better flow."),
        (
            "seamlessly",
            "Avoid 'seamlessly' unless describing actual seams; use 'smoothly'.",
        ),
        ("meticulous", "Replace 'meticulous' with 'careful' or 'detailed'."),
        ("endeavor", "Swap 'endeavor' for 'try'."),
        ("approximately", "Use 'about' instead of 'approximately'."),
        (
            "unleash",
            "Avoid 'unleash' unless talking about a physical restraint.",
        ),
        ("harness", "Change 'harness' to 'use' or 'control'."),
        ("landscape", "Avoid using 'landscape' metaphorically."),
        ("tapestry", "Avoid 'tapestry' unless discussing textiles."),
        ("nuance", "Use 'detail' or 'subtlety' instead of 'nuance'."),
        ("pivotal", "Swap 'pivotal' for 'central' or 'key'."),
        ("foster", "Use 'encourage' or 'build' instead of 'foster'."),
        (
            "transformative",
            "Avoid 'transformative' unless it's a major change.",
        ),
        ("realm", "Use 'area' or 'field' instead of 'realm'."),
        (
            "underscore",
            "Use 'emphasize' or 'show' instead of 'underscore'.",
        ),
        ("highlight", "Use 'point out' instead of 'highlight'."),
    ]
    .into_iter()
    .collect()
});

/// Targeted advice for a flagged trigger, if there is any.
pub fn suggestion_for(trigger: &str) -> Option<&'static str> {
    TRIGGER_SUGGESTIONS
        .get(trigger.to_lowercase().as_str())
        .copied()
}

pub const VARIANCE_HINT: &str = "Vary your sentence structure. Mix short and long sentences.";
pub const LONG_SENTENCE_HINT: &str = "Your sentences are quite long. Try breaking them up.";
pub const SHORT_TEXT_HINT: &str = "Text is too short for accurate analysis.";

/// Generic style advice used to backfill the suggestion list.
pub static STYLE_SUGGESTIONS: &[&str] = &[
    "Use contractions (e.g., 'don't', 'can't') to sound more conversational.",
    "Inject personal anecdotes or 'I' statements to add warmth.",
    "Use sensory details (sight, sound, smell) to make descriptions vivid.",
    "Express uncertainty or opinion (e.g., 'I think', 'maybe') to sound human.",
    "Add a touch of humor or wit if appropriate.",
    "Use idioms or colloquialisms to sound less robotic.",
    "Show, don't just tell. Describe the experience.",
    "Avoid being overly objective; show some bias or preference.",
    "Use emotional adjectives to convey feeling.",
    "Address the reader directly as 'you'.",
    "Sound less authoritative and more collaborative.",
    "Read the text aloud to check for natural rhythm.",
    "Imagine you are explaining this to a friend over coffee.",
    "Remove unnecessary filler words that don't add meaning.",
    "Check for repetitive patterns in your writing.",
    "Ensure your conclusion doesn't start with 'In conclusion'.",
    "Mix short, punchy sentences with longer, descriptive ones.",
    "Start some sentences with conjunctions like 'But' or 'And'.",
    "Break up long paragraphs to improve readability.",
    "Try asking a rhetorical question to engage the reader.",
    "Vary your sentence openings; don't start every sentence with 'The' or 'It'.",
    "Use an em-dash (\u{2014}) to add a conversational pause.",
    "Invert sentence structure occasionally for emphasis.",
    "Combine two short choppy sentences into one flowing thought.",
    "Split a complex compound sentence into two simpler ones.",
];

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

// ASCII word boundaries, so a Latin term butting against Han or kana still
// counts as a whole word.
fn whole_word(term: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", regex::escape(term))).unwrap()
}

fn compile_pairs(pairs: &'static [(&'static str, &'static str)]) -> Vec<(Regex, &'static str)> {
    pairs
        .iter()
        .map(|(from, to)| (whole_word(from), *to))
        .collect()
}

pub static TRIGGER_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TRIGGER_WORDS
        .iter()
        .map(|w| (*w, whole_word(w)))
        .collect()
});

pub static GENERAL_PATTERNS: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_pairs(GENERAL_SYNONYMS));

pub static PROFESSIONAL_PATTERNS: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_pairs(PROFESSIONAL_SYNONYMS));

pub static CONTRACTION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_pairs(CONTRACTIONS));
