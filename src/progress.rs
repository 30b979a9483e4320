//! Progress estimation for streamed model rewrites. The generator itself lives
//! outside this crate; callers feed each streamed chunk to a
//! [`ProgressTracker`] to drive a progress bar.

use serde::{Deserialize, Serialize};

use crate::stats;

/// How much longer or shorter a rewrite is asked to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum LengthMode {
    Shorten,
    #[default]
    Original,
    Expansion,
}

const TOKENS_PER_WORD: f64 = 1.3;
const EXPANSION_FACTOR: f64 = 1.7;
const SHORTEN_FACTOR: f64 = 0.5;
const FORMAL_FACTOR: f64 = 1.2;
const MAX_IN_FLIGHT_PERCENT: u8 = 99;

fn input_tokens(text: &str) -> f64 {
    (stats::count_words(text) as f64 * TOKENS_PER_WORD).ceil()
}

/// Expected size of a rewrite, in generated chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEstimate {
    expected_tokens: u64,
}

impl ProgressEstimate {
    fn new(expected: f64) -> Self {
        Self {
            expected_tokens: (expected.ceil() as u64).max(1),
        }
    }

    /// Estimate for a humanizing rewrite of `text` under `length`.
    pub fn for_humanize(text: &str, length: LengthMode) -> Self {
        let input = input_tokens(text);
        Self::new(match length {
            LengthMode::Original => input,
            LengthMode::Expansion => input * EXPANSION_FACTOR,
            LengthMode::Shorten => input * SHORTEN_FACTOR,
        })
    }

    /// Estimate for a formal polish of `text`.
    pub fn for_formal(text: &str) -> Self {
        Self::new(input_tokens(text) * FORMAL_FACTOR)
    }

    pub fn expected_tokens(&self) -> u64 {
        self.expected_tokens
    }

    /// Percentage for `generated` chunks so far; stays below 100 until the
    /// stream ends, however far the estimate undershoots.
    pub fn percent(&self, generated: u64) -> u8 {
        let pct = (generated as f64 / self.expected_tokens as f64 * 100.0).round();
        pct.min(MAX_IN_FLIGHT_PERCENT as f64) as u8
    }
}

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    estimate: ProgressEstimate,
    generated: u64,
}

impl ProgressTracker {
    pub fn new(estimate: ProgressEstimate) -> Self {
        Self {
            estimate,
            generated: 0,
        }
    }

    /// Record one streamed chunk. Empty chunks carry no content and do not
    /// advance progress.
    pub fn record(&mut self, delta: &str) -> Option<u8> {
        if delta.is_empty() {
            return None;
        }
        self.generated += 1;
        Some(self.estimate.percent(self.generated))
    }

    pub fn generated(&self) -> u64 {
        self.generated
    }

    pub fn finish(self) -> u8 {
        100
    }
}
