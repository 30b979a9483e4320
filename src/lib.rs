//! Score, rewrite, and diff AI-sounding prose with local heuristics.
//!
//! Nothing here talks to a model or the network. [`analyze`] estimates how
//! machine-written a passage looks, [`humanize`] rewrites it toward a plainer
//! register, and [`render_changes`] lines a rewrite up against its source.

pub mod analyze;
pub mod cleanup;
pub mod diff;
pub mod humanize;
pub mod lexicon;
pub mod progress;
pub mod stats;
pub mod suggest;

pub use analyze::{analyze, analyze_with_rng, AnalysisResult, FlaggedPhrase};
pub use cleanup::{clean_generated_text, CleanupStyle};
pub use diff::{render_changes, DiffSegment, SegmentKind};
pub use humanize::{humanize, humanize_with_rng, HumanizationLevel, WritingMode};
pub use progress::{LengthMode, ProgressEstimate, ProgressTracker};
pub use stats::{text_stats, TextStats};
