use std::time::Duration;

use serde::Serialize;
use similar::{Algorithm, ChangeTag, TextDiff};

// Past this the aligner gives up refining and reports the rest as replaced.
const ALIGN_TIMEOUT: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Unchanged,
    Added,
}

/// One contiguous run of the rewritten text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl DiffSegment {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Unchanged,
            text: text.into(),
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Added,
            text: text.into(),
        }
    }
}

fn push_run(segments: &mut Vec<DiffSegment>, kind: SegmentKind, value: &str) {
    match segments.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(value),
        _ => segments.push(DiffSegment {
            kind,
            text: value.to_string(),
        }),
    }
}

/// Align `rewritten` against `original` word by word and describe what a
/// reader of the rewrite should see: retained runs and new runs. Deleted
/// words are dropped, so the segments concatenate back to `rewritten`.
///
/// The second text can come from anywhere, including a model-backed rewrite.
#[tracing::instrument(skip_all, fields(original_len = original.len(), rewritten_len = rewritten.len()))]
pub fn render_changes(original: &str, rewritten: &str) -> Vec<DiffSegment> {
    if rewritten.is_empty() {
        return vec![];
    }
    if original.is_empty() {
        return vec![DiffSegment::unchanged(rewritten)];
    }

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .timeout(ALIGN_TIMEOUT)
        .diff_words(original, rewritten);

    let mut segments = Vec::new();
    let mut removed = 0usize;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Equal => push_run(&mut segments, SegmentKind::Unchanged, change.value()),
            ChangeTag::Insert => push_run(&mut segments, SegmentKind::Added, change.value()),
            ChangeTag::Delete => removed += 1,
        }
    }
    tracing::debug!(segments = segments.len(), removed, "aligned rewrite");
    segments
}
