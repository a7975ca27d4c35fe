use crate::alignment::{boundaries, speaker};
use crate::config::AlignConfig;
use crate::pipeline::traits::SimilarityScorer;
use crate::types::SpanMatch;

/// Locates the ground-truth span that best approximates `chunk_text`.
///
/// Candidates are every ordered pair of word boundaries inside an asymmetric
/// window around `cursor` (one chunk-length backward, two forward by default).
/// Each candidate is scored after stripping a leading speaker token and
/// collapsing whitespace; the running best score is handed to the scorer as a
/// cutoff so hopeless candidates are rejected before the edit distance is
/// computed. Ties keep the first-found maximum, i.e. the earliest start and
/// then the earliest end.
///
/// Returns `None` when the window holds fewer than two word boundaries (the
/// caller treats this as a soft failure and leaves its cursor unchanged).
pub fn best_match(
    ground_truth: &str,
    chunk_text: &str,
    cursor: usize,
    config: &AlignConfig,
    scorer: &dyn SimilarityScorer,
) -> Option<SpanMatch> {
    let (lo, hi) = boundaries::search_window(
        ground_truth,
        cursor,
        chunk_text.len(),
        config.back_window_factor,
        config.forward_window_factor,
    );
    let offsets = boundaries::boundary_offsets(ground_truth, lo, hi);
    if offsets.len() < 2 {
        return None;
    }

    let mut best: Option<(f64, usize, usize)> = None;
    for (idx, &start) in offsets.iter().enumerate() {
        for &end in &offsets[idx + 1..] {
            let candidate = speaker::collapse_whitespace(speaker::strip_leading_label(
                &ground_truth[start..end],
            ));
            let cutoff = best.map(|(score, _, _)| score).unwrap_or(-1.0);
            if let Some(score) = scorer.score(&candidate, chunk_text, cutoff) {
                best = Some((score, start, end));
            }
        }
    }

    let (score, start, end) = best?;
    tracing::debug!(
        score = format!("{score:.3}"),
        start,
        end,
        "matcher: selected candidate span"
    );
    Some(SpanMatch {
        text: labeled_span(ground_truth, start, end),
        score,
        start,
        end,
    })
}

/// Renders the matched span with its speaker attribution.
///
/// A match that begins exactly at a line start already owns the line,
/// including any label the line carries, so it is returned as-is (whitespace
/// collapsed). A match that begins mid-line gets the line's label recovered
/// and prepended to the cleaned span.
fn labeled_span(ground_truth: &str, start: usize, end: usize) -> String {
    let span = &ground_truth[start..end];
    let line_start = speaker::line_start(ground_truth, start);
    if start == line_start {
        return speaker::collapse_whitespace(span);
    }
    let cleaned = speaker::collapse_whitespace(speaker::strip_leading_label(span));
    match speaker::label_at(ground_truth, line_start) {
        Some(label) => format!("{label}: {cleaned}"),
        None => cleaned,
    }
}
