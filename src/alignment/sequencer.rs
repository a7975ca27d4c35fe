use crate::alignment::matcher;
use crate::config::{AlignConfig, ShortChunkPolicy};
use crate::pipeline::traits::SimilarityScorer;
use crate::types::AlignedPair;

/// Aligns an ordered sequence of chunk texts against one ground-truth text.
///
/// A single cursor is threaded through the loop: a successful match moves it
/// to the match's end offset when that lies ahead of it. The search may look
/// backward of the cursor, but the cursor itself never moves backward, so the
/// window can only drift forward across chunks. A chunk with no candidate
/// window still yields a pair (with an empty `gt_chunk`) and leaves the
/// cursor where it was. Chunks below `min_chunk_words` follow the configured
/// [`ShortChunkPolicy`].
pub fn align_chunks(
    ground_truth: &str,
    chunk_texts: &[String],
    config: &AlignConfig,
    scorer: &dyn SimilarityScorer,
) -> Vec<AlignedPair> {
    let mut pairs = Vec::with_capacity(chunk_texts.len());
    let mut cursor = 0usize;

    for (index, chunk_text) in chunk_texts.iter().enumerate() {
        if config.short_chunk_policy == ShortChunkPolicy::Skip
            && chunk_text.split_whitespace().count() < config.min_chunk_words
        {
            tracing::warn!(chunk_index = index, "skipping chunk with too few words");
            continue;
        }

        match matcher::best_match(ground_truth, chunk_text, cursor, config, scorer) {
            Some(matched) => {
                cursor = cursor.max(matched.end);
                pairs.push(AlignedPair {
                    whisper_chunk: chunk_text.clone(),
                    gt_chunk: matched.text,
                });
            }
            None => {
                tracing::warn!(
                    chunk_index = index,
                    cursor,
                    "no candidate window for chunk; emitting empty match"
                );
                pairs.push(AlignedPair {
                    whisper_chunk: chunk_text.clone(),
                    gt_chunk: String::new(),
                });
            }
        }
    }

    pairs
}
