use crate::alignment::{align_chunks, segment_by_duration};
use crate::config::AlignConfig;
use crate::pipeline::traits::SimilarityScorer;
use crate::types::{AlignedPair, TimedWord};

/// Per-recording alignment entry point: segments the timed words, then walks
/// the chunks through the ground truth in order.
///
/// Alignment of a single recording is deliberately sequential; the cursor
/// threading one chunk's match into the next chunk's search window cannot be
/// parallelized. Run separate recordings on separate workers instead.
pub struct ChunkAligner {
    config: AlignConfig,
    scorer: Box<dyn SimilarityScorer>,
}

impl ChunkAligner {
    pub(crate) fn from_parts(config: AlignConfig, scorer: Box<dyn SimilarityScorer>) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    pub fn align_recording(&self, words: &[TimedWord], ground_truth: &str) -> Vec<AlignedPair> {
        let chunks = segment_by_duration(words, self.config.chunk_duration_secs);
        let chunk_texts: Vec<String> = chunks.iter().map(|c| c.text()).collect();
        tracing::debug!(
            word_count = words.len(),
            chunk_count = chunks.len(),
            "segmented recording"
        );
        align_chunks(ground_truth, &chunk_texts, &self.config, self.scorer.as_ref())
    }
}
