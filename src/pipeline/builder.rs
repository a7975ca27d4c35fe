use crate::config::AlignConfig;
use crate::pipeline::defaults::LevenshteinScorer;
use crate::pipeline::runtime::ChunkAligner;
use crate::pipeline::traits::SimilarityScorer;

pub struct ChunkAlignerBuilder {
    config: AlignConfig,
    scorer: Option<Box<dyn SimilarityScorer>>,
}

impl ChunkAlignerBuilder {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            scorer: None,
        }
    }

    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn build(self) -> ChunkAligner {
        ChunkAligner::from_parts(
            self.config,
            self.scorer.unwrap_or_else(|| Box::new(LevenshteinScorer)),
        )
    }
}
