pub mod alignment;
pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod types;

pub use config::{AlignConfig, ShortChunkPolicy};
pub use error::AlignError;
pub use pipeline::builder::ChunkAlignerBuilder;
pub use pipeline::runtime::ChunkAligner;
pub use pipeline::traits::SimilarityScorer;
pub use types::{AlignedPair, Chunk, SpanMatch, TimedWord, WhisperTranscript};
