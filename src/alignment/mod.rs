mod boundaries;
mod matcher;
mod segmenter;
mod sequencer;
mod speaker;

pub use matcher::best_match;
pub use segmenter::segment_by_duration;
pub use sequencer::align_chunks;
