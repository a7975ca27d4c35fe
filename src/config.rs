/// Policy for chunks whose text carries too few words to discriminate between
/// candidate spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortChunkPolicy {
    /// Drop the chunk before alignment; no pair is emitted for it.
    Skip,
    /// Align the chunk anyway, accepting the weaker match signal.
    PassThrough,
}

#[derive(Debug, Clone)]
pub struct AlignConfig {
    /// Target cumulative duration of one chunk, in seconds.
    pub chunk_duration_secs: f64,
    /// Search window extends this many chunk-lengths backward of the cursor.
    pub back_window_factor: usize,
    /// Search window extends this many chunk-lengths forward of the cursor.
    pub forward_window_factor: usize,
    /// Chunks with fewer words than this fall under `short_chunk_policy`.
    pub min_chunk_words: usize,
    pub short_chunk_policy: ShortChunkPolicy,
}

impl AlignConfig {
    pub const DEFAULT_CHUNK_DURATION_SECS: f64 = 30.0;
    pub const DEFAULT_MIN_CHUNK_WORDS: usize = 2;
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            chunk_duration_secs: Self::DEFAULT_CHUNK_DURATION_SECS,
            // Asymmetric on purpose: tolerate slight regressions from an
            // imperfect previous match while biasing forward progress.
            back_window_factor: 1,
            forward_window_factor: 2,
            min_chunk_words: Self::DEFAULT_MIN_CHUNK_WORDS,
            short_chunk_policy: ShortChunkPolicy::Skip,
        }
    }
}
