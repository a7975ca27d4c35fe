use serde::{Deserialize, Serialize};

/// One word of machine transcription with its timestamps in seconds.
///
/// Produced externally (whisper-style word-level output) and consumed as-is.
/// `end < start` is accepted without correction; such a word contributes a
/// negative duration to chunk accumulation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimedWord {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl TimedWord {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// The per-recording input document: `{"words": [{word, start, end}, ...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WhisperTranscript {
    pub words: Vec<TimedWord>,
}

/// A duration-bounded, ordered group of timestamped words. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub words: Vec<TimedWord>,
}

impl Chunk {
    /// Space-joined concatenation of the word texts, in order.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.word.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Cumulative word duration, `sum(end - start)`.
    pub fn duration(&self) -> f64 {
        self.words.iter().map(TimedWord::duration).sum()
    }
}

/// One machine chunk paired with its best-matching ground-truth span.
///
/// `gt_chunk` is empty when no candidate window existed for the chunk (soft
/// failure passthrough).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    pub whisper_chunk: String,
    pub gt_chunk: String,
}

/// A matched ground-truth span together with the byte offset just past its
/// end, which becomes the sequencer's next cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanMatch {
    pub text: String,
    pub score: f64,
    pub start: usize,
    pub end: usize,
}
