use crate::types::{Chunk, TimedWord};

/// Groups an ordered word sequence into contiguous chunks whose cumulative
/// duration stays within `max_duration` seconds.
///
/// The first word that would push the running total past the bound closes the
/// current chunk and opens a new one containing that word, so a single word
/// longer than `max_duration` still ends up alone in its own chunk rather than
/// being dropped or split. A final partial chunk is always emitted. Boundaries
/// depend only on cumulative duration, never on text content.
pub fn segment_by_duration(words: &[TimedWord], max_duration: f64) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<TimedWord> = Vec::new();
    let mut current_duration = 0.0;

    for word in words {
        if current_duration + word.duration() <= max_duration || current.is_empty() {
            current_duration += word.duration();
            current.push(word.clone());
            continue;
        }
        chunks.push(Chunk {
            words: std::mem::take(&mut current),
        });
        current_duration = word.duration();
        current.push(word.clone());
    }

    if !current.is_empty() {
        chunks.push(Chunk { words: current });
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimedWord;

    fn word(text: &str, start: f64, end: f64) -> TimedWord {
        TimedWord {
            word: text.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(segment_by_duration(&[], 30.0).is_empty());
    }

    #[test]
    fn all_words_fit_one_chunk() {
        let words = vec![word("a", 0.0, 1.0), word("b", 1.0, 2.0)];
        let chunks = segment_by_duration(&words, 30.0);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].words, words);
    }

    #[test]
    fn word_exceeding_bound_starts_new_chunk() {
        let words = vec![word("world", 0.0, 1.0), word("hello", 1.0, 31.0)];
        let chunks = segment_by_duration(&words, 30.0);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text(), "world");
        assert!((chunks[0].duration() - 1.0).abs() < 1e-9);
        assert_eq!(chunks[1].text(), "hello");
        assert!((chunks[1].duration() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn overlong_first_word_is_kept_alone() {
        let words = vec![word("monologue", 0.0, 45.0), word("yes", 45.0, 46.0)];
        let chunks = segment_by_duration(&words, 30.0);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text(), "monologue");
        assert_eq!(chunks[1].text(), "yes");
    }

    #[test]
    fn coverage_is_exact_in_order() {
        let words: Vec<TimedWord> = (0..25)
            .map(|i| word(&format!("w{i}"), i as f64 * 3.0, i as f64 * 3.0 + 3.0))
            .collect();
        let chunks = segment_by_duration(&words, 10.0);
        let rejoined: Vec<TimedWord> = chunks.into_iter().flat_map(|c| c.words).collect();
        assert_eq!(rejoined, words);
    }

    #[test]
    fn every_chunk_respects_bound_unless_single_word() {
        let words: Vec<TimedWord> = (0..40)
            .map(|i| word(&format!("w{i}"), i as f64, i as f64 + 0.7))
            .collect();
        let chunks = segment_by_duration(&words, 2.0);
        for chunk in &chunks {
            assert!(chunk.duration() <= 2.0 + 1e-9 || chunk.words.len() == 1);
        }
    }

    #[test]
    fn negative_duration_word_perturbs_accumulation() {
        // end < start is accepted as-is; the negative contribution lets more
        // words fit than wall-clock time would suggest.
        let words = vec![
            word("a", 0.0, 2.0),
            word("b", 5.0, 3.0),
            word("c", 5.0, 7.0),
        ];
        let chunks = segment_by_duration(&words, 2.5);
        assert_eq!(chunks.len(), 1);
        assert!((chunks[0].duration() - 2.0).abs() < 1e-9);
    }
}
