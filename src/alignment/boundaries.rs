use std::sync::OnceLock;

use regex::Regex;

fn word_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b").expect("word boundary pattern is valid"))
}

/// The byte range of the candidate search for a chunk of `chunk_len` bytes:
/// one chunk-length backward of the cursor, two (by default) forward, clamped
/// to the text and snapped outward/inward to char boundaries.
pub(crate) fn search_window(
    text: &str,
    cursor: usize,
    chunk_len: usize,
    back_factor: usize,
    forward_factor: usize,
) -> (usize, usize) {
    let mut lo = cursor
        .saturating_sub(chunk_len.saturating_mul(back_factor))
        .min(text.len());
    let mut hi = cursor
        .saturating_add(chunk_len.saturating_mul(forward_factor))
        .min(text.len());
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    (lo, hi)
}

/// Word-boundary offsets (absolute, in bytes) inside `text[lo..hi]`, in
/// ascending order. Computed fresh per match attempt.
///
/// The regex only sees the window slice, so it reports the slice edges as
/// boundaries even when they fall inside a word of the full text; those
/// offsets are filtered out so candidate spans never start or end mid-word.
pub(crate) fn boundary_offsets(text: &str, lo: usize, hi: usize) -> Vec<usize> {
    if lo >= hi {
        return Vec::new();
    }
    word_boundary_re()
        .find_iter(&text[lo..hi])
        .map(|m| lo + m.start())
        .filter(|&offset| !splits_word(text, offset))
        .collect()
}

/// True when word characters sit on both sides of `offset` in the full text.
fn splits_word(text: &str, offset: usize) -> bool {
    let before = text[..offset].chars().next_back();
    let after = text[offset..].chars().next();
    matches!((before, after), (Some(b), Some(a)) if is_word_char(b) && is_word_char(a))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_of_simple_sentence() {
        let text = "the quick fox";
        let offsets = boundary_offsets(text, 0, text.len());
        // One boundary at each word start and each word end.
        assert_eq!(offsets, vec![0, 3, 4, 9, 10, 13]);
    }

    #[test]
    fn empty_window_has_no_boundaries() {
        let text = "hello";
        assert!(boundary_offsets(text, 5, 5).is_empty());
        assert!(boundary_offsets(text, 5, 3).is_empty());
    }

    #[test]
    fn offsets_are_absolute_within_window() {
        let text = "aa bb cc dd";
        let offsets = boundary_offsets(text, 3, 8);
        assert_eq!(offsets, vec![3, 5, 6, 8]);
    }

    #[test]
    fn window_edges_inside_words_are_not_boundaries() {
        // [4, 7) cuts through "bb" and "cc"; the cut points must not count
        // as word boundaries even though the regex sees them as slice ends.
        let text = "aa bb cc dd";
        let offsets = boundary_offsets(text, 4, 7);
        assert_eq!(offsets, vec![5, 6]);
    }

    #[test]
    fn window_edges_at_real_boundaries_are_kept() {
        let text = "aa bb cc dd";
        let offsets = boundary_offsets(text, 0, text.len());
        assert_eq!(offsets.first(), Some(&0));
        assert_eq!(offsets.last(), Some(&text.len()));
    }

    #[test]
    fn window_is_asymmetric_and_clamped() {
        let text = "0123456789";
        let (lo, hi) = search_window(text, 4, 3, 1, 2);
        assert_eq!((lo, hi), (1, 10));
        let (lo, hi) = search_window(text, 0, 4, 1, 2);
        assert_eq!((lo, hi), (0, 8));
    }

    #[test]
    fn window_beyond_text_collapses_to_end() {
        let text = "short";
        let (lo, hi) = search_window(text, 100, 2, 1, 2);
        assert_eq!((lo, hi), (5, 5));
    }

    #[test]
    fn window_snaps_to_char_boundaries() {
        let text = "héllo wörld";
        for cursor in 0..=text.len() {
            let (lo, hi) = search_window(text, cursor, 3, 1, 2);
            assert!(text.is_char_boundary(lo));
            assert!(text.is_char_boundary(hi));
        }
    }
}
