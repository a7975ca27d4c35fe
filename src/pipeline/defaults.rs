use crate::pipeline::traits::SimilarityScorer;

/// Edit-distance similarity: `1 - levenshtein / max_len`, over chars.
///
/// Before computing the distance, candidates are screened with the bound
/// `similarity <= 1 - |len(a) - len(b)| / max(len(a), len(b))`, which follows
/// from the distance never being smaller than the length difference.
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, candidate: &str, target: &str, cutoff: f64) -> Option<f64> {
        let candidate_len = candidate.chars().count();
        let target_len = target.chars().count();
        let longest = candidate_len.max(target_len);
        if longest == 0 {
            // Both empty, which strsim scores as identical.
            return (1.0 > cutoff).then_some(1.0);
        }

        let upper_bound = 1.0 - candidate_len.abs_diff(target_len) as f64 / longest as f64;
        if upper_bound <= cutoff {
            return None;
        }

        let score = strsim::normalized_levenshtein(candidate, target);
        (score > cutoff).then_some(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        let score = LevenshteinScorer.score("hello world", "hello world", -1.0);
        assert_eq!(score, Some(1.0));
    }

    #[test]
    fn single_edit_scores_proportionally() {
        let score = LevenshteinScorer
            .score("hello worlds", "hello world", -1.0)
            .expect("score above cutoff");
        assert!((score - 11.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn cutoff_rejects_scores_at_or_below_it() {
        assert!(LevenshteinScorer.score("abc", "abc", 1.0).is_none());
        assert!(LevenshteinScorer.score("abc", "xyz", 0.0).is_none());
    }

    #[test]
    fn length_bound_prunes_without_distance_computation() {
        // 3 vs 30 chars caps the similarity at 0.1, below the cutoff.
        let long = "x".repeat(30);
        assert!(LevenshteinScorer.score("abc", &long, 0.5).is_none());
    }

    #[test]
    fn negative_cutoff_always_produces_a_score() {
        assert_eq!(LevenshteinScorer.score("", "abc", -1.0), Some(0.0));
        assert_eq!(LevenshteinScorer.score("", "", -1.0), Some(1.0));
    }
}
