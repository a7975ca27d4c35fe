/// Seam for the approximate string similarity used by the matcher.
pub trait SimilarityScorer: Send + Sync {
    /// Normalized similarity of `candidate` against `target` in `[0, 1]`,
    /// where 1 means identical.
    ///
    /// Returns `Some` only when the score strictly exceeds `cutoff`;
    /// implementations should use `cutoff` to reject candidates cheaply when
    /// a bound proves the score cannot beat it. `cutoff` may be negative,
    /// which forces a full computation.
    fn score(&self, candidate: &str, target: &str, cutoff: f64) -> Option<f64>;
}
