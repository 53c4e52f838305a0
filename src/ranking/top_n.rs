use rayon::prelude::*;

use crate::alignment::SmithWaterman;
use crate::ranking::{RankedCandidate, Scorer};

/// Brute-force top-N ranker over an arbitrary string pool
pub struct TopNRanker<S = SmithWaterman> {
    scorer: S,
}

impl TopNRanker<SmithWaterman> {
    /// Ranker using Smith-Waterman with default parameters
    pub fn new() -> Self {
        Self {
            scorer: SmithWaterman::default(),
        }
    }
}

impl Default for TopNRanker<SmithWaterman> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scorer> TopNRanker<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score every candidate against `target` and keep the best `n`.
    ///
    /// Sorted by descending score; equal scores keep pool order.
    pub fn rank<P: AsRef<str>>(&self, target: &str, pool: &[P], n: usize) -> Vec<RankedCandidate> {
        if n == 0 {
            return Vec::new();
        }

        let scored = pool
            .iter()
            .map(|candidate| self.score_one(target, candidate.as_ref()))
            .collect();

        select_top(scored, n)
    }

    /// Same output as [`rank`](Self::rank), scoring on the rayon pool
    pub fn rank_par<P>(&self, target: &str, pool: &[P], n: usize) -> Vec<RankedCandidate>
    where
        P: AsRef<str> + Sync,
    {
        if n == 0 {
            return Vec::new();
        }

        let scored = pool
            .par_iter()
            .map(|candidate| self.score_one(target, candidate.as_ref()))
            .collect();

        select_top(scored, n)
    }

    fn score_one(&self, target: &str, candidate: &str) -> RankedCandidate {
        let score = self.scorer.score(target, candidate);
        tracing::trace!(scorer = self.scorer.name(), candidate, score, "scored candidate");
        RankedCandidate::new(candidate, score)
    }
}

fn select_top(mut scored: Vec<RankedCandidate>, n: usize) -> Vec<RankedCandidate> {
    // Vec::sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(n);
    scored
}

/// Rank `pool` against `target` with default Smith-Waterman scoring
pub fn rank<P: AsRef<str>>(target: &str, pool: &[P], n: usize) -> Vec<RankedCandidate> {
    TopNRanker::new().rank(target, pool, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::FnScorer;

    fn pool() -> Vec<&'static str> {
        vec!["Ronaldinho", "Rivaldo", "Cristiano Ronaldo", "Romario", "Ronaldo"]
    }

    #[test]
    fn test_rank_orders_by_score() {
        let ranked = rank("Ronaldo", &pool(), 3);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0], RankedCandidate::new("Cristiano Ronaldo", 14));
        assert_eq!(ranked[1], RankedCandidate::new("Ronaldo", 14));
        assert_eq!(ranked[2], RankedCandidate::new("Ronaldinho", 12));
    }

    #[test]
    fn test_rank_length_and_order() {
        let pool = pool();
        for n in 0..8 {
            let ranked = rank("Ronaldo", &pool, n);
            assert_eq!(ranked.len(), n.min(pool.len()));
            assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_rank_zero_is_empty() {
        assert!(rank("Ronaldo", &pool(), 0).is_empty());
        assert!(rank::<&str>("Ronaldo", &[], 5).is_empty());
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let constant = TopNRanker::with_scorer(FnScorer(|_: &str, _: &str| 1u64));
        let ranked = constant.rank("x", &["c", "a", "b"], 10);

        let names: Vec<&str> = ranked.iter().map(|r| r.candidate.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(constant.scorer().name(), "custom");
    }

    #[test]
    fn test_custom_scorer() {
        let by_length = TopNRanker::with_scorer(FnScorer(|_: &str, c: &str| c.len() as u64));
        let ranked = by_length.rank("ignored", &["ab", "abcd", "abc"], 2);

        assert_eq!(ranked[0].candidate, "abcd");
        assert_eq!(ranked[1].candidate, "abc");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pool: Vec<String> = (0..200).map(|i| format!("Player {}", i % 37)).collect();
        let ranker = TopNRanker::new();

        assert_eq!(
            ranker.rank("Player 12", &pool, 25),
            ranker.rank_par("Player 12", &pool, 25)
        );
    }
}
