pub mod top_n;

use serde::{Deserialize, Serialize};

use crate::alignment::SmithWaterman;

pub use top_n::{rank, TopNRanker};

/// Trait for pairwise similarity metrics used by the ranker
pub trait Scorer: Send + Sync {
    /// Similarity of `candidate` to `target`, higher is closer
    fn score(&self, target: &str, candidate: &str) -> u64;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

impl Scorer for SmithWaterman {
    fn score(&self, target: &str, candidate: &str) -> u64 {
        SmithWaterman::score(self, target, candidate)
    }

    fn name(&self) -> &str {
        "smith_waterman"
    }
}

/// Adapter turning a plain function or closure into a [`Scorer`]
pub struct FnScorer<F>(pub F);

impl<F> Scorer for FnScorer<F>
where
    F: Fn(&str, &str) -> u64 + Send + Sync,
{
    fn score(&self, target: &str, candidate: &str) -> u64 {
        (self.0)(target, candidate)
    }

    fn name(&self) -> &str {
        "custom"
    }
}

/// Candidate with similarity score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: String,
    pub score: u64,
}

impl RankedCandidate {
    pub fn new(candidate: impl Into<String>, score: u64) -> Self {
        Self {
            candidate: candidate.into(),
            score,
        }
    }
}
