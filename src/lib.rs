//! # Roster Match Engine
//!
//! Resolves noisy player names against a reference roster with:
//! - Exact-key blocking (year of birth) to narrow candidates
//! - Threshold-gated fuzzy matching through a pluggable matcher (rapidfuzz by default)
//! - Smith-Waterman local-alignment scoring
//! - Top-N ranking over an arbitrary string pool
//! - Multiple interfaces: Rust library, Python bindings, CLI
//!
//! The fuzzy resolver (0-100 scores) and the alignment ranker (raw integer
//! scores) are independent; their scores are not comparable.
//!
//! ## Example Usage
//!
//! ```rust
//! use roster_match_engine::{rank, BlockedIndex, MatchResult, Record, RosterResolver};
//!
//! let index = BlockedIndex::build(vec![
//!     Record::new("John Doe", 1990),
//!     Record::new("Jane Smith", 1991),
//! ]);
//! let resolver = RosterResolver::new(index);
//!
//! match resolver.resolve("Jon Doe", &1990) {
//!     MatchResult::Matched { name, score } => println!("Found: {} - {:.1}%", name, score),
//!     MatchResult::NoMatch => println!("No match"),
//! }
//!
//! let ranked = rank("Messi", &["Lionel Messi", "Messias", "Xavi"], 2);
//! assert_eq!(ranked[0].candidate, "Lionel Messi");
//! ```

pub mod alignment;
pub mod config;
pub mod core;
pub mod error;
pub mod index;
pub mod matching;
pub mod ranking;
pub mod resolver;

// Re-export primary types
pub use crate::alignment::{smith_waterman, SmithWaterman};
pub use crate::config::{AlignmentParams, EngineConfig, ResolverOptions};
pub use crate::core::{MatchResult, Record};
pub use crate::error::{MatchEngineError, Result};
pub use crate::index::{BlockedIndex, CandidateBlock};
pub use crate::matching::{ApproximateMatcher, BestMatch, Metric, RapidfuzzMatcher};
pub use crate::ranking::{rank, RankedCandidate, Scorer, TopNRanker};
pub use crate::resolver::{resolve, RosterResolver};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
