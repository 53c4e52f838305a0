pub mod fallback;

use serde::{Deserialize, Serialize};

pub use fallback::RapidfuzzMatcher;

/// Trait for approximate string matching over a candidate list
pub trait ApproximateMatcher: Send + Sync {
    /// Best-scoring candidate for `query` with its score on a 0-100 scale.
    ///
    /// Returns `None` only when `candidates` is empty.
    fn best_match<'c>(&self, query: &str, candidates: &'c [String]) -> Option<BestMatch<'c>>;

    /// Get matcher name for logging
    fn name(&self) -> &str;
}

/// Winning candidate of a [`ApproximateMatcher::best_match`] call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch<'c> {
    pub name: &'c str,
    pub score: f64,
}

/// Similarity metric used by [`RapidfuzzMatcher`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Jaro-Winkler, favours shared prefixes
    #[default]
    JaroWinkler,
    /// Normalized indel similarity (the classic `ratio`)
    Indel,
    /// Indel similarity after sorting whitespace tokens
    TokenSort,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::JaroWinkler => "jaro_winkler",
            Metric::Indel => "indel",
            Metric::TokenSort => "token_sort",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = crate::error::MatchEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jaro_winkler" | "jaro-winkler" => Ok(Metric::JaroWinkler),
            "indel" | "ratio" => Ok(Metric::Indel),
            "token_sort" | "token-sort" => Ok(Metric::TokenSort),
            other => Err(crate::error::MatchEngineError::InvalidConfig(format!(
                "unknown metric '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_from_str() {
        assert_eq!("ratio".parse::<Metric>().unwrap(), Metric::Indel);
        assert_eq!("token-sort".parse::<Metric>().unwrap(), Metric::TokenSort);
        assert_eq!("jaro_winkler".parse::<Metric>().unwrap(), Metric::JaroWinkler);
        assert!("soundex".parse::<Metric>().is_err());
    }
}
