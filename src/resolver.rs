use rayon::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use crate::config::ResolverOptions;
use crate::core::MatchResult;
use crate::error::Result;
use crate::index::BlockedIndex;
use crate::matching::{ApproximateMatcher, RapidfuzzMatcher};

/// Resolve `name` against the roster block for `key`.
///
/// Returns `NoMatch` when the key has no block, the block is empty, or the
/// matcher's best score is below `threshold` (inclusive acceptance).
pub fn resolve<K, M>(
    name: &str,
    key: &K,
    index: &BlockedIndex<K>,
    matcher: &M,
    threshold: f64,
) -> MatchResult
where
    K: Eq + Hash + Debug,
    M: ApproximateMatcher + ?Sized,
{
    let block = match index.lookup(key) {
        Some(block) if !block.is_empty() => block,
        _ => {
            tracing::debug!(name, ?key, "no candidate block");
            return MatchResult::NoMatch;
        }
    };

    let best = match matcher.best_match(name, block.names()) {
        Some(best) => best,
        None => {
            tracing::debug!(name, ?key, matcher = matcher.name(), "matcher returned no candidate");
            return MatchResult::NoMatch;
        }
    };

    if best.score >= threshold {
        let result = MatchResult::matched(best.name, best.score);
        tracing::debug!(name, ?key, outcome = %result.display(), "resolved");
        result
    } else {
        tracing::debug!(
            name,
            ?key,
            closest = best.name,
            score = best.score,
            threshold,
            "best score below threshold"
        );
        MatchResult::NoMatch
    }
}

/// Name resolver bound to one roster index
pub struct RosterResolver<K> {
    index: Arc<BlockedIndex<K>>,
    matcher: Arc<dyn ApproximateMatcher>,
    options: ResolverOptions,
}

impl<K> RosterResolver<K>
where
    K: Eq + Hash + Debug + Send + Sync,
{
    /// Create resolver with the rapidfuzz matcher and default threshold
    pub fn new(index: impl Into<Arc<BlockedIndex<K>>>) -> Self {
        Self {
            index: index.into(),
            matcher: Arc::new(RapidfuzzMatcher::new()),
            options: ResolverOptions::default(),
        }
    }

    /// Create resolver with a custom matcher and validated options
    pub fn with_matcher(
        index: impl Into<Arc<BlockedIndex<K>>>,
        matcher: Arc<dyn ApproximateMatcher>,
        options: ResolverOptions,
    ) -> Result<Self> {
        options.validate()?;

        let index = index.into();
        tracing::info!(
            matcher = matcher.name(),
            threshold = options.threshold,
            blocks = index.len(),
            records = index.record_count(),
            "roster resolver initialized"
        );

        Ok(Self {
            index,
            matcher,
            options,
        })
    }

    pub fn resolve(&self, name: &str, key: &K) -> MatchResult {
        resolve(
            name,
            key,
            self.index.as_ref(),
            self.matcher.as_ref(),
            self.options.threshold,
        )
    }

    /// Resolve many queries in parallel; output order follows `queries`
    pub fn resolve_batch<S>(&self, queries: &[(S, K)]) -> Vec<MatchResult>
    where
        S: AsRef<str> + Sync,
    {
        let results: Vec<MatchResult> = queries
            .par_iter()
            .map(|(name, key)| self.resolve(name.as_ref(), key))
            .collect();

        let matched = results.iter().filter(|r| r.is_match()).count();
        tracing::info!(queries = queries.len(), matched, "batch resolved");

        results
    }

    pub fn index(&self) -> &BlockedIndex<K> {
        &self.index
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    pub fn matcher_name(&self) -> &str {
        self.matcher.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use crate::matching::BestMatch;

    /// Always picks the first candidate with a fixed score
    struct FixedMatcher(f64);

    impl ApproximateMatcher for FixedMatcher {
        fn best_match<'c>(&self, _query: &str, candidates: &'c [String]) -> Option<BestMatch<'c>> {
            candidates.first().map(|name| BestMatch {
                name: name.as_str(),
                score: self.0,
            })
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn index() -> BlockedIndex<i32> {
        BlockedIndex::build(vec![
            Record::new("John Doe", 1990),
            Record::new("Jane Smith", 1991),
        ])
    }

    #[test]
    fn test_resolve_match() {
        let result = resolve("Jon Doe", &1990, &index(), &RapidfuzzMatcher::new(), 80.0);
        assert_eq!(result.name(), Some("John Doe"));
        assert!(result.score().unwrap() >= 80.0);
    }

    #[test]
    fn test_absent_key() {
        let result = resolve("Anyone", &1975, &index(), &RapidfuzzMatcher::new(), 80.0);
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_key_blocks_other_years() {
        // Jane Smith exists, but not under 1990
        let result = resolve("Jane Smith", &1990, &index(), &RapidfuzzMatcher::new(), 80.0);
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_below_threshold() {
        let result = resolve("Zzzz Qqqq", &1990, &index(), &RapidfuzzMatcher::new(), 80.0);
        assert_eq!(result, MatchResult::NoMatch);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let index = index();
        assert_eq!(
            resolve("x", &1990, &index, &FixedMatcher(80.0), 80.0),
            MatchResult::matched("John Doe", 80.0)
        );
        assert_eq!(
            resolve("x", &1990, &index, &FixedMatcher(79.99), 80.0),
            MatchResult::NoMatch
        );
    }

    #[test]
    fn test_resolver_defaults() {
        let resolver = RosterResolver::new(index());
        assert_eq!(resolver.options().threshold, 80.0);
        assert_eq!(resolver.matcher_name(), "jaro_winkler");
        assert!(resolver.resolve("Jon Doe", &1990).is_match());
    }

    #[test]
    fn test_with_matcher_rejects_bad_threshold() {
        let options = ResolverOptions { threshold: 150.0 };
        assert!(RosterResolver::with_matcher(index(), Arc::new(FixedMatcher(100.0)), options).is_err());
    }

    #[test]
    fn test_resolve_batch_preserves_order() {
        let resolver = RosterResolver::new(index());
        let queries = vec![
            ("Jon Doe", 1990),
            ("Anyone", 1975),
            ("Jane Smyth", 1991),
            ("Zzzz Qqqq", 1990),
        ];

        let results = resolver.resolve_batch(&queries);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].name(), Some("John Doe"));
        assert_eq!(results[1], MatchResult::NoMatch);
        assert_eq!(results[2].name(), Some("Jane Smith"));
        assert_eq!(results[3], MatchResult::NoMatch);
    }
}
