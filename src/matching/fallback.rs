use rapidfuzz::distance::{indel, jaro_winkler};
use std::borrow::Cow;

use crate::matching::{ApproximateMatcher, BestMatch, Metric};

/// Rapidfuzz-based matcher, the default name selector
#[derive(Debug, Clone, Copy, Default)]
pub struct RapidfuzzMatcher {
    metric: Metric,
    case_sensitive: bool,
}

impl RapidfuzzMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metric(metric: Metric) -> Self {
        Self {
            metric,
            case_sensitive: false,
        }
    }

    /// Compare names verbatim instead of lowercasing both sides
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Similarity between two names (0.0 - 100.0)
    pub fn similarity(&self, query: &str, candidate: &str) -> f64 {
        self.raw_similarity(&self.normalize(query), &self.normalize(candidate))
    }

    fn normalize<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(s)
        } else {
            Cow::Owned(s.to_lowercase())
        }
    }

    fn raw_similarity(&self, a: &str, b: &str) -> f64 {
        let score = match self.metric {
            Metric::JaroWinkler => jaro_winkler::normalized_similarity(a.chars(), b.chars()),
            Metric::Indel => indel::normalized_similarity(a.chars(), b.chars()),
            Metric::TokenSort => {
                let a = sort_tokens(a);
                let b = sort_tokens(b);
                indel::normalized_similarity(a.chars(), b.chars())
            }
        };

        // Convert to percentage (0-100)
        score * 100.0
    }
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

impl ApproximateMatcher for RapidfuzzMatcher {
    fn best_match<'c>(&self, query: &str, candidates: &'c [String]) -> Option<BestMatch<'c>> {
        let query = self.normalize(query);
        let mut best: Option<BestMatch<'c>> = None;

        for candidate in candidates {
            let score = self.raw_similarity(&query, &self.normalize(candidate));
            tracing::trace!(metric = self.metric.name(), candidate = %candidate, score, "scored name");

            // Strictly greater keeps the earliest candidate on ties
            if best.map_or(true, |b| score > b.score) {
                best = Some(BestMatch {
                    name: candidate.as_str(),
                    score,
                });
            }
        }

        best
    }

    fn name(&self) -> &str {
        self.metric.name()
    }
}
