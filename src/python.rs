use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::sync::Arc;

use crate::alignment::smith_waterman;
use crate::config::{AlignmentParams, ResolverOptions};
use crate::core::MatchResult;
use crate::error::MatchEngineError;
use crate::index::BlockedIndex;
use crate::matching::{Metric, RapidfuzzMatcher};
use crate::ranking::rank;
use crate::resolver::RosterResolver as RustRosterResolver;

fn to_py_err(e: MatchEngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn match_to_py(result: MatchResult) -> Option<(String, f64)> {
    match result {
        MatchResult::Matched { name, score } => Some((name, score)),
        MatchResult::NoMatch => None,
    }
}

/// Smith-Waterman score between two strings
#[pyfunction]
#[pyo3(signature = (s1, s2, match_reward = 2, gap_cost = 1))]
fn alignment_score(s1: &str, s2: &str, match_reward: u32, gap_cost: u32) -> PyResult<u64> {
    AlignmentParams::new(match_reward, gap_cost).map_err(to_py_err)?;
    Ok(smith_waterman(s1, s2, match_reward, gap_cost))
}

/// Top `n` pool entries by alignment score, as (candidate, score) tuples
#[pyfunction]
#[pyo3(signature = (target, pool, n = 5))]
fn top_n(py: Python<'_>, target: &str, pool: Vec<String>, n: usize) -> Vec<(String, u64)> {
    py.allow_threads(|| {
        rank(target, &pool, n)
            .into_iter()
            .map(|r| (r.candidate, r.score))
            .collect()
    })
}

/// Python wrapper for RosterResolver keyed by year of birth
#[pyclass]
struct Resolver {
    inner: RustRosterResolver<i32>,
}

#[pymethods]
impl Resolver {
    /// Build the roster index from (name, year) pairs
    #[new]
    #[pyo3(signature = (records, threshold = 80.0, metric = "jaro_winkler"))]
    fn new(records: Vec<(String, i32)>, threshold: f64, metric: &str) -> PyResult<Self> {
        let metric: Metric = metric.parse().map_err(to_py_err)?;
        let options = ResolverOptions::with_threshold(threshold).map_err(to_py_err)?;
        let index: BlockedIndex<i32> = BlockedIndex::build(records);

        let inner = RustRosterResolver::with_matcher(
            index,
            Arc::new(RapidfuzzMatcher::with_metric(metric)),
            options,
        )
        .map_err(to_py_err)?;

        Ok(Self { inner })
    }

    /// Resolve one name, returning (matched_name, score) or None
    fn resolve(&self, name: &str, year: i32) -> Option<(String, f64)> {
        match_to_py(self.inner.resolve(name, &year))
    }

    /// Resolve many (name, year) pairs in parallel
    fn resolve_batch(&self, py: Python<'_>, queries: Vec<(String, i32)>) -> Vec<Option<(String, f64)>> {
        py.allow_threads(|| {
            self.inner
                .resolve_batch(&queries)
                .into_iter()
                .map(match_to_py)
                .collect()
        })
    }

    #[getter]
    fn threshold(&self) -> f64 {
        self.inner.options().threshold
    }

    fn __len__(&self) -> usize {
        self.inner.index().record_count()
    }
}

/// Python module
#[pymodule]
fn roster_match_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(alignment_score, m)?)?;
    m.add_function(wrap_pyfunction!(top_n, m)?)?;
    m.add_class::<Resolver>()?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
