//! Shared test utilities for `rsgraph-core`.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use proptest::test_runner::Config as ProptestConfig;
use rsgraph_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::random::RandomSource;

/// Builds a standard proptest configuration from the shared run profile.
///
/// Keeps property suites aligned on the same `RSGRAPH_PBT_CASES`
/// interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// [`RandomSource`] replaying fixed draws so tests can steer generators.
///
/// Panics when a queue runs dry or an index falls outside the requested
/// range; both indicate a broken test script.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRandom {
    indices: VecDeque<usize>,
    probabilities: VecDeque<f64>,
    index_draws: usize,
    probability_draws: usize,
}

impl ScriptedRandom {
    /// Creates a source replaying `indices` and `probabilities` in order.
    pub(crate) fn new(
        indices: impl IntoIterator<Item = usize>,
        probabilities: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            probabilities: probabilities.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Creates a source that only serves index draws.
    pub(crate) fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::new(indices, [])
    }

    /// Number of index draws served so far.
    pub(crate) fn index_draws(&self) -> usize {
        self.index_draws
    }

    /// Number of probability draws served so far.
    pub(crate) fn probability_draws(&self) -> usize {
        self.probability_draws
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_probability(&mut self) -> f64 {
        self.probability_draws += 1;
        match self.probabilities.pop_front() {
            Some(value) => value,
            None => panic!("probability script exhausted after {} draws", self.probability_draws - 1),
        }
    }

    fn uniform_index(&mut self, len: NonZeroUsize) -> usize {
        self.index_draws += 1;
        let Some(index) = self.indices.pop_front() else {
            panic!("index script exhausted after {} draws", self.index_draws - 1);
        };
        assert!(
            index < len.get(),
            "scripted index {index} is outside 0..{len}"
        );
        index
    }
}

/// Wraps another source and counts the draws made through it.
#[derive(Debug)]
pub(crate) struct CountingRandom<R> {
    inner: R,
    probability_draws: usize,
}

impl<R> CountingRandom<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            probability_draws: 0,
        }
    }

    /// Number of probability draws made so far.
    pub(crate) fn probability_draws(&self) -> usize {
        self.probability_draws
    }
}

impl<R: RandomSource> RandomSource for CountingRandom<R> {
    fn uniform_probability(&mut self) -> f64 {
        self.probability_draws += 1;
        self.inner.uniform_probability()
    }

    fn uniform_index(&mut self, len: NonZeroUsize) -> usize {
        self.inner.uniform_index(len)
    }
}
