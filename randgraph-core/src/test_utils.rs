//! Shared test utilities for `randgraph-core`.

use std::collections::VecDeque;

use proptest::test_runner::Config as ProptestConfig;
use randgraph_test_support::property::PropertyProfile;

use crate::rng::RandomSource;

/// Builds a proptest configuration from the shared property profile.
///
/// Keeps every suite on the same `RANDGRAPH_PBT_CASES` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = PropertyProfile::load(default_cases, 8);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Largest vertex collection property suites should generate.
#[must_use]
pub(crate) fn suite_max_vertices(default_max: usize) -> usize {
    PropertyProfile::load(64, default_max).max_vertices()
}

/// [`RandomSource`] replaying scripted draws so tests can pin every random
/// decision a generator makes.
///
/// Permutations are served in order and fall back to the identity once the
/// script runs dry. Integer draws are served in order and fall back to
/// `n - 1`, which always selects the largest neighbour count.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    permutations: VecDeque<Vec<usize>>,
    ints: VecDeque<usize>,
    int_calls: usize,
}

impl ScriptedSource {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub(crate) fn with_permutations(
        mut self,
        permutations: impl IntoIterator<Item = Vec<usize>>,
    ) -> Self {
        self.permutations.extend(permutations);
        self
    }

    #[must_use]
    pub(crate) fn with_ints(mut self, ints: impl IntoIterator<Item = usize>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Number of integer draws served so far.
    #[must_use]
    pub(crate) fn int_calls(&self) -> usize {
        self.int_calls
    }
}

impl RandomSource for ScriptedSource {
    fn permutation(&mut self, n: usize) -> Vec<usize> {
        match self.permutations.pop_front() {
            Some(order) => {
                assert_eq!(order.len(), n, "scripted permutation has the wrong length");
                order
            }
            None => (0..n).collect(),
        }
    }

    fn uniform_int(&mut self, n: usize) -> usize {
        self.int_calls += 1;
        let value = self.ints.pop_front().unwrap_or(n - 1);
        assert!(value < n, "scripted draw {value} is outside [0, {n})");
        value
    }
}
