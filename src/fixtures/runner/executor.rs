use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{NxlcError, Result};
use crate::fixtures::model::Fixture;

use super::counter::LineCounter;
use super::outcome::{PlatformInfo, Status, TestOutcome};
use super::strategy::StrategyRegistry;

/// Runs fixtures through a [`LineCounter`] and judges the counts.
pub struct Executor<'a, C: LineCounter> {
    counter: &'a C,
    strategies: &'a StrategyRegistry,
    workers: usize,
    parallel: bool,
    platform: PlatformInfo,
}

impl<'a, C: LineCounter> Executor<'a, C> {
    #[must_use]
    pub fn new(counter: &'a C, strategies: &'a StrategyRegistry) -> Self {
        Self {
            counter,
            strategies,
            workers: 1,
            parallel: true,
            platform: PlatformInfo::current(),
        }
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn execute(&self, fixture: &Fixture) -> TestOutcome {
        let strategy = self.strategies.get(&fixture.language);
        let prepared = strategy.prepare(fixture);
        let start = Instant::now();
        let mut outcome = TestOutcome::new(prepared, self.platform.clone());
        outcome.status = Status::Running;

        if let Err(message) = outcome.fixture.check_file() {
            outcome.status = Status::Error;
            outcome.error = Some(message);
        } else {
            match self.counter.count_file(&outcome.fixture.path) {
                Ok(actual) => {
                    let expected = outcome.fixture.expected;
                    if strategy.validate_result(&expected, &actual) {
                        outcome.status = Status::Passed;
                    } else {
                        outcome.status = Status::Failed;
                        outcome.error = Some(format!(
                            "Count mismatch - Expected: {expected}, Actual: {actual}"
                        ));
                    }
                    outcome.actual = Some(actual);
                }
                Err(e) => {
                    outcome.status = Status::Error;
                    outcome.error = Some(e.to_string());
                }
            }
        }

        outcome.duration = start.elapsed();
        debug!(
            language = %outcome.fixture.language,
            kind = %outcome.fixture.kind,
            status = %outcome.status,
            strategy = strategy.name(),
            "Executed fixture"
        );
        outcome
    }

    /// Runs every fixture, calling `progress(outcome, completed, total)` after
    /// each one. Results keep the order of `fixtures`.
    ///
    /// # Errors
    /// Returns an error if the worker pool cannot be started.
    pub fn execute_all<F>(&self, fixtures: &[Fixture], progress: F) -> Result<Vec<TestOutcome>>
    where
        F: Fn(&TestOutcome, usize, usize) + Sync,
    {
        let total = fixtures.len();
        let completed = AtomicUsize::new(0);
        let run_one = |fixture: &Fixture| {
            let outcome = self.execute(fixture);
            let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
            progress(&outcome, done, total);
            outcome
        };

        if !self.parallel || self.workers <= 1 {
            return Ok(fixtures.iter().map(run_one).collect());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| {
                NxlcError::Config(format!("Failed to start {} workers: {e}", self.workers))
            })?;
        Ok(pool.install(|| fixtures.par_iter().map(run_one).collect()))
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
