use std::collections::HashMap;

use crate::config::FixturesConfig;
use crate::fixtures::model::{Fixture, LineCount};

/// How one language's fixtures are prepared and judged.
pub trait TestStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Relative tolerance passed to [`LineCount::matches`].
    fn tolerance(&self) -> f64 {
        0.0
    }

    fn prepare(&self, fixture: &Fixture) -> Fixture {
        fixture.clone()
    }

    fn validate_result(&self, expected: &LineCount, actual: &LineCount) -> bool {
        expected.matches(actual, self.tolerance())
    }
}

/// Exact comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl TestStrategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        "default"
    }
}

/// Accepts counts within a relative tolerance.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceStrategy {
    tolerance: f64,
}

impl ToleranceStrategy {
    #[must_use]
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl TestStrategy for ToleranceStrategy {
    fn name(&self) -> &'static str {
        "tolerance"
    }

    fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// Strategies by language name, falling back to a default.
pub struct StrategyRegistry {
    default: Box<dyn TestStrategy>,
    by_language: HashMap<String, Box<dyn TestStrategy>>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_default(Box::new(DefaultStrategy))
    }
}

impl StrategyRegistry {
    #[must_use]
    pub fn with_default(default: Box<dyn TestStrategy>) -> Self {
        Self {
            default,
            by_language: HashMap::new(),
        }
    }

    /// Global tolerance as the default, plus one strategy per
    /// `language_tolerance` entry.
    #[must_use]
    pub fn from_config(config: &FixturesConfig) -> Self {
        let mut registry = if config.tolerance > 0.0 {
            Self::with_default(Box::new(ToleranceStrategy::new(config.tolerance)))
        } else {
            Self::default()
        };
        for (language, &tolerance) in &config.language_tolerance {
            registry.register(language, Box::new(ToleranceStrategy::new(tolerance)));
        }
        registry
    }

    pub fn register(&mut self, language: &str, strategy: Box<dyn TestStrategy>) {
        self.by_language.insert(language.to_lowercase(), strategy);
    }

    #[must_use]
    pub fn get(&self, language: &str) -> &dyn TestStrategy {
        self.by_language
            .get(&language.to_lowercase())
            .map_or(&*self.default, |strategy| &**strategy)
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
