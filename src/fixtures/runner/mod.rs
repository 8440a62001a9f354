//! End-to-end verification: count every fixture and compare with its
//! expected counts.

mod counter;
mod executor;
mod outcome;
mod reporter;
mod strategy;

pub use counter::{LineCounter, RegistryLineCounter};
pub use executor::Executor;
pub use outcome::{OutcomeRecord, PlatformInfo, Status, TestOutcome};
pub use reporter::{CategorySummary, Reporter, Summary};
pub use strategy::{DefaultStrategy, StrategyRegistry, TestStrategy, ToleranceStrategy};
