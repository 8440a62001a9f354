mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    Config, CustomLanguageConfig, DEFAULT_FIXTURE_DIR, ENV_FIXTURE_DIR, ENV_WORKERS,
    FixturesConfig, OutputConfig, ScannerConfig,
};
pub use validation::validate_config;
