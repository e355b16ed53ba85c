pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, DEFAULT_TARGETS};
pub use core::{driver::Driver, normalizer::LineEndingNormalizer};
pub use domain::model::{FileOutcome, RunMode, RunReport};
pub use utils::error::{FixLfError, Result};
