pub mod cli;
pub mod toml_config;

/// Files normalized when no override is given, in processing order.
pub const DEFAULT_TARGETS: [&str; 3] = [
    "Clarinet.toml",
    "contracts/trustwork-marketplace.clar",
    "contracts/usdcx.clar",
];

pub const DEFAULT_ROOT: &str = ".";

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fix-lf")]
#[command(about = "Convert CRLF line endings to LF in the project's tracked files")]
pub struct CliConfig {
    /// Files to normalize instead of the built-in list
    pub paths: Vec<String>,

    /// TOML file providing the target list
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory relative targets are resolved against
    #[arg(long)]
    pub root: Option<String>,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Positional paths win over `--config`, which wins over the built-in list.
    /// `--root` overrides any root from the config file.
    pub fn resolve_targets(&self) -> Result<TomlConfig> {
        let mut config = if !self.paths.is_empty() {
            TomlConfig::from_files(self.paths.clone())
        } else if let Some(path) = &self.config {
            TomlConfig::from_file(path)?
        } else {
            TomlConfig::default()
        };

        if let Some(root) = &self.root {
            config.targets.root = Some(root.clone());
        }

        Ok(config)
    }
}
