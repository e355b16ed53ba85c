use crate::config::{DEFAULT_ROOT, DEFAULT_TARGETS};
use crate::core::TargetProvider;
use crate::utils::error::{FixLfError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TomlConfig {
    pub targets: TargetsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetsConfig {
    pub root: Option<String>,
    pub files: Vec<String>,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self::from_files(DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect())
    }
}

impl TomlConfig {
    pub fn from_files(files: Vec<String>) -> Self {
        Self {
            targets: TargetsConfig { root: None, files },
        }
    }

    /// Load the target list from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| FixLfError::io(path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML after substituting `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FixLfError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unknown variables are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl TargetProvider for TomlConfig {
    fn root_dir(&self) -> &str {
        self.targets.root.as_deref().unwrap_or(DEFAULT_ROOT)
    }

    fn target_files(&self) -> &[String] {
        &self.targets.files
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(root) = &self.targets.root {
            validation::validate_path("targets.root", root)?;
        }
        validation::validate_target_list("targets.files", &self.targets.files)
    }
}
