//! # Generator Configuration
//!
//! Settings shared by every command of the `hexapi-gen` binary: where the
//! templates live, where generated projects and composed descriptors go, and
//! how logging behaves.
//!
//! ## Sources
//!
//! Later sources win:
//!
//! 1. Built-in defaults ([`GeneratorConfig::default`])
//! 2. A TOML file: the path passed with `--config`, else `hexapi.toml` in the
//!    working directory when it exists
//! 3. Environment variables
//! 4. Command-line flags (applied by the CLI)
//!
//! ## Environment Variables
//!
//! | Variable              | Field          |
//! |-----------------------|----------------|
//! | `HEXAPI_TEMPLATE_DIR` | `template_dir` |
//! | `HEXAPI_OUTPUT_DIR`   | `output_dir`   |
//! | `HEXAPI_WORK_DIR`     | `work_dir`     |
//! | `HEXAPI_LOG_DIR`      | `log_dir`      |
//! | `HEXAPI_LOG_LEVEL`    | `log_level`    |
//! | `HEXAPI_LOG_FORMAT`   | `log_format`   |
//!
//! An empty `HEXAPI_LOG_DIR` (or `log_dir = ""`) turns file logging off.
//!
//! ## Example
//!
//! ```toml
//! template_dir = "templates"
//! output_dir = "output"
//! work_dir = "temp"
//! log_dir = "logs"
//! log_level = "debug"
//! log_format = "json"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "hexapi.toml";

/// Settings for one `hexapi-gen` invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the template catalog
    pub template_dir: PathBuf,
    /// Root under which `<company>/<project>` trees are generated
    pub output_dir: PathBuf,
    /// Directory receiving composed `<Table>.json` descriptors
    pub work_dir: PathBuf,
    /// Directory of the rotating log file; empty disables it
    pub log_dir: PathBuf,
    /// Console log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Console log format: pretty/json
    pub log_format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("output"),
            work_dir: PathBuf::from("temp"),
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Defaults, then the config file, then environment overrides
    ///
    /// # Errors
    ///
    /// Fails when an explicitly given file does not exist, or when the chosen
    /// file cannot be read or parsed.
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit_path {
            Some(path) => load_config_file(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?,
            None => match resolve_config_path(None, Path::new(".")) {
                Some(path) => load_config_file(&path)?.unwrap_or_default(),
                None => GeneratorConfig::default(),
            },
        };
        config.apply_env_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply `HEXAPI_*` overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("HEXAPI_TEMPLATE_DIR") {
            self.template_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("HEXAPI_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("HEXAPI_WORK_DIR") {
            self.work_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("HEXAPI_LOG_DIR") {
            self.log_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("HEXAPI_LOG_LEVEL") {
            self.log_level = v;
        }
        if let Some(v) = lookup("HEXAPI_LOG_FORMAT") {
            self.log_format = v;
        }
    }

    /// Log directory, or `None` when file logging is disabled
    #[must_use]
    pub fn log_dir(&self) -> Option<&Path> {
        if self.log_dir.as_os_str().is_empty() {
            None
        } else {
            Some(&self.log_dir)
        }
    }
}

/// Load a configuration file
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_config_file(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    Ok(Some(config))
}

/// Pick the configuration file to read
///
/// Priority:
/// 1. Explicitly provided path, when it exists
/// 2. `hexapi.toml` in `search_dir`
/// 3. None
#[must_use]
pub fn resolve_config_path(explicit_path: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }
    let candidate = search_dir.join(DEFAULT_CONFIG_FILE);
    candidate.exists().then_some(candidate)
}
