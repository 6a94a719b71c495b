//! Startup configuration
//!
//! Chooses the backends that the registry's factory will hand out. Loaded
//! from a JSON file or from environment variables:
//!
//! ```json
//! {
//!   "console": "stdout",
//!   "files": ["logs/app.log"],
//!   "fanOutPolicy": "continueOnError"
//! }
//! ```
//!
//! | Variable            | Meaning                                  |
//! |---------------------|------------------------------------------|
//! | `LOGBINDER_CONSOLE` | `stdout`, `stderr` or `off`              |
//! | `LOGBINDER_FILES`   | `;`-separated list of log file paths     |
//! | `LOGBINDER_FAN_OUT` | `abort` or `continue`                    |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    CompositeLoggerFactory, ConsoleLoggerFactory, ConsoleTarget, FanOutPolicy, FileLoggerFactory,
    LogError, LogRegistry, Result, SharedLoggerFactory,
};

pub const ENV_CONSOLE: &str = "LOGBINDER_CONSOLE";
pub const ENV_FILES: &str = "LOGBINDER_FILES";
pub const ENV_FAN_OUT: &str = "LOGBINDER_FAN_OUT";

/// Which backends to bind at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Console stream, if console output is wanted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console: Option<ConsoleTarget>,

    /// Log files, one backend each
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,

    /// Failure handling when several backends are configured
    #[serde(default)]
    pub fan_out_policy: FanOutPolicy,
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LogError::Config(format!("invalid logging config: {e}")))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "[LoggingConfig] Loaded config file");
        Self::from_json_str(&content)
    }

    /// Read the `LOGBINDER_*` variables, after loading a `.env` file if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let console = match lookup(ENV_CONSOLE).as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => match value.to_lowercase().as_str() {
                "off" | "none" => None,
                "stdout" => Some(ConsoleTarget::Stdout),
                "stderr" => Some(ConsoleTarget::Stderr),
                other => {
                    return Err(LogError::Config(format!(
                        "{ENV_CONSOLE} must be stdout, stderr or off, got {other:?}"
                    )))
                }
            },
        };

        let files = lookup(ENV_FILES)
            .map(|value| {
                value
                    .split(';')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        let fan_out_policy = match lookup(ENV_FAN_OUT) {
            Some(value) if !value.trim().is_empty() => FanOutPolicy::parse(&value).ok_or_else(|| {
                LogError::Config(format!(
                    "{ENV_FAN_OUT} must be abort or continue, got {value:?}"
                ))
            })?,
            _ => FanOutPolicy::default(),
        };

        Ok(Self {
            console,
            files,
            fan_out_policy,
        })
    }

    /// Number of backends this config describes
    pub fn backend_count(&self) -> usize {
        usize::from(self.console.is_some()) + self.files.len()
    }

    /// Build the factory this config describes.
    ///
    /// Returns `None` when no backend is configured, the single backend's
    /// factory when there is one, and a composite factory otherwise.
    pub fn build_factory(&self) -> Result<Option<SharedLoggerFactory>> {
        let mut factories: Vec<SharedLoggerFactory> = Vec::with_capacity(self.backend_count());

        if let Some(target) = self.console {
            factories.push(Arc::new(ConsoleLoggerFactory::new(target)));
        }
        for path in &self.files {
            factories.push(Arc::new(FileLoggerFactory::new(path)?));
        }

        Ok(match factories.len() {
            0 => None,
            1 => factories.pop(),
            _ => Some(Arc::new(CompositeLoggerFactory::with_policy(
                factories,
                self.fan_out_policy,
            ))),
        })
    }

    /// Build the factory and bind it to `registry`.
    ///
    /// A config without backends fails with `InvalidArgument`.
    pub fn install(&self, registry: &LogRegistry) -> Result<()> {
        registry.try_set_factory(self.build_factory()?)?;
        info!(
            console = ?self.console,
            files = self.files.len(),
            policy = ?self.fan_out_policy,
            "[LoggingConfig] Logging backends installed"
        );
        Ok(())
    }
}
