//! Factory handing out `tracing`-backed loggers
//!
//! [`TracingLoggerFactory::from_config_file`] owns the `tracing` side of the
//! setup: it reads filter directives from a file, installs a global
//! subscriber with a reloadable filter, and watches the file so edits take
//! effect without a restart.
//!
//! The file holds `tracing-subscriber` `EnvFilter` directives, one or more per
//! line; blank lines and `#` comments are ignored:
//!
//! ```text
//! # everything at info, the facade at debug
//! info
//! logbinder=debug
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use logbinder_core::{LogError, LoggerFactory, SharedLogger};

use crate::TracingLogger;

/// Filter used when the config file has no directives
const DEFAULT_DIRECTIVE: &str = "info";

/// Creates a [`TracingLogger`] per identity
pub struct TracingLoggerFactory {
    /// Kept alive to continue watching the config file
    _watcher: Option<ConfigWatcher>,
}

impl TracingLoggerFactory {
    /// Use whatever subscriber the host application installed
    pub fn new() -> Self {
        Self { _watcher: None }
    }

    /// Set up `tracing` from a directives file and keep it in sync.
    ///
    /// Relative paths are resolved against the executable's directory. Fails
    /// with `InvalidArgument` for a blank path and with `Config` when the file
    /// cannot be read or watched, or a global subscriber is already installed.
    /// Nothing is installed when it fails.
    pub fn from_config_file(path: impl AsRef<Path>) -> logbinder_core::Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(LogError::InvalidArgument {
                name: "config_file",
                reason: "must not be empty or whitespace",
            });
        }
        let path = resolve_config_path(path);

        let watcher = install_subscriber(path, ConfigWatcher::start)?;

        Ok(Self {
            _watcher: Some(watcher),
        })
    }
}

impl Default for TracingLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn create_logger(&self, identity: &str) -> SharedLogger {
        Arc::new(TracingLogger::new(identity))
    }
}

/// Install the global subscriber only after `start_watch` succeeded, so a
/// failed setup can be retried
fn install_subscriber<W>(
    path: PathBuf,
    start_watch: impl FnOnce(FilterReloader) -> Result<W>,
) -> logbinder_core::Result<W> {
    let filter = read_filter(&path).map_err(config_error)?;
    let (filter_layer, handle) = reload::Layer::new(filter);
    let watcher = start_watch(FilterReloader::new(path, handle)).map_err(config_error)?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_ansi(false).with_target(true))
        .try_init()
        .map_err(|e| LogError::Config(format!("cannot install tracing subscriber: {e}")))?;

    Ok(watcher)
}

fn config_error(e: anyhow::Error) -> LogError {
    LogError::Config(format!("{e:#}"))
}

fn resolve_config_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
        .join(path)
}

/// Parse the directives in `content` into one comma-separated filter string
pub fn parse_directives(content: &str) -> String {
    let directives: Vec<&str> = content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .collect();

    if directives.is_empty() {
        DEFAULT_DIRECTIVE.to_string()
    } else {
        directives.join(",")
    }
}

fn read_filter(path: &Path) -> Result<EnvFilter> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tracing config {}", path.display()))?;
    let directives = parse_directives(&content);
    EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid filter directives {directives:?}"))
}

/// Re-reads the config file into a live subscriber's filter
pub struct FilterReloader {
    path: PathBuf,
    handle: reload::Handle<EnvFilter, Registry>,
}

impl FilterReloader {
    pub fn new(path: PathBuf, handle: reload::Handle<EnvFilter, Registry>) -> Self {
        Self { path, handle }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply the file's current directives
    pub fn reload(&self) -> Result<()> {
        let filter = read_filter(&self.path)?;
        self.handle
            .reload(filter)
            .context("tracing subscriber is gone")?;
        info!(path = %self.path.display(), "[TracingConfig] Filter reloaded");
        Ok(())
    }
}

/// Watches the config file's directory and reloads on changes to the file
struct ConfigWatcher {
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    fn start(reloader: FilterReloader) -> Result<Self> {
        let dir = reloader
            .path()
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = reloader.path().file_name().map(|n| n.to_os_string());

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            match res {
                Ok(event) => {
                    // editors often replace the file instead of writing in place
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let touches_config = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                    if touches_config {
                        debug!("Tracing config change detected: {:?}", reloader.path());
                        if let Err(e) = reloader.reload() {
                            warn!("Failed to reload tracing config: {:#}", e);
                        }
                    }
                }
                Err(e) => {
                    error!("Tracing config watcher error: {}", e);
                }
            }
        })?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        info!("Tracing config watcher started for: {:?}", dir);

        Ok(Self { _watcher: watcher })
    }
}
