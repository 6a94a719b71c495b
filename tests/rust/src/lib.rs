//! Shared test utilities and fixtures for logbinder integration tests.

use std::error::Error;
use std::fmt::{self, Display};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use logbinder_core::{Level, LogError, Logger, LoggerFactory, Result, SharedLogger};

/// One call observed by a [`SpyLogger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedCall {
    /// Name of the spy that received the call
    pub backend: String,
    pub level: Level,
    pub template: String,
    /// Arguments rendered with `Display`
    pub args: Vec<String>,
    pub error: Option<String>,
}

/// Journal shared between several spies, so fan-out order can be asserted
pub type Journal = Arc<Mutex<Vec<LoggedCall>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// Records every `log` call; enabled from `min` upward
pub struct SpyLogger {
    name: String,
    min: Option<Level>,
    journal: Journal,
    enabled_checks: AtomicUsize,
}

impl SpyLogger {
    /// Spy enabled for every level
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            min: None,
            journal: journal.clone(),
            enabled_checks: AtomicUsize::new(0),
        }
    }

    /// Spy enabled only for `min` and above
    pub fn with_min_level(name: &str, min: Level, journal: &Journal) -> Self {
        Self {
            min: Some(min),
            ..Self::new(name, journal)
        }
    }

    pub fn shared(self) -> SharedLogger {
        Arc::new(self)
    }

    pub fn enabled_checks(&self) -> usize {
        self.enabled_checks.load(Ordering::SeqCst)
    }
}

impl Logger for SpyLogger {
    fn is_enabled(&self, level: Level) -> bool {
        self.enabled_checks.fetch_add(1, Ordering::SeqCst);
        self.min.map_or(true, |min| level >= min)
    }

    fn log(
        &self,
        level: Level,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        self.journal.lock().push(LoggedCall {
            backend: self.name.clone(),
            level,
            template: template.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            error: error.map(|e| e.to_string()),
        });
        Ok(())
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Always fails its writes with an I/O error
pub struct FailingLogger {
    name: String,
}

impl FailingLogger {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn shared(self) -> SharedLogger {
        Arc::new(self)
    }
}

impl Logger for FailingLogger {
    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn log(
        &self,
        _level: Level,
        _error: Option<&(dyn Error + 'static)>,
        _template: &str,
        _args: &[&dyn Display],
    ) -> Result<()> {
        Err(LogError::Io {
            path: PathBuf::from(&self.name),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        })
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

/// Factory that remembers the identities it was asked for
#[derive(Default)]
pub struct SpyFactory {
    pub journal: Journal,
    pub identities: Mutex<Vec<String>>,
}

impl LoggerFactory for SpyFactory {
    fn create_logger(&self, identity: &str) -> SharedLogger {
        self.identities.lock().push(identity.to_string());
        SpyLogger::new(identity, &self.journal).shared()
    }
}

/// A `Display` argument that fails the test if it is ever formatted
pub struct PoisonArg;

impl Display for PoisonArg {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("suppressed log argument was formatted");
    }
}

/// Counts how often it is formatted
#[derive(Default)]
pub struct CountingArg {
    pub count: AtomicUsize,
}

impl Display for CountingArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.count.fetch_add(1, Ordering::SeqCst);
        f.write_str("counted")
    }
}

/// Names of the backends in a journal, in call order
pub fn backends(journal: &Journal) -> Vec<String> {
    journal.lock().iter().map(|c| c.backend.clone()).collect()
}
