//! Logger factory variants
//!
//! Most factories hand out one shared logger regardless of identity. The
//! composite factory asks each of its factories for a logger and fans out to
//! all of them.

use std::path::Path;
use std::sync::Arc;

use crate::{
    CompositeLogger, ConsoleLogger, ConsoleTarget, FanOutPolicy, FileLogger, Logger,
    LoggerFactory, NullLogger, Result, SharedLogger, SharedLoggerFactory,
};

/// Default factory: every logger is disabled and discards events
#[derive(Clone)]
pub struct NullLoggerFactory {
    logger: SharedLogger,
}

impl NullLoggerFactory {
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NullLogger),
        }
    }
}

impl Default for NullLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for NullLoggerFactory {
    fn create_logger(&self, _identity: &str) -> SharedLogger {
        self.logger.clone()
    }
}

/// Hands out one console logger for every identity
#[derive(Clone)]
pub struct ConsoleLoggerFactory {
    logger: SharedLogger,
}

impl ConsoleLoggerFactory {
    pub fn new(target: ConsoleTarget) -> Self {
        Self {
            logger: Arc::new(ConsoleLogger::new(target)),
        }
    }
}

impl Default for ConsoleLoggerFactory {
    fn default() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }
}

impl LoggerFactory for ConsoleLoggerFactory {
    fn create_logger(&self, _identity: &str) -> SharedLogger {
        self.logger.clone()
    }
}

/// Hands out one file logger, bound to a single path, for every identity
#[derive(Clone)]
pub struct FileLoggerFactory {
    logger: SharedLogger,
}

impl FileLoggerFactory {
    /// Fails with `InvalidArgument` for an empty or whitespace path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let logger = FileLogger::new(path)?;
        Ok(Self {
            logger: Arc::new(logger),
        })
    }
}

impl LoggerFactory for FileLoggerFactory {
    fn create_logger(&self, _identity: &str) -> SharedLogger {
        self.logger.clone()
    }
}

/// Hands out a caller-supplied logger for every identity
#[derive(Clone)]
pub struct FixedLoggerFactory {
    logger: SharedLogger,
}

impl FixedLoggerFactory {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    pub fn from_logger(logger: impl Logger + 'static) -> Self {
        Self::new(Arc::new(logger))
    }
}

impl LoggerFactory for FixedLoggerFactory {
    fn create_logger(&self, _identity: &str) -> SharedLogger {
        self.logger.clone()
    }
}

/// Combines several factories: each identity gets a composite over the
/// loggers every inner factory creates for it.
#[derive(Clone)]
pub struct CompositeLoggerFactory {
    factories: Vec<SharedLoggerFactory>,
    policy: FanOutPolicy,
}

impl CompositeLoggerFactory {
    pub fn new(factories: impl IntoIterator<Item = SharedLoggerFactory>) -> Self {
        Self::with_policy(factories, FanOutPolicy::default())
    }

    pub fn with_policy(
        factories: impl IntoIterator<Item = SharedLoggerFactory>,
        policy: FanOutPolicy,
    ) -> Self {
        Self {
            factories: factories.into_iter().collect(),
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl LoggerFactory for CompositeLoggerFactory {
    fn create_logger(&self, identity: &str) -> SharedLogger {
        let loggers = self.factories.iter().map(|f| f.create_logger(identity));
        Arc::new(CompositeLogger::with_policy(loggers, self.policy))
    }
}
