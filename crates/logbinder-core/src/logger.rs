//! Logger and factory capabilities

use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

use crate::{CompositeLogger, Level, Result};

/// A logging backend.
///
/// Implementations are shared between call sites, so they must be
/// `Send + Sync`. A backend may keep internal state (a path, a handle) but
/// never mutates what it is given.
pub trait Logger: Send + Sync {
    /// Whether an event at `level` would be emitted. Must be side-effect free.
    fn is_enabled(&self, level: Level) -> bool;

    /// Emit one event.
    ///
    /// With empty `args` the template is written verbatim. Otherwise it is a
    /// composite format string (see [`format_template`](crate::format_template)).
    /// An attached error is written on the line after the message.
    fn log(
        &self,
        level: Level,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()>;

    /// Human readable identity of the backend, used to annotate failures
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Returns `Some` only for [`CompositeLogger`], which lets composites
    /// flatten each other at construction time.
    fn as_composite(&self) -> Option<&CompositeLogger> {
        None
    }
}

/// Shared handle to a logger
pub type SharedLogger = Arc<dyn Logger>;

/// Maps a caller identity (category name) to a logger
pub trait LoggerFactory: Send + Sync {
    fn create_logger(&self, identity: &str) -> SharedLogger;
}

/// Shared handle to a factory
pub type SharedLoggerFactory = Arc<dyn LoggerFactory>;

/// Backend that is never enabled and discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn is_enabled(&self, _level: Level) -> bool {
        false
    }

    fn log(
        &self,
        _level: Level,
        _error: Option<&(dyn Error + 'static)>,
        _template: &str,
        _args: &[&dyn Display],
    ) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> String {
        "null".to_string()
    }
}
