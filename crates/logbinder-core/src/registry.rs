//! Factory binding
//!
//! A [`LogRegistry`] holds the factory that turns identities into loggers.
//! It starts out bound to [`NullLoggerFactory`], so library code can log
//! before (or without) the host configuring anything. Binding a factory is
//! last-write-wins and there is no way back to the unconfigured state.
//!
//! Call sites can receive a registry explicitly, or use the process-wide one
//! through [`logger_for`] / [`set_factory`]. Configure the process-wide
//! registry before spawning concurrent work if handoff order matters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::{LogError, NullLoggerFactory, Result, SharedLogger, SharedLoggerFactory};

/// Process-wide registry, created on first access
static GLOBAL: OnceLock<LogRegistry> = OnceLock::new();

/// Holds the currently bound logger factory
pub struct LogRegistry {
    factory: RwLock<SharedLoggerFactory>,
    configured: AtomicBool,
}

impl LogRegistry {
    /// Create an unconfigured registry (bound to the null factory)
    pub fn new() -> Self {
        Self {
            factory: RwLock::new(Arc::new(NullLoggerFactory::new())),
            configured: AtomicBool::new(false),
        }
    }

    /// Create a registry already bound to `factory`
    pub fn with_factory(factory: SharedLoggerFactory) -> Self {
        let registry = Self::new();
        registry.set_factory(factory);
        registry
    }

    /// Get a logger for `identity` from the currently bound factory.
    ///
    /// Fails with `InvalidArgument` for an empty or whitespace identity.
    pub fn logger_for(&self, identity: &str) -> Result<SharedLogger> {
        if identity.trim().is_empty() {
            return Err(LogError::invalid_argument(
                "identity",
                "must not be empty or whitespace",
            ));
        }
        // release the lock before calling into the factory
        let factory = self.factory();
        Ok(factory.create_logger(identity))
    }

    /// Get a logger whose identity is the type name of `T`
    pub fn logger_for_type<T: ?Sized>(&self) -> SharedLogger {
        self.factory().create_logger(std::any::type_name::<T>())
    }

    /// Bind `factory` for all subsequent lookups.
    ///
    /// Loggers handed out earlier keep the backend they were created with.
    pub fn set_factory(&self, factory: SharedLoggerFactory) {
        let mut guard = self.factory.write().unwrap_or_else(PoisonError::into_inner);
        *guard = factory;
        drop(guard);

        let was_configured = self.configured.swap(true, Ordering::AcqRel);
        debug!(replaced = was_configured, "[LogRegistry] Logger factory bound");
    }

    /// Like [`set_factory`](Self::set_factory), for callers where the factory
    /// may be missing. `None` fails with `InvalidArgument` and leaves the
    /// current binding untouched.
    pub fn try_set_factory(&self, factory: Option<SharedLoggerFactory>) -> Result<()> {
        let factory =
            factory.ok_or_else(|| LogError::invalid_argument("factory", "must be provided"))?;
        self.set_factory(factory);
        Ok(())
    }

    /// The currently bound factory
    pub fn factory(&self) -> SharedLoggerFactory {
        // the guarded value is a single Arc, so a poisoned lock still holds a
        // complete value
        self.factory
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a factory has ever been bound explicitly
    pub fn is_configured(&self) -> bool {
        self.configured.load(Ordering::Acquire)
    }
}

impl Default for LogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry
pub fn global() -> &'static LogRegistry {
    GLOBAL.get_or_init(LogRegistry::new)
}

/// [`LogRegistry::logger_for`] on the process-wide registry
pub fn logger_for(identity: &str) -> Result<SharedLogger> {
    global().logger_for(identity)
}

/// [`LogRegistry::logger_for_type`] on the process-wide registry
pub fn logger_for_type<T: ?Sized>() -> SharedLogger {
    global().logger_for_type::<T>()
}

/// [`LogRegistry::set_factory`] on the process-wide registry
pub fn set_factory(factory: SharedLoggerFactory) {
    global().set_factory(factory)
}

/// [`LogRegistry::try_set_factory`] on the process-wide registry
pub fn try_set_factory(factory: Option<SharedLoggerFactory>) -> Result<()> {
    global().try_set_factory(factory)
}
