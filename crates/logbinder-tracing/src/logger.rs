//! Facade logger backed by `tracing`

use std::error::Error;
use std::fmt::Display;

use logbinder_core::{Level, LogRecord, Logger, Result};

/// Target of every event the adapter emits
pub const TARGET: &str = "logbinder";

/// Map a facade level onto `tracing`. `tracing` has no fatal level, so
/// `Fatal` becomes `ERROR` (events carry `fatal = true`).
pub fn to_tracing_level(level: Level) -> tracing::Level {
    match level {
        Level::Debug => tracing::Level::DEBUG,
        Level::Information => tracing::Level::INFO,
        Level::Warning => tracing::Level::WARN,
        Level::Error | Level::Fatal => tracing::Level::ERROR,
    }
}

/// Map a `tracing` level onto the facade; anything unrecognized is `Debug`
pub fn from_tracing_level(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warning,
        tracing::Level::INFO => Level::Information,
        _ => Level::Debug,
    }
}

/// Emits facade events as `tracing` events with target [`TARGET`]
#[derive(Debug, Clone)]
pub struct TracingLogger {
    identity: String,
}

impl TracingLogger {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

macro_rules! emit {
    ($level:expr, $identity:expr, $error:expr, $message:expr $(, $field:ident = $value:expr)*) => {
        tracing::event!(
            target: TARGET,
            $level,
            identity = %$identity,
            error = $error,
            $($field = $value,)*
            "{}",
            $message
        )
    };
}

impl Logger for TracingLogger {
    /// Defers to the installed subscriber's filter for the mapped level
    fn is_enabled(&self, level: Level) -> bool {
        match to_tracing_level(level) {
            tracing::Level::ERROR => tracing::enabled!(target: TARGET, tracing::Level::ERROR),
            tracing::Level::WARN => tracing::enabled!(target: TARGET, tracing::Level::WARN),
            tracing::Level::INFO => tracing::enabled!(target: TARGET, tracing::Level::INFO),
            tracing::Level::DEBUG => tracing::enabled!(target: TARGET, tracing::Level::DEBUG),
            _ => tracing::enabled!(target: TARGET, tracing::Level::TRACE),
        }
    }

    fn log(
        &self,
        level: Level,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let record = LogRecord::new(level, error, template, args);
        let message = record.message()?;
        let error_text = record.error_text();
        let error_field = error_text.as_deref();

        match level {
            Level::Debug => emit!(tracing::Level::DEBUG, self.identity, error_field, message),
            Level::Information => emit!(tracing::Level::INFO, self.identity, error_field, message),
            Level::Warning => emit!(tracing::Level::WARN, self.identity, error_field, message),
            Level::Error => emit!(tracing::Level::ERROR, self.identity, error_field, message),
            Level::Fatal => emit!(
                tracing::Level::ERROR,
                self.identity,
                error_field,
                message,
                fatal = true
            ),
        }
        Ok(())
    }

    fn name(&self) -> String {
        format!("tracing:{}", self.identity)
    }
}
