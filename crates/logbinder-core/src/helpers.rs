//! Level-specific helpers
//!
//! Every helper asks [`Logger::is_enabled`] first and returns `Ok(())`
//! without looking at its arguments when the level is suppressed. Prefer the
//! `log_*!` macros when computing the arguments is itself expensive: they
//! also skip evaluating the argument expressions.

use std::error::Error;
use std::fmt::Display;

use crate::{Level, Logger, Result};

macro_rules! level_helpers {
    ($level:expr, $plain:ident, $args:ident, $with:ident, $with_args:ident) => {
        fn $plain(&self, message: &str) -> Result<()> {
            self.log_at($level, None, message, &[])
        }

        fn $args(&self, template: &str, args: &[&dyn Display]) -> Result<()> {
            self.log_at($level, None, template, args)
        }

        fn $with(&self, error: &(dyn Error + 'static), message: &str) -> Result<()> {
            self.log_at($level, Some(error), message, &[])
        }

        fn $with_args(
            &self,
            error: &(dyn Error + 'static),
            template: &str,
            args: &[&dyn Display],
        ) -> Result<()> {
            self.log_at($level, Some(error), template, args)
        }
    };
}

/// Gated convenience calls, available on every [`Logger`]
pub trait LoggerExt: Logger {
    /// Forward to [`Logger::log`] only if `level` is enabled
    fn log_at(
        &self,
        level: Level,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.log(level, error, template, args)
    }

    level_helpers!(Level::Debug, debug, debug_args, debug_with, debug_with_args);
    level_helpers!(Level::Information, info, info_args, info_with, info_with_args);
    level_helpers!(Level::Warning, warning, warning_args, warning_with, warning_with_args);
    level_helpers!(Level::Error, error, error_args, error_with, error_with_args);
    level_helpers!(Level::Fatal, fatal, fatal_args, fatal_with, fatal_with_args);
}

impl<L: Logger + ?Sized> LoggerExt for L {}

/// Gated logging at an explicit level.
///
/// Argument expressions are evaluated only when the level is enabled. An
/// error is passed by reference with `error = &err` before the template.
///
/// ```ignore
/// log_at!(logger, Level::Warning, "retrying {0} in {1}ms", host, delay)?;
/// log_at!(logger, Level::Error, error = &err, "request {0} failed", id)?;
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, error = $error:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        let __logger = &$logger;
        let __level: $crate::Level = $level;
        if __logger.is_enabled(__level) {
            let __error: &(dyn ::std::error::Error + 'static) = $error;
            __logger.log(
                __level,
                ::std::option::Option::Some(__error),
                $template,
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            )
        } else {
            ::std::result::Result::Ok(())
        }
    }};
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        let __logger = &$logger;
        let __level: $crate::Level = $level;
        if __logger.is_enabled(__level) {
            __logger.log(
                __level,
                ::std::option::Option::None,
                $template,
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            )
        } else {
            ::std::result::Result::Ok(())
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($rest:tt)+) => { $crate::log_at!($logger, $crate::Level::Debug, $($rest)+) };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)+) => { $crate::log_at!($logger, $crate::Level::Information, $($rest)+) };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($rest:tt)+) => { $crate::log_at!($logger, $crate::Level::Warning, $($rest)+) };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)+) => { $crate::log_at!($logger, $crate::Level::Error, $($rest)+) };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($rest:tt)+) => { $crate::log_at!($logger, $crate::Level::Fatal, $($rest)+) };
}
