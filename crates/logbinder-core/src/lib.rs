//! # logbinder core
//!
//! A small logging facade. Code logs through the [`Logger`] trait; which
//! backend actually writes is decided once at startup by binding a
//! [`LoggerFactory`] to the [`LogRegistry`].
//!
//! ## Modules
//!
//! - `level` / `record` - Level enumeration, log record and template rendering
//! - `logger` - `Logger` and `LoggerFactory` capabilities, null backend
//! - `backend` - Console and file backends
//! - `composite` - Fan-out logger with flattening
//! - `factory` - Factory variants
//! - `registry` - Process-wide and injectable factory binding
//! - `helpers` - Gated per-level helpers and `log_*!` macros
//! - `config` - Startup configuration (JSON / environment)
//!
//! ```ignore
//! use logbinder_core::{logger_for, set_factory, ConsoleLoggerFactory, LoggerExt};
//!
//! set_factory(Arc::new(ConsoleLoggerFactory::default()));
//! let log = logger_for("billing")?;
//! log.info_args("charged {0} cents", &[&amount])?;
//! ```

pub mod backend;
pub mod composite;
pub mod config;
pub mod error;
pub mod factory;
pub mod helpers;
pub mod level;
pub mod logger;
pub mod record;
pub mod registry;

pub use backend::{ConsoleLogger, ConsoleTarget, FileLogger};
pub use composite::{CompositeLogger, FanOutPolicy};
pub use config::LoggingConfig;
pub use error::{ChildFailure, LogError, Result};
pub use factory::{
    CompositeLoggerFactory, ConsoleLoggerFactory, FileLoggerFactory, FixedLoggerFactory,
    NullLoggerFactory,
};
pub use helpers::LoggerExt;
pub use level::Level;
pub use logger::{Logger, LoggerFactory, NullLogger, SharedLogger, SharedLoggerFactory};
pub use record::{format_template, render_error, LogRecord};
pub use registry::{global, logger_for, logger_for_type, set_factory, try_set_factory, LogRegistry};
