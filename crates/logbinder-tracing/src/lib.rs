//! # logbinder tracing adapter
//!
//! Binds the facade to the `tracing` ecosystem in both directions:
//!
//! - [`TracingLoggerFactory`] hands out [`TracingLogger`]s, which emit facade
//!   events as `tracing` events. It can also own the subscriber setup from a
//!   filter file that is reloaded when it changes.
//! - [`FacadeLayer`] is a `tracing-subscriber` layer that forwards `tracing`
//!   events into any facade logger.
//!
//! ```ignore
//! let factory = TracingLoggerFactory::from_config_file("tracing.conf")?;
//! logbinder_core::set_factory(Arc::new(factory));
//! ```

pub mod factory;
pub mod layer;
pub mod logger;

pub use factory::{parse_directives, FilterReloader, TracingLoggerFactory};
pub use layer::FacadeLayer;
pub use logger::{from_tracing_level, to_tracing_level, TracingLogger, TARGET};
