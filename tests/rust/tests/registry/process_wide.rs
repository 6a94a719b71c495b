//! Tests for the process-wide registry
//!
//! The global binding cannot be reset, so its whole lifecycle is walked in a
//! single test.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use logbinder_core::{
    global, logger_for, logger_for_type, set_factory, try_set_factory, FixedLoggerFactory, Level,
    LoggerExt,
};
use tests::{backends, journal, SpyFactory, SpyLogger};

#[test]
fn global_registry_lifecycle() {
    // unconfigured: lookups succeed, loggers are disabled no-ops
    assert!(!global().is_configured());
    let before = logger_for("startup").unwrap();
    assert!(!before.is_enabled(Level::Fatal));
    before.error("dropped").unwrap();
    assert!(logger_for("").err().unwrap().is_invalid_argument());

    // first binding
    let factory = Arc::new(SpyFactory::default());
    set_factory(factory.clone());
    assert!(global().is_configured());
    logger_for("orders").unwrap().info("created").unwrap();
    logger_for_type::<SpyFactory>().debug("typed").unwrap();
    assert_eq!(backends(&factory.journal), ["orders", "tests::SpyFactory"]);

    // a rejected binding keeps the current one
    assert!(try_set_factory(None).unwrap_err().is_invalid_argument());
    let kept = logger_for("orders").unwrap();

    // replacement is last-write-wins and leaves handed-out loggers alone
    let replaced = journal();
    set_factory(Arc::new(FixedLoggerFactory::from_logger(SpyLogger::new(
        "replacement",
        &replaced,
    ))));
    logger_for("orders").unwrap().warning("after").unwrap();
    kept.warning("kept").unwrap();
    before.fatal("still null").unwrap();

    assert_eq!(backends(&replaced), ["replacement"]);
    assert_eq!(
        backends(&factory.journal),
        ["orders", "tests::SpyFactory", "orders"]
    );
}
