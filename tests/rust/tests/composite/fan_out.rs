//! Tests for composite fan-out failure handling

use std::sync::Arc;

use pretty_assertions::assert_eq;

use logbinder_core::{
    CompositeLogger, CompositeLoggerFactory, FanOutPolicy, FixedLoggerFactory, Level, LogError,
    Logger, LoggerFactory, SharedLoggerFactory,
};
use tests::{backends, journal, FailingLogger, SpyLogger};

#[test]
fn abort_policy_stops_at_first_failure() {
    let log = journal();
    let composite = CompositeLogger::new([
        SpyLogger::new("before", &log).shared(),
        FailingLogger::new("broken").shared(),
        SpyLogger::new("after", &log).shared(),
    ]);

    let err = composite.log(Level::Error, None, "boom", &[]).unwrap_err();

    // the child's own error, unchanged
    match err {
        LogError::Io { path, source } => {
            assert_eq!(path.to_str(), Some("broken"));
            assert_eq!(source.to_string(), "disk full");
        }
        other => panic!("expected the child's Io error, got {other:?}"),
    }
    assert_eq!(backends(&log), ["before"]);
}

#[test]
fn continue_policy_reaches_every_child_and_reports_all_failures() {
    let log = journal();
    let composite = CompositeLogger::with_policy(
        [
            FailingLogger::new("first").shared(),
            SpyLogger::new("middle", &log).shared(),
            FailingLogger::new("last").shared(),
        ],
        FanOutPolicy::ContinueOnError,
    );

    let err = composite.log(Level::Warning, None, "partial", &[]).unwrap_err();

    let LogError::FanOut(failures) = err else {
        panic!("expected a fan-out error");
    };
    let reported: Vec<(usize, &str)> = failures
        .iter()
        .map(|f| (f.index, f.backend.as_str()))
        .collect();
    assert_eq!(reported, [(0, "first"), (2, "last")]);
    assert!(failures.iter().all(|f| matches!(f.error, LogError::Io { .. })));
    assert_eq!(backends(&log), ["middle"]);
}

#[test]
fn continue_policy_succeeds_when_every_child_does() {
    let log = journal();
    let composite = CompositeLogger::with_policy(
        [
            SpyLogger::new("a", &log).shared(),
            SpyLogger::new("b", &log).shared(),
        ],
        FanOutPolicy::ContinueOnError,
    );

    composite.log(Level::Debug, None, "fine", &[]).unwrap();
    assert_eq!(backends(&log), ["a", "b"]);
}

#[test]
fn fan_out_error_message_names_backends() {
    let composite = CompositeLogger::with_policy(
        [FailingLogger::new("disk").shared()],
        FanOutPolicy::ContinueOnError,
    );

    let message = composite.log(Level::Error, None, "x", &[]).unwrap_err().to_string();

    assert!(message.contains("disk"), "message was {message}");
}

#[test]
fn composite_factory_combines_each_factory_logger() {
    let log = journal();
    let factories: Vec<SharedLoggerFactory> = vec![
        Arc::new(FixedLoggerFactory::from_logger(SpyLogger::new("one", &log))),
        Arc::new(FixedLoggerFactory::from_logger(SpyLogger::new("two", &log))),
    ];
    let factory = CompositeLoggerFactory::with_policy(factories, FanOutPolicy::ContinueOnError);

    let logger = factory.create_logger("orders");
    logger.log(Level::Information, None, "placed {0}", &[&7]).unwrap();

    assert_eq!(logger.as_composite().map(|c| c.policy()), Some(FanOutPolicy::ContinueOnError));
    let calls = log.lock();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| c.template == "placed {0}" && c.args == ["7"]));
}
