//! Bridge from `tracing` into the facade
//!
//! [`FacadeLayer`] lets code instrumented with `tracing` write through
//! whatever backends the facade is configured with:
//!
//! ```ignore
//! let facade = logbinder_core::logger_for("deps")?;
//! tracing_subscriber::registry().with(FacadeLayer::new(facade)).init();
//! ```

use std::fmt::{self, Write as _};

use logbinder_core::SharedLogger;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::logger::{from_tracing_level, TARGET};

/// Forwards every `tracing` event to a facade logger.
///
/// Events emitted by [`TracingLogger`](crate::TracingLogger) (target
/// `logbinder`) and the facade crates' own diagnostics are skipped so that a
/// facade bound back to `tracing` cannot loop. The message
/// is passed as a verbatim template; other fields are appended as
/// `key=value`.
pub struct FacadeLayer {
    logger: SharedLogger,
}

impl FacadeLayer {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for FacadeLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_facade_target(metadata.target()) {
            return;
        }

        let level = from_tracing_level(metadata.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        // a layer has nowhere to return the error to
        if let Err(e) = self.logger.log(level, None, &visitor.finish(), &[]) {
            eprintln!("Warning: facade backend failed to write tracing event: {}", e);
        }
    }
}

/// Crates whose own diagnostics must not re-enter the facade
const FACADE_CRATES: [&str; 2] = ["logbinder_core", "logbinder_tracing"];

fn is_facade_target(target: &str) -> bool {
    target == TARGET
        || FACADE_CRATES.iter().any(|krate| {
            target
                .strip_prefix(krate)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
        })
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}
