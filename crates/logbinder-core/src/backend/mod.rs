//! Console and file backends
//!
//! Both render the same line layout:
//!
//! ```text
//! 2026-10-18-14:03:55.1234567 +02:00 [DBG] [1] message
//! <error representation, when an error is attached>
//! ```
//!
//! Every line ends with CRLF.

mod console;
mod file;
mod pretext;

pub use console::{ConsoleLogger, ConsoleTarget};
pub use file::FileLogger;
pub use pretext::{format_timestamp, pretext, render_entry, worker_id};
