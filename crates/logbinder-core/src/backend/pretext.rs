//! Line pretext and entry rendering shared by the console and file backends

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local, Timelike};

use crate::record::{LogRecord, LINE_ENDING};
use crate::{Level, Result};

/// Date and time part of the timestamp; a seven digit fraction and the UTC
/// offset follow it
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

static NEXT_WORKER_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static WORKER_ID: Cell<u64> = const { Cell::new(0) };
}

/// Small numeric id of the calling thread, assigned on first use
pub fn worker_id() -> u64 {
    WORKER_ID.with(|id| {
        if id.get() == 0 {
            id.set(NEXT_WORKER_ID.fetch_add(1, Ordering::Relaxed));
        }
        id.get()
    })
}

/// `2026-10-18-14:03:55.1234567 +02:00`
pub fn format_timestamp(now: &DateTime<Local>) -> String {
    // chrono has no 7-digit fraction specifier; ticks are 100ns
    let ticks = now.nanosecond() % 1_000_000_000 / 100;
    format!(
        "{}.{:07} {}",
        now.format(TIMESTAMP_FORMAT),
        ticks,
        now.format("%:z")
    )
}

/// `<timestamp> [<CODE>] [<worker id>]`
pub fn pretext(level: Level) -> String {
    format!(
        "{} [{}] [{}]",
        format_timestamp(&Local::now()),
        level.code(),
        worker_id()
    )
}

/// Render a full entry: the message line and, if present, the error line(s)
pub fn render_entry(record: &LogRecord<'_>) -> Result<String> {
    let message = record.message()?;
    let mut entry = format!("{} {}{}", pretext(record.level), message, LINE_ENDING);
    if let Some(error) = record.error_text() {
        entry.push_str(&error);
        entry.push_str(LINE_ENDING);
    }
    Ok(entry)
}
