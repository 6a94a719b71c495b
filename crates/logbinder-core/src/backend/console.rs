//! Console backend

use std::error::Error;
use std::fmt::{self, Display};
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::render_entry;
use crate::{Level, LogError, LogRecord, Logger, Result};

/// Which standard stream the console backend writes to
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl Display for ConsoleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes every event to stdout or stderr. Always enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    target: ConsoleTarget,
}

impl ConsoleLogger {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    /// Render one event into `out` and flush it
    fn write_to<W: Write>(&self, out: &mut W, record: &LogRecord<'_>) -> Result<()> {
        let entry = render_entry(record)?;
        out.write_all(entry.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| LogError::Console {
                target: self.target,
                source,
            })
    }
}

impl Logger for ConsoleLogger {
    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn log(
        &self,
        level: Level,
        error: Option<&(dyn Error + 'static)>,
        template: &str,
        args: &[&dyn Display],
    ) -> Result<()> {
        let record = LogRecord::new(level, error, template, args);
        match self.target {
            ConsoleTarget::Stdout => self.write_to(&mut io::stdout().lock(), &record),
            ConsoleTarget::Stderr => self.write_to(&mut io::stderr().lock(), &record),
        }
    }

    fn name(&self) -> String {
        format!("console:{}", self.target.as_str())
    }
}
